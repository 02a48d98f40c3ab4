//! Documentation generator models
//!
//! Data shapes consumed by the external API documentation generator.
//! These carry no behavior; the generator itself lives outside this crate.

use serde::{Deserialize, Serialize};

/// Output format for generated documentation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocOutputFormat {
    #[default]
    Markdown,
    Json,
}

/// Description of a single documented endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointDoc {
    pub path: String,
    pub method: String,
    pub summary: Option<String>,
    pub include_examples: bool,
    pub include_sql_queries: bool,
}
