//! Search request schema
//!
//! Validated request shape for the multi-index search endpoint. The tab
//! selector is a closed enum; anything outside it fails deserialization
//! before any database or index interaction happens.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::utils::errors::StoreError;

/// Which index a search request targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchTab {
    Teachers,
    Groups,
    Disciplines,
}

impl SearchTab {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchTab::Teachers => "teachers",
            SearchTab::Groups => "groups",
            SearchTab::Disciplines => "disciplines",
        }
    }
}

impl fmt::Display for SearchTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchTab {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "teachers" => Ok(SearchTab::Teachers),
            "groups" => Ok(SearchTab::Groups),
            "disciplines" => Ok(SearchTab::Disciplines),
            other => Err(StoreError::InvalidInput(format!(
                "Unknown search tab: {other}"
            ))),
        }
    }
}

/// Inbound search request: tab selector plus free-text phrase.
///
/// The phrase carries no length or content constraint; empty is accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    pub search_tab: SearchTab,
    pub search_phrase: String,
}
