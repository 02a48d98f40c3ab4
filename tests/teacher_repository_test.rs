//! Integration tests for the teacher repository

mod helpers;

use assert_matches::assert_matches;
use helpers::TestDatabase;
use serial_test::serial;
use ttable_store::models::group::ActivityFilter;
use ttable_store::models::outcome::CreateOutcome;
use ttable_store::models::teacher::CreateTeacherRequest;
use ttable_store::TeacherRepository;

fn create_request(fio: &str) -> CreateTeacherRequest {
    CreateTeacherRequest {
        fio: fio.to_string(),
    }
}

#[tokio::test]
#[serial]
async fn test_list_respects_limit_and_offset() {
    let db = TestDatabase::new().await.expect("Failed to set up database");
    db.cleanup().await.expect("Failed to cleanup");
    let repo = TeacherRepository::new(db.pool.clone());

    for i in 0..4 {
        db.seed_teacher(&format!("Иванов И.И. {i}"), true)
            .await
            .expect("Failed to seed teacher");
    }

    let page = repo
        .list(&ActivityFilter::default(), 3, 0)
        .await
        .expect("Failed to list teachers");
    assert_eq!(page.len(), 3);

    let rest = repo
        .list(&ActivityFilter::default(), 3, 3)
        .await
        .expect("Failed to list teachers");
    assert_eq!(rest.len(), 1);
}

#[tokio::test]
#[serial]
async fn test_list_activity_filter() {
    let db = TestDatabase::new().await.expect("Failed to set up database");
    db.cleanup().await.expect("Failed to cleanup");
    let repo = TeacherRepository::new(db.pool.clone());

    db.seed_teacher("Иванов И.И.", true)
        .await
        .expect("Failed to seed teacher");
    db.seed_teacher("Петров П.П.", false)
        .await
        .expect("Failed to seed teacher");

    let filter = ActivityFilter {
        is_active: Some(true),
    };
    let active = repo
        .list(&filter, 10, 0)
        .await
        .expect("Failed to list teachers");
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].fio, "Иванов И.И.");
}

#[tokio::test]
#[serial]
async fn test_create_is_idempotent_on_fio() {
    let db = TestDatabase::new().await.expect("Failed to set up database");
    db.cleanup().await.expect("Failed to cleanup");
    let repo = TeacherRepository::new(db.pool.clone());

    let first = repo
        .create(&create_request("Сидорова А.В."))
        .await
        .expect("Failed to create teacher");
    let id = match first {
        CreateOutcome::Created(id) => id,
        CreateOutcome::AlreadyExists => panic!("first insert must create a row"),
    };
    assert!(id > 0);

    let second = repo
        .create(&create_request("Сидорова А.В."))
        .await
        .expect("Failed to create teacher");
    assert_matches!(second, CreateOutcome::AlreadyExists);

    let count = db
        .count_records("teachers")
        .await
        .expect("Failed to count teachers");
    assert_eq!(count, 1);
}

#[tokio::test]
#[serial]
async fn test_switch_status_contract() {
    let db = TestDatabase::new().await.expect("Failed to set up database");
    db.cleanup().await.expect("Failed to cleanup");
    let repo = TeacherRepository::new(db.pool.clone());

    let (activated, deprecated) = repo
        .switch_status(&[], &[])
        .await
        .expect("Failed to switch status");
    assert_eq!((activated, deprecated), (0, 0));

    let id = db
        .seed_teacher("Иванов И.И.", true)
        .await
        .expect("Failed to seed teacher");

    let (activated, deprecated) = repo
        .switch_status(&[], &[id, id + 1000])
        .await
        .expect("Failed to switch status");
    assert_eq!((activated, deprecated), (0, 1));

    let all = repo
        .list_for_index()
        .await
        .expect("Failed to dump teachers");
    assert!(!all.iter().find(|t| t.id == id).unwrap().is_active);
}

#[tokio::test]
#[serial]
async fn test_concurrent_create_single_winner() {
    let db = TestDatabase::new().await.expect("Failed to set up database");
    db.cleanup().await.expect("Failed to cleanup");
    let repo = TeacherRepository::new(db.pool.clone());

    let repo_a = repo.clone();
    let repo_b = repo.clone();
    let task_a = tokio::spawn(async move { repo_a.create(&create_request("Гонкин Г.Г.")).await });
    let task_b = tokio::spawn(async move { repo_b.create(&create_request("Гонкин Г.Г.")).await });

    let outcome_a = task_a
        .await
        .expect("Task panicked")
        .expect("Failed to create teacher");
    let outcome_b = task_b
        .await
        .expect("Task panicked")
        .expect("Failed to create teacher");

    let created = [outcome_a, outcome_b]
        .iter()
        .filter(|o| o.created_id().is_some())
        .count();
    assert!(created <= 1);

    let count = db
        .count_records("teachers")
        .await
        .expect("Failed to count teachers");
    assert_eq!(count, 1);
}
