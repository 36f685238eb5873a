//! Store bootstrap behavior: schema application and reopen.
//! Run: cargo test -p catalog-server --test db_service

use catalog_server::db::DbService;
use catalog_server::db::models::CafeCreate;
use catalog_server::db::repository::{CafeRepository, Crud};
use chrono::NaiveTime;

fn cafe(name: &str) -> CafeCreate {
    CafeCreate {
        name: name.to_string(),
        location: "5th Ave".to_string(),
        opening_time: NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
        closing_time: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
        is_active: Some(true),
        thumbnail: None,
    }
}

#[tokio::test]
async fn memory_store_applies_schema() {
    // Uniqueness comes from the schema's indexes, so a fresh store must
    // already reject duplicates
    let service = DbService::memory().await.unwrap();
    let repo = CafeRepository::new(service.db);

    repo.create(cafe("Blue Bottle"), None).await.unwrap();
    assert!(repo.create(cafe("Blue Bottle"), None).await.is_err());
}

#[tokio::test]
async fn disk_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.db");
    let path_str = path.to_string_lossy().to_string();

    {
        let service = DbService::new(&path_str).await.unwrap();
        let repo = CafeRepository::new(service.db);
        repo.create(cafe("Blue Bottle"), None).await.unwrap();
    }

    // Second open must tolerate the already-applied schema and still see
    // the data
    let service = DbService::new(&path_str).await.unwrap();
    let repo = CafeRepository::new(service.db);
    let fetched = repo.get("blue-bottle").await.unwrap();
    assert_eq!(fetched.name, "Blue Bottle");
}
