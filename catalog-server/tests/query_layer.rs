//! Query layer behavior (active / search / filtered_search) against an
//! in-memory store.
//! Run: cargo test -p catalog-server --test query_layer

use catalog_server::db::DbService;
use catalog_server::db::models::{Cafe, CafeCreate, MenuItemCreate};
use catalog_server::db::repository::{CafeRepository, Crud, MenuItemRepository};
use chrono::NaiveTime;
use rust_decimal::Decimal;

async fn repos() -> (CafeRepository, MenuItemRepository) {
    let service = DbService::memory().await.unwrap();
    (
        CafeRepository::new(service.db.clone()),
        MenuItemRepository::new(service.db),
    )
}

fn cafe(name: &str, location: &str, is_active: bool) -> CafeCreate {
    CafeCreate {
        name: name.to_string(),
        location: location.to_string(),
        opening_time: NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
        closing_time: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
        is_active: Some(is_active),
        thumbnail: None,
    }
}

/// Mixed data state used by most cases:
/// - "Blue Bottle" (5th Ave, active) — name match
/// - "Blue Mountain" (Harbor Rd, inactive) — name match, inactive
/// - "Green Leaf" (Blue Street, active) — location match
/// - "Roast House" (Main St, active) — no match
async fn seed_cafes(cafes: &CafeRepository) {
    for (name, location, active) in [
        ("Blue Bottle", "5th Ave", true),
        ("Blue Mountain", "Harbor Rd", false),
        ("Green Leaf", "Blue Street", true),
        ("Roast House", "Main St", true),
    ] {
        cafes.create(cafe(name, location, active), None).await.unwrap();
    }
}

fn names(result: &[Cafe]) -> Vec<&str> {
    result.iter().map(|c| c.name.as_str()).collect()
}

#[tokio::test]
async fn search_matches_name_and_location_case_insensitively() {
    let (cafes, _items) = repos().await;
    seed_cafes(&cafes).await;

    let found = cafes.search("BLUE", false).await.unwrap();
    assert_eq!(names(&found), ["Blue Bottle", "Blue Mountain", "Green Leaf"]);
}

#[tokio::test]
async fn search_empty_term_yields_the_unfiltered_set() {
    let (cafes, _items) = repos().await;
    seed_cafes(&cafes).await;

    let found = cafes.search("", false).await.unwrap();
    assert_eq!(
        names(&found),
        ["Blue Bottle", "Blue Mountain", "Green Leaf", "Roast House"]
    );
}

#[tokio::test]
async fn filtered_search_drops_inactive_matches() {
    let (cafes, _items) = repos().await;
    seed_cafes(&cafes).await;

    let found = cafes.search("blue", true).await.unwrap();
    assert_eq!(names(&found), ["Blue Bottle", "Green Leaf"]);
}

#[tokio::test]
async fn filtered_search_is_a_subset_of_active_and_search() {
    let service = DbService::memory().await.unwrap();
    let cafes = CafeRepository::new(service.db.clone());
    seed_cafes(&cafes).await;

    for term in ["blue", "ave", "house", "", "zzz"] {
        let filtered = cafes.search(term, true).await.unwrap();
        let searched = cafes.search(term, false).await.unwrap();
        let active: Vec<Cafe> = CafeRepository::query()
            .active()
            .fetch(&service.db)
            .await
            .unwrap();

        for cafe in &filtered {
            assert!(
                searched.iter().any(|c| c.slug == cafe.slug),
                "filtered result {} missing from search({term})",
                cafe.slug
            );
            assert!(
                active.iter().any(|c| c.slug == cafe.slug),
                "filtered result {} is not active",
                cafe.slug
            );
        }
    }
}

#[tokio::test]
async fn menu_item_search_covers_description_and_availability() {
    let (cafes, items) = repos().await;
    cafes.create(cafe("Blue Bottle", "5th Ave", true), None).await.unwrap();

    for (name, slug, description, available) in [
        ("Latte", "latte", Some("Silky espresso with milk"), true),
        ("Mocha", "mocha", Some("Espresso with cocoa"), false),
        ("Green Tea", "green-tea", None, true),
    ] {
        items
            .create(
                MenuItemCreate {
                    cafe_slug: "blue-bottle".to_string(),
                    name: name.to_string(),
                    slug: Some(slug.to_string()),
                    description: description.map(str::to_string),
                    price: Decimal::new(400, 2),
                    is_available: Some(available),
                },
                None,
            )
            .await
            .unwrap();
    }

    // Description matches are OR-ed with name matches
    let espresso = items.search("espresso", false).await.unwrap();
    let found: Vec<_> = espresso.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(found, ["Latte", "Mocha"]);

    // filtered_search keeps only available items
    let available = items.search("espresso", true).await.unwrap();
    let found: Vec<_> = available.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(found, ["Latte"]);

    // Items without a description still match on name
    let tea = items.search("green", false).await.unwrap();
    assert_eq!(tea.len(), 1);
    assert_eq!(tea[0].name, "Green Tea");
}
