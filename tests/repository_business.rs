use localbiz_api::domain::entities::{Business, BusinessFilter, ContactInfo};
use localbiz_api::domain::repositories::BusinessRepository;
use localbiz_api::infrastructure::persistence::MemBusinessRepository;

fn business(id: &str, name: &str, category: &str) -> Business {
    Business {
        id: id.to_string(),
        name: name.to_string(),
        description: format!("{} does quality work", name),
        category: category.to_string(),
        location: "New York, NY".to_string(),
        rating: 4.5,
        services: vec![],
        contact: ContactInfo {
            email: format!("hello@{}.example", id),
            phone: "555-0100".to_string(),
            address: "1 Main St".to_string(),
        },
    }
}

#[tokio::test]
async fn test_list_returns_append_order_each_once() {
    let repo = MemBusinessRepository::new();

    repo.create(business("b1", "Home Pro Services", "home"))
        .await
        .unwrap();
    repo.create(business("b2", "Auto Fix", "auto")).await.unwrap();
    repo.create(business("b3", "Garden Care", "garden"))
        .await
        .unwrap();

    let all = repo.list(&BusinessFilter::default()).await.unwrap();
    let ids: Vec<&str> = all.iter().map(|b| b.id.as_str()).collect();

    assert_eq!(ids, vec!["b1", "b2", "b3"]);
}

#[tokio::test]
async fn test_list_empty_collection_is_empty_not_error() {
    let repo = MemBusinessRepository::new();

    let all = repo.list(&BusinessFilter::default()).await.unwrap();
    assert!(all.is_empty());

    let filtered = repo
        .list(&BusinessFilter {
            search: Some("anything".to_string()),
            category: None,
        })
        .await
        .unwrap();
    assert!(filtered.is_empty());
}

#[tokio::test]
async fn test_filtered_scan_preserves_order() {
    let repo = MemBusinessRepository::new();

    repo.create(business("b1", "Home Pro Services", "home"))
        .await
        .unwrap();
    repo.create(business("b2", "Auto Fix", "auto")).await.unwrap();
    repo.create(business("b3", "Home Helpers", "home"))
        .await
        .unwrap();

    let filter = BusinessFilter {
        search: None,
        category: Some("HOME".to_string()),
    };
    let matched = repo.list(&filter).await.unwrap();
    let ids: Vec<&str> = matched.iter().map(|b| b.id.as_str()).collect();

    assert_eq!(ids, vec!["b1", "b3"]);
}

#[tokio::test]
async fn test_find_by_id_missing_is_none() {
    let repo = MemBusinessRepository::new();
    repo.create(business("b1", "Home Pro Services", "home"))
        .await
        .unwrap();

    assert!(repo.find_by_id("never-appended").await.unwrap().is_none());
    assert!(repo.find_by_id("b1").await.unwrap().is_some());
}

#[tokio::test]
async fn test_count_tracks_appends() {
    let repo = MemBusinessRepository::new();
    assert_eq!(repo.count().await.unwrap(), 0);

    repo.create(business("b1", "Home Pro Services", "home"))
        .await
        .unwrap();
    assert_eq!(repo.count().await.unwrap(), 1);

    repo.create(business("b2", "Auto Fix", "auto")).await.unwrap();
    assert_eq!(repo.count().await.unwrap(), 2);
}
