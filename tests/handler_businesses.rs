mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use localbiz_api::api::handlers::{business_detail_handler, business_list_handler};
use localbiz_api::state::AppState;

fn business_router(state: AppState) -> Router {
    Router::new()
        .route("/api/businesses", get(business_list_handler))
        .route("/api/businesses/{id}", get(business_detail_handler))
        .with_state(state)
}

#[tokio::test]
async fn test_list_businesses_unfiltered_returns_seed() {
    let state = common::seeded_state().await;
    let server = TestServer::new(business_router(state)).unwrap();

    let response = server.get("/api/businesses").await;
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let businesses = json.as_array().unwrap();
    assert_eq!(businesses.len(), 1);
    assert_eq!(businesses[0]["id"], "home-pro-services");
    assert_eq!(businesses[0]["name"], "Home Pro Services");
    assert_eq!(businesses[0]["category"], "home");
    assert_eq!(businesses[0]["rating"], 4.8);
    assert_eq!(businesses[0]["services"][0]["name"], "Basic Home Inspection");
    assert_eq!(businesses[0]["contact"]["email"], "contact@homepro.com");
}

#[tokio::test]
async fn test_list_businesses_empty_collection() {
    let state = common::create_test_state();
    let server = TestServer::new(business_router(state)).unwrap();

    let response = server.get("/api/businesses").await;
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_search_matches_name() {
    let state = common::seeded_state().await;
    let server = TestServer::new(business_router(state)).unwrap();

    let response = server.get("/api/businesses").add_query_param("search", "home").await;
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let businesses = json.as_array().unwrap();
    assert_eq!(businesses.len(), 1);
    assert_eq!(businesses[0]["name"], "Home Pro Services");
}

#[tokio::test]
async fn test_search_no_match_returns_empty_list_not_404() {
    let state = common::seeded_state().await;
    let server = TestServer::new(business_router(state)).unwrap();

    let response = server.get("/api/businesses").add_query_param("search", "xyz").await;
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_category_filter_is_case_insensitive() {
    let state = common::seeded_state().await;
    let server = TestServer::new(business_router(state)).unwrap();

    let response = server
        .get("/api/businesses")
        .add_query_param("category", "HOME")
        .await;
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let businesses = json.as_array().unwrap();
    assert_eq!(businesses.len(), 1);
    assert_eq!(businesses[0]["id"], "home-pro-services");
}

#[tokio::test]
async fn test_category_filter_no_match() {
    let state = common::seeded_state().await;
    let server = TestServer::new(business_router(state)).unwrap();

    let response = server
        .get("/api/businesses")
        .add_query_param("category", "auto")
        .await;
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_filters_combine_with_and() {
    let state = common::seeded_state().await;
    let server = TestServer::new(business_router(state)).unwrap();

    let response = server
        .get("/api/businesses")
        .add_query_param("search", "home")
        .add_query_param("category", "auto")
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>().as_array().unwrap().len(), 0);

    let response = server
        .get("/api/businesses")
        .add_query_param("search", "home")
        .add_query_param("category", "home")
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>().as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_empty_query_params_do_not_filter() {
    let state = common::seeded_state().await;
    let server = TestServer::new(business_router(state)).unwrap();

    let response = server
        .get("/api/businesses")
        .add_query_param("search", "")
        .add_query_param("category", "")
        .await;
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_business_detail_found() {
    let state = common::seeded_state().await;
    let server = TestServer::new(business_router(state)).unwrap();

    let response = server.get("/api/businesses/home-pro-services").await;
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["name"], "Home Pro Services");
    assert_eq!(json["location"], "New York, NY");
}

#[tokio::test]
async fn test_business_detail_unknown_id_is_404() {
    let state = common::seeded_state().await;
    let server = TestServer::new(business_router(state)).unwrap();

    let response = server.get("/api/businesses/never-appended").await;
    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
}
