//! Integration tests for walking paginated collections.

use mystore_api::rest::{resources, ResourceClient};
use mystore_api::{ErrorKind, HostUrl, MystoreConfig, RestClient, RestError, Session};
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> RestClient {
    let session = Session::from_parts("demo", "test-token", "Importer/1.0").unwrap();
    let config = MystoreConfig::builder()
        .api_host(HostUrl::new(server.uri()).unwrap())
        .build();
    RestClient::new(&session, Some(&config))
}

fn products(ids: &[u32]) -> Vec<Value> {
    ids.iter()
        .map(|id| json!({"type": "products", "id": id.to_string()}))
        .collect()
}

/// Mounts pages 2 and 3 before page 1 so the unfiltered page-1 matcher
/// never shadows them.
async fn mount_three_pages(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/shops/demo/products"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": products(&[3]),
            "links": {"next": "products?page=3"}
        })))
        .expect(1)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/shops/demo/products"))
        .and(query_param("page", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": products(&[4, 5]),
            "links": {"self": "products?page=3"}
        })))
        .expect(1)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/shops/demo/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": products(&[1, 2]),
            "links": {"next": format!("{}/shops/demo/products?page=2", server.uri())}
        })))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_three_pages_are_fetched_exactly_once_each() {
    let server = MockServer::start().await;
    mount_three_pages(&server).await;

    let client = client_for(&server);
    let items = client.paginate("products").collect_all().await.unwrap();

    let ids: Vec<&str> = items.iter().map(|item| item["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
}

#[tokio::test]
async fn test_lazy_walk_yields_page_by_page() {
    let server = MockServer::start().await;
    mount_three_pages(&server).await;

    let client = client_for(&server);
    let mut walker = client.paginate("products");

    let mut sizes = Vec::new();
    while let Some(page) = walker.next_page().await.unwrap() {
        sizes.push(page.len());
    }

    assert_eq!(sizes, vec![2, 1, 2]);
    assert_eq!(walker.pages_fetched(), 3);
    assert!(walker.is_exhausted());
}

#[tokio::test]
async fn test_resource_list_walks_every_page() {
    let server = MockServer::start().await;
    mount_three_pages(&server).await;

    let client = client_for(&server);
    let ids = ResourceClient::new(&client, resources::PRODUCTS)
        .list_ids(None)
        .await
        .unwrap();

    assert_eq!(ids.len(), 5);
    assert_eq!(ids[4].to_string(), "5");
}

#[tokio::test]
async fn test_page_without_data_is_malformed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/shops/demo/categories"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"errors": []})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/shops/demo/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"type": "categories", "id": "1"}],
            "links": {"next": "categories?page=2"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let error = client.paginate("categories").collect_all().await.unwrap_err();

    assert!(matches!(error, RestError::MalformedResponse { .. }));
    assert_eq!(error.kind(), ErrorKind::MalformedResponse);
}

#[tokio::test]
async fn test_error_page_aborts_the_walk() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/shops/demo/orders"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let error = client.paginate("orders").collect_all().await.unwrap_err();
    assert_eq!(error.kind(), ErrorKind::ResponseError);
}

#[tokio::test]
async fn test_empty_page_is_not_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/shops/demo/redirects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": [], "links": {}})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let items = client.paginate("redirects").collect_all().await.unwrap();
    assert!(items.is_empty());
}

#[tokio::test]
async fn test_root_relative_next_link_keeps_store_prefix_once() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/shops/demo/manufacturers"))
        .and(query_param("page[number]", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"type": "manufacturers", "id": "2"}],
            "links": {"next": null}
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/shops/demo/manufacturers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"type": "manufacturers", "id": "1"}],
            "links": {"next": "/shops/demo/manufacturers?page[number]=2"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let items = client.paginate("manufacturers").collect_all().await.unwrap();

    let ids: Vec<&str> = items.iter().map(|item| item["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["1", "2"]);
}

#[tokio::test]
async fn test_path_relative_next_link_resolves_under_store() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/shops/demo/discounts"))
        .and(query_param("page[number]", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"type": "discounts", "id": "8"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/shops/demo/discounts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"type": "discounts", "id": "7"}],
            "links": {"next": "discounts?page[number]=2"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let items = client.paginate("discounts").collect_all().await.unwrap();
    assert_eq!(items.len(), 2);
}

#[tokio::test]
async fn test_next_link_back_to_the_same_page_stops_the_walk() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/shops/demo/tax-classes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"type": "tax-classes", "id": "1"}],
            "links": {"next": format!("{}/shops/demo/tax-classes", server.uri())}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let error = client.paginate("tax-classes").collect_all().await.unwrap_err();
    assert_eq!(error.kind(), ErrorKind::MalformedResponse);
}
