use std::collections::HashMap;

use iconik_api::types::{
    Collection, Content, FieldValue, FieldValues, ObjectType, SearchBody, UpdateMetadata,
};
use iconik_api::{Client, PageQuery, SegmentQuery};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[tokio::test]
async fn success_status_with_conforming_body_yields_data() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/assets/v1/collections/c1/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "c1",
            "title": "Playoffs",
            "status": "ACTIVE"
        })))
        .mount(&server)
        .await;

    let client = Client::with_base_url(&server.uri(), "app", "token").unwrap();
    let resp = client.collections().get("c1").await.unwrap();

    assert!(resp.ok());
    assert_eq!(resp.status.as_u16(), 200);
    let collection = resp.data.unwrap();
    assert_eq!(collection.id.as_deref(), Some("c1"));
    assert_eq!(collection.title.as_deref(), Some("Playoffs"));
}

#[tokio::test]
async fn success_status_with_unparsable_body_is_still_ok() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/assets/v1/collections/c1/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&server)
        .await;

    let client = Client::with_base_url(&server.uri(), "app", "token").unwrap();
    let resp = client.collections().get("c1").await.unwrap();

    // Transport success and parse success are independent signals.
    assert!(resp.ok());
    assert!(resp.data.is_none());
    assert_eq!(resp.raw_body, "{not valid json}");
}

#[tokio::test]
async fn failure_status_keeps_raw_fields_inspectable() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/assets/v1/collections/missing/"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(serde_json::json!({"errors": ["collection not found"]})),
        )
        .mount(&server)
        .await;

    let client = Client::with_base_url(&server.uri(), "app", "token").unwrap();
    let resp = client.collections().get("missing").await.unwrap();

    assert!(!resp.ok());
    assert_eq!(resp.status.as_u16(), 404);
    assert!(resp.raw_body.contains("collection not found"));
}

#[tokio::test]
async fn delete_with_empty_204_is_ok_without_data() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/assets/v1/collections/c1/"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = Client::with_base_url(&server.uri(), "app", "token").unwrap();
    let resp = client.collections().delete("c1").await.unwrap();

    assert!(resp.ok());
    assert!(resp.data.is_none());
}

#[tokio::test]
async fn list_endpoint_returns_paged_envelope() {
    let server = MockServer::start().await;
    let body = load_fixture("files.json");

    Mock::given(method("GET"))
        .and(path("/files/v1/assets/0a1b/files/"))
        .and(query_param("per_page", "2"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(body.into_bytes(), "application/json"),
        )
        .mount(&server)
        .await;

    let client = Client::with_base_url(&server.uri(), "app", "token").unwrap();
    let resp = client
        .files()
        .get_asset_files("0a1b", &PageQuery::default().with_per_page(2))
        .await
        .unwrap();

    assert!(resp.ok());
    let files = resp.data.unwrap();
    assert_eq!(files.page, 1);
    assert_eq!(files.pages, 2);
    assert_eq!(files.total, 3);
    assert!(files.objects.len() as i64 <= files.per_page);
    assert_eq!(files.objects[0].name.as_deref(), Some("game7_final.mov"));
}

#[tokio::test]
async fn segment_listing_passes_filters_as_query_params() {
    let server = MockServer::start().await;
    let body = load_fixture("segments.json");

    Mock::given(method("GET"))
        .and(path("/assets/v1/assets/0a1b/segments/"))
        .and(query_param("per_page", "5"))
        .and(query_param("segment_type", "MARKER"))
        .and(query_param("time_end_milliseconds__lte", "60000"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(body.into_bytes(), "application/json"),
        )
        .mount(&server)
        .await;

    let client = Client::with_base_url(&server.uri(), "app", "token").unwrap();
    let query = SegmentQuery::default()
        .with_per_page(5)
        .with_segment_type("MARKER")
        .with_time_end_lte(60000);
    let resp = client.assets().get_segments("0a1b", &query).await.unwrap();

    let segments = resp.data.unwrap();
    assert_eq!(segments.total, 2);
    assert_eq!(
        segments.objects[0].segment_text.as_deref(),
        Some("Curry 3PT jump shot")
    );
}

#[tokio::test]
async fn search_posts_body_and_returns_facets() {
    let server = MockServer::start().await;
    let fixture = load_fixture("search.json");

    let body = SearchBody {
        doc_types: vec!["assets".to_string()],
        query: Some("test".to_string()),
        include_fields: vec!["id".to_string(), "title".to_string()],
        ..Default::default()
    };

    Mock::given(method("POST"))
        .and(path("/search/v1/search/"))
        .and(body_json(&body))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(fixture.into_bytes(), "application/json"),
        )
        .mount(&server)
        .await;

    let client = Client::with_base_url(&server.uri(), "app", "token").unwrap();
    let resp = client
        .search()
        .search(&body, &PageQuery::default())
        .await
        .unwrap();

    assert!(resp.ok());
    let search = resp.data.unwrap();
    assert_eq!(search.results.total, 2);
    assert_eq!(search.results.objects.len(), 2);
    assert!(search.facets.contains_key("object_type"));
}

#[tokio::test]
async fn create_collection_posts_typed_body() {
    let server = MockServer::start().await;

    let body = Collection {
        title: Some("Enders Game".to_string()),
        ..Default::default()
    };

    Mock::given(method("POST"))
        .and(path("/assets/v1/collections/"))
        .and(body_json(&body))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": "c-new",
            "title": "Enders Game",
            "status": "ACTIVE"
        })))
        .mount(&server)
        .await;

    let client = Client::with_base_url(&server.uri(), "app", "token").unwrap();
    let resp = client.collections().create(&body).await.unwrap();

    assert!(resp.ok());
    assert_eq!(resp.data.unwrap().id.as_deref(), Some("c-new"));
}

#[tokio::test]
async fn add_content_to_collection() {
    let server = MockServer::start().await;

    let content = Content {
        object_id: "a1".to_string(),
        object_type: ObjectType::Assets,
    };

    Mock::given(method("POST"))
        .and(path("/assets/v1/collections/c1/contents/"))
        .and(body_json(&content))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "object_id": "a1",
            "object_type": "assets"
        })))
        .mount(&server)
        .await;

    let client = Client::with_base_url(&server.uri(), "app", "token").unwrap();
    let resp = client.collections().add_content("c1", &content).await.unwrap();

    assert!(resp.ok());
    assert_eq!(resp.data.unwrap().object_id.as_deref(), Some("a1"));
}

#[tokio::test]
async fn put_view_metadata_round_trips_field_values() {
    let server = MockServer::start().await;

    let mut values = HashMap::new();
    values.insert(
        "Title".to_string(),
        FieldValues {
            field_values: vec![FieldValue {
                value: "Game 7".to_string(),
            }],
        },
    );
    let metadata = UpdateMetadata {
        metadata_values: values,
    };

    Mock::given(method("PUT"))
        .and(path("/metadata/v1/assets/a1/views/v1/"))
        .and(body_json(&metadata))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "object_id": "a1",
            "object_type": "assets",
            "metadata_values": {
                "Title": { "field_values": [ { "value": "Game 7" } ] }
            }
        })))
        .mount(&server)
        .await;

    let client = Client::with_base_url(&server.uri(), "app", "token").unwrap();
    let resp = client
        .metadata()
        .put_asset_view_metadata("a1", "v1", &metadata)
        .await
        .unwrap();

    assert!(resp.ok());
    let stored = resp.data.unwrap();
    assert_eq!(stored.object_id.as_deref(), Some("a1"));
    assert_eq!(
        stored.metadata_values["Title"].field_values[0].value,
        "Game 7"
    );
}

#[tokio::test]
async fn direct_metadata_update_targets_object_type_path() {
    let server = MockServer::start().await;

    let metadata = UpdateMetadata::default();
    Mock::given(method("PUT"))
        .and(path("/metadata/v1/assets/a1/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "object_id": "a1",
            "object_type": "assets",
            "metadata_values": {}
        })))
        .mount(&server)
        .await;

    let client = Client::with_base_url(&server.uri(), "app", "token").unwrap();
    let resp = client
        .metadata()
        .put_metadata_direct(ObjectType::Assets, "a1", &metadata)
        .await
        .unwrap();

    assert!(resp.ok());
    assert_eq!(resp.data.unwrap().object_type.as_deref(), Some("assets"));
}

#[tokio::test]
async fn auth_headers_are_attached_to_api_requests() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/assets/v1/assets/a1/"))
        .and(wiremock::matchers::header("App-ID", "my-app"))
        .and(wiremock::matchers::header("Auth-Token", "my-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": "a1"})))
        .mount(&server)
        .await;

    let client = Client::with_base_url(&server.uri(), "my-app", "my-token").unwrap();
    let resp = client.assets().get("a1").await.unwrap();
    assert!(resp.ok());
    assert_eq!(resp.data.unwrap().id.as_deref(), Some("a1"));
}
