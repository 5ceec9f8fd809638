use iconik_api::types::{Files, SearchResponse, Segments, StorageMethod};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_files_page() {
    let json = load_fixture("files.json");
    let files: Files = serde_json::from_str(&json).unwrap();

    assert_eq!(files.page, 1);
    assert_eq!(files.pages, 2);
    assert_eq!(files.per_page, 2);
    assert_eq!(files.total, 3);
    assert!(files.next_url.is_some());
    assert!(files.prev_url.is_none());
    assert_eq!(files.objects.len(), 2);

    let gcs = &files.objects[0];
    assert_eq!(gcs.storage_method, StorageMethod::Gcs);
    assert!(gcs.upload_url.is_some());
    assert!(gcs.multipart_upload_url.is_none());
    assert_eq!(gcs.size, Some(734003200));
    assert!(gcs.date_created.is_some());

    let s3 = &files.objects[1];
    assert_eq!(s3.storage_method, StorageMethod::S3);
    assert!(s3.upload_url.is_none());
    assert!(s3.multipart_upload_url.is_some());
}

#[test]
fn deserialize_search_response_with_facets() {
    let json = load_fixture("search.json");
    let search: SearchResponse = serde_json::from_str(&json).unwrap();

    assert_eq!(search.results.total, 2);
    assert_eq!(search.results.objects.len(), 2);
    assert!(search.facets.contains_key("object_type"));

    let first = &search.results.objects[0];
    assert_eq!(first.title.as_deref(), Some("Test clip one"));
    assert_eq!(first.proxies.len(), 1);
    assert_eq!(first.proxies[0].storage_method, StorageMethod::S3);
    assert_eq!(first.in_collections, vec!["c-playoffs"]);

    let second = &search.results.objects[1];
    assert_eq!(second.keyframes.len(), 1);
    let keyframe = &second.keyframes[0];
    assert_eq!(keyframe.keyframe_type.as_deref(), Some("POSTER"));
    assert_eq!(keyframe.resolution.as_ref().unwrap().width, Some(1920));
}

#[test]
fn deserialize_segments_page() {
    let json = load_fixture("segments.json");
    let segments: Segments = serde_json::from_str(&json).unwrap();

    assert_eq!(segments.total, 2);
    assert_eq!(segments.objects[0].segment_type.as_deref(), Some("MARKER"));
    assert_eq!(segments.objects[0].time_start_milliseconds, Some(1024));
    assert!(segments.objects[1].metadata_view_id.is_none());
}

#[test]
fn unknown_storage_method_survives_the_round_trip() {
    let json = r#"{"id": "p1", "storage_method": "AZURE_BLOB"}"#;
    let proxy: iconik_api::types::Proxy = serde_json::from_str(json).unwrap();
    assert_eq!(
        proxy.storage_method,
        StorageMethod::Other("AZURE_BLOB".to_string())
    );

    let back = serde_json::to_value(&proxy).unwrap();
    assert_eq!(back["storage_method"], "AZURE_BLOB");
}

#[test]
fn malformed_page_body_is_a_parse_error() {
    let result = serde_json::from_str::<Files>(r#"{"objects": not valid}"#);
    assert!(result.is_err());
}
