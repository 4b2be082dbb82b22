//! Integration tests for image upload and proxying.

mod helpers;

use axum::http::{StatusCode, header};

const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\nnot-really-a-png";

#[tokio::test]
async fn test_png_upload_is_retrievable() {
    let app = helpers::TestApp::new();

    let uploaded = app.upload("roof.png", "image/png", PNG_BYTES).await;
    assert_eq!(uploaded.status, StatusCode::OK, "{:?}", uploaded.body);

    let filename = uploaded.body["filename"].as_str().unwrap().to_string();
    let url = uploaded.body["url"].as_str().unwrap().to_string();
    assert!(filename.ends_with(".png"));
    assert_eq!(url, format!("/api/images/{filename}"));

    let fetched = app.get_raw(&url).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body, PNG_BYTES);
    assert_eq!(
        fetched.headers.get(header::CONTENT_TYPE).unwrap(),
        "image/png"
    );
    assert_eq!(
        fetched.headers.get(header::CACHE_CONTROL).unwrap(),
        "public, max-age=31536000"
    );
}

#[tokio::test]
async fn test_text_upload_is_rejected_and_not_stored() {
    let app = helpers::TestApp::new();

    let response = app.upload("notes.txt", "text/plain", b"hello").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body["detail"],
        "Invalid file type. Allowed types: image/jpeg, image/png, image/gif, image/webp"
    );
    assert!(app.blobs.is_empty().await);
}

#[tokio::test]
async fn test_missing_image_is_404() {
    let app = helpers::TestApp::new();

    let response = app.get_raw("/api/images/does-not-exist.png").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
