//! Integration tests for registration, login and the current-user endpoint.

mod helpers;

use axum::http::{StatusCode, header};

#[tokio::test]
async fn test_register_login_me_round_trip() {
    let app = helpers::TestApp::new();

    let response = app
        .register("hansel@example.com", "hansel", "breadcrumbs")
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["email"], "hansel@example.com");
    assert_eq!(response.body["is_active"], true);
    assert!(response.body.get("hashed_password").is_none());
    assert!(response.body.get("password").is_none());

    let token = app.login("hansel", "breadcrumbs").await;
    let me = app.request("GET", "/api/auth/me", None, Some(&token)).await;

    assert_eq!(me.status, StatusCode::OK);
    assert_eq!(me.body["email"], "hansel@example.com");
    assert_eq!(me.body["username"], "hansel");
    assert_eq!(me.body["id"], response.body["id"]);
}

#[tokio::test]
async fn test_register_does_not_check_email_format() {
    let app = helpers::TestApp::new();

    let response = app.register("gretel", "gretel", "breadcrumbs").await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["email"], "gretel");
}

#[tokio::test]
async fn test_login_returns_bearer_token_type() {
    let app = helpers::TestApp::new();
    app.register("gretel@example.com", "gretel", "breadcrumbs")
        .await;

    let response = app.login_raw("gretel", "breadcrumbs").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["token_type"], "bearer");
    assert!(response.body["access_token"].as_str().is_some());
}

#[tokio::test]
async fn test_duplicate_email_is_rejected() {
    let app = helpers::TestApp::new();
    app.register("witch@example.com", "witch", "candyhouse")
        .await;

    let response = app
        .register("witch@example.com", "other", "candyhouse")
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["detail"], "Email already registered");
}

#[tokio::test]
async fn test_duplicate_username_is_rejected() {
    let app = helpers::TestApp::new();
    app.register("witch@example.com", "witch", "candyhouse")
        .await;

    let response = app
        .register("second@example.com", "witch", "candyhouse")
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["detail"], "Username already taken");
}

#[tokio::test]
async fn test_short_password_is_rejected() {
    let app = helpers::TestApp::new();

    let response = app.register("short@example.com", "short", "1234567").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body["detail"],
        "Password must be at least 8 characters"
    );
}

#[tokio::test]
async fn test_login_wrong_password_and_unknown_user_look_the_same() {
    let app = helpers::TestApp::new();
    app.register("hansel@example.com", "hansel", "breadcrumbs")
        .await;

    let wrong_password = app.login_raw("hansel", "pebbles!!").await;
    let unknown_user = app.login_raw("nobody", "breadcrumbs").await;

    for response in [&wrong_password, &unknown_user] {
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
        assert_eq!(response.body["detail"], "Incorrect username or password");
        assert_eq!(
            response.headers.get(header::WWW_AUTHENTICATE).unwrap(),
            "Bearer"
        );
    }
}

#[tokio::test]
async fn test_me_requires_token() {
    let app = helpers::TestApp::new();

    let missing = app.request("GET", "/api/auth/me", None, None).await;
    assert_eq!(missing.status, StatusCode::UNAUTHORIZED);

    let garbage = app
        .request("GET", "/api/auth/me", None, Some("not-a-jwt"))
        .await;
    assert_eq!(garbage.status, StatusCode::UNAUTHORIZED);
    assert_eq!(garbage.body["detail"], "Could not validate credentials");
}

#[tokio::test]
async fn test_root_and_health() {
    let app = helpers::TestApp::new();

    let root = app.request("GET", "/", None, None).await;
    assert_eq!(root.status, StatusCode::OK);
    assert_eq!(root.body["message"], "Welcome to Listhub API");

    let health = app.request("GET", "/api/health", None, None).await;
    assert_eq!(health.status, StatusCode::OK);
    assert_eq!(health.body["status"], "ok");
    assert_eq!(health.body["database"], "connected");
    assert_eq!(health.body["storage"], "available");
}
