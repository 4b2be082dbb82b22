//! Integration tests for listing search and owner-gated mutation.

mod helpers;

use axum::http::StatusCode;
use serde_json::{Value, json};

async fn create(app: &helpers::TestApp, token: &str, body: Value) -> Value {
    let response = app
        .request("POST", "/api/listings", Some(body), Some(token))
        .await;
    assert_eq!(
        response.status,
        StatusCode::OK,
        "Create failed: {:?}",
        response.body
    );
    response.body
}

fn titles(body: &Value) -> Vec<String> {
    body.as_array()
        .expect("expected a JSON array")
        .iter()
        .map(|l| l["title"].as_str().unwrap_or_default().to_string())
        .collect()
}

#[tokio::test]
async fn test_sugar_cottage_scenario() {
    let app = helpers::TestApp::new();
    let token = app.user_with_token("hansel").await;

    let created = create(
        &app,
        &token,
        json!({
            "title": "Sugar Cottage",
            "price": 100.0,
            "address": "1 Candy Ln",
            "neighborhood": "Candy Hills",
            "num_rooms": 3,
            "has_gumdrop_garden": true
        }),
    )
    .await;

    assert_eq!(created["listing_type"], "cottage");
    assert_eq!(created["status"], "available");
    assert_eq!(created["has_gumdrop_garden"], true);
    assert!(created["owner_id"].is_i64());

    let hits = app
        .request(
            "GET",
            "/api/listings?search=sugar&min_rooms=2&has_gumdrop_garden=true",
            None,
            None,
        )
        .await;
    assert_eq!(hits.status, StatusCode::OK);
    assert_eq!(titles(&hits.body), vec!["Sugar Cottage".to_string()]);

    let misses = app
        .request("GET", "/api/listings?min_rooms=4", None, None)
        .await;
    assert!(titles(&misses.body).is_empty());

    let neighborhoods = app.request("GET", "/api/neighborhoods", None, None).await;
    assert_eq!(neighborhoods.status, StatusCode::OK);
    assert_eq!(neighborhoods.body, json!(["Candy Hills"]));
}

#[tokio::test]
async fn test_gumdrop_garden_flag_flip_changes_filter_results() {
    let app = helpers::TestApp::new();
    let token = app.user_with_token("hansel").await;

    let created = create(
        &app,
        &token,
        json!({
            "title": "Sugar Cottage",
            "price": 100.0,
            "address": "1 Candy Ln",
            "has_gumdrop_garden": false
        }),
    )
    .await;
    assert_eq!(created["has_gumdrop_garden"], false);

    let with_garden = app
        .request("GET", "/api/listings?has_gumdrop_garden=true", None, None)
        .await;
    assert_eq!(with_garden.status, StatusCode::OK);
    assert!(titles(&with_garden.body).is_empty());

    let affordable = app
        .request("GET", "/api/listings?max_price=150", None, None)
        .await;
    assert_eq!(titles(&affordable.body), vec!["Sugar Cottage"]);

    let updated = app
        .request(
            "PUT",
            &format!("/api/listings/{}", created["id"]),
            Some(json!({"has_gumdrop_garden": true})),
            Some(&token),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["has_gumdrop_garden"], true);

    let with_garden = app
        .request("GET", "/api/listings?has_gumdrop_garden=true", None, None)
        .await;
    assert_eq!(titles(&with_garden.body), vec!["Sugar Cottage"]);
}

#[tokio::test]
async fn test_create_then_get_returns_supplied_values() {
    let app = helpers::TestApp::new();
    let token = app.user_with_token("builder").await;

    let created = create(
        &app,
        &token,
        json!({
            "title": "Licorice Castle",
            "description": "Turrets of black licorice",
            "price": 950000.0,
            "address": "7 Tower Rd",
            "listing_type": "castle",
            "status": "pending",
            "frosting_type": "royal icing",
            "square_feet": 12000
        }),
    )
    .await;

    let id = created["id"].as_i64().unwrap();
    let fetched = app
        .request("GET", &format!("/api/listings/{id}"), None, None)
        .await;

    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body, created);
    assert_eq!(fetched.body["listing_type"], "castle");
    assert_eq!(fetched.body["status"], "pending");
    assert_eq!(fetched.body["square_feet"], 12000);
}

#[tokio::test]
async fn test_unknown_listing_is_404() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/listings/999", None, None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["detail"], "Listing not found");
}

#[tokio::test]
async fn test_create_requires_authentication() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/listings",
            Some(json!({"title": "Hut", "price": 1.0, "address": "2 Mint St"})),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_rejects_negative_price() {
    let app = helpers::TestApp::new();
    let token = app.user_with_token("builder").await;

    let response = app
        .request(
            "POST",
            "/api/listings",
            Some(json!({"title": "Hut", "price": -5.0, "address": "2 Mint St"})),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_filters_and_pagination() {
    let app = helpers::TestApp::new();
    let token = app.user_with_token("agent").await;

    for (i, kind) in ["cottage", "mansion", "cabin", "castle", "townhouse"]
        .iter()
        .enumerate()
    {
        create(
            &app,
            &token,
            json!({
                "title": format!("House {i}"),
                "price": 100.0 * (i as f64 + 1.0),
                "address": format!("{i} Frosting Way"),
                "listing_type": kind,
            }),
        )
        .await;
    }

    // Newest first.
    let all = app.request("GET", "/api/listings", None, None).await;
    assert_eq!(
        titles(&all.body),
        vec!["House 4", "House 3", "House 2", "House 1", "House 0"]
    );

    let page = app
        .request("GET", "/api/listings?skip=1&limit=2", None, None)
        .await;
    assert_eq!(titles(&page.body), vec!["House 3", "House 2"]);

    let past_end = app
        .request("GET", "/api/listings?skip=10", None, None)
        .await;
    assert!(titles(&past_end.body).is_empty());

    let priced = app
        .request("GET", "/api/listings?min_price=200&max_price=400", None, None)
        .await;
    assert_eq!(titles(&priced.body), vec!["House 3", "House 2", "House 1"]);
    for listing in priced.body.as_array().unwrap() {
        let price = listing["price"].as_f64().unwrap();
        assert!((200.0..=400.0).contains(&price));
    }

    let castles = app
        .request("GET", "/api/listings?listing_type=castle", None, None)
        .await;
    assert_eq!(titles(&castles.body), vec!["House 3"]);

    let inverted = app
        .request("GET", "/api/listings?min_price=500&max_price=100", None, None)
        .await;
    assert!(titles(&inverted.body).is_empty());
}

#[tokio::test]
async fn test_invalid_enum_in_query_is_400() {
    let app = helpers::TestApp::new();

    let response = app
        .request("GET", "/api/listings?listing_type=igloo", None, None)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_non_finite_price_bound_is_400() {
    let app = helpers::TestApp::new();

    let response = app
        .request("GET", "/api/listings?min_price=NaN", None, None)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["detail"], "Price bounds must be finite numbers");
}

#[tokio::test]
async fn test_gumdrop_garden_query_accepts_numeric_flag() {
    let app = helpers::TestApp::new();
    let token = app.user_with_token("hansel").await;
    create(
        &app,
        &token,
        json!({"title": "Gumdrop Villa", "price": 80.0, "address": "3 Jelly Rd", "has_gumdrop_garden": true}),
    )
    .await;
    create(
        &app,
        &token,
        json!({"title": "Plain Hut", "price": 20.0, "address": "4 Crumb Ct"}),
    )
    .await;

    let with_garden = app
        .request("GET", "/api/listings?has_gumdrop_garden=1", None, None)
        .await;
    assert_eq!(with_garden.status, StatusCode::OK);
    assert_eq!(titles(&with_garden.body), vec!["Gumdrop Villa"]);

    let without_garden = app
        .request("GET", "/api/listings?has_gumdrop_garden=0", None, None)
        .await;
    assert_eq!(titles(&without_garden.body), vec!["Plain Hut"]);

    let invalid = app
        .request("GET", "/api/listings?has_gumdrop_garden=maybe", None, None)
        .await;
    assert_eq!(invalid.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_partial_update_is_idempotent() {
    let app = helpers::TestApp::new();
    let token = app.user_with_token("owner").await;
    let created = create(
        &app,
        &token,
        json!({
            "title": "Gumdrop Cabin",
            "price": 300.0,
            "address": "3 Pine Rd",
            "neighborhood": "Peppermint Forest"
        }),
    )
    .await;
    let path = format!("/api/listings/{}", created["id"]);
    let changes = json!({"status": "sold", "neighborhood": null});

    let first = app
        .request("PUT", &path, Some(changes.clone()), Some(&token))
        .await;
    let second = app.request("PUT", &path, Some(changes), Some(&token)).await;

    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(second.status, StatusCode::OK);
    assert_eq!(first.body["status"], "sold");
    assert!(first.body["neighborhood"].is_null());
    assert_eq!(first.body["title"], "Gumdrop Cabin");
    assert!(first.body["updated_at"].is_string());

    for field in ["title", "price", "status", "neighborhood", "owner_id"] {
        assert_eq!(first.body[field], second.body[field], "field {field}");
    }
}

#[tokio::test]
async fn test_non_owner_cannot_modify() {
    let app = helpers::TestApp::new();
    let owner = app.user_with_token("owner").await;
    let intruder = app.user_with_token("intruder").await;

    let created = create(
        &app,
        &owner,
        json!({"title": "Toffee Townhouse", "price": 250.0, "address": "9 Caramel Ct"}),
    )
    .await;
    let path = format!("/api/listings/{}", created["id"]);

    let update = app
        .request("PUT", &path, Some(json!({"price": 1.0})), Some(&intruder))
        .await;
    assert_eq!(update.status, StatusCode::FORBIDDEN);
    assert_eq!(update.body["detail"], "Not authorized to edit this listing");

    let delete = app.request("DELETE", &path, None, Some(&intruder)).await;
    assert_eq!(delete.status, StatusCode::FORBIDDEN);
    assert_eq!(delete.body["detail"], "Not authorized to delete this listing");

    let unchanged = app.request("GET", &path, None, None).await;
    assert_eq!(unchanged.body, created);
}

#[tokio::test]
async fn test_owner_can_delete() {
    let app = helpers::TestApp::new();
    let token = app.user_with_token("owner").await;
    let created = create(
        &app,
        &token,
        json!({"title": "Fudge Mansion", "price": 5000.0, "address": "1 Cocoa Blvd"}),
    )
    .await;
    let path = format!("/api/listings/{}", created["id"]);

    let deleted = app.request("DELETE", &path, None, Some(&token)).await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(deleted.body["message"], "Listing deleted successfully");

    let gone = app.request("GET", &path, None, None).await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);

    let again = app.request("DELETE", &path, None, Some(&token)).await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}
