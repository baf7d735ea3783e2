//! Integration tests for the region and event endpoints.

mod helpers;

use http::StatusCode;

use paralympics_entity::event::NewEvent;
use paralympics_entity::region::Region;

async fn seeded_app() -> helpers::TestApp {
    let app = helpers::TestApp::new().await;
    for (noc, name) in [("GBR", "UK"), ("AUS", "Australia")] {
        app.state
            .region_repo
            .create(&Region {
                noc: noc.to_string(),
                region: name.to_string(),
                notes: String::new(),
            })
            .await
            .unwrap();
    }
    for (year, host, noc) in [(2012, "London", "GBR"), (2000, "Sydney", "AUS")] {
        app.state
            .event_repo
            .create(&NewEvent {
                event_type: "summer".to_string(),
                year,
                host: host.to_string(),
                noc: noc.to_string(),
                ..NewEvent::default()
            })
            .await
            .unwrap();
    }
    app
}

#[tokio::test]
async fn test_health() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["database"], "connected");
}

#[tokio::test]
async fn test_regions_are_public_and_ordered() {
    let app = seeded_app().await;

    let response = app.request("GET", "/regions", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    let nocs: Vec<&str> = response
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["NOC"].as_str().unwrap())
        .collect();
    assert_eq!(nocs, ["AUS", "GBR"]);
}

#[tokio::test]
async fn test_events_are_ordered_by_year() {
    let app = seeded_app().await;

    let response = app.request("GET", "/events", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    let years: Vec<i64> = response
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["year"].as_i64().unwrap())
        .collect();
    assert_eq!(years, [2000, 2012]);
}

#[tokio::test]
async fn test_unknown_region_and_event_are_404() {
    let app = seeded_app().await;

    let response = app.request("GET", "/regions/XYZ", None, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "NOT_FOUND");

    let response = app.request("GET", "/events/999", None, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_and_delete_region_with_token() {
    let app = seeded_app().await;
    let user_id = app.create_test_user("editor@example.com", "password123").await;
    let token = app.token_for(user_id);

    let response = app
        .request(
            "POST",
            "/regions",
            Some(serde_json::json!({"NOC": "CAN", "region": "Canada"})),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["NOC"], "CAN");

    let response = app.request("GET", "/regions/CAN", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["region"], "Canada");

    let response = app.request("DELETE", "/regions/CAN", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let response = app.request("DELETE", "/regions/CAN", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_duplicate_region_conflicts() {
    let app = seeded_app().await;
    let user_id = app.create_test_user("editor@example.com", "password123").await;
    let token = app.token_for(user_id);

    let response = app
        .request(
            "POST",
            "/regions",
            Some(serde_json::json!({"NOC": "GBR", "region": "Great Britain"})),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_create_event_with_token() {
    let app = seeded_app().await;
    let user_id = app.create_test_user("editor@example.com", "password123").await;
    let token = app.token_for(user_id);

    let response = app
        .request(
            "POST",
            "/events",
            Some(serde_json::json!({
                "type": "winter",
                "year": 2010,
                "country": "Canada",
                "host": "Vancouver",
                "NOC": "CAN",
                "participants": 502,
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    let id = response.body["id"].as_i64().unwrap();
    assert_eq!(response.body["participants"], 502);

    let response = app.request("GET", &format!("/events/{id}"), None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["host"], "Vancouver");
}

#[tokio::test]
async fn test_invalid_event_is_rejected() {
    let app = seeded_app().await;
    let user_id = app.create_test_user("editor@example.com", "password123").await;
    let token = app.token_for(user_id);

    let response = app
        .request(
            "POST",
            "/events",
            Some(serde_json::json!({
                "type": "autumn",
                "year": 2010,
                "host": "Vancouver",
                "NOC": "CAN",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_event_requires_token() {
    let app = seeded_app().await;
    let events = app.state.event_repo.find_all().await.unwrap();
    let path = format!("/events/{}", events[0].id);

    let response = app.request("DELETE", &path, None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let user_id = app.create_test_user("editor@example.com", "password123").await;
    let response = app
        .request("DELETE", &path, None, Some(&app.token_for(user_id)))
        .await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let response = app.request("GET", &path, None, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
