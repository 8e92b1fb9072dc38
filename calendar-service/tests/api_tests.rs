mod common;

use chrono::Duration;
use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_create_account_success() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/accounts")
        .json(&json!({
            "username": "nicola",
            "password": "pass_word!",
            "full_name": "Nicola Example",
            "email": "nicola@example.com"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["username"], "nicola");
    assert_eq!(body["data"]["full_name"], "Nicola Example");
    assert_eq!(body["data"]["email"], "nicola@example.com");
    assert_eq!(body["data"]["role"], "user");
    assert_eq!(body["data"]["disabled"], false);
    assert!(body["data"]["created_at"].is_string());
}

#[tokio::test]
async fn test_create_account_response_never_contains_credentials() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/accounts")
        .json(&json!({
            "username": "nicola",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);

    let raw = response.text().await.expect("Failed to read response");
    assert!(!raw.contains("password"));
    assert!(!raw.contains("argon2"));
    assert!(!raw.contains("pass_word!"));
}

#[tokio::test]
async fn test_create_account_duplicate_username() {
    let app = TestApp::spawn().await;

    // Create first account
    app.post("/api/accounts")
        .json(&json!({
            "username": "nicola",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    // Try to register the same username again
    let response = app
        .post("/api/accounts")
        .json(&json!({
            "username": "nicola",
            "password": "other_password"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .contains("already exists"));
}

#[tokio::test]
async fn test_create_account_invalid_username() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/accounts")
        .json(&json!({
            "username": "n",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .contains("minimum 3 characters"));
}

#[tokio::test]
async fn test_create_account_invalid_email() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/accounts")
        .json(&json!({
            "username": "nicola",
            "password": "pass_word!",
            "email": "not-an-email"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .to_lowercase()
        .contains("email"));
}

#[tokio::test]
async fn test_create_account_unrecognized_role() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/accounts")
        .json(&json!({
            "username": "nicola",
            "password": "pass_word!",
            "role": "superuser"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["message"].as_str().unwrap().contains("role"));
}

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::spawn().await;

    // Create account
    app.post("/api/accounts")
        .json(&json!({
            "username": "nicola",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    // Login
    let response = app
        .post("/api/auth/login")
        .json(&json!({
            "username": "nicola",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["access_token"].is_string());
    assert!(!body["data"]["access_token"].as_str().unwrap().is_empty());
    assert_eq!(body["data"]["token_type"], "Bearer");
}

#[tokio::test]
async fn test_login_rejections_are_uniform() {
    let app = TestApp::spawn().await;

    app.post("/api/accounts")
        .json(&json!({
            "username": "nicola",
            "password": "Correct_Password!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    // Wrong password for an existing account
    let wrong_password = app
        .post("/api/auth/login")
        .json(&json!({
            "username": "nicola",
            "password": "Wrong_Password!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    // Unknown username
    let unknown_user = app
        .post("/api/auth/login")
        .json(&json!({
            "username": "nonexistent",
            "password": "Wrong_Password!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_user.status(), StatusCode::UNAUTHORIZED);

    // The two rejections must be byte-for-byte indistinguishable
    let first: serde_json::Value = wrong_password
        .json()
        .await
        .expect("Failed to parse response");
    let second: serde_json::Value = unknown_user.json().await.expect("Failed to parse response");
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_event_creation_and_listing() {
    let app = TestApp::spawn().await;

    app.post("/api/accounts")
        .json(&json!({
            "username": "nicola",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    let login = app
        .post("/api/auth/login")
        .json(&json!({
            "username": "nicola",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");
    let login_body: serde_json::Value = login.json().await.expect("Failed to parse response");
    let token = login_body["data"]["access_token"]
        .as_str()
        .unwrap()
        .to_string();

    let create = app
        .post_authenticated("/api/events", &token)
        .json(&json!({
            "title": "Standup",
            "description": "Daily sync",
            "start_time": "2024-06-01T09:00:00Z",
            "end_time": "2024-06-01T09:15:00Z",
            "user_defined": true
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(create.status(), StatusCode::CREATED);
    let create_body: serde_json::Value = create.json().await.expect("Failed to parse response");
    assert!(create_body["data"]["id"].is_string());

    let list = app
        .get_authenticated("/api/events", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(list.status(), StatusCode::OK);
    let list_body: serde_json::Value = list.json().await.expect("Failed to parse response");
    let events = list_body["data"].as_array().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["id"], create_body["data"]["id"]);
    assert_eq!(events[0]["title"], "Standup");
    assert_eq!(events[0]["description"], "Daily sync");
    assert_eq!(events[0]["user_defined"], true);
    // Owner comes from the token, not the request body
    assert_eq!(events[0]["owner"], "nicola");
}

#[tokio::test]
async fn test_listing_only_returns_own_events() {
    let app = TestApp::spawn().await;

    for username in ["alice", "bob"] {
        app.post("/api/accounts")
            .json(&json!({
                "username": username,
                "password": "pass_word!"
            }))
            .send()
            .await
            .expect("Failed to execute request");
    }

    let mut tokens = Vec::new();
    for username in ["alice", "bob"] {
        let login = app
            .post("/api/auth/login")
            .json(&json!({
                "username": username,
                "password": "pass_word!"
            }))
            .send()
            .await
            .expect("Failed to execute request");
        let body: serde_json::Value = login.json().await.expect("Failed to parse response");
        tokens.push(body["data"]["access_token"].as_str().unwrap().to_string());
    }

    for (token, title) in [(&tokens[0], "alice-1"), (&tokens[0], "alice-2"), (&tokens[1], "bob-1")]
    {
        let response = app
            .post_authenticated("/api/events", token)
            .json(&json!({
                "title": title,
                "description": "shared calendar test",
                "start_time": "2024-06-01T09:00:00Z",
                "end_time": "2024-06-01T10:00:00Z",
                "user_defined": true
            }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let alice_list = app
        .get_authenticated("/api/events", &tokens[0])
        .send()
        .await
        .expect("Failed to execute request");
    let alice_body: serde_json::Value = alice_list.json().await.expect("Failed to parse response");
    let alice_events = alice_body["data"].as_array().unwrap();
    assert_eq!(alice_events.len(), 2);
    assert!(alice_events.iter().all(|e| e["owner"] == "alice"));

    let bob_list = app
        .get_authenticated("/api/events", &tokens[1])
        .send()
        .await
        .expect("Failed to execute request");
    let bob_body: serde_json::Value = bob_list.json().await.expect("Failed to parse response");
    let bob_events = bob_body["data"].as_array().unwrap();
    assert_eq!(bob_events.len(), 1);
    assert_eq!(bob_events[0]["owner"], "bob");
}

#[tokio::test]
async fn test_admin_listing_spans_all_owners() {
    let app = TestApp::spawn().await;

    app.post("/api/accounts")
        .json(&json!({
            "username": "alice",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    app.post("/api/accounts")
        .json(&json!({
            "username": "root_admin",
            "password": "admin_password!",
            "role": "admin"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    let alice_login = app
        .post("/api/auth/login")
        .json(&json!({
            "username": "alice",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");
    let alice_body: serde_json::Value =
        alice_login.json().await.expect("Failed to parse response");
    let alice_token = alice_body["data"]["access_token"]
        .as_str()
        .unwrap()
        .to_string();

    app.post_authenticated("/api/events", &alice_token)
        .json(&json!({
            "title": "Private meeting",
            "description": "alice only",
            "start_time": "2024-06-01T09:00:00Z",
            "end_time": "2024-06-01T10:00:00Z",
            "user_defined": true
        }))
        .send()
        .await
        .expect("Failed to execute request");

    let admin_login = app
        .post("/api/auth/login")
        .json(&json!({
            "username": "root_admin",
            "password": "admin_password!"
        }))
        .send()
        .await
        .expect("Failed to execute request");
    let admin_body: serde_json::Value =
        admin_login.json().await.expect("Failed to parse response");
    let admin_token = admin_body["data"]["access_token"]
        .as_str()
        .unwrap()
        .to_string();

    let response = app
        .get_authenticated("/api/admin/events", &admin_token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let events = body["data"].as_array().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["owner"], "alice");
}

#[tokio::test]
async fn test_admin_endpoint_forbidden_for_regular_accounts() {
    let app = TestApp::spawn().await;

    app.post("/api/accounts")
        .json(&json!({
            "username": "alice",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    let login = app
        .post("/api/auth/login")
        .json(&json!({
            "username": "alice",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");
    let body: serde_json::Value = login.json().await.expect("Failed to parse response");
    let token = body["data"]["access_token"].as_str().unwrap().to_string();

    let response = app
        .get_authenticated("/api/admin/events", &token)
        .send()
        .await
        .expect("Failed to execute request");

    // Authenticated but not authorized: 403, never 401
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "Insufficient permissions");
}

#[tokio::test]
async fn test_admin_endpoint_requires_a_token() {
    let app = TestApp::spawn().await;

    // Unauthenticated: 401, never 403
    let response = app
        .get("/api/admin/events")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_guarded_routes_reject_missing_or_malformed_credentials() {
    let app = TestApp::spawn().await;

    // No Authorization header
    let response = app
        .get("/api/events")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Wrong scheme
    let response = app
        .get("/api/events")
        .header("Authorization", "Basic abc123")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Garbage token
    let response = app
        .get_authenticated("/api/events", "not.a.token")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_disabled_account_logs_in_but_cannot_touch_events() {
    let app = TestApp::spawn().await;

    app.post("/api/accounts")
        .json(&json!({
            "username": "dormant",
            "password": "pass_word!",
            "disabled": true
        }))
        .send()
        .await
        .expect("Failed to execute request");

    // A disabled account still authenticates
    let login = app
        .post("/api/auth/login")
        .json(&json!({
            "username": "dormant",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(login.status(), StatusCode::OK);

    let body: serde_json::Value = login.json().await.expect("Failed to parse response");
    let token = body["data"]["access_token"].as_str().unwrap().to_string();

    // But the event routes lock it out with 403, not 401
    let list = app
        .get_authenticated("/api/events", &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(list.status(), StatusCode::FORBIDDEN);

    let create = app
        .post_authenticated("/api/events", &token)
        .json(&json!({
            "title": "Standup",
            "description": "Daily sync",
            "start_time": "2024-06-01T09:00:00Z",
            "end_time": "2024-06-01T09:15:00Z",
            "user_defined": true
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(create.status(), StatusCode::FORBIDDEN);

    let body: serde_json::Value = create.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "inactive user");
}

#[tokio::test]
async fn test_expired_token_rejected() {
    let app = TestApp::spawn_with_ttl(Duration::seconds(1)).await;

    app.post("/api/accounts")
        .json(&json!({
            "username": "nicola",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    let login = app
        .post("/api/auth/login")
        .json(&json!({
            "username": "nicola",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");
    let body: serde_json::Value = login.json().await.expect("Failed to parse response");
    let token = body["data"]["access_token"].as_str().unwrap().to_string();

    // Fresh token works
    let response = app
        .get_authenticated("/api/events", &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    tokio::time::sleep(std::time::Duration::from_secs(2)).await;

    // Same token after expiry does not
    let response = app
        .get_authenticated("/api/events", &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_for_removed_subject_rejected() {
    let app = TestApp::spawn().await;

    // Valid signature, but the subject was never registered; the guard's
    // directory lookup must reject it
    let token = app
        .token_service
        .issue("ghost")
        .expect("Failed to issue test token");

    let response = app
        .get_authenticated("/api/events", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
