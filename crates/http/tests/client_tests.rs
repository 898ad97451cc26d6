//! Integration tests for the FancySpaces HTTP client

use base64::Engine;
use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use chrono::{Duration, TimeZone, Utc};
use fancyspaces_core::{ClientConfig, MemoryStorage, NotificationQueue, SessionStore};
use fancyspaces_http::client::{FancySpacesClient, error::ClientError};
use fancyspaces_http::types::{DashboardRequest, IssueDraft, IssueStatus, IssueType};
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{body_json, body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Unsigned JWT-shaped token expiring `ttl` from now
fn mint_token(ttl: Duration) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"none","typ":"JWT"}"#);
    let claims = json!({"sub": "u1", "exp": (Utc::now() + ttl).timestamp()});
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
    format!("{header}.{payload}.sig")
}

fn user_json() -> serde_json::Value {
    json!({
        "id": "u1",
        "provider": "basic",
        "name": "Dev",
        "email": "dev@example.com",
        "verified": true,
        "password": true,
        "roles": ["user"],
        "created_at": "2024-05-01T10:00:00Z",
        "is_active": true,
        "metadata": {}
    })
}

fn issue_json(status: &str) -> serde_json::Value {
    json!({
        "id": "i1",
        "space": "s1",
        "title": "Crash",
        "type": "bug",
        "status": status,
        "priority": "high",
        "reporter": "u1",
        "created_at": "2025-02-01T08:30:00Z",
        "updated_at": "2025-02-03T12:00:00Z",
        "external_source": null
    })
}

fn article_json() -> serde_json::Value {
    json!({
        "id": "b1",
        "space_id": "s1",
        "author": "u1",
        "title": "Release notes",
        "summary": "What changed",
        "published_at": "2025-03-10T09:00:00Z"
    })
}

fn client_for(server: &MockServer, session: Arc<SessionStore>) -> FancySpacesClient {
    FancySpacesClient::new(ClientConfig::for_origin(&server.uri()), session).unwrap()
}

fn empty_session() -> Arc<SessionStore> {
    Arc::new(SessionStore::new(MemoryStorage::new()))
}

/// Session holding a token the mock identity provider accepts
async fn logged_in_session(server: &MockServer) -> (Arc<SessionStore>, String) {
    let token = mint_token(Duration::hours(1));
    Mock::given(method("POST"))
        .and(path("/idp/api/v1/tokens/validate"))
        .and(header("authorization", format!("Bearer {token}").as_str()))
        .respond_with(ResponseTemplate::new(200))
        .mount(server)
        .await;

    let session = empty_session();
    session.set_token(token.clone());
    (session, token)
}

#[tokio::test]
async fn test_client_builder_requires_session() {
    let result = FancySpacesClient::builder()
        .config(ClientConfig::for_origin("http://localhost:8080"))
        .build();
    assert!(matches!(result, Err(ClientError::Configuration(_))));
}

#[tokio::test]
async fn test_client_builder_rejects_relative_urls() {
    let config = ClientConfig {
        analytics_api_url: "analytics/api/v1".to_string(),
        ..ClientConfig::for_origin("http://localhost:8080")
    };
    let result = FancySpacesClient::builder()
        .config(config)
        .session(empty_session())
        .build();
    assert!(matches!(result, Err(ClientError::Configuration(_))));
}

#[tokio::test]
async fn test_privileged_call_without_session_sends_nothing() {
    let mock_server = MockServer::start().await;
    let notifications = NotificationQueue::new();
    let client = FancySpacesClient::builder()
        .config(ClientConfig::for_origin(&mock_server.uri()))
        .session(empty_session())
        .notifications(notifications.clone())
        .build()
        .unwrap();

    let err = client
        .create_issue("s1", &IssueDraft::default())
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::NotLoggedIn));
    assert_eq!(err.to_string(), "User is not logged in");
    assert!(mock_server.received_requests().await.unwrap().is_empty());

    let queued = notifications.drain();
    assert_eq!(queued.len(), 1);
    assert_eq!(queued[0].text, "User is not logged in");
    assert!(queued[0].is_error());
}

#[tokio::test]
async fn test_expired_token_is_dropped_without_validation() {
    let mock_server = MockServer::start().await;
    let session = empty_session();
    session.set_token(mint_token(Duration::seconds(-5)));
    let client = client_for(&mock_server, session.clone());

    let err = client.delete_api_key("k1").await.unwrap_err();

    assert!(matches!(err, ClientError::NotLoggedIn));
    assert!(session.token().is_none());
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_rejected_token_clears_session() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/idp/api/v1/tokens/validate"))
        .respond_with(ResponseTemplate::new(401).set_body_string("token revoked"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let storage = MemoryStorage::new();
    let session = Arc::new(SessionStore::new(storage.clone()));
    session.set_token(mint_token(Duration::hours(1)));
    let client = client_for(&mock_server, session.clone());

    let err = client.resend_verification_code().await.unwrap_err();

    assert!(matches!(err, ClientError::NotLoggedIn));
    assert!(session.token().is_none());
    assert!(
        SessionStore::new(storage)
            .load_token_from_storage()
            .is_none()
    );
    assert_eq!(mock_server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_create_issue_sends_bearer_token() {
    let mock_server = MockServer::start().await;
    let (session, token) = logged_in_session(&mock_server).await;

    Mock::given(method("POST"))
        .and(path("/api/v1/spaces/s1/issues"))
        .and(header("authorization", format!("Bearer {token}").as_str()))
        .and(body_json(json!({"title": "Crash", "type": "bug"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "i1",
            "space": "s1",
            "title": "Crash",
            "type": "bug",
            "status": "backlog",
            "priority": "high",
            "reporter": "u1",
            "created_at": "2025-02-01T08:30:00Z",
            "updated_at": "2025-02-01T08:30:00Z",
            "external_source": null
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, session);
    let draft = IssueDraft {
        title: Some("Crash".to_string()),
        issue_type: Some(IssueType::Bug),
        ..IssueDraft::default()
    };

    let issue = client.create_issue("s1", &draft).await.unwrap();
    assert_eq!(issue.id, "i1");
    assert_eq!(
        issue.created_at,
        Utc.with_ymd_and_hms(2025, 2, 1, 8, 30, 0).unwrap()
    );
    assert!(issue.resolved_at.is_none());
}

#[tokio::test]
async fn test_not_found_carries_status_and_body() {
    let mock_server = MockServer::start().await;
    let notifications = NotificationQueue::new();

    Mock::given(method("GET"))
        .and(path("/api/v1/spaces/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("space not found"))
        .mount(&mock_server)
        .await;

    let client = FancySpacesClient::builder()
        .config(ClientConfig::for_origin(&mock_server.uri()))
        .session(empty_session())
        .notifications(notifications.clone())
        .build()
        .unwrap();

    let err = client.get_space("missing").await.unwrap_err();
    let message = err.to_string();

    assert!(err.is_not_found());
    assert!(message.contains("404"), "{message}");
    assert!(message.contains("space not found"), "{message}");
    assert_eq!(notifications.drain()[0].text, message);
}

#[tokio::test]
async fn test_space_dates_are_decoded() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/spaces"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": "s1",
            "slug": "demo",
            "title": "Demo",
            "status": "approved",
            "created_at": "2024-12-24T18:00:00Z",
            "creator": "u1",
            "members": [{"user_id": "u1", "role": "owner"}]
        }])))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, empty_session());
    let spaces = client.get_all_spaces().await.unwrap();

    assert_eq!(spaces.len(), 1);
    assert_eq!(
        spaces[0].created_at,
        Utc.with_ymd_and_hms(2024, 12, 24, 18, 0, 0).unwrap()
    );
    assert_eq!(spaces[0].members[0].role, "owner");
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/spaces/s1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, empty_session());
    let err = client.get_space("s1").await.unwrap_err();
    assert!(matches!(err, ClientError::Decode { .. }));
}

#[tokio::test]
async fn test_versions_use_raw_api_key() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/spaces/s1/versions/latest"))
        .and(header("authorization", "fs-key-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "space_id": "s1",
            "id": "v7",
            "name": "1.2.0",
            "platform": "paper",
            "channel": "release",
            "published_at": "2025-04-10T12:00:00Z",
            "files": [{"name": "demo.jar", "url": "https://cdn/demo.jar", "size": 2048}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = FancySpacesClient::builder()
        .config(ClientConfig::for_origin(&mock_server.uri()))
        .session(empty_session())
        .api_key("fs-key-123")
        .build()
        .unwrap();

    let version = client.get_latest_version("s1").await.unwrap();
    assert_eq!(version.id, "v7");
    assert_eq!(version.files[0].size, 2048);
}

#[tokio::test]
async fn test_missing_credentials_send_no_authorization_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/spaces/s1/secrets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, empty_session());
    let secrets = client.get_all_secrets("s1").await.unwrap();
    assert!(secrets.is_empty());

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_login_stores_session() {
    let mock_server = MockServer::start().await;
    let token = mint_token(Duration::hours(1));
    let basic = format!("Basic {}", STANDARD.encode("dev@example.com:hunter2"));

    Mock::given(method("POST"))
        .and(path("/idp/api/v1/users/validate"))
        .and(body_json(json!({"user": "dev@example.com", "password": "hunter2"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json()))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/idp/api/v1/tokens/create"))
        .and(header("authorization", basic.as_str()))
        .respond_with(ResponseTemplate::new(201).set_body_string(token.clone()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let storage = MemoryStorage::new();
    let session = Arc::new(SessionStore::new(storage.clone()));
    let client = client_for(&mock_server, session.clone());

    let user = client.login("dev@example.com", "hunter2").await.unwrap();
    assert_eq!(user.id, "u1");
    assert_eq!(session.token().as_deref(), Some(token.as_str()));

    let restored = SessionStore::restore(storage.clone());
    assert_eq!(restored.token().as_deref(), Some(token.as_str()));
    assert_eq!(restored.user().map(|u| u.email), Some("dev@example.com".to_string()));

    client.logout();
    assert!(session.session().token.is_none());
    assert!(SessionStore::restore(storage).user().is_none());
}

#[tokio::test]
async fn test_create_token_requires_created_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/idp/api/v1/tokens/create"))
        .respond_with(ResponseTemplate::new(200).set_body_string("abc"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, empty_session());
    let err = client.create_token("dev@example.com", "pw").await.unwrap_err();

    assert_eq!(err.status().map(|s| s.as_u16()), Some(200));
    assert!(err.to_string().starts_with("Failed to create token (code 200"));
}

#[tokio::test]
async fn test_empty_token_is_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/idp/api/v1/tokens/refresh"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, empty_session());
    let err = client.refresh_token("old").await.unwrap_err();
    assert!(matches!(err, ClientError::EmptyBody(_)));
}

#[tokio::test]
async fn test_validate_token_treats_rejection_as_false() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/idp/api/v1/tokens/validate"))
        .and(header("authorization", "Bearer good"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/idp/api/v1/tokens/validate"))
        .and(header("authorization", "Bearer bad"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, empty_session());
    assert!(client.validate_token("good").await.unwrap());
    assert!(!client.validate_token("bad").await.unwrap());
}

#[tokio::test]
async fn test_refresh_session_replaces_token() {
    let mock_server = MockServer::start().await;
    let fresh = mint_token(Duration::hours(2));

    Mock::given(method("POST"))
        .and(path("/idp/api/v1/tokens/refresh"))
        .and(header("authorization", "Bearer old-token"))
        .respond_with(ResponseTemplate::new(200).set_body_string(fresh.clone()))
        .mount(&mock_server)
        .await;

    let session = empty_session();
    let client = client_for(&mock_server, session.clone());
    assert!(matches!(
        client.refresh_session().await,
        Err(ClientError::NotLoggedIn)
    ));

    session.set_token("old-token");
    client.refresh_session().await.unwrap();
    assert_eq!(session.token(), Some(fresh));
}

#[tokio::test]
async fn test_verify_user_sends_raw_code() {
    let mock_server = MockServer::start().await;
    let (session, _) = logged_in_session(&mock_server).await;

    Mock::given(method("POST"))
        .and(path("/idp/api/v1/users/verify/check"))
        .and(body_string("482913"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, session);
    client.verify_user("482913").await.unwrap();
}

#[tokio::test]
async fn test_api_keys_decode_optional_last_use() {
    let mock_server = MockServer::start().await;
    let (session, _) = logged_in_session(&mock_server).await;

    Mock::given(method("GET"))
        .and(path("/idp/api/v1/api-keys"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "key_id": "k1",
                "user_id": "u1",
                "description": "ci",
                "created_at": "2025-01-01T00:00:00Z",
                "last_used_at": null
            },
            {
                "key_id": "k2",
                "user_id": "u1",
                "description": "laptop",
                "created_at": "2025-01-02T00:00:00Z",
                "last_used_at": "2025-03-01T09:15:00Z"
            }
        ])))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, session);
    let keys = client.get_api_keys().await.unwrap();

    assert!(keys[0].last_used_at.is_none());
    assert_eq!(
        keys[1].last_used_at,
        Some(Utc.with_ymd_and_hms(2025, 3, 1, 9, 15, 0).unwrap())
    );
}

#[tokio::test]
async fn test_delete_api_key_requires_no_content() {
    let mock_server = MockServer::start().await;
    let (session, _) = logged_in_session(&mock_server).await;

    Mock::given(method("DELETE"))
        .and(path("/idp/api/v1/api-keys/k1"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, session);
    let err = client.delete_api_key("k1").await.unwrap_err();
    assert_eq!(err.status().map(|s| s.as_u16()), Some(200));
}

#[tokio::test]
async fn test_kv_commands_use_protocol_ids() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/storage/api/v1/databases/main/collections/players/kv/2032"))
        .and(body_json(json!({"keys": ["a", "b"]})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"values": {"a": 1, "b": "two"}})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/storage/api/v1/databases/main/collections/players/kv/2033"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"values": {"a": 1}})))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/storage/api/v1/databases/main/collections/players/kv/2030"))
        .and(body_json(json!({"key": "a"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"exists": true})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, empty_session());
    let keys = vec!["a".to_string(), "b".to_string()];

    let values = client
        .kv_get_multiple("main", "players", &keys)
        .await
        .unwrap();
    assert_eq!(values["b"], json!("two"));

    let all = client.kv_get_all("main", "players").await.unwrap();
    assert_eq!(all.len(), 1);

    assert!(client.kv_exists("main", "players", "a").await.unwrap());
}

#[tokio::test]
async fn test_maven_artifacts_null_reads_as_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/spaces/s1/maven-repositories/releases/artifacts"))
        .respond_with(ResponseTemplate::new(200).set_body_string("null"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, empty_session());
    let artifacts = client
        .get_all_maven_artifacts("s1", "releases")
        .await
        .unwrap();
    assert!(artifacts.is_empty());
}

#[tokio::test]
async fn test_maven_coordinate_is_percent_encoded() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(
            "/api/v1/spaces/s1/maven-repositories/releases/artifacts/net.example%3Acore",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "space_id": "s1",
            "repository": "releases",
            "group": "net.example",
            "id": "core",
            "versions": [{"version": "1.0.0", "published_at": "2025-01-05T00:00:00Z"}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, empty_session());
    let artifact = client
        .get_maven_artifact("s1", "releases", "net.example:core")
        .await
        .unwrap();
    assert_eq!(artifact.coordinate(), "net.example:core");
    assert_eq!(artifact.versions[0].version, "1.0.0");
}

#[tokio::test]
async fn test_events_get_positional_ids() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/analytics/api/v1/projects/p1/events"))
        .and(query_param("name", "join"))
        .and(query_param("amount", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "time": 3.5,
            "count": 2,
            "events": [
                {"name": "join", "timestamp": "2025-06-01T10:00:00Z", "properties": {"player": "a"}},
                {"name": "join", "timestamp": "2025-06-01T10:01:00Z"}
            ]
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, empty_session());
    let result = client
        .get_latest_events_by_count("p1", "join", 2)
        .await
        .unwrap();

    let ids: Vec<_> = result.events.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["0", "1"]);
    assert_eq!(
        result.events[1].timestamp,
        Utc.with_ymd_and_hms(2025, 6, 1, 10, 1, 0).unwrap()
    );
}

#[tokio::test]
async fn test_logs_require_exact_ok() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/analytics/api/v1/projects/p1/logs"))
        .and(query_param("time", "6"))
        .respond_with(ResponseTemplate::new(202).set_body_string("query queued"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, empty_session());
    let err = client
        .get_latest_logs_by_time("p1", "", 6)
        .await
        .unwrap_err();

    assert_eq!(err.status().map(|s| s.as_u16()), Some(202));
    assert!(err.to_string().contains("query queued"));
}

#[tokio::test]
async fn test_templates_are_public() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/analytics/api/v1/templates"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "name": "minecraft-server",
            "description": "Players and TPS",
            "metrics": [{"name": "players", "multi_sender": true}],
            "dashboards": [{
                "name": "Overview",
                "summary": "",
                "public": false,
                "charts": [{"type": "line", "name": "Players", "options": {}}]
            }]
        }])))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, empty_session());
    let templates = client.get_templates().await.unwrap();

    assert_eq!(templates[0].dashboards[0].charts[0].chart_type, "line");
    let requests = mock_server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_create_metric_requires_created() {
    let mock_server = MockServer::start().await;
    let (session, _) = logged_in_session(&mock_server).await;

    Mock::given(method("POST"))
        .and(path("/analytics/api/v1/projects/p1/metrics"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, session);
    let metric = fancyspaces_http::types::Metric {
        project_id: "p1".to_string(),
        metric_id: String::new(),
        name: "players".to_string(),
        multi_sender: false,
        aggregation_interval: Some(60),
        apply_extra_aggregation: None,
        pull_metric: None,
        pull_interval: None,
        pull_url: None,
    };
    client.create_metric(&metric).await.unwrap();
}

#[tokio::test]
async fn test_blog_reads_and_logged_out_writes() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/spaces/s1/blog-articles"))
        .respond_with(ResponseTemplate::new(200).set_body_string("null"))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/blog-articles/b1/content"))
        .and(header("accept", "text/plain"))
        .respond_with(ResponseTemplate::new(200).set_body_string("# Hello\n\nFirst post"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, empty_session());

    let articles = client.get_blog_articles_for_space("s1").await.unwrap();
    assert!(articles.is_empty());
    assert_eq!(
        client.get_blog_article_content("b1").await.unwrap(),
        "# Hello\n\nFirst post"
    );

    assert!(matches!(
        client.create_blog_article("s1", "t", "s", "c").await,
        Err(ClientError::NotLoggedIn)
    ));
    assert!(matches!(
        client.update_blog_article("b1", "t", "s", "c").await,
        Err(ClientError::NotLoggedIn)
    ));
    assert!(matches!(
        client.delete_blog_article("b1").await,
        Err(ClientError::NotLoggedIn)
    ));
    assert_eq!(mock_server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_blog_writes_with_session() {
    let mock_server = MockServer::start().await;
    let (session, token) = logged_in_session(&mock_server).await;
    let bearer = format!("Bearer {token}");

    Mock::given(method("POST"))
        .and(path("/api/v1/blog-articles"))
        .and(header("authorization", bearer.as_str()))
        .and(body_json(json!({
            "space_id": "s1",
            "title": "Release notes",
            "summary": "What changed",
            "content": "Everything"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(article_json()))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/api/v1/blog-articles/b1"))
        .and(body_json(json!({
            "title": "Release notes",
            "summary": "What changed",
            "content": "Everything, revised"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(article_json()))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/api/v1/blog-articles/b1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, session);

    let created = client
        .create_blog_article("s1", "Release notes", "What changed", "Everything")
        .await
        .unwrap();
    assert_eq!(created.id, "b1");
    assert!(!created.is_user_owned());
    assert_eq!(
        created.published_at,
        Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap()
    );

    client
        .update_blog_article("b1", "Release notes", "What changed", "Everything, revised")
        .await
        .unwrap();
    client.delete_blog_article("b1").await.unwrap();
}

#[tokio::test]
async fn test_dashboard_writes() {
    let mock_server = MockServer::start().await;
    let (session, _) = logged_in_session(&mock_server).await;
    let body = json!({"name": "Ops", "summary": "Server health", "public": true, "charts": []});

    Mock::given(method("POST"))
        .and(path("/analytics/api/v1/projects/p1/dashboards"))
        .and(body_json(body.clone()))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/analytics/api/v1/projects/p1/dashboards/d1"))
        .and(body_json(body))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/analytics/api/v1/projects/p1/dashboards/d1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, session);
    let dashboard = DashboardRequest {
        name: "Ops".to_string(),
        summary: "Server health".to_string(),
        public: true,
        charts: Vec::new(),
    };

    client.create_dashboard("p1", &dashboard).await.unwrap();
    client.update_dashboard("p1", "d1", &dashboard).await.unwrap();
    client.delete_dashboard("p1", "d1").await.unwrap();
}

#[tokio::test]
async fn test_dashboard_writes_need_login() {
    let mock_server = MockServer::start().await;
    let client = client_for(&mock_server, empty_session());
    let dashboard = DashboardRequest {
        name: "Ops".to_string(),
        summary: String::new(),
        public: false,
        charts: Vec::new(),
    };

    assert!(matches!(
        client.create_dashboard("p1", &dashboard).await,
        Err(ClientError::NotLoggedIn)
    ));
    assert!(matches!(
        client.delete_dashboard("p1", "d1").await,
        Err(ClientError::NotLoggedIn)
    ));
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_metric_record_intervals() {
    let mock_server = MockServer::start().await;
    let records = json!({
        "time": 1.25,
        "rows_count": 1,
        "records": [{
            "project_id": "p1",
            "metric_id": "m1",
            "timestamp": "2025-06-01T10:00:00Z",
            "value": 42.0
        }]
    });

    for interval in ["per-minute", "per-hour"] {
        Mock::given(method("GET"))
            .and(path(format!(
                "/analytics/api/v1/projects/p1/metrics/m1/records/{interval}"
            )))
            .respond_with(ResponseTemplate::new(200).set_body_json(records.clone()))
            .expect(1)
            .mount(&mock_server)
            .await;
    }

    Mock::given(method("GET"))
        .and(path("/analytics/api/v1/projects/p1/metrics/m1/records/per-day"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, empty_session());

    let per_minute = client
        .get_latest_records_per_minute("p1", "m1")
        .await
        .unwrap();
    assert_eq!(per_minute.rows_count, 1);
    assert!((per_minute.records[0].value - 42.0).abs() < f64::EPSILON);
    assert!(per_minute.records[0].label.is_empty());

    let per_hour = client
        .get_latest_records_per_hour("p1", "m1")
        .await
        .unwrap();
    assert_eq!(
        per_hour.records[0].timestamp,
        Utc.with_ymd_and_hms(2025, 6, 1, 10, 0, 0).unwrap()
    );

    let err = client
        .get_latest_records_per_day("p1", "m1")
        .await
        .unwrap_err();
    assert_eq!(err.status().map(|s| s.as_u16()), Some(204));
    assert!(
        err.to_string()
            .starts_with("Failed to fetch latest records per day (code 204")
    );
}

#[tokio::test]
async fn test_download_counts_per_version() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/spaces/s1/downloads"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "downloads": 12,
            "versions": {"v1": 5, "v2": 7}
        })))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, empty_session());

    let per_version = client.get_download_count_per_version("s1").await.unwrap();
    assert_eq!(per_version.len(), 2);
    assert_eq!(per_version["v1"], 5);
    assert_eq!(per_version["v2"], 7);
    assert_eq!(client.get_download_count_for_space("s1").await.unwrap(), 12);
}

#[tokio::test]
async fn test_decrypted_secret_is_plain_text() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/spaces/s1/secrets/db-password/decrypted"))
        .and(header("authorization", "fs-key-123"))
        .and(header("accept", "text/plain"))
        .respond_with(ResponseTemplate::new(200).set_body_string("hunter2"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = FancySpacesClient::builder()
        .config(ClientConfig::for_origin(&mock_server.uri()))
        .session(empty_session())
        .api_key("fs-key-123")
        .build()
        .unwrap();

    let value = client
        .get_secret_decrypted("s1", "db-password")
        .await
        .unwrap();
    assert_eq!(value, "hunter2");
}

#[tokio::test]
async fn test_register_user_needs_no_session() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/idp/api/v1/users/register"))
        .and(body_json(json!({
            "provider": "basic",
            "name": "Dev",
            "email": "dev@example.com",
            "password": "hunter2"
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, empty_session());
    client
        .register_user("Dev", "dev@example.com", "hunter2")
        .await
        .unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_register_user_rejects_plain_ok() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/idp/api/v1/users/register"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, empty_session());
    let err = client
        .register_user("Dev", "dev@example.com", "hunter2")
        .await
        .unwrap_err();
    assert_eq!(err.status().map(|s| s.as_u16()), Some(200));
}

#[tokio::test]
async fn test_update_user_and_resend_code() {
    let mock_server = MockServer::start().await;
    let (session, token) = logged_in_session(&mock_server).await;

    Mock::given(method("PUT"))
        .and(path("/idp/api/v1/users/u1"))
        .and(header("authorization", format!("Bearer {token}").as_str()))
        .and(body_json(json!({
            "name": "Dev Renamed",
            "email": "dev@example.com",
            "password": "hunter3"
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/idp/api/v1/users/verify/resend"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, session);
    client
        .update_user("u1", "Dev Renamed", "dev@example.com", "hunter3")
        .await
        .unwrap();
    client.resend_verification_code().await.unwrap();
}

#[tokio::test]
async fn test_update_and_delete_issue() {
    let mock_server = MockServer::start().await;
    let (session, _) = logged_in_session(&mock_server).await;

    Mock::given(method("PUT"))
        .and(path("/api/v1/spaces/s1/issues/i1"))
        .and(body_json(json!({"status": "done"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(issue_json("done")))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/api/v1/spaces/s1/issues/i1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, session);
    let changes = IssueDraft {
        status: Some(IssueStatus::Done),
        ..IssueDraft::default()
    };

    let issue = client.update_issue("s1", "i1", &changes).await.unwrap();
    assert_eq!(issue.status, IssueStatus::Done);
    assert_eq!(
        issue.updated_at,
        Utc.with_ymd_and_hms(2025, 2, 3, 12, 0, 0).unwrap()
    );
    client.delete_issue("s1", "i1").await.unwrap();
}

#[tokio::test]
async fn test_logs_service_filter_sent_only_when_set() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/analytics/api/v1/projects/p1/logs"))
        .and(query_param("time", "24"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "time": 0.5,
            "rows_count": 1,
            "records": [{
                "service": "api",
                "timestamp": "2025-06-01T10:00:00Z",
                "level": "info",
                "message": "started"
            }]
        })))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, empty_session());

    let all = client.get_latest_logs_by_time("p1", "", 24).await.unwrap();
    let filtered = client
        .get_latest_logs_by_time("p1", "api", 24)
        .await
        .unwrap();
    assert_eq!(all.records[0].id, "0");
    assert_eq!(filtered.records[0].service, "api");

    let requests = mock_server.received_requests().await.unwrap();
    let service_of = |index: usize| {
        requests[index]
            .url
            .query_pairs()
            .find(|(key, _)| *key == "service")
            .map(|(_, value)| value.into_owned())
    };
    assert_eq!(service_of(0), None);
    assert_eq!(service_of(1).as_deref(), Some("api"));
}
