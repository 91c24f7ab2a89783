//! API client integration tests
//!
//! Runs the real reqwest transport against a wiremock server and checks the
//! wire-level behavior: URLs, headers, bodies and response normalization.

use super::{client_for, init_test_env};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use word_gpt_core::client::{ApiClient, CallOptions};
use word_gpt_core::executor::RequestError;
use word_gpt_core::models::api::ArticleWordList;
use word_gpt_core::models::{HttpMethod, SubscriptionLevel, UserId};

fn json_reply(body: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .insert_header("content-type", "application/json")
        .set_body_string(body.to_string())
}

#[tokio::test]
async fn test_attaches_authorization_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/stats"))
        .and(header("Authorization", "Bearer test-token"))
        .and(header("Content-Type", "application/json"))
        .respond_with(json_reply(json!({"total": 12, "reviewed": 5, "due_today": 3})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, Some("test-token"));
    let stats = client.get_stats().await.unwrap();

    assert_eq!(stats.total, 12);
    assert_eq!(stats.due_today, 3);
}

#[tokio::test]
async fn test_no_token_omits_authorization_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ladr-user-info"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Missing token"))
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    let err = client.get_user_info().await.unwrap_err();
    assert_eq!(err.to_string(), "Missing token");

    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);
    assert!(received[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_health_is_anonymous_and_parsed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(json_reply(json!({"status": "ok"})))
        .mount(&server)
        .await;

    let client = client_for(&server, Some("test-token"));
    let health = client.get_health().await.unwrap();
    assert_eq!(health.status, "ok");

    let received = server.received_requests().await.unwrap();
    assert!(received[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_error_body_is_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/stats"))
        .respond_with(ResponseTemplate::new(400).set_body_string("Bad Request"))
        .mount(&server)
        .await;

    let client = client_for(&server, Some("test-token"));
    let err = client.get_stats().await.unwrap_err();

    assert_eq!(err.to_string(), "Bad Request");
    assert_eq!(err.status(), Some(400));
}

#[tokio::test]
async fn test_empty_error_body_uses_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/verify"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = client_for(&server, Some("test-token"));
    let err = client.verify().await.unwrap_err();

    assert_eq!(err.to_string(), "HTTP 500");
}

#[tokio::test]
async fn test_verify_calls_verify_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/verify"))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(json_reply(json!({"ok": true, "token": "test-token"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, Some("test-token"));
    let verification = client.verify().await.unwrap();

    assert!(verification.ok);
    assert_eq!(verification.token, "test-token");
}

#[tokio::test]
async fn test_user_info_decoded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ladr-user-info"))
        .respond_with(json_reply(json!({
            "id": 3,
            "openid": "okUi951rYmFM",
            "name": "reader",
            "current_level": "free",
            "created_at": "2024-05-01T00:00:00Z",
            "updated_at": "2024-05-03T00:00:00Z"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server, Some("test-token"));
    let user = client.get_user_info().await.unwrap();

    assert_eq!(user.id, UserId::Number(3));
    assert_eq!(user.current_level, Some(SubscriptionLevel::Free));
}

#[tokio::test]
async fn test_article_word_list_posts_owner_and_article() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ladr-article-word-list"))
        .and(body_json(json!({"openid": "okUi951r", "article_id": "Q2cSZhk8"})))
        .respond_with(json_reply(json!({
            "openid": "okUi951r",
            "article_id": "Q2cSZhk8",
            "words": [{
                "id": 1,
                "openid": "okUi951r",
                "word": "subject",
                "definition": "a topic",
                "ai_memory": "",
                "created_at": "2024-05-01"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, Some("test-token"));
    let list = client
        .get_article_word_list("okUi951r", "Q2cSZhk8")
        .await
        .unwrap();

    assert_eq!(list.words.len(), 1);
    assert_eq!(list.words[0].word, "subject");
}

#[tokio::test]
async fn test_insert_and_remove_word() {
    let server = MockServer::start().await;
    let word_body = json!({"openid": "okUi951r", "article_id": "Q2cSZhk8", "word": "subject"});
    Mock::given(method("POST"))
        .and(path("/ladr-article-insert-word"))
        .and(body_json(word_body.clone()))
        .respond_with(json_reply(json!({"inserted": true})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/ladr-article-remove-word"))
        .and(body_json(word_body))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, Some("test-token"));
    let inserted = client
        .insert_article_word("okUi951r", "Q2cSZhk8", "subject")
        .await
        .unwrap();
    let removed = client
        .remove_article_word("okUi951r", "Q2cSZhk8", "subject")
        .await
        .unwrap();

    assert_eq!(inserted, json!({"inserted": true}));
    assert_eq!(removed, json!({}));
}

#[tokio::test]
async fn test_caller_authorization_header_is_ignored() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/stats"))
        .respond_with(json_reply(json!({})))
        .mount(&server)
        .await;

    let client = client_for(&server, Some("test-token"));
    let options = CallOptions::new()
        .header("authorization", "Bearer forged")
        .header("X-Client", "word-gpt");
    let _: serde_json::Value = client
        .call(HttpMethod::GET, "api/stats", options)
        .await
        .unwrap();

    let received = server.received_requests().await.unwrap();
    let auth: Vec<_> = received[0].headers.get_all("authorization").iter().collect();
    assert_eq!(auth.len(), 1);
    assert_eq!(auth[0], "Bearer test-token");
    assert_eq!(received[0].headers.get("x-client").unwrap(), "word-gpt");
}

#[tokio::test]
async fn test_unconfigured_client_never_hits_network() {
    init_test_env();
    let server = MockServer::start().await;
    let mut client = ApiClient::new().unwrap();
    client.configure(Some(&server.uri()));
    client.set_token(Some("test-token"));
    client.configure(None);

    let err = client.get_health().await.unwrap_err();

    assert!(matches!(err, RequestError::NotConfigured));
    assert_eq!(err.to_string(), "service address not configured");
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_declared_json_with_bad_body_is_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/stats"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "application/json")
                .set_body_string("not json"),
        )
        .mount(&server)
        .await;

    let client = client_for(&server, Some("test-token"));
    let result = client.get_stats().await;
    assert!(matches!(result, Err(RequestError::Parse(_))));
}

#[tokio::test]
async fn test_plain_success_decodes_typed_defaults() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/ladr-article-word-list"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .mount(&server)
        .await;

    let client = client_for(&server, Some("test-token"));
    let health = client.get_health().await.unwrap();
    assert_eq!(health.status, "");

    let list = client
        .get_article_word_list("okUi951r", "Q2cSZhk8")
        .await
        .unwrap();
    assert_eq!(list, ArticleWordList::default());
}

#[tokio::test]
async fn test_verify_accepts_unrecognized_level() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/verify"))
        .respond_with(json_reply(json!({
            "ok": true,
            "token": "t1",
            "user": {"id": "u1", "current_level": "unknown"}
        })))
        .mount(&server)
        .await;

    let client = client_for(&server, Some("t1"));
    let verification = client.verify().await.unwrap();

    assert!(verification.ok);
    let user = verification.user.unwrap();
    assert_eq!(user.current_level, Some(SubscriptionLevel::Unknown));
    assert_eq!(SubscriptionLevel::label_for(user.current_level), "");
}
