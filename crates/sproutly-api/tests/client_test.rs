#![allow(clippy::unwrap_used)]
// Integration tests for `ApiClient` using wiremock.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde_json::json;
use url::Url;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use sproutly_api::{
    ApiClient, Credentials, EntityId, Error, MemorySessionStore, NewPost, PostQuery, PostSort,
    Session, SessionStore, User, VoteKind,
};

// ── Helpers ─────────────────────────────────────────────────────────

fn setup_with_server(server: &MockServer) -> (Arc<MemorySessionStore>, ApiClient) {
    let session = Arc::new(MemorySessionStore::new());
    let base_url = Url::parse(&server.uri()).unwrap();
    let client = ApiClient::with_client(
        reqwest::Client::new(),
        base_url,
        Arc::clone(&session) as Arc<dyn SessionStore>,
    );
    (session, client)
}

async fn setup() -> (MockServer, Arc<MemorySessionStore>, ApiClient) {
    let server = MockServer::start().await;
    let (session, client) = setup_with_server(&server);
    (server, session, client)
}

fn signed_in_session() -> Session {
    Session {
        token: "t1".into(),
        user: User {
            id: EntityId::from("u1"),
            ..User::default()
        },
    }
}

// ── Authentication tests ────────────────────────────────────────────

#[tokio::test]
async fn test_login_persists_session() {
    let (server, session, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({"email": "a@b.com", "password": "x"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "t1",
            "user": { "id": "u1" }
        })))
        .mount(&server)
        .await;

    let auth = client
        .login(&Credentials {
            email: "a@b.com".into(),
            password: "x".to_owned().into(),
        })
        .await
        .unwrap();

    assert_eq!(auth.user.id, EntityId::from("u1"));

    let stored = session.load().unwrap();
    assert_eq!(stored.token, "t1");
    assert_eq!(stored.user.id, EntityId::from("u1"));
}

#[tokio::test]
async fn test_login_failure_clears_session_and_maps_to_auth_error() {
    let (server, session, client) = setup().await;
    session.store(&signed_in_session());

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"message": "Invalid credentials"})),
        )
        .mount(&server)
        .await;

    let result = client
        .login(&Credentials {
            email: "a@b.com".into(),
            password: "wrong".to_owned().into(),
        })
        .await;

    match result {
        Err(Error::Authentication { ref message }) => {
            assert!(message.contains("Invalid credentials"), "got: {message}");
        }
        other => panic!("expected Authentication error, got: {other:?}"),
    }
    assert!(session.load().is_none());
}

#[tokio::test]
async fn test_login_validation_rejects_before_any_request() {
    // No mock server routes: a dispatched request would error loudly.
    let (_server, _session, client) = setup().await;

    let result = client
        .login(&Credentials {
            email: "not-an-address".into(),
            password: "x".to_owned().into(),
        })
        .await;

    assert!(matches!(result, Err(Error::Validation { .. })));
}

#[tokio::test]
async fn test_logout_is_local_only() {
    let server = MockServer::start().await;
    let (session, client) = setup_with_server(&server);
    session.store(&signed_in_session());

    client.logout();

    assert!(session.load().is_none());
    // No requests were made.
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_verify_failure_tears_down_session() {
    let (server, session, client) = setup().await;
    session.store(&signed_in_session());

    Mock::given(method("GET"))
        .and(path("/auth/verify"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let result = client.verify_session().await;

    assert!(matches!(result, Err(Error::Api { status: 500, .. })));
    assert!(session.load().is_none());
}

#[tokio::test]
async fn test_requests_carry_the_session_token() {
    let (server, session, client) = setup().await;
    session.store(&signed_in_session());

    Mock::given(method("GET"))
        .and(path("/forums"))
        .and(header("x-auth-token", "t1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let forums = client.list_forums().await.unwrap();
    assert!(forums.is_empty());
}

// ── 401 teardown ────────────────────────────────────────────────────

#[tokio::test]
async fn test_unauthorized_clears_session_and_fires_hook_once() {
    let server = MockServer::start().await;
    let session = Arc::new(MemorySessionStore::new());
    session.store(&signed_in_session());

    let redirects = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&redirects);
    let client = ApiClient::with_client(
        reqwest::Client::new(),
        Url::parse(&server.uri()).unwrap(),
        Arc::clone(&session) as Arc<dyn SessionStore>,
    )
    .on_unauthorized(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    Mock::given(method("GET"))
        .and(path("/notifications"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let result = client.notifications().await;

    assert!(matches!(result, Err(Error::SessionExpired)));
    assert!(session.load().is_none());
    assert_eq!(redirects.load(Ordering::SeqCst), 1);
}

// ── Forum endpoint tests ────────────────────────────────────────────

#[tokio::test]
async fn test_forum_posts_sends_sort_grammar() {
    let (server, _session, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/forums/f1/posts"))
        .and(query_param("sort", "-createdAt"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "_id": "p1", "title": "First", "votes": 3 }
        ])))
        .mount(&server)
        .await;

    let query = PostQuery {
        sort: Some(PostSort::NewestFirst),
        limit: Some(5),
        page: None,
    };
    let posts = client
        .forum_posts(&EntityId::from("f1"), &query)
        .await
        .unwrap();

    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].id, EntityId::from("p1"));
    assert_eq!(posts[0].votes, 3);
}

#[tokio::test]
async fn test_create_post_round_trip() {
    let (server, _session, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/forums/f1/posts"))
        .and(body_json(json!({"title": "Hi", "content": "body"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "_id": "p9", "title": "Hi", "votes": 0
        })))
        .mount(&server)
        .await;

    let post = client
        .create_post(
            &EntityId::from("f1"),
            &NewPost {
                title: "Hi".into(),
                content: "body".into(),
            },
        )
        .await
        .unwrap();

    assert_eq!(post.id, EntityId::from("p9"));
    assert_eq!(post.votes, 0);
}

#[tokio::test]
async fn test_vote_post_sends_vote_type() {
    let (server, _session, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/posts/p1/vote"))
        .and(body_json(json!({"voteType": "up"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_id": "p1", "title": "First", "votes": 4
        })))
        .mount(&server)
        .await;

    let post = client
        .vote_post(&EntityId::from("p1"), VoteKind::Up)
        .await
        .unwrap();

    assert_eq!(post.votes, 4);
}

// ── Error normalization tests ───────────────────────────────────────

#[tokio::test]
async fn test_error_body_message_is_surfaced() {
    let (server, _session, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/forums/missing"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"message": "Forum not found"})),
        )
        .mount(&server)
        .await;

    let result = client.forum_by_id(&EntityId::from("missing")).await;

    match result {
        Err(Error::Api { ref message, status }) => {
            assert_eq!(status, 404);
            assert_eq!(message, "Forum not found");
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
    assert!(
        Error::Api {
            message: "Forum not found".into(),
            status: 404
        }
        .is_not_found()
    );
}

#[tokio::test]
async fn test_error_without_body_falls_back_to_status_reason() {
    let (server, _session, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/tools"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let result = client.list_tools().await;

    match result {
        Err(Error::Api { ref message, status }) => {
            assert_eq!(status, 503);
            assert!(!message.is_empty());
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_garbage_body_is_a_deserialization_error() {
    let (server, _session, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/tools"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>nope</html>"))
        .mount(&server)
        .await;

    let result = client.list_tools().await;

    match result {
        Err(Error::Deserialization { ref body, .. }) => {
            assert!(body.contains("nope"));
        }
        other => panic!("expected Deserialization error, got: {other:?}"),
    }
}

// ── Notification endpoint tests ─────────────────────────────────────

#[tokio::test]
async fn test_notification_surface() {
    let (server, _session, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/notifications"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "_id": "n1", "message": "New reply", "read": false },
            { "_id": "n2", "message": "Welcome", "read": true }
        ])))
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/notifications/n1/read"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(
            { "_id": "n1", "message": "New reply", "read": true }
        )))
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/notifications/read-all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "ok"})))
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/notifications/n2"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let list = client.notifications().await.unwrap();
    assert_eq!(list.len(), 2);
    assert!(!list[0].read);

    let marked = client
        .mark_notification_read(&EntityId::from("n1"))
        .await
        .unwrap();
    assert!(marked.read);

    client.mark_all_notifications_read().await.unwrap();
    client
        .delete_notification(&EntityId::from("n2"))
        .await
        .unwrap();
}
