//! Integration tests for web routes.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use kittens::config::Config;
use kittens::mail::NoopMailer;
use kittens::reddit::RedditClient;
use kittens::web::{create_app, AppState};
use serde_json::json;
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Create a test app pointed at the given Reddit base URL.
fn create_test_app(reddit_base_url: &str) -> Router {
    let config = Config {
        reddit_base_url: reddit_base_url.to_string(),
        ..Config::for_testing()
    };
    let reddit = RedditClient::new(&config).expect("Failed to build Reddit client");
    let state = AppState {
        config: Arc::new(config),
        reddit,
        mailer: Arc::new(NoopMailer),
    };
    create_app(state)
}

async fn mount_search(mock_server: &MockServer, children: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/r/Awww/search.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "kind": "Listing",
            "data": { "children": children }
        })))
        .mount(mock_server)
        .await;
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_show_kitten_displays_the_mocked_title() {
    let mock_server = MockServer::start().await;
    mount_search(
        &mock_server,
        json!([{
            "kind": "t3",
            "data": {
                "title": "The saddest kitten in the world...",
                "thumbnail": "https://thumbs.example.com/sad.jpg",
                "url": "https://example.com/r/Awww/sad",
                "author": "kitten_fan"
            }
        }]),
    )
    .await;

    let app = create_test_app(&mock_server.uri());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/show-a-kitten")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("The saddest kitten in the world..."));
    assert!(body.contains("https://thumbs.example.com/sad.jpg"));
}

#[tokio::test]
async fn test_show_kitten_accepts_post() {
    let mock_server = MockServer::start().await;
    mount_search(
        &mock_server,
        json!([{
            "kind": "t3",
            "data": {
                "title": "Kitten by POST",
                "thumbnail": "https://thumbs.example.com/p.jpg",
                "url": "https://example.com/r/Awww/p",
                "author": "poster"
            }
        }]),
    )
    .await;

    let app = create_test_app(&mock_server.uri());

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/show-a-kitten")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("Kitten by POST"));
}

#[tokio::test]
async fn test_show_kitten_with_only_self_posts_is_not_found() {
    let mock_server = MockServer::start().await;
    mount_search(
        &mock_server,
        json!([
            {
                "kind": "t3",
                "data": {
                    "title": "Just text",
                    "thumbnail": "self",
                    "url": "https://example.com/r/Awww/t",
                    "author": "writer"
                }
            }
        ]),
    )
    .await;

    let app = create_test_app(&mock_server.uri());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/show-a-kitten")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_string(response).await;
    assert!(body.contains("No kitten available"));
}

#[tokio::test]
async fn test_show_kitten_upstream_failure_is_bad_gateway() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/r/Awww/search.json"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let app = create_test_app(&mock_server.uri());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/show-a-kitten")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_health_endpoint() {
    let mock_server = MockServer::start().await;
    let app = create_test_app(&mock_server.uri());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/healthz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..], b"OK");
}
