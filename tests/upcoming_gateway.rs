//! `HttpUpcomingBooks` against a local stand-in for the third-party provider.

use axum::{http::StatusCode, routing::get, Json, Router};

use bookshelf_app::books::gateway::{HttpUpcomingBooks, UpcomingBooks};
use bookshelf_kernel::settings::ThirdPartySettings;

async fn spawn_provider(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

fn gateway(url: String) -> HttpUpcomingBooks {
    HttpUpcomingBooks::new(&ThirdPartySettings {
        url,
        upcoming_path: "/word".to_string(),
    })
}

#[tokio::test]
async fn fetches_titles_from_provider() {
    let url = spawn_provider(Router::new().route(
        "/word",
        get(|| async { Json(vec!["Mocked Upcoming"]) }),
    ))
    .await;

    let titles = gateway(url).fetch_upcoming().await.unwrap();
    assert_eq!(titles, vec!["Mocked Upcoming".to_string()]);
}

#[tokio::test]
async fn non_success_status_is_reported() {
    let url = spawn_provider(Router::new().route(
        "/word",
        get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "busy") }),
    ))
    .await;

    let err = gateway(url).fetch_upcoming().await.unwrap_err();
    assert_eq!(err.status, Some(503));
}

#[tokio::test]
async fn unexpected_body_is_reported() {
    let url = spawn_provider(Router::new().route(
        "/word",
        get(|| async { Json(serde_json::json!({ "word": "nope" })) }),
    ))
    .await;

    let err = gateway(url).fetch_upcoming().await.unwrap_err();
    assert_eq!(err.status, Some(200));
    assert!(err.cause.contains("unexpected body"));
}

#[tokio::test]
async fn unreachable_provider_has_no_status() {
    // Bind then drop to obtain a port nothing listens on
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = gateway(format!("http://{}", addr))
        .fetch_upcoming()
        .await
        .unwrap_err();
    assert_eq!(err.status, None);
}
