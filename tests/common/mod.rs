#![allow(dead_code)]

use std::sync::Arc;

use axum::{body::Body, http::Request, Router};
use serde_json::Value;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tower::ServiceExt;

use weaviate_dashboard_rust::config::{ApiConfig, AppConfig, ServerConfig, WeaviateConfig};
use weaviate_dashboard_rust::{app, AppState};

/// Build the dashboard router wired to the given upstream base URL
/// (a wiremock server, a stub, or a dead port).
pub fn test_app(upstream_url: &str) -> Router {
    init_tracing();
    app(Arc::new(AppState::new(test_config(upstream_url))))
}

/// Config pointing the proxy at `upstream_url`, defaults everywhere else.
pub fn test_config(upstream_url: &str) -> AppConfig {
    let url = url::Url::parse(upstream_url).expect("upstream url");
    AppConfig {
        weaviate: WeaviateConfig {
            host: url.host_str().expect("upstream host").to_string(),
            port: url.port().expect("upstream port"),
            protocol: url.scheme().to_string(),
        },
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            debug: false,
        },
        api: ApiConfig {
            default_object_limit: 10,
            max_objects_per_request: 100,
            health_timeout_secs: 5,
        },
    }
}

/// Boot the full app on an OS-assigned port and return its base URL.
///
/// Runs the same serve path as the binary, so routing, middleware and
/// state wiring all see real HTTP. The listener is bound before this
/// returns; queued connections wait for the accept loop.
pub async fn spawn_app(upstream_url: &str) -> String {
    init_tracing();
    let state = Arc::new(AppState::new(test_config(upstream_url)));
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind app listener");
    let addr = listener.local_addr().expect("app addr");

    tokio::spawn(async move {
        axum::serve(listener, app(state)).await.expect("serve app");
    });

    format!("http://{}", addr)
}

/// Base URL for a port nothing listens on; connections are refused.
pub fn dead_upstream() -> String {
    let port = portpicker::pick_unused_port().expect("failed to pick free port");
    format!("http://127.0.0.1:{}", port)
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with_test_writer()
        .try_init();
}

/// Send one request and parse the JSON body. Panics on a non-JSON answer,
/// which doubles as the every-route-returns-JSON check.
pub async fn request_json(app: Router, method: &str, path: &str) -> (u16, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method(method)
                .uri(path)
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");

    let status = response.status().as_u16();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    let json = serde_json::from_slice(&body).expect("response body is not JSON");
    (status, json)
}

pub async fn get_json(app: Router, path: &str) -> (u16, Value) {
    request_json(app, "GET", path).await
}

/// Send one request and return status, content-type, and the raw body.
pub async fn get_raw(app: Router, path: &str) -> (u16, String, String) {
    let response = app
        .oneshot(
            Request::builder()
                .uri(path)
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");

    let status = response.status().as_u16();
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    (status, content_type, String::from_utf8_lossy(&body).into_owned())
}

/// Minimal scripted upstream for failure injection.
///
/// Answers each listed path with the mapped JSON body and hangs up without
/// responding on the kill paths. Every connection serves a single request
/// and closes, so a killed path surfaces as a clean transport error on a
/// fresh connection rather than a retryable idle-pool hiccup.
pub async fn spawn_stub_upstream(
    responses: Vec<(&'static str, Value)>,
    kill_paths: Vec<&'static str>,
) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind stub");
    let addr = listener.local_addr().expect("stub addr");

    tokio::spawn(async move {
        loop {
            let Ok((socket, _)) = listener.accept().await else {
                break;
            };
            let responses = responses.clone();
            let kill_paths = kill_paths.clone();
            tokio::spawn(async move {
                serve_stub_connection(socket, responses, kill_paths).await;
            });
        }
    });

    format!("http://{}", addr)
}

async fn serve_stub_connection(
    mut socket: tokio::net::TcpStream,
    responses: Vec<(&'static str, Value)>,
    kill_paths: Vec<&'static str>,
) {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        match socket.read(&mut chunk).await {
            Ok(0) => break,
            Ok(n) => {
                buf.extend_from_slice(&chunk[..n]);
                if buf.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }
            Err(_) => return,
        }
    }

    let request = String::from_utf8_lossy(&buf);
    let path = request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("")
        .to_string();

    if kill_paths.iter().any(|p| *p == path) {
        tracing::debug!("stub upstream dropping connection for {}", path);
        return;
    }

    let body = responses
        .iter()
        .find(|(p, _)| *p == path)
        .map(|(_, v)| v.to_string())
        .unwrap_or_else(|| "{}".to_string());

    let response = format!(
        "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        body.len(),
        body
    );
    let _ = socket.write_all(response.as_bytes()).await;
    let _ = socket.shutdown().await;
}
