#![allow(dead_code)]

use std::path::PathBuf;

use axum::{
    body::{to_bytes, Body, Bytes},
    http::{header, Method, Request, StatusCode},
    Router,
};
use pageboard::{app, db, AppState, Database};
use serde_json::Value;
use sqlx::{sqlite::SqliteConnectOptions, Connection, SqliteConnection};
use tempfile::TempDir;
use tower::ServiceExt;

/// A board backed by a throwaway SQLite file with the schema applied.
pub struct TestBoard {
    pub app: Router,
    pub path: PathBuf,
    _dir: TempDir,
}

impl TestBoard {
    pub async fn new() -> TestBoard {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("board.db");

        let options = SqliteConnectOptions::new().filename(&path).create_if_missing(true);
        let mut conn = SqliteConnection::connect_with(&options).await.unwrap();
        sqlx::raw_sql(db::SCHEMA).execute(&mut conn).await.unwrap();
        conn.close().await.unwrap();

        let url = format!("sqlite://{}", path.display());
        TestBoard {
            app: app(AppState { db: Database::new(Some(url)) }),
            path,
            _dir: dir,
        }
    }

    pub async fn conn(&self) -> SqliteConnection {
        SqliteConnection::connect_with(&SqliteConnectOptions::new().filename(&self.path))
            .await
            .unwrap()
    }

    pub async fn create_page(&self, handle: &str) {
        let (status, _) = send_json(&self.app, Method::POST, "/api/pages", &serde_json::json!({ "handle": handle })).await;
        assert_eq!(status, StatusCode::OK);
    }

    pub async fn post_comment(&self, page: &str, comment: &str) -> (StatusCode, Bytes) {
        send_json(
            &self.app,
            Method::POST,
            "/api/comments",
            &serde_json::json!({ "page": page, "comment": comment }),
        )
        .await
    }
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Body) -> (StatusCode, Bytes) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body)
        .unwrap();

    send_request(app, request).await
}

pub async fn send_request(app: &Router, request: Request<Body>) -> (StatusCode, Bytes) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body)
}

pub async fn send_json(app: &Router, method: Method, uri: &str, body: &Value) -> (StatusCode, Bytes) {
    send(app, method, uri, Body::from(body.to_string())).await
}

/// A CORS preflight, as a browser would send before a cross-site POST.
pub fn preflight(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::OPTIONS)
        .uri(uri)
        .header(header::ORIGIN, "https://blog.example")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap()
}

/// Well past axum's default 2 MiB body limit.
pub fn oversized_body() -> Body {
    Body::from(format!(r#"{{"handle":"{}"}}"#, "x".repeat(3 * 1024 * 1024)))
}

pub fn json(body: &Bytes) -> Value {
    serde_json::from_slice(body).unwrap()
}
