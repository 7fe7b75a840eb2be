pub mod appresult;
pub mod comments;
pub mod config;
pub mod db;
pub mod pages;
pub mod res;
pub mod validate;

use axum::{extract::FromRef, http::Method, Router};
use tower_http::trace::TraceLayer;

pub use appresult::{AppError, AppResult, ErrorKind};
pub use config::Config;
pub use db::Database;

#[derive(Clone, FromRef)]
pub struct AppState {
    pub db: Database,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        Self { db: Database::new(config.database_url.clone()) }
    }
}

/// Both endpoints, ready to serve.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(pages::router())
        .merge(comments::router())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

pub(crate) async fn invalid_method(method: Method) -> AppError {
    AppError::invalid_method(&method)
}
