use axum::{body::Bytes, debug_handler, extract::{rejection::BytesRejection, State}, response::IntoResponse, routing::post, Json, Router};
use serde::Serialize;

use crate::{db::{self, Database}, invalid_method, validate::{self, GetField, PAGE_SCHEMA}, AppError, AppResult, AppState};

#[derive(Debug, Serialize)]
pub(crate) struct PageCreated {
    handle: String,
}

/// Registers a page. Every failure, bad input or database, is a 400.
#[debug_handler(state = crate::AppState)]
pub(crate) async fn new_page(
    State(db): State<Database>,
    body: Result<Bytes, BytesRejection>,
) -> AppResult<impl IntoResponse> {
    let body = body.map_err(AppError::parse)?;
    let body = validate::parse_body(&body, &PAGE_SCHEMA).map_err(AppError::parse)?;
    let handle = body.get_str_field("handle").map_err(AppError::parse)?;

    let mut conn = db.connect().await.map_err(AppError::parse)?;
    let inserted = sqlx::query("INSERT INTO page (handle) VALUES (?)")
        .bind(&handle)
        .execute(&mut conn)
        .await;
    db::release(conn).await;
    inserted.map_err(AppError::parse)?;

    tracing::info!(%handle, "page registered");
    Ok(Json(PageCreated { handle }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/pages", post(new_page).fallback(invalid_method))
}
