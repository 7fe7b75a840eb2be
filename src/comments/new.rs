use axum::{body::Bytes, debug_handler, extract::{rejection::BytesRejection, State}, response::IntoResponse, Json};
use serde::Serialize;
use uuid::Uuid;

use crate::{db::{self, Database}, validate::{self, GetField, COMMENT_SCHEMA}, AppError, AppResult};

#[derive(Debug, Serialize)]
pub(crate) struct CommentCreated {
    id: String,
}

/// Posts a comment. Once the body is valid, any failure reads as "page not found".
#[debug_handler(state = crate::AppState)]
pub(crate) async fn new_comment(
    State(db): State<Database>,
    body: Result<Bytes, BytesRejection>,
) -> AppResult<impl IntoResponse> {
    let body = body.map_err(AppError::parse)?;
    let body = validate::parse_body(&body, &COMMENT_SCHEMA).map_err(AppError::parse)?;
    let page = body.get_str_field("page").map_err(AppError::parse)?;
    let comment = body.get_str_field("comment").map_err(AppError::parse)?;

    let id = Uuid::new_v4().to_string();

    let mut conn = db.connect().await.map_err(AppError::page_not_found)?;
    let inserted = sqlx::query("INSERT INTO comment (id, page, comment) VALUES (?, ?, ?)")
        .bind(&id)
        .bind(&page)
        .bind(&comment)
        .execute(&mut conn)
        .await;
    db::release(conn).await;
    inserted.map_err(AppError::page_not_found)?;

    tracing::info!(%id, %page, "comment posted");
    Ok(Json(CommentCreated { id }))
}
