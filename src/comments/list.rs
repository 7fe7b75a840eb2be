use axum::{debug_handler, extract::{rejection::QueryRejection, Query, State}, http::Method, response::IntoResponse, Json};
use serde::Deserialize;

use crate::{db::{self, Comment, Database}, AppError, AppResult};

#[derive(Debug, Deserialize)]
pub(crate) struct ListCommentsQuery {
    page: Option<String>,
}

/// Newest first. An unknown page is just an empty list.
#[debug_handler(state = crate::AppState)]
pub(crate) async fn list_comments(
    method: Method,
    State(db): State<Database>,
    query: Result<Query<ListCommentsQuery>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    // the GET route also answers HEAD, which is not part of this endpoint
    if method == Method::HEAD {
        return Err(AppError::invalid_method(&method));
    }

    let Query(ListCommentsQuery { page }) = query.map_err(AppError::page_not_found)?;
    let Some(page) = page.filter(|page| !page.is_empty()) else {
        return Err(AppError::page_not_found(anyhow::anyhow!("missing page query parameter")));
    };

    let mut conn = db.connect().await.map_err(AppError::page_not_found)?;
    let comments = sqlx::query_as::<_, Comment>(
        "SELECT id, comment, created_at FROM comment WHERE page = ? ORDER BY created_at DESC, rowid DESC",
    )
    .bind(&page)
    .fetch_all(&mut conn)
    .await;
    db::release(conn).await;
    let comments = comments.map_err(AppError::page_not_found)?;

    tracing::debug!(%page, count = comments.len(), "comments listed");
    Ok(Json(comments))
}
