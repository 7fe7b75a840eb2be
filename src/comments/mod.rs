mod list;
mod new;

use axum::{routing::get, Router};

use crate::{invalid_method, AppState};

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/comments",
            get(list::list_comments)
                .post(new::new_comment)
                .fallback(invalid_method),
        )
}
