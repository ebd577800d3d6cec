use axum::{debug_handler, response::IntoResponse};

use crate::{Markdown, include_res};

#[debug_handler]
pub async fn home() -> impl IntoResponse {
    Markdown(include_res!(str, "/pages/home.md"))
}
