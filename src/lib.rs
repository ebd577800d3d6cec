pub mod appresult;
pub mod config;
pub mod db;
pub mod form;
pub mod index;
pub mod meetings;
pub mod models;
pub mod organizers;
pub mod outcome;
pub mod reference;
pub mod reports;
pub mod res;
pub mod rsvps;
pub mod session;

use std::ops::Deref;

use axum::{
    Router,
    extract::FromRef,
    response::{Html, IntoResponse},
    routing::get,
};
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;

pub use appresult::{AppError, AppResult};

#[derive(Clone, FromRef)]
pub struct AppState {
    pub db_pool: SqlitePool,
}

/// Every route, with sessions and request tracing attached.
pub fn app(state: AppState, session_idle_minutes: i64) -> Router {
    Router::new()
        .route("/", get(index::home))
        .merge(meetings::router())
        .merge(organizers::router())
        .merge(rsvps::router())
        .merge(reports::router())
        .with_state(state)
        .layer(session::layer(session_idle_minutes))
        .layer(TraceLayer::new_for_http())
}

pub struct Markdown<T>(pub T);

impl<T> IntoResponse for Markdown<T>
where
    T: Deref<Target = str>,
{
    fn into_response(self) -> axum::response::Response {
        use pulldown_cmark::{Options, Parser};

        let parser = Parser::new_ext(&*self.0, Options::empty());

        let mut html_output = String::new();
        pulldown_cmark::html::push_html(&mut html_output, parser);
        Html(html_output).into_response()
    }
}
