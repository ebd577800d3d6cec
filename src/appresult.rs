use axum::{http::StatusCode, response::{IntoResponse, Response}};
use tracing::error;

pub type AppResult<T> = Result<T, AppError>;

/// Failure of a page itself (listing rows, session store), as opposed to an
/// operation outcome, which is always reported through a flash message.
#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!("{:#}", self.0);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("{}\n\n{}", self.0, self.0.backtrace()),
        )
            .into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
