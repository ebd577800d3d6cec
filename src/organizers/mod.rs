mod page;
pub mod store;

use axum::{Router, routing::get};
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::{
    AppState, form,
    outcome::{OpError, OpResult, Outcome, settle},
};

pub const PATH: &str = "/manage_organizers";

pub fn router() -> Router<AppState> {
    Router::new().route(PATH, get(page::organizers_page).post(page::submit_organizer))
}

#[derive(Debug, Default, Deserialize)]
pub struct OrganizerForm {
    pub action: Option<String>,
    pub meeting_id: Option<String>,
    pub student_id: Option<String>,
}

pub async fn apply(db_pool: &SqlitePool, form: OrganizerForm) -> Outcome {
    settle(dispatch(db_pool, form).await)
}

async fn dispatch(db_pool: &SqlitePool, form: OrganizerForm) -> OpResult {
    let meeting_id = form::parse(form.meeting_id);
    let student_id = form::parse(form.student_id);

    match form.action.as_deref() {
        Some("add") => {
            let (Some(meeting_id), Some(student_id)) = (meeting_id, student_id) else {
                return Err(OpError::ReferentialIntegrity("Meeting or Student not found.".into()));
            };
            store::add(db_pool, meeting_id, student_id).await
        }
        Some("delete") => {
            let (Some(meeting_id), Some(student_id)) = (meeting_id, student_id) else {
                return Err(OpError::validation("Meeting or Organizer not specified."));
            };
            store::delete(db_pool, meeting_id, student_id).await
        }
        _ => Err(OpError::validation("Invalid action.")),
    }
}
