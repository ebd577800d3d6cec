mod page;
pub mod store;

use axum::{Router, routing::get};
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::{
    AppState, form,
    models::{RsvpStatus, UnknownStatus},
    outcome::{OpError, OpResult, Outcome, settle},
};

pub const PATH: &str = "/invites_rsvps";

pub const SEND_INVITATION: &str = "Send Invitation";
pub const RECORD_RESPONSE: &str = "Record Response";
pub const DELETE_RSVP: &str = "Delete RSVP";

pub fn router() -> Router<AppState> {
    Router::new().route(PATH, get(page::rsvps_page).post(page::submit_rsvp))
}

#[derive(Debug, Default, Deserialize)]
pub struct RsvpForm {
    pub action: Option<String>,
    pub rsvp_id: Option<String>,
    pub meeting_id: Option<String>,
    pub student_id: Option<String>,
    pub rsvp_status: Option<String>,
}

pub async fn apply(db_pool: &SqlitePool, form: RsvpForm) -> Outcome {
    settle(dispatch(db_pool, form).await)
}

async fn dispatch(db_pool: &SqlitePool, form: RsvpForm) -> OpResult {
    let action = form.action.as_deref().unwrap_or_default();
    if ![SEND_INVITATION, RECORD_RESPONSE, DELETE_RSVP].contains(&action) {
        return Err(OpError::validation("Invalid action."));
    }

    let meeting_id = form::parse(form.meeting_id);
    let student_id = form::parse(form.student_id);
    let (Some(meeting_id), Some(student_id)) = (meeting_id, student_id) else {
        return Err(OpError::validation("Meeting and student are required."));
    };

    match action {
        SEND_INVITATION => {
            let rsvp_id = form::parse(form.rsvp_id);
            store::send_invitation(db_pool, meeting_id, student_id, rsvp_id).await
        }
        RECORD_RESPONSE => {
            // A missing RSVP is reported before anything is said about the status.
            let existing = store::find(db_pool, meeting_id, student_id)
                .await
                .map_err(|e| OpError::from_db("record RSVP response", e))?;
            if existing.is_none() {
                return Err(OpError::not_found("RSVP not found."));
            }

            let raw = form::present(form.rsvp_status)
                .ok_or(OpError::validation("An RSVP status is required."))?;
            let status: RsvpStatus = raw
                .parse()
                .map_err(|e: UnknownStatus| OpError::validation(e.to_string()))?;
            store::record_response(db_pool, meeting_id, student_id, status).await
        }
        _ => store::delete(db_pool, meeting_id, student_id).await,
    }
}
