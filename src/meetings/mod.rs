mod page;
pub mod store;

use axum::{Router, routing::get};
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::{
    AppState, form,
    outcome::{OpError, OpResult, Outcome, settle},
};

pub use store::MeetingFields;

pub const PATH: &str = "/add_edit_delete";

pub fn router() -> Router<AppState> {
    Router::new().route(PATH, get(page::meetings_page).post(page::submit_meeting))
}

#[derive(Debug, Default, Deserialize)]
pub struct MeetingForm {
    pub action: Option<String>,
    #[serde(rename = "meetingID")]
    pub meeting_id: Option<String>,
    #[serde(rename = "meetingDate")]
    pub meeting_date: Option<String>,
    #[serde(rename = "meetingTime")]
    pub meeting_time: Option<String>,
    pub duration: Option<String>,
    pub description: Option<String>,
    pub club_id: Option<String>,
    pub room_id: Option<String>,
}

impl MeetingForm {
    fn id(&self) -> Result<Option<i64>, OpError> {
        match form::present(self.meeting_id.clone()) {
            None => Ok(None),
            Some(raw) => raw
                .parse()
                .map(Some)
                .map_err(|_| OpError::validation(format!("Meeting ID '{raw}' is not a number."))),
        }
    }

    pub fn fields(&self) -> Result<MeetingFields, OpError> {
        let date = form::date(self.meeting_date.clone())
            .ok_or(OpError::validation("Meeting date is required (YYYY-MM-DD)."))?;
        let time = form::time(self.meeting_time.clone())
            .ok_or(OpError::validation("Meeting time is required (HH:MM)."))?;
        let club_id = form::parse(self.club_id.clone())
            .ok_or(OpError::validation("A club is required."))?;
        let room_id = form::parse(self.room_id.clone())
            .ok_or(OpError::validation("A room is required."))?;

        let duration = match form::present(self.duration.clone()) {
            None => None,
            Some(raw) => {
                let minutes = raw.parse().map_err(|_| {
                    OpError::validation(format!(
                        "Duration '{raw}' is not a whole number of minutes."
                    ))
                })?;
                Some(minutes)
            }
        };

        Ok(MeetingFields {
            date,
            time,
            duration,
            description: form::present(self.description.clone()),
            club_id,
            room_id,
        })
    }
}

/// Runs the form's action: `delete` removes the meeting, anything else saves
/// it, updating (or creating under that id) when an id is given.
pub async fn apply(db_pool: &SqlitePool, form: MeetingForm) -> Outcome {
    settle(dispatch(db_pool, &form).await)
}

async fn dispatch(db_pool: &SqlitePool, form: &MeetingForm) -> OpResult {
    let id = form.id();

    if form.action.as_deref() == Some("delete") {
        let Some(id) = id? else {
            return Err(OpError::not_found("Meeting not found."));
        };
        return store::delete(db_pool, id).await;
    }

    let fields = form.fields()?;
    match id? {
        Some(id) => store::upsert(db_pool, id, &fields).await,
        None => store::create(db_pool, &fields).await,
    }
}
