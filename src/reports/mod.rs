mod page;
pub mod store;

use axum::{
    Router,
    routing::{get, post},
};
use serde::Deserialize;

use crate::{AppState, form, outcome::OpError};

pub use store::{MeetingCounts, Report, ReportFilter};

pub const FORM_PATH: &str = "/report";
pub const GENERATE_PATH: &str = "/w";

pub fn router() -> Router<AppState> {
    Router::new()
        .route(FORM_PATH, get(page::report_form))
        .route(GENERATE_PATH, post(page::generate_report))
}

#[derive(Debug, Default, Deserialize)]
pub struct ReportForm {
    #[serde(rename = "startDate")]
    pub start_date: Option<String>,
    #[serde(rename = "endDate")]
    pub end_date: Option<String>,
    pub club_id: Option<String>,
    pub room_id: Option<String>,
}

impl ReportForm {
    pub fn filter(self) -> Result<ReportFilter, OpError> {
        let required = || OpError::validation("All fields are required.");
        Ok(ReportFilter {
            start: form::date(self.start_date).ok_or_else(required)?,
            end: form::date(self.end_date).ok_or_else(required)?,
            club_id: form::parse(self.club_id).ok_or_else(required)?,
            room_id: form::parse(self.room_id).ok_or_else(required)?,
        })
    }
}
