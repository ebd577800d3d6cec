use axum::{
    Form, debug_handler,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use sqlx::SqlitePool;
use tower_sessions::Session;
use tracing::info;

use crate::{
    AppResult, AppState, include_res,
    outcome::settle,
    reference,
    res::{self, escape},
    session::{flash, take_flashes},
};

use super::{FORM_PATH, ReportForm, store};

async fn filter_form(db_pool: &SqlitePool) -> AppResult<String> {
    let clubs = reference::clubs(db_pool).await?;
    let rooms = reference::rooms(db_pool).await?;

    Ok(include_res!(str, "/pages/report.html")
        .replace("{club_options}", &res::options(&clubs, |c| c.id, |c| c.name.clone()))
        .replace("{room_options}", &res::options(&rooms, |r| r.id, |r| r.label())))
}

#[debug_handler(state = AppState)]
pub(crate) async fn report_form(
    State(db_pool): State<SqlitePool>,
    session: Session,
) -> AppResult<Response> {
    let flashes = take_flashes(&session).await?;
    let body = filter_form(&db_pool).await?;

    Ok(res::page("Meeting Report", &flashes, &body).into_response())
}

#[debug_handler(state = AppState)]
pub(crate) async fn generate_report(
    State(db_pool): State<SqlitePool>,
    session: Session,
    Form(form): Form<ReportForm>,
) -> AppResult<Response> {
    let filter = match form.filter() {
        Ok(filter) => filter,
        Err(e) => {
            flash(&session, settle(Err(e))).await?;
            return Ok(Redirect::to(FORM_PATH).into_response());
        }
    };

    let report = store::generate(&db_pool, &filter).await?;
    info!(
        "report {}..{} club {} room {}: {} meetings",
        filter.start,
        filter.end,
        filter.club_id,
        filter.room_id,
        report.meetings.len()
    );

    let mut meeting_rows = String::new();
    for m in &report.meetings {
        let (invited, accepted) = report
            .counts_for(m.id)
            .map(|c| (c.invited_count, c.accepted_count))
            .unwrap_or_default();
        meeting_rows += &format!(
            concat!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td>",
                "<td>{}</td><td>{}</td><td>{}</td></tr>",
            ),
            m.id,
            m.date,
            res::hhmm(m.time),
            m.duration.map(|d| d.to_string()).unwrap_or_default(),
            escape(m.description.as_deref().unwrap_or_default()),
            invited,
            accepted,
        );
    }

    let average_duration = report
        .average_duration
        .map(|avg| format!("{avg:.1} minutes"))
        .unwrap_or_else(|| "n/a".to_owned());

    let body = include_res!(str, "/pages/report_results.html")
        .replace("{form}", &filter_form(&db_pool).await?)
        .replace("{start}", &filter.start.to_string())
        .replace("{end}", &filter.end.to_string())
        .replace("{meeting_rows}", &meeting_rows)
        .replace("{average_duration}", &average_duration);

    let flashes = take_flashes(&session).await?;
    Ok(res::page("Meeting Report", &flashes, &body).into_response())
}
