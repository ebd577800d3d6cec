use axum::{
    Form, debug_handler,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use sqlx::SqlitePool;
use tower_sessions::Session;

use crate::{
    AppResult, AppState, include_res, reference,
    res::{self, escape},
    session::{flash, take_flashes},
};

use super::{MeetingForm, PATH, store};

#[debug_handler(state = AppState)]
pub(crate) async fn meetings_page(
    State(db_pool): State<SqlitePool>,
    session: Session,
) -> AppResult<Response> {
    let flashes = take_flashes(&session).await?;

    let clubs = reference::clubs(&db_pool).await?;
    let rooms = reference::rooms(&db_pool).await?;
    let meetings = store::list(&db_pool).await?;

    let mut meeting_rows = String::new();
    for m in meetings {
        meeting_rows += &format!(
            concat!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td>",
                "<td>{}</td><td>{}{}</td><td>{}</td></tr>",
            ),
            m.id,
            m.date,
            res::hhmm(m.time),
            m.duration.map(|d| d.to_string()).unwrap_or_default(),
            escape(&m.club_name),
            escape(m.building.as_deref().unwrap_or_default()),
            escape(m.number.as_deref().unwrap_or_default()),
            escape(m.description.as_deref().unwrap_or_default()),
        );
    }

    let body = include_res!(str, "/pages/meetings.html")
        .replace("{club_options}", &res::options(&clubs, |c| c.id, |c| c.name.clone()))
        .replace("{room_options}", &res::options(&rooms, |r| r.id, |r| r.label()))
        .replace("{meeting_rows}", &meeting_rows);

    Ok(res::page("Add, Edit or Delete Meetings", &flashes, &body).into_response())
}

#[debug_handler(state = AppState)]
pub(crate) async fn submit_meeting(
    State(db_pool): State<SqlitePool>,
    session: Session,
    Form(form): Form<MeetingForm>,
) -> AppResult<Response> {
    let outcome = super::apply(&db_pool, form).await;
    flash(&session, outcome).await?;

    Ok(Redirect::to(PATH).into_response())
}
