use axum::{
    Form, debug_handler,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use sqlx::SqlitePool;
use tower_sessions::Session;

use crate::{
    AppResult, AppState, include_res, meetings, reference,
    res::{self, escape},
    session::{flash, take_flashes},
};

use super::{OrganizerForm, PATH, store};

#[debug_handler(state = AppState)]
pub(crate) async fn organizers_page(
    State(db_pool): State<SqlitePool>,
    session: Session,
) -> AppResult<Response> {
    let flashes = take_flashes(&session).await?;

    let meetings = meetings::store::list(&db_pool).await?;
    let students = reference::students(&db_pool).await?;
    let organizers = store::list(&db_pool).await?;

    let meeting_options = res::options(&meetings, |m| m.id, |m| {
        format!("#{} {} {} ({})", m.id, m.date, res::hhmm(m.time), m.club_name)
    });

    let organizer_rows: String = organizers
        .iter()
        .map(|o| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
                o.meeting_id,
                o.date,
                escape(&o.student_name)
            )
        })
        .collect();

    let body = include_res!(str, "/pages/organizers.html")
        .replace("{meeting_options}", &meeting_options)
        .replace("{student_options}", &res::options(&students, |s| s.id, |s| s.name.clone()))
        .replace("{organizer_rows}", &organizer_rows);

    Ok(res::page("Manage Meeting Organizers", &flashes, &body).into_response())
}

#[debug_handler(state = AppState)]
pub(crate) async fn submit_organizer(
    State(db_pool): State<SqlitePool>,
    session: Session,
    Form(form): Form<OrganizerForm>,
) -> AppResult<Response> {
    let outcome = super::apply(&db_pool, form).await;
    flash(&session, outcome).await?;

    Ok(Redirect::to(PATH).into_response())
}
