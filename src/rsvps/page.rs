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

use super::{PATH, RsvpForm, store};

#[debug_handler(state = AppState)]
pub(crate) async fn rsvps_page(
    State(db_pool): State<SqlitePool>,
    session: Session,
) -> AppResult<Response> {
    let flashes = take_flashes(&session).await?;

    let meetings = meetings::store::list(&db_pool).await?;
    let students = reference::students(&db_pool).await?;
    let rsvps = store::list(&db_pool).await?;

    let meeting_options = res::options(&meetings, |m| m.id, |m| {
        format!("#{} {} {} ({})", m.id, m.date, res::hhmm(m.time), m.club_name)
    });

    let mut rsvp_rows = String::new();
    for r in rsvps {
        rsvp_rows += &format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            r.rsvp_id,
            r.meeting_id,
            r.date,
            res::hhmm(r.time),
            escape(&r.student_name),
            r.status,
        );
    }

    let body = include_res!(str, "/pages/rsvps.html")
        .replace("{meeting_options}", &meeting_options)
        .replace("{student_options}", &res::options(&students, |s| s.id, |s| s.name.clone()))
        .replace("{rsvp_rows}", &rsvp_rows);

    Ok(res::page("Invitations and RSVPs", &flashes, &body).into_response())
}

#[debug_handler(state = AppState)]
pub(crate) async fn submit_rsvp(
    State(db_pool): State<SqlitePool>,
    session: Session,
    Form(form): Form<RsvpForm>,
) -> AppResult<Response> {
    let outcome = super::apply(&db_pool, form).await;
    flash(&session, outcome).await?;

    Ok(Redirect::to(PATH).into_response())
}
