use sqlx::SqlitePool;

use crate::{
    models::{Rsvp, RsvpListing, RsvpStatus},
    outcome::{OpError, OpResult, Outcome},
};

/// Creates a `maybe` RSVP for the pair unless one already exists. The existence
/// check and the insert are a single statement.
pub async fn send_invitation(
    db_pool: &SqlitePool,
    meeting_id: i64,
    student_id: i64,
    rsvp_id: Option<i64>,
) -> OpResult {
    let fail = |e| OpError::from_db("send invitation", e);

    let mut tx = db_pool.begin().await.map_err(fail)?;

    let inserted = sqlx::query(
        r#"INSERT INTO rsvps (rsvp_id, meeting_id, student_id, status)
           SELECT ?1, ?2, ?3, ?4
           WHERE NOT EXISTS (
               SELECT 1 FROM rsvps WHERE meeting_id = ?2 AND student_id = ?3
           )"#,
    )
    .bind(rsvp_id)
    .bind(meeting_id)
    .bind(student_id)
    .bind(RsvpStatus::Maybe)
    .execute(&mut *tx)
    .await
    .map_err(fail)?
    .rows_affected();

    if inserted == 0 {
        return Err(OpError::duplicate("RSVP already exists for this student."));
    }

    tx.commit().await.map_err(fail)?;
    Ok(Outcome::success("Invitation sent successfully!"))
}

/// Overwrites the status of the pair's RSVP. Any status may follow any other.
pub async fn record_response(
    db_pool: &SqlitePool,
    meeting_id: i64,
    student_id: i64,
    status: RsvpStatus,
) -> OpResult {
    let fail = |e| OpError::from_db("record RSVP response", e);

    let mut tx = db_pool.begin().await.map_err(fail)?;

    let updated = sqlx::query("UPDATE rsvps SET status=? WHERE meeting_id=? AND student_id=?")
        .bind(status)
        .bind(meeting_id)
        .bind(student_id)
        .execute(&mut *tx)
        .await
        .map_err(fail)?
        .rows_affected();
    if updated == 0 {
        return Err(OpError::not_found("RSVP not found."));
    }

    tx.commit().await.map_err(fail)?;
    Ok(Outcome::success("RSVP response recorded!"))
}

pub async fn delete(db_pool: &SqlitePool, meeting_id: i64, student_id: i64) -> OpResult {
    let fail = |e| OpError::from_db("delete", e);

    let mut tx = db_pool.begin().await.map_err(fail)?;

    let deleted = sqlx::query("DELETE FROM rsvps WHERE meeting_id=? AND student_id=?")
        .bind(meeting_id)
        .bind(student_id)
        .execute(&mut *tx)
        .await
        .map_err(fail)?
        .rows_affected();
    if deleted == 0 {
        return Err(OpError::not_found("RSVP not found."));
    }

    tx.commit().await.map_err(fail)?;
    Ok(Outcome::success("RSVP deleted successfully!"))
}

pub async fn find(
    db_pool: &SqlitePool,
    meeting_id: i64,
    student_id: i64,
) -> sqlx::Result<Option<Rsvp>> {
    sqlx::query_as(
        r#"SELECT rsvp_id,meeting_id,student_id,status FROM rsvps
           WHERE meeting_id=? AND student_id=?"#,
    )
    .bind(meeting_id)
    .bind(student_id)
    .fetch_optional(db_pool)
    .await
}

pub async fn list(db_pool: &SqlitePool) -> sqlx::Result<Vec<RsvpListing>> {
    sqlx::query_as(
        r#"SELECT r.rsvp_id, r.meeting_id, m.date, m.time, r.student_id,
                  s.name AS student_name, r.status
           FROM rsvps r
           JOIN meetings m ON m.id = r.meeting_id
           JOIN student s ON s.id = r.student_id
           ORDER BY m.date, m.time, r.rsvp_id"#,
    )
    .fetch_all(db_pool)
    .await
}
