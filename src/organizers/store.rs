use sqlx::SqlitePool;

use crate::{
    models::{MeetingOrganizer, OrganizerListing},
    outcome::{OpError, OpResult, Outcome},
};

/// Makes the student an organizer of the meeting. Adding an existing pair again
/// changes nothing and still succeeds.
pub async fn add(db_pool: &SqlitePool, meeting_id: i64, student_id: i64) -> OpResult {
    let fail = |e| OpError::from_db("add", e);

    let mut tx = db_pool.begin().await.map_err(fail)?;

    let (meeting_exists, student_exists): (i64, i64) = sqlx::query_as(
        r#"SELECT EXISTS(SELECT 1 FROM meetings WHERE id=?),
                  EXISTS(SELECT 1 FROM student WHERE id=?)"#,
    )
    .bind(meeting_id)
    .bind(student_id)
    .fetch_one(&mut *tx)
    .await
    .map_err(fail)?;

    if meeting_exists == 0 || student_exists == 0 {
        return Err(OpError::ReferentialIntegrity("Meeting or Student not found.".into()));
    }

    sqlx::query(
        r#"INSERT INTO meeting_organizers (meeting_id, student_id)
           SELECT ?1, ?2
           WHERE NOT EXISTS (
               SELECT 1 FROM meeting_organizers WHERE meeting_id = ?1 AND student_id = ?2
           )"#,
    )
    .bind(meeting_id)
    .bind(student_id)
    .execute(&mut *tx)
    .await
    .map_err(fail)?;

    tx.commit().await.map_err(fail)?;
    Ok(Outcome::success("Organizer added successfully!"))
}

pub async fn delete(db_pool: &SqlitePool, meeting_id: i64, student_id: i64) -> OpResult {
    let fail = |e| OpError::from_db("delete", e);

    let mut tx = db_pool.begin().await.map_err(fail)?;

    let deleted = sqlx::query("DELETE FROM meeting_organizers WHERE meeting_id=? AND student_id=?")
        .bind(meeting_id)
        .bind(student_id)
        .execute(&mut *tx)
        .await
        .map_err(fail)?
        .rows_affected();
    if deleted == 0 {
        return Err(OpError::not_found("Organizer not found."));
    }

    tx.commit().await.map_err(fail)?;
    Ok(Outcome::success("Organizer deleted successfully!"))
}

pub async fn for_meeting(
    db_pool: &SqlitePool,
    meeting_id: i64,
) -> sqlx::Result<Vec<MeetingOrganizer>> {
    sqlx::query_as(
        r#"SELECT meeting_id,student_id FROM meeting_organizers
           WHERE meeting_id=? ORDER BY student_id"#,
    )
    .bind(meeting_id)
    .fetch_all(db_pool)
    .await
}

pub async fn list(db_pool: &SqlitePool) -> sqlx::Result<Vec<OrganizerListing>> {
    sqlx::query_as(
        r#"SELECT o.meeting_id, m.date, o.student_id, s.name AS student_name
           FROM meeting_organizers o
           JOIN meetings m ON m.id = o.meeting_id
           JOIN student s ON s.id = o.student_id
           ORDER BY m.date, o.meeting_id, s.name"#,
    )
    .fetch_all(db_pool)
    .await
}
