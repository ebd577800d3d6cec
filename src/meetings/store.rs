use sqlx::{SqliteConnection, SqlitePool};
use time::{Date, Time};

use crate::{
    models::{Meeting, MeetingListing},
    outcome::{OpError, OpResult, Outcome},
};

/// Everything a meeting row holds besides its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeetingFields {
    pub date: Date,
    pub time: Time,
    pub duration: Option<i64>,
    pub description: Option<String>,
    pub club_id: i64,
    pub room_id: i64,
}

async fn insert(
    conn: &mut SqliteConnection,
    id: Option<i64>,
    fields: &MeetingFields,
) -> sqlx::Result<i64> {
    let result = sqlx::query(
        r#"INSERT INTO meetings (id,date,time,duration,description,club_id,room_id)
           VALUES (?,?,?,?,?,?,?)"#,
    )
    .bind(id)
    .bind(fields.date)
    .bind(fields.time)
    .bind(fields.duration)
    .bind(&fields.description)
    .bind(fields.club_id)
    .bind(fields.room_id)
    .execute(conn)
    .await?;

    Ok(result.last_insert_rowid())
}

pub async fn create(db_pool: &SqlitePool, fields: &MeetingFields) -> OpResult {
    let fail = |e| OpError::from_db("add", e);

    let mut tx = db_pool.begin().await.map_err(fail)?;
    let id = insert(&mut tx, None, fields).await.map_err(fail)?;
    tx.commit().await.map_err(fail)?;

    tracing::debug!("created meeting {id}");
    Ok(Outcome::success("Meeting added successfully!"))
}

/// Overwrites every field of meeting `id`, or creates a meeting with exactly
/// that id when there is none.
pub async fn upsert(db_pool: &SqlitePool, id: i64, fields: &MeetingFields) -> OpResult {
    let update_failed = |e| OpError::from_db("update", e);
    let add_failed = |e| OpError::from_db("add", e);

    let mut tx = db_pool.begin().await.map_err(update_failed)?;

    let updated = sqlx::query(
        "UPDATE meetings SET date=?,time=?,duration=?,description=?,club_id=?,room_id=? WHERE id=?",
    )
    .bind(fields.date)
    .bind(fields.time)
    .bind(fields.duration)
    .bind(&fields.description)
    .bind(fields.club_id)
    .bind(fields.room_id)
    .bind(id)
    .execute(&mut *tx)
    .await
    .map_err(update_failed)?
    .rows_affected();

    if updated > 0 {
        tx.commit().await.map_err(update_failed)?;
        return Ok(Outcome::success("Meeting updated successfully!"));
    }

    insert(&mut tx, Some(id), fields).await.map_err(add_failed)?;
    tx.commit().await.map_err(add_failed)?;

    Ok(Outcome::success("Meeting added successfully!"))
}

/// Deletes the meeting together with its organizer links and RSVPs.
pub async fn delete(db_pool: &SqlitePool, id: i64) -> OpResult {
    let fail = |e| OpError::from_db("delete", e);

    let mut tx = db_pool.begin().await.map_err(fail)?;

    let exists = sqlx::query_as::<_, (i64,)>("SELECT 1 FROM meetings WHERE id=?")
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(fail)?
        .is_some();
    if !exists {
        return Err(OpError::not_found("Meeting not found."));
    }

    for stmt in [
        "DELETE FROM meeting_organizers WHERE meeting_id=?",
        "DELETE FROM rsvps WHERE meeting_id=?",
        "DELETE FROM meetings WHERE id=?",
    ] {
        sqlx::query(stmt).bind(id).execute(&mut *tx).await.map_err(fail)?;
    }

    tx.commit().await.map_err(fail)?;
    Ok(Outcome::success("Meeting deleted successfully!"))
}

pub async fn get(db_pool: &SqlitePool, id: i64) -> sqlx::Result<Option<Meeting>> {
    sqlx::query_as(
        "SELECT id,date,time,duration,description,club_id,room_id FROM meetings WHERE id=?",
    )
    .bind(id)
    .fetch_optional(db_pool)
    .await
}

pub async fn list(db_pool: &SqlitePool) -> sqlx::Result<Vec<MeetingListing>> {
    sqlx::query_as(
        r#"SELECT m.id, m.date, m.time, m.duration, m.description,
                  c.name AS club_name, r.building, r.number
           FROM meetings m
           JOIN club c ON c.id = m.club_id
           JOIN room r ON r.id = m.room_id
           ORDER BY m.date, m.time, m.id"#,
    )
    .fetch_all(db_pool)
    .await
}
