use sqlx::{FromRow, SqlitePool};
use time::Date;

use crate::models::Meeting;

/// Inclusive date range plus exact club and room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportFilter {
    pub start: Date,
    pub end: Date,
    pub club_id: i64,
    pub room_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct MeetingCounts {
    pub id: i64,
    /// Every RSVP row, whatever its status.
    pub invited_count: i64,
    /// RSVP rows with status `yes`.
    pub accepted_count: i64,
}

#[derive(Debug, Clone)]
pub struct Report {
    pub meetings: Vec<Meeting>,
    pub counts: Vec<MeetingCounts>,
    pub average_duration: Option<f64>,
}

impl Report {
    pub fn counts_for(&self, meeting_id: i64) -> Option<&MeetingCounts> {
        self.counts.iter().find(|c| c.id == meeting_id)
    }
}

const WHERE: &str = "WHERE m.date BETWEEN ? AND ? AND m.club_id = ? AND m.room_id = ?";

pub async fn meetings(
    db_pool: &SqlitePool,
    filter: &ReportFilter,
) -> sqlx::Result<Vec<Meeting>> {
    let sql = format!(
        r#"SELECT m.id,m.date,m.time,m.duration,m.description,m.club_id,m.room_id
           FROM meetings m
           {WHERE}
           ORDER BY m.date,m.time,m.id"#
    );
    sqlx::query_as(&sql)
        .bind(filter.start)
        .bind(filter.end)
        .bind(filter.club_id)
        .bind(filter.room_id)
        .fetch_all(db_pool)
        .await
}

/// Meetings without any RSVP still get a row, with zero counts.
pub async fn counts(
    db_pool: &SqlitePool,
    filter: &ReportFilter,
) -> sqlx::Result<Vec<MeetingCounts>> {
    let sql = format!(
        r#"SELECT m.id,
                  COUNT(r.rsvp_id) AS invited_count,
                  COALESCE(SUM(CASE WHEN r.status = 'yes' THEN 1 ELSE 0 END), 0) AS accepted_count
           FROM meetings m
           LEFT JOIN rsvps r ON r.meeting_id = m.id
           {WHERE}
           GROUP BY m.id
           ORDER BY m.id"#
    );
    sqlx::query_as(&sql)
        .bind(filter.start)
        .bind(filter.end)
        .bind(filter.club_id)
        .bind(filter.room_id)
        .fetch_all(db_pool)
        .await
}

pub async fn average_duration(
    db_pool: &SqlitePool,
    filter: &ReportFilter,
) -> sqlx::Result<Option<f64>> {
    let sql = format!("SELECT AVG(m.duration) FROM meetings m {WHERE}");
    let (average,): (Option<f64>,) = sqlx::query_as(&sql)
        .bind(filter.start)
        .bind(filter.end)
        .bind(filter.club_id)
        .bind(filter.room_id)
        .fetch_one(db_pool)
        .await?;
    Ok(average)
}

/// Runs the three report queries one after another. They share the filter but
/// not a snapshot.
pub async fn generate(db_pool: &SqlitePool, filter: &ReportFilter) -> sqlx::Result<Report> {
    Ok(Report {
        meetings: meetings(db_pool, filter).await?,
        counts: counts(db_pool, filter).await?,
        average_duration: average_duration(db_pool, filter).await?,
    })
}
