#![allow(dead_code)]

use clubmeet::{db, meetings::MeetingFields, reference};
use sqlx::SqlitePool;
use time::macros::{date, time};

pub struct Seeded {
    pub db_pool: SqlitePool,
    pub chess_club: i64,
    pub coding_club: i64,
    pub room_a101: i64,
    pub room_b202: i64,
    pub john: i64,
    pub jane: i64,
    pub alice: i64,
}

pub async fn seeded() -> Seeded {
    let db_pool = db::connect("sqlite::memory:", 1).await.unwrap();
    db::initialize(&db_pool).await.unwrap();

    Seeded {
        chess_club: club(&db_pool, "Chess Club").await,
        coding_club: club(&db_pool, "Coding Club").await,
        room_a101: room(&db_pool, "A", "101").await,
        room_b202: room(&db_pool, "B", "202").await,
        john: student(&db_pool, "john.doe@example.com").await,
        jane: student(&db_pool, "jane.smith@example.com").await,
        alice: student(&db_pool, "alice.johnson@example.com").await,
        db_pool,
    }
}

async fn club(db_pool: &SqlitePool, name: &str) -> i64 {
    reference::club_by_name(db_pool, name).await.unwrap().unwrap().id
}

async fn room(db_pool: &SqlitePool, building: &str, number: &str) -> i64 {
    reference::room_by_label(db_pool, building, number).await.unwrap().unwrap().id
}

async fn student(db_pool: &SqlitePool, email: &str) -> i64 {
    reference::student_by_email(db_pool, email).await.unwrap().unwrap().id
}

impl Seeded {
    pub fn fields(&self) -> MeetingFields {
        MeetingFields {
            date: date!(2024 - 03 - 01),
            time: time!(18:30),
            duration: Some(60),
            description: Some("Opening tournament".to_owned()),
            club_id: self.chess_club,
            room_id: self.room_a101,
        }
    }

    pub async fn count(&self, sql: &str) -> i64 {
        let (n,): (i64,) = sqlx::query_as(sql).fetch_one(&self.db_pool).await.unwrap();
        n
    }

    pub async fn last_meeting_id(&self) -> i64 {
        let (id,): (i64,) = sqlx::query_as("SELECT MAX(id) FROM meetings")
            .fetch_one(&self.db_pool)
            .await
            .unwrap();
        id
    }
}
