use std::str::FromStr;

use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use tracing::info;

use crate::include_res;

const SCHEMA: &str = include_res!(str, "/schema.sql");

const CLUBS: [(&str, &str, &str); 3] = [
    ("Chess Club", "123 Checkmate Lane", "A club for chess enthusiasts."),
    ("Coding Club", "456 Code St", "Learn to code in various languages."),
    ("Literature Club", "789 Novel Ave", "Discussing classic and contemporary literature."),
];

const ROOMS: [(&str, &str, i64); 3] = [("A", "101", 30), ("B", "202", 20), ("C", "303", 25)];

const STUDENTS: [(&str, &str); 3] = [
    ("John Doe", "john.doe@example.com"),
    ("Jane Smith", "jane.smith@example.com"),
    ("Alice Johnson", "alice.johnson@example.com"),
];

/// Opens the pool, creating the database file when it does not exist yet.
/// An in-memory database lives only as long as its single connection, so that
/// connection is never recycled.
pub async fn connect(url: &str, max_connections: u32) -> sqlx::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool_options = if url.contains(":memory:") {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(max_connections)
    };

    pool_options.connect_with(options).await
}

pub async fn create_schema(db_pool: &SqlitePool) -> sqlx::Result<()> {
    sqlx::raw_sql(SCHEMA).execute(db_pool).await?;
    Ok(())
}

/// Creates the schema and, on a database without students, seeds the reference
/// clubs, rooms and students. Returns whether seeding happened.
pub async fn initialize(db_pool: &SqlitePool) -> sqlx::Result<bool> {
    create_schema(db_pool).await?;

    let already = sqlx::query_as::<_, (i64,)>("SELECT 1 FROM student LIMIT 1")
        .fetch_optional(db_pool)
        .await?
        .is_some();
    if already {
        info!("Database already initialized. Skipping.");
        return Ok(false);
    }

    let mut tx = db_pool.begin().await?;

    for (name, address, description) in CLUBS {
        sqlx::query("INSERT INTO club (name,address,description) VALUES (?,?,?)")
            .bind(name)
            .bind(address)
            .bind(description)
            .execute(&mut *tx)
            .await?;
    }

    for (building, number, max_capacity) in ROOMS {
        sqlx::query("INSERT INTO room (building,number,max_capacity) VALUES (?,?,?)")
            .bind(building)
            .bind(number)
            .bind(max_capacity)
            .execute(&mut *tx)
            .await?;
    }

    for (name, email) in STUDENTS {
        sqlx::query("INSERT INTO student (name,email) VALUES (?,?)")
            .bind(name)
            .bind(email)
            .execute(&mut *tx)
            .await?;
    }

    for index in [
        r#"CREATE INDEX IF NOT EXISTS idx_meetings_date_club_room
           ON meetings(date, club_id, room_id)"#,
        r#"CREATE INDEX IF NOT EXISTS idx_rsvps_meeting_student
           ON rsvps(meeting_id, student_id)"#,
    ] {
        sqlx::query(index).execute(&mut *tx).await?;
    }

    tx.commit().await?;

    info!("Database initialized with clubs, rooms, and students.");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn count(db_pool: &SqlitePool, table: &str) -> i64 {
        let (n,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(db_pool)
            .await
            .unwrap();
        n
    }

    #[tokio::test]
    async fn seeding_runs_once() {
        let db_pool = connect("sqlite::memory:", 1).await.unwrap();

        assert!(initialize(&db_pool).await.unwrap());
        assert!(!initialize(&db_pool).await.unwrap());

        assert_eq!(count(&db_pool, "club").await, 3);
        assert_eq!(count(&db_pool, "room").await, 3);
        assert_eq!(count(&db_pool, "student").await, 3);
    }

    #[tokio::test]
    async fn seeding_creates_indexes() {
        let db_pool = connect("sqlite::memory:", 1).await.unwrap();
        initialize(&db_pool).await.unwrap();

        let names: Vec<(String,)> = sqlx::query_as(
            "SELECT name FROM sqlite_master WHERE type='index' AND name LIKE 'idx_%' ORDER BY name",
        )
        .fetch_all(&db_pool)
        .await
        .unwrap();
        let names: Vec<_> = names.into_iter().map(|(n,)| n).collect();
        assert_eq!(names, ["idx_meetings_date_club_room", "idx_rsvps_meeting_student"]);
    }

    #[tokio::test]
    async fn existing_students_skip_seeding() {
        let db_pool = connect("sqlite::memory:", 1).await.unwrap();
        create_schema(&db_pool).await.unwrap();
        sqlx::query("INSERT INTO student (name,email) VALUES ('Solo','solo@example.com')")
            .execute(&db_pool)
            .await
            .unwrap();

        assert!(!initialize(&db_pool).await.unwrap());
        assert_eq!(count(&db_pool, "club").await, 0);
    }
}
