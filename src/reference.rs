//! Read access to the seeded reference tables.

use sqlx::SqlitePool;

use crate::models::{Club, Room, Student};

pub async fn clubs(db_pool: &SqlitePool) -> sqlx::Result<Vec<Club>> {
    sqlx::query_as("SELECT id,name,address,description FROM club ORDER BY id")
        .fetch_all(db_pool)
        .await
}

pub async fn rooms(db_pool: &SqlitePool) -> sqlx::Result<Vec<Room>> {
    sqlx::query_as("SELECT id,building,number,max_capacity FROM room ORDER BY id")
        .fetch_all(db_pool)
        .await
}

pub async fn students(db_pool: &SqlitePool) -> sqlx::Result<Vec<Student>> {
    sqlx::query_as("SELECT id,name,email FROM student ORDER BY id")
        .fetch_all(db_pool)
        .await
}

pub async fn club_by_name(db_pool: &SqlitePool, name: &str) -> sqlx::Result<Option<Club>> {
    sqlx::query_as("SELECT id,name,address,description FROM club WHERE name=?")
        .bind(name)
        .fetch_optional(db_pool)
        .await
}

pub async fn student_by_email(db_pool: &SqlitePool, email: &str) -> sqlx::Result<Option<Student>> {
    sqlx::query_as("SELECT id,name,email FROM student WHERE email=?")
        .bind(email)
        .fetch_optional(db_pool)
        .await
}

pub async fn room_by_label(
    db_pool: &SqlitePool,
    building: &str,
    number: &str,
) -> sqlx::Result<Option<Room>> {
    sqlx::query_as("SELECT id,building,number,max_capacity FROM room WHERE building=? AND number=?")
        .bind(building)
        .bind(number)
        .fetch_optional(db_pool)
        .await
}
