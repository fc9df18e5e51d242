use shared::models::user::User;
use sqlx::PgPool;

pub async fn create(
    pool: &PgPool,
    name: &str,
    email: &str,
    hashed_password: &str,
    now: i64,
) -> Result<User, sqlx::Error> {
    sqlx::query_as(
        "INSERT INTO users (name, email, hashed_password, created_at)
         VALUES ($1, $2, $3, $4)
         RETURNING id, name, email, hashed_password, created_at",
    )
    .bind(name)
    .bind(email)
    .bind(hashed_password)
    .bind(now)
    .fetch_one(pool)
    .await
}

pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM users WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await
}

pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM users WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}
