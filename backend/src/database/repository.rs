use sqlx::query_as;

use super::models::User;
use super::DbPool;

/// Persistence boundary for user accounts. All email lookups go through the
/// normalized projection, so they are case-insensitive on the full address.
pub struct UserRepository;

impl UserRepository {
    /// Find a user by email, case-insensitively.
    pub async fn find_by_email(pool: &DbPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        query_as::<_, User>("SELECT * FROM users WHERE email_normalized = ?")
            .bind(User::normalize_email(email))
            .fetch_optional(pool)
            .await
    }

    /// Find a user by id.
    pub async fn find_by_id(pool: &DbPool, id: &str) -> Result<Option<User>, sqlx::Error> {
        query_as::<_, User>("SELECT * FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new user.
    ///
    /// The UNIQUE constraint on `email_normalized` makes the uniqueness
    /// check atomic with the insert; a duplicate surfaces as a database
    /// unique-violation error, which callers map to an email-taken outcome.
    pub async fn insert(pool: &DbPool, user: &User) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO users \
             (id, email, email_normalized, password_hash, display_name, role, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&user.id)
        .bind(&user.email)
        .bind(&user.email_normalized)
        .bind(&user.password_hash)
        .bind(&user.display_name)
        .bind(user.role.as_str())
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(pool)
        .await?;

        Ok(())
    }
}
