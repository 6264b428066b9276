pub mod models;
pub mod repository;

use std::str::FromStr;

use sqlx::{sqlite::SqliteConnectOptions, SqlitePool};
use tracing::info;

use crate::auth::password;
use crate::config::Config;
use crate::error::{AppError, Result};

use self::models::{Role, User};
use self::repository::UserRepository;

pub type DbPool = SqlitePool;

/// Open the connection pool and apply migrations. Called once at startup;
/// components receive the handle by injection afterwards.
pub async fn create_pool(config: &Config) -> anyhow::Result<DbPool> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);

    let pool = SqlitePool::connect_with(options).await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(pool)
}

/// Seed the reserved admin account if it does not exist yet.
///
/// Idempotent: safe to run on every startup. An existing account is never
/// touched, so re-running cannot change its password hash. Losing the insert
/// race to another starting instance counts as success.
pub async fn ensure_admin_account(pool: &DbPool, config: &Config) -> Result<()> {
    if UserRepository::find_by_email(pool, &config.admin_email)
        .await?
        .is_some()
    {
        info!("[BOOTSTRAP] Admin account already present");
        return Ok(());
    }

    let password_hash = password::hash(&config.admin_password).map_err(AppError::Internal)?;
    let admin = User::new(
        &config.admin_email,
        password_hash,
        "Admin".to_string(),
        Role::Admin,
    );

    match UserRepository::insert(pool, &admin).await.map_err(AppError::from) {
        Ok(()) => {
            info!("[BOOTSTRAP] ✅ Admin account created: {}", admin.email);
            Ok(())
        }
        Err(AppError::EmailTaken) => {
            info!("[BOOTSTRAP] Lost bootstrap race; admin account already exists");
            Ok(())
        }
        Err(e) => Err(e),
    }
}
