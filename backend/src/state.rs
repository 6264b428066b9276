use axum::extract::FromRef;

use crate::{config::Config, database::DbPool};

/// Application state shared across handlers.
///
/// `FromRef` lets handlers extract `State<DbPool>` and `State<Config>`
/// independently instead of threading the whole state through.
#[derive(Clone, FromRef)]
pub struct AppState {
    pub pool: DbPool,
    pub config: Config,
}
