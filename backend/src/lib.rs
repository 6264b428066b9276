pub mod auth;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use config::Config;
pub use database::DbPool;
pub use state::AppState;
