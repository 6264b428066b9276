pub mod auth;
pub mod travel;
pub mod user;
