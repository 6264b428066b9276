//! # Data Transfer Objects (DTOs)
//!
//! This module contains all data structures used for communication between
//! API clients and the backend via the REST API.
//!
//! ## Module Organization
//!
//! - [`auth`] - Registration, login, and current-user DTOs
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /auth/login
//! Content-Type: application/json
//!
//! {
//!   "email": "alice@example.com",
//!   "password": "MyPassword123!"
//! }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "user": {
//!     "id": "5b3f0c4e-8a62-4f1d-9a7e-2f6d1b9c0a11",
//!     "email": "alice@example.com",
//!     "display_name": "Alice",
//!     "role": "user",
//!     "created_at": "2025-01-01T00:00:00Z"
//!   },
//!   "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
//!   "message": "Login successful"
//! }
//! ```

pub mod auth;

pub use auth::*;
