use axum::{
    extract::{Json, State},
    http::StatusCode,
};
use shared::{AuthResponse, LoginRequest, MessageResponse, RegisterRequest};
use tracing::{debug, info, warn};

use crate::{
    auth::{password, token},
    config::Config,
    database::{
        models::{Role, User},
        repository::UserRepository,
        DbPool,
    },
    error::{AppError, AppJson, Result},
};

/// Register handler - creates a new user account
pub async fn register(
    State(pool): State<DbPool>,
    State(config): State<Config>,
    AppJson(req): AppJson<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>)> {
    info!("[REGISTER] 🔐 New registration request");
    debug!("   Email: {}", req.email);

    // Validate input
    if req.email.trim().is_empty() || !req.email.contains('@') {
        warn!("[REGISTER] ❌ Invalid email format");
        return Err(AppError::Validation("Invalid email format".to_string()));
    }

    if req.password.is_empty() {
        warn!("[REGISTER] ❌ Empty password");
        return Err(AppError::Validation(
            "Password must not be empty".to_string(),
        ));
    }

    // Advisory pre-check; the storage-level unique constraint is what
    // actually closes the race between concurrent registrations.
    if UserRepository::find_by_email(&pool, &req.email)
        .await?
        .is_some()
    {
        warn!("[REGISTER] ❌ Email already registered: {}", req.email);
        return Err(AppError::EmailTaken);
    }

    // Hash password
    debug!("[REGISTER] Hashing password...");
    let password_hash = password::hash(&req.password).map_err(AppError::Internal)?;

    // Self-registration always yields a regular user; admin accounts only
    // come from startup bootstrap.
    let user = User::new(&req.email, password_hash, req.display_name, Role::User);

    // Insert. A unique violation here means a concurrent registration won
    // the race that the pre-check missed; it maps to EmailTaken via
    // `From<sqlx::Error>` and is a normal outcome, not a crash.
    debug!("[REGISTER] Creating user in database...");
    UserRepository::insert(&pool, &user).await?;

    // Generate session token
    debug!("[REGISTER] Generating session token...");
    let token = token::issue(
        &user.id,
        user.role,
        &config.jwt_secret,
        config.jwt_expiration_hours,
    )
    .map_err(AppError::Internal)?;

    info!("[REGISTER] ✅ User created and authenticated: {}", user.id);

    Ok((
        StatusCode::OK,
        Json(AuthResponse {
            user: user.public_info(),
            token,
            message: "Registration successful".to_string(),
        }),
    ))
}

/// Login handler - authenticates existing user
pub async fn login(
    State(pool): State<DbPool>,
    State(config): State<Config>,
    AppJson(req): AppJson<LoginRequest>,
) -> Result<(StatusCode, Json<AuthResponse>)> {
    info!("[LOGIN] 🔓 Login attempt");
    debug!("   Email: {}", req.email);

    // Find user by email (case-insensitive)
    let user = match UserRepository::find_by_email(&pool, &req.email).await? {
        Some(user) => user,
        None => {
            // Burn a hash so the unknown-email path costs about the same as
            // a wrong-password check, keeping the two indistinguishable by
            // timing as well as by message.
            let _ = password::hash(&req.password);
            warn!("[LOGIN] ❌ No account for supplied email");
            return Err(AppError::InvalidCredentials);
        }
    };

    // Verify password
    debug!("[LOGIN] Verifying password...");
    let is_valid = password::verify(&req.password, &user.password_hash)
        .map_err(AppError::Internal)?;

    if !is_valid {
        warn!("[LOGIN] ❌ Invalid password for user {}", user.id);
        return Err(AppError::InvalidCredentials);
    }

    // Generate session token for the account's current id and role
    debug!("[LOGIN] Generating session token...");
    let token = token::issue(
        &user.id,
        user.role,
        &config.jwt_secret,
        config.jwt_expiration_hours,
    )
    .map_err(AppError::Internal)?;

    info!("[LOGIN] ✅ User authenticated: {}", user.id);

    Ok((
        StatusCode::OK,
        Json(AuthResponse {
            user: user.public_info(),
            token,
            message: "Login successful".to_string(),
        }),
    ))
}

/// Logout handler - stateless acknowledgment
///
/// Tokens are not server-tracked, so there is nothing to invalidate; the
/// client discards its copy.
pub async fn logout() -> (StatusCode, Json<MessageResponse>) {
    (
        StatusCode::OK,
        Json(MessageResponse {
            message: "Logout successful".to_string(),
        }),
    )
}
