use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use tracing::{debug, warn};

use crate::{auth::token, database::models::Role, error::AppError, state::AppState};

/// Request-scoped identity attached by [`authenticate`] and consumed by
/// downstream handlers via `Extension<CurrentUser>`.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: String,
    pub role: Role,
}

/// Authentication gate for protected routes.
///
/// Extracts the bearer token from the `Authorization` header and verifies
/// it. Missing header, wrong scheme, malformed or expired tokens all
/// short-circuit with 401; malformed vs expired is only distinguished in
/// the logs.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let Some(header) = header else {
        warn!("[AUTH] ❌ Missing Authorization header");
        return Err(AppError::Unauthenticated);
    };

    let Some(raw_token) = header.strip_prefix("Bearer ") else {
        warn!("[AUTH] ❌ Authorization header is not a Bearer token");
        return Err(AppError::Unauthenticated);
    };

    let claims = token::verify(raw_token, &state.config.jwt_secret).map_err(|e| {
        debug!("[AUTH] Token rejected: {}", e);
        AppError::Unauthenticated
    })?;

    // A claim that does not decode into a known role means the token was
    // minted against corrupt account data; treat it as unauthenticated.
    let role = Role::try_from(claims.role.as_str()).map_err(|e| {
        warn!("[AUTH] ❌ Token carries an unknown role: {}", e);
        AppError::Unauthenticated
    })?;

    req.extensions_mut().insert(CurrentUser {
        id: claims.sub,
        role,
    });

    Ok(next.run(req).await)
}

/// Authorization gate for admin routes. Must run after [`authenticate`];
/// an absent identity is rejected the same as a non-admin one.
pub async fn require_admin(req: Request, next: Next) -> Result<Response, AppError> {
    match req.extensions().get::<CurrentUser>() {
        Some(user) if user.role == Role::Admin => Ok(next.run(req).await),
        Some(user) => {
            warn!("[AUTH] ❌ Admin access denied for user {}", user.id);
            Err(AppError::Forbidden)
        }
        None => {
            warn!("[AUTH] ❌ Admin route reached without an authenticated identity");
            Err(AppError::Forbidden)
        }
    }
}
