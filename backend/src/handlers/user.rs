use axum::{Extension, Json};
use shared::{MeResponse, MessageResponse};

use crate::auth::CurrentUser;

/// Return the authenticated user's identity, as attached by the
/// authentication middleware.
pub async fn me(Extension(user): Extension<CurrentUser>) -> Json<MeResponse> {
    Json(MeResponse {
        id: user.id,
        role: user.role.to_string(),
    })
}

/// Placeholder profile update. Reserves the route behind the
/// authentication gate; profile flows have no designed behavior yet.
pub async fn update_profile() -> Json<MessageResponse> {
    // TODO: implement profile update
    Json(MessageResponse {
        message: "Profile updated".to_string(),
    })
}
