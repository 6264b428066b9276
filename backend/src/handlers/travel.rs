//! Placeholder travel endpoints.
//!
//! Places, routes, reviews and cost estimation have no designed behavior
//! yet. These handlers reserve the routes and put them behind the auth
//! gates; they return a plain acknowledgment and nothing else.

use axum::Json;
use shared::MessageResponse;

fn ack(message: &str) -> Json<MessageResponse> {
    Json(MessageResponse {
        message: message.to_string(),
    })
}

pub async fn list_places() -> Json<MessageResponse> {
    // TODO: implement place listing
    ack("Get places")
}

pub async fn get_place() -> Json<MessageResponse> {
    // TODO: implement place lookup
    ack("Get place")
}

pub async fn add_review() -> Json<MessageResponse> {
    // TODO: implement review creation
    ack("Review added")
}

pub async fn find_route() -> Json<MessageResponse> {
    // TODO: implement route finding
    ack("Route found")
}

pub async fn estimate_cost() -> Json<MessageResponse> {
    // TODO: implement cost estimation
    ack("Cost estimated")
}

pub async fn create_place() -> Json<MessageResponse> {
    // TODO: implement place creation (admin)
    ack("Place created")
}

pub async fn update_place() -> Json<MessageResponse> {
    // TODO: implement place update (admin)
    ack("Place updated")
}

pub async fn delete_place() -> Json<MessageResponse> {
    // TODO: implement place deletion (admin)
    ack("Place deleted")
}
