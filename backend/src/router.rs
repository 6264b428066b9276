use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    auth::middleware::{authenticate, require_admin},
    handlers,
    state::AppState,
};

/// Build the application router.
///
/// Per-request state machine for protected routes:
/// unauthenticated -> authenticated -> (authorized) -> handled, with the
/// authenticate and require_admin layers short-circuiting to 401/403. No
/// route reaches a handler without passing its gates.
pub fn app(state: AppState) -> Router {
    let admin_routes = Router::new()
        .route("/places", post(handlers::travel::create_place))
        .route(
            "/places/:id",
            put(handlers::travel::update_place).delete(handlers::travel::delete_place),
        )
        .route_layer(middleware::from_fn(require_admin));

    let protected = Router::new()
        .route(
            "/user/me",
            get(handlers::user::me).put(handlers::user::update_profile),
        )
        .route("/places", get(handlers::travel::list_places))
        .route("/places/:id", get(handlers::travel::get_place))
        .route("/places/:id/reviews", post(handlers::travel::add_review))
        .route("/routes/find", post(handlers::travel::find_route))
        .route("/routes/estimate-cost", get(handlers::travel::estimate_cost))
        .nest("/admin", admin_routes)
        .route_layer(middleware::from_fn_with_state(state.clone(), authenticate));

    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/logout", post(handlers::auth::logout))
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
