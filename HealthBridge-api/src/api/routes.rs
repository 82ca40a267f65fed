use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::api::handlers::{fields, health, platform, values};
use crate::api::GatewayState;
use crate::openapi::configure_swagger_routes;

/// Create the application router
pub fn create_app(gateway: GatewayState) -> Router {
    debug!("Creating application router");

    // Define specific routes before parametrized routes to avoid conflicts
    let api_routes = Router::new()
        .route("/fields", get(fields::list_fields))
        .route("/fields/writable", get(fields::list_writable_fields))
        .route("/fields/:id", get(fields::get_field))
        .route("/values", get(values::fetch_values))
        .route("/values/:id", get(values::fetch_value).put(values::save_value))
        .route("/initialize", post(platform::initialize))
        .route("/permissions", post(platform::request_permissions));

    debug!("API routes configured");

    let app = Router::new()
        .route("/health", get(health::health_check))
        .nest("/api/v1", api_routes)
        .with_state(gateway);

    debug!("API routes nested");

    // Initialize health check service startup time
    health::initialize_server_start_time();

    add_swagger_ui(app).layer(TraceLayer::new_for_http())
}

/// Add Swagger UI to the router
pub fn add_swagger_ui(app: Router) -> Router {
    app.merge(configure_swagger_routes())
}
