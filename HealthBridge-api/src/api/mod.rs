pub mod handlers;
pub mod routes;


use std::sync::Arc;

use axum::Router;
use health_bridge_domain::PlatformGateway;

/// Shared gateway handed to every handler
pub type GatewayState = Arc<PlatformGateway>;

/// Create the application router
pub fn create_application(gateway: PlatformGateway) -> Router {
    routes::create_app(Arc::new(gateway))
}
