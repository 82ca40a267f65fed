use axum::{extract::State, Json};
use tracing::{info, instrument};

use crate::api::GatewayState;
use crate::entities::common::ApiError;
use crate::entities::platform::{InitializeResponse, PermissionsResponse};

/// Initialize the platform health store
#[utoipa::path(
    post,
    path = "/api/v1/initialize",
    responses(
        (status = 200, description = "Health store ready", body = InitializeResponse),
        (status = 503, description = "Health store unavailable", body = ErrorResponse),
    ),
    tag = "platform"
)]
#[instrument(skip(gateway))]
pub async fn initialize(State(gateway): State<GatewayState>) -> Result<Json<InitializeResponse>, ApiError> {
    gateway.initialize().await?;
    Ok(Json(InitializeResponse::new(gateway.platform(), &gateway.state())))
}

/// Request access to every catalog field
#[utoipa::path(
    post,
    path = "/api/v1/permissions",
    responses(
        (status = 200, description = "Whether access was granted", body = PermissionsResponse),
        (status = 409, description = "Health store not initialized", body = ErrorResponse),
        (status = 503, description = "Health store unavailable", body = ErrorResponse),
    ),
    tag = "platform"
)]
#[instrument(skip(gateway))]
pub async fn request_permissions(State(gateway): State<GatewayState>) -> Result<Json<PermissionsResponse>, ApiError> {
    let granted = gateway.request_permissions().await?;
    info!("Permission request {}", if granted { "granted" } else { "declined" });
    Ok(Json(PermissionsResponse { granted }))
}
