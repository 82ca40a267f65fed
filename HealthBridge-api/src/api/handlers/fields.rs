use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{info, instrument, warn};

use health_bridge_domain::Category;

use crate::api::GatewayState;
use crate::entities::common::{ApiError, ErrorResponse};
use crate::entities::fields::{FieldQueryParams, FieldResponse};

/// List the fields of the platform catalog
#[utoipa::path(
    get,
    path = "/api/v1/fields",
    params(FieldQueryParams),
    responses(
        (status = 200, description = "Fields in display order", body = Vec<FieldResponse>),
        (status = 400, description = "Unknown category", body = ErrorResponse),
    ),
    tag = "fields"
)]
#[instrument(skip(gateway))]
pub async fn list_fields(
    State(gateway): State<GatewayState>,
    Query(params): Query<FieldQueryParams>,
) -> Result<impl IntoResponse, Response> {
    let category = match params.category.as_deref() {
        Some(raw) => Some(raw.parse::<Category>().map_err(|e| {
            warn!("Rejected category filter: {}", e);
            (StatusCode::BAD_REQUEST, Json(ErrorResponse::bad_request(&e, None))).into_response()
        })?),
        None => None,
    };

    let fields: Vec<FieldResponse> = gateway.list_fields(category).into_iter().map(FieldResponse::from).collect();
    info!("Listing {} field(s)", fields.len());
    Ok(Json(fields))
}

/// List the fields that accept user input
#[utoipa::path(
    get,
    path = "/api/v1/fields/writable",
    responses(
        (status = 200, description = "Writable fields in display order", body = Vec<FieldResponse>),
    ),
    tag = "fields"
)]
#[instrument(skip(gateway))]
pub async fn list_writable_fields(State(gateway): State<GatewayState>) -> Json<Vec<FieldResponse>> {
    Json(gateway.list_writable().into_iter().map(FieldResponse::from).collect())
}

/// Describe one field
#[utoipa::path(
    get,
    path = "/api/v1/fields/{id}",
    params(
        ("id" = String, Path, description = "Field id, e.g. height")
    ),
    responses(
        (status = 200, description = "Field found", body = FieldResponse),
        (status = 404, description = "Unknown field", body = ErrorResponse),
    ),
    tag = "fields"
)]
#[instrument(skip(gateway))]
pub async fn get_field(
    State(gateway): State<GatewayState>,
    Path(id): Path<String>,
) -> Result<Json<FieldResponse>, ApiError> {
    let descriptor = gateway.describe(&id)?;
    Ok(Json(FieldResponse::from(descriptor)))
}
