use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{error, info, instrument, warn};
use validator::Validate;

use crate::api::GatewayState;
use crate::entities::common::{ApiError, ErrorResponse};
use crate::entities::values::{SaveValueRequest, ValueResponse, ValuesQueryParams, ValuesResponse};

/// Fetch the current values of several fields
#[utoipa::path(
    get,
    path = "/api/v1/values",
    params(ValuesQueryParams),
    responses(
        (status = 200, description = "Values in catalog order; fields without data have no value", body = ValuesResponse),
        (status = 503, description = "Health store unavailable", body = ErrorResponse),
    ),
    tag = "values"
)]
#[instrument(skip(gateway))]
pub async fn fetch_values(
    State(gateway): State<GatewayState>,
    Query(params): Query<ValuesQueryParams>,
) -> Result<Json<ValuesResponse>, ApiError> {
    let values = match params.field_ids() {
        Some(ids) => gateway.fetch_all(&ids).await?,
        None => gateway.fetch_everything().await?,
    };

    let present = values.values().filter(|value| value.is_some()).count();
    info!("Fetched {} field(s), {} with data", values.len(), present);

    Ok(Json(ValuesResponse {
        platform: gateway.platform().as_str().to_string(),
        values: values
            .iter()
            .map(|(id, value)| ValueResponse::new(id, value.as_ref()))
            .collect(),
    }))
}

/// Fetch the current value of one field
#[utoipa::path(
    get,
    path = "/api/v1/values/{id}",
    params(
        ("id" = String, Path, description = "Field id, e.g. height")
    ),
    responses(
        (status = 200, description = "Current value; no value when there is no data", body = ValueResponse),
        (status = 404, description = "Unknown field", body = ErrorResponse),
        (status = 503, description = "Health store unavailable", body = ErrorResponse),
    ),
    tag = "values"
)]
#[instrument(skip(gateway))]
pub async fn fetch_value(
    State(gateway): State<GatewayState>,
    Path(id): Path<String>,
) -> Result<Json<ValueResponse>, ApiError> {
    let value = gateway.fetch_field(&id).await?;
    Ok(Json(ValueResponse::new(&id, value.as_ref())))
}

/// Validate and save a value
#[utoipa::path(
    put,
    path = "/api/v1/values/{id}",
    params(
        ("id" = String, Path, description = "Field id, e.g. height")
    ),
    request_body = SaveValueRequest,
    responses(
        (status = 200, description = "Value saved", body = ValueResponse),
        (status = 400, description = "Invalid value or read-only field", body = ErrorResponse),
        (status = 404, description = "Unknown field", body = ErrorResponse),
        (status = 422, description = "Saving is not supported on this platform", body = ErrorResponse),
        (status = 502, description = "The health store rejected the write", body = ErrorResponse),
        (status = 503, description = "Health store unavailable", body = ErrorResponse),
    ),
    tag = "values"
)]
#[instrument(skip(gateway, request))]
pub async fn save_value(
    State(gateway): State<GatewayState>,
    Path(id): Path<String>,
    Json(request): Json<SaveValueRequest>,
) -> Result<impl IntoResponse, Response> {
    if let Err(errors) = request.validate() {
        warn!("Rejected save request for {}: {}", id, errors);
        let details = serde_json::to_value(&errors).ok();
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid save request", details)),
        )
            .into_response());
    }

    match gateway.save_field(&id, &request.value).await {
        Ok(saved) => {
            info!("Saved {} = {}", id, saved.display());
            Ok((StatusCode::OK, Json(ValueResponse::new(&id, Some(&saved)))))
        }
        Err(e) => {
            error!("Save of {} failed: {}", id, e);
            Err(ApiError(e).into_response())
        }
    }
}
