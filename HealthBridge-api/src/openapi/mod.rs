use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Configure Swagger UI endpoints
pub fn configure_swagger_routes() -> SwaggerUi {
    SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", ApiDoc::openapi())
}

// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health endpoints
        crate::api::handlers::health::health_check,

        // Field catalog endpoints
        crate::api::handlers::fields::list_fields,
        crate::api::handlers::fields::list_writable_fields,
        crate::api::handlers::fields::get_field,

        // Value endpoints
        crate::api::handlers::values::fetch_values,
        crate::api::handlers::values::fetch_value,
        crate::api::handlers::values::save_value,

        // Platform endpoints
        crate::api::handlers::platform::initialize,
        crate::api::handlers::platform::request_permissions
    ),
    components(
        schemas(
            crate::entities::common::ErrorResponse,
            crate::entities::fields::FieldResponse,
            crate::entities::fields::FieldQueryParams,
            crate::entities::values::ValueResponse,
            crate::entities::values::ValuesResponse,
            crate::entities::values::ValuesQueryParams,
            crate::entities::values::SaveValueRequest,
            crate::entities::platform::InitializeResponse,
            crate::entities::platform::PermissionsResponse,
            crate::api::handlers::health::HealthResponse
        )
    ),
    tags(
        (name = "health", description = "Health check endpoint"),
        (name = "fields", description = "Field catalog of the running platform"),
        (name = "values", description = "Reading and saving normalized values"),
        (name = "platform", description = "Health store initialization and permissions")
    ),
    info(
        title = "HealthBridge API",
        version = "0.1.0",
        description = "Normalized access to HealthKit and Health Connect data",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        ),
    ),
    servers(
        (url = "/", description = "Local development server")
    )
)]
pub struct ApiDoc;
