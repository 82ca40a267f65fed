use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use health_bridge_api::api::create_application;
use health_bridge_api::demo::in_memory_stores;
use health_bridge_domain::{GatewayConfig, Platform, PlatformGateway};

// Initialize tracing once for all tests
static INIT: std::sync::Once = std::sync::Once::new();
fn initialize() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("info")
            .with_test_writer()
            .try_init();
    });
}

fn app(platform: Platform) -> axum::Router {
    initialize();
    let config = GatewayConfig::default().with_platform(platform);
    let gateway = PlatformGateway::new(&config, &in_memory_stores(true)).unwrap();
    create_application(gateway)
}

async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_demo_data_reads_the_same_on_both_platforms() {
    for platform in [Platform::Ios, Platform::Android] {
        let (status, body) = get_json(app(platform), "/api/v1/values/height").await;
        assert_eq!(status, StatusCode::OK, "{}", platform);
        assert_eq!(body["value"], "178", "{}", platform);
        assert_eq!(body["unit"], "cm", "{}", platform);

        let (_, body) = get_json(app(platform), "/api/v1/values/weight").await;
        assert_eq!(body["value"], "74.2", "{}", platform);
    }
}

#[tokio::test]
async fn test_health_kit_fraction_is_shown_as_percent() {
    let (_, body) = get_json(app(Platform::Ios), "/api/v1/values/oxygenSaturation").await;
    assert_eq!(body["value"], "98");
    assert_eq!(body["unit"], "%");
}

#[tokio::test]
async fn test_all_values_follow_catalog_order() {
    let (status, body) = get_json(app(Platform::Android), "/api/v1/values").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["platform"], "android");

    let (_, fields) = get_json(app(Platform::Android), "/api/v1/fields").await;
    let readable: Vec<&Value> = fields
        .as_array()
        .unwrap()
        .iter()
        .filter(|f| f["readable"] == true)
        .map(|f| &f["id"])
        .collect();
    let fetched: Vec<&Value> = body["values"].as_array().unwrap().iter().map(|v| &v["fieldId"]).collect();
    assert_eq!(fetched, readable);
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let (status, body) = get_json(app(Platform::Ios), "/api-docs/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"].get("/api/v1/values/{id}").is_some());
}
