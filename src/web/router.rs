//! Web application router and middleware setup.

use crate::store::ReadingStore;
use crate::web::config::WebConfig;
use crate::web::{handlers, AppState};
use axum::{routing::get, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing::{info, warn};

/// Create the axum application with all routes and middleware.
pub fn create_app(config: &WebConfig, store: Arc<dyn ReadingStore>) -> Router {
    let mut app = Router::new()
        .route("/readings", get(handlers::list_readings))
        .route("/api/health", get(handlers::health_check));

    match &config.static_path {
        Some(static_path) if static_path.is_dir() => {
            info!("Serving static files from: {:?}", static_path);
            app = app.fallback_service(ServeDir::new(static_path));
        }
        Some(static_path) => {
            warn!(
                "Static path {:?} does not exist, serving bundled dashboard",
                static_path
            );
            app = app.route("/", get(handlers::default_index));
        }
        None => {
            app = app.route("/", get(handlers::default_index));
        }
    }

    if config.enable_cors {
        app = app.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    app.layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(AppState { store })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reading::NewReading;
    use crate::store::MemoryStore;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn config_without_static() -> WebConfig {
        WebConfig::default().with_static_path(None)
    }

    async fn get_body(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_empty_store_returns_empty_array() {
        let app = create_app(&config_without_static(), Arc::new(MemoryStore::new()));
        let (status, body) = get_body(app, "/readings").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "[]");
    }

    #[tokio::test]
    async fn test_readings_are_newest_first() {
        let store = Arc::new(MemoryStore::new());
        store.insert(NewReading::now(10.0)).await.unwrap();
        store.insert(NewReading::now(20.0)).await.unwrap();

        let app = create_app(&config_without_static(), store);
        let (status, body) = get_body(app, "/readings").await;
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();

        assert_eq!(status, StatusCode::OK);
        assert_eq!(value[0]["id"], 2);
        assert_eq!(value[0]["temperature"], 20.0);
        assert_eq!(value[1]["id"], 1);
    }

    #[tokio::test]
    async fn test_bundled_index_without_static_dir() {
        let config = WebConfig::default().with_static_path(Some("/nonexistent/site".into()));
        let app = create_app(&config, Arc::new(MemoryStore::new()));
        let (status, body) = get_body(app, "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Pi Weather Station"));
    }

    #[tokio::test]
    async fn test_health_check() {
        let app = create_app(&config_without_static(), Arc::new(MemoryStore::new()));
        let (status, body) = get_body(app, "/api/health").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("\"status\":\"ok\""));
    }
}
