//! # HealthyBite Backend
//!
//! Non-UI logic for the storefront: product catalog, meal programs and
//! contact messages behind a REST API.
//!
//! The backend follows a layered architecture:
//! ```text
//! UI Layer (Yew frontend)
//!     ↓
//! IO Layer (REST API, handlers)
//!     ↓
//! Domain Layer (services, validation)
//!     ↓
//! Storage Layer (SQLite, repositories)
//! ```

pub mod domain;
pub mod io;
pub mod storage;

use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Router,
};
use std::path::PathBuf;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use anyhow::Result;
use tracing::info;

use crate::domain::{CatalogService, ContactService, ProgramService};
use crate::storage::{ContactRepository, DbConnection, ProductRepository, ProgramRepository};

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub catalog_service: CatalogService<ProductRepository>,
    pub program_service: ProgramService<ProgramRepository>,
    pub contact_service: ContactService<ContactRepository>,
}

/// Build the application state over an existing database connection
pub fn build_state(db: DbConnection) -> AppState {
    AppState {
        catalog_service: CatalogService::new(ProductRepository::new(db.clone())),
        program_service: ProgramService::new(ProgramRepository::new(db.clone())),
        contact_service: ContactService::new(ContactRepository::new(db)),
    }
}

/// Initialize the backend with all required services
pub async fn initialize_backend() -> Result<AppState> {
    info!("Setting up database");
    let db = DbConnection::init().await?;

    info!("Setting up domain services");
    Ok(build_state(db))
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router {
    // CORS setup to allow the dev frontend to make requests
    let cors = CorsLayer::new()
        .allow_origin("http://localhost:8080".parse::<HeaderValue>().unwrap())
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers(Any);

    let api_routes = Router::new()
        .nest("/products", io::rest::product_apis::router())
        .nest("/programs", io::rest::program_apis::router())
        .route(
            "/contact",
            axum::routing::post(io::rest::contact_apis::submit_message)
                .get(io::rest::contact_apis::list_messages),
        );

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .nest("/api", api_routes)
        .fallback_service(ServeDir::new(PathBuf::from("../frontend/dist")))
        .layer(cors)
        .with_state(app_state)
}

#[cfg(test)]
pub(crate) async fn test_state() -> AppState {
    let db = DbConnection::init_test()
        .await
        .expect("Failed to create test database");
    build_state(db)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_router_serves_product_list() {
        let app = create_router(test_state().await);

        let response = app
            .oneshot(Request::get("/api/products").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let parsed: shared::ProductListResponse = serde_json::from_slice(&bytes).unwrap();
        assert!(parsed.products.is_empty());
    }

    #[tokio::test]
    async fn test_router_round_trips_a_program() {
        let app = create_router(test_state().await);

        let payload = serde_json::json!({
            "name": "Programme Alimentation Saine",
            "sub_category": "Alimentation saine",
            "price": 130,
            "description": "Programme varié",
            "image": "https://example.com/sain.jpg",
            "duration": 5,
            "cal": 0, "protein": "", "fiber": "", "carbs": "", "fats": ""
        });
        let response = app
            .clone()
            .oneshot(
                Request::post("/api/programs")
                    .header("content-type", "application/json")
                    .body(Body::from(payload.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let created: shared::Program = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(created.schedule.len(), 5);

        let response = app
            .oneshot(
                Request::get(format!("/api/programs/slug/{}", created.slug))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_router_rejects_invalid_contact() {
        let app = create_router(test_state().await);

        let payload = serde_json::json!({
            "name": "", "email": "x@y.z", "reason": "r", "message": "m"
        });
        let response = app
            .oneshot(
                Request::post("/api/contact")
                    .header("content-type", "application/json")
                    .body(Body::from(payload.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
