//! # REST API for the Product Catalog
//!
//! Endpoints for listing, creating, updating and deleting products.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use tracing::{error, info};

use crate::domain::CatalogError;
use crate::AppState;
use shared::{DeleteResponse, ProductListResponse, ProductPayload};

/// Create a router for product related APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/:id",
            get(get_product).patch(update_product).delete(delete_product),
        )
        .route("/slug/:slug", get(get_product_by_slug))
}

fn status_for(error: &CatalogError) -> StatusCode {
    match error {
        CatalogError::MissingFields | CatalogError::InvalidPrice => StatusCode::BAD_REQUEST,
        CatalogError::NotFound => StatusCode::NOT_FOUND,
        CatalogError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// List all products, newest first
pub async fn list_products(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/products");

    match state.catalog_service.list_products().await {
        Ok(products) => (StatusCode::OK, Json(ProductListResponse { products })).into_response(),
        Err(e) => {
            error!("Failed to list products: {}", e);
            (status_for(&e), e.to_string()).into_response()
        }
    }
}

/// Create a new product
pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<ProductPayload>,
) -> impl IntoResponse {
    info!("POST /api/products - name: {}", payload.name);

    match state.catalog_service.create_product(payload).await {
        Ok(product) => (StatusCode::CREATED, Json(product)).into_response(),
        Err(e) => {
            error!("Failed to create product: {}", e);
            (status_for(&e), e.to_string()).into_response()
        }
    }
}

/// Get a single product by ID
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/products/{}", id);

    match state.catalog_service.get_product(&id).await {
        Ok(product) => (StatusCode::OK, Json(product)).into_response(),
        Err(e) => {
            error!("Failed to get product {}: {}", id, e);
            (status_for(&e), e.to_string()).into_response()
        }
    }
}

/// Get a single product by URL slug
pub async fn get_product_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/products/slug/{}", slug);

    match state.catalog_service.get_product_by_slug(&slug).await {
        Ok(product) => (StatusCode::OK, Json(product)).into_response(),
        Err(e) => {
            error!("Failed to get product by slug {}: {}", slug, e);
            (status_for(&e), e.to_string()).into_response()
        }
    }
}

/// Update an existing product
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<ProductPayload>,
) -> impl IntoResponse {
    info!("PATCH /api/products/{}", id);

    match state.catalog_service.update_product(&id, payload).await {
        Ok(product) => (StatusCode::OK, Json(product)).into_response(),
        Err(e) => {
            error!("Failed to update product {}: {}", id, e);
            (status_for(&e), e.to_string()).into_response()
        }
    }
}

/// Delete a product
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    info!("DELETE /api/products/{}", id);

    match state.catalog_service.delete_product(&id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(DeleteResponse {
                success_message: "Produit supprimé.".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to delete product {}: {}", id, e);
            (status_for(&e), e.to_string()).into_response()
        }
    }
}
