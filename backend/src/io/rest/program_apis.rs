//! # REST API for Meal Programs
//!
//! Endpoints for listing, creating, updating and deleting programs.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use tracing::{error, info};

use crate::domain::ProgramError;
use crate::AppState;
use shared::{DeleteResponse, ProgramListResponse, ProgramPayload};

/// Create a router for program related APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_programs).post(create_program))
        .route(
            "/:id",
            get(get_program).patch(update_program).delete(delete_program),
        )
        .route("/slug/:slug", get(get_program_by_slug))
}

fn status_for(error: &ProgramError) -> StatusCode {
    match error {
        ProgramError::MissingFields | ProgramError::InvalidPrice => StatusCode::BAD_REQUEST,
        ProgramError::NotFound => StatusCode::NOT_FOUND,
        ProgramError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// List all programs, newest first
pub async fn list_programs(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/programs");

    match state.program_service.list_programs().await {
        Ok(programs) => (StatusCode::OK, Json(ProgramListResponse { programs })).into_response(),
        Err(e) => {
            error!("Failed to list programs: {}", e);
            (status_for(&e), e.to_string()).into_response()
        }
    }
}

/// Create a new program
pub async fn create_program(
    State(state): State<AppState>,
    Json(payload): Json<ProgramPayload>,
) -> impl IntoResponse {
    info!("POST /api/programs - name: {}", payload.name);

    match state.program_service.create_program(payload).await {
        Ok(program) => (StatusCode::CREATED, Json(program)).into_response(),
        Err(e) => {
            error!("Failed to create program: {}", e);
            (status_for(&e), e.to_string()).into_response()
        }
    }
}

/// Get a single program by ID
pub async fn get_program(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/programs/{}", id);

    match state.program_service.get_program(&id).await {
        Ok(program) => (StatusCode::OK, Json(program)).into_response(),
        Err(e) => {
            error!("Failed to get program {}: {}", id, e);
            (status_for(&e), e.to_string()).into_response()
        }
    }
}

/// Get a single program by URL slug
pub async fn get_program_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/programs/slug/{}", slug);

    match state.program_service.get_program_by_slug(&slug).await {
        Ok(program) => (StatusCode::OK, Json(program)).into_response(),
        Err(e) => {
            error!("Failed to get program by slug {}: {}", slug, e);
            (status_for(&e), e.to_string()).into_response()
        }
    }
}

/// Update an existing program
pub async fn update_program(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<ProgramPayload>,
) -> impl IntoResponse {
    info!("PATCH /api/programs/{}", id);

    match state.program_service.update_program(&id, payload).await {
        Ok(program) => (StatusCode::OK, Json(program)).into_response(),
        Err(e) => {
            error!("Failed to update program {}: {}", id, e);
            (status_for(&e), e.to_string()).into_response()
        }
    }
}

/// Delete a program
pub async fn delete_program(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    info!("DELETE /api/programs/{}", id);

    match state.program_service.delete_program(&id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(DeleteResponse {
                success_message: "Programme supprimé.".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to delete program {}: {}", id, e);
            (status_for(&e), e.to_string()).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_state;
    use shared::NutritionFacts;

    fn sample_payload() -> ProgramPayload {
        ProgramPayload {
            slug: None,
            name: "Programme Prise de Masse".to_string(),
            sub_category: "Prise de masse".to_string(),
            price: 180,
            description: "Programme riche en protéines".to_string(),
            full_description: String::new(),
            image: "https://example.com/masse.jpg".to_string(),
            duration: 14,
            schedule: vec![],
            ingredients: vec![],
            nutrition: NutritionFacts::default(),
            features: vec![],
        }
    }

    #[tokio::test]
    async fn test_create_then_list_program_handlers() {
        let state = test_state().await;

        let response = create_program(State(state.clone()), Json(sample_payload()))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = list_programs(State(state)).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_get_missing_program_is_404() {
        let state = test_state().await;
        let response = get_program(State(state), Path("nope".to_string()))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
