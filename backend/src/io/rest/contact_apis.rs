//! # REST API for the Contact Form

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::Deserialize;
use tracing::{error, info};

use crate::domain::ContactError;
use crate::AppState;
use shared::{ContactRequest, ContactResponse};

fn status_for(error: &ContactError) -> StatusCode {
    match error {
        ContactError::MissingFields | ContactError::InvalidEmail => StatusCode::BAD_REQUEST,
        ContactError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Store a contact-form submission
pub async fn submit_message(
    State(state): State<AppState>,
    Json(request): Json<ContactRequest>,
) -> impl IntoResponse {
    info!("POST /api/contact - from: {}", request.email);

    match state.contact_service.submit(request).await {
        Ok(_message) => (
            StatusCode::OK,
            Json(ContactResponse {
                success_message: "Message envoyé. Nous vous répondrons rapidement.".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to store contact message: {}", e);
            (status_for(&e), e.to_string()).into_response()
        }
    }
}

/// Query parameters for the message listing endpoint
#[derive(Deserialize, Debug)]
pub struct ListMessagesQuery {
    pub limit: Option<u32>,
}

/// List stored contact messages, newest first (back-office)
pub async fn list_messages(
    State(state): State<AppState>,
    Query(query): Query<ListMessagesQuery>,
) -> impl IntoResponse {
    info!("GET /api/contact - query: {:?}", query);

    match state.contact_service.list_messages(query.limit).await {
        Ok(messages) => (StatusCode::OK, Json(messages)).into_response(),
        Err(e) => {
            error!("Failed to list contact messages: {}", e);
            (status_for(&e), e.to_string()).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_state;

    #[tokio::test]
    async fn test_submit_then_list_messages() {
        let state = test_state().await;

        let request = ContactRequest {
            name: "Yassine".to_string(),
            email: "yassine@example.com".to_string(),
            phone: None,
            reason: "Partenariat".to_string(),
            message: "Bonjour, je souhaite distribuer vos produits.".to_string(),
        };
        let response = submit_message(State(state.clone()), Json(request))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let response = list_messages(State(state), Query(ListMessagesQuery { limit: None }))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_submit_invalid_email_is_400() {
        let state = test_state().await;
        let request = ContactRequest {
            name: "Yassine".to_string(),
            email: "not-an-email".to_string(),
            phone: None,
            reason: "Question".to_string(),
            message: "Bonjour".to_string(),
        };
        let response = submit_message(State(state), Json(request)).await.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
