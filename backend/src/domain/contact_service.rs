//! Contact-form domain logic.

use shared::ContactRequest;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::models::ContactMessage;
use crate::domain::now_rfc3339;
use crate::storage::ContactStorage;

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("Tous les champs sont requis.")]
    MissingFields,
    #[error("Adresse email invalide.")]
    InvalidEmail,
    #[error("Erreur de stockage: {0}")]
    Storage(#[from] anyhow::Error),
}

#[derive(Clone)]
pub struct ContactService<S: ContactStorage> {
    storage: S,
}

impl<S: ContactStorage> ContactService<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub async fn submit(&self, request: ContactRequest) -> Result<ContactMessage, ContactError> {
        let required = [&request.name, &request.email, &request.reason, &request.message];
        if required.iter().any(|field| field.trim().is_empty()) {
            return Err(ContactError::MissingFields);
        }
        if !is_plausible_email(&request.email) {
            return Err(ContactError::InvalidEmail);
        }

        let message = ContactMessage {
            id: Uuid::new_v4().to_string(),
            name: request.name,
            email: request.email,
            phone: request.phone.filter(|p| !p.trim().is_empty()),
            reason: request.reason,
            message: request.message,
            created_at: now_rfc3339()?,
        };

        self.storage.store_message(&message).await?;
        Ok(message)
    }

    pub async fn list_messages(
        &self,
        limit: Option<u32>,
    ) -> Result<Vec<ContactMessage>, ContactError> {
        Ok(self.storage.list_messages(limit).await?)
    }
}

/// One `@`, non-empty local part, dotted domain, no whitespace anywhere.
fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && domain.split('.').count() >= 2
                && domain.split('.').all(|segment| !segment.is_empty())
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{ContactRepository, DbConnection};

    async fn create_test_service() -> ContactService<ContactRepository> {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        ContactService::new(ContactRepository::new(db))
    }

    fn sample_request() -> ContactRequest {
        ContactRequest {
            name: "Amina".to_string(),
            email: "amina@example.com".to_string(),
            phone: Some("0654000000".to_string()),
            reason: "Commande".to_string(),
            message: "Livrez-vous à Rabat ?".to_string(),
        }
    }

    #[tokio::test]
    async fn test_submit_stores_message() {
        let service = create_test_service().await;
        let stored = service.submit(sample_request()).await.unwrap();
        assert!(!stored.id.is_empty());
        assert_eq!(stored.phone.as_deref(), Some("0654000000"));

        let messages = service.list_messages(None).await.unwrap();
        assert_eq!(messages, vec![stored]);
    }

    #[tokio::test]
    async fn test_submit_blank_phone_becomes_none() {
        let service = create_test_service().await;
        let mut request = sample_request();
        request.phone = Some("  ".to_string());

        let stored = service.submit(request).await.unwrap();
        assert!(stored.phone.is_none());
    }

    #[tokio::test]
    async fn test_submit_rejects_missing_fields() {
        let service = create_test_service().await;
        let mut request = sample_request();
        request.message = String::new();

        let err = service.submit(request).await.unwrap_err();
        assert!(matches!(err, ContactError::MissingFields));
    }

    #[tokio::test]
    async fn test_submit_rejects_bad_email() {
        let service = create_test_service().await;
        for bad in ["amina", "amina@", "@example.com", "a b@example.com", "amina@example", "a@@b.com"] {
            let mut request = sample_request();
            request.email = bad.to_string();
            let err = service.submit(request).await.unwrap_err();
            assert!(matches!(err, ContactError::InvalidEmail), "{} should be invalid", bad);
        }
    }

    #[test]
    fn test_is_plausible_email() {
        assert!(is_plausible_email("contact@healthybite.ma"));
        assert!(is_plausible_email("a.b@sub.example.com"));
        assert!(!is_plausible_email("no-at-sign.com"));
        assert!(!is_plausible_email("trailing-dot@example."));
    }
}
