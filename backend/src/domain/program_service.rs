//! Meal-program domain logic.

use shared::{resize_schedule, slugify, Program, ProgramPayload};
use thiserror::Error;
use uuid::Uuid;

use crate::domain::now_rfc3339;
use crate::storage::ProgramStorage;

#[derive(Debug, Error)]
pub enum ProgramError {
    #[error("Champs obligatoires manquants.")]
    MissingFields,
    #[error("Le prix doit être supérieur à zéro.")]
    InvalidPrice,
    #[error("Programme introuvable.")]
    NotFound,
    #[error("Erreur de stockage: {0}")]
    Storage(#[from] anyhow::Error),
}

#[derive(Clone)]
pub struct ProgramService<S: ProgramStorage> {
    storage: S,
}

impl<S: ProgramStorage> ProgramService<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub async fn list_programs(&self) -> Result<Vec<Program>, ProgramError> {
        Ok(self.storage.list_programs().await?)
    }

    pub async fn get_program(&self, program_id: &str) -> Result<Program, ProgramError> {
        self.storage
            .get_program(program_id)
            .await?
            .ok_or(ProgramError::NotFound)
    }

    pub async fn get_program_by_slug(&self, slug: &str) -> Result<Program, ProgramError> {
        self.storage
            .get_program_by_slug(slug)
            .await?
            .ok_or(ProgramError::NotFound)
    }

    pub async fn create_program(&self, payload: ProgramPayload) -> Result<Program, ProgramError> {
        Self::validate(&payload)?;

        let id = Uuid::new_v4().to_string();
        let created_at = now_rfc3339()?;
        let program = Self::build_program(id, created_at, payload);

        self.storage.store_program(&program).await?;
        Ok(program)
    }

    pub async fn update_program(
        &self,
        program_id: &str,
        payload: ProgramPayload,
    ) -> Result<Program, ProgramError> {
        Self::validate(&payload)?;

        let existing = self
            .storage
            .get_program(program_id)
            .await?
            .ok_or(ProgramError::NotFound)?;

        let program = Self::build_program(existing.id, existing.created_at, payload);
        self.storage.update_program(&program).await?;
        Ok(program)
    }

    pub async fn delete_program(&self, program_id: &str) -> Result<(), ProgramError> {
        if self.storage.delete_program(program_id).await? {
            Ok(())
        } else {
            Err(ProgramError::NotFound)
        }
    }

    fn validate(payload: &ProgramPayload) -> Result<(), ProgramError> {
        let required = [
            &payload.name,
            &payload.sub_category,
            &payload.description,
            &payload.image,
        ];
        if required.iter().any(|field| field.trim().is_empty()) {
            return Err(ProgramError::MissingFields);
        }
        if payload.price == 0 {
            return Err(ProgramError::InvalidPrice);
        }
        Ok(())
    }

    fn build_program(id: String, created_at: String, payload: ProgramPayload) -> Program {
        let slug = payload
            .slug
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| slugify(&payload.name));
        // The stored schedule always covers exactly days 1..=duration,
        // whatever the client sent.
        let duration = payload.duration.max(1);
        let schedule = resize_schedule(&payload.schedule, duration);
        let ingredients = payload
            .ingredients
            .into_iter()
            .filter(|ing| !ing.is_blank())
            .collect();

        Program {
            id,
            slug,
            name: payload.name,
            sub_category: payload.sub_category,
            price: payload.price,
            description: payload.description,
            full_description: payload.full_description,
            image: payload.image,
            duration,
            schedule,
            ingredients,
            nutrition: payload.nutrition,
            features: payload.features,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{DbConnection, ProgramRepository};
    use shared::{DaySchedule, Meal, MealItem, MealType, NutritionFacts};

    async fn create_test_service() -> ProgramService<ProgramRepository> {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        ProgramService::new(ProgramRepository::new(db))
    }

    fn sample_payload() -> ProgramPayload {
        ProgramPayload {
            slug: None,
            name: "Programme Perte de Poids 7j".to_string(),
            sub_category: "Perte de poids".to_string(),
            price: 150,
            description: "Programme équilibré".to_string(),
            full_description: String::new(),
            image: "https://example.com/programme.jpg".to_string(),
            duration: 7,
            schedule: vec![],
            ingredients: vec![],
            nutrition: NutritionFacts::default(),
            features: vec!["Zéro produit congelé".to_string()],
        }
    }

    #[tokio::test]
    async fn test_create_program_normalizes_empty_schedule() {
        let service = create_test_service().await;
        let program = service.create_program(sample_payload()).await.unwrap();

        assert_eq!(program.slug, "programme-perte-de-poids-7j");
        assert_eq!(program.schedule.len(), 7);
        for (i, day) in program.schedule.iter().enumerate() {
            assert_eq!(day.day, i as u32 + 1);
        }
    }

    #[tokio::test]
    async fn test_create_program_truncates_oversized_schedule() {
        let service = create_test_service().await;
        let mut payload = sample_payload();
        payload.duration = 3;
        payload.schedule = (1..=10)
            .map(|day| DaySchedule {
                day,
                meals: vec![Meal {
                    meal_type: MealType::Lunch,
                    items: vec![MealItem { product_id: None, label: format!("Jour {}", day) }],
                }],
            })
            .collect();

        let program = service.create_program(payload).await.unwrap();
        assert_eq!(program.duration, 3);
        assert_eq!(program.schedule.len(), 3);
        assert_eq!(program.schedule[2].meals[0].items[0].label, "Jour 3");
    }

    #[tokio::test]
    async fn test_create_program_clamps_zero_duration() {
        let service = create_test_service().await;
        let mut payload = sample_payload();
        payload.duration = 0;

        let program = service.create_program(payload).await.unwrap();
        assert_eq!(program.duration, 1);
        assert_eq!(program.schedule.len(), 1);
    }

    #[tokio::test]
    async fn test_create_program_rejects_missing_fields() {
        let service = create_test_service().await;
        let mut payload = sample_payload();
        payload.name = String::new();

        let err = service.create_program(payload).await.unwrap_err();
        assert!(matches!(err, ProgramError::MissingFields));
    }

    #[tokio::test]
    async fn test_update_program_keeps_identity() {
        let service = create_test_service().await;
        let created = service.create_program(sample_payload()).await.unwrap();

        let mut payload = sample_payload();
        payload.duration = 14;
        let updated = service.update_program(&created.id, payload).await.unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.schedule.len(), 14);

        let err = service
            .update_program("nope", sample_payload())
            .await
            .unwrap_err();
        assert!(matches!(err, ProgramError::NotFound));
    }

    #[tokio::test]
    async fn test_delete_program() {
        let service = create_test_service().await;
        let created = service.create_program(sample_payload()).await.unwrap();

        service.delete_program(&created.id).await.unwrap();
        let err = service.delete_program(&created.id).await.unwrap_err();
        assert!(matches!(err, ProgramError::NotFound));
    }
}
