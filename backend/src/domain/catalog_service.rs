//! Product catalog domain logic.

use shared::{slugify, Product, ProductPayload};
use thiserror::Error;
use uuid::Uuid;

use crate::domain::now_rfc3339;
use crate::storage::ProductStorage;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Champs obligatoires manquants.")]
    MissingFields,
    #[error("Le prix doit être supérieur à zéro.")]
    InvalidPrice,
    #[error("Produit introuvable.")]
    NotFound,
    #[error("Erreur de stockage: {0}")]
    Storage(#[from] anyhow::Error),
}

#[derive(Clone)]
pub struct CatalogService<S: ProductStorage> {
    storage: S,
}

impl<S: ProductStorage> CatalogService<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        Ok(self.storage.list_products().await?)
    }

    pub async fn get_product(&self, product_id: &str) -> Result<Product, CatalogError> {
        self.storage
            .get_product(product_id)
            .await?
            .ok_or(CatalogError::NotFound)
    }

    pub async fn get_product_by_slug(&self, slug: &str) -> Result<Product, CatalogError> {
        self.storage
            .get_product_by_slug(slug)
            .await?
            .ok_or(CatalogError::NotFound)
    }

    pub async fn create_product(&self, payload: ProductPayload) -> Result<Product, CatalogError> {
        Self::validate(&payload)?;

        let id = Uuid::new_v4().to_string();
        let created_at = now_rfc3339()?;
        let product = Self::build_product(id, created_at, payload);

        self.storage.store_product(&product).await?;
        Ok(product)
    }

    pub async fn update_product(
        &self,
        product_id: &str,
        payload: ProductPayload,
    ) -> Result<Product, CatalogError> {
        Self::validate(&payload)?;

        let existing = self
            .storage
            .get_product(product_id)
            .await?
            .ok_or(CatalogError::NotFound)?;

        let product = Self::build_product(existing.id, existing.created_at, payload);
        self.storage.update_product(&product).await?;
        Ok(product)
    }

    pub async fn delete_product(&self, product_id: &str) -> Result<(), CatalogError> {
        if self.storage.delete_product(product_id).await? {
            Ok(())
        } else {
            Err(CatalogError::NotFound)
        }
    }

    fn validate(payload: &ProductPayload) -> Result<(), CatalogError> {
        let required = [
            &payload.name,
            &payload.category,
            &payload.sub_category,
            &payload.description,
            &payload.image,
        ];
        if required.iter().any(|field| field.trim().is_empty()) {
            return Err(CatalogError::MissingFields);
        }
        if payload.price == 0 {
            return Err(CatalogError::InvalidPrice);
        }
        Ok(())
    }

    fn build_product(id: String, created_at: String, payload: ProductPayload) -> Product {
        let slug = payload
            .slug
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| slugify(&payload.name));
        // Blank ingredient rows from the admin form are dropped
        let ingredients = payload
            .ingredients
            .into_iter()
            .filter(|ing| !ing.is_blank())
            .collect();

        Product {
            id,
            slug,
            name: payload.name,
            category: payload.category,
            sub_category: payload.sub_category,
            price: payload.price,
            description: payload.description,
            full_description: payload.full_description,
            image: payload.image,
            nutrition: payload.nutrition,
            ingredients,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{DbConnection, ProductRepository};
    use shared::{Ingredient, NutritionFacts};

    async fn create_test_service() -> CatalogService<ProductRepository> {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        CatalogService::new(ProductRepository::new(db))
    }

    fn sample_payload() -> ProductPayload {
        ProductPayload {
            slug: None,
            name: "Oatmeal Choco Muffin".to_string(),
            category: "Healthy Snacks".to_string(),
            sub_category: "Muffin".to_string(),
            price: 25,
            description: "Sugar-free oatmeal muffins.".to_string(),
            full_description: String::new(),
            image: "https://example.com/muffin.jpg".to_string(),
            nutrition: NutritionFacts::default(),
            ingredients: vec![
                Ingredient {
                    name: "Flocons d'avoine".to_string(),
                    amount: "40g".to_string(),
                    benefit: "Riche en fibres".to_string(),
                },
                Ingredient::blank(),
            ],
        }
    }

    #[tokio::test]
    async fn test_create_product_fills_slug_id_and_timestamp() {
        let service = create_test_service().await;
        let product = service.create_product(sample_payload()).await.unwrap();

        assert_eq!(product.slug, "oatmeal-choco-muffin");
        assert!(!product.id.is_empty());
        assert!(!product.created_at.is_empty());
        // Blank ingredient rows are dropped
        assert_eq!(product.ingredients.len(), 1);

        let listed = service.list_products().await.unwrap();
        assert_eq!(listed, vec![product]);
    }

    #[tokio::test]
    async fn test_create_product_keeps_explicit_slug() {
        let service = create_test_service().await;
        let mut payload = sample_payload();
        payload.slug = Some("muffin-avoine".to_string());

        let product = service.create_product(payload).await.unwrap();
        assert_eq!(product.slug, "muffin-avoine");
        assert_eq!(
            service.get_product_by_slug("muffin-avoine").await.unwrap().id,
            product.id
        );
    }

    #[tokio::test]
    async fn test_create_product_rejects_missing_fields() {
        let service = create_test_service().await;
        let mut payload = sample_payload();
        payload.image = "  ".to_string();

        let err = service.create_product(payload).await.unwrap_err();
        assert!(matches!(err, CatalogError::MissingFields));
    }

    #[tokio::test]
    async fn test_create_product_rejects_zero_price() {
        let service = create_test_service().await;
        let mut payload = sample_payload();
        payload.price = 0;

        let err = service.create_product(payload).await.unwrap_err();
        assert!(matches!(err, CatalogError::InvalidPrice));
    }

    #[tokio::test]
    async fn test_update_product_preserves_id_and_timestamp() {
        let service = create_test_service().await;
        let created = service.create_product(sample_payload()).await.unwrap();

        let mut payload = sample_payload();
        payload.price = 30;
        let updated = service.update_product(&created.id, payload).await.unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.price, 30);
    }

    #[tokio::test]
    async fn test_update_missing_product_is_not_found() {
        let service = create_test_service().await;
        let err = service
            .update_product("nope", sample_payload())
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::NotFound));
    }

    #[tokio::test]
    async fn test_delete_product() {
        let service = create_test_service().await;
        let created = service.create_product(sample_payload()).await.unwrap();

        service.delete_product(&created.id).await.unwrap();
        let err = service.get_product(&created.id).await.unwrap_err();
        assert!(matches!(err, CatalogError::NotFound));

        let err = service.delete_product(&created.id).await.unwrap_err();
        assert!(matches!(err, CatalogError::NotFound));
    }
}
