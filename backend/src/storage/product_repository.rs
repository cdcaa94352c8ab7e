use anyhow::Result;
use async_trait::async_trait;
use shared::{Ingredient, NutritionFacts, Product};
use sqlx::{sqlite::SqliteRow, Row};

use crate::storage::{db::DbConnection, traits::ProductStorage};

/// SQLite-backed product repository. Ingredient lists are persisted as a
/// JSON text column.
#[derive(Clone)]
pub struct ProductRepository {
    db: DbConnection,
}

impl ProductRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn row_to_product(row: &SqliteRow) -> Result<Product> {
        let ingredients_json: String = row.get("ingredients");
        let ingredients: Vec<Ingredient> = serde_json::from_str(&ingredients_json)?;

        Ok(Product {
            id: row.get("id"),
            slug: row.get("slug"),
            name: row.get("name"),
            category: row.get("category"),
            sub_category: row.get("sub_category"),
            price: row.get::<i64, _>("price") as u32,
            description: row.get("description"),
            full_description: row.get("full_description"),
            image: row.get("image"),
            nutrition: NutritionFacts {
                calories: row.get::<i64, _>("cal") as u32,
                protein: row.get("protein"),
                fiber: row.get("fiber"),
                carbs: row.get("carbs"),
                fats: row.get("fats"),
            },
            ingredients,
            created_at: row.get("created_at"),
        })
    }
}

#[async_trait]
impl ProductStorage for ProductRepository {
    async fn store_product(&self, product: &Product) -> Result<()> {
        let ingredients = serde_json::to_string(&product.ingredients)?;
        sqlx::query(
            r#"
            INSERT INTO products
                (id, slug, name, category, sub_category, price, description,
                 full_description, image, cal, protein, fiber, carbs, fats,
                 ingredients, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&product.id)
        .bind(&product.slug)
        .bind(&product.name)
        .bind(&product.category)
        .bind(&product.sub_category)
        .bind(product.price as i64)
        .bind(&product.description)
        .bind(&product.full_description)
        .bind(&product.image)
        .bind(product.nutrition.calories as i64)
        .bind(&product.nutrition.protein)
        .bind(&product.nutrition.fiber)
        .bind(&product.nutrition.carbs)
        .bind(&product.nutrition.fats)
        .bind(&ingredients)
        .bind(&product.created_at)
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    async fn get_product(&self, product_id: &str) -> Result<Option<Product>> {
        let row = sqlx::query("SELECT * FROM products WHERE id = ?")
            .bind(product_id)
            .fetch_optional(self.db.pool())
            .await?;

        match row {
            Some(r) => Ok(Some(Self::row_to_product(&r)?)),
            None => Ok(None),
        }
    }

    async fn get_product_by_slug(&self, slug: &str) -> Result<Option<Product>> {
        let row = sqlx::query("SELECT * FROM products WHERE slug = ?")
            .bind(slug)
            .fetch_optional(self.db.pool())
            .await?;

        match row {
            Some(r) => Ok(Some(Self::row_to_product(&r)?)),
            None => Ok(None),
        }
    }

    async fn list_products(&self) -> Result<Vec<Product>> {
        let rows = sqlx::query("SELECT * FROM products ORDER BY created_at DESC")
            .fetch_all(self.db.pool())
            .await?;

        rows.iter().map(Self::row_to_product).collect()
    }

    async fn update_product(&self, product: &Product) -> Result<()> {
        let ingredients = serde_json::to_string(&product.ingredients)?;
        sqlx::query(
            r#"
            UPDATE products SET
                slug = ?, name = ?, category = ?, sub_category = ?, price = ?,
                description = ?, full_description = ?, image = ?, cal = ?,
                protein = ?, fiber = ?, carbs = ?, fats = ?, ingredients = ?
            WHERE id = ?
            "#,
        )
        .bind(&product.slug)
        .bind(&product.name)
        .bind(&product.category)
        .bind(&product.sub_category)
        .bind(product.price as i64)
        .bind(&product.description)
        .bind(&product.full_description)
        .bind(&product.image)
        .bind(product.nutrition.calories as i64)
        .bind(&product.nutrition.protein)
        .bind(&product.nutrition.fiber)
        .bind(&product.nutrition.carbs)
        .bind(&product.nutrition.fats)
        .bind(&ingredients)
        .bind(&product.id)
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    async fn delete_product(&self, product_id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(product_id)
            .execute(self.db.pool())
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_product(id: &str, created_at: &str) -> Product {
        Product {
            id: id.to_string(),
            slug: format!("{}-slug", id),
            name: "Almond Energy Balls".to_string(),
            category: "Healthy Snacks".to_string(),
            sub_category: "Energetic balls".to_string(),
            price: 45,
            description: "Pack of 6 energy balls.".to_string(),
            full_description: "Dates, almonds and cocoa.".to_string(),
            image: "https://example.com/balls.jpg".to_string(),
            nutrition: NutritionFacts {
                calories: 120,
                protein: "3g".to_string(),
                fiber: "2g".to_string(),
                carbs: "15g".to_string(),
                fats: "6g".to_string(),
            },
            ingredients: vec![Ingredient {
                name: "Dattes Medjool".to_string(),
                amount: "20g".to_string(),
                benefit: "Énergie rapide naturelle".to_string(),
            }],
            created_at: created_at.to_string(),
        }
    }

    async fn setup_test() -> ProductRepository {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        ProductRepository::new(db)
    }

    #[tokio::test]
    async fn test_store_and_get_product() {
        let repo = setup_test().await;
        let product = sample_product("p1", "2025-01-10T08:00:00Z");

        repo.store_product(&product).await.expect("Failed to store product");

        let fetched = repo.get_product("p1").await.expect("Failed to get product");
        assert_eq!(fetched, Some(product));
    }

    #[tokio::test]
    async fn test_get_product_by_slug() {
        let repo = setup_test().await;
        let product = sample_product("p1", "2025-01-10T08:00:00Z");
        repo.store_product(&product).await.unwrap();

        let fetched = repo.get_product_by_slug("p1-slug").await.unwrap();
        assert_eq!(fetched.map(|p| p.id), Some("p1".to_string()));

        let missing = repo.get_product_by_slug("nope").await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_list_products_newest_first() {
        let repo = setup_test().await;
        repo.store_product(&sample_product("old", "2025-01-01T00:00:00Z")).await.unwrap();
        repo.store_product(&sample_product("new", "2025-02-01T00:00:00Z")).await.unwrap();

        let products = repo.list_products().await.unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].id, "new");
        assert_eq!(products[1].id, "old");
    }

    #[tokio::test]
    async fn test_update_product() {
        let repo = setup_test().await;
        let mut product = sample_product("p1", "2025-01-10T08:00:00Z");
        repo.store_product(&product).await.unwrap();

        product.price = 50;
        product.ingredients.push(Ingredient {
            name: "Cacao pur".to_string(),
            amount: "5g".to_string(),
            benefit: "Booster de sérotonine".to_string(),
        });
        repo.update_product(&product).await.unwrap();

        let fetched = repo.get_product("p1").await.unwrap().unwrap();
        assert_eq!(fetched.price, 50);
        assert_eq!(fetched.ingredients.len(), 2);
    }

    #[tokio::test]
    async fn test_delete_product() {
        let repo = setup_test().await;
        repo.store_product(&sample_product("p1", "2025-01-10T08:00:00Z")).await.unwrap();

        assert!(repo.delete_product("p1").await.unwrap());
        assert!(repo.get_product("p1").await.unwrap().is_none());
        // Deleting again reports not found
        assert!(!repo.delete_product("p1").await.unwrap());
    }
}
