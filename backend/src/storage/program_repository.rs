use anyhow::Result;
use async_trait::async_trait;
use shared::{DaySchedule, Ingredient, NutritionFacts, Program};
use sqlx::{sqlite::SqliteRow, Row};

use crate::storage::{db::DbConnection, traits::ProgramStorage};

/// SQLite-backed program repository. The nested schedule, the ingredient
/// list and the feature list are persisted as JSON text columns.
#[derive(Clone)]
pub struct ProgramRepository {
    db: DbConnection,
}

impl ProgramRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn row_to_program(row: &SqliteRow) -> Result<Program> {
        let schedule_json: String = row.get("schedule");
        let schedule: Vec<DaySchedule> = serde_json::from_str(&schedule_json)?;
        let ingredients_json: String = row.get("ingredients");
        let ingredients: Vec<Ingredient> = serde_json::from_str(&ingredients_json)?;
        let features_json: String = row.get("features");
        let features: Vec<String> = serde_json::from_str(&features_json)?;

        Ok(Program {
            id: row.get("id"),
            slug: row.get("slug"),
            name: row.get("name"),
            sub_category: row.get("sub_category"),
            price: row.get::<i64, _>("price") as u32,
            description: row.get("description"),
            full_description: row.get("full_description"),
            image: row.get("image"),
            duration: row.get::<i64, _>("duration") as u32,
            schedule,
            ingredients,
            nutrition: NutritionFacts {
                calories: row.get::<i64, _>("cal") as u32,
                protein: row.get("protein"),
                fiber: row.get("fiber"),
                carbs: row.get("carbs"),
                fats: row.get("fats"),
            },
            features,
            created_at: row.get("created_at"),
        })
    }
}

#[async_trait]
impl ProgramStorage for ProgramRepository {
    async fn store_program(&self, program: &Program) -> Result<()> {
        let schedule = serde_json::to_string(&program.schedule)?;
        let ingredients = serde_json::to_string(&program.ingredients)?;
        let features = serde_json::to_string(&program.features)?;
        sqlx::query(
            r#"
            INSERT INTO programs
                (id, slug, name, sub_category, price, description,
                 full_description, image, duration, schedule, ingredients,
                 cal, protein, fiber, carbs, fats, features, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&program.id)
        .bind(&program.slug)
        .bind(&program.name)
        .bind(&program.sub_category)
        .bind(program.price as i64)
        .bind(&program.description)
        .bind(&program.full_description)
        .bind(&program.image)
        .bind(program.duration as i64)
        .bind(&schedule)
        .bind(&ingredients)
        .bind(program.nutrition.calories as i64)
        .bind(&program.nutrition.protein)
        .bind(&program.nutrition.fiber)
        .bind(&program.nutrition.carbs)
        .bind(&program.nutrition.fats)
        .bind(&features)
        .bind(&program.created_at)
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    async fn get_program(&self, program_id: &str) -> Result<Option<Program>> {
        let row = sqlx::query("SELECT * FROM programs WHERE id = ?")
            .bind(program_id)
            .fetch_optional(self.db.pool())
            .await?;

        match row {
            Some(r) => Ok(Some(Self::row_to_program(&r)?)),
            None => Ok(None),
        }
    }

    async fn get_program_by_slug(&self, slug: &str) -> Result<Option<Program>> {
        let row = sqlx::query("SELECT * FROM programs WHERE slug = ?")
            .bind(slug)
            .fetch_optional(self.db.pool())
            .await?;

        match row {
            Some(r) => Ok(Some(Self::row_to_program(&r)?)),
            None => Ok(None),
        }
    }

    async fn list_programs(&self) -> Result<Vec<Program>> {
        let rows = sqlx::query("SELECT * FROM programs ORDER BY created_at DESC")
            .fetch_all(self.db.pool())
            .await?;

        rows.iter().map(Self::row_to_program).collect()
    }

    async fn update_program(&self, program: &Program) -> Result<()> {
        let schedule = serde_json::to_string(&program.schedule)?;
        let ingredients = serde_json::to_string(&program.ingredients)?;
        let features = serde_json::to_string(&program.features)?;
        sqlx::query(
            r#"
            UPDATE programs SET
                slug = ?, name = ?, sub_category = ?, price = ?, description = ?,
                full_description = ?, image = ?, duration = ?, schedule = ?,
                ingredients = ?, cal = ?, protein = ?, fiber = ?, carbs = ?,
                fats = ?, features = ?
            WHERE id = ?
            "#,
        )
        .bind(&program.slug)
        .bind(&program.name)
        .bind(&program.sub_category)
        .bind(program.price as i64)
        .bind(&program.description)
        .bind(&program.full_description)
        .bind(&program.image)
        .bind(program.duration as i64)
        .bind(&schedule)
        .bind(&ingredients)
        .bind(program.nutrition.calories as i64)
        .bind(&program.nutrition.protein)
        .bind(&program.nutrition.fiber)
        .bind(&program.nutrition.carbs)
        .bind(&program.nutrition.fats)
        .bind(&features)
        .bind(&program.id)
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    async fn delete_program(&self, program_id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM programs WHERE id = ?")
            .bind(program_id)
            .execute(self.db.pool())
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{Meal, MealItem, MealType};

    fn sample_program(id: &str, created_at: &str) -> Program {
        let mut schedule = shared::resize_schedule(&[], 7);
        schedule[0].meals.push(Meal {
            meal_type: MealType::Breakfast,
            items: vec![MealItem {
                product_id: Some("p1".to_string()),
                label: "Super Seed Granola".to_string(),
            }],
        });

        Program {
            id: id.to_string(),
            slug: format!("{}-slug", id),
            name: "Programme Perte de Poids 7j".to_string(),
            sub_category: "Perte de poids".to_string(),
            price: 150,
            description: "Programme équilibré".to_string(),
            full_description: String::new(),
            image: "https://example.com/programme.jpg".to_string(),
            duration: 7,
            schedule,
            ingredients: vec![],
            nutrition: NutritionFacts {
                calories: 1400,
                protein: "90g".to_string(),
                fiber: "30g".to_string(),
                carbs: "120g".to_string(),
                fats: "40g".to_string(),
            },
            features: vec!["Barquettes micro-ondables".to_string()],
            created_at: created_at.to_string(),
        }
    }

    async fn setup_test() -> ProgramRepository {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        ProgramRepository::new(db)
    }

    #[tokio::test]
    async fn test_store_and_get_program_round_trips_schedule() {
        let repo = setup_test().await;
        let program = sample_program("pr1", "2025-01-10T08:00:00Z");
        repo.store_program(&program).await.expect("Failed to store program");

        let fetched = repo.get_program("pr1").await.unwrap().unwrap();
        assert_eq!(fetched, program);
        assert_eq!(fetched.schedule.len(), 7);
        assert_eq!(fetched.schedule[0].meals[0].items[0].product_id.as_deref(), Some("p1"));
    }

    #[tokio::test]
    async fn test_get_program_by_slug() {
        let repo = setup_test().await;
        repo.store_program(&sample_program("pr1", "2025-01-10T08:00:00Z")).await.unwrap();

        let fetched = repo.get_program_by_slug("pr1-slug").await.unwrap();
        assert_eq!(fetched.map(|p| p.id), Some("pr1".to_string()));
    }

    #[tokio::test]
    async fn test_list_programs_newest_first() {
        let repo = setup_test().await;
        repo.store_program(&sample_program("old", "2025-01-01T00:00:00Z")).await.unwrap();
        repo.store_program(&sample_program("new", "2025-02-01T00:00:00Z")).await.unwrap();

        let programs = repo.list_programs().await.unwrap();
        assert_eq!(programs[0].id, "new");
        assert_eq!(programs[1].id, "old");
    }

    #[tokio::test]
    async fn test_update_and_delete_program() {
        let repo = setup_test().await;
        let mut program = sample_program("pr1", "2025-01-10T08:00:00Z");
        repo.store_program(&program).await.unwrap();

        program.duration = 3;
        program.schedule = shared::resize_schedule(&program.schedule, 3);
        repo.update_program(&program).await.unwrap();

        let fetched = repo.get_program("pr1").await.unwrap().unwrap();
        assert_eq!(fetched.duration, 3);
        assert_eq!(fetched.schedule.len(), 3);

        assert!(repo.delete_program("pr1").await.unwrap());
        assert!(!repo.delete_program("pr1").await.unwrap());
    }
}
