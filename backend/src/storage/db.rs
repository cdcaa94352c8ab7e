use anyhow::Result;
use sqlx::{migrate::MigrateDatabase, Sqlite, SqlitePool};
use std::sync::Arc;

// The database URL for the production database
const DATABASE_URL: &str = "sqlite:healthybite.db";

/// DbConnection manages database operations
#[derive(Clone)]
pub struct DbConnection {
    pool: Arc<SqlitePool>,
}

impl DbConnection {
    /// Create a new database connection
    pub async fn new(url: &str) -> Result<Self> {
        // Create database if it doesn't exist
        if !Sqlite::database_exists(url).await.unwrap_or(false) {
            Sqlite::create_database(url).await?
        }

        // Connect to the database
        let pool = SqlitePool::connect(url).await?;

        // Setup database schema
        Self::setup_schema(&pool).await?;

        Ok(Self { pool: Arc::new(pool) })
    }

    /// Initialize the standard database
    pub async fn init() -> Result<Self> {
        Self::new(DATABASE_URL).await
    }

    /// Initialize a test database with a unique name
    #[cfg(test)]
    pub async fn init_test() -> Result<Self> {
        // Generate a unique database name so parallel tests don't collide
        let test_id = uuid::Uuid::new_v4().to_string();
        let db_url = format!("file:memdb_{}?mode=memory&cache=shared", test_id);

        Self::new(&db_url).await
    }

    /// Set up the required database schema
    async fn setup_schema(pool: &SqlitePool) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS products (
                id TEXT PRIMARY KEY,
                slug TEXT NOT NULL,
                name TEXT NOT NULL,
                category TEXT NOT NULL,
                sub_category TEXT NOT NULL,
                price INTEGER NOT NULL,
                description TEXT NOT NULL,
                full_description TEXT NOT NULL DEFAULT '',
                image TEXT NOT NULL,
                cal INTEGER NOT NULL DEFAULT 0,
                protein TEXT NOT NULL DEFAULT '',
                fiber TEXT NOT NULL DEFAULT '',
                carbs TEXT NOT NULL DEFAULT '',
                fats TEXT NOT NULL DEFAULT '',
                ingredients TEXT NOT NULL DEFAULT '[]',
                created_at TEXT NOT NULL
            );
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS programs (
                id TEXT PRIMARY KEY,
                slug TEXT NOT NULL,
                name TEXT NOT NULL,
                sub_category TEXT NOT NULL,
                price INTEGER NOT NULL,
                description TEXT NOT NULL,
                full_description TEXT NOT NULL DEFAULT '',
                image TEXT NOT NULL,
                duration INTEGER NOT NULL,
                schedule TEXT NOT NULL DEFAULT '[]',
                ingredients TEXT NOT NULL DEFAULT '[]',
                cal INTEGER NOT NULL DEFAULT 0,
                protein TEXT NOT NULL DEFAULT '',
                fiber TEXT NOT NULL DEFAULT '',
                carbs TEXT NOT NULL DEFAULT '',
                fats TEXT NOT NULL DEFAULT '',
                features TEXT NOT NULL DEFAULT '[]',
                created_at TEXT NOT NULL
            );
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS contact_messages (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                email TEXT NOT NULL,
                phone TEXT,
                reason TEXT NOT NULL,
                message TEXT NOT NULL,
                created_at TEXT NOT NULL
            );
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Get the underlying SQLite pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_schema_setup_is_idempotent() {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        // Running the schema a second time must not fail
        DbConnection::setup_schema(db.pool()).await.expect("Schema rerun failed");
    }
}
