use anyhow::Result;
use async_trait::async_trait;
use sqlx::Row;

use crate::domain::models::ContactMessage;
use crate::storage::{db::DbConnection, traits::ContactStorage};

/// SQLite-backed store for contact-form submissions.
#[derive(Clone)]
pub struct ContactRepository {
    db: DbConnection,
}

impl ContactRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContactStorage for ContactRepository {
    async fn store_message(&self, message: &ContactMessage) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO contact_messages (id, name, email, phone, reason, message, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&message.id)
        .bind(&message.name)
        .bind(&message.email)
        .bind(&message.phone)
        .bind(&message.reason)
        .bind(&message.message)
        .bind(&message.created_at)
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    async fn list_messages(&self, limit: Option<u32>) -> Result<Vec<ContactMessage>> {
        let limit = limit.unwrap_or(100);
        let rows = sqlx::query(
            "SELECT * FROM contact_messages ORDER BY created_at DESC LIMIT ?",
        )
        .bind(limit as i64)
        .fetch_all(self.db.pool())
        .await?;

        Ok(rows
            .iter()
            .map(|row| ContactMessage {
                id: row.get("id"),
                name: row.get("name"),
                email: row.get("email"),
                phone: row.get("phone"),
                reason: row.get("reason"),
                message: row.get("message"),
                created_at: row.get("created_at"),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_store_and_list_messages() {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        let repo = ContactRepository::new(db);

        let message = ContactMessage {
            id: "m1".to_string(),
            name: "Amina".to_string(),
            email: "amina@example.com".to_string(),
            phone: None,
            reason: "Commande".to_string(),
            message: "Livrez-vous à Rabat ?".to_string(),
            created_at: "2025-01-10T08:00:00Z".to_string(),
        };
        repo.store_message(&message).await.expect("Failed to store message");

        let messages = repo.list_messages(None).await.unwrap();
        assert_eq!(messages, vec![message]);
    }
}
