use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;

use crate::{
    db::memory::MemoryTable,
    entities::contact_message::{ContactMessage, NewContactMessage},
    errors::AppError,
    repositories::sqlx_repo::SqlxContactMessageRepo,
};

#[async_trait]
pub trait ContactMessageRepository: Send + Sync {
    async fn create_contact_message(&self, msg: &NewContactMessage) -> Result<ContactMessage, AppError>;
    async fn get_contact_message_by_id(&self, id: i64) -> Result<ContactMessage, AppError>;
    async fn list_contact_messages(&self) -> Result<Vec<ContactMessage>, AppError>;
    /// Rewrites the editable fields. `created_at` is left untouched.
    async fn update_contact_message(&self, id: i64, msg: &NewContactMessage) -> Result<ContactMessage, AppError>;
    async fn delete_contact_message(&self, id: i64) -> Result<(), AppError>;
}

impl SqlxContactMessageRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxContactMessageRepo { pool }
    }
}

#[async_trait]
impl ContactMessageRepository for SqlxContactMessageRepo {
    async fn create_contact_message(&self, msg: &NewContactMessage) -> Result<ContactMessage, AppError> {
        let created = sqlx::query_as::<_, ContactMessage>(
            r#"
            INSERT INTO contact_messages (name, email, subject, message)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&msg.name)
        .bind(&msg.email)
        .bind(&msg.subject)
        .bind(&msg.message)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn get_contact_message_by_id(&self, id: i64) -> Result<ContactMessage, AppError> {
        let contact_msg = sqlx::query_as::<_, ContactMessage>(
            "SELECT * FROM contact_messages WHERE id = $1",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(contact_msg)
    }

    async fn list_contact_messages(&self) -> Result<Vec<ContactMessage>, AppError> {
        let messages = sqlx::query_as::<_, ContactMessage>(
            "SELECT * FROM contact_messages ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(messages)
    }

    async fn update_contact_message(&self, id: i64, msg: &NewContactMessage) -> Result<ContactMessage, AppError> {
        let updated = sqlx::query_as::<_, ContactMessage>(
            r#"
            UPDATE contact_messages SET
                name = $1,
                email = $2,
                subject = $3,
                message = $4
            WHERE id = $5
            RETURNING *
            "#,
        )
        .bind(&msg.name)
        .bind(&msg.email)
        .bind(&msg.subject)
        .bind(&msg.message)
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(updated)
    }

    async fn delete_contact_message(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM contact_messages WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Contact message not found".into()));
        }

        Ok(())
    }
}

#[async_trait]
impl ContactMessageRepository for MemoryTable<ContactMessage> {
    async fn create_contact_message(&self, msg: &NewContactMessage) -> Result<ContactMessage, AppError> {
        Ok(self.insert_with(|id| msg.clone().into_contact_message(id, Utc::now())))
    }

    async fn get_contact_message_by_id(&self, id: i64) -> Result<ContactMessage, AppError> {
        self.get(id)
            .ok_or_else(|| AppError::NotFound("Contact message not found".into()))
    }

    async fn list_contact_messages(&self) -> Result<Vec<ContactMessage>, AppError> {
        Ok(self.list_where(|_| true))
    }

    async fn update_contact_message(&self, id: i64, msg: &NewContactMessage) -> Result<ContactMessage, AppError> {
        self.replace_with(id, |current| msg.clone().into_contact_message(id, current.created_at))
            .ok_or_else(|| AppError::NotFound("Contact message not found".into()))
    }

    async fn delete_contact_message(&self, id: i64) -> Result<(), AppError> {
        if self.remove(id) {
            Ok(())
        } else {
            Err(AppError::NotFound("Contact message not found".into()))
        }
    }
}
