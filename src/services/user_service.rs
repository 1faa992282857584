use crate::entities::user_entity as users;
use crate::error::{AppError, AppResult};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};

/// Minimal identity store: subscriptions reference users, nothing else does.
#[derive(Clone)]
pub struct UserService {
    pool: DatabaseConnection,
}

impl UserService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    pub async fn create(&self, username: &str) -> AppResult<users::Model> {
        let username = username.trim();
        if username.is_empty() {
            return Err(AppError::ValidationError("Username must not be empty".into()));
        }
        let user = users::ActiveModel {
            username: Set(username.to_string()),
            created_at: Set(Some(Utc::now())),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;
        Ok(user)
    }

    /// Deletes the user together with its subscriptions (foreign key cascade).
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = users::Entity::delete_by_id(id).exec(&self.pool).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound(format!("User {id} not found")));
        }
        log::info!("User {id} deleted");
        Ok(())
    }
}
