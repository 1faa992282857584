use crate::entities::subscribe_entity::{self as subscribes, DEFAULT_DATETIME_FINISHED};
use crate::error::{AppError, AppResult};
use crate::models::*;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, Set,
};

#[derive(Clone)]
pub struct SubscribeService {
    pool: DatabaseConnection,
}

impl SubscribeService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// 创建订阅；未指定结束日期时使用表结构中的固定默认值
    pub async fn create(&self, req: NewSubscribe) -> AppResult<SubscribeResponse> {
        let model = subscribes::ActiveModel {
            is_active: Set(true),
            datetime_finished: Set(req.datetime_finished.unwrap_or(DEFAULT_DATETIME_FINISHED)),
            game_id: Set(req.game_id),
            user_id: Set(req.user_id),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;
        Ok(model.into())
    }

    pub async fn get(&self, id: i64) -> AppResult<SubscribeResponse> {
        subscribes::Entity::find_by_id(id)
            .one(&self.pool)
            .await?
            .map(Into::into)
            .ok_or_else(|| AppError::NotFound(format!("Subscribe {id} not found")))
    }

    /// Subscriptions of one game, by id ascending.
    pub async fn list_for_game(&self, game_id: i64) -> AppResult<Vec<SubscribeResponse>> {
        let list = subscribes::Entity::find()
            .filter(subscribes::Column::GameId.eq(game_id))
            .order_by_asc(subscribes::Column::Id)
            .all(&self.pool)
            .await?;
        Ok(list.into_iter().map(Into::into).collect())
    }

    /// Subscriptions of one user, by id ascending.
    pub async fn list_for_user(&self, user_id: i64) -> AppResult<Vec<SubscribeResponse>> {
        let list = subscribes::Entity::find()
            .filter(subscribes::Column::UserId.eq(user_id))
            .order_by_asc(subscribes::Column::Id)
            .all(&self.pool)
            .await?;
        Ok(list.into_iter().map(Into::into).collect())
    }

    /// Marks the subscription inactive and finished today (UTC).
    /// Returns `false` if it does not exist.
    pub async fn cancel(&self, id: i64) -> AppResult<bool> {
        let Some(model) = subscribes::Entity::find_by_id(id).one(&self.pool).await? else {
            return Ok(false);
        };

        let mut am = model.into_active_model();
        am.is_active = Set(false);
        am.datetime_finished = Set(Utc::now().date_naive());
        am.update(&self.pool).await?;

        log::info!("Subscribe {id} cancelled");
        Ok(true)
    }
}
