use crate::entities::subscribe_entity;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SubscribeResponse {
    pub id: i64,
    pub is_active: bool,
    #[schema(value_type = String, example = "2023-11-16")]
    pub datetime_finished: NaiveDate,
    pub game_id: i64,
    pub user_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NewSubscribe {
    pub game_id: i64,
    pub user_id: i64,
    /// Defaults to the schema's fixed finish date when omitted.
    #[serde(default)]
    #[schema(value_type = Option<String>, example = "2024-01-31")]
    pub datetime_finished: Option<NaiveDate>,
}

impl From<subscribe_entity::Model> for SubscribeResponse {
    fn from(m: subscribe_entity::Model) -> Self {
        Self {
            id: m.id,
            is_active: m.is_active,
            datetime_finished: m.datetime_finished,
            game_id: m.game_id,
            user_id: m.user_id,
        }
    }
}
