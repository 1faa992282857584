use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Schema-level default of `datetime_finished`: a fixed calendar date, not an
/// offset from the creation time. Mirrors the column default in the migration.
pub const DEFAULT_DATETIME_FINISHED: NaiveDate = match NaiveDate::from_ymd_opt(2023, 11, 16) {
    Some(date) => date,
    None => panic!("invalid default finish date"),
};

/// 订阅实体
/// - is_active 默认 true，取消任务会置为 false
/// - datetime_finished 取消时写入当天日期
/// - game_id / user_id 均为级联删除外键
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "subscribes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub is_active: bool,
    pub datetime_finished: NaiveDate,
    pub game_id: i64,
    pub user_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::games::Entity",
        from = "Column::GameId",
        to = "super::games::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Game,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::games::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Game.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
