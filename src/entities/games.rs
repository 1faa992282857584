use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 游戏实体
/// - price 为浮点价格，支持按区间过滤与排序
/// - 删除游戏会级联删除其订阅 (subscribes.game_id ON DELETE CASCADE)
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "games")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(column_type = "Double")]
    pub price: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::subscribes::Entity")]
    Subscribes,
}

impl Related<super::subscribes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subscribes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
