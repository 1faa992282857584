use crate::entities::game_entity as games;
use crate::error::{AppError, AppResult};
use crate::models::*;
use sea_orm::sea_query::{Expr, SimpleExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, Set,
};
use serde_json::Value;

/// Result of an update whose target exists. A validation failure is a normal
/// outcome here; the HTTP layer decides how to present it.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateOutcome {
    Updated(GameResponse),
    ValidationFailed {
        /// The game as it was before the rejected update.
        game: GameResponse,
        errors: FieldErrors,
    },
}

#[derive(Clone)]
pub struct GameService {
    pool: DatabaseConnection,
}

impl GameService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// 按主键查找游戏，不存在时返回 NotFound
    pub async fn find(&self, id: i64) -> AppResult<games::Model> {
        games::Entity::find_by_id(id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Game {id} not found")))
    }

    /// 游戏列表，支持价格区间 (闭区间) 与价格排序
    pub async fn list(&self, query: &GameListQuery) -> AppResult<Vec<GameResponse>> {
        for (field, bound) in [("min_price", query.min_price), ("max_price", query.max_price)] {
            if bound.is_some_and(|v| !v.is_finite()) {
                return Err(AppError::ValidationError(format!(
                    "{field} must be a finite number"
                )));
            }
        }

        let mut select = games::Entity::find();
        if let Some(min_price) = query.min_price {
            select = select.filter(games::Column::Price.gte(min_price));
        }
        if let Some(max_price) = query.max_price {
            select = select.filter(games::Column::Price.lte(max_price));
        }
        if let Some(order) = price_ordering(query.ordering.as_deref()) {
            select = select.order_by(games::Column::Price, order);
        }

        let list = select
            .order_by_asc(games::Column::Id)
            .all(&self.pool)
            .await?;
        Ok(list.into_iter().map(Into::into).collect())
    }

    /// 按名称模糊搜索，仅支持按价格排序
    ///
    /// Both the column and the term go through the database's `LOWER`, so case
    /// folding is whatever the backend does: Unicode-aware on Postgres, ASCII
    /// only on SQLite.
    pub async fn search(&self, query: &GameSearchQuery) -> AppResult<Vec<GameResponse>> {
        let mut select = games::Entity::find();
        if let Some(term) = query
            .search
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
        {
            let pattern = format!("%{}%", escape_like(term));
            select = select.filter(name_contains(pattern));
        }
        if let Some(order) = price_ordering(query.ordering.as_deref()) {
            select = select.order_by(games::Column::Price, order);
        }

        let list = select
            .order_by_asc(games::Column::Id)
            .all(&self.pool)
            .await?;
        Ok(list.into_iter().map(Into::into).collect())
    }

    pub async fn retrieve(&self, id: i64) -> AppResult<GameResponse> {
        Ok(self.find(id).await?.into())
    }

    /// Validates `body` against the create contract and inserts the game.
    pub async fn create(&self, body: &Value) -> AppResult<GameResponse> {
        let input = GameInput::from_json(body, ValidationMode::Full).map_err(AppError::Validation)?;
        let (Some(name), Some(price)) = (input.name, input.price) else {
            return Err(AppError::InternalError(
                "validated game input is missing fields".into(),
            ));
        };

        let game = games::ActiveModel {
            name: Set(name),
            price: Set(price),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;

        log::info!("Game created: id={} name={}", game.id, game.name);
        Ok(game.into())
    }

    /// Looks the game up first, then validates `body` in the given mode.
    pub async fn update(
        &self,
        id: i64,
        body: &Value,
        mode: ValidationMode,
    ) -> AppResult<UpdateOutcome> {
        let game = self.find(id).await?;

        let input = match GameInput::from_json(body, mode) {
            Ok(input) => input,
            Err(errors) => {
                log::warn!("Game {id} update rejected: {errors}");
                return Ok(UpdateOutcome::ValidationFailed {
                    game: game.into(),
                    errors,
                });
            }
        };

        // 部分更新且没有任何字段时无需写库
        if input.name.is_none() && input.price.is_none() {
            return Ok(UpdateOutcome::Updated(game.into()));
        }

        let mut active = game.into_active_model();
        input.apply(&mut active);
        let updated = active.update(&self.pool).await?;

        log::info!("Game updated: id={} name={}", updated.id, updated.name);
        Ok(UpdateOutcome::Updated(updated.into()))
    }

    /// Hard-deletes the game; its subscriptions go with it via the foreign key.
    pub async fn delete(&self, id: i64) -> AppResult<GameResponse> {
        let game = self.find(id).await?;
        games::Entity::delete_by_id(game.id)
            .exec(&self.pool)
            .await?;

        log::info!("Game deleted: id={} name={}", game.id, game.name);
        Ok(game.into())
    }

    /// Adds `amount` to the price in a single `UPDATE ... SET price = price + ?`.
    /// Returns `false` when no such game exists.
    pub async fn increment_price(&self, id: i64, amount: f64) -> AppResult<bool> {
        let result = games::Entity::update_many()
            .col_expr(
                games::Column::Price,
                Expr::col(games::Column::Price).add(amount),
            )
            .filter(games::Column::Id.eq(id))
            .exec(&self.pool)
            .await?;
        Ok(result.rows_affected > 0)
    }
}

/// `LOWER(name) LIKE LOWER(pattern) ESCAPE '!'`
fn name_contains(pattern: String) -> SimpleExpr {
    Expr::cust_with_exprs(
        "LOWER(?) LIKE LOWER(?) ESCAPE '!'",
        [
            SimpleExpr::from(Expr::col(games::Column::Name)),
            SimpleExpr::from(Expr::val(pattern)),
        ],
    )
}

fn escape_like(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '!') {
            out.push('!');
        }
        out.push(c);
    }
    out
}
