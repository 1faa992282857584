use crate::entities::game_entity;
use crate::models::validation::{
    FieldErrors, ValidationMode, expect_object, number_field, string_field,
};
use sea_orm::{ActiveValue::Set, Order};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

pub const GAME_NAME_MAX_LEN: u64 = 255;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GameResponse {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Chess")]
    pub name: String,
    #[schema(example = 19.99)]
    pub price: f64,
}

impl From<game_entity::Model> for GameResponse {
    fn from(m: game_entity::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            price: m.price,
        }
    }
}

/// Request body of create / update / partial update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema, Validate)]
pub struct GameInput {
    #[schema(example = "Chess")]
    #[validate(length(
        max = 255,
        message = "Ensure this field has no more than 255 characters."
    ))]
    pub name: Option<String>,
    #[schema(example = 19.99)]
    pub price: Option<f64>,
}

impl GameInput {
    /// Validates a raw JSON body. In [`ValidationMode::Full`] every field is
    /// required; in [`ValidationMode::Partial`] absent fields stay `None`.
    pub fn from_json(body: &Value, mode: ValidationMode) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::default();
        let Some(data) = expect_object(body, &mut errors) else {
            return Err(errors);
        };

        let input = GameInput {
            name: string_field(data, "name", mode, &mut errors),
            price: number_field(data, "price", mode, &mut errors),
        };
        if let Err(e) = input.validate() {
            errors.merge(e.into());
        }
        errors.into_result()?;
        Ok(input)
    }

    /// Copies the supplied fields onto `model`, leaving the others untouched.
    pub fn apply(self, model: &mut game_entity::ActiveModel) {
        if let Some(name) = self.name {
            model.name = Set(name);
        }
        if let Some(price) = self.price {
            model.price = Set(price);
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GameListQuery {
    /// Inclusive lower price bound; must be finite.
    pub min_price: Option<f64>,
    /// Inclusive upper price bound; must be finite.
    pub max_price: Option<f64>,
    /// `price` or `-price`.
    pub ordering: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GameSearchQuery {
    /// Case-insensitive substring of the game name.
    pub search: Option<String>,
    /// `price` or `-price`.
    pub ordering: Option<String>,
}

/// Resolves an `ordering` parameter against the sortable fields (only
/// `price`). Terms are comma separated; unknown terms are ignored and the
/// first recognised one wins.
pub fn price_ordering(raw: Option<&str>) -> Option<Order> {
    raw?.split(',').map(str::trim).find_map(|term| match term {
        "price" => Some(Order::Asc),
        "-price" => Some(Order::Desc),
        _ => None,
    })
}
