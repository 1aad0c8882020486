//! Menu Item Wire Models

use std::str::FromStr;

use rust_decimal::Decimal;
use salvo::{oapi::ToSchema, prelude::StatusError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use menu_app::domain::menu_items::records::{
    Category, Ingredient, IngredientCollection, MenuItemRecord,
};

use crate::extensions::*;

/// A single ingredient line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct IngredientBody {
    /// Ingredient name
    pub name: String,

    /// Calories contributed by this ingredient
    pub calories: u32,
}

impl From<IngredientBody> for Ingredient {
    fn from(body: IngredientBody) -> Self {
        Ingredient {
            name: body.name,
            calories: body.calories,
        }
    }
}

impl From<Ingredient> for IngredientBody {
    fn from(ingredient: Ingredient) -> Self {
        IngredientBody {
            name: ingredient.name,
            calories: ingredient.calories,
        }
    }
}

pub(crate) fn into_ingredients(bodies: Vec<IngredientBody>) -> IngredientCollection {
    IngredientCollection::new(bodies.into_iter().map(Into::into).collect())
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct MenuItemResponse {
    /// The unique identifier of the menu item
    pub uuid: Uuid,

    pub name: String,

    pub description: String,

    /// Decimal price, e.g. `"4.50"`
    pub price: String,

    /// Menu category, e.g. `DRINKS`
    pub category: String,

    /// Preparation time in milliseconds
    pub time_to_cook: u64,

    pub weight: f64,

    pub image_url: String,

    /// The date and time the menu item was created
    pub created_at: String,

    /// The date and time the menu item was last updated
    pub updated_at: String,

    pub ingredients: Vec<IngredientBody>,
}

impl From<MenuItemRecord> for MenuItemResponse {
    fn from(item: MenuItemRecord) -> Self {
        MenuItemResponse {
            uuid: item.uuid.into_uuid(),
            name: item.name,
            description: item.description,
            price: item.price.to_string(),
            category: item.category.to_string(),
            time_to_cook: item.time_to_cook,
            weight: item.weight,
            image_url: item.image_url,
            created_at: item.created_at.to_string(),
            updated_at: item.updated_at.to_string(),
            ingredients: item
                .ingredients
                .ingredients
                .into_iter()
                .map(Into::into)
                .collect(),
        }
    }
}

pub(crate) fn parse_price(value: &str) -> Result<Decimal, StatusError> {
    Decimal::from_str(value.trim()).or_400("price must be a decimal string")
}

pub(crate) fn parse_category(value: &str) -> Result<Category, StatusError> {
    value.parse::<Category>().or_400("unknown menu category")
}
