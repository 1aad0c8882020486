//! Menu Item Records

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::uuids::TypedUuid;

/// Menu Item UUID
pub type MenuItemUuid = TypedUuid<MenuItemRecord>;

/// Menu Item Record
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItemRecord {
    pub uuid: MenuItemUuid,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: Category,
    /// Preparation time in milliseconds.
    pub time_to_cook: u64,
    pub weight: f64,
    pub image_url: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub ingredients: IngredientCollection,
}

/// Menu section an item is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Breakfast,
    Drinks,
    Salads,
    Soups,
    Lunch,
    Dinner,
    Desserts,
    Snacks,
}

impl Category {
    pub const ALL: [Self; 8] = [
        Self::Breakfast,
        Self::Drinks,
        Self::Salads,
        Self::Soups,
        Self::Lunch,
        Self::Dinner,
        Self::Desserts,
        Self::Snacks,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Breakfast => "BREAKFAST",
            Self::Drinks => "DRINKS",
            Self::Salads => "SALADS",
            Self::Soups => "SOUPS",
            Self::Lunch => "LUNCH",
            Self::Dinner => "DINNER",
            Self::Desserts => "DESSERTS",
            Self::Snacks => "SNACKS",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Raised when a string does not name any [`Category`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category {0:?}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == value)
            .ok_or_else(|| UnknownCategory(value.to_string()))
    }
}

/// A single ingredient line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub calories: u32,
}

/// Ingredient payload, stored and returned verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientCollection {
    pub ingredients: Vec<Ingredient>,
}

impl IngredientCollection {
    #[must_use]
    pub fn new(ingredients: Vec<Ingredient>) -> Self {
        Self { ingredients }
    }
}
