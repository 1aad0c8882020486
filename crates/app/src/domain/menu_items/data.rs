//! Menu Items Data

use rust_decimal::Decimal;

use crate::domain::menu_items::records::{Category, IngredientCollection};

/// New Menu Item Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewMenuItem {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: Category,
    pub time_to_cook: u64,
    pub weight: f64,
    pub image_url: String,
    pub ingredients: IngredientCollection,
}

/// Menu Item Update Data
///
/// A sparse change-set: `None` leaves the stored value untouched. Category and
/// ingredients cannot be changed through an update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuItemUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub time_to_cook: Option<u64>,
    pub image_url: Option<String>,
}

impl MenuItemUpdate {
    /// Whether no field is requested to change.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
