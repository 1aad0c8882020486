//! Test Helpers

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::domain::menu_items::{
    data::NewMenuItem,
    records::{Category, Ingredient, IngredientCollection, MenuItemRecord, MenuItemUuid},
};

fn ingredients() -> IngredientCollection {
    IngredientCollection::new(vec![
        Ingredient {
            name: "Water".to_string(),
            calories: 0,
        },
        Ingredient {
            name: "Milk".to_string(),
            calories: 42,
        },
    ])
}

/// A stored record with a fresh UUID, last updated when it was created.
pub(crate) fn record(
    name: &str,
    price: Decimal,
    category: Category,
    created_at: Timestamp,
) -> MenuItemRecord {
    MenuItemRecord {
        uuid: MenuItemUuid::new(),
        name: name.to_string(),
        description: format!("{name} description"),
        price,
        category,
        time_to_cook: 90_000,
        weight: 250.5,
        image_url: format!("https://images.example/{}.png", name.to_lowercase()),
        created_at,
        updated_at: created_at,
        ingredients: ingredients(),
    }
}

pub(crate) fn new_item(name: &str, price: Decimal, category: Category) -> NewMenuItem {
    NewMenuItem {
        name: name.to_string(),
        description: format!("{name} description"),
        price,
        category,
        time_to_cook: 90_000,
        weight: 250.5,
        image_url: format!("https://images.example/{}.png", name.to_lowercase()),
        ingredients: ingredients(),
    }
}
