//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use rust_decimal::Decimal;
use salvo::{affix_state::inject, prelude::*};

use menu_app::{
    context::AppContext,
    domain::menu_items::{
        MockMenuItemsService,
        records::{Category, Ingredient, IngredientCollection, MenuItemRecord, MenuItemUuid},
    },
};

use crate::state::State;

pub(crate) fn make_menu_item(uuid: MenuItemUuid, name: &str, price: Decimal) -> MenuItemRecord {
    MenuItemRecord {
        uuid,
        name: name.to_owned(),
        description: format!("{name} description"),
        price,
        category: Category::Drinks,
        time_to_cook: 60_000,
        weight: 250.0,
        image_url: "https://images.example/item.png".to_owned(),
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
        ingredients: IngredientCollection::new(vec![Ingredient {
            name: "Water".to_owned(),
            calories: 0,
        }]),
    }
}

pub(crate) fn state_with_menu_items(menu_items: MockMenuItemsService) -> Arc<State> {
    State::from_app_context(AppContext {
        menu_items: Arc::new(menu_items),
    })
}

pub(crate) fn menu_items_service(menu_items: MockMenuItemsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_menu_items(menu_items)))
            .push(route),
    )
}
