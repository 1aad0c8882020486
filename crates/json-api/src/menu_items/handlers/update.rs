//! Update Menu Item Handler

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use menu_app::domain::menu_items::data::MenuItemUpdate;

use crate::{
    extensions::*,
    menu_items::{
        errors::into_status_error,
        models::{MenuItemResponse, parse_price},
    },
};

/// Update Menu Item Request
///
/// Omitted fields are left unchanged. Category and ingredients cannot be
/// changed.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub(crate) struct UpdateMenuItemRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    /// Decimal price, e.g. `"4.50"`
    pub price: Option<String>,
    /// Preparation time in milliseconds
    pub time_to_cook: Option<u64>,
    pub image_url: Option<String>,
}

impl TryFrom<UpdateMenuItemRequest> for MenuItemUpdate {
    type Error = StatusError;

    fn try_from(request: UpdateMenuItemRequest) -> Result<Self, Self::Error> {
        Ok(MenuItemUpdate {
            price: request.price.as_deref().map(parse_price).transpose()?,
            name: request.name,
            description: request.description,
            time_to_cook: request.time_to_cook,
            image_url: request.image_url,
        })
    }
}

/// Menu Item Update Handler
#[endpoint(
    tags("menu-items"),
    summary = "Update Menu Item",
    responses(
        (status_code = StatusCode::OK, description = "Menu item updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Menu item not found"),
        (status_code = StatusCode::CONFLICT, description = "Menu item name already exists"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "menu_items.update",
    skip(menu_item, json, depot),
    fields(menu_item_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    menu_item: PathParam<Uuid>,
    json: JsonBody<UpdateMenuItemRequest>,
    depot: &mut Depot,
) -> Result<Json<MenuItemResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let menu_item = menu_item.into_inner();
    let update = MenuItemUpdate::try_from(json.into_inner())?;

    tracing::Span::current().record("menu_item_uuid", tracing::field::display(menu_item));

    let updated = state
        .app
        .menu_items
        .update_menu_item(menu_item.into(), update)
        .await
        .map_err(into_status_error)?;

    Ok(Json(updated.into()))
}
