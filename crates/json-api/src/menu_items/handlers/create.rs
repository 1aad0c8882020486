//! Create Menu Item Handler

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use menu_app::domain::menu_items::data::NewMenuItem;

use crate::{
    extensions::*,
    menu_items::{
        errors::into_status_error,
        models::{IngredientBody, MenuItemResponse, into_ingredients, parse_category, parse_price},
    },
};

/// Create Menu Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateMenuItemRequest {
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
    #[serde(default)]
    pub ingredients: Vec<IngredientBody>,
}

impl TryFrom<CreateMenuItemRequest> for NewMenuItem {
    type Error = StatusError;

    fn try_from(request: CreateMenuItemRequest) -> Result<Self, Self::Error> {
        Ok(NewMenuItem {
            price: parse_price(&request.price)?,
            category: parse_category(&request.category)?,
            name: request.name,
            description: request.description,
            time_to_cook: request.time_to_cook,
            weight: request.weight,
            image_url: request.image_url,
            ingredients: into_ingredients(request.ingredients),
        })
    }
}

/// Create Menu Item Handler
#[endpoint(
    tags("menu-items"),
    summary = "Create Menu Item",
    responses(
        (status_code = StatusCode::CREATED, description = "Menu item created"),
        (status_code = StatusCode::CONFLICT, description = "Menu item name already exists"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateMenuItemRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<MenuItemResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let item = NewMenuItem::try_from(json.into_inner())?;

    let created = state
        .app
        .menu_items
        .create_menu_item(item)
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/v1/menu-items/{}", created.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(created.into()))
}
