//! Get Menu Item Handler

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    extensions::*,
    menu_items::{errors::into_status_error, models::MenuItemResponse},
};

/// Get Menu Item Handler
///
/// Returns a menu item.
#[endpoint(
    tags("menu-items"),
    summary = "Get Menu Item",
    responses(
        (status_code = StatusCode::OK, description = "Menu item"),
        (status_code = StatusCode::NOT_FOUND, description = "Menu item not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn handler(
    menu_item: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<MenuItemResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let item = state
        .app
        .menu_items
        .get_menu_item(menu_item.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(item.into()))
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use menu_app::domain::menu_items::{
        MenuItemsServiceError, MockMenuItemsService, records::MenuItemUuid,
    };

    use crate::test_helpers::{make_menu_item, menu_items_service};

    use super::*;

    fn make_service(menu_items: MockMenuItemsService) -> Service {
        menu_items_service(
            menu_items,
            Router::with_path("v1/menu-items/{menu_item}").get(handler),
        )
    }

    #[tokio::test]
    async fn test_get_returns_200() -> TestResult {
        let uuid = MenuItemUuid::new();
        let item = make_menu_item(uuid, "Tea", Decimal::from(50));

        let mut menu_items = MockMenuItemsService::new();

        menu_items
            .expect_get_menu_item()
            .once()
            .withf(move |u| *u == uuid)
            .return_once(move |_| Ok(item));

        let mut res = TestClient::get(format!("http://example.com/v1/menu-items/{uuid}"))
            .send(&make_service(menu_items))
            .await;

        let body: MenuItemResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK), "status");
        assert_eq!(body.name, "Tea", "name");
        assert_eq!(body.price, "50", "price");
        assert_eq!(body.category, "DRINKS", "category");

        Ok(())
    }

    #[tokio::test]
    async fn test_get_missing_menu_item_returns_404() -> TestResult {
        let uuid = MenuItemUuid::new();

        let mut menu_items = MockMenuItemsService::new();

        menu_items
            .expect_get_menu_item()
            .once()
            .withf(move |u| *u == uuid)
            .return_once(|_| Err(MenuItemsServiceError::NotFound));

        let res = TestClient::get(format!("http://example.com/v1/menu-items/{uuid}"))
            .send(&make_service(menu_items))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND), "status");

        Ok(())
    }

    #[tokio::test]
    async fn test_get_invalid_uuid_returns_400() -> TestResult {
        let mut menu_items = MockMenuItemsService::new();

        menu_items.expect_get_menu_item().never();

        let res = TestClient::get("http://example.com/v1/menu-items/123")
            .send(&make_service(menu_items))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST), "status");

        Ok(())
    }
}
