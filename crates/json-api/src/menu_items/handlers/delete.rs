//! Delete Menu Item Handler

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{extensions::*, menu_items::errors::into_status_error};

/// Delete Menu Item Handler
#[endpoint(
    tags("menu-items"),
    summary = "Delete Menu Item",
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Menu item deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Menu item not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(name = "menu_items.delete", skip(menu_item, depot), err)]
pub(crate) async fn handler(
    menu_item: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.state_or_500()?;
    let menu_item = menu_item.into_inner();

    state
        .app
        .menu_items
        .delete_menu_item(menu_item.into())
        .await
        .map_err(into_status_error)?;

    tracing::info!(menu_item_uuid = %menu_item, "deleted menu item");

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;
    use testresult::TestResult;

    use menu_app::domain::menu_items::{
        MenuItemsServiceError, MockMenuItemsService, records::MenuItemUuid,
    };

    use crate::test_helpers::menu_items_service;

    use super::*;

    fn make_service(menu_items: MockMenuItemsService) -> Service {
        menu_items_service(
            menu_items,
            Router::with_path("v1/menu-items/{menu_item}").delete(handler),
        )
    }

    #[tokio::test]
    async fn test_delete_menu_item_returns_204() -> TestResult {
        let uuid = MenuItemUuid::new();

        let mut menu_items = MockMenuItemsService::new();

        menu_items
            .expect_delete_menu_item()
            .once()
            .withf(move |u| *u == uuid)
            .return_once(|_| Ok(()));

        let res = TestClient::delete(format!("http://example.com/v1/menu-items/{uuid}"))
            .send(&make_service(menu_items))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NO_CONTENT), "status");

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_missing_menu_item_returns_404() -> TestResult {
        let uuid = MenuItemUuid::new();

        let mut menu_items = MockMenuItemsService::new();

        menu_items
            .expect_delete_menu_item()
            .once()
            .withf(move |u| *u == uuid)
            .return_once(|_| Err(MenuItemsServiceError::NotFound));

        let res = TestClient::delete(format!("http://example.com/v1/menu-items/{uuid}"))
            .send(&make_service(menu_items))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND), "status");

        Ok(())
    }
}
