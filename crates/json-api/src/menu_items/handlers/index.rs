//! Menu Item Index Handler

use salvo::{oapi::extract::QueryParam, prelude::*};

use menu_app::domain::menu_items::{
    MenuItemsServiceError,
    ordering::SortKey,
    records::Category,
};

use crate::{
    extensions::*,
    menu_items::{errors::into_status_error, models::MenuItemResponse},
};

/// Menu Item Index Handler
///
/// Lists the menu items of one category in the requested order. An unknown
/// category has no items.
#[endpoint(
    tags("menu-items"),
    summary = "List Menu Items",
    responses(
        (status_code = StatusCode::OK, description = "Menu items in order"),
        (status_code = StatusCode::BAD_REQUEST, description = "Unknown sort key"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    category: QueryParam<String, true>,
    sort: QueryParam<String, true>,
    depot: &mut Depot,
) -> Result<Json<Vec<MenuItemResponse>>, StatusError> {
    let state = depot.state_or_500()?;

    let sort = sort
        .into_inner()
        .parse::<SortKey>()
        .map_err(|error| into_status_error(MenuItemsServiceError::from(error)))?;

    let category = category.into_inner();

    let Ok(category) = category.parse::<Category>() else {
        tracing::debug!(category = %category, "unknown category, no menu items");

        return Ok(Json(Vec::new()));
    };

    let items = state
        .app
        .menu_items
        .list_menu_items(category, sort)
        .await
        .map_err(into_status_error)?;

    Ok(Json(items.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use menu_app::domain::menu_items::{MockMenuItemsService, records::MenuItemUuid};

    use crate::test_helpers::{make_menu_item, menu_items_service};

    use super::*;

    fn make_service(menu_items: MockMenuItemsService) -> Service {
        menu_items_service(menu_items, Router::with_path("v1/menu-items").get(handler))
    }

    #[tokio::test]
    async fn test_index_returns_items_in_service_order() -> TestResult {
        let tea = make_menu_item(MenuItemUuid::new(), "Tea", Decimal::from(50));
        let wine = make_menu_item(MenuItemUuid::new(), "Wine", Decimal::from(75));
        let cappuccino = make_menu_item(MenuItemUuid::new(), "Cappuccino", Decimal::from(100));

        let mut menu_items = MockMenuItemsService::new();

        menu_items
            .expect_list_menu_items()
            .once()
            .withf(|category, sort| *category == Category::Drinks && *sort == SortKey::PriceAsc)
            .return_once(move |_, _| Ok(vec![tea, wine, cappuccino]));

        let mut res =
            TestClient::get("http://example.com/v1/menu-items?category=DRINKS&sort=PRICE_ASC")
                .send(&make_service(menu_items))
                .await;

        let body: Vec<MenuItemResponse> = res.take_json().await?;
        let names: Vec<&str> = body.iter().map(|item| item.name.as_str()).collect();

        assert_eq!(res.status_code, Some(StatusCode::OK), "status");
        assert_eq!(names, ["Tea", "Wine", "Cappuccino"], "service order kept");

        Ok(())
    }

    #[tokio::test]
    async fn test_index_unknown_category_returns_empty_list() -> TestResult {
        let mut menu_items = MockMenuItemsService::new();

        menu_items.expect_list_menu_items().never();

        let mut res = TestClient::get("http://example.com/v1/menu-items?category=BRUNCH&sort=AZ")
            .send(&make_service(menu_items))
            .await;

        let body: Vec<MenuItemResponse> = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK), "status");
        assert!(body.is_empty(), "no items for an unknown category");

        Ok(())
    }

    #[tokio::test]
    async fn test_index_unknown_sort_returns_400() -> TestResult {
        let mut menu_items = MockMenuItemsService::new();

        menu_items.expect_list_menu_items().never();

        let res = TestClient::get("http://example.com/v1/menu-items?category=DRINKS&sort=POPULAR")
            .send(&make_service(menu_items))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST), "status");

        Ok(())
    }

    #[tokio::test]
    async fn test_index_missing_category_returns_400() -> TestResult {
        let mut menu_items = MockMenuItemsService::new();

        menu_items.expect_list_menu_items().never();

        let res = TestClient::get("http://example.com/v1/menu-items?sort=AZ")
            .send(&make_service(menu_items))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST), "status");

        Ok(())
    }
}
