//! Menu Item Errors

use salvo::http::StatusError;
use tracing::error;

use menu_app::domain::menu_items::MenuItemsServiceError;

pub(crate) fn into_status_error(error: MenuItemsServiceError) -> StatusError {
    match error {
        MenuItemsServiceError::NotFound => StatusError::not_found().brief("Menu item not found"),
        MenuItemsServiceError::NameConflict => {
            StatusError::conflict().brief("Menu item name already exists")
        }
        MenuItemsServiceError::InvalidSort(source) => {
            StatusError::bad_request().brief(source.to_string())
        }
        MenuItemsServiceError::InvalidArgument(source) => {
            StatusError::bad_request().brief(source.to_string())
        }
        MenuItemsServiceError::Unavailable(source) => {
            error!("menu item storage unavailable: {source}");

            StatusError::internal_server_error()
        }
    }
}
