//! Menu items service errors.

use thiserror::Error;

use crate::domain::menu_items::{
    ordering::InvalidSort, store::StoreError, validation::InvalidArgument,
};

#[derive(Debug, Error)]
pub enum MenuItemsServiceError {
    #[error("menu item not found")]
    NotFound,

    #[error("menu item name already exists")]
    NameConflict,

    #[error(transparent)]
    InvalidSort(#[from] InvalidSort),

    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),

    #[error("storage unavailable")]
    Unavailable(#[source] sqlx::Error),
}

impl From<StoreError> for MenuItemsServiceError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::NotFound => Self::NotFound,
            StoreError::NameTaken => Self::NameConflict,
            StoreError::Sql(source) => Self::Unavailable(source),
        }
    }
}
