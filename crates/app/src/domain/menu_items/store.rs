//! Menu item persistence contract.

use async_trait::async_trait;
use mockall::automock;
use sqlx::error::{DatabaseError, ErrorKind};
use thiserror::Error;

use crate::domain::menu_items::{
    merge::NameConflict,
    ordering::OrderingSpec,
    records::{Category, MenuItemRecord, MenuItemUuid},
};

/// Failures a store reports back to the service.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("menu item not found")]
    NotFound,

    #[error("menu item name already taken")]
    NameTaken,

    #[error("storage error")]
    Sql(#[source] sqlx::Error),
}

impl From<NameConflict> for StoreError {
    fn from(_conflict: NameConflict) -> Self {
        Self::NameTaken
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(error: sqlx::Error) -> Self {
        if matches!(error, sqlx::Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::NameTaken,
            Some(_) | None => Self::Sql(error),
        }
    }
}

/// Storage for menu items.
///
/// Implementations must enforce name uniqueness atomically in [`save`]: of two
/// concurrent writers converging on one name, only one may succeed.
///
/// [`save`]: MenuItemStore::save
#[automock]
#[async_trait]
pub trait MenuItemStore: Send + Sync {
    /// Load a single menu item.
    async fn get(&self, item: MenuItemUuid) -> Result<MenuItemRecord, StoreError>;

    /// Insert the record, or overwrite the stored one with the same UUID.
    ///
    /// Category, ingredients and `created_at` of an existing record are kept.
    async fn save(&self, record: MenuItemRecord) -> Result<MenuItemRecord, StoreError>;

    /// Remove a menu item.
    async fn delete(&self, item: MenuItemUuid) -> Result<(), StoreError>;

    /// All items in `category`, in exactly the order `ordering` describes.
    async fn list_by_category(
        &self,
        category: Category,
        ordering: OrderingSpec,
    ) -> Result<Vec<MenuItemRecord>, StoreError>;
}
