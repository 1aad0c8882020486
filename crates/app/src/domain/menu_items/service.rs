//! Menu items service.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tracing::{debug, info};

use crate::domain::menu_items::{
    data::{MenuItemUpdate, NewMenuItem},
    errors::MenuItemsServiceError,
    memory::MemoryMenuItemStore,
    merge::merge,
    ordering::{SortKey, compose_ordering},
    records::{Category, MenuItemRecord, MenuItemUuid},
    repository::PgMenuItemStore,
    store::MenuItemStore,
    validation::{validate_new_item, validate_update},
};

/// Catalog backed by `PostgreSQL`.
pub type PgCatalog = Catalog<PgMenuItemStore>;

/// Catalog backed by process memory.
pub type MemoryCatalog = Catalog<MemoryMenuItemStore>;

/// Menu items service over any [`MenuItemStore`].
#[derive(Debug, Clone)]
pub struct Catalog<S> {
    store: S,
}

impl<S: MenuItemStore> Catalog<S> {
    #[must_use]
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

/// Current time at the precision the stores keep.
fn now() -> Timestamp {
    let now = Timestamp::now();

    Timestamp::from_microsecond(now.as_microsecond()).unwrap_or(now)
}

#[async_trait]
impl<S: MenuItemStore> MenuItemsService for Catalog<S> {
    #[tracing::instrument(name = "menu_items.create", skip_all, fields(name = %item.name), err)]
    async fn create_menu_item(
        &self,
        item: NewMenuItem,
    ) -> Result<MenuItemRecord, MenuItemsServiceError> {
        validate_new_item(&item)?;

        let now = now();

        let record = MenuItemRecord {
            uuid: MenuItemUuid::new(),
            name: item.name,
            description: item.description,
            price: item.price,
            category: item.category,
            time_to_cook: item.time_to_cook,
            weight: item.weight,
            image_url: item.image_url,
            created_at: now,
            updated_at: now,
            ingredients: item.ingredients,
        };

        let created = self.store.save(record).await?;

        info!(menu_item_uuid = %created.uuid, "created menu item");

        Ok(created)
    }

    async fn get_menu_item(
        &self,
        item: MenuItemUuid,
    ) -> Result<MenuItemRecord, MenuItemsServiceError> {
        debug!(menu_item_uuid = %item, "fetching menu item");

        Ok(self.store.get(item).await?)
    }

    #[tracing::instrument(name = "menu_items.update", skip(self, update), err)]
    async fn update_menu_item(
        &self,
        item: MenuItemUuid,
        update: MenuItemUpdate,
    ) -> Result<MenuItemRecord, MenuItemsServiceError> {
        validate_update(&update)?;

        let current = self.store.get(item).await?;

        if update.is_empty() {
            debug!(menu_item_uuid = %item, "empty update, touching record");
        }

        let updated = self.store.save(merge(current, update, now())).await?;

        info!(menu_item_uuid = %item, "updated menu item");

        Ok(updated)
    }

    #[tracing::instrument(name = "menu_items.delete", skip(self), err)]
    async fn delete_menu_item(&self, item: MenuItemUuid) -> Result<(), MenuItemsServiceError> {
        self.store.delete(item).await?;

        info!(menu_item_uuid = %item, "deleted menu item");

        Ok(())
    }

    async fn list_menu_items(
        &self,
        category: Category,
        sort: SortKey,
    ) -> Result<Vec<MenuItemRecord>, MenuItemsServiceError> {
        let items = self
            .store
            .list_by_category(category, compose_ordering(sort))
            .await?;

        debug!(%category, %sort, count = items.len(), "listed menu items");

        Ok(items)
    }
}

#[automock]
#[async_trait]
pub trait MenuItemsService: Send + Sync {
    /// Creates a menu item, assigning its UUID and timestamps.
    async fn create_menu_item(
        &self,
        item: NewMenuItem,
    ) -> Result<MenuItemRecord, MenuItemsServiceError>;

    /// Retrieve a single menu item.
    async fn get_menu_item(
        &self,
        item: MenuItemUuid,
    ) -> Result<MenuItemRecord, MenuItemsServiceError>;

    /// Applies a partial update; absent fields are left as stored.
    async fn update_menu_item(
        &self,
        item: MenuItemUuid,
        update: MenuItemUpdate,
    ) -> Result<MenuItemRecord, MenuItemsServiceError>;

    /// Deletes a menu item.
    async fn delete_menu_item(&self, item: MenuItemUuid) -> Result<(), MenuItemsServiceError>;

    /// Lists the menu items of a category in the requested order.
    async fn list_menu_items(
        &self,
        category: Category,
        sort: SortKey,
    ) -> Result<Vec<MenuItemRecord>, MenuItemsServiceError>;
}
