//! In-memory menu item store.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::menu_items::{
    merge::ensure_unique_name,
    ordering::OrderingSpec,
    records::{Category, MenuItemRecord, MenuItemUuid},
    store::{MenuItemStore, StoreError},
};

/// Keeps records in insertion order, which is also the tie-break order for
/// listings.
#[derive(Debug, Default)]
pub struct MemoryMenuItemStore {
    items: RwLock<Vec<MenuItemRecord>>,
}

impl MemoryMenuItemStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MenuItemStore for MemoryMenuItemStore {
    async fn get(&self, item: MenuItemUuid) -> Result<MenuItemRecord, StoreError> {
        self.items
            .read()
            .await
            .iter()
            .find(|record| record.uuid == item)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn save(&self, mut record: MenuItemRecord) -> Result<MenuItemRecord, StoreError> {
        // Held across the uniqueness check and the write.
        let mut items = self.items.write().await;

        let position = items.iter().position(|stored| stored.uuid == record.uuid);
        let stored = position.and_then(|index| items.get(index));

        ensure_unique_name(&record, stored.map(|s| s.name.as_str()), items.iter())?;

        if let Some(stored) = stored {
            record.category = stored.category;
            record.created_at = stored.created_at;
            record.ingredients = stored.ingredients.clone();
            record.updated_at = record.updated_at.max(stored.updated_at);
        }

        match position.and_then(|index| items.get_mut(index)) {
            Some(slot) => *slot = record.clone(),
            None => items.push(record.clone()),
        }

        Ok(record)
    }

    async fn delete(&self, item: MenuItemUuid) -> Result<(), StoreError> {
        let mut items = self.items.write().await;

        let index = items
            .iter()
            .position(|record| record.uuid == item)
            .ok_or(StoreError::NotFound)?;

        items.remove(index);

        Ok(())
    }

    async fn list_by_category(
        &self,
        category: Category,
        ordering: OrderingSpec,
    ) -> Result<Vec<MenuItemRecord>, StoreError> {
        let mut matching: Vec<MenuItemRecord> = self
            .items
            .read()
            .await
            .iter()
            .filter(|record| record.category == category)
            .cloned()
            .collect();

        matching.sort_by(|a, b| ordering.compare(a, b));

        Ok(matching)
    }
}
