//! App Context

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::{
    database,
    domain::menu_items::{
        MemoryCatalog, MenuItemsService, PgCatalog, PgMenuItemStore, memory::MemoryMenuItemStore,
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply database migrations")]
    Migration(#[source] sqlx::migrate::MigrateError),
}

#[derive(Clone)]
pub struct AppContext {
    pub menu_items: Arc<dyn MenuItemsService>,
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext").finish_non_exhaustive()
    }
}

impl AppContext {
    /// Build application context from a database URL, applying pending
    /// migrations first.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection or migrating
    /// the schema fails.
    pub async fn from_database_url(url: &str) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        database::migrate(&pool)
            .await
            .map_err(AppInitError::Migration)?;

        info!("menu items backed by postgres");

        Ok(Self {
            menu_items: Arc::new(PgCatalog::new(PgMenuItemStore::new(pool))),
        })
    }

    /// Build application context over a process-local store. Nothing persists
    /// across restarts.
    #[must_use]
    pub fn in_memory() -> Self {
        info!("menu items backed by process memory");

        Self {
            menu_items: Arc::new(MemoryCatalog::new(MemoryMenuItemStore::new())),
        }
    }
}
