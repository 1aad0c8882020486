//! Menu Items

pub mod data;
pub mod errors;
pub mod memory;
pub mod merge;
pub mod ordering;
pub mod records;
mod repository;
pub mod service;
pub mod store;
pub mod validation;

pub use errors::MenuItemsServiceError;
pub use repository::PgMenuItemStore;
pub use service::*;
