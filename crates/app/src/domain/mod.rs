//! Menu Domain Concerns

pub mod menu_items;
