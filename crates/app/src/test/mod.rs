//! Shared test fixtures

mod helpers;

pub(crate) use db::TestDb;
pub(crate) use helpers::{new_item, record};
