//! Semantic checks on incoming menu item data.
//!
//! Runs before merging or creating; [`merge`](super::merge::merge) itself
//! accepts any well-typed value.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::domain::menu_items::data::{MenuItemUpdate, NewMenuItem};

pub const MAX_NAME_LENGTH: usize = 255;

/// Largest preparation time, in milliseconds, that fits a `BIGINT` column.
pub const MAX_TIME_TO_COOK: u64 = i64::MAX.unsigned_abs();

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid argument: {0}")]
pub struct InvalidArgument(pub &'static str);

/// # Errors
///
/// Returns [`InvalidArgument`] naming the first offending field.
pub fn validate_new_item(item: &NewMenuItem) -> Result<(), InvalidArgument> {
    validate_name(&item.name)?;
    validate_description(&item.description)?;
    validate_price(item.price)?;
    validate_time_to_cook(item.time_to_cook)?;
    validate_image_url(&item.image_url)?;

    if !item.weight.is_finite() || item.weight < 0.0 {
        return Err(InvalidArgument("weight must be a non-negative number"));
    }

    Ok(())
}

/// Only fields present in the change-set are checked.
///
/// # Errors
///
/// Returns [`InvalidArgument`] naming the first offending field.
pub fn validate_update(update: &MenuItemUpdate) -> Result<(), InvalidArgument> {
    if let Some(name) = &update.name {
        validate_name(name)?;
    }

    if let Some(description) = &update.description {
        validate_description(description)?;
    }

    if let Some(price) = update.price {
        validate_price(price)?;
    }

    if let Some(time_to_cook) = update.time_to_cook {
        validate_time_to_cook(time_to_cook)?;
    }

    if let Some(image_url) = &update.image_url {
        validate_image_url(image_url)?;
    }

    Ok(())
}

fn validate_name(name: &str) -> Result<(), InvalidArgument> {
    if name.trim().is_empty() {
        return Err(InvalidArgument("name must not be blank"));
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(InvalidArgument("name must be at most 255 characters"));
    }

    Ok(())
}

fn validate_description(description: &str) -> Result<(), InvalidArgument> {
    if description.trim().is_empty() {
        return Err(InvalidArgument("description must not be blank"));
    }

    Ok(())
}

fn validate_price(price: Decimal) -> Result<(), InvalidArgument> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err(InvalidArgument("price must not be negative"));
    }

    Ok(())
}

fn validate_time_to_cook(time_to_cook: u64) -> Result<(), InvalidArgument> {
    if time_to_cook > MAX_TIME_TO_COOK {
        return Err(InvalidArgument("time_to_cook is out of range"));
    }

    Ok(())
}

fn validate_image_url(image_url: &str) -> Result<(), InvalidArgument> {
    if image_url.trim().is_empty() {
        return Err(InvalidArgument("image_url must not be blank"));
    }

    Ok(())
}
