//! Partial update merging.
//!
//! [`merge`] folds a sparse [`MenuItemUpdate`] onto a loaded record. It never
//! touches storage: name uniqueness is checked by [`ensure_unique_name`]
//! against whatever set of records the caller holds, or enforced by the
//! store's own constraint.

use jiff::{SignedDuration, Timestamp};
use thiserror::Error;

use crate::domain::menu_items::{data::MenuItemUpdate, records::MenuItemRecord};

/// Another menu item already holds the requested name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("menu item name {name:?} is already taken")]
pub struct NameConflict {
    pub name: String,
}

/// Apply `changes` to `current`, stamping the result as updated at `now`.
///
/// Every present field overwrites the stored one; absent fields are kept.
/// `updated_at` is refreshed even when `changes` is empty. If `now` does not
/// come after the stored `updated_at`, the stamp advances by one microsecond
/// instead, so it never moves backwards and always ends up past `created_at`.
#[must_use]
pub fn merge(
    mut current: MenuItemRecord,
    changes: MenuItemUpdate,
    now: Timestamp,
) -> MenuItemRecord {
    let MenuItemUpdate {
        name,
        description,
        price,
        time_to_cook,
        image_url,
    } = changes;

    if let Some(name) = name {
        current.name = name;
    }

    if let Some(description) = description {
        current.description = description;
    }

    if let Some(price) = price {
        current.price = price;
    }

    if let Some(time_to_cook) = time_to_cook {
        current.time_to_cook = time_to_cook;
    }

    if let Some(image_url) = image_url {
        current.image_url = image_url;
    }

    current.updated_at = touch(current.updated_at, now);

    current
}

fn touch(previous: Timestamp, now: Timestamp) -> Timestamp {
    if now > previous {
        return now;
    }

    previous
        .checked_add(SignedDuration::from_micros(1))
        .unwrap_or(previous)
}

/// Reject `candidate` if its name moved to one held by a different record.
///
/// `original_name` is the name the record had before the change (`None` on
/// creation). An unchanged name passes without scanning `existing`.
///
/// # Errors
///
/// Returns [`NameConflict`] when another record in `existing` has the name.
pub fn ensure_unique_name<'a, I>(
    candidate: &MenuItemRecord,
    original_name: Option<&str>,
    existing: I,
) -> Result<(), NameConflict>
where
    I: IntoIterator<Item = &'a MenuItemRecord>,
{
    if original_name == Some(candidate.name.as_str()) {
        return Ok(());
    }

    let taken = existing
        .into_iter()
        .any(|other| other.uuid != candidate.uuid && other.name == candidate.name);

    if taken {
        return Err(NameConflict {
            name: candidate.name.clone(),
        });
    }

    Ok(())
}
