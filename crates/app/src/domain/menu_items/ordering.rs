//! Catalog ordering.
//!
//! A [`SortKey`] resolves to exactly one [`OrderingSpec`]: a single field and
//! direction. Ties inside that field are left to the store's own stable order.

use std::{
    cmp::Ordering,
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use thiserror::Error;

use crate::domain::menu_items::records::MenuItemRecord;

/// Requested listing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Name, A to Z.
    Az,
    /// Name, Z to A.
    Za,
    PriceAsc,
    PriceDesc,
    /// Oldest first.
    DateAsc,
    /// Newest first.
    DateDesc,
}

impl SortKey {
    pub const ALL: [Self; 6] = [
        Self::Az,
        Self::Za,
        Self::PriceAsc,
        Self::PriceDesc,
        Self::DateAsc,
        Self::DateDesc,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Az => "AZ",
            Self::Za => "ZA",
            Self::PriceAsc => "PRICE_ASC",
            Self::PriceDesc => "PRICE_DESC",
            Self::DateAsc => "DATE_ASC",
            Self::DateDesc => "DATE_DESC",
        }
    }
}

impl Display for SortKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// The sort key is not one of the six supported orderings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized sort key {0:?}")]
pub struct InvalidSort(pub String);

impl FromStr for SortKey {
    type Err = InvalidSort;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == value)
            .ok_or_else(|| InvalidSort(value.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    Name,
    Price,
    CreatedAt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// The ordering a store must apply when listing a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OrderingSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl OrderingSpec {
    /// Compare two records on this ordering's field alone.
    ///
    /// Records equal on the field compare [`Ordering::Equal`], so a stable sort
    /// keeps them in the order the store supplied them.
    #[must_use]
    pub fn compare(&self, a: &MenuItemRecord, b: &MenuItemRecord) -> Ordering {
        let ordering = match self.field {
            SortField::Name => a.name.cmp(&b.name),
            SortField::Price => a.price.cmp(&b.price),
            SortField::CreatedAt => a.created_at.cmp(&b.created_at),
        };

        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Resolve a sort key into the ordering contract handed to the store.
#[must_use]
pub const fn compose_ordering(sort: SortKey) -> OrderingSpec {
    let (field, direction) = match sort {
        SortKey::Az => (SortField::Name, SortDirection::Ascending),
        SortKey::Za => (SortField::Name, SortDirection::Descending),
        SortKey::PriceAsc => (SortField::Price, SortDirection::Ascending),
        SortKey::PriceDesc => (SortField::Price, SortDirection::Descending),
        SortKey::DateAsc => (SortField::CreatedAt, SortDirection::Ascending),
        SortKey::DateDesc => (SortField::CreatedAt, SortDirection::Descending),
    };

    OrderingSpec { field, direction }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::{domain::menu_items::records::Category, test::record};

    use super::*;

    fn sorted<'a>(sort: SortKey, records: &'a [MenuItemRecord]) -> Vec<&'a str> {
        let ordering = compose_ordering(sort);
        let mut records: Vec<&MenuItemRecord> = records.iter().collect();

        records.sort_by(|a, b| ordering.compare(a, b));

        records.into_iter().map(|r| r.name.as_str()).collect()
    }

    fn drinks() -> TestResult<Vec<MenuItemRecord>> {
        Ok(vec![
            record(
                "Cappuccino",
                Decimal::from(100),
                Category::Drinks,
                Timestamp::from_second(1)?,
            ),
            record(
                "Tea",
                Decimal::from(50),
                Category::Drinks,
                Timestamp::from_second(3)?,
            ),
            record(
                "Wine",
                Decimal::from(75),
                Category::Drinks,
                Timestamp::from_second(2)?,
            ),
        ])
    }

    #[test]
    fn every_key_maps_to_its_field_and_direction() {
        use SortDirection::{Ascending, Descending};
        use SortField::{CreatedAt, Name, Price};

        let expected = [
            (SortKey::Az, Name, Ascending),
            (SortKey::Za, Name, Descending),
            (SortKey::PriceAsc, Price, Ascending),
            (SortKey::PriceDesc, Price, Descending),
            (SortKey::DateAsc, CreatedAt, Ascending),
            (SortKey::DateDesc, CreatedAt, Descending),
        ];

        for (key, field, direction) in expected {
            assert_eq!(
                compose_ordering(key),
                OrderingSpec { field, direction },
                "wrong ordering for {key}"
            );
        }
    }

    #[test]
    fn sort_keys_parse_from_wire_names() -> TestResult {
        for key in SortKey::ALL {
            assert_eq!(key.as_str().parse::<SortKey>()?, key);
        }

        Ok(())
    }

    #[test]
    fn unknown_sort_key_is_rejected() {
        assert_eq!(
            "POPULARITY".parse::<SortKey>(),
            Err(InvalidSort("POPULARITY".to_string()))
        );
        assert!("az".parse::<SortKey>().is_err());
        assert!("".parse::<SortKey>().is_err());
    }

    #[test]
    fn drinks_sorted_by_name() -> TestResult {
        let drinks = drinks()?;

        assert_eq!(sorted(SortKey::Az, &drinks), ["Cappuccino", "Tea", "Wine"]);
        assert_eq!(sorted(SortKey::Za, &drinks), ["Wine", "Tea", "Cappuccino"]);

        Ok(())
    }

    #[test]
    fn drinks_sorted_by_price() -> TestResult {
        let drinks = drinks()?;

        assert_eq!(
            sorted(SortKey::PriceAsc, &drinks),
            ["Tea", "Wine", "Cappuccino"]
        );
        assert_eq!(
            sorted(SortKey::PriceDesc, &drinks),
            ["Cappuccino", "Wine", "Tea"]
        );

        Ok(())
    }

    #[test]
    fn drinks_sorted_by_creation_time() -> TestResult {
        let drinks = drinks()?;

        assert_eq!(
            sorted(SortKey::DateAsc, &drinks),
            ["Cappuccino", "Wine", "Tea"]
        );
        assert_eq!(
            sorted(SortKey::DateDesc, &drinks),
            ["Tea", "Wine", "Cappuccino"]
        );

        Ok(())
    }

    #[test]
    fn equal_prices_keep_supplied_order_in_both_directions() -> TestResult {
        let created = Timestamp::from_second(1)?;
        let items = vec![
            record("Ten", Decimal::from(10), Category::Lunch, created),
            record("Five A", Decimal::from(5), Category::Lunch, created),
            record("Five B", Decimal::from(5), Category::Lunch, created),
            record("Twenty", Decimal::from(20), Category::Lunch, created),
        ];

        assert_eq!(
            sorted(SortKey::PriceAsc, &items),
            ["Five A", "Five B", "Ten", "Twenty"]
        );
        assert_eq!(
            sorted(SortKey::PriceDesc, &items),
            ["Twenty", "Ten", "Five A", "Five B"]
        );

        Ok(())
    }

    #[test]
    fn names_sort_by_code_point() -> TestResult {
        let created = Timestamp::from_second(1)?;
        let items = vec![
            record("apple", Decimal::ONE, Category::Snacks, created),
            record("Banana", Decimal::ONE, Category::Snacks, created),
        ];

        assert_eq!(sorted(SortKey::Az, &items), ["Banana", "apple"]);

        Ok(())
    }
}
