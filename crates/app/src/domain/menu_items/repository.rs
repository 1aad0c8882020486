//! Menu Items Repository

use async_trait::async_trait;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query, query_as, types::Json};

use crate::domain::menu_items::{
    ordering::{OrderingSpec, SortDirection, SortField},
    records::{Category, IngredientCollection, MenuItemRecord, MenuItemUuid},
    store::{MenuItemStore, StoreError},
};

const GET_MENU_ITEM_SQL: &str = include_str!("sql/get_menu_item.sql");
const SAVE_MENU_ITEM_SQL: &str = include_str!("sql/save_menu_item.sql");
const DELETE_MENU_ITEM_SQL: &str = include_str!("sql/delete_menu_item.sql");

// `uuid` is v7, so it breaks ties in creation order.
const LIST_BY_NAME_ASC_SQL: &str = concat!(
    include_str!("sql/list_menu_items.sql"),
    "ORDER BY name COLLATE \"C\" ASC, uuid ASC"
);
const LIST_BY_NAME_DESC_SQL: &str = concat!(
    include_str!("sql/list_menu_items.sql"),
    "ORDER BY name COLLATE \"C\" DESC, uuid ASC"
);
const LIST_BY_PRICE_ASC_SQL: &str = concat!(
    include_str!("sql/list_menu_items.sql"),
    "ORDER BY price ASC, uuid ASC"
);
const LIST_BY_PRICE_DESC_SQL: &str = concat!(
    include_str!("sql/list_menu_items.sql"),
    "ORDER BY price DESC, uuid ASC"
);
const LIST_BY_CREATED_ASC_SQL: &str = concat!(
    include_str!("sql/list_menu_items.sql"),
    "ORDER BY created_at ASC, uuid ASC"
);
const LIST_BY_CREATED_DESC_SQL: &str = concat!(
    include_str!("sql/list_menu_items.sql"),
    "ORDER BY created_at DESC, uuid ASC"
);

const fn list_sql(ordering: OrderingSpec) -> &'static str {
    match (ordering.field, ordering.direction) {
        (SortField::Name, SortDirection::Ascending) => LIST_BY_NAME_ASC_SQL,
        (SortField::Name, SortDirection::Descending) => LIST_BY_NAME_DESC_SQL,
        (SortField::Price, SortDirection::Ascending) => LIST_BY_PRICE_ASC_SQL,
        (SortField::Price, SortDirection::Descending) => LIST_BY_PRICE_DESC_SQL,
        (SortField::CreatedAt, SortDirection::Ascending) => LIST_BY_CREATED_ASC_SQL,
        (SortField::CreatedAt, SortDirection::Descending) => LIST_BY_CREATED_DESC_SQL,
    }
}

/// `PostgreSQL` store. Name uniqueness rests on the `menu_items_name_key`
/// constraint.
#[derive(Debug, Clone)]
pub struct PgMenuItemStore {
    pool: PgPool,
}

impl PgMenuItemStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MenuItemStore for PgMenuItemStore {
    async fn get(&self, item: MenuItemUuid) -> Result<MenuItemRecord, StoreError> {
        let record = query_as::<Postgres, MenuItemRecord>(GET_MENU_ITEM_SQL)
            .bind(item.into_uuid())
            .fetch_one(&self.pool)
            .await?;

        Ok(record)
    }

    async fn save(&self, record: MenuItemRecord) -> Result<MenuItemRecord, StoreError> {
        let time_to_cook = i64::try_from(record.time_to_cook)
            .map_err(|error| StoreError::Sql(sqlx::Error::Encode(Box::new(error))))?;

        let saved = query_as::<Postgres, MenuItemRecord>(SAVE_MENU_ITEM_SQL)
            .bind(record.uuid.into_uuid())
            .bind(record.name)
            .bind(record.description)
            .bind(record.price)
            .bind(record.category.as_str())
            .bind(time_to_cook)
            .bind(record.weight)
            .bind(record.image_url)
            .bind(SqlxTimestamp::from(record.created_at))
            .bind(SqlxTimestamp::from(record.updated_at))
            .bind(Json(record.ingredients))
            .fetch_one(&self.pool)
            .await?;

        Ok(saved)
    }

    async fn delete(&self, item: MenuItemUuid) -> Result<(), StoreError> {
        let rows_affected = query(DELETE_MENU_ITEM_SQL)
            .bind(item.into_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        if rows_affected == 0 {
            return Err(StoreError::NotFound);
        }

        Ok(())
    }

    async fn list_by_category(
        &self,
        category: Category,
        ordering: OrderingSpec,
    ) -> Result<Vec<MenuItemRecord>, StoreError> {
        let records = query_as::<Postgres, MenuItemRecord>(list_sql(ordering))
            .bind(category.as_str())
            .fetch_all(&self.pool)
            .await?;

        Ok(records)
    }
}

impl<'r> FromRow<'r, PgRow> for MenuItemRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let time_to_cook: i64 = row.try_get("time_to_cook")?;

        let time_to_cook = u64::try_from(time_to_cook).map_err(|e| sqlx::Error::ColumnDecode {
            index: "time_to_cook".to_string(),
            source: Box::new(e),
        })?;

        let category = row
            .try_get::<String, _>("category")?
            .parse::<Category>()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "category".to_string(),
                source: Box::new(e),
            })?;

        let Json(ingredients) = row.try_get::<Json<IngredientCollection>, _>("ingredients")?;

        Ok(Self {
            uuid: MenuItemUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            price: row.try_get("price")?,
            category,
            time_to_cook,
            weight: row.try_get("weight")?,
            image_url: row.try_get("image_url")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
            ingredients,
        })
    }
}
