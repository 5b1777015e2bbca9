use crate::{
    modules::resource::repository::{Error, Repository, Result},
    utils::{
        database::DatabaseConnection,
        pagination::{Paginated, Pagination},
    },
};
use async_trait::async_trait;
use serde::Serialize;
use sqlx::{types::BigDecimal, PgExecutor};
use std::fmt;
use ulid::Ulid;

pub const DEFAULT_INVENTORY: i32 = 0;

#[derive(Serialize, Clone, Debug, PartialEq, sqlx::FromRow)]
pub struct MenuItem {
    pub id: String,
    pub title: String,
    #[serde(serialize_with = "super::types::serialize_price")]
    pub price: BigDecimal,
    pub inventory: i32,
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// Validated fields for a create or full update. An absent `inventory` means
/// the default on create and "unchanged" on update.
#[derive(Clone, Debug, PartialEq)]
pub struct MenuItemPayload {
    pub title: String,
    pub price: BigDecimal,
    pub inventory: Option<i32>,
}

pub async fn create<'e, E: PgExecutor<'e>>(e: E, payload: MenuItemPayload) -> Result<MenuItem> {
    sqlx::query_as::<_, MenuItem>(
        "
        INSERT INTO menu_items (id, title, price, inventory)
        VALUES ($1, $2, $3, $4)
        RETURNING id, title, price, inventory
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.title)
    .bind(payload.price)
    .bind(payload.inventory.unwrap_or(DEFAULT_INVENTORY))
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while creating a menu item: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<Option<MenuItem>> {
    sqlx::query_as::<_, MenuItem>(
        "SELECT id, title, price, inventory FROM menu_items WHERE id = $1",
    )
    .bind(&id)
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while fetching menu item with id {}: {}", id, err);
        Error::UnexpectedError
    })
}

pub async fn find_many<'e, E: PgExecutor<'e>>(
    e: E,
    pagination: &Pagination,
) -> Result<Vec<MenuItem>> {
    sqlx::query_as::<_, MenuItem>(
        "
        SELECT id, title, price, inventory
        FROM menu_items
        ORDER BY id
        LIMIT $1
        OFFSET $2
        ",
    )
    .bind(pagination.per_page as i64)
    .bind(pagination.offset() as i64)
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to fetch many menu items: {}", err);
        Error::UnexpectedError
    })
}

pub async fn count<'e, E: PgExecutor<'e>>(e: E) -> Result<u32> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(id) FROM menu_items")
        .fetch_one(e)
        .await
        .map(|total| total as u32)
        .map_err(|err| {
            tracing::error!("Error occurred while counting menu items: {}", err);
            Error::UnexpectedError
        })
}

pub async fn update_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
    payload: MenuItemPayload,
) -> Result<Option<MenuItem>> {
    sqlx::query_as::<_, MenuItem>(
        "
        UPDATE menu_items SET
            title = $1,
            price = $2,
            inventory = COALESCE($3, inventory)
        WHERE
            id = $4
        RETURNING id, title, price, inventory
        ",
    )
    .bind(payload.title)
    .bind(payload.price)
    .bind(payload.inventory)
    .bind(&id)
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to update a menu item by id {}: {}",
            id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn delete_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<Option<MenuItem>> {
    sqlx::query_as::<_, MenuItem>(
        "DELETE FROM menu_items WHERE id = $1 RETURNING id, title, price, inventory",
    )
    .bind(&id)
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to delete a menu item by id {}: {}",
            id,
            err
        );
        Error::UnexpectedError
    })
}

#[async_trait]
impl Repository<MenuItem> for DatabaseConnection {
    async fn find_many(&self, pagination: Pagination) -> Result<Paginated<MenuItem>> {
        let total = count(&self.pool).await?;
        let items = find_many(&self.pool, &pagination).await?;

        Ok(Paginated::new(items, total, pagination.page, pagination.per_page))
    }

    async fn find_by_id(&self, id: String) -> Result<Option<MenuItem>> {
        find_by_id(&self.pool, id).await
    }

    async fn create(&self, payload: MenuItemPayload) -> Result<MenuItem> {
        create(&self.pool, payload).await
    }

    async fn update_by_id(&self, id: String, payload: MenuItemPayload) -> Result<Option<MenuItem>> {
        update_by_id(&self.pool, id, payload).await
    }

    async fn delete_by_id(&self, id: String) -> Result<Option<MenuItem>> {
        delete_by_id(&self.pool, id).await
    }
}
