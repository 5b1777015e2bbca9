use crate::{
    modules::resource::repository::{from_sqlx_error, Error, Repository, Result},
    utils::{
        database::DatabaseConnection,
        pagination::{Paginated, Pagination},
    },
};
use async_trait::async_trait;
use serde::Serialize;
use sqlx::PgExecutor;
use std::fmt;
use ulid::Ulid;

/// Identity that owns bookings. Deleting it deletes every booking it owns.
#[derive(Serialize, Clone, Debug, PartialEq, sqlx::FromRow)]
pub struct Account {
    pub id: String,
    pub username: String,
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.username)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AccountPayload {
    pub username: String,
}

fn username_taken() -> Error {
    Error::Constraint {
        field: "username",
        code: "unique",
        message: super::USERNAME_TAKEN,
    }
}

pub async fn create<'e, E: PgExecutor<'e>>(e: E, payload: AccountPayload) -> Result<Account> {
    sqlx::query_as::<_, Account>(
        "
        INSERT INTO accounts (id, username)
        VALUES ($1, $2)
        RETURNING id, username
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.username)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while creating an account: {}", err);
        from_sqlx_error(err, Some(username_taken()), None)
    })
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<Option<Account>> {
    sqlx::query_as::<_, Account>("SELECT id, username FROM accounts WHERE id = $1")
        .bind(&id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching account with id {}: {}", id, err);
            Error::UnexpectedError
        })
}

pub async fn find_many<'e, E: PgExecutor<'e>>(
    e: E,
    pagination: &Pagination,
) -> Result<Vec<Account>> {
    sqlx::query_as::<_, Account>(
        "
        SELECT id, username
        FROM accounts
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
        tracing::error!("Error occurred while trying to fetch many accounts: {}", err);
        Error::UnexpectedError
    })
}

pub async fn count<'e, E: PgExecutor<'e>>(e: E) -> Result<u32> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(id) FROM accounts")
        .fetch_one(e)
        .await
        .map(|total| total as u32)
        .map_err(|err| {
            tracing::error!("Error occurred while counting accounts: {}", err);
            Error::UnexpectedError
        })
}

pub async fn update_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
    payload: AccountPayload,
) -> Result<Option<Account>> {
    sqlx::query_as::<_, Account>(
        "UPDATE accounts SET username = $1 WHERE id = $2 RETURNING id, username",
    )
    .bind(payload.username)
    .bind(&id)
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to update an account by id {}: {}",
            id,
            err
        );
        from_sqlx_error(err, Some(username_taken()), None)
    })
}

/// The `ON DELETE CASCADE` on `bookings.user_id` removes the account's
/// bookings in the same statement.
pub async fn delete_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<Option<Account>> {
    sqlx::query_as::<_, Account>("DELETE FROM accounts WHERE id = $1 RETURNING id, username")
        .bind(&id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to delete an account by id {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        })
}

#[async_trait]
impl Repository<Account> for DatabaseConnection {
    async fn find_many(&self, pagination: Pagination) -> Result<Paginated<Account>> {
        let total = count(&self.pool).await?;
        let accounts = find_many(&self.pool, &pagination).await?;

        Ok(Paginated::new(accounts, total, pagination.page, pagination.per_page))
    }

    async fn find_by_id(&self, id: String) -> Result<Option<Account>> {
        find_by_id(&self.pool, id).await
    }

    async fn create(&self, payload: AccountPayload) -> Result<Account> {
        create(&self.pool, payload).await
    }

    async fn update_by_id(&self, id: String, payload: AccountPayload) -> Result<Option<Account>> {
        update_by_id(&self.pool, id, payload).await
    }

    async fn delete_by_id(&self, id: String) -> Result<Option<Account>> {
        delete_by_id(&self.pool, id).await
    }
}
