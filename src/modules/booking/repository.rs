use crate::{
    modules::resource::repository::{from_sqlx_error, Error, Repository, Result},
    utils::{
        database::DatabaseConnection,
        pagination::{Paginated, Pagination},
    },
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgExecutor;
use std::fmt;
use ulid::Ulid;

#[derive(Serialize, Clone, Debug, PartialEq, sqlx::FromRow)]
pub struct Booking {
    pub id: String,
    #[sqlx(rename = "user_id")]
    pub user: String,
    pub name: String,
    pub no_of_guests: i32,
    pub booking_date: DateTime<Utc>,
}

impl fmt::Display for Booking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name, self.booking_date)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BookingPayload {
    pub user: String,
    pub name: String,
    pub no_of_guests: i32,
    pub booking_date: DateTime<Utc>,
}

fn unknown_user() -> Error {
    Error::Constraint {
        field: "user",
        code: "does_not_exist",
        message: super::USER_DOES_NOT_EXIST,
    }
}

pub async fn create<'e, E: PgExecutor<'e>>(e: E, payload: BookingPayload) -> Result<Booking> {
    sqlx::query_as::<_, Booking>(
        "
        INSERT INTO bookings (id, user_id, name, no_of_guests, booking_date)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, user_id, name, no_of_guests, booking_date
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.user)
    .bind(payload.name)
    .bind(payload.no_of_guests)
    .bind(payload.booking_date)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while creating a booking: {}", err);
        from_sqlx_error(err, None, Some(unknown_user()))
    })
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<Option<Booking>> {
    sqlx::query_as::<_, Booking>(
        "SELECT id, user_id, name, no_of_guests, booking_date FROM bookings WHERE id = $1",
    )
    .bind(&id)
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while fetching booking with id {}: {}", id, err);
        Error::UnexpectedError
    })
}

pub async fn find_many<'e, E: PgExecutor<'e>>(
    e: E,
    pagination: &Pagination,
) -> Result<Vec<Booking>> {
    sqlx::query_as::<_, Booking>(
        "
        SELECT id, user_id, name, no_of_guests, booking_date
        FROM bookings
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
        tracing::error!("Error occurred while trying to fetch many bookings: {}", err);
        Error::UnexpectedError
    })
}

pub async fn count<'e, E: PgExecutor<'e>>(e: E) -> Result<u32> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(id) FROM bookings")
        .fetch_one(e)
        .await
        .map(|total| total as u32)
        .map_err(|err| {
            tracing::error!("Error occurred while counting bookings: {}", err);
            Error::UnexpectedError
        })
}

pub async fn update_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
    payload: BookingPayload,
) -> Result<Option<Booking>> {
    sqlx::query_as::<_, Booking>(
        "
        UPDATE bookings SET
            user_id = $1,
            name = $2,
            no_of_guests = $3,
            booking_date = $4
        WHERE
            id = $5
        RETURNING id, user_id, name, no_of_guests, booking_date
        ",
    )
    .bind(payload.user)
    .bind(payload.name)
    .bind(payload.no_of_guests)
    .bind(payload.booking_date)
    .bind(&id)
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to update a booking by id {}: {}",
            id,
            err
        );
        from_sqlx_error(err, None, Some(unknown_user()))
    })
}

pub async fn delete_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<Option<Booking>> {
    sqlx::query_as::<_, Booking>(
        "
        DELETE FROM bookings
        WHERE id = $1
        RETURNING id, user_id, name, no_of_guests, booking_date
        ",
    )
    .bind(&id)
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to delete a booking by id {}: {}",
            id,
            err
        );
        Error::UnexpectedError
    })
}

#[async_trait]
impl Repository<Booking> for DatabaseConnection {
    async fn find_many(&self, pagination: Pagination) -> Result<Paginated<Booking>> {
        let total = count(&self.pool).await?;
        let bookings = find_many(&self.pool, &pagination).await?;

        Ok(Paginated::new(bookings, total, pagination.page, pagination.per_page))
    }

    async fn find_by_id(&self, id: String) -> Result<Option<Booking>> {
        find_by_id(&self.pool, id).await
    }

    async fn create(&self, payload: BookingPayload) -> Result<Booking> {
        create(&self.pool, payload).await
    }

    async fn update_by_id(&self, id: String, payload: BookingPayload) -> Result<Option<Booking>> {
        update_by_id(&self.pool, id, payload).await
    }

    async fn delete_by_id(&self, id: String) -> Result<Option<Booking>> {
        delete_by_id(&self.pool, id).await
    }
}
