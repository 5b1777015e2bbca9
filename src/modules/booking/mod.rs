pub mod repository;
pub mod types;

use crate::{
    modules::resource::{repository::Repository, CleanError, Resource},
    types::Context,
    utils::validation::field_error,
};
use async_trait::async_trait;
use repository::{Booking, BookingPayload};

pub const USER_DOES_NOT_EXIST: &str = "Account does not exist.";

#[async_trait]
impl Resource for Booking {
    type Body = types::request::Body;
    type Payload = BookingPayload;

    const NAME: &'static str = "Booking";
    const PLURAL: &'static str = "bookings";
    const COLLECTION: &'static str = "bookings";

    fn repository(ctx: &Context) -> &dyn Repository<Self> {
        ctx.bookings.as_ref()
    }

    async fn clean(ctx: &Context, body: Self::Body) -> Result<Self::Payload, CleanError> {
        let payload = BookingPayload::try_from(body).map_err(CleanError::Invalid)?;

        match ctx.accounts.exists(payload.user.clone()).await {
            Ok(true) => Ok(payload),
            Ok(false) => {
                tracing::warn!("Booking references unknown account {}", payload.user);
                Err(CleanError::Invalid(field_error(
                    "user",
                    "does_not_exist",
                    USER_DOES_NOT_EXIST,
                )))
            }
            Err(_) => Err(CleanError::UnexpectedError),
        }
    }
}
