pub mod repository;
pub mod types;

use crate::{
    modules::resource::{repository::Repository, CleanError, Resource},
    types::Context,
};
use async_trait::async_trait;
use repository::{Account, AccountPayload};

pub const USERNAME_TAKEN: &str = "A user with that username already exists.";

#[async_trait]
impl Resource for Account {
    type Body = types::request::Body;
    type Payload = AccountPayload;

    const NAME: &'static str = "Account";
    const PLURAL: &'static str = "accounts";
    const COLLECTION: &'static str = "accounts";

    fn repository(ctx: &Context) -> &dyn Repository<Self> {
        ctx.accounts.as_ref()
    }

    async fn clean(_ctx: &Context, body: Self::Body) -> Result<Self::Payload, CleanError> {
        AccountPayload::try_from(body).map_err(CleanError::Invalid)
    }
}
