pub mod repository;
pub mod types;

use crate::{
    modules::resource::{repository::Repository, CleanError, Resource},
    types::Context,
};
use async_trait::async_trait;
use repository::{MenuItem, MenuItemPayload};

#[async_trait]
impl Resource for MenuItem {
    type Body = types::request::Body;
    type Payload = MenuItemPayload;

    const NAME: &'static str = "Menu item";
    const PLURAL: &'static str = "menu items";
    const COLLECTION: &'static str = "menu";

    fn repository(ctx: &Context) -> &dyn Repository<Self> {
        ctx.menu.as_ref()
    }

    async fn clean(_ctx: &Context, body: Self::Body) -> Result<Self::Payload, CleanError> {
        MenuItemPayload::try_from(body).map_err(CleanError::Invalid)
    }
}
