pub mod repository;
pub mod routes;

use crate::types::Context;
use async_trait::async_trait;
use repository::Repository;
use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Display;
use validator::ValidationErrors;

pub enum CleanError {
    Invalid(ValidationErrors),
    UnexpectedError,
}

/// An entity served through the generic list/retrieve/create/update/delete
/// endpoints at `/api/<COLLECTION>/`.
///
/// A record's `Serialize` output is its wire object. `Body` is the wire object
/// as received, with every field still raw; `clean` checks it field by field
/// and turns it into the `Payload` handed to the repository, applying any
/// check that needs the store (foreign keys).
#[async_trait]
pub trait Resource: Serialize + Display + Send + Sync + Sized + 'static {
    type Body: DeserializeOwned + Send;
    type Payload: Send;

    /// Singular display name, e.g. `Menu item`.
    const NAME: &'static str;
    /// Plural used in server error messages, e.g. `menu items`.
    const PLURAL: &'static str;
    /// Path segment under `/api/`.
    const COLLECTION: &'static str;

    fn repository(ctx: &Context) -> &dyn Repository<Self>;

    async fn clean(ctx: &Context, body: Self::Body) -> Result<Self::Payload, CleanError>;
}
