use super::types::{request, response};
use crate::{modules::resource::Resource, types::Context};
use std::sync::Arc;

pub async fn service<R: Resource>(ctx: Arc<Context>, payload: request::Payload) -> response::Response<R> {
    R::repository(&ctx)
        .find_by_id(payload.id)
        .await
        .map_err(|_| response::Error::FailedToFetch(R::PLURAL))?
        .ok_or(response::Error::NotFound(R::NAME))
        .map(response::Success::Record)
}
