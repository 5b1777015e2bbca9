use super::types::{request, response};
use crate::{modules::resource::Resource, types::Context};
use std::sync::Arc;

pub async fn service<R: Resource>(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let record = R::repository(&ctx)
        .delete_by_id(payload.id)
        .await
        .map_err(|_| response::Error::FailedToDelete(R::NAME))?
        .ok_or(response::Error::NotFound(R::NAME))?;

    tracing::info!("{} deleted: {}", R::NAME, record);

    Ok(response::Success::Deleted)
}
