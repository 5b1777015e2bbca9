use super::types::{request, response};
use crate::{modules::resource::Resource, types::Context};
use std::sync::Arc;

pub async fn service<R: Resource>(
    ctx: Arc<Context>,
    payload: request::Payload<R>,
) -> response::Response<R> {
    let cleaned = R::clean(&ctx, payload.body)
        .await
        .map_err(|err| response::Error::from_clean_error(err, R::NAME))?;

    let record = R::repository(&ctx).create(cleaned).await.map_err(|err| {
        match err.into_validation_errors() {
            Some(errors) => response::Error::FailedToValidate(errors),
            None => response::Error::FailedToCreate(R::NAME),
        }
    })?;

    tracing::info!("{} created: {}", R::NAME, record);

    Ok(response::Success::Created(record))
}
