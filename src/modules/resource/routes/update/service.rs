use super::types::{request, response};
use crate::{
    modules::resource::Resource,
    types::Context,
    utils::validation::{field_error, NON_FIELD_ERRORS},
};
use serde_json::{Map, Value};
use std::sync::Arc;

async fn find<R: Resource>(ctx: &Context, id: String) -> Result<R, response::Error> {
    R::repository(ctx)
        .find_by_id(id)
        .await
        .map_err(|_| response::Error::FailedToFetch(R::PLURAL))?
        .ok_or(response::Error::NotFound(R::NAME))
}

/// Overlays `changes` on the stored record's wire object and reads the result
/// back as a full body.
fn merge<R: Resource>(record: &R, changes: Map<String, Value>) -> Result<R::Body, response::Error> {
    let mut merged = match serde_json::to_value(record) {
        Ok(Value::Object(fields)) => fields,
        _ => {
            tracing::error!("{} did not serialize to an object: {}", R::NAME, record);
            return Err(response::Error::FailedToUpdate(R::NAME));
        }
    };
    merged.extend(changes);

    serde_json::from_value::<R::Body>(Value::Object(merged)).map_err(|err| {
        tracing::warn!("Failed to parse partial update: {}", err);
        response::Error::FailedToValidate(field_error(NON_FIELD_ERRORS, "parse_error", err.to_string()))
    })
}

async fn apply<R: Resource>(ctx: &Context, id: String, body: R::Body) -> response::Response<R> {
    let cleaned = R::clean(ctx, body)
        .await
        .map_err(|err| response::Error::from_clean_error(err, R::NAME))?;

    let record = R::repository(ctx)
        .update_by_id(id, cleaned)
        .await
        .map_err(|err| match err.into_validation_errors() {
            Some(errors) => response::Error::FailedToValidate(errors),
            None => response::Error::FailedToUpdate(R::NAME),
        })?
        .ok_or(response::Error::NotFound(R::NAME))?;

    tracing::info!("{} updated: {}", R::NAME, record);

    Ok(response::Success::Updated(record))
}

pub async fn service<R: Resource>(
    ctx: Arc<Context>,
    payload: request::Payload<R>,
) -> response::Response<R> {
    find::<R>(&ctx, payload.id.clone()).await?;

    apply::<R>(&ctx, payload.id, payload.body).await
}

pub async fn partial_service<R: Resource>(
    ctx: Arc<Context>,
    payload: request::PartialPayload,
) -> response::Response<R> {
    let record = find::<R>(&ctx, payload.id.clone()).await?;
    let body = merge(&record, payload.changes)?;

    apply::<R>(&ctx, payload.id, body).await
}
