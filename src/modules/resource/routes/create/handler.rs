use super::service::service;
use super::types::request;
use crate::{modules::resource::Resource, types::Context, utils::validation::JsonBody};
use axum::{extract::State, response::IntoResponse};
use std::sync::Arc;

pub async fn handler<R: Resource>(
    State(ctx): State<Arc<Context>>,
    JsonBody(body): JsonBody<R::Body>,
) -> impl IntoResponse {
    service::<R>(ctx, request::Payload { body }).await
}
