use super::service::{partial_service, service};
use super::types::request;
use crate::{modules::resource::Resource, types::Context, utils::validation::JsonBody};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use serde_json::{Map, Value};
use std::sync::Arc;

pub async fn handler<R: Resource>(
    State(ctx): State<Arc<Context>>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody<R::Body>,
) -> impl IntoResponse {
    service::<R>(ctx, request::Payload { id, body }).await
}

pub async fn partial_handler<R: Resource>(
    State(ctx): State<Arc<Context>>,
    Path(id): Path<String>,
    JsonBody(changes): JsonBody<Map<String, Value>>,
) -> impl IntoResponse {
    partial_service::<R>(ctx, request::PartialPayload { id, changes }).await
}
