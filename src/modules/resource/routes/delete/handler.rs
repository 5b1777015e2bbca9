use super::service::service;
use super::types::request;
use crate::{modules::resource::Resource, types::Context};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use std::sync::Arc;

pub async fn handler<R: Resource>(
    State(ctx): State<Arc<Context>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    service::<R>(ctx, request::Payload { id }).await
}
