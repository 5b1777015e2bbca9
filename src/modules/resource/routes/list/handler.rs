use super::service::service;
use super::types::request;
use crate::{modules::resource::Resource, types::Context, utils::pagination::Pagination};
use axum::{extract::State, response::IntoResponse};
use std::sync::Arc;

pub async fn handler<R: Resource>(
    State(ctx): State<Arc<Context>>,
    pagination: Pagination,
) -> impl IntoResponse {
    service::<R>(ctx, request::Payload { pagination }).await
}
