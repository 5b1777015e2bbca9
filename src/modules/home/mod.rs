use crate::{
    modules::{
        account::repository::Account, booking::repository::Booking, menu::repository::MenuItem,
        resource::Resource,
    },
    types::Context,
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;

const INDEX: &str = include_str!("../../../templates/index.html");

async fn index() -> impl IntoResponse {
    (StatusCode::OK, Html(INDEX))
}

fn collection_url<R: Resource>(base_url: &str) -> String {
    format!("{}/api/{}/", base_url.trim_end_matches('/'), R::COLLECTION)
}

async fn api_root(State(ctx): State<Arc<Context>>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "accounts": collection_url::<Account>(&ctx.app.url),
            "menu": collection_url::<MenuItem>(&ctx.app.url),
            "bookings": collection_url::<Booking>(&ctx.app.url),
        })),
    )
}

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .route("/", get(index))
        .route("/api/", get(api_root))
}
