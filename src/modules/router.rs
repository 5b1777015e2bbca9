use super::{
    account::repository::Account, booking::repository::Booking, home,
    menu::repository::MenuItem, resource,
};
use crate::types::Context;
use axum::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .merge(home::get_router())
        .merge(resource::routes::get_router::<MenuItem>())
        .merge(resource::routes::get_router::<Booking>())
        .merge(resource::routes::get_router::<Account>())
}
