mod create;
mod delete;
mod get;
mod list;
mod update;

use super::Resource;
use crate::types::Context;
use axum::routing::{get, Router};
use std::sync::Arc;

pub fn get_router<R: Resource>() -> Router<Arc<Context>> {
    Router::new()
        .route(
            &format!("/api/{}/", R::COLLECTION),
            get(list::handler::<R>).post(create::handler::<R>),
        )
        .route(
            &format!("/api/{}/:id/", R::COLLECTION),
            get(get::handler::<R>)
                .put(update::handler::<R>)
                .patch(update::partial_handler::<R>)
                .delete(delete::handler::<R>),
        )
}
