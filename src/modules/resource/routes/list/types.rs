pub mod request {
    use crate::utils::pagination::Pagination;

    pub struct Payload {
        pub pagination: Pagination,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde::Serialize;
    use serde_json::json;

    use crate::utils::pagination::Paginated;

    pub enum Success<R> {
        Paginated(Paginated<R>),
    }

    impl<R: Serialize> IntoResponse for Success<R> {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Paginated(records) => (StatusCode::OK, Json(json!(records))).into_response(),
            }
        }
    }

    pub enum Error {
        FailedToFetch(&'static str),
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToFetch(plural) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": format!("Failed to fetch {}", plural) })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response<R> = Result<Success<R>, Error>;
}
