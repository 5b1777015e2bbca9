pub mod request {
    pub struct Payload {
        pub id: String,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde::Serialize;
    use serde_json::json;

    pub enum Success<R> {
        Record(R),
    }

    impl<R: Serialize> IntoResponse for Success<R> {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Record(record) => (StatusCode::OK, Json(json!(record))).into_response(),
            }
        }
    }

    pub enum Error {
        NotFound(&'static str),
        FailedToFetch(&'static str),
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::NotFound(name) => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": format!("{} not found", name) })),
                )
                    .into_response(),
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
