pub mod request {
    pub struct Payload {
        pub id: String,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Deleted,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Deleted => StatusCode::NO_CONTENT.into_response(),
            }
        }
    }

    pub enum Error {
        NotFound(&'static str),
        FailedToDelete(&'static str),
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::NotFound(name) => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": format!("{} not found", name) })),
                )
                    .into_response(),
                Self::FailedToDelete(name) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": format!("Failed to delete {}", name.to_lowercase()) })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
