pub mod request {
    use crate::modules::resource::Resource;
    use serde_json::{Map, Value};

    pub struct Payload<R: Resource> {
        pub id: String,
        pub body: R::Body,
    }

    pub struct PartialPayload {
        pub id: String,
        pub changes: Map<String, Value>,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde::Serialize;
    use serde_json::json;
    use validator::ValidationErrors;

    use crate::{modules::resource::CleanError, utils::validation};

    pub enum Success<R> {
        Updated(R),
    }

    impl<R: Serialize> IntoResponse for Success<R> {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Updated(record) => (StatusCode::OK, Json(json!(record))).into_response(),
            }
        }
    }

    pub enum Error {
        NotFound(&'static str),
        FailedToFetch(&'static str),
        FailedToValidate(ValidationErrors),
        FailedToUpdate(&'static str),
    }

    impl Error {
        pub fn from_clean_error(err: CleanError, name: &'static str) -> Self {
            match err {
                CleanError::Invalid(errors) => {
                    tracing::warn!("Failed to validate payload: {errors}");
                    Self::FailedToValidate(errors)
                }
                CleanError::UnexpectedError => Self::FailedToUpdate(name),
            }
        }
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
                Self::FailedToValidate(errors) => validation::into_response(errors).into_response(),
                Self::FailedToUpdate(name) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": format!("Failed to update {}", name.to_lowercase()) })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response<R> = Result<Success<R>, Error>;
}
