pub mod request {
    use crate::modules::resource::Resource;

    pub struct Payload<R: Resource> {
        pub body: R::Body,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde::Serialize;
    use serde_json::json;
    use validator::ValidationErrors;

    use crate::{modules::resource::CleanError, utils::validation};

    pub enum Success<R> {
        Created(R),
    }

    impl<R: Serialize> IntoResponse for Success<R> {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Created(record) => (StatusCode::CREATED, Json(json!(record))).into_response(),
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        FailedToCreate(&'static str),
    }

    impl Error {
        pub fn from_clean_error(err: CleanError, name: &'static str) -> Self {
            match err {
                CleanError::Invalid(errors) => {
                    tracing::warn!("Failed to validate payload: {errors}");
                    Self::FailedToValidate(errors)
                }
                CleanError::UnexpectedError => Self::FailedToCreate(name),
            }
        }
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors).into_response(),
                Self::FailedToCreate(name) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": format!("{} creation failed", name) })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response<R> = Result<Success<R>, Error>;
}
