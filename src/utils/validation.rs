use axum::{
    async_trait,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::{borrow::Cow, num::IntErrorKind};
use validator::{ValidationError, ValidationErrors};

pub const NON_FIELD_ERRORS: &str = "non_field_errors";

pub fn into_response(errors: ValidationErrors) -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::BAD_REQUEST, Json(json!({"errors": errors})))
}

pub fn field_error(
    field: &'static str,
    code: &'static str,
    message: impl Into<Cow<'static, str>>,
) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    errors.add(field, ValidationError::new(code).with_message(message.into()));
    errors
}

pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    match value.trim().is_empty() {
        true => Err(ValidationError::new("blank")
            .with_message(Cow::from("This field may not be blank."))),
        false => Ok(()),
    }
}

pub fn validate_max_length(value: &str, max: usize) -> Result<(), ValidationError> {
    match value.chars().count() > max {
        true => Err(ValidationError::new("max_length").with_message(Cow::from(format!(
            "Ensure this field has no more than {} characters.",
            max
        )))),
        false => Ok(()),
    }
}

/// Non-blank text of at most `max` characters.
pub fn validate_text(value: &str, max: usize) -> Result<(), ValidationError> {
    validate_not_blank(value)?;
    validate_max_length(value, max)
}

fn error(code: &'static str, message: impl Into<Cow<'static, str>>) -> ValidationError {
    ValidationError::new(code).with_message(message.into())
}

/// The field's raw value, or a `required` error when it is absent or null.
pub fn required(value: Option<Value>) -> Result<Value, ValidationError> {
    value.ok_or_else(|| error("required", "This field is required."))
}

/// Reads a string (or a number, as its text) and trims it.
pub fn parse_string(value: &Value) -> Result<String, ValidationError> {
    match value {
        Value::String(text) => Ok(text.trim().to_string()),
        Value::Number(number) => Ok(number.to_string()),
        _ => Err(error("invalid", "Not a valid string.")),
    }
}

/// Non-blank text of at most `max` characters, trimmed.
pub fn parse_text(value: &Value, max: usize) -> Result<String, ValidationError> {
    let text = parse_string(value)?;
    validate_text(&text, max)?;
    Ok(text)
}

/// Reads a 32-bit integer from a JSON integer, an integral float or a numeric
/// string.
pub fn parse_integer(value: &Value) -> Result<i32, ValidationError> {
    let invalid = || error("invalid", "A valid integer is required.");

    let number = match value {
        Value::Number(number) => match number.as_i64() {
            Some(number) => number,
            None => match number.as_f64() {
                Some(float) if float.fract() == 0.0 && float.abs() < 1e18 => float as i64,
                Some(float) if float.fract() == 0.0 => {
                    return Err(match float > 0.0 {
                        true => max_value(),
                        false => min_value(),
                    })
                }
                _ => return Err(invalid()),
            },
        },
        Value::String(text) => text.trim().parse::<i64>().map_err(|err| {
            match err.kind() {
                IntErrorKind::PosOverflow => max_value(),
                IntErrorKind::NegOverflow => min_value(),
                _ => invalid(),
            }
        })?,
        _ => return Err(invalid()),
    };

    i32::try_from(number).map_err(|_| match number > 0 {
        true => max_value(),
        false => min_value(),
    })
}

fn max_value() -> ValidationError {
    error(
        "max_value",
        format!("Ensure this value is less than or equal to {}.", i32::MAX),
    )
}

fn min_value() -> ValidationError {
    error(
        "min_value",
        format!("Ensure this value is greater than or equal to {}.", i32::MIN),
    )
}

/// Collects the failed fields of a body. Every entry is an error, so the
/// result is never empty when at least one field is given.
pub fn collect(fields: impl IntoIterator<Item = (&'static str, Option<ValidationError>)>) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    for (field, error) in fields {
        if let Some(error) = error {
            errors.add(field, error);
        }
    }
    errors
}

/// JSON request body whose rejections use the same 400 shape as field errors.
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(body)) => Ok(JsonBody(body)),
            Err(rejection) => {
                tracing::warn!("Failed to parse request body: {}", rejection.body_text());
                Err(into_response(field_error(
                    NON_FIELD_ERRORS,
                    "parse_error",
                    rejection.body_text(),
                ))
                .into_response())
            }
        }
    }
}
