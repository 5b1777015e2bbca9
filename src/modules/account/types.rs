use super::repository::AccountPayload;
use crate::utils::validation::{collect, parse_text, required};
use regex::Regex;
use std::borrow::Cow;
use validator::{ValidationError, ValidationErrors};

pub const USERNAME_MAX_LENGTH: usize = 150;

pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    let regex = Regex::new(r"^[\w.@+-]+$").expect("Invalid username regex");
    match regex.is_match(username) {
        true => Ok(()),
        false => Err(ValidationError::new("invalid").with_message(Cow::from(
            "Enter a valid username. This value may contain only letters, numbers, and @/./+/-/_ characters.",
        ))),
    }
}

pub mod request {
    use serde::Deserialize;
    use serde_json::Value;

    #[derive(Deserialize, Debug)]
    pub struct Body {
        pub username: Option<Value>,
    }
}

impl TryFrom<request::Body> for AccountPayload {
    type Error = ValidationErrors;

    fn try_from(body: request::Body) -> Result<Self, Self::Error> {
        let username = required(body.username)
            .and_then(|username| parse_text(&username, USERNAME_MAX_LENGTH))
            .and_then(|username| validate_username(&username).map(|_| username));

        match username {
            Ok(username) => Ok(Self { username }),
            Err(error) => Err(collect([("username", Some(error))])),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usernames_follow_the_allowed_alphabet() {
        assert!(validate_username("testuser").is_ok());
        assert!(validate_username("jane.smith+lemon@example-mail_1").is_ok());
        assert_eq!(validate_username("john doe").unwrap_err().code, "invalid");
        assert!(validate_username("semi;colon").is_err());
    }

    #[test]
    fn rejects_overlong_usernames() {
        let clean = |username: String| {
            AccountPayload::try_from(request::Body {
                username: Some(serde_json::Value::String(username)),
            })
        };

        assert_eq!(
            clean("u".repeat(USERNAME_MAX_LENGTH + 1)).unwrap_err().field_errors()["username"][0].code,
            "max_length"
        );
        assert!(clean("u".repeat(USERNAME_MAX_LENGTH)).is_ok());
    }

    #[test]
    fn missing_or_untyped_usernames_are_reported() {
        let missing = AccountPayload::try_from(request::Body { username: None }).unwrap_err();
        let untyped = AccountPayload::try_from(request::Body {
            username: Some(serde_json::json!(["jane"])),
        })
        .unwrap_err();

        assert_eq!(missing.field_errors()["username"][0].code, "required");
        assert_eq!(untyped.field_errors()["username"][0].code, "invalid");
    }
}
