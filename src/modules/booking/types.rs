use super::repository::BookingPayload;
use crate::utils::validation::{collect, parse_integer, parse_string, parse_text, required};
use chrono::{DateTime, NaiveDateTime, Utc};
use std::borrow::Cow;
use validator::{ValidationError, ValidationErrors};

pub const NAME_MAX_LENGTH: usize = 255;

const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Reads an RFC 3339 timestamp, or a naive ISO 8601 one taken as UTC.
pub fn parse_booking_date(raw: &str) -> Result<DateTime<Utc>, ValidationError> {
    let raw = raw.trim();

    if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
        return Ok(date.with_timezone(&Utc));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|date| date.and_utc())
        .ok_or_else(|| {
            ValidationError::new("invalid").with_message(Cow::from(
                "Datetime has wrong format. Use one of these formats instead: \
                 YYYY-MM-DDThh:mm[:ss[.uuuuuu]][+HH:MM|-HH:MM|Z].",
            ))
        })
}

pub mod request {
    use serde::Deserialize;
    use serde_json::Value;

    #[derive(Deserialize, Debug)]
    pub struct Body {
        pub user: Option<Value>,
        pub name: Option<Value>,
        pub no_of_guests: Option<Value>,
        pub booking_date: Option<Value>,
    }
}

impl TryFrom<request::Body> for BookingPayload {
    type Error = ValidationErrors;

    fn try_from(body: request::Body) -> Result<Self, Self::Error> {
        let user = required(body.user).and_then(|user| parse_string(&user));
        let name = required(body.name).and_then(|name| parse_text(&name, NAME_MAX_LENGTH));
        let no_of_guests = required(body.no_of_guests).and_then(|guests| parse_integer(&guests));
        let booking_date = required(body.booking_date)
            .and_then(|date| parse_string(&date))
            .and_then(|date| parse_booking_date(&date));

        match (user, name, no_of_guests, booking_date) {
            (Ok(user), Ok(name), Ok(no_of_guests), Ok(booking_date)) => Ok(Self {
                user,
                name,
                no_of_guests,
                booking_date,
            }),
            (user, name, no_of_guests, booking_date) => Err(collect([
                ("user", user.err()),
                ("name", name.err()),
                ("no_of_guests", no_of_guests.err()),
                ("booking_date", booking_date.err()),
            ])),
        }
    }
}
