use super::repository::MenuItemPayload;
use crate::utils::validation::{collect, parse_integer, parse_text, required};
use bigdecimal::BigDecimal;
use serde::Serializer;
use serde_json::Value;
use std::{borrow::Cow, str::FromStr};
use validator::{ValidationError, ValidationErrors};

pub const MAX_DIGITS: i64 = 6;
pub const DECIMAL_PLACES: i64 = 2;
pub const TITLE_MAX_LENGTH: usize = 255;

/// Largest exponent magnitude handed to the decimal parser.
const MAX_EXPONENT: i64 = 4096;

pub fn serialize_price<S: Serializer>(price: &BigDecimal, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&price.with_scale(DECIMAL_PLACES).to_string())
}

fn price_error(code: &'static str, message: String) -> ValidationError {
    ValidationError::new(code).with_message(Cow::from(message))
}

fn max_digits() -> ValidationError {
    price_error(
        "max_digits",
        format!("Ensure that there are no more than {} digits in total.", MAX_DIGITS),
    )
}

fn exponent_in_range(raw: &str) -> bool {
    match raw.find(['e', 'E']) {
        None => true,
        Some(at) => match raw[at + 1..].strip_prefix('+').unwrap_or(&raw[at + 1..]).parse::<i64>() {
            Ok(exponent) => (-MAX_EXPONENT..=MAX_EXPONENT).contains(&exponent),
            Err(_) => true,
        },
    }
}

/// Accepts a JSON number or numeric string holding at most `MAX_DIGITS`
/// digits, `DECIMAL_PLACES` of them after the point.
pub fn parse_price(value: &Value) -> Result<BigDecimal, ValidationError> {
    let raw = match value {
        Value::Number(number) => number.to_string(),
        Value::String(text) => text.trim().to_string(),
        _ => return Err(price_error("invalid", "A valid number is required.".to_string())),
    };

    if !exponent_in_range(&raw) {
        return Err(max_digits());
    }

    let price = BigDecimal::from_str(&raw)
        .map_err(|_| price_error("invalid", "A valid number is required.".to_string()))?;

    let (digits, exponent) = price.as_bigint_and_exponent();
    let digit_count = digits.to_string().trim_start_matches('-').len() as i64;
    let (total_digits, decimal_places) = if exponent <= 0 {
        (digit_count.saturating_sub(exponent), 0)
    } else if digit_count > exponent {
        (digit_count, exponent)
    } else {
        (exponent, exponent)
    };
    let whole_digits = total_digits - decimal_places;

    if total_digits > MAX_DIGITS {
        return Err(max_digits());
    }
    if decimal_places > DECIMAL_PLACES {
        return Err(price_error(
            "max_decimal_places",
            format!("Ensure that there are no more than {} decimal places.", DECIMAL_PLACES),
        ));
    }
    if whole_digits > MAX_DIGITS - DECIMAL_PLACES {
        return Err(price_error(
            "max_whole_digits",
            format!(
                "Ensure that there are no more than {} digits before the decimal point.",
                MAX_DIGITS - DECIMAL_PLACES
            ),
        ));
    }

    Ok(price.with_scale(DECIMAL_PLACES))
}

pub mod request {
    use serde::Deserialize;
    use serde_json::Value;

    /// A menu item as received. Fields stay raw so each one is checked and
    /// reported on its own.
    #[derive(Deserialize, Debug)]
    pub struct Body {
        pub title: Option<Value>,
        pub price: Option<Value>,
        pub inventory: Option<Value>,
    }
}

impl TryFrom<request::Body> for MenuItemPayload {
    type Error = ValidationErrors;

    fn try_from(body: request::Body) -> Result<Self, Self::Error> {
        let title = required(body.title).and_then(|title| parse_text(&title, TITLE_MAX_LENGTH));
        let price = required(body.price).and_then(|price| parse_price(&price));
        let inventory = body.inventory.as_ref().map(parse_integer).transpose();

        match (title, price, inventory) {
            (Ok(title), Ok(price), Ok(inventory)) => Ok(Self {
                title,
                price,
                inventory,
            }),
            (title, price, inventory) => Err(collect([
                ("title", title.err()),
                ("price", price.err()),
                ("inventory", inventory.err()),
            ])),
        }
    }
}
