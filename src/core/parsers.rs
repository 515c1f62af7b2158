//! Reusable value parsers
//!
//! Each parser converts one raw query-string value into a typed
//! [`serde_json::Value`]. Parsers are only allowed to fail with
//! [`TranslatorError::InvalidValue`]; the parse engine treats any other
//! error kind as a defect in the filter declaration.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::Serialize;
use serde_json::{Value, json};
use std::str::FromStr;

use crate::core::error::TranslatorError;

fn invalid(message: impl Into<String>) -> TranslatorError {
    TranslatorError::InvalidValue(message.into())
}

/// Unqualified name of a type, for error messages ("i64", "String", "Uuid")
fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

/// Parser: identity, the value stays a string
pub fn text() -> impl Fn(&str) -> Result<Value, TranslatorError> + Send + Sync + Clone {
    |v: &str| Ok(Value::String(v.to_string()))
}

/// Parser: ISO-8601 date/time, normalized to an RFC 3339 UTC string.
///
/// Accepts a full timestamp with offset, a naive timestamp (taken as UTC),
/// or a bare date (taken as midnight UTC).
pub fn datetime() -> impl Fn(&str) -> Result<Value, TranslatorError> + Send + Sync + Clone {
    |v: &str| {
        let parsed = DateTime::parse_from_rfc3339(v)
            .map(|dt| dt.with_timezone(&Utc))
            .or_else(|_| NaiveDateTime::from_str(v).map(|dt| dt.and_utc()))
            .or_else(|_| NaiveDate::from_str(v).map(|d| d.and_time(NaiveTime::MIN).and_utc()));
        match parsed {
            Ok(dt) => Ok(json!(dt.to_rfc3339())),
            Err(_) => Err(invalid("Field with date must be in ISO format")),
        }
    }
}

/// Parser: literal `"true"` or `"false"`, case-sensitive, no truthy coercion
pub fn boolean() -> impl Fn(&str) -> Result<Value, TranslatorError> + Send + Sync + Clone {
    |v: &str| match v {
        "true" => Ok(Value::Bool(true)),
        "false" => Ok(Value::Bool(false)),
        _ => Err(invalid("Field with bool must be 'false' or 'true'")),
    }
}

/// Parser: generic scalar cast to `T` via its `FromStr` implementation.
///
/// # Example
/// ```rust
/// use qp_translator::core::parsers;
///
/// let parse = parsers::typed::<i64>();
/// assert_eq!(parse("42").unwrap(), serde_json::json!(42));
/// assert!(parse("abc").is_err());
/// ```
pub fn typed<T>() -> impl Fn(&str) -> Result<Value, TranslatorError> + Send + Sync + Clone
where
    T: FromStr + Serialize,
{
    |v: &str| {
        let parsed: T = v
            .parse()
            .map_err(|_| {
                invalid(format!(
                    "Value {} is not correct for type {}",
                    v,
                    short_type_name::<T>()
                ))
            })?;
        serde_json::to_value(parsed).map_err(|e| {
            TranslatorError::Internal(format!(
                "parsed value for type {} is not serializable: {}",
                short_type_name::<T>(),
                e
            ))
        })
    }
}

/// Parser: membership in a fixed set of enumeration values.
///
/// `base` is the semantic base type of the enumeration ("str", "int"), used
/// only in the error message alongside the full list of valid values.
///
/// # Example
/// ```rust
/// use qp_translator::core::parsers;
///
/// let parse = parsers::enumeration("str", &["active", "archived"]);
/// assert_eq!(parse("active").unwrap(), serde_json::json!("active"));
/// assert!(parse("deleted").is_err());
/// ```
pub fn enumeration(
    base: &'static str,
    values: &'static [&'static str],
) -> impl Fn(&str) -> Result<Value, TranslatorError> + Send + Sync + Clone {
    move |v: &str| {
        if values.contains(&v) {
            Ok(Value::String(v.to_string()))
        } else {
            Err(invalid(format!(
                "Value '{}' is not a valid member of {}({})",
                v,
                base,
                values.join(", ")
            )))
        }
    }
}
