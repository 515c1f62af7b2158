//! Axum extractor for raw query parameters
//!
//! [`QueryParams`] can be taken directly as a handler argument; the raw
//! query string is decoded without losing repeated keys, which axum's own
//! `Query<T>` extractor cannot represent for free-form parameter sets.
//!
//! ```rust,ignore
//! async fn list_items(params: QueryParams) -> Result<Json<ParseResult>, TranslatorError> {
//!     Ok(Json(ITEMS_TRANSLATOR.parse(&params)?))
//! }
//! ```

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use std::convert::Infallible;

use crate::core::params::QueryParams;

impl<S: Send + Sync> FromRequestParts<S> for QueryParams {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(QueryParams::from_query(parts.uri.query().unwrap_or("")))
    }
}
