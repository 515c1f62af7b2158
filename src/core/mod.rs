//! Core module containing the translator, its filters and supporting types

pub mod error;
pub mod extractors;
pub mod filter;
pub mod params;
pub mod parsers;
pub mod query;
pub mod registry;
pub mod translate;

pub use error::{ErrorResponse, TranslatorError};
pub use filter::{Filter, Predicate, field_eq};
pub use params::QueryParams;
pub use query::ParseResult;
pub use registry::{Translator, TranslatorBuilder};
pub use translate::{LIMIT_KEY, OFFSET_KEY, RESERVED_KEYS, SORT_KEY};
