//! # qp-translator
//!
//! Translate raw HTTP query strings into validated, structured filter
//! specifications a document-store data-access layer can execute: a list of
//! query predicates, sort keys, and pagination bounds.
//!
//! ## Features
//!
//! - **Declarative filters**: one [`Filter`](core::Filter) per recognized
//!   parameter — parser, predicate builder, multiplicity, exclusions,
//!   required flag, documentation
//! - **Explicit inheritance**: translators merge ancestor registries
//!   through a builder, resolved once at startup, shared without locks
//! - **Typed parsing**: ISO-8601 dates, strict booleans, generic scalar
//!   casts, enumeration membership — each with a uniform failure contract
//! - **Mutual exclusion**: a suppressed filter contributes a match-all
//!   no-op instead of a conflict error
//! - **Self-describing**: every translator renders its own filter
//!   documentation for operator-facing docs
//! - **Lenient pagination**: malformed `limit`/`offset` values are ignored,
//!   never rejected; `sort_by` passes through unvalidated
//!
//! ## Quick Start
//!
//! ```rust
//! use qp_translator::prelude::*;
//! use qp_translator::core::parsers;
//!
//! let translator = Translator::builder()
//!     .filter(
//!         "status",
//!         Filter::new("str", parsers::enumeration("str", &["active", "archived"]), field_eq("status"))
//!             .required()
//!             .describe("Lifecycle state of the item"),
//!     )
//!     .filter(
//!         "id",
//!         Filter::new("i64", parsers::typed::<i64>(), field_eq("id"))
//!             .many()
//!             .excludes("status"),
//!     )
//!     .build();
//!
//! let params = QueryParams::from_query("status=active&limit=20&sort_by=created_at");
//! let result = translator.parse(&params).unwrap();
//!
//! assert_eq!(result.predicates.len(), 1);
//! assert_eq!(result.limit, Some(20));
//! println!("{}", translator.docs());
//! ```

pub mod core;

/// Re-exports of commonly used types and traits
pub mod prelude {
    pub use crate::core::{
        error::{ErrorResponse, TranslatorError},
        filter::{Filter, Predicate, field_eq},
        params::QueryParams,
        query::ParseResult,
        registry::{Translator, TranslatorBuilder},
        translate::{LIMIT_KEY, OFFSET_KEY, RESERVED_KEYS, SORT_KEY},
    };

    // === External dependencies ===
    pub use serde::{Deserialize, Serialize};
    pub use serde_json::Value;
}
