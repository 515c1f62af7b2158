//! The parse engine
//!
//! A single-pass, side-effect-free transformation from a raw multi-valued
//! parameter collection to a [`ParseResult`], driven by the translator's
//! resolved filter registry. Purely CPU-bound; never blocks, never suspends.

use serde_json::Value;

use crate::core::error::TranslatorError;
use crate::core::filter::{Filter, Predicate};
use crate::core::params::QueryParams;
use crate::core::query::ParseResult;
use crate::core::registry::Translator;

/// Reserved key: page size
pub const LIMIT_KEY: &str = "limit";
/// Reserved key: page start
pub const OFFSET_KEY: &str = "offset";
/// Reserved key: sort keys, repeatable
pub const SORT_KEY: &str = "sort_by";

/// Keys never matched against filter descriptors
pub const RESERVED_KEYS: [&str; 3] = [LIMIT_KEY, OFFSET_KEY, SORT_KEY];

fn is_digits(v: &str) -> bool {
    !v.is_empty() && v.bytes().all(|b| b.is_ascii_digit())
}

/// Pagination values are lenient: anything that is not a plain run of
/// digits (including overflow) is ignored rather than rejected.
fn page_bound(params: &QueryParams, key: &str) -> Option<u64> {
    params
        .get(key)
        .filter(|v| is_digits(v))
        .and_then(|v| v.parse().ok())
}

impl Translator {
    /// Translate raw query parameters into a structured filter specification.
    ///
    /// Client-input problems surface as [`TranslatorError::UnknownParams`],
    /// [`TranslatorError::InvalidValue`] (fail-fast, first occurrence) or
    /// [`TranslatorError::MissingRequired`]; a misbehaving filter parser
    /// surfaces as [`TranslatorError::Internal`].
    ///
    /// # Example
    /// ```rust
    /// use qp_translator::prelude::*;
    /// use qp_translator::core::parsers;
    ///
    /// let translator = Translator::builder()
    ///     .filter("active", Filter::new("bool", parsers::boolean(), field_eq("active")))
    ///     .build();
    ///
    /// let params = QueryParams::from_query("active=true&limit=10&sort_by=created_at");
    /// let result = translator.parse(&params).unwrap();
    /// assert_eq!(result.predicates.len(), 1);
    /// assert_eq!(result.limit, Some(10));
    /// assert_eq!(result.sort, vec!["created_at".to_string()]);
    /// ```
    pub fn parse(&self, params: &QueryParams) -> Result<ParseResult, TranslatorError> {
        let limit = page_bound(params, LIMIT_KEY);
        let offset = page_bound(params, OFFSET_KEY);
        let sort = params.get_all(SORT_KEY).to_vec();

        // Keyed by parameter name so exclusion no-ops count as resolved for
        // the required check; only the values survive into the result.
        let mut resolved: indexmap::IndexMap<&str, Predicate> = indexmap::IndexMap::new();
        let mut unknown: Vec<String> = Vec::new();

        for key in params.keys() {
            if RESERVED_KEYS.contains(&key) {
                continue;
            }
            let Some(filter) = self.get(key) else {
                unknown.push(key.to_string());
                continue;
            };
            if filter.exclusions().iter().any(|name| params.contains(name)) {
                resolved.insert(key, Predicate::new());
                continue;
            }
            let value = self.parse_values(key, filter, params)?;
            resolved.insert(key, filter.build_predicate(value));
        }

        if !unknown.is_empty() {
            return Err(TranslatorError::UnknownParams(unknown));
        }

        let missing: Vec<String> = self
            .required()
            .iter()
            .filter(|name| !resolved.contains_key(name.as_str()))
            .cloned()
            .collect();
        if !missing.is_empty() {
            return Err(TranslatorError::MissingRequired(missing));
        }

        Ok(ParseResult {
            predicates: resolved.into_values().collect(),
            sort,
            limit,
            offset,
        })
    }

    fn parse_values(
        &self,
        name: &str,
        filter: &Filter,
        params: &QueryParams,
    ) -> Result<Value, TranslatorError> {
        if filter.is_many() {
            let mut values = Vec::new();
            for raw in params.get_all(name) {
                values.push(parse_one(name, filter, raw)?);
            }
            Ok(Value::Array(values))
        } else {
            parse_one(name, filter, params.get(name).unwrap_or(""))
        }
    }
}

fn parse_one(name: &str, filter: &Filter, raw: &str) -> Result<Value, TranslatorError> {
    filter.parse_value(raw).map_err(|e| match e {
        e @ TranslatorError::InvalidValue(_) => e,
        other => TranslatorError::Internal(format!(
            "parser for '{}' raised a non-invalid-value error: {}",
            name, other
        )),
    })
}
