//! Parse result consumed by the data-access layer

use serde::Serialize;

use crate::core::filter::Predicate;

/// The structured output of a successful translation.
///
/// Owned by the caller; carries no reference back to the translator that
/// produced it.
///
/// # Example
/// ```rust,ignore
/// let result = translator.parse(&params)?;
/// // Downstream combines result.predicates with a logical AND:
/// // GET /items?status=active&limit=20&sort_by=created_at
/// store.find(result.predicates, result.sort, result.limit, result.offset)
/// ```
#[derive(Debug, Clone, Serialize, Default, PartialEq)]
pub struct ParseResult {
    /// One predicate per satisfied parameter, in order of first appearance.
    /// Exclusion-suppressed filters contribute an empty match-all map.
    pub predicates: Vec<Predicate>,

    /// Sort keys exactly as supplied under `sort_by`, unvalidated,
    /// duplicates preserved
    pub sort: Vec<String>,

    /// Page size, if a digits-only `limit` was supplied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,

    /// Page start, if a digits-only `offset` was supplied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,
}
