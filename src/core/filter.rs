//! Filter descriptors
//!
//! A [`Filter`] declares everything the translator needs to know about one
//! recognized query parameter: how to parse its raw value(s), how to turn
//! the parsed value into a document-store predicate, whether it repeats,
//! which other parameters suppress it, and how to document it.

use serde_json::Value;
use std::fmt;
use std::sync::Arc;

use crate::core::error::TranslatorError;

/// One filter condition handed to the data-access layer.
///
/// The translator treats this as opaque; downstream combines all predicates
/// of a parse result with a logical AND. The empty map is the no-op
/// match-all predicate used when a filter is suppressed by an exclusion.
pub type Predicate = serde_json::Map<String, Value>;

type ParserFn = Arc<dyn Fn(&str) -> Result<Value, TranslatorError> + Send + Sync>;
type PredicateFn = Arc<dyn Fn(Value) -> Predicate + Send + Sync>;

/// Declarative definition of one recognized query parameter.
///
/// Built once at startup and shared read-only for the process lifetime.
///
/// # Example
/// ```rust
/// use qp_translator::prelude::*;
/// use qp_translator::core::parsers;
///
/// let filter = Filter::new("i64", parsers::typed::<i64>(), field_eq("provider_id"))
///     .many()
///     .excludes("position_id")
///     .describe("Filter by provider");
/// assert!(filter.is_many());
/// ```
#[derive(Clone)]
pub struct Filter {
    parser: ParserFn,
    predicate: PredicateFn,
    many: bool,
    exclusions: Vec<String>,
    required: bool,
    description: Option<String>,
    value_type: String,
}

impl Filter {
    /// Create a filter from a documentation label, a value parser and a
    /// predicate builder.
    ///
    /// The parser must fail only with [`TranslatorError::InvalidValue`];
    /// any other error kind is reported as an internal defect at parse
    /// time. When the filter is [`many`](Self::many), the predicate builder
    /// receives a `Value::Array` of the parsed values, in request order.
    pub fn new<P, Q>(value_type: impl Into<String>, parser: P, predicate: Q) -> Self
    where
        P: Fn(&str) -> Result<Value, TranslatorError> + Send + Sync + 'static,
        Q: Fn(Value) -> Predicate + Send + Sync + 'static,
    {
        Self {
            parser: Arc::new(parser),
            predicate: Arc::new(predicate),
            many: false,
            exclusions: Vec::new(),
            required: false,
            description: None,
            value_type: value_type.into(),
        }
    }

    /// Create a filter whose values stay raw strings (identity parser)
    pub fn text<Q>(predicate: Q) -> Self
    where
        Q: Fn(Value) -> Predicate + Send + Sync + 'static,
    {
        Self::new("str", crate::core::parsers::text(), predicate)
    }

    /// Accept repeated occurrences of the parameter
    pub fn many(mut self) -> Self {
        self.many = true;
        self
    }

    /// Make the parameter mandatory
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Suppress this filter's predicate whenever `name` is also present
    pub fn excludes(mut self, name: impl Into<String>) -> Self {
        self.exclusions.push(name.into());
        self
    }

    /// Attach a free-text description for documentation
    pub fn describe(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    /// Whether the parameter may appear multiple times
    pub fn is_many(&self) -> bool {
        self.many
    }

    /// Whether the parameter must be present
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Parameter names that suppress this filter
    pub fn exclusions(&self) -> &[String] {
        &self.exclusions
    }

    /// Free-text description, if any
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Documentation label for the parsed value type
    pub fn value_type(&self) -> &str {
        &self.value_type
    }

    /// Run the value parser on one raw string
    pub(crate) fn parse_value(&self, raw: &str) -> Result<Value, TranslatorError> {
        (self.parser)(raw)
    }

    /// Build the predicate from the parsed value
    pub(crate) fn build_predicate(&self, value: Value) -> Predicate {
        (self.predicate)(value)
    }
}

impl fmt::Debug for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter")
            .field("value_type", &self.value_type)
            .field("many", &self.many)
            .field("exclusions", &self.exclusions)
            .field("required", &self.required)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Predicate builder: equality on a single document field.
///
/// The most common shape; `field_eq("status")` maps a parsed value `v` to
/// the predicate `{"status": v}`.
pub fn field_eq(field: impl Into<String>) -> impl Fn(Value) -> Predicate + Send + Sync + Clone {
    let field = field.into();
    move |value: Value| {
        let mut predicate = Predicate::new();
        predicate.insert(field.clone(), value);
        predicate
    }
}
