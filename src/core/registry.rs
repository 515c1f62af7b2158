//! Translator registry and its builder
//!
//! A [`Translator`] is the resolved, immutable set of filter descriptors
//! for one endpoint family: the merged name→filter map, the required-name
//! set, and a pre-rendered documentation string. It is built exactly once
//! at startup through [`TranslatorBuilder`] and then shared read-only by
//! any number of concurrent callers.
//!
//! Inheritance is explicit: a builder merges ancestor translators in call
//! order (later ancestor wins name ties), then applies directly-declared
//! filters last. Within one resolved registry names are unique; a later
//! declaration silently replaces an earlier one, never errors.

use indexmap::IndexMap;
use std::collections::BTreeSet;

use crate::core::filter::Filter;

/// The resolved registry for one translator type.
///
/// # Example
/// ```rust
/// use qp_translator::prelude::*;
/// use qp_translator::core::parsers;
///
/// let base = Translator::builder()
///     .filter("active", Filter::new("bool", parsers::boolean(), field_eq("active")))
///     .build();
///
/// let items = Translator::builder()
///     .inherit(&base)
///     .filter(
///         "status",
///         Filter::new("str", parsers::enumeration("str", &["open", "closed"]), field_eq("status"))
///             .required(),
///     )
///     .build();
///
/// assert_eq!(items.filters().len(), 2);
/// assert!(items.required().contains("status"));
/// ```
#[derive(Debug, Clone)]
pub struct Translator {
    filters: IndexMap<String, Filter>,
    required: BTreeSet<String>,
    docs: String,
}

impl Translator {
    /// Start declaring a new translator
    pub fn builder() -> TranslatorBuilder {
        TranslatorBuilder::default()
    }

    /// The merged name→filter map, in declaration order
    pub fn filters(&self) -> &IndexMap<String, Filter> {
        &self.filters
    }

    /// Look up one filter by parameter name
    pub fn get(&self, name: &str) -> Option<&Filter> {
        self.filters.get(name)
    }

    /// Names of the filters declared required directly on this translator.
    ///
    /// Inherited `required` flags are deliberately not re-collected here: a
    /// translator that inherits a required filter without redeclaring it
    /// does not enforce that requirement. Redeclare the filter to keep the
    /// enforcement.
    pub fn required(&self) -> &BTreeSet<String> {
        &self.required
    }

    /// The pre-rendered documentation string (empty for an empty registry)
    pub fn docs(&self) -> &str {
        &self.docs
    }
}

/// Builder assembling a [`Translator`] from ancestors and direct declarations
#[derive(Default)]
pub struct TranslatorBuilder {
    inherited: IndexMap<String, Filter>,
    own: IndexMap<String, Filter>,
}

impl TranslatorBuilder {
    /// Merge every filter of an ancestor translator.
    ///
    /// Call order matters: a later `inherit` overrides same-named filters
    /// from an earlier one, and directly-declared filters override both.
    pub fn inherit(mut self, parent: &Translator) -> Self {
        for (name, filter) in parent.filters() {
            self.inherited.insert(name.clone(), filter.clone());
        }
        self
    }

    /// Declare a filter directly on this translator, overriding any
    /// inherited filter of the same name
    pub fn filter(mut self, name: impl Into<String>, filter: Filter) -> Self {
        self.own.insert(name.into(), filter);
        self
    }

    /// Resolve the registry: merge, collect the required set from direct
    /// declarations, and render the documentation string
    pub fn build(self) -> Translator {
        let required: BTreeSet<String> = self
            .own
            .iter()
            .filter(|(_, filter)| filter.is_required())
            .map(|(name, _)| name.clone())
            .collect();

        let mut filters = self.inherited;
        filters.extend(self.own);

        let docs = render_docs(&filters);
        tracing::debug!(
            filters = filters.len(),
            required = required.len(),
            "translator registry built"
        );

        Translator {
            filters,
            required,
            docs,
        }
    }
}

/// Render the operator-facing documentation for a merged filter map
fn render_docs(filters: &IndexMap<String, Filter>) -> String {
    if filters.is_empty() {
        return String::new();
    }
    let entries: Vec<String> = filters
        .iter()
        .map(|(name, filter)| format!("<br><h3>{}</h3>{}", name, filter_info(filter)))
        .collect();
    format!("<h2>Filters:</h2>{}", entries.join("<br>"))
}

fn filter_info(filter: &Filter) -> String {
    let mut info = String::new();
    if let Some(description) = filter.description() {
        info.push_str(description);
        info.push_str("<br><br>");
    }
    info.push_str(&format!(
        "**ValueType:** {}<br>**Many:** {}<br>**Is Required:** {}",
        filter.value_type(),
        filter.is_many(),
        filter.is_required()
    ));
    if !filter.exclusions().is_empty() {
        info.push_str(&format!("<br>**Exclusions:** {}", filter.exclusions().join(", ")));
    }
    info
}
