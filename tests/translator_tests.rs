//! End-to-end tests for translator registries
//!
//! These tests exercise the full path: declaring filters, resolving a
//! registry through inheritance, and parsing realistic query strings.

use qp_translator::core::parsers;
use qp_translator::prelude::*;
use serde_json::{Value, json};

fn predicate_json(result: &ParseResult) -> Vec<Value> {
    result
        .predicates
        .iter()
        .map(|p| Value::Object(p.clone()))
        .collect()
}

/// Registry from the documentation scenario: a required enum `status` and a
/// multi-valued integer `id` that is suppressed whenever `status` is present.
fn items_translator() -> Translator {
    Translator::builder()
        .filter(
            "status",
            Filter::new(
                "str",
                parsers::enumeration("str", &["active", "archived"]),
                field_eq("status"),
            )
            .required()
            .describe("Lifecycle state of the item"),
        )
        .filter(
            "id",
            Filter::new("i64", parsers::typed::<i64>(), field_eq("id"))
                .many()
                .excludes("status"),
        )
        .build()
}

// =============================================================================
// End-to-end scenarios
// =============================================================================

#[test]
fn test_excluded_multi_filter_with_required_enum() {
    let translator = items_translator();
    let params = QueryParams::from_query("id=1&id=2&status=active");

    let result = translator.parse(&params).unwrap();

    // `id` is suppressed by the presence of `status`; `status` builds normally
    assert_eq!(
        predicate_json(&result),
        vec![json!({}), json!({"status": "active"})]
    );
    assert_eq!(result.limit, None);
    assert_eq!(result.offset, None);
    assert!(result.sort.is_empty());
}

#[test]
fn test_empty_request_fails_on_required_status() {
    let err = items_translator().parse(&QueryParams::new()).unwrap_err();
    assert_eq!(err, TranslatorError::MissingRequired(vec!["status".into()]));
    assert_eq!(err.to_string(), "Required query params: status");
}

#[test]
fn test_full_request_with_pagination_and_sort() {
    let translator = items_translator();
    let params =
        QueryParams::from_query("status=archived&limit=25&offset=50&sort_by=name&sort_by=-id");

    let result = translator.parse(&params).unwrap();

    assert_eq!(predicate_json(&result), vec![json!({"status": "archived"})]);
    assert_eq!(result.limit, Some(25));
    assert_eq!(result.offset, Some(50));
    assert_eq!(result.sort, vec!["name", "-id"]);
}

#[test]
fn test_invalid_enum_value_reports_members() {
    let err = items_translator()
        .parse(&QueryParams::from_query("status=deleted"))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Value 'deleted' is not a valid member of str(active, archived)"
    );
}

#[test]
fn test_unknown_params_listed_together() {
    let err = items_translator()
        .parse(&QueryParams::from_query("status=active&foo=1&bar=2"))
        .unwrap_err();
    let TranslatorError::UnknownParams(names) = err else {
        panic!("expected UnknownParams");
    };
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(sorted, vec!["bar".to_string(), "foo".to_string()]);
}

// =============================================================================
// Inheritance
// =============================================================================

#[test]
fn test_subtype_override_wins_at_parse_time() {
    let base = Translator::builder()
        .filter("code", Filter::text(field_eq("code")))
        .build();
    let child = Translator::builder()
        .inherit(&base)
        .filter(
            "code",
            Filter::new("i64", parsers::typed::<i64>(), field_eq("numeric_code")),
        )
        .build();

    let result = child.parse(&QueryParams::from_query("code=7")).unwrap();
    assert_eq!(predicate_json(&result), vec![json!({"numeric_code": 7})]);
}

#[test]
fn test_inherited_required_is_not_enforced_on_subtype() {
    let base = Translator::builder()
        .filter("status", Filter::text(field_eq("status")).required())
        .build();
    let child = Translator::builder()
        .inherit(&base)
        .filter("name", Filter::text(field_eq("name")))
        .build();

    // the base enforces status, the child does not
    assert!(base.parse(&QueryParams::new()).is_err());
    assert!(child.parse(&QueryParams::new()).is_ok());

    // but the inherited filter still parses when supplied
    let result = child
        .parse(&QueryParams::from_query("status=active"))
        .unwrap();
    assert_eq!(predicate_json(&result), vec![json!({"status": "active"})]);
}

#[test]
fn test_multi_level_inheritance_accumulates_filters() {
    let grandparent = Translator::builder()
        .filter("a", Filter::text(field_eq("a")))
        .build();
    let parent = Translator::builder()
        .inherit(&grandparent)
        .filter("b", Filter::text(field_eq("b")))
        .build();
    let child = Translator::builder()
        .inherit(&parent)
        .filter("c", Filter::text(field_eq("c")))
        .build();

    assert_eq!(child.filters().len(), 3);
    let result = child.parse(&QueryParams::from_query("a=1&b=2&c=3")).unwrap();
    assert_eq!(result.predicates.len(), 3);
}

// =============================================================================
// Documentation accessor
// =============================================================================

#[test]
fn test_docs_describe_every_filter() {
    let translator = items_translator();
    let docs = translator.docs();

    assert!(docs.starts_with("<h2>Filters:</h2>"));
    assert!(docs.contains("<h3>status</h3>"));
    assert!(docs.contains("Lifecycle state of the item<br><br>"));
    assert!(docs.contains("**Is Required:** true"));
    assert!(docs.contains("<h3>id</h3>"));
    assert!(docs.contains("**ValueType:** i64"));
    assert!(docs.contains("**Many:** true"));
    assert!(docs.contains("**Exclusions:** status"));
}

#[test]
fn test_docs_are_precomputed_and_stable() {
    let translator = items_translator();
    let first = translator.docs().to_string();
    let _ = translator.parse(&QueryParams::from_query("status=active"));
    assert_eq!(translator.docs(), first);
}

// =============================================================================
// Shared use
// =============================================================================

#[test]
fn test_translator_is_shareable_across_threads() {
    use std::sync::Arc;

    let translator = Arc::new(items_translator());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let translator = Arc::clone(&translator);
            std::thread::spawn(move || {
                let params = QueryParams::from_query("status=active&limit=10");
                translator.parse(&params).unwrap()
            })
        })
        .collect();

    let results: Vec<ParseResult> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(results.windows(2).all(|w| w[0] == w[1]));
}
