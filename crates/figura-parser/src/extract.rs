//! Lenient record extraction from free-form text.
//!
//! The extractor scans for `{`, takes everything up to the next `}` as a
//! candidate object and parses it as JSON. A candidate that fails is retried
//! once after quoting bare (or single-quoted) keys. Anything still failing is
//! skipped with a warning.
//!
//! Limits: objects are flat, braces cannot be escaped, and a `}` inside a
//! string value ends the candidate early.

use std::sync::LazyLock;

use log::{debug, trace};
use regex_lite::Regex;

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode},
    record::Record,
    span::Span,
};

/// Matches a bare or single/double-quoted identifier directly followed by `:`.
static KEY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(['"])?([a-zA-Z0-9_]+)(['"])?:"#).expect("key pattern is a valid regex")
});

/// Extract every record from `source`, in order of appearance.
///
/// Never fails. Unterminated and unparsable candidates are reported to `sink`
/// as warnings ([`ErrorCode::E001`], [`ErrorCode::E002`]).
///
/// # Examples
///
/// ```
/// use figura_parser::error::DiagnosticCollector;
/// use figura_parser::extract::extract_records;
///
/// let mut sink = DiagnosticCollector::new();
/// let records = extract_records(r#"{primitive: "point", x: 10, y: 20} trailing"#, &mut sink);
/// assert_eq!(records.len(), 1);
/// assert!(sink.diagnostics().is_empty());
/// ```
pub fn extract_records(source: &str, sink: &mut DiagnosticCollector) -> Vec<Record> {
    let mut records = Vec::new();
    let mut cursor = 0;

    while let Some(offset) = source[cursor..].find('{') {
        let start = cursor + offset;
        let Some(close) = source[start + 1..].find('}') else {
            let span = Span::new(start..source.len());
            debug!(start; "Unterminated object, discarding tail");
            sink.emit(
                Diagnostic::warning("unterminated object: no closing '}', the rest of the input is ignored")
                    .with_code(ErrorCode::E001)
                    .with_label(span, "object starts here"),
            );
            break;
        };
        let end = start + 1 + close + 1;
        let span = Span::new(start..end);

        match parse_candidate(&source[start..end]) {
            Ok(record) => {
                trace!(start, end, attributes = record.len(); "Extracted record");
                records.push(record.with_span(span));
            }
            Err(err) => {
                debug!(start, end, err:err; "Skipping unparsable object");
                sink.emit(
                    Diagnostic::warning(format!("could not parse object: {err}"))
                        .with_code(ErrorCode::E002)
                        .with_label(span, "skipped")
                        .with_help("records are flat JSON objects; only unquoted keys are repaired"),
                );
            }
        }

        cursor = end;
    }

    records
}

/// Strict JSON parse, then one retry after quoting keys.
///
/// On double failure the error of the repaired attempt is returned.
fn parse_candidate(candidate: &str) -> Result<Record, serde_json::Error> {
    match parse_object(candidate) {
        Ok(record) => Ok(record),
        Err(_) => parse_object(&quote_keys(candidate)),
    }
}

fn parse_object(candidate: &str) -> Result<Record, serde_json::Error> {
    serde_json::from_str::<serde_json::Map<String, serde_json::Value>>(candidate).map(Record::from)
}

/// Rewrite every `key:`, `'key':` or `"key":` as `"key": `.
fn quote_keys(candidate: &str) -> String {
    KEY_PATTERN.replace_all(candidate, r#""$2": "#).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::Severity, record::Value};

    fn extract(source: &str) -> (Vec<Record>, Vec<Diagnostic>) {
        let mut sink = DiagnosticCollector::new();
        let records = extract_records(source, &mut sink);
        (records, sink.diagnostics().to_vec())
    }

    #[test]
    fn test_quote_keys() {
        assert_eq!(quote_keys("{x:1}"), r#"{"x": 1}"#);
        assert_eq!(quote_keys("{'x':1}"), r#"{"x": 1}"#);
        assert_eq!(quote_keys(r#"{"x":1}"#), r#"{"x": 1}"#);
    }

    #[test]
    fn test_strict_json() {
        let (records, diags) = extract(r#"{"primitive":"point","x":10,"y":20}"#);
        assert_eq!(records.len(), 1);
        assert!(diags.is_empty());
        assert_eq!(records[0].get("primitive"), Some(&Value::from("point")));
        assert_eq!(records[0].span(), Some(Span::new(0..35)));
    }

    #[test]
    fn test_unquoted_keys_match_quoted() {
        let (repaired, diags) = extract(r#"{primitive: "point", x: 10, y: 20}"#);
        let (strict, _) = extract(r#"{"primitive":"point","x":10,"y":20}"#);

        assert!(diags.is_empty());
        assert_eq!(repaired, strict);
    }

    #[test]
    fn test_multiple_records_with_noise() {
        let source = r#"
            first: {"primitive": "point", "x": 1, "y": 2},
            then {primitive: 'segment'} and more
            {"primitive": "circle", "x": 5, "y": 5, "radius": 3}
        "#;
        let (records, diags) = extract(source);

        // single-quoted values are not repaired
        assert_eq!(records.len(), 2);
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].code(), Some(ErrorCode::E002));
        assert_eq!(records[1].get("radius"), Some(&Value::Number(3.0)));
    }

    #[test]
    fn test_unterminated_object() {
        let (records, diags) = extract(r#"{"primitive":"point","x":1,"y":1} ... {primitive:"point", x:1"#);

        assert_eq!(records.len(), 1);
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].severity(), Severity::Warning);
        assert_eq!(diags[0].code(), Some(ErrorCode::E001));
    }

    #[test]
    fn test_unterminated_only() {
        let (records, diags) = extract(r#"... {primitive:"point", x:1"#);

        assert!(records.is_empty());
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].labels()[0].span(), Span::new(4..27));
    }

    #[test]
    fn test_scanning_resumes_after_closing_brace() {
        let (records, diags) = extract(r#"{ broken } {"x": 1}"#);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get("x"), Some(&Value::Number(1.0)));
        assert_eq!(diags[0].labels()[0].span(), Span::new(0..10));
    }

    #[test]
    fn test_nested_object_is_skipped() {
        let (records, diags) = extract(r#"{"a": {"b": 1}}"#);

        assert!(records.is_empty());
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].code(), Some(ErrorCode::E002));
    }

    #[test]
    fn test_no_braces() {
        let (records, diags) = extract("nothing to see here");
        assert!(records.is_empty());
        assert!(diags.is_empty());
    }
}
