//! Schema validation of canonical records.
//!
//! Validation runs in a fixed order and stops at the first error:
//!
//! 1. `primitive` must name a known kind
//! 2. every required attribute must be present and valid
//! 3. every optional attribute that is present must be valid
//! 4. unknown attributes produce warnings and are ignored
//! 5. the kind's invariant must hold
//! 6. absent optional attributes are filled from their defaults

use figura_core::{
    draw::StrokeCap,
    semantic::{Attributes, PrimitiveKind, ValidatedPrimitive},
};
use log::debug;

use crate::{
    canonical::CanonicalRecord,
    error::{Diagnostic, DiagnosticCollector, ErrorCode},
    record::Value,
    schema::{
        self, AttributeSpec, OPTIONAL_ATTRIBUTES, PRIMITIVE_ATTRIBUTE, PrimitiveSpec, TypedValue,
    },
    span::Span,
};

/// Validate one canonical record.
///
/// Warnings (unknown attributes) go to `sink`. The error that rejects the
/// record is returned, and the caller decides where to report it.
///
/// # Errors
///
/// Returns a [`Diagnostic`] naming the kind, attribute, value or invariant
/// that made the record invalid.
///
/// # Examples
///
/// ```
/// use figura_parser::canonical::canonicalize;
/// use figura_parser::error::DiagnosticCollector;
/// use figura_parser::record::{Record, Value};
/// use figura_parser::validate::validate;
///
/// let record: Record = [
///     ("primitive", Value::from("segment")),
///     ("x1", 10.into()), ("y1", 10.into()), ("x2", 20.into()), ("y2", 10.into()),
/// ]
/// .into_iter()
/// .collect();
///
/// let mut sink = DiagnosticCollector::new();
/// let primitive = validate(&canonicalize(&record), &mut sink).unwrap();
/// assert_eq!(primitive.attributes().stroke_width(), 0.2);
/// ```
pub fn validate(
    record: &CanonicalRecord,
    sink: &mut DiagnosticCollector,
) -> Result<ValidatedPrimitive, Diagnostic> {
    let span = record.span();
    let kind = resolve_kind(record)?;
    let spec = schema::spec_for(kind);

    let mut values = Vec::with_capacity(spec.required().len());
    for attr in spec.required() {
        let Some(value) = record.get(attr.name()) else {
            return Err(Diagnostic::error(format!(
                "missing required attribute '{}' in '{kind}' primitive",
                attr.name()
            ))
            .with_code(ErrorCode::E102)
            .with_attribute_name(attr.name())
            .with_optional_label(span, "record dropped")
            .with_help(format!("add '{}': {}", attr.name(), attr.description())));
        };
        match check_attribute(attr, value, span)? {
            TypedValue::Number(n) => values.push(n),
            other => return Err(type_mismatch(attr.name(), other, span)),
        }
    }

    let mut optional = Vec::with_capacity(OPTIONAL_ATTRIBUTES.len());
    for attr in &OPTIONAL_ATTRIBUTES {
        if let Some(value) = record.get(attr.name()) {
            optional.push((attr.name(), check_attribute(attr, value, span)?));
        }
    }

    for (name, _) in record.iter() {
        if name != PRIMITIVE_ATTRIBUTE
            && !spec.requires(name)
            && schema::optional_attribute(name).is_none()
        {
            sink.emit(
                Diagnostic::warning(format!(
                    "ignoring attribute '{name}' in primitive '{kind}' that is neither a required nor an optional attribute"
                ))
                .with_code(ErrorCode::E104)
                .with_attribute_name(name)
                .with_optional_label(span, "attribute ignored"),
            );
        }
    }

    let geometry = spec.build_geometry(&values).ok_or_else(|| {
        Diagnostic::error(format!("'{kind}' primitive has malformed required attributes"))
            .with_code(ErrorCode::E103)
            .with_optional_label(span, "record dropped")
    })?;
    if !spec.check_invariant(&geometry) {
        return Err(invariant_error(spec, span));
    }

    let attributes = resolve_optional(&optional, span)?;
    Ok(ValidatedPrimitive::new(kind, geometry, attributes))
}

fn resolve_kind(record: &CanonicalRecord) -> Result<PrimitiveKind, Diagnostic> {
    let span = record.span();
    let Some(value) = record.get(PRIMITIVE_ATTRIBUTE) else {
        return Err(
            Diagnostic::error("object does not have the 'primitive' attribute")
                .with_code(ErrorCode::E100)
                .with_attribute_name(PRIMITIVE_ATTRIBUTE)
                .with_optional_label(span, "record dropped")
                .with_help(known_kinds_help()),
        );
    };
    value
        .as_text()
        .and_then(|name| name.parse::<PrimitiveKind>().ok())
        .ok_or_else(|| {
            Diagnostic::error(format!(
                "value '{value}' for 'primitive' attribute is not a known primitive"
            ))
            .with_code(ErrorCode::E101)
            .with_attribute(PRIMITIVE_ATTRIBUTE, value.to_string())
            .with_optional_label(span, "record dropped")
            .with_help(known_kinds_help())
        })
}

fn known_kinds_help() -> String {
    let names: Vec<_> = PrimitiveKind::ALL.iter().map(|k| k.as_str()).collect();
    format!("known primitives: {}", names.join(", "))
}

fn check_attribute(
    attr: &AttributeSpec,
    value: &Value,
    span: Option<Span>,
) -> Result<TypedValue, Diagnostic> {
    attr.ty().check(value).ok_or_else(|| {
        Diagnostic::error(format!(
            "attribute '{}' cannot have value '{value}'. Should be {}",
            attr.name(),
            attr.description()
        ))
        .with_code(ErrorCode::E103)
        .with_attribute(attr.name(), value.to_string())
        .with_optional_label(span, "record dropped")
        .with_help(format!("'{}' must be {}", attr.name(), attr.description()))
    })
}

/// A typed value that does not fit the attribute it was checked for. Only
/// reachable when the schema table and [`Attributes`] disagree.
fn type_mismatch(name: &str, typed: TypedValue, span: Option<Span>) -> Diagnostic {
    debug!(attribute = name, value:? = typed; "Typed value does not fit attribute");
    Diagnostic::error(format!(
        "attribute '{name}' cannot hold a value of this type ({typed:?})"
    ))
    .with_code(ErrorCode::E103)
    .with_attribute_name(name)
    .with_optional_label(span, "record dropped")
}

fn invariant_error(spec: &PrimitiveSpec, span: Option<Span>) -> Diagnostic {
    Diagnostic::error(spec.invariant_description())
        .with_code(ErrorCode::E105)
        .with_optional_label(span, "record dropped")
}

/// Build the shared attributes from the explicit values, falling back to the
/// schema defaults for everything absent.
fn resolve_optional(
    explicit: &[(&'static str, TypedValue)],
    span: Option<Span>,
) -> Result<Attributes, Diagnostic> {
    OPTIONAL_ATTRIBUTES
        .iter()
        .filter_map(|attr| {
            let typed = explicit
                .iter()
                .find(|(name, _)| *name == attr.name())
                .map(|(_, typed)| *typed)
                .or_else(|| {
                    attr.default()
                        .and_then(|default| attr.ty().check(&default.to_value()))
                })?;
            Some((attr.name(), typed))
        })
        .try_fold(Attributes::default(), |attrs, (name, typed)| {
            apply(attrs, name, typed).ok_or_else(|| type_mismatch(name, typed, span))
        })
}

/// Store `typed` under `name`, or `None` when the pair is not one
/// [`Attributes`] knows about.
fn apply(attrs: Attributes, name: &str, typed: TypedValue) -> Option<Attributes> {
    let attrs = match (name, typed) {
        ("color", TypedValue::Paint(paint)) => attrs.with_color(paint),
        ("fill_color", TypedValue::Paint(paint)) => attrs.with_fill_color(paint),
        ("stroke_width", TypedValue::Number(n)) => attrs.with_stroke_width(n),
        ("opacity", TypedValue::Number(n)) => attrs.with_opacity(n),
        ("arrow_head_size", TypedValue::Number(n)) => attrs.with_arrow_head_size(n),
        ("stroke_dash", TypedValue::Number(n)) => attrs.with_stroke_dash(n),
        ("rotation", TypedValue::Number(n)) => attrs.with_rotation(n),
        ("linecap", TypedValue::Choice(cap)) => attrs.with_linecap(cap.parse::<StrokeCap>().ok()?),
        _ => return None,
    };
    Some(attrs)
}
