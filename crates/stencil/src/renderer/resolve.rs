//! Dotted property-path resolution.

use crate::renderer::error::{RenderError, compute_suggestions};
use crate::types::Value;

/// Walk a dotted property path against a value source.
///
/// Splits on `.` and descends left to right: `Map` scopes resolve segments as
/// keys, `Record` scopes as members, leaves resolve nothing. The first
/// unresolved segment aborts with [`RenderError::MissingProperty`] carrying
/// the chain resolved so far.
///
/// # Example
///
/// ```
/// use stencil::{props, resolve};
///
/// let source = props! { "Address" => props! { "City" => "Aleppo" } };
/// let city = resolve(&source, "Address.City").unwrap();
/// assert_eq!(city.as_string(), Some("Aleppo"));
/// ```
pub fn resolve(source: &Value, path: &str) -> Result<Value, RenderError> {
    let mut current: Option<Value> = None;
    let mut resolved = Vec::new();

    for segment in path.split('.') {
        let scope = current.as_ref().unwrap_or(source);
        let Some(next) = lookup(scope, segment) else {
            return Err(missing(source, scope, &resolved, segment));
        };
        resolved.push(segment);
        current = Some(next);
    }

    Ok(current.expect("a property path always has at least one segment"))
}

fn lookup(scope: &Value, segment: &str) -> Option<Value> {
    match scope {
        Value::Map(entries) => entries.get(segment).cloned(),
        Value::Record(record) => record.member(segment),
        _ => None,
    }
}

fn missing(root: &Value, scope: &Value, resolved: &[&str], segment: &str) -> RenderError {
    let mut available = member_names(scope);
    available.sort();
    let suggestions = compute_suggestions(segment, &available);
    RenderError::MissingProperty {
        root: root.type_name().to_string(),
        path: resolved.join("."),
        segment: segment.to_string(),
        available,
        suggestions,
    }
}

fn member_names(scope: &Value) -> Vec<String> {
    match scope {
        Value::Map(entries) => entries.keys().cloned().collect(),
        Value::Record(record) => record.member_names().into_iter().map(String::from).collect(),
        _ => Vec::new(),
    }
}
