//! Error types for template rendering.

use thiserror::Error;

/// An error that aborts a render on first occurrence.
///
/// A render either fully succeeds or fully fails: no partial output, no
/// default substitution, no retry.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A property-path segment could not be resolved.
    #[error("{}", missing_property_message(.root, .path, .segment, .suggestions))]
    MissingProperty {
        /// Type name of the root value source.
        root: String,
        /// Dot-joined chain of segments resolved before the failure; empty
        /// when the first segment failed.
        path: String,
        /// The segment that failed to resolve.
        segment: String,
        /// Member names available at the failing scope, sorted.
        available: Vec<String>,
        /// Near-miss candidates for the failing segment, closest first.
        suggestions: Vec<String>,
    },

    /// A format spec was applied to a value type that cannot honor it.
    #[error("format spec '{spec}' is not supported for {kind} value")]
    FormatSpec {
        /// The offending spec text.
        spec: String,
        /// Type name of the resolved value.
        kind: &'static str,
    },
}

fn missing_property_message(
    root: &str,
    path: &str,
    segment: &str,
    suggestions: &[String],
) -> String {
    let mut message = if path.is_empty() {
        format!("missing property '{segment}' on {root}")
    } else {
        format!("missing property '{segment}' at '{path}' on {root}")
    };
    if !suggestions.is_empty() {
        message.push_str(&format!(", did you mean: {}?", suggestions.join(", ")));
    }
    message
}

/// Rank `available` names by edit distance to `key`.
///
/// Names within distance 1 (distance 2 for keys longer than three
/// characters) are returned closest first, at most three of them.
pub fn compute_suggestions(key: &str, available: &[String]) -> Vec<String> {
    let max_distance = if key.len() <= 3 { 1 } else { 2 };
    let mut scored: Vec<(usize, &String)> = available
        .iter()
        .filter_map(|candidate| {
            let distance = strsim::levenshtein(key, candidate);
            (distance > 0 && distance <= max_distance).then_some((distance, candidate))
        })
        .collect();
    scored.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(b.1)));
    scored
        .into_iter()
        .take(3)
        .map(|(_, candidate)| candidate.clone())
        .collect()
}
