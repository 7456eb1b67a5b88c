//! Value rendering, with and without format specs.
//!
//! Without a spec a value renders through its `Display` conversion. With a
//! spec, dispatch follows the resolved value's runtime type:
//!
//! - numbers: `d`/`D` zero-padded decimal, `x`/`X` hex, plus the float specs
//! - floats: `f`/`F` fixed, `n`/`N` grouped, `e`/`E` scientific, `p`/`P` percent
//! - timestamps: strftime patterns (any spec containing `%`) and the
//!   shorthands `d`, `t`, `f`
//!
//! A letter may carry an optional decimal width/precision (`X4`, `F1`, `N0`).
//! Any pairing outside this table is a [`RenderError::FormatSpec`]; it is not
//! recovered locally.

use std::fmt::Write as _;

use chrono::{DateTime, Utc};

use crate::renderer::error::RenderError;
use crate::renderer::locale::LocaleProvider;
use crate::types::Value;

/// Render a resolved value, applying `spec` when present.
pub fn render_value(
    value: &Value,
    spec: Option<&str>,
    provider: &LocaleProvider,
) -> Result<String, RenderError> {
    match spec {
        None => Ok(value.to_string()),
        Some(spec) => apply_spec(value, spec, provider),
    }
}

fn apply_spec(value: &Value, spec: &str, provider: &LocaleProvider) -> Result<String, RenderError> {
    let rendered = match value {
        Value::Number(n) => number_spec(*n, spec, provider),
        Value::Float(v) => float_spec(*v, spec, provider),
        Value::Timestamp(t) => timestamp_spec(*t, spec),
        Value::Bool(_) | Value::String(_) | Value::Map(_) | Value::Record(_) => None,
    };
    rendered.ok_or_else(|| RenderError::FormatSpec {
        spec: spec.to_string(),
        kind: value.type_name(),
    })
}

/// Split a numeric spec into its letter and optional width/precision.
fn split_spec(spec: &str) -> Option<(char, Option<usize>)> {
    let mut chars = spec.chars();
    let kind = chars.next()?;
    if !kind.is_ascii_alphabetic() {
        return None;
    }
    let rest = chars.as_str();
    if rest.is_empty() {
        Some((kind, None))
    } else {
        rest.parse::<usize>().ok().map(|n| (kind, Some(n)))
    }
}

fn number_spec(value: i64, spec: &str, provider: &LocaleProvider) -> Option<String> {
    let (kind, width) = split_spec(spec)?;
    match kind {
        'd' | 'D' => {
            // Width counts digits of the magnitude; the sign precedes padding.
            let width = width.unwrap_or(0);
            let magnitude = value.unsigned_abs();
            Some(if value < 0 {
                format!("-{magnitude:0width$}")
            } else {
                format!("{magnitude:0width$}")
            })
        }
        'x' => Some(format!("{value:0width$x}", width = width.unwrap_or(0))),
        'X' => Some(format!("{value:0width$X}", width = width.unwrap_or(0))),
        _ => float_spec(value as f64, spec, provider),
    }
}

fn float_spec(value: f64, spec: &str, provider: &LocaleProvider) -> Option<String> {
    let (kind, precision) = split_spec(spec)?;
    match kind {
        'f' | 'F' => Some(fixed(value, precision.unwrap_or(2), provider, false)),
        'n' | 'N' => Some(fixed(value, precision.unwrap_or(2), provider, true)),
        'p' | 'P' => {
            let mut rendered = fixed(value * 100.0, precision.unwrap_or(2), provider, true);
            rendered.push_str(provider.percent());
            Some(rendered)
        }
        'e' | 'E' => Some(scientific(value, precision.unwrap_or(6), kind == 'E', provider)),
        _ => None,
    }
}

/// Fixed-point rendering with the provider's separators.
fn fixed(value: f64, precision: usize, provider: &LocaleProvider, grouped: bool) -> String {
    let rendered = format!("{value:.precision$}");
    let (sign, magnitude) = match rendered.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rendered.as_str()),
    };
    let (int_part, frac_part) = match magnitude.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (magnitude, None),
    };

    let mut out = String::with_capacity(rendered.len() + 4);
    out.push_str(sign);
    if grouped {
        out.push_str(&group_digits(int_part, provider.group()));
    } else {
        out.push_str(int_part);
    }
    if let Some(frac) = frac_part {
        out.push_str(provider.decimal());
        out.push_str(frac);
    }
    out
}

/// Insert the group separator every three digits, counting from the right.
fn group_digits(digits: &str, separator: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len.div_euclid(3) * separator.len());
    for (i, ch) in digits.char_indices() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(ch);
    }
    grouped
}

fn scientific(value: f64, precision: usize, uppercase: bool, provider: &LocaleProvider) -> String {
    let rendered = format!("{value:.precision$e}");
    let rendered = if uppercase {
        rendered.replace('e', "E")
    } else {
        rendered
    };
    rendered.replace('.', provider.decimal())
}

fn timestamp_spec(value: DateTime<Utc>, spec: &str) -> Option<String> {
    let pattern = if spec.contains('%') {
        spec
    } else {
        match spec {
            "d" => "%Y-%m-%d",
            "t" => "%H:%M:%S",
            "f" => "%Y-%m-%d %H:%M:%S",
            _ => return None,
        }
    };
    // An invalid pattern surfaces as a fmt error from the delayed format;
    // report it as an unsupported spec rather than panicking mid-render.
    let mut rendered = String::new();
    write!(rendered, "{}", value.format(pattern)).ok()?;
    Some(rendered)
}
