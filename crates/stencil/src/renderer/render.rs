//! The rendering pass.
//!
//! A single left-to-right sweep over the template: text outside token matches
//! passes through byte-identical; each match is classified by its delimiter
//! runs and emitted as an escaped literal, a substituted value, or a retained
//! property name. Matches are independent of one another and all resolve
//! against the same root source. The first error aborts the whole render.

use std::iter;

use crate::ambient;
use crate::parser::{Disposition, classify, collapse_doubled, retained_run, scan, substituted_run};
use crate::renderer::error::RenderError;
use crate::renderer::format::render_value;
use crate::renderer::locale::LocaleProvider;
use crate::renderer::resolve::resolve;
use crate::types::Value;

/// Render `template` against `source` using the ambient locale provider.
///
/// A template without delimiter runs is returned unchanged.
///
/// # Example
///
/// ```
/// use stencil::{format, props};
///
/// let source = props! { "Name" => "Ahmad" };
/// assert_eq!(format("{Name}", &source).unwrap(), "Ahmad");
/// assert_eq!(format("{{Name}}", &source).unwrap(), "{Name}");
/// ```
///
/// # Errors
///
/// [`RenderError::MissingProperty`] when a placeholder's path cannot be
/// resolved, [`RenderError::FormatSpec`] when a format spec is incompatible
/// with the resolved value's type. Either aborts the render with no partial
/// output.
pub fn format(template: &str, source: &Value) -> Result<String, RenderError> {
    ambient::with_ambient(|provider| format_with(template, source, provider))
}

/// Render `template` against `source` with an explicit locale provider.
pub fn format_with(
    template: &str,
    source: &Value,
    provider: &LocaleProvider,
) -> Result<String, RenderError> {
    let mut out = String::with_capacity(template.len());
    let mut tail = 0;

    for token in scan(template) {
        out.push_str(&template[tail..token.start]);
        match classify(token.open, token.close) {
            Disposition::Escape => out.push_str(&collapse_doubled(token.text)),
            Disposition::Substitute => {
                let resolved = resolve(source, token.path)?;
                let rendered = render_value(&resolved, token.spec, provider)?;
                push_run(&mut out, '{', substituted_run(token.open));
                out.push_str(&rendered);
                push_run(&mut out, '}', substituted_run(token.close));
            }
            Disposition::Retain => {
                // The literal property name survives; a format spec does not.
                push_run(&mut out, '{', retained_run(token.open));
                out.push_str(token.path);
                push_run(&mut out, '}', retained_run(token.close));
            }
        }
        tail = token.end;
    }

    out.push_str(&template[tail..]);
    Ok(out)
}

fn push_run(out: &mut String, delimiter: char, count: usize) {
    out.extend(iter::repeat_n(delimiter, count));
}

/// Extension methods rendering a template in place.
///
/// # Example
///
/// ```
/// use stencil::{FormatTemplate, props};
///
/// let source = props! { "Name" => "Ahmad" };
/// assert_eq!("{Name}".format_template(&source).unwrap(), "Ahmad");
/// ```
pub trait FormatTemplate {
    /// Render this template against `source` with the ambient provider.
    fn format_template(&self, source: &Value) -> Result<String, RenderError>;

    /// Render this template against `source` with an explicit provider.
    fn format_template_with(
        &self,
        source: &Value,
        provider: &LocaleProvider,
    ) -> Result<String, RenderError>;
}

impl FormatTemplate for str {
    fn format_template(&self, source: &Value) -> Result<String, RenderError> {
        format(self, source)
    }

    fn format_template_with(
        &self,
        source: &Value,
        provider: &LocaleProvider,
    ) -> Result<String, RenderError> {
        format_with(self, source, provider)
    }
}
