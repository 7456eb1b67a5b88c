//! Locale-dependent rendering conventions.
//!
//! A [`LocaleProvider`] carries the conventions the formatter consumes when a
//! format spec asks for locale-sensitive output: decimal separator, digit
//! grouping, percent suffix. Providers are identified by a BCP-47 locale tag
//! and are plain immutable data — build one per locale you render for, or
//! install one process-wide via [`crate::ambient`].

use bon::Builder;
use icu_locale_core::{Locale, locale};

/// Separator conventions for a language subtag: decimal, group, percent.
///
/// Languages outside this table get the invariant conventions.
fn conventions(language: &str) -> (&'static str, &'static str, &'static str) {
    match language {
        "de" | "es" | "it" => (",", ".", "\u{a0}%"),
        "fr" | "ru" => (",", "\u{202f}", "\u{a0}%"),
        _ => (".", ",", "%"),
    }
}

/// Rendering conventions for one locale.
///
/// # Example
///
/// ```
/// use stencil::LocaleProvider;
///
/// let german = LocaleProvider::for_tag("de-AT").unwrap();
/// assert_eq!(german.decimal(), ",");
/// assert_eq!(german.group(), ".");
///
/// let custom = LocaleProvider::builder()
///     .decimal(",")
///     .group(" ")
///     .build();
/// assert_eq!(custom.group(), " ");
/// ```
#[derive(Debug, Clone, Builder)]
#[builder(on(String, into))]
pub struct LocaleProvider {
    /// BCP-47 identifier this provider renders for.
    #[builder(default = locale!("und"))]
    id: Locale,

    /// Decimal separator for fixed-point and scientific output.
    #[builder(default = ".".to_string())]
    decimal: String,

    /// Digit-group separator for grouped numeric output.
    #[builder(default = ",".to_string())]
    group: String,

    /// Suffix appended by percent specs.
    #[builder(default = "%".to_string())]
    percent: String,
}

impl Default for LocaleProvider {
    fn default() -> Self {
        LocaleProvider::invariant()
    }
}

impl LocaleProvider {
    /// The invariant provider: `und` locale, `.` decimal, `,` grouping, `%`.
    pub fn invariant() -> Self {
        LocaleProvider::builder().build()
    }

    /// Build a provider for a BCP-47 tag.
    ///
    /// Returns `None` when the tag does not parse. Languages without built-in
    /// conventions get the invariant separators under their own id.
    pub fn for_tag(tag: &str) -> Option<Self> {
        let id: Locale = tag.parse().ok()?;
        let (decimal, group, percent) = conventions(id.id.language.as_str());
        Some(
            LocaleProvider::builder()
                .id(id)
                .decimal(decimal)
                .group(group)
                .percent(percent)
                .build(),
        )
    }

    /// The locale identifier this provider renders for.
    pub fn id(&self) -> &Locale {
        &self.id
    }

    /// The decimal separator.
    pub fn decimal(&self) -> &str {
        &self.decimal
    }

    /// The digit-group separator.
    pub fn group(&self) -> &str {
        &self.group
    }

    /// The percent suffix.
    pub fn percent(&self) -> &str {
        &self.percent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invariant_conventions() {
        let provider = LocaleProvider::invariant();
        assert_eq!(provider.decimal(), ".");
        assert_eq!(provider.group(), ",");
        assert_eq!(provider.percent(), "%");
        assert_eq!(provider.id().to_string(), "und");
    }

    #[test]
    fn known_language_conventions_ignore_the_region() {
        let austrian = LocaleProvider::for_tag("de-AT").unwrap();
        assert_eq!(austrian.decimal(), ",");
        assert_eq!(austrian.id().to_string(), "de-AT");
    }

    #[test]
    fn unknown_language_falls_back_to_invariant_separators() {
        let icelandic = LocaleProvider::for_tag("is").unwrap();
        assert_eq!(icelandic.decimal(), ".");
        assert_eq!(icelandic.id().to_string(), "is");
    }

    #[test]
    fn malformed_tags_are_rejected() {
        assert!(LocaleProvider::for_tag("not a tag").is_none());
    }

    #[test]
    fn french_grouping_uses_narrow_spaces() {
        let french = LocaleProvider::for_tag("fr").unwrap();
        assert_eq!(french.decimal(), ",");
        assert_eq!(french.group(), "\u{202f}");
        assert_eq!(french.percent(), "\u{a0}%");
    }
}
