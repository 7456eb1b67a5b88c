//! Tests for format specs, locale providers, and the ambient provider.

use chrono::{TimeZone, Utc};
use stencil::{LocaleProvider, RenderError, ambient, format, format_with, props};

fn item(value: impl Into<stencil::Value>) -> stencil::Value {
    props! { "Item" => value }
}

#[test]
fn hexadecimal_specs_apply_to_numbers() {
    let invariant = LocaleProvider::invariant();

    assert_eq!(
        format_with("{Item:x}", &item(255), &invariant).unwrap(),
        "ff"
    );
    assert_eq!(
        format_with("{Item:X4}", &item(10), &invariant).unwrap(),
        "000A"
    );
}

#[test]
fn decimal_width_pads_the_magnitude() {
    let invariant = LocaleProvider::invariant();

    assert_eq!(
        format_with("{Item:D5}", &item(42), &invariant).unwrap(),
        "00042"
    );
    assert_eq!(
        format_with("{Item:D4}", &item(-42), &invariant).unwrap(),
        "-0042"
    );
    assert_eq!(format_with("{Item:d}", &item(42), &invariant).unwrap(), "42");
}

#[test]
fn fixed_point_uses_the_provider_decimal_separator() {
    let invariant = LocaleProvider::invariant();
    let german = LocaleProvider::for_tag("de").unwrap();

    assert_eq!(
        format_with("{Item:F1}", &item(1234567.89), &invariant).unwrap(),
        "1234567.9"
    );
    assert_eq!(
        format_with("{Item:F1}", &item(1234567.89), &german).unwrap(),
        "1234567,9"
    );
}

#[test]
fn grouped_specs_use_the_provider_group_separator() {
    let invariant = LocaleProvider::invariant();
    let german = LocaleProvider::for_tag("de").unwrap();

    assert_eq!(
        format_with("{Item:N2}", &item(1234567.891), &invariant).unwrap(),
        "1,234,567.89"
    );
    assert_eq!(
        format_with("{Item:N2}", &item(1234567.891), &german).unwrap(),
        "1.234.567,89"
    );
    assert_eq!(
        format_with("{Item:N0}", &item(1234567i64), &invariant).unwrap(),
        "1,234,567"
    );
}

#[test]
fn scientific_specs_render_rust_style_exponents() {
    let invariant = LocaleProvider::invariant();

    assert_eq!(
        format_with("{Item:e2}", &item(1234.5678), &invariant).unwrap(),
        "1.23e3"
    );
    assert_eq!(
        format_with("{Item:E2}", &item(1234.5678), &invariant).unwrap(),
        "1.23E3"
    );
}

#[test]
fn percent_specs_scale_and_suffix() {
    let invariant = LocaleProvider::invariant();
    let french = LocaleProvider::for_tag("fr").unwrap();

    assert_eq!(
        format_with("{Item:P1}", &item(0.125), &invariant).unwrap(),
        "12.5%"
    );
    assert_eq!(
        format_with("{Item:P1}", &item(0.125), &french).unwrap(),
        "12,5\u{a0}%"
    );
}

#[test]
fn values_without_specs_use_default_conversion() {
    let source = props! {
        "Count" => 42,
        "Ratio" => 1234.56789,
        "Flag" => true,
    };

    assert_eq!(
        format("{Count} {Ratio} {Flag}", &source).unwrap(),
        "42 1234.56789 true"
    );
}

#[test]
fn timestamps_render_with_strftime_patterns() {
    let moment = Utc.with_ymd_and_hms(2024, 1, 29, 12, 30, 45).unwrap();
    let invariant = LocaleProvider::invariant();

    assert_eq!(
        format_with("{Item:%d/%m/%Y}", &item(moment), &invariant).unwrap(),
        "29/01/2024"
    );
    assert_eq!(
        format_with("{Item:%H·%M}", &item(moment), &invariant).unwrap(),
        "12·30"
    );
    // A colon inside the pattern stays in the spec capture; the token only
    // closes at the delimiter run.
    assert_eq!(
        format_with("{Item:%H:%M}", &item(moment), &invariant).unwrap(),
        "12:30"
    );
}

#[test]
fn timestamp_shorthands_cover_date_time_and_full() {
    let moment = Utc.with_ymd_and_hms(2024, 1, 29, 12, 30, 45).unwrap();
    let invariant = LocaleProvider::invariant();

    assert_eq!(
        format_with("{Item:d}", &item(moment), &invariant).unwrap(),
        "2024-01-29"
    );
    assert_eq!(
        format_with("{Item:t}", &item(moment), &invariant).unwrap(),
        "12:30:45"
    );
    assert_eq!(
        format_with("{Item:f}", &item(moment), &invariant).unwrap(),
        "2024-01-29 12:30:45"
    );
}

#[test]
fn timestamp_default_conversion_is_utc_display() {
    let moment = Utc.with_ymd_and_hms(2024, 1, 29, 12, 30, 45).unwrap();

    assert_eq!(
        format("{Item}", &item(moment)).unwrap(),
        "2024-01-29 12:30:45 UTC"
    );
}

#[test]
fn incompatible_pairings_are_format_spec_errors() {
    let invariant = LocaleProvider::invariant();

    let cases: Vec<(&str, stencil::Value)> = vec![
        ("{Item:N}", item("text")),
        ("{Item:d}", item(true)),
        ("{Item:x}", item(1.5)),
        ("{Item:z}", item(42)),
        ("{Item:N}", item(props! { "a" => 1 })),
    ];

    for (template, source) in cases {
        let err = format_with(template, &source, &invariant).unwrap_err();
        assert!(
            matches!(err, RenderError::FormatSpec { .. }),
            "expected FormatSpec for {template}, got: {err:?}"
        );
    }
}

#[test]
fn format_spec_error_names_the_value_kind() {
    let invariant = LocaleProvider::invariant();

    let err = format_with("{Item:N}", &item("text"), &invariant).unwrap_err();

    assert_eq!(
        err.to_string(),
        "format spec 'N' is not supported for String value"
    );
}

#[test]
fn malformed_specs_are_rejected() {
    let invariant = LocaleProvider::invariant();

    for template in ["{Item:X4x}", "{Item:4X}"] {
        let err = format_with(template, &item(42), &invariant).unwrap_err();
        assert!(matches!(err, RenderError::FormatSpec { .. }), "{template}");
    }
}

#[test]
fn invalid_strftime_patterns_are_rejected() {
    let moment = Utc.with_ymd_and_hms(2024, 1, 29, 12, 30, 45).unwrap();
    let invariant = LocaleProvider::invariant();

    let err = format_with("{Item:%!}", &item(moment), &invariant).unwrap_err();

    assert!(matches!(err, RenderError::FormatSpec { .. }), "{err:?}");
}

#[test]
fn ambient_provider_backs_parameterless_format() {
    // Runs as a single test to keep the process-wide provider swap atomic
    // with respect to the rest of the suite; no other test renders a
    // locale-sensitive spec through the ambient provider.
    ambient::set_ambient(LocaleProvider::for_tag("de").unwrap());
    assert_eq!(ambient::ambient().id().to_string(), "de");
    assert_eq!(format("{Item:N0}", &item(1234.56)).unwrap(), "1.235");

    ambient::set_ambient(LocaleProvider::invariant());
    assert_eq!(format("{Item:N0}", &item(1234.56)).unwrap(), "1,235");
}
