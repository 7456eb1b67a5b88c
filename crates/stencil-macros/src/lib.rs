use proc_macro::TokenStream;

mod record;

/// Derives structural member access for a struct with named fields.
///
/// Generates implementations of `stencil::Schema` (a static field listing
/// whose accessors clone each field into a `stencil::Value`) and
/// `stencil::Record` (name-based lookup through the process-wide accessor
/// table).
///
/// # Field attributes
///
/// - `#[record(rename = "Name")]` — member name used in property paths
///   (defaults to the field identifier)
/// - `#[record(nested)]` — the field is itself a `Record` (requires `Clone`)
///   and resolves as a nested scope
/// - `#[record(skip)]` — the field is not exposed as a member
///
/// # Example
///
/// ```ignore
/// use stencil::Record;
///
/// #[derive(Clone, Record)]
/// struct Person {
///     #[record(rename = "Name")]
///     name: String,
///     #[record(nested, rename = "Address")]
///     address: Address,
/// }
/// ```
#[proc_macro_derive(Record, attributes(record))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as syn::DeriveInput);
    record::record_derive_impl(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
