//! Implementation of the `#[derive(Record)]` macro.

use proc_macro2::TokenStream;
use quote::quote;
use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Error, Fields, LitStr, Result};

/// Per-field `#[record(...)]` attributes.
struct RecordAttrs {
    rename: Option<String>,
    nested: bool,
    skip: bool,
}

fn parse_record_attrs(attrs: &[syn::Attribute]) -> Result<RecordAttrs> {
    let mut parsed = RecordAttrs {
        rename: None,
        nested: false,
        skip: false,
    };

    for attr in attrs {
        if !attr.path().is_ident("record") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                let value: LitStr = meta.value()?.parse()?;
                parsed.rename = Some(value.value());
                Ok(())
            } else if meta.path.is_ident("nested") {
                parsed.nested = true;
                Ok(())
            } else if meta.path.is_ident("skip") {
                parsed.skip = true;
                Ok(())
            } else {
                Err(meta.error("unsupported record attribute; expected rename, nested, or skip"))
            }
        })?;
    }

    Ok(parsed)
}

/// Main implementation of the Record derive macro.
pub fn record_derive_impl(input: DeriveInput) -> Result<TokenStream> {
    let struct_name = &input.ident;

    // Accessor tables are keyed by TypeId, so the type must be concrete
    if !input.generics.params.is_empty() {
        return Err(Error::new(
            input.generics.span(),
            "Record cannot be derived for generic types",
        ));
    }

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(Error::new(
                    input.span(),
                    "Record can only be derived for structs with named fields",
                ));
            }
        },
        _ => {
            return Err(Error::new(
                input.span(),
                "Record can only be derived for structs",
            ));
        }
    };

    let mut field_entries = Vec::new();

    for field in fields {
        let field_name = field
            .ident
            .as_ref()
            .ok_or_else(|| Error::new(field.span(), "expected named field"))?;

        let attrs = parse_record_attrs(&field.attrs)?;
        if attrs.skip {
            continue;
        }

        let member_name = attrs.rename.unwrap_or_else(|| field_name.to_string());

        let get_expr = if attrs.nested {
            quote! {
                |item: &#struct_name| ::stencil::Value::record(item.#field_name.clone())
            }
        } else {
            quote! {
                |item: &#struct_name| ::stencil::Value::from(item.#field_name.clone())
            }
        };

        field_entries.push(quote! {
            ::stencil::Field {
                name: #member_name,
                get: #get_expr,
            }
        });
    }

    let type_name = struct_name.to_string();

    let expanded = quote! {
        impl ::stencil::Schema for #struct_name {
            fn schema() -> &'static [::stencil::Field<Self>] {
                const FIELDS: &[::stencil::Field<#struct_name>] = &[
                    #(#field_entries),*
                ];
                FIELDS
            }
        }

        impl ::stencil::Record for #struct_name {
            fn type_name(&self) -> &'static str {
                #type_name
            }

            fn member(&self, name: &str) -> ::std::option::Option<::stencil::Value> {
                ::stencil::types::record::resolve_member(self, name)
            }

            fn member_names(&self) -> ::std::vec::Vec<&'static str> {
                ::stencil::types::record::member_names_of::<Self>()
            }
        }
    };

    Ok(expanded)
}
