pub mod ambient;
pub mod parser;
pub mod renderer;
pub mod types;

pub use parser::{Disposition, TokenMatch, Tokens, classify, retained_run, scan, substituted_run};
pub use renderer::{
    FormatTemplate, LocaleProvider, RenderError, compute_suggestions, format, format_with,
    render_value, resolve,
};
pub use types::{Field, Record, Schema, Value};

// Re-export the Record derive macro
pub use stencil_macros::Record;

/// Creates a `Value::Map` from key-value pairs.
///
/// Values are automatically converted via `Into<Value>`, so you can pass
/// integers, floats, strings, timestamps, or nested `props!` maps directly.
///
/// # Example
///
/// ```
/// use stencil::props;
///
/// let source = props! { "Name" => "Ahmad", "Age" => 30 };
/// let map = source.as_map().unwrap();
/// assert_eq!(map["Name"].as_string(), Some("Ahmad"));
/// assert_eq!(map["Age"].as_number(), Some(30));
/// ```
#[macro_export]
macro_rules! props {
    {} => {
        $crate::Value::Map(::std::collections::HashMap::new())
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = ::std::collections::HashMap::<::std::string::String, $crate::Value>::new();
            $(
                map.insert($key.to_string(), ::std::convert::Into::<$crate::Value>::into($value));
            )+
            $crate::Value::Map(map)
        }
    };
}
