pub mod record;
mod value;

pub use record::{Field, Record, Schema};
pub use value::Value;
