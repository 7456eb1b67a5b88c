//! Rendering: path resolution, value formatting, and the substitution pass.

mod error;
mod format;
mod locale;
mod render;
mod resolve;

pub use error::{RenderError, compute_suggestions};
pub use format::render_value;
pub use locale::LocaleProvider;
pub use render::{FormatTemplate, format, format_with};
pub use resolve::resolve;
