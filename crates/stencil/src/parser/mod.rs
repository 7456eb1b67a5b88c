//! Template tokenizing and delimiter classification.
//!
//! Public so external tooling can enumerate a template's tokens without
//! rendering it.

mod classify;
mod token;

pub use classify::{Disposition, classify, retained_run, substituted_run};
pub use token::{TokenMatch, Tokens, scan};

pub(crate) use token::collapse_doubled;
