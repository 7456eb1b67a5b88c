//! Process-wide default locale provider.
//!
//! [`crate::format`] renders with this provider when the caller passes none.
//! It starts as [`LocaleProvider::invariant`] and can be replaced for the
//! whole process.

use std::sync::{LazyLock, RwLock};

use crate::renderer::LocaleProvider;

static AMBIENT_PROVIDER: LazyLock<RwLock<LocaleProvider>> =
    LazyLock::new(|| RwLock::new(LocaleProvider::invariant()));

/// Provides read access to the ambient provider.
pub fn with_ambient<T>(f: impl FnOnce(&LocaleProvider) -> T) -> T {
    let guard = AMBIENT_PROVIDER
        .read()
        .expect("ambient provider lock poisoned");
    f(&guard)
}

/// Replaces the ambient provider for the whole process.
pub fn set_ambient(provider: LocaleProvider) {
    let mut guard = AMBIENT_PROVIDER
        .write()
        .expect("ambient provider lock poisoned");
    *guard = provider;
}

/// Returns a copy of the current ambient provider.
pub fn ambient() -> LocaleProvider {
    with_ambient(LocaleProvider::clone)
}
