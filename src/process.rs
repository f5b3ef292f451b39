//! Optional adapter between an [`EnvStore`] and the real process environment.
//!
//! The store itself never aliases the process environment table; callers that
//! want that integration go through this module explicitly.

use crate::store::EnvStore;

/// Capture the current process environment into an isolated store.
///
/// Non-UTF-8 keys or values are converted lossily.
pub fn snapshot() -> EnvStore {
    let mut store = EnvStore::new();
    for (key, value) in std::env::vars_os() {
        store.set(
            key.to_string_lossy().into_owned(),
            value.to_string_lossy().into_owned(),
        );
    }
    store
}

/// Write every entry of `store` into the process environment.
///
/// This goes through [`std::env::set_var`], which mutates global process
/// state.
///
/// # Safety
///
/// The caller must ensure no other threads concurrently read or write the
/// process environment for the duration of the call.
pub unsafe fn export(store: &EnvStore) {
    for (key, value) in store.iter() {
        unsafe { std::env::set_var(key, value) };
    }
}
