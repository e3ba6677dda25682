//! Browser `localStorage` access for the theme preference.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best effort. Private browsing or disabled storage reads
//! as "nothing stored" and writes are dropped, so the page still themes for
//! the current view.

use web_sys::Storage;

fn local_storage() -> Option<Storage> {
    let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
    if storage.is_none() {
        log::debug!("localStorage unavailable");
    }
    storage
}

/// Read a string value for `key`.
pub fn load(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok().flatten()
}

/// Write a string value for `key`.
pub fn save(key: &str, value: &str) {
    let Some(storage) = local_storage() else {
        return;
    };
    if storage.set_item(key, value).is_err() {
        log::debug!("localStorage write for {key:?} rejected");
    }
}
