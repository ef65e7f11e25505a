//! `localStorage` implementation of the [`SessionStore`] port.

use schooldesk_app::ports::SessionStore;

/// Reads the login state the sign-in page left in `localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSessionStore;

impl SessionStore for BrowserSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|s| s.get_item(key).ok().flatten())
    }
}
