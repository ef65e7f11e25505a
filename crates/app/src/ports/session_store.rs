//! Session store port: read-only access to the persisted login state.

/// Key/value storage written by the login flow and read by the dashboard.
///
/// The browser adapter reads `localStorage`; tests use a map.
pub trait SessionStore {
    /// Value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;
}
