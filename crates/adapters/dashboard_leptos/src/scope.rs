//! View-lifetime cancellation for Leptos components.

use leptos::prelude::*;
use schooldesk_app::cancel::{CancelScope, CancelToken};

/// Open a cancel scope for the current component.
///
/// The scope fires when the component is cleaned up, abandoning every
/// request started with the returned token.
pub fn use_cancel_token() -> CancelToken {
    let scope = CancelScope::new();
    let token = scope.token();
    on_cleanup(move || scope.cancel());
    token
}
