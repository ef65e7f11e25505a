//! # schooldesk-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the compiled dashboard (`index.html`, wasm, css) from an assets
//!   directory, falling back to `index.html` so client-side routes resolve.
//! - Forward every `/api/*` request to the school backend, so the dashboard
//!   can talk to a same-origin base address.
//! - Expose `/health` for process supervisors.
//!
//! ## Dependency rule
//! Depends on `schooldesk-domain` only for the `{ message }` error body shape.
//! No dashboard logic lives here.

pub mod error;
pub mod proxy;
pub mod router;
pub mod state;
