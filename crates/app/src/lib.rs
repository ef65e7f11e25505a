//! # schooldesk-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `SchoolApi`: every backend endpoint the dashboard consumes
//!   - `SessionStore`: read-only access to the persisted login state
//! - Define **driving/inbound ports** as use-case structs:
//!   - `SessionService`: auth context and role routing, logout
//!   - `RosterService`: student/class/course/teacher lists, form options
//!   - `ResultFormService`: validate and submit a new result
//!   - `ResultsService`: list and delete results
//!   - `StatsService`: admin and teacher aggregate counts
//! - Provide **view lifetime infrastructure**: cancellation scopes and the
//!   fail-fast join used for a view's concurrent reads
//! - Turn outcomes into user-facing [`notice::Notice`]s
//!
//! ## Dependency rule
//! Depends on `schooldesk-domain` only (plus `tokio::sync` for the cancel
//! channel). Never imports adapter crates. Adapters depend on *this* crate,
//! not the reverse.

pub mod cancel;
pub mod join;
pub mod notice;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;
