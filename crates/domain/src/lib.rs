//! # schooldesk-domain
//!
//! Pure domain model for the schooldesk administration dashboard.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define the backend-owned **records** (students, classes, courses,
//!   teachers, admins, exam results) exactly as the REST backend ships them
//! - Define **marks** and **grades** (clamping, totals, pass/fail threshold)
//! - Define the **result form** (field state, local validation, request body)
//! - Define **payload schemas** for every consumed endpoint and decode them
//!   at the boundary
//! - Define **roles** and the authentication context handed to the shells
//! - Reshape aggregate counts into chart **series**
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod admin;
pub mod class;
pub mod course;
pub mod form;
pub mod marks;
pub mod payload;
pub mod reference;
pub mod result;
pub mod role;
pub mod stats;
pub mod student;
pub mod teacher;
