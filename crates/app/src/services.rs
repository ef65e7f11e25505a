//! Application services: use-case orchestration over the ports.

pub mod result_form_service;
pub mod results_service;
pub mod roster_service;
pub mod session_service;
pub mod stats_service;
