//! API Route Modules
//!
//! # Structure
//!
//! - [`health`] - liveness check
//! - [`menu`] - menu catalog read surface
//! - [`tables`] - dining table management
//! - [`orders`] - order lifecycle operations
//! - [`payments`] - settlement
//! - [`printers`] - printer devices and role mapping
//! - [`print_jobs`] - queued print job listing

pub mod health;
pub mod menu;
pub mod orders;
pub mod payments;
pub mod print_jobs;
pub mod printers;
pub mod tables;

// Re-export common types for handlers
pub use crate::utils::{AppResponse, AppResult};
