//! Utility Module
//!
//! - [`AppError`] / [`AppResponse`] - boundary error and response types
//! - [`logger`] - tracing setup

pub mod error;
pub mod logger;

pub use error::{AppError, AppResponse, AppResult};
pub use error::{ok, ok_with_message};
