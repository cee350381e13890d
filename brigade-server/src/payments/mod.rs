//! Payment Module
//!
//! Settlement: the only path that produces a Payment record and the only
//! writer of the order's `paid` transition.

pub mod processor;

pub use processor::PaymentProcessor;
