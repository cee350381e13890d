//! Printing Module
//!
//! Derives kitchen tickets and receipts from order state and queues them
//! for the printer agent. The engine's contract ends at a `queued` job
//! with a correct payload; transmission and the later status transitions
//! belong to the agent.

pub mod composer;
pub mod dispatcher;

pub use dispatcher::{DispatchError, DispatchOutcome, PrintJobDispatcher};
