//! Table Allocation Module
//!
//! Occupancy transitions driven by the order lifecycle. Manual status
//! edits (staff marking a table cleaned or reserved) live on the CRUD
//! surface and go through the same transition function.

pub mod allocator;

pub use allocator::{AllocError, occupy, release};
