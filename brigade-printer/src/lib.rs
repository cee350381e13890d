//! # brigade-printer
//!
//! ESC/POS payload encoding - low-level control-sequence building only.
//!
//! ## Scope
//!
//! This crate handles HOW a print payload is encoded:
//! - ESC/POS control-sequence building
//! - The vendor-neutral ticket envelope (initialize prefix, cut suffix)
//!
//! Business logic (WHAT to print) stays in application code, and actual
//! transmission to a physical or virtual device belongs to the printer
//! agent, not this crate.
//!
//! ## Example
//!
//! ```
//! use brigade_printer::EscPosDocument;
//!
//! let mut doc = EscPosDocument::new();
//! doc.init();
//! doc.line("KITCHEN TICKET");
//! doc.line("Table: T1");
//! doc.feed(2);
//! doc.cut();
//! let payload = doc.into_string();
//! assert!(payload.starts_with("\x1b@"));
//! ```

mod escpos;

// Re-exports
pub use escpos::{EscPosDocument, wrap_text};
