//! Brigade Server - restaurant point-of-sale backend
//!
//! # Architecture
//!
//! The core of the service is the order lifecycle and billing engine:
//!
//! - **Order ledger** (`orders`): the order/item state machine and every
//!   order mutation, each in a single serialized transaction
//! - **Pricing** (`pricing`): pure recomputation of the financial block
//! - **Table allocation** (`tables`): occupancy coupled to order events
//! - **Payments** (`payments`): settlement and change computation
//! - **Printing** (`printing`): kitchen-ticket/receipt rendering and
//!   print-job dispatch
//! - **HTTP API** (`api`): RESTful surface over the above
//!
//! # Module structure
//!
//! ```text
//! brigade-server/src/
//! ├── core/          # Config, state, HTTP server
//! ├── api/           # Routers and handlers
//! ├── db/            # Pool, migrations, models, repositories
//! ├── orders/        # Order ledger and money helpers
//! ├── payments/      # Payment processor
//! ├── pricing/       # Totals calculator
//! ├── printing/      # Ticket composer and print dispatcher
//! ├── tables/        # Table allocator
//! └── utils/         # Errors, logging
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod orders;
pub mod payments;
pub mod pricing;
pub mod printing;
pub mod tables;
pub mod utils;

// Re-export public types
pub use core::{Config, Server, ServerState};
pub use orders::{LedgerError, OrderLedger};
pub use payments::PaymentProcessor;
pub use printing::PrintJobDispatcher;
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Load `.env` and initialize logging. Call once at startup.
pub fn setup_environment() {
    dotenv::dotenv().ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(None, log_dir.as_deref());
}
