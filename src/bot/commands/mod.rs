//! Discord command implementations organized by category.

#![allow(clippy::too_long_first_doc_paragraph)]

/// General utility commands
pub mod general;

/// Catalog and ledger listings
pub mod listing;

/// Catalog management commands
pub mod manage;

/// Stock movement, summary, and history commands
pub mod stock;

// Export commands
pub use general::*;
pub use listing::*;
pub use manage::*;
pub use stock::*;
