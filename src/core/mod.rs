//! Core business logic - framework-agnostic stock, catalog, and reporting operations.
//!
//! Nothing in here knows about Discord. The bot layer calls these functions and
//! formats what they return.

/// Per-item stock balances derived from the movement ledger
pub mod balance;
/// Cartridge catalog operations
pub mod cartridge;
/// Typed references to stocked items
pub mod item;
/// Listing tables and the generic table renderer
pub mod listing;
/// Validated recording of stock movements
pub mod movement;
/// Office catalog operations and printer presence
pub mod office;
/// Printer catalog operations and cartridge compatibility
pub mod printer;
/// Stock summary and movement log
pub mod report;
/// Admission rules for proposed movements
pub mod validation;
