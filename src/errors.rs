//! Unified error type for the stock tracker.
//!
//! Every fallible function in the crate returns [`Result`]. Validation rejections are
//! ordinary values of this enum so the bot layer can show them to the user, while
//! database and framework failures bubble up to the command error hook.

use crate::core::validation::Rejection;
use crate::entities::ItemKind;
use thiserror::Error;

/// Error type shared by the core, config, and bot layers
#[derive(Debug, Error)]
pub enum Error {
    /// Bad or unreadable configuration
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// Any failure reported by the database layer
    #[error("Database error: {0}")]
    Database(String),

    /// Missing or malformed environment variable
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// Movement amounts must be whole numbers within the accepted range
    #[error(
        "Invalid amount: {amount} (must be between 1 and {max})",
        max = crate::core::validation::MAX_MOVEMENT_AMOUNT
    )]
    InvalidAmount {
        /// The rejected amount
        amount: i64,
    },

    /// Direction input other than `in` or `out`
    #[error("Invalid direction '{input}': expected 'in' or 'out'")]
    InvalidDirection {
        /// The raw input
        input: String,
    },

    /// Item kind input other than `cartridge` or `printer`
    #[error("Invalid item kind '{input}': expected 'cartridge' or 'printer'")]
    InvalidItemKind {
        /// The raw input
        input: String,
    },

    /// Unknown cartridge color
    #[error("Invalid color '{input}': expected Cyan, Magenta, Yellow or Black")]
    InvalidColor {
        /// The raw input
        input: String,
    },

    /// Unknown listing name
    #[error("Invalid listing '{input}': expected cartridges, printers, offices or movements")]
    InvalidListingKind {
        /// The raw input
        input: String,
    },

    /// Catalog input that fails a shape check (empty names, too many cartridges, ...)
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// What was wrong with the input
        message: String,
    },

    /// A referenced office does not exist
    #[error("Office {id} not found")]
    OfficeNotFound {
        /// The unresolved office ID
        id: i64,
    },

    /// A referenced cartridge or printer does not exist
    #[error("{kind} {id} not found")]
    ItemNotFound {
        /// Which table was searched
        kind: ItemKind,
        /// The unresolved item ID
        id: i64,
    },

    /// Summing an item's movements left the `i64` range
    #[error("Balance of {item} overflowed")]
    BalanceOverflow {
        /// The item whose ledger could not be summed
        item: String,
    },

    /// The movement failed an admission rule and was not recorded
    #[error("{reason}")]
    ValidationRejected {
        /// The rule that failed
        reason: Rejection,
    },

    /// Failure while writing a reply
    #[error("Formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),

    /// Serenity/Poise framework error
    #[error("Serenity/Poise framework error: {0}")]
    Framework(Box<poise::serenity_prelude::Error>),
}

impl Error {
    /// Whether the error came from bad user input rather than a system failure.
    ///
    /// Commands answer these with the error text instead of escalating them.
    #[must_use]
    pub const fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Self::InvalidAmount { .. }
                | Self::InvalidDirection { .. }
                | Self::InvalidItemKind { .. }
                | Self::InvalidColor { .. }
                | Self::InvalidListingKind { .. }
                | Self::InvalidInput { .. }
                | Self::OfficeNotFound { .. }
                | Self::ItemNotFound { .. }
                | Self::ValidationRejected { .. }
        )
    }
}

impl From<sea_orm::DbErr> for Error {
    fn from(value: sea_orm::DbErr) -> Self {
        Self::Database(value.to_string())
    }
}

impl From<poise::serenity_prelude::Error> for Error {
    fn from(value: poise::serenity_prelude::Error) -> Self {
        Self::Framework(Box::new(value))
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
