//! Discord interaction handlers
//!
//! This module provides handlers for Discord interactions such as autocomplete.

/// Autocomplete handlers for office names, item models, and enum choices
pub mod autocomplete;
