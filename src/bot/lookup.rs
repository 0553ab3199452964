//! Resolves the names users type into catalog rows.
//!
//! Autocomplete offers office names and model names, so those are what arrive in
//! command arguments. Any of them can also be given as `#<id>`, which disambiguates
//! offices sharing a name.

use crate::{
    core::{cartridge, office, printer},
    entities::{
        cartridge as cartridge_entity, office as office_entity, printer as printer_entity,
    },
    errors::{Error, Result},
};
use sea_orm::DatabaseConnection;

fn unknown(what: &str, input: &str) -> Error {
    Error::InvalidInput {
        message: format!("Unknown {what} '{}'", input.trim()),
    }
}

/// The ID in a `#<id>` reference, if `input` is one.
fn parse_id_reference(input: &str) -> Option<i64> {
    input.trim().strip_prefix('#')?.parse().ok()
}

/// Finds an office by `#<id>` or by name.
///
/// # Errors
/// Returns `InvalidInput` if nothing matches, or a database error.
pub async fn resolve_office(db: &DatabaseConnection, input: &str) -> Result<office_entity::Model> {
    let found = match parse_id_reference(input) {
        Some(id) => office::get_office_by_id(db, id).await?,
        None => office::get_office_by_name(db, input).await?,
    };
    found.ok_or_else(|| unknown("office", input))
}

/// Finds a cartridge by `#<id>` or by model name.
///
/// # Errors
/// Returns `InvalidInput` if nothing matches, or a database error.
pub async fn resolve_cartridge(
    db: &DatabaseConnection,
    input: &str,
) -> Result<cartridge_entity::Model> {
    let found = match parse_id_reference(input) {
        Some(id) => cartridge::get_cartridge_by_id(db, id).await?,
        None => cartridge::get_cartridge_by_model(db, input).await?,
    };
    found.ok_or_else(|| unknown("cartridge", input))
}

/// Finds a printer by `#<id>` or by model name.
///
/// # Errors
/// Returns `InvalidInput` if nothing matches, or a database error.
pub async fn resolve_printer(
    db: &DatabaseConnection,
    input: &str,
) -> Result<printer_entity::Model> {
    let found = match parse_id_reference(input) {
        Some(id) => printer::get_printer_by_id(db, id).await?,
        None => printer::get_printer_by_model(db, input).await?,
    };
    found.ok_or_else(|| unknown("printer", input))
}

/// Splits a comma-separated list of names, dropping empty entries.
#[must_use]
pub fn split_names(input: &str) -> Vec<&str> {
    input
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .collect()
}
