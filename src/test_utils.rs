//! Shared test utilities for the stock tracker.
//!
//! This module provides common helper functions for setting up test databases
//! and creating catalog entries and movements with sensible defaults.

use crate::{
    core::{cartridge, item::ItemRef, office, printer, validation::StockPolicy},
    entities::{self, Color, Direction},
    errors::Result,
};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a test cartridge with sensible defaults.
///
/// # Defaults
/// * `color`: Black
pub async fn create_test_cartridge(
    db: &DatabaseConnection,
    model: &str,
) -> Result<entities::cartridge::Model> {
    cartridge::create_cartridge(db, model.to_string(), Color::Black).await
}

/// Creates a test printer accepting the given cartridges.
///
/// # Defaults
/// * `brand`: "HP"
pub async fn create_test_printer(
    db: &DatabaseConnection,
    model: &str,
    cartridge_ids: &[i64],
) -> Result<entities::printer::Model> {
    printer::create_printer(db, "HP".to_string(), model.to_string(), cartridge_ids).await
}

/// Creates a test office with the given printers located there.
///
/// # Defaults
/// * `place`: "Main building"
pub async fn create_test_office(
    db: &DatabaseConnection,
    name: &str,
    printer_ids: &[i64],
) -> Result<entities::office::Model> {
    office::create_office(db, name.to_string(), "Main building".to_string(), printer_ids).await
}

/// Inserts a movement directly, bypassing the admission rules.
///
/// Use this to arrange ledger state (including states the rules would refuse,
/// such as negative balances).
///
/// # Defaults
/// * `timestamp`: now
/// * `user_id`: `"test_user"`
pub async fn insert_movement(
    db: &DatabaseConnection,
    office_id: i64,
    item: ItemRef,
    direction: Direction,
    amount: i64,
) -> Result<entities::stock_movement::Model> {
    entities::stock_movement::ActiveModel {
        timestamp: Set(chrono::Utc::now()),
        office_id: Set(office_id),
        item_kind: Set(item.kind),
        item_id: Set(item.id),
        direction: Set(direction),
        amount: Set(amount),
        user_id: Set("test_user".to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// A small catalog most stock tests start from.
///
/// * `central` - "Warehouse" in the "Basement", no printers
/// * `office` - "Accounting", where `printer` is located
/// * `printer` - "HP M477", accepts `cartridge`
/// * `other_printer` - "HP P1102", accepts `other_cartridge`, not placed anywhere
/// * `cartridge` - "CF410A"
/// * `other_cartridge` - "CE285A"
pub struct StockFixture {
    /// In-memory database holding the catalog
    pub db: DatabaseConnection,
    /// The central office receiving stock
    pub central: entities::office::Model,
    /// An ordinary office with `printer`
    pub office: entities::office::Model,
    /// Cartridge accepted by `printer`
    pub cartridge: entities::cartridge::Model,
    /// Cartridge accepted only by `other_printer`
    pub other_cartridge: entities::cartridge::Model,
    /// Printer located at `office`
    pub printer: entities::printer::Model,
    /// Printer not located at any office
    pub other_printer: entities::printer::Model,
}

impl StockFixture {
    /// Builds the fixture in a fresh database.
    pub async fn new() -> Result<Self> {
        let db = setup_test_db().await?;

        // The warehouse has no printers, so it cannot go through create_office
        let central = entities::office::ActiveModel {
            name: Set("Warehouse".to_string()),
            place: Set("Basement".to_string()),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        let cartridge = create_test_cartridge(&db, "CF410A").await?;
        let other_cartridge = create_test_cartridge(&db, "CE285A").await?;
        let printer = create_test_printer(&db, "M477", &[cartridge.id]).await?;
        let other_printer = create_test_printer(&db, "P1102", &[other_cartridge.id]).await?;
        let office = create_test_office(&db, "Accounting", &[printer.id]).await?;

        Ok(Self {
            db,
            central,
            office,
            cartridge,
            other_cartridge,
            printer,
            other_printer,
        })
    }

    /// Policy with the fixture's warehouse as the central office.
    #[must_use]
    pub const fn policy(&self) -> StockPolicy {
        StockPolicy {
            central_office_id: self.central.id,
        }
    }
}
