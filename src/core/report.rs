//! Report generation business logic.
//!
//! This module builds the stock summary (on-hand balance of every cartridge and
//! printer) and the resolved movement log. All functions are framework-agnostic and
//! return structured data that the listing tables and bot layer format.

use crate::{
    config::users,
    core::{balance, cartridge, item::ItemRef, movement, office, printer},
    entities::{Direction, ItemKind, office as office_entity},
    errors::{Error, Result},
};
use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use std::collections::HashMap;

/// Date format used for every timestamp shown to users.
pub const DATE_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

/// On-hand quantity of one item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockLine {
    /// The item
    pub item: ItemRef,
    /// Cartridge model, or printer brand and model
    pub label: String,
    /// Current balance
    pub balance: i64,
}

/// Balances of every registered item
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StockSummary {
    /// One line per cartridge, ordered by model
    pub cartridges: Vec<StockLine>,
    /// One line per printer, ordered by brand and model
    pub printers: Vec<StockLine>,
}

/// A movement with its references resolved for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovementRow {
    /// Movement ID
    pub id: i64,
    /// When it was recorded
    pub timestamp: DateTime<Utc>,
    /// In or out
    pub direction: Direction,
    /// Office name
    pub office_name: String,
    /// Office place
    pub office_place: String,
    /// Cartridge or printer
    pub item_kind: ItemKind,
    /// Cartridge model, or printer brand and model
    pub item_label: String,
    /// Units moved
    pub amount: i64,
    /// Staff nickname if configured, else the raw user ID
    pub actor: String,
}

/// Builds the stock summary: every cartridge and printer with its balance.
///
/// Items without movements are listed with a balance of 0.
///
/// # Errors
/// Returns an error if a database query fails.
pub async fn generate_stock_summary(db: &DatabaseConnection) -> Result<StockSummary> {
    let cartridge_balances = balance::compute_balances(db, ItemKind::Cartridge).await?;
    let printer_balances = balance::compute_balances(db, ItemKind::Printer).await?;

    let cartridges = cartridge::get_all_cartridges(db)
        .await?
        .into_iter()
        .map(|c| StockLine {
            item: ItemRef::cartridge(c.id),
            balance: cartridge_balances.get(&c.id).copied().unwrap_or(0),
            label: c.cartridge_model,
        })
        .collect();

    let printers = printer::get_all_printers(db)
        .await?
        .into_iter()
        .map(|p| StockLine {
            item: ItemRef::printer(p.id),
            balance: printer_balances.get(&p.id).copied().unwrap_or(0),
            label: p.label(),
        })
        .collect();

    Ok(StockSummary {
        cartridges,
        printers,
    })
}

/// Builds the movement log, newest first, with office and item names resolved.
///
/// # Arguments
/// * `db` - Database connection
/// * `kind` - Only include movements of this kind, or all if None
/// * `limit` - Maximum number of rows (default 10)
///
/// # Errors
/// Returns `OfficeNotFound` or `ItemNotFound` if a movement references a missing row,
/// or a database error.
pub async fn generate_movement_log(
    db: &DatabaseConnection,
    kind: Option<ItemKind>,
    limit: Option<u64>,
) -> Result<Vec<MovementRow>> {
    let movements = movement::get_recent_movements(db, kind, limit).await?;
    if movements.is_empty() {
        return Ok(Vec::new());
    }

    let offices: HashMap<i64, office_entity::Model> = office::get_all_offices(db)
        .await?
        .into_iter()
        .map(|o| (o.id, o))
        .collect();
    let mut labels: HashMap<ItemRef, String> = HashMap::new();
    for c in cartridge::get_all_cartridges(db).await? {
        labels.insert(ItemRef::cartridge(c.id), c.cartridge_model);
    }
    for p in printer::get_all_printers(db).await? {
        labels.insert(ItemRef::printer(p.id), p.label());
    }
    let nicknames = users::get_user_nicknames();

    movements
        .into_iter()
        .map(|m| {
            let office = offices
                .get(&m.office_id)
                .ok_or(Error::OfficeNotFound { id: m.office_id })?;
            let item = ItemRef {
                kind: m.item_kind,
                id: m.item_id,
            };
            let item_label = labels.get(&item).cloned().ok_or(Error::ItemNotFound {
                kind: item.kind,
                id: item.id,
            })?;
            let actor = nicknames.get(&m.user_id).cloned().unwrap_or(m.user_id);

            Ok(MovementRow {
                id: m.id,
                timestamp: m.timestamp,
                direction: m.direction,
                office_name: office.name.clone(),
                office_place: office.place.clone(),
                item_kind: m.item_kind,
                item_label,
                amount: m.amount,
                actor,
            })
        })
        .collect()
}

/// Formats a timestamp as `dd.mm.yyyy HH:MM:SS`.
#[must_use]
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format(DATE_FORMAT).to_string()
}

/// Formats a movement amount with its sign, like "+5" or "-2".
#[must_use]
pub fn format_movement_amount(direction: Direction, amount: i64) -> String {
    match direction {
        Direction::In => format!("+{amount}"),
        Direction::Out => format!("-{amount}"),
    }
}

/// Generates a summary line for a movement row.
#[must_use]
pub fn format_movement_summary(row: &MovementRow) -> String {
    format!(
        "{} | {} {} | {} ({}) | {}",
        format_timestamp(&row.timestamp),
        format_movement_amount(row.direction, row.amount),
        row.item_label,
        row.office_name,
        row.office_place,
        row.actor
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_timestamp() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 7, 9, 5, 1).single();
        assert_eq!(ts.map(|t| format_timestamp(&t)).as_deref(), Some("07.03.2024 09:05:01"));
    }

    #[test]
    fn test_format_movement_amount() {
        assert_eq!(format_movement_amount(Direction::In, 5), "+5");
        assert_eq!(format_movement_amount(Direction::Out, 12), "-12");
    }

    #[tokio::test]
    async fn test_generate_stock_summary() -> Result<()> {
        let fixture = StockFixture::new().await?;
        let db = &fixture.db;

        let cartridge = ItemRef::cartridge(fixture.cartridge.id);
        let printer = ItemRef::printer(fixture.printer.id);

        insert_movement(db, fixture.central.id, cartridge, Direction::In, 10).await?;
        insert_movement(db, fixture.office.id, cartridge, Direction::Out, 4).await?;
        insert_movement(db, fixture.central.id, printer, Direction::In, 2).await?;

        let summary = generate_stock_summary(db).await?;

        // CE285A sorts before CF410A and has no movements
        assert_eq!(
            summary.cartridges,
            vec![
                StockLine {
                    item: ItemRef::cartridge(fixture.other_cartridge.id),
                    label: "CE285A".to_string(),
                    balance: 0,
                },
                StockLine {
                    item: ItemRef::cartridge(fixture.cartridge.id),
                    label: "CF410A".to_string(),
                    balance: 6,
                },
            ]
        );
        assert_eq!(summary.printers.len(), 2);
        assert_eq!(summary.printers[0].label, "HP M477");
        assert_eq!(summary.printers[0].balance, 2);
        assert_eq!(summary.printers[1].balance, 0);

        Ok(())
    }

    #[tokio::test]
    async fn test_generate_movement_log() -> Result<()> {
        let fixture = StockFixture::new().await?;
        let db = &fixture.db;

        let cartridge = ItemRef::cartridge(fixture.cartridge.id);
        let printer = ItemRef::printer(fixture.printer.id);

        insert_movement(db, fixture.central.id, cartridge, Direction::In, 10).await?;
        insert_movement(db, fixture.office.id, printer, Direction::Out, 1).await?;

        let log = generate_movement_log(db, None, None).await?;
        assert_eq!(log.len(), 2);

        assert_eq!(log[0].direction, Direction::Out);
        assert_eq!(log[0].item_kind, ItemKind::Printer);
        assert_eq!(log[0].item_label, "HP M477");
        assert_eq!(log[0].office_name, "Accounting");
        assert_eq!(log[0].office_place, "Main building");

        assert_eq!(log[1].direction, Direction::In);
        assert_eq!(log[1].item_label, "CF410A");
        assert_eq!(log[1].office_name, "Warehouse");
        assert_eq!(log[1].amount, 10);

        let summary = format_movement_summary(&log[1]);
        assert!(summary.contains("+10 CF410A | Warehouse (Basement)"));

        let printers_only = generate_movement_log(db, Some(ItemKind::Printer), Some(5)).await?;
        assert_eq!(printers_only.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_generate_movement_log_empty() -> Result<()> {
        let db = setup_test_db().await?;
        assert!(generate_movement_log(&db, None, None).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_generate_movement_log_dangling_item() -> Result<()> {
        let fixture = StockFixture::new().await?;

        let dangling = ItemRef::cartridge(500);
        insert_movement(&fixture.db, fixture.central.id, dangling, Direction::In, 1).await?;

        let result = generate_movement_log(&fixture.db, None, None).await;
        assert!(matches!(
            result,
            Err(Error::ItemNotFound {
                kind: ItemKind::Cartridge,
                id: 500
            })
        ));

        Ok(())
    }
}
