//! Printer business logic - catalog entry, lookup, and cartridge compatibility.
//!
//! A printer is registered together with the cartridges it accepts (one to four of
//! them). The printer row and its compatibility rows are written in one transaction.

use crate::{
    entities::{
        Cartridge, ItemKind, Printer, PrinterCartridge, cartridge, printer, printer_cartridge,
    },
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};

/// Most cartridges a single printer can be registered with.
pub const MAX_COMPATIBLE_CARTRIDGES: usize = 4;

/// Retrieves all printers, ordered by brand and then model.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_all_printers(db: &DatabaseConnection) -> Result<Vec<printer::Model>> {
    Printer::find()
        .order_by_asc(printer::Column::Brand)
        .order_by_asc(printer::Column::PrinterModel)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a printer by its unique ID.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_printer_by_id<C>(db: &C, printer_id: i64) -> Result<Option<printer::Model>>
where
    C: ConnectionTrait,
{
    Printer::find_by_id(printer_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Finds a printer by its model name, returning None if there is none.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_printer_by_model<C>(db: &C, model: &str) -> Result<Option<printer::Model>>
where
    C: ConnectionTrait,
{
    Printer::find()
        .filter(printer::Column::PrinterModel.eq(model.trim()))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Lists the cartridges a printer accepts, ordered by model.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_compatible_cartridges<C>(db: &C, printer_id: i64) -> Result<Vec<cartridge::Model>>
where
    C: ConnectionTrait,
{
    Cartridge::find()
        .inner_join(PrinterCartridge)
        .filter(printer_cartridge::Column::PrinterId.eq(printer_id))
        .order_by_asc(cartridge::Column::CartridgeModel)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Removes repeated IDs while keeping first-seen order.
pub(crate) fn dedup_ids(ids: &[i64]) -> Vec<i64> {
    let mut unique = Vec::with_capacity(ids.len());
    for id in ids {
        if !unique.contains(id) {
            unique.push(*id);
        }
    }
    unique
}

/// Registers a printer model together with the cartridges it accepts.
///
/// Brand and model are trimmed and must not be empty. `cartridge_ids` is
/// de-duplicated and must then name between one and four existing cartridges.
///
/// Inside an open transaction the writes go to a savepoint of it.
///
/// # Errors
/// Returns `InvalidInput` for bad names or cartridge counts, `ItemNotFound` for an
/// unknown cartridge, or a database error (including a duplicate model name).
pub async fn create_printer<C>(
    db: &C,
    brand: String,
    model: String,
    cartridge_ids: &[i64],
) -> Result<printer::Model>
where
    C: ConnectionTrait + TransactionTrait,
{
    let brand = brand.trim();
    let model = model.trim();
    if brand.is_empty() || model.is_empty() {
        return Err(Error::InvalidInput {
            message: "Printer brand and model cannot be empty".to_string(),
        });
    }

    let cartridge_ids = dedup_ids(cartridge_ids);
    if cartridge_ids.is_empty() || cartridge_ids.len() > MAX_COMPATIBLE_CARTRIDGES {
        return Err(Error::InvalidInput {
            message: format!(
                "A printer needs between 1 and {MAX_COMPATIBLE_CARTRIDGES} compatible \
                 cartridges, got {}",
                cartridge_ids.len()
            ),
        });
    }

    let txn = db.begin().await?;

    for &cartridge_id in &cartridge_ids {
        Cartridge::find_by_id(cartridge_id)
            .one(&txn)
            .await?
            .ok_or(Error::ItemNotFound {
                kind: ItemKind::Cartridge,
                id: cartridge_id,
            })?;
    }

    let printer = printer::ActiveModel {
        brand: Set(brand.to_string()),
        printer_model: Set(model.to_string()),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    let links = cartridge_ids
        .into_iter()
        .map(|cartridge_id| printer_cartridge::ActiveModel {
            printer_id: Set(printer.id),
            cartridge_id: Set(cartridge_id),
        });
    PrinterCartridge::insert_many(links).exec(&txn).await?;

    txn.commit().await?;
    Ok(printer)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[test]
    fn test_dedup_ids_keeps_order() {
        assert_eq!(dedup_ids(&[3, 1, 3, 2, 1]), vec![3, 1, 2]);
        assert!(dedup_ids(&[]).is_empty());
    }

    #[tokio::test]
    async fn test_create_printer_validation() -> Result<()> {
        let db = MockDatabase::new(DatabaseBackend::Sqlite).into_connection();

        let empty_brand = create_printer(&db, " ".to_string(), "M477".to_string(), &[1]).await;
        assert!(matches!(empty_brand, Err(Error::InvalidInput { .. })));

        let no_cartridges = create_printer(&db, "HP".to_string(), "M477".to_string(), &[]).await;
        assert!(matches!(no_cartridges, Err(Error::InvalidInput { .. })));

        let too_many =
            create_printer(&db, "HP".to_string(), "M477".to_string(), &[1, 2, 3, 4, 5]).await;
        assert!(matches!(too_many, Err(Error::InvalidInput { .. })));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_printer_with_compatibility() -> Result<()> {
        let db = setup_test_db().await?;
        let black = create_test_cartridge(&db, "CF410A").await?;
        let cyan = create_test_cartridge(&db, "CF411A").await?;
        create_test_cartridge(&db, "Q2612A").await?;

        // Duplicates collapse, so five entries naming two cartridges is fine
        let printer = create_printer(
            &db,
            "HP".to_string(),
            "Color LaserJet M477".to_string(),
            &[cyan.id, black.id, cyan.id, black.id, cyan.id],
        )
        .await?;
        assert_eq!(printer.label(), "HP Color LaserJet M477");

        let compatible = get_compatible_cartridges(&db, printer.id).await?;
        assert_eq!(compatible, vec![black, cyan]);

        Ok(())
    }

    #[tokio::test]
    async fn test_create_printer_unknown_cartridge_rolls_back() -> Result<()> {
        let db = setup_test_db().await?;
        let cartridge = create_test_cartridge(&db, "CF410A").await?;

        let ids = [cartridge.id, 99];
        let result = create_printer(&db, "HP".to_string(), "M477".to_string(), &ids).await;
        assert!(matches!(
            result,
            Err(Error::ItemNotFound {
                kind: ItemKind::Cartridge,
                id: 99
            })
        ));
        assert!(get_printer_by_model(&db, "M477").await?.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_get_printer_lookups() -> Result<()> {
        let db = setup_test_db().await?;
        let cartridge = create_test_cartridge(&db, "CE285A").await?;
        let printer = create_test_printer(&db, "P1102", &[cartridge.id]).await?;

        assert_eq!(get_printer_by_id(&db, printer.id).await?, Some(printer.clone()));
        assert_eq!(get_printer_by_model(&db, "P1102").await?, Some(printer.clone()));
        assert_eq!(get_all_printers(&db).await?, vec![printer]);

        Ok(())
    }
}
