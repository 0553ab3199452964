//! Office business logic - catalog entry, lookup, and printer presence.
//!
//! An office is registered together with the printers located there. Which cartridges
//! may be handed out at an office follows from those printers' compatibility sets.

use crate::{
    core::{printer::dedup_ids, validation::PresentPrinter},
    entities::{
        ItemKind, Office, OfficePrinter, Printer, PrinterCartridge, office, office_printer, printer,
        printer_cartridge,
    },
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};
use std::collections::HashSet;

/// Retrieves all offices, ordered by name.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_all_offices(db: &DatabaseConnection) -> Result<Vec<office::Model>> {
    Office::find()
        .order_by_asc(office::Column::Name)
        .order_by_asc(office::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds an office by its unique ID.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_office_by_id<C>(db: &C, office_id: i64) -> Result<Option<office::Model>>
where
    C: ConnectionTrait,
{
    Office::find_by_id(office_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Finds the first office with the given name (lowest ID wins).
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_office_by_name<C>(db: &C, name: &str) -> Result<Option<office::Model>>
where
    C: ConnectionTrait,
{
    Office::find()
        .filter(office::Column::Name.eq(name.trim()))
        .order_by_asc(office::Column::Id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Lists the printers located at an office, ordered by brand and model.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_office_printers<C>(db: &C, office_id: i64) -> Result<Vec<printer::Model>>
where
    C: ConnectionTrait,
{
    Printer::find()
        .inner_join(OfficePrinter)
        .filter(office_printer::Column::OfficeId.eq(office_id))
        .order_by_asc(printer::Column::Brand)
        .order_by_asc(printer::Column::PrinterModel)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Loads the printers at an office together with the cartridges each accepts.
///
/// This is the relation data the cartridge withdrawal rule runs against.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_present_printers<C>(db: &C, office_id: i64) -> Result<Vec<PresentPrinter>>
where
    C: ConnectionTrait,
{
    let printer_ids: Vec<i64> = OfficePrinter::find()
        .filter(office_printer::Column::OfficeId.eq(office_id))
        .order_by_asc(office_printer::Column::PrinterId)
        .all(db)
        .await?
        .into_iter()
        .map(|row| row.printer_id)
        .collect();

    if printer_ids.is_empty() {
        return Ok(Vec::new());
    }

    let links = PrinterCartridge::find()
        .filter(printer_cartridge::Column::PrinterId.is_in(printer_ids.clone()))
        .all(db)
        .await?;

    let mut printers: Vec<PresentPrinter> = printer_ids
        .into_iter()
        .map(|printer_id| PresentPrinter {
            printer_id,
            cartridge_ids: HashSet::new(),
        })
        .collect();
    for link in links {
        if let Some(present) = printers.iter_mut().find(|p| p.printer_id == link.printer_id) {
            present.cartridge_ids.insert(link.cartridge_id);
        }
    }

    Ok(printers)
}

/// Registers an office together with the printers located there.
///
/// Name and place are trimmed and must not be empty. `printer_ids` is de-duplicated
/// and must name at least one existing printer.
///
/// Inside an open transaction the writes go to a savepoint of it.
///
/// # Errors
/// Returns `InvalidInput` for empty fields or an empty printer list, `ItemNotFound`
/// for an unknown printer, or a database error.
pub async fn create_office<C>(
    db: &C,
    name: String,
    place: String,
    printer_ids: &[i64],
) -> Result<office::Model>
where
    C: ConnectionTrait + TransactionTrait,
{
    let name = name.trim();
    let place = place.trim();
    if name.is_empty() || place.is_empty() {
        return Err(Error::InvalidInput {
            message: "Office name and place cannot be empty".to_string(),
        });
    }

    let printer_ids = dedup_ids(printer_ids);
    if printer_ids.is_empty() {
        return Err(Error::InvalidInput {
            message: "An office needs at least one printer".to_string(),
        });
    }

    let txn = db.begin().await?;

    for &printer_id in &printer_ids {
        Printer::find_by_id(printer_id)
            .one(&txn)
            .await?
            .ok_or(Error::ItemNotFound {
                kind: ItemKind::Printer,
                id: printer_id,
            })?;
    }

    let office = office::ActiveModel {
        name: Set(name.to_string()),
        place: Set(place.to_string()),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    let links = printer_ids
        .into_iter()
        .map(|printer_id| office_printer::ActiveModel {
            office_id: Set(office.id),
            printer_id: Set(printer_id),
        });
    OfficePrinter::insert_many(links).exec(&txn).await?;

    txn.commit().await?;
    Ok(office)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn test_create_office_validation() -> Result<()> {
        let db = MockDatabase::new(DatabaseBackend::Sqlite).into_connection();

        let no_place = create_office(&db, "Accounting".to_string(), String::new(), &[1]).await;
        assert!(matches!(no_place, Err(Error::InvalidInput { .. })));

        let no_printers =
            create_office(&db, "Accounting".to_string(), "2nd floor".to_string(), &[]).await;
        assert!(matches!(no_printers, Err(Error::InvalidInput { .. })));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_office_unknown_printer() -> Result<()> {
        let db = setup_test_db().await?;

        let result =
            create_office(&db, "Accounting".to_string(), "2nd floor".to_string(), &[5]).await;
        assert!(matches!(
            result,
            Err(Error::ItemNotFound {
                kind: ItemKind::Printer,
                id: 5
            })
        ));
        assert!(get_office_by_name(&db, "Accounting").await?.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_create_office_with_printers() -> Result<()> {
        let db = setup_test_db().await?;
        let cartridge = create_test_cartridge(&db, "CE285A").await?;
        let p1 = create_test_printer(&db, "P1102", &[cartridge.id]).await?;
        let p2 = create_test_printer(&db, "M125", &[cartridge.id]).await?;

        let office = create_office(
            &db,
            " Accounting ".to_string(),
            "2nd floor".to_string(),
            &[p1.id, p2.id, p1.id],
        )
        .await?;
        assert_eq!(office.name, "Accounting");
        assert_eq!(office.label(), "Accounting at 2nd floor");

        let printers = get_office_printers(&db, office.id).await?;
        assert_eq!(printers, vec![p2, p1]);

        assert_eq!(get_office_by_id(&db, office.id).await?, Some(office.clone()));
        assert_eq!(get_office_by_name(&db, "Accounting").await?, Some(office));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_present_printers() -> Result<()> {
        let db = setup_test_db().await?;
        let black = create_test_cartridge(&db, "CF410A").await?;
        let cyan = create_test_cartridge(&db, "CF411A").await?;
        let mono = create_test_cartridge(&db, "CE285A").await?;
        let color_printer = create_test_printer(&db, "M477", &[black.id, cyan.id]).await?;
        let mono_printer = create_test_printer(&db, "P1102", &[mono.id]).await?;
        let elsewhere = create_test_printer(&db, "M125", &[mono.id]).await?;

        let printers = [color_printer.id, mono_printer.id];
        let office = create_test_office(&db, "Accounting", &printers).await?;
        create_test_office(&db, "Reception", &[elsewhere.id]).await?;

        let present = get_present_printers(&db, office.id).await?;
        assert_eq!(present.len(), 2);
        assert_eq!(present[0].printer_id, color_printer.id);
        assert!(present[0].accepts(black.id));
        assert!(present[0].accepts(cyan.id));
        assert!(!present[0].accepts(mono.id));
        assert_eq!(present[1].printer_id, mono_printer.id);
        assert_eq!(present[1].cartridge_ids, HashSet::from([mono.id]));

        assert!(get_present_printers(&db, 999).await?.is_empty());

        Ok(())
    }
}
