//! Typed references to stocked items.
//!
//! Cartridges and printers live in separate tables, so an item is identified by
//! its kind together with its row ID.

use crate::{
    entities::{Cartridge, ItemKind, Printer},
    errors::{Error, Result},
};
use sea_orm::{ConnectionTrait, EntityTrait};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reference to a cartridge or printer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemRef {
    /// Which table the item lives in
    pub kind: ItemKind,
    /// Row ID within that table
    pub id: i64,
}

impl ItemRef {
    /// Reference to the cartridge with the given ID.
    #[must_use]
    pub const fn cartridge(id: i64) -> Self {
        Self {
            kind: ItemKind::Cartridge,
            id,
        }
    }

    /// Reference to the printer with the given ID.
    #[must_use]
    pub const fn printer(id: i64) -> Self {
        Self {
            kind: ItemKind::Printer,
            id,
        }
    }
}

impl fmt::Display for ItemRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} #{}", self.kind.as_str(), self.id)
    }
}

/// Looks the item up and returns its display label.
///
/// Cartridges are labelled by model, printers by brand and model.
///
/// # Errors
/// Returns `ItemNotFound` if the referenced row does not exist.
pub async fn resolve_label<C>(db: &C, item: ItemRef) -> Result<String>
where
    C: ConnectionTrait,
{
    let label = match item.kind {
        ItemKind::Cartridge => Cartridge::find_by_id(item.id)
            .one(db)
            .await?
            .map(|cartridge| cartridge.cartridge_model),
        ItemKind::Printer => Printer::find_by_id(item.id)
            .one(db)
            .await?
            .map(|printer| printer.label()),
    };

    label.ok_or(Error::ItemNotFound {
        kind: item.kind,
        id: item.id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn test_item_ref_display() {
        assert_eq!(ItemRef::cartridge(3).to_string(), "cartridge #3");
        assert_eq!(ItemRef::printer(7).to_string(), "printer #7");
    }

    #[tokio::test]
    async fn test_resolve_label() -> Result<()> {
        let db = setup_test_db().await?;
        let cartridge = create_test_cartridge(&db, "CF410A").await?;
        let printer = create_test_printer(&db, "M477", &[cartridge.id]).await?;

        assert_eq!(resolve_label(&db, ItemRef::cartridge(cartridge.id)).await?, "CF410A");
        assert_eq!(resolve_label(&db, ItemRef::printer(printer.id)).await?, "HP M477");

        Ok(())
    }

    #[tokio::test]
    async fn test_resolve_label_not_found() -> Result<()> {
        let db = setup_test_db().await?;

        let result = resolve_label(&db, ItemRef::printer(42)).await;
        assert!(matches!(
            result,
            Err(Error::ItemNotFound {
                kind: ItemKind::Printer,
                id: 42
            })
        ));

        Ok(())
    }
}
