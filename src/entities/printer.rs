//! Printer entity - A printer model that can be stocked and placed in offices.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Printer database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "printers")]
pub struct Model {
    /// Unique identifier for the printer
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Manufacturer (e.g., "HP")
    pub brand: String,
    /// Model name, unique across printers
    #[sea_orm(unique)]
    pub printer_model: String,
}

impl Model {
    /// Human-readable label: "brand model".
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} {}", self.brand, self.printer_model)
    }
}

/// Defines relationships between Printer and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Compatibility rows naming the cartridges this printer accepts
    #[sea_orm(has_many = "super::printer_cartridge::Entity")]
    PrinterCartridges,
    /// Presence rows naming the offices this printer is located at
    #[sea_orm(has_many = "super::office_printer::Entity")]
    OfficePrinters,
}

impl Related<super::printer_cartridge::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PrinterCartridges.def()
    }
}

impl Related<super::office_printer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OfficePrinters.def()
    }
}

impl Related<super::cartridge::Entity> for Entity {
    fn to() -> RelationDef {
        super::printer_cartridge::Relation::Cartridge.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::printer_cartridge::Relation::Printer.def().rev())
    }
}

impl Related<super::office::Entity> for Entity {
    fn to() -> RelationDef {
        super::office_printer::Relation::Office.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::office_printer::Relation::Printer.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
