//! Cartridge entity - A printer cartridge model that can be stocked.
//!
//! Cartridges are linked to the printers that accept them through the
//! `printer_cartridges` junction table.

use super::sea_orm_active_enums::Color;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Cartridge database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cartridges")]
pub struct Model {
    /// Unique identifier for the cartridge
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Model name (e.g., "CF410A"), unique across cartridges
    #[sea_orm(unique)]
    pub cartridge_model: String,
    /// Ink color
    pub color: Color,
}

/// Defines relationships between Cartridge and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One cartridge appears in many compatibility rows
    #[sea_orm(has_many = "super::printer_cartridge::Entity")]
    PrinterCartridges,
}

impl Related<super::printer_cartridge::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PrinterCartridges.def()
    }
}

impl Related<super::printer::Entity> for Entity {
    fn to() -> RelationDef {
        super::printer_cartridge::Relation::Printer.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::printer_cartridge::Relation::Cartridge.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
