//! Office entity - A named location where printers are installed.
//!
//! Offices are the endpoints of stock movements. One office is configured as the
//! central warehouse that receives new stock.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Office database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "offices")]
pub struct Model {
    /// Unique identifier for the office
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Office name (e.g., "Accounting")
    pub name: String,
    /// Where the office is (e.g., "Main building, 2nd floor")
    pub place: String,
}

impl Model {
    /// Human-readable label: "name at place".
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} at {}", self.name, self.place)
    }
}

/// Defines relationships between Office and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Presence rows naming the printers located here
    #[sea_orm(has_many = "super::office_printer::Entity")]
    OfficePrinters,
    /// Movements recorded against this office
    #[sea_orm(has_many = "super::stock_movement::Entity")]
    StockMovements,
}

impl Related<super::office_printer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OfficePrinters.def()
    }
}

impl Related<super::stock_movement::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StockMovements.def()
    }
}

impl Related<super::printer::Entity> for Entity {
    fn to() -> RelationDef {
        super::office_printer::Relation::Printer.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::office_printer::Relation::Office.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
