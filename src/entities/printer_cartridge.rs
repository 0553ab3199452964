//! Compatibility junction - which cartridges a printer accepts.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Printer/cartridge compatibility row
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "printer_cartridges")]
pub struct Model {
    /// Printer side of the pair
    #[sea_orm(primary_key, auto_increment = false)]
    pub printer_id: i64,
    /// Cartridge side of the pair
    #[sea_orm(primary_key, auto_increment = false)]
    pub cartridge_id: i64,
}

/// Both sides of the compatibility pair
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// The printer that accepts the cartridge
    #[sea_orm(
        belongs_to = "super::printer::Entity",
        from = "Column::PrinterId",
        to = "super::printer::Column::Id"
    )]
    Printer,
    /// The accepted cartridge
    #[sea_orm(
        belongs_to = "super::cartridge::Entity",
        from = "Column::CartridgeId",
        to = "super::cartridge::Column::Id"
    )]
    Cartridge,
}

impl Related<super::printer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Printer.def()
    }
}

impl Related<super::cartridge::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cartridge.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
