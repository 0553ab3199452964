//! Presence junction - which printers are located at which office.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Office/printer presence row
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "office_printers")]
pub struct Model {
    /// Office side of the pair
    #[sea_orm(primary_key, auto_increment = false)]
    pub office_id: i64,
    /// Printer side of the pair
    #[sea_orm(primary_key, auto_increment = false)]
    pub printer_id: i64,
}

/// Both sides of the presence pair
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// The office hosting the printer
    #[sea_orm(
        belongs_to = "super::office::Entity",
        from = "Column::OfficeId",
        to = "super::office::Column::Id"
    )]
    Office,
    /// The printer located at the office
    #[sea_orm(
        belongs_to = "super::printer::Entity",
        from = "Column::PrinterId",
        to = "super::printer::Column::Id"
    )]
    Printer,
}

impl Related<super::office::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Office.def()
    }
}

impl Related<super::printer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Printer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
