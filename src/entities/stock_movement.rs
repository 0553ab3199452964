//! Stock movement entity - The append-only ledger of stock in/out records.
//!
//! Each movement has an `office_id`, an item reference (`item_kind` + `item_id`),
//! a `direction`, a positive `amount`, the acting `user_id` and a `timestamp`.
//! Rows are only ever inserted through `core::movement::record_movement`.

use super::sea_orm_active_enums::{Direction, ItemKind};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Stock movement database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "stock_movements")]
pub struct Model {
    /// Unique identifier for the movement
    #[sea_orm(primary_key)]
    pub id: i64,
    /// When the movement was recorded
    pub timestamp: DateTimeUtc,
    /// Office the stock went to or came from
    pub office_id: i64,
    /// Whether `item_id` refers to a cartridge or a printer
    pub item_kind: ItemKind,
    /// ID of the cartridge or printer
    pub item_id: i64,
    /// In or out
    pub direction: Direction,
    /// Number of units moved, always positive
    pub amount: i64,
    /// Discord user ID of whoever recorded the movement
    pub user_id: String,
}

/// Defines relationships between `StockMovement` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each movement belongs to one office
    #[sea_orm(
        belongs_to = "super::office::Entity",
        from = "Column::OfficeId",
        to = "super::office::Column::Id"
    )]
    Office,
}

impl Related<super::office::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Office.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
