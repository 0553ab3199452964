//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod cartridge;
pub mod office;
pub mod office_printer;
pub mod printer;
pub mod printer_cartridge;
pub mod sea_orm_active_enums;
pub mod stock_movement;

// Re-export specific types to avoid conflicts
pub use cartridge::{Column as CartridgeColumn, Entity as Cartridge, Model as CartridgeModel};
pub use office::{Column as OfficeColumn, Entity as Office, Model as OfficeModel};
pub use office_printer::Entity as OfficePrinter;
pub use printer::{Column as PrinterColumn, Entity as Printer, Model as PrinterModel};
pub use printer_cartridge::Entity as PrinterCartridge;
pub use sea_orm_active_enums::{Color, Direction, ItemKind};
pub use stock_movement::{
    Column as StockMovementColumn, Entity as StockMovement, Model as StockMovementModel,
};
