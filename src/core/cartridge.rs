//! Cartridge business logic - catalog entry and lookup of cartridge models.
//!
//! Cartridge models are unique. A cartridge only becomes withdrawable at an office
//! once some printer that accepts it is located there.

use crate::{
    entities::{Cartridge, Color, cartridge},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Retrieves all cartridges, ordered alphabetically by model.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_all_cartridges(db: &DatabaseConnection) -> Result<Vec<cartridge::Model>> {
    Cartridge::find()
        .order_by_asc(cartridge::Column::CartridgeModel)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a cartridge by its unique ID.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_cartridge_by_id<C>(db: &C, cartridge_id: i64) -> Result<Option<cartridge::Model>>
where
    C: ConnectionTrait,
{
    Cartridge::find_by_id(cartridge_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Finds a cartridge by its model name, returning None if there is none.
///
/// Surrounding whitespace in `model` is ignored.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_cartridge_by_model<C>(db: &C, model: &str) -> Result<Option<cartridge::Model>>
where
    C: ConnectionTrait,
{
    Cartridge::find()
        .filter(cartridge::Column::CartridgeModel.eq(model.trim()))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Registers a new cartridge model.
///
/// The model name is trimmed and must not be empty. A duplicate model name fails
/// with a database error from the unique constraint.
///
/// # Errors
/// Returns `InvalidInput` for an empty model name, or a database error.
pub async fn create_cartridge<C>(db: &C, model: String, color: Color) -> Result<cartridge::Model>
where
    C: ConnectionTrait,
{
    let model = model.trim();
    if model.is_empty() {
        return Err(Error::InvalidInput {
            message: "Cartridge model cannot be empty".to_string(),
        });
    }

    let cartridge = cartridge::ActiveModel {
        cartridge_model: Set(model.to_string()),
        color: Set(color),
        ..Default::default()
    };
    cartridge.insert(db).await.map_err(Into::into)
}
