//! Movement recording - the only way rows enter the stock ledger.
//!
//! [`record_movement`] validates a proposal and, only if it is admitted, inserts it.
//! Both steps run inside one database transaction so the balance the rules saw is the
//! balance the insert is based on. A rejected proposal writes nothing.

use crate::{
    core::validation::{self, Admission, ProposedMovement, StockPolicy},
    entities::{ItemKind, StockMovement, stock_movement},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, QuerySelect, Set, TransactionTrait, prelude::*};
use tracing::{info, warn};

/// Default number of rows returned by [`get_recent_movements`].
pub const DEFAULT_HISTORY_LIMIT: u64 = 10;

/// Validates and, if admitted, persists a stock movement.
///
/// # Arguments
/// * `db` - Database connection
/// * `policy` - Configured central office
/// * `proposal` - The movement to record
/// * `user_id` - Discord user ID of whoever is recording it
///
/// # Errors
/// Returns `ValidationRejected` if an admission rule fails, `OfficeNotFound` or
/// `ItemNotFound` for unresolved references, or a database error.
pub async fn record_movement(
    db: &DatabaseConnection,
    policy: &StockPolicy,
    proposal: &ProposedMovement,
    user_id: String,
) -> Result<stock_movement::Model> {
    let txn = db.begin().await?;

    let admission = validation::validate_movement(&txn, policy, proposal).await?;
    if let Admission::Rejected(reason) = admission {
        warn!(
            office_id = proposal.office_id,
            item = %proposal.item,
            direction = proposal.direction.as_str(),
            amount = proposal.amount,
            "Movement rejected: {reason}"
        );
        return Err(Error::ValidationRejected { reason });
    }

    let movement = stock_movement::ActiveModel {
        timestamp: Set(chrono::Utc::now()),
        office_id: Set(proposal.office_id),
        item_kind: Set(proposal.item.kind),
        item_id: Set(proposal.item.id),
        direction: Set(proposal.direction),
        amount: Set(proposal.amount),
        user_id: Set(user_id),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;

    info!(
        movement_id = movement.id,
        office_id = movement.office_id,
        item = %proposal.item,
        direction = movement.direction.as_str(),
        amount = movement.amount,
        "Movement recorded"
    );
    Ok(movement)
}

/// Retrieves the most recent movements, newest first.
///
/// # Arguments
/// * `kind` - Only return movements of this item kind, or all if None
/// * `limit` - Maximum number of rows (default 10)
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_recent_movements(
    db: &DatabaseConnection,
    kind: Option<ItemKind>,
    limit: Option<u64>,
) -> Result<Vec<stock_movement::Model>> {
    let mut query = StockMovement::find();
    if let Some(kind) = kind {
        query = query.filter(stock_movement::Column::ItemKind.eq(kind));
    }

    query
        .order_by_desc(stock_movement::Column::Timestamp)
        .order_by_desc(stock_movement::Column::Id)
        .limit(limit.unwrap_or(DEFAULT_HISTORY_LIMIT))
        .all(db)
        .await
        .map_err(Into::into)
}
