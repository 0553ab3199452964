//! Balance calculation - derives on-hand quantities from the movement ledger.
//!
//! Balances are never stored. Every call sums the full movement history of an item:
//! `in` movements add their amount and `out` movements subtract it. The result is
//! tracked per item only, across all offices, and may be negative. A ledger whose sum
//! leaves the `i64` range is reported as `BalanceOverflow` instead of wrapping.

use crate::{
    core::item::ItemRef,
    entities::{Direction, ItemKind, StockMovement, stock_movement},
    errors::{Error, Result},
};
use sea_orm::{ConnectionTrait, QueryOrder, prelude::*};
use std::collections::HashMap;

/// Sums signed movement amounts. Order does not matter.
///
/// Returns `None` if the sum (or any partial sum) does not fit in an `i64`.
#[must_use]
pub fn sum_movements<I>(movements: I) -> Option<i64>
where
    I: IntoIterator<Item = (Direction, i64)>,
{
    movements
        .into_iter()
        .try_fold(0_i64, |total, (direction, amount)| {
            total.checked_add(direction.signed(amount))
        })
}

fn overflow(item: ItemRef) -> Error {
    Error::BalanceOverflow {
        item: item.to_string(),
    }
}

/// Retrieves every movement of an item, newest first.
///
/// Ties on timestamp are broken by descending ID so that the most recently
/// inserted row is always listed first.
pub async fn get_movements_for_item<C>(db: &C, item: ItemRef) -> Result<Vec<stock_movement::Model>>
where
    C: ConnectionTrait,
{
    StockMovement::find()
        .filter(stock_movement::Column::ItemKind.eq(item.kind))
        .filter(stock_movement::Column::ItemId.eq(item.id))
        .order_by_desc(stock_movement::Column::Timestamp)
        .order_by_desc(stock_movement::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Computes the current on-hand quantity of an item.
///
/// An item with no movements has a balance of 0. The item itself is not looked up,
/// so this never fails for an unknown ID.
///
/// # Errors
/// Returns `BalanceOverflow` if the ledger sum leaves the `i64` range, or a
/// database error.
pub async fn compute_balance<C>(db: &C, item: ItemRef) -> Result<i64>
where
    C: ConnectionTrait,
{
    let movements = StockMovement::find()
        .filter(stock_movement::Column::ItemKind.eq(item.kind))
        .filter(stock_movement::Column::ItemId.eq(item.id))
        .all(db)
        .await?;

    sum_movements(movements.into_iter().map(|m| (m.direction, m.amount)))
        .ok_or_else(|| overflow(item))
}

/// Computes the balances of every item of one kind that has at least one movement.
///
/// Items without movements are absent from the map; callers treat them as 0.
///
/// # Errors
/// Returns `BalanceOverflow` for the first item whose sum leaves the `i64` range,
/// or a database error.
pub async fn compute_balances<C>(db: &C, kind: ItemKind) -> Result<HashMap<i64, i64>>
where
    C: ConnectionTrait,
{
    let movements = StockMovement::find()
        .filter(stock_movement::Column::ItemKind.eq(kind))
        .all(db)
        .await?;

    let mut balances: HashMap<i64, i64> = HashMap::new();
    for movement in movements {
        let balance = balances.entry(movement.item_id).or_insert(0);
        *balance = balance
            .checked_add(movement.direction.signed(movement.amount))
            .ok_or_else(|| {
                overflow(ItemRef {
                    kind,
                    id: movement.item_id,
                })
            })?;
    }
    Ok(balances)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn test_sum_movements_empty_is_zero() {
        assert_eq!(sum_movements(Vec::new()), Some(0));
    }

    #[test]
    fn test_sum_movements_in_minus_out() {
        let movements = vec![
            (Direction::In, 10),
            (Direction::Out, 3),
            (Direction::In, 5),
            (Direction::Out, 4),
        ];
        assert_eq!(sum_movements(movements), Some(8));
    }

    #[test]
    fn test_sum_movements_order_independent() {
        let forward = vec![
            (Direction::Out, 7),
            (Direction::In, 2),
            (Direction::In, 9),
            (Direction::Out, 1),
        ];
        let mut reversed = forward.clone();
        reversed.reverse();
        let mut rotated = forward.clone();
        rotated.rotate_left(2);

        let expected = sum_movements(forward);
        assert_eq!(expected, Some(3));
        assert_eq!(sum_movements(reversed), expected);
        assert_eq!(sum_movements(rotated), expected);
    }

    #[test]
    fn test_sum_movements_can_go_negative() {
        assert_eq!(
            sum_movements([(Direction::In, 1), (Direction::Out, 4)]),
            Some(-3)
        );
    }

    #[test]
    fn test_sum_movements_overflow_is_none() {
        let movements = [(Direction::In, i64::MAX), (Direction::In, 1)];
        assert_eq!(sum_movements(movements), None);

        let movements = [(Direction::Out, i64::MAX), (Direction::Out, 2)];
        assert_eq!(sum_movements(movements), None);
    }

    #[tokio::test]
    async fn test_compute_balance_no_movements() -> Result<()> {
        let db = setup_test_db().await?;
        let cartridge = create_test_cartridge(&db, "CE285A").await?;

        assert_eq!(
            compute_balance(&db, ItemRef::cartridge(cartridge.id)).await?,
            0
        );
        // Unknown IDs have no movements either
        assert_eq!(compute_balance(&db, ItemRef::printer(999)).await?, 0);

        Ok(())
    }

    #[tokio::test]
    async fn test_compute_balance_integration() -> Result<()> {
        let fixture = StockFixture::new().await?;
        let db = &fixture.db;
        let item = ItemRef::cartridge(fixture.cartridge.id);

        insert_movement(db, fixture.central.id, item, Direction::In, 10).await?;
        insert_movement(db, fixture.office.id, item, Direction::Out, 3).await?;
        insert_movement(db, fixture.office.id, item, Direction::Out, 2).await?;

        assert_eq!(compute_balance(db, item).await?, 5);

        Ok(())
    }

    #[tokio::test]
    async fn test_compute_balance_tolerates_negative() -> Result<()> {
        let fixture = StockFixture::new().await?;
        let item = ItemRef::printer(fixture.printer.id);

        insert_movement(&fixture.db, fixture.office.id, item, Direction::Out, 4).await?;

        assert_eq!(compute_balance(&fixture.db, item).await?, -4);

        Ok(())
    }

    #[tokio::test]
    async fn test_compute_balance_overflow_is_an_error() -> Result<()> {
        let fixture = StockFixture::new().await?;
        let db = &fixture.db;
        let item = ItemRef::cartridge(fixture.cartridge.id);
        let central = fixture.central.id;

        insert_movement(db, central, item, Direction::In, i64::MAX).await?;
        insert_movement(db, central, item, Direction::In, i64::MAX).await?;

        assert!(matches!(
            compute_balance(db, item).await,
            Err(Error::BalanceOverflow { .. })
        ));
        assert!(matches!(
            compute_balances(db, ItemKind::Cartridge).await,
            Err(Error::BalanceOverflow { .. })
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_compute_balance_separates_kinds_and_ignores_office() -> Result<()> {
        let fixture = StockFixture::new().await?;
        let db = &fixture.db;
        // Cartridge and printer share the numeric ID 1 in their own tables
        let cartridge = ItemRef::cartridge(fixture.cartridge.id);
        let printer = ItemRef::printer(fixture.printer.id);

        insert_movement(db, fixture.central.id, cartridge, Direction::In, 6).await?;
        insert_movement(db, fixture.office.id, cartridge, Direction::In, 4).await?;
        insert_movement(db, fixture.central.id, printer, Direction::In, 2).await?;

        assert_eq!(compute_balance(db, cartridge).await?, 10);
        assert_eq!(compute_balance(db, printer).await?, 2);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_movements_for_item_newest_first() -> Result<()> {
        let fixture = StockFixture::new().await?;
        let db = &fixture.db;
        let item = ItemRef::cartridge(fixture.cartridge.id);
        let printer = ItemRef::printer(fixture.printer.id);

        let first = insert_movement(db, fixture.central.id, item, Direction::In, 10).await?;
        let second = insert_movement(db, fixture.office.id, item, Direction::Out, 1).await?;
        insert_movement(db, fixture.central.id, printer, Direction::In, 1).await?;

        let movements = get_movements_for_item(db, item).await?;
        assert_eq!(movements, vec![second, first]);

        Ok(())
    }

    #[tokio::test]
    async fn test_compute_balances_by_kind() -> Result<()> {
        let fixture = StockFixture::new().await?;
        let db = &fixture.db;
        let central = fixture.central.id;
        let cartridge = ItemRef::cartridge(fixture.cartridge.id);
        let other = ItemRef::cartridge(create_test_cartridge(db, "CF411A").await?.id);
        let printer = ItemRef::printer(fixture.printer.id);

        insert_movement(db, central, cartridge, Direction::In, 5).await?;
        insert_movement(db, central, other, Direction::In, 3).await?;
        insert_movement(db, fixture.office.id, other, Direction::Out, 1).await?;
        insert_movement(db, central, printer, Direction::In, 9).await?;

        let balances = compute_balances(db, ItemKind::Cartridge).await?;
        assert_eq!(balances.len(), 2);
        assert_eq!(balances[&cartridge.id], 5);
        assert_eq!(balances[&other.id], 2);

        Ok(())
    }
}
