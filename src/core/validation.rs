//! Admission rules for proposed stock movements.
//!
//! A movement is admitted when one of these holds:
//! 1. it is an `in` movement to the central office;
//! 2. it is an `out` movement of a printer and `amount < balance`;
//! 3. it is an `out` movement of a cartridge, some printer present at the office
//!    accepts that cartridge, and `amount < balance`.
//!
//! Everything else is rejected. The comparison against the balance is strict, so a
//! withdrawal that would leave exactly zero units is rejected.
//!
//! [`evaluate`] applies the rules to an already-loaded [`StockSnapshot`];
//! [`validate_movement`] loads the snapshot from the database first. Neither writes.

use crate::{
    core::{balance, item, item::ItemRef, office},
    entities::{Direction, ItemKind, Office},
    errors::{Error, Result},
};
use sea_orm::{ConnectionTrait, EntityTrait};
use std::{collections::HashSet, fmt};

/// Office ID of the central warehouse when none is configured.
pub const DEFAULT_CENTRAL_OFFICE_ID: i64 = 1;

/// Largest amount a single movement may carry.
pub const MAX_MOVEMENT_AMOUNT: i64 = 2_147_483_647;

/// Generic text shown for every rejected movement.
pub const REJECTION_MESSAGE: &str = "Something went wrong. Check the entered data.";

/// Deployment-specific inputs to the admission rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockPolicy {
    /// Office whose `in` movements are always admitted
    pub central_office_id: i64,
}

impl Default for StockPolicy {
    fn default() -> Self {
        Self {
            central_office_id: DEFAULT_CENTRAL_OFFICE_ID,
        }
    }
}

/// A movement a user asked to record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProposedMovement {
    /// Office the stock goes to or comes from
    pub office_id: i64,
    /// Cartridge or printer being moved
    pub item: ItemRef,
    /// In or out
    pub direction: Direction,
    /// Units moved, at least 1
    pub amount: i64,
}

impl ProposedMovement {
    /// Builds a proposal, rejecting amounts outside `1..=MAX_MOVEMENT_AMOUNT`.
    ///
    /// # Errors
    /// Returns `InvalidAmount` if the amount is out of range.
    pub fn new(office_id: i64, item: ItemRef, direction: Direction, amount: i64) -> Result<Self> {
        if !(1..=MAX_MOVEMENT_AMOUNT).contains(&amount) {
            return Err(Error::InvalidAmount { amount });
        }
        Ok(Self {
            office_id,
            item,
            direction,
            amount,
        })
    }
}

/// A printer located at the office of a proposed movement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentPrinter {
    /// Printer ID
    pub printer_id: i64,
    /// Cartridges this printer accepts
    pub cartridge_ids: HashSet<i64>,
}

impl PresentPrinter {
    /// Whether this printer accepts the cartridge.
    #[must_use]
    pub fn accepts(&self, cartridge_id: i64) -> bool {
        self.cartridge_ids.contains(&cartridge_id)
    }
}

/// Everything the rules need to know about current state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StockSnapshot {
    /// Current balance of the proposed item
    pub balance: i64,
    /// Printers at the proposed office with their compatibility sets
    pub office_printers: Vec<PresentPrinter>,
}

/// Why a movement was not admitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Stock may only be received at the central office
    InboundOutsideCentralOffice {
        /// Office named in the proposal
        office_id: i64,
        /// The configured central office
        central_office_id: i64,
    },
    /// No printer at the office accepts the cartridge
    NoCompatiblePrinter {
        /// Office named in the proposal
        office_id: i64,
        /// Cartridge named in the proposal
        cartridge_id: i64,
    },
    /// The withdrawal is not strictly smaller than the balance
    InsufficientStock {
        /// Units asked for
        requested: i64,
        /// Units on hand
        balance: i64,
    },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{REJECTION_MESSAGE} ")?;
        match self {
            Self::InboundOutsideCentralOffice {
                office_id,
                central_office_id,
            } => write!(
                f,
                "Incoming stock must be recorded at the central office \
                 (#{central_office_id}), not office #{office_id}."
            ),
            Self::NoCompatiblePrinter {
                office_id,
                cartridge_id,
            } => write!(
                f,
                "No printer at office #{office_id} accepts cartridge #{cartridge_id}."
            ),
            Self::InsufficientStock { requested, balance } => write!(
                f,
                "Requested {requested} but only {balance} on hand; at least one unit must remain."
            ),
        }
    }
}

/// Outcome of applying the rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// The movement may be persisted
    Admitted,
    /// The movement must not be persisted
    Rejected(Rejection),
}

impl Admission {
    /// Whether the movement may be persisted.
    #[must_use]
    pub const fn is_admitted(&self) -> bool {
        matches!(self, Self::Admitted)
    }

    /// User-facing message for this outcome.
    #[must_use]
    pub fn reason(&self) -> String {
        match self {
            Self::Admitted => "Record added".to_string(),
            Self::Rejected(rejection) => rejection.to_string(),
        }
    }

    /// Converts a rejection into `Error::ValidationRejected`.
    ///
    /// # Errors
    /// Returns `ValidationRejected` when the movement was rejected.
    pub fn into_result(self) -> Result<()> {
        match self {
            Self::Admitted => Ok(()),
            Self::Rejected(reason) => Err(Error::ValidationRejected { reason }),
        }
    }
}

const fn check_stock(amount: i64, balance: i64) -> Admission {
    if amount < balance {
        Admission::Admitted
    } else {
        Admission::Rejected(Rejection::InsufficientStock {
            requested: amount,
            balance,
        })
    }
}

/// Applies the admission rules to a proposal and a snapshot of current state.
#[must_use]
pub fn evaluate(
    policy: &StockPolicy,
    proposal: &ProposedMovement,
    snapshot: &StockSnapshot,
) -> Admission {
    match (proposal.direction, proposal.item.kind) {
        (Direction::In, _) if proposal.office_id == policy.central_office_id => Admission::Admitted,
        (Direction::In, _) => Admission::Rejected(Rejection::InboundOutsideCentralOffice {
            office_id: proposal.office_id,
            central_office_id: policy.central_office_id,
        }),
        (Direction::Out, ItemKind::Printer) => check_stock(proposal.amount, snapshot.balance),
        (Direction::Out, ItemKind::Cartridge) => {
            let accepted = snapshot
                .office_printers
                .iter()
                .any(|printer| printer.accepts(proposal.item.id));
            if accepted {
                check_stock(proposal.amount, snapshot.balance)
            } else {
                Admission::Rejected(Rejection::NoCompatiblePrinter {
                    office_id: proposal.office_id,
                    cartridge_id: proposal.item.id,
                })
            }
        }
    }
}

/// Loads the state the rules need for a proposal.
///
/// Office printers are only loaded for cartridge withdrawals, the only rule that
/// looks at them.
pub async fn load_snapshot<C>(db: &C, proposal: &ProposedMovement) -> Result<StockSnapshot>
where
    C: ConnectionTrait,
{
    let balance = balance::compute_balance(db, proposal.item).await?;
    let office_printers = if proposal.direction == Direction::Out
        && proposal.item.kind == ItemKind::Cartridge
    {
        office::get_present_printers(db, proposal.office_id).await?
    } else {
        Vec::new()
    };

    Ok(StockSnapshot {
        balance,
        office_printers,
    })
}

/// Decides whether a proposed movement may be recorded.
///
/// Reads balances and relations but never writes.
///
/// # Errors
/// Returns `OfficeNotFound` or `ItemNotFound` if the proposal references rows that do
/// not exist, or a database error. A rejection is an `Ok(Admission::Rejected(_))`.
pub async fn validate_movement<C>(
    db: &C,
    policy: &StockPolicy,
    proposal: &ProposedMovement,
) -> Result<Admission>
where
    C: ConnectionTrait,
{
    Office::find_by_id(proposal.office_id)
        .one(db)
        .await?
        .ok_or(Error::OfficeNotFound {
            id: proposal.office_id,
        })?;
    item::resolve_label(db, proposal.item).await?;

    let snapshot = load_snapshot(db, proposal).await?;
    Ok(evaluate(policy, proposal, &snapshot))
}
