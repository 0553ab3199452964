//! Enumerated column types shared by the stock entities.
//!
//! Each enum is stored as a short lowercase string and has a total `FromStr`
//! implementation, so user input is either one of the known variants or an error.

use crate::errors::Error;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Direction of a stock movement
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(8))")]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Stock received
    #[sea_orm(string_value = "in")]
    In,
    /// Stock handed out
    #[sea_orm(string_value = "out")]
    Out,
}

impl Direction {
    /// Lowercase form used in commands and storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::In => "in",
            Self::Out => "out",
        }
    }

    /// Signed contribution of `amount` to a balance.
    #[must_use]
    pub const fn signed(self, amount: i64) -> i64 {
        match self {
            Self::In => amount,
            Self::Out => -amount,
        }
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "in" => Ok(Self::In),
            "out" => Ok(Self::Out),
            _ => Err(Error::InvalidDirection {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::In => f.write_str("In"),
            Self::Out => f.write_str("Out"),
        }
    }
}

/// Kind of stocked item a movement refers to
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// Printer cartridge
    #[sea_orm(string_value = "cartridge")]
    Cartridge,
    /// Printer
    #[sea_orm(string_value = "printer")]
    Printer,
}

impl ItemKind {
    /// Lowercase form used in commands and storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cartridge => "cartridge",
            Self::Printer => "printer",
        }
    }
}

impl FromStr for ItemKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cartridge" | "cartridges" => Ok(Self::Cartridge),
            "printer" | "printers" => Ok(Self::Printer),
            _ => Err(Error::InvalidItemKind {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cartridge => f.write_str("Cartridge"),
            Self::Printer => f.write_str("Printer"),
        }
    }
}

/// Ink color of a cartridge
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
pub enum Color {
    /// Cyan
    #[sea_orm(string_value = "Cyan")]
    Cyan,
    /// Magenta
    #[sea_orm(string_value = "Magenta")]
    Magenta,
    /// Yellow
    #[sea_orm(string_value = "Yellow")]
    Yellow,
    /// Black
    #[sea_orm(string_value = "Black")]
    Black,
}

impl Color {
    /// Every color, in the order offered to users.
    pub const ALL: [Self; 4] = [Self::Cyan, Self::Magenta, Self::Yellow, Self::Black];

    /// Display name of the color.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cyan => "Cyan",
            Self::Magenta => "Magenta",
            Self::Yellow => "Yellow",
            Self::Black => "Black",
        }
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|color| color.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::InvalidColor {
                input: s.to_string(),
            })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_direction_parse_accepts_in_and_out() {
        assert_eq!("in".parse::<Direction>().unwrap(), Direction::In);
        assert_eq!("OUT".parse::<Direction>().unwrap(), Direction::Out);
        assert_eq!("  In ".parse::<Direction>().unwrap(), Direction::In);
    }

    #[test]
    fn test_direction_parse_rejects_everything_else() {
        for input in ["True", "False", "", "inn", "1", "o"] {
            let result = input.parse::<Direction>();
            assert!(
                matches!(result, Err(Error::InvalidDirection { input: ref got }) if got == input),
                "expected rejection for {input:?}"
            );
        }
    }

    #[test]
    fn test_direction_signed() {
        assert_eq!(Direction::In.signed(4), 4);
        assert_eq!(Direction::Out.signed(4), -4);
    }

    #[test]
    fn test_item_kind_parse() {
        assert_eq!("Cartridge".parse::<ItemKind>().unwrap(), ItemKind::Cartridge);
        assert_eq!("printers".parse::<ItemKind>().unwrap(), ItemKind::Printer);
        assert!(matches!(
            "toner".parse::<ItemKind>(),
            Err(Error::InvalidItemKind { .. })
        ));
    }

    #[test]
    fn test_color_parse_is_case_insensitive() {
        assert_eq!("magenta".parse::<Color>().unwrap(), Color::Magenta);
        assert_eq!("BLACK".parse::<Color>().unwrap(), Color::Black);
        assert!(matches!("Red".parse::<Color>(), Err(Error::InvalidColor { .. })));
    }
}
