//! Listing tables - explicit column/formatter configuration for catalog and ledger views.
//!
//! Each listing is a constant table of columns. A column pairs a header with a pure
//! formatting function, and [`Listing::render`] lays any slice of rows out as a
//! fixed-width text table. [`render_listing`] picks the table for a [`ListingKind`]
//! and loads its rows.

use crate::{
    core::{
        cartridge, office, printer,
        report::{self, MovementRow},
    },
    entities::{cartridge as cartridge_entity, office as office_entity, printer as printer_entity},
    errors::{Error, Result},
};
use sea_orm::DatabaseConnection;
use std::{fmt, fmt::Write, str::FromStr};

/// One column of a listing: a header and the function producing each cell
pub struct Column<R> {
    /// Header text
    pub name: &'static str,
    /// Cell formatter
    pub format: fn(&R) -> String,
}

/// A titled set of columns for one row type
pub struct Listing<R: 'static> {
    /// Title shown above the table
    pub title: &'static str,
    /// Columns, left to right
    pub columns: &'static [Column<R>],
}

impl<R: 'static> Listing<R> {
    /// Header names, left to right.
    #[must_use]
    pub fn headers(&self) -> Vec<&'static str> {
        self.columns.iter().map(|column| column.name).collect()
    }

    /// Looks a column up by header name.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&Column<R>> {
        self.columns.iter().find(|column| column.name == name)
    }

    /// Formats every cell of one row.
    #[must_use]
    pub fn render_row(&self, row: &R) -> Vec<String> {
        self.columns.iter().map(|column| (column.format)(row)).collect()
    }

    /// Renders the rows as a text table with a header line and a separator.
    ///
    /// Columns are padded to their widest cell and separated by ` | `.
    pub fn render(&self, rows: &[R]) -> Result<String> {
        let cells: Vec<Vec<String>> = rows.iter().map(|row| self.render_row(row)).collect();
        let mut widths: Vec<usize> = self.columns.iter().map(|c| c.name.chars().count()).collect();
        for row in &cells {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let mut out = String::new();
        write_line(&mut out, self.headers().iter().copied(), &widths)?;
        let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        write_line(&mut out, separator.iter().map(String::as_str), &widths)?;
        for row in &cells {
            write_line(&mut out, row.iter().map(String::as_str), &widths)?;
        }
        Ok(out)
    }
}

fn write_line<'a, I>(out: &mut String, cells: I, widths: &[usize]) -> Result<()>
where
    I: Iterator<Item = &'a str>,
{
    let mut line = String::new();
    for (i, (cell, &width)) in cells.zip(widths).enumerate() {
        if i > 0 {
            line.push_str(" | ");
        }
        write!(line, "{cell:<width$}")?;
    }
    writeln!(out, "{}", line.trim_end())?;
    Ok(())
}

fn cartridge_model(c: &cartridge_entity::Model) -> String {
    c.cartridge_model.clone()
}

fn cartridge_color(c: &cartridge_entity::Model) -> String {
    c.color.to_string()
}

fn printer_brand(p: &printer_entity::Model) -> String {
    p.brand.clone()
}

fn printer_model(p: &printer_entity::Model) -> String {
    p.printer_model.clone()
}

fn office_name(o: &office_entity::Model) -> String {
    o.name.clone()
}

fn office_place(o: &office_entity::Model) -> String {
    o.place.clone()
}

fn movement_date(m: &MovementRow) -> String {
    report::format_timestamp(&m.timestamp)
}

fn movement_direction(m: &MovementRow) -> String {
    m.direction.to_string()
}

fn movement_office(m: &MovementRow) -> String {
    m.office_name.clone()
}

fn movement_item(m: &MovementRow) -> String {
    m.item_label.clone()
}

fn movement_amount(m: &MovementRow) -> String {
    m.amount.to_string()
}

/// Cartridge catalog
pub const CARTRIDGES: Listing<cartridge_entity::Model> = Listing {
    title: "Cartridges",
    columns: &[
        Column {
            name: "Model",
            format: cartridge_model,
        },
        Column {
            name: "Color",
            format: cartridge_color,
        },
    ],
};

/// Printer catalog
pub const PRINTERS: Listing<printer_entity::Model> = Listing {
    title: "Printers",
    columns: &[
        Column {
            name: "Brand",
            format: printer_brand,
        },
        Column {
            name: "Model",
            format: printer_model,
        },
    ],
};

/// Office catalog
pub const OFFICES: Listing<office_entity::Model> = Listing {
    title: "Offices",
    columns: &[
        Column {
            name: "Name",
            format: office_name,
        },
        Column {
            name: "Place",
            format: office_place,
        },
    ],
};

/// Stock movement ledger
pub const MOVEMENTS: Listing<MovementRow> = Listing {
    title: "Stock movements",
    columns: &[
        Column {
            name: "Date",
            format: movement_date,
        },
        Column {
            name: "In/Out",
            format: movement_direction,
        },
        Column {
            name: "Office",
            format: movement_office,
        },
        Column {
            name: "Item",
            format: movement_item,
        },
        Column {
            name: "Amount",
            format: movement_amount,
        },
    ],
};

/// Which listing to show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingKind {
    /// [`CARTRIDGES`]
    Cartridges,
    /// [`PRINTERS`]
    Printers,
    /// [`OFFICES`]
    Offices,
    /// [`MOVEMENTS`]
    Movements,
}

impl ListingKind {
    /// Every listing, in the order offered to users.
    pub const ALL: [Self; 4] = [Self::Cartridges, Self::Printers, Self::Offices, Self::Movements];

    /// Lowercase name used in commands.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cartridges => "cartridges",
            Self::Printers => "printers",
            Self::Offices => "offices",
            Self::Movements => "movements",
        }
    }
}

impl FromStr for ListingKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::InvalidListingKind {
                input: s.to_string(),
            })
    }
}

impl fmt::Display for ListingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rendered listing ready to be shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedListing {
    /// Listing title
    pub title: &'static str,
    /// Number of data rows
    pub row_count: usize,
    /// The text table
    pub table: String,
}

fn rendered<R: 'static>(listing: &Listing<R>, rows: &[R]) -> Result<RenderedListing> {
    Ok(RenderedListing {
        title: listing.title,
        row_count: rows.len(),
        table: listing.render(rows)?,
    })
}

/// Loads the rows for a listing and renders them.
///
/// The movement listing shows at most `movement_limit` rows (default 10).
///
/// # Errors
/// Returns an error if a database query fails.
pub async fn render_listing(
    db: &DatabaseConnection,
    kind: ListingKind,
    movement_limit: Option<u64>,
) -> Result<RenderedListing> {
    match kind {
        ListingKind::Cartridges => rendered(&CARTRIDGES, &cartridge::get_all_cartridges(db).await?),
        ListingKind::Printers => rendered(&PRINTERS, &printer::get_all_printers(db).await?),
        ListingKind::Offices => rendered(&OFFICES, &office::get_all_offices(db).await?),
        ListingKind::Movements => rendered(
            &MOVEMENTS,
            &report::generate_movement_log(db, None, movement_limit).await?,
        ),
    }
}
