//! Application settings and initial catalog, loaded from `config.toml`.
//!
//! The file names the central office and can describe a starting catalog:
//!
//! ```toml
//! central_office_id = 1
//!
//! [[cartridges]]
//! model = "CF410A"
//! color = "Black"
//!
//! [[printers]]
//! brand = "HP"
//! model = "M477"
//! cartridges = ["CF410A"]
//!
//! [[offices]]
//! name = "Warehouse"
//! place = "Basement"
//!
//! [[offices]]
//! name = "Accounting"
//! place = "Main building"
//! printers = ["M477"]
//! ```
//!
//! The catalog is only seeded into an empty database (no offices yet).

use crate::{
    core::{cartridge, office, printer, validation::StockPolicy},
    entities::{Color, Office, office as office_entity},
    errors::{Error, Result},
};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, Set, TransactionTrait,
};
use serde::Deserialize;
use std::{fs, path::Path};
use tracing::{debug, info, warn};

/// Environment variable naming the configuration file.
pub const CONFIG_PATH_VAR: &str = "IT_STORE_CONFIG";

/// Configuration file used when `IT_STORE_CONFIG` is not set.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

const fn default_central_office_id() -> i64 {
    crate::core::validation::DEFAULT_CENTRAL_OFFICE_ID
}

/// Top-level contents of `config.toml`
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Office whose inbound movements are always admitted
    #[serde(default = "default_central_office_id")]
    pub central_office_id: i64,
    /// Cartridges to register on first start
    #[serde(default)]
    pub cartridges: Vec<CartridgeSeed>,
    /// Printers to register on first start
    #[serde(default)]
    pub printers: Vec<PrinterSeed>,
    /// Offices to register on first start, in order
    #[serde(default)]
    pub offices: Vec<OfficeSeed>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            central_office_id: default_central_office_id(),
            cartridges: Vec::new(),
            printers: Vec::new(),
            offices: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Admission policy derived from these settings.
    #[must_use]
    pub const fn policy(&self) -> StockPolicy {
        StockPolicy {
            central_office_id: self.central_office_id,
        }
    }
}

/// A cartridge entry in `config.toml`
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CartridgeSeed {
    /// Unique model name
    pub model: String,
    /// Ink color
    pub color: Color,
}

/// A printer entry in `config.toml`
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PrinterSeed {
    /// Manufacturer
    pub brand: String,
    /// Unique model name
    pub model: String,
    /// Model names of the compatible cartridges
    pub cartridges: Vec<String>,
}

/// An office entry in `config.toml`
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct OfficeSeed {
    /// Office name
    pub name: String,
    /// Where the office is
    pub place: String,
    /// Model names of the printers located there
    #[serde(default)]
    pub printers: Vec<String>,
}

/// Parses configuration from TOML text.
pub fn parse_config(contents: &str) -> Result<AppConfig> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse TOML: {e}"),
    })
}

/// Loads configuration from a TOML file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path_ref = path.as_ref();
    debug!("Attempting to load configuration from: {:?}", path_ref);
    let contents = fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path_ref.display()),
    })?;
    parse_config(&contents).map_err(|e| Error::Config {
        message: format!("{}: {e}", path_ref.display()),
    })
}

/// Loads the application configuration from `IT_STORE_CONFIG` or `config.toml`.
///
/// A missing file is not an error: defaults are used and a warning is logged.
pub fn load_app_configuration() -> Result<AppConfig> {
    let path = std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    if !Path::new(&path).exists() {
        warn!("Config file {} not found, using defaults", path);
        return Ok(AppConfig::default());
    }

    let config = load_config(&path)?;
    info!(
        central_office_id = config.central_office_id,
        cartridges = config.cartridges.len(),
        printers = config.printers.len(),
        offices = config.offices.len(),
        "Loaded configuration from {}",
        path
    );
    Ok(config)
}

fn unknown_reference(what: &str, model: &str, owner: &str) -> Error {
    Error::Config {
        message: format!("{owner} references unknown {what} '{model}'"),
    }
}

/// Registers the configured catalog if the database has no offices yet.
///
/// Model names in printer and office entries are resolved to the IDs of entries
/// registered earlier. An office without printers (such as a central warehouse) is
/// inserted as-is: it can receive stock but never hand out cartridges.
///
/// The whole catalog is written in one transaction: if any entry fails, nothing is
/// kept and the next start seeds from scratch.
///
/// Returns whether anything was seeded.
///
/// # Errors
/// Returns `Config` for references to unknown models, or any catalog error.
pub async fn seed_catalog(db: &DatabaseConnection, config: &AppConfig) -> Result<bool> {
    if config.offices.is_empty() && config.printers.is_empty() && config.cartridges.is_empty() {
        debug!("No catalog configured");
        return Ok(false);
    }

    let txn = db.begin().await?;
    if Office::find().count(&txn).await? > 0 {
        debug!("Offices already present, skipping catalog seeding");
        return Ok(false);
    }

    for seed in &config.cartridges {
        cartridge::create_cartridge(&txn, seed.model.clone(), seed.color).await?;
    }

    for seed in &config.printers {
        let mut cartridge_ids = Vec::with_capacity(seed.cartridges.len());
        for model in &seed.cartridges {
            let found = cartridge::get_cartridge_by_model(&txn, model)
                .await?
                .ok_or_else(|| unknown_reference("cartridge", model, &seed.model))?;
            cartridge_ids.push(found.id);
        }
        printer::create_printer(&txn, seed.brand.clone(), seed.model.clone(), &cartridge_ids)
            .await?;
    }

    for seed in &config.offices {
        if seed.printers.is_empty() {
            office_entity::ActiveModel {
                name: Set(seed.name.trim().to_string()),
                place: Set(seed.place.trim().to_string()),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
            continue;
        }

        let mut printer_ids = Vec::with_capacity(seed.printers.len());
        for model in &seed.printers {
            let found = printer::get_printer_by_model(&txn, model)
                .await?
                .ok_or_else(|| unknown_reference("printer", model, &seed.name))?;
            printer_ids.push(found.id);
        }
        office::create_office(&txn, seed.name.clone(), seed.place.clone(), &printer_ids).await?;
    }
    txn.commit().await?;

    info!(
        cartridges = config.cartridges.len(),
        printers = config.printers.len(),
        offices = config.offices.len(),
        "Seeded catalog from configuration"
    );
    Ok(true)
}

/// Checks that the configured central office exists.
///
/// A missing central office is logged rather than treated as fatal: catalog entries
/// can still be registered, but no stock can be received until it exists.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn check_central_office(db: &DatabaseConnection, config: &AppConfig) -> Result<bool> {
    if let Some(central) = office::get_office_by_id(db, config.central_office_id).await? {
        info!(
            central_office_id = central.id,
            "Central office is {}",
            central.label()
        );
        return Ok(true);
    }

    warn!(
        central_office_id = config.central_office_id,
        "Central office #{} does not exist; incoming stock will be refused until it is created",
        config.central_office_id
    );
    Ok(false)
}
