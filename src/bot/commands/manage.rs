//! Catalog management Discord commands - `/manage cartridge|printer|office add`.
//!
//! Registers cartridge models, printers with the cartridges they take, and offices
//! with the printers located there.

use crate::{
    bot::{BotData, lookup},
    core::{cartridge, office, printer},
    entities::{
        Color, cartridge as cartridge_entity, office as office_entity, printer as printer_entity,
    },
    errors::{Error, Result},
};

/// Registers a cartridge from command arguments.
///
/// # Errors
/// Returns `InvalidColor` or `InvalidInput` for bad arguments, or a database error.
pub async fn add_cartridge(
    data: &BotData,
    model: String,
    color: &str,
) -> Result<cartridge_entity::Model> {
    let color: Color = color.parse()?;
    cartridge::create_cartridge(&data.database, model, color).await
}

/// Registers a printer, resolving its cartridges by model name.
///
/// # Errors
/// Returns `InvalidInput` for unknown cartridges or bad arguments, or a database error.
pub async fn add_printer(
    data: &BotData,
    brand: String,
    model: String,
    cartridge_models: &[&str],
) -> Result<printer_entity::Model> {
    let mut cartridge_ids = Vec::with_capacity(cartridge_models.len());
    for name in cartridge_models {
        cartridge_ids.push(lookup::resolve_cartridge(&data.database, name).await?.id);
    }
    printer::create_printer(&data.database, brand, model, &cartridge_ids).await
}

/// Registers an office, resolving its comma-separated printer models.
///
/// # Errors
/// Returns `InvalidInput` for unknown printers or bad arguments, or a database error.
pub async fn add_office(
    data: &BotData,
    name: String,
    place: String,
    printer_models: &str,
) -> Result<office_entity::Model> {
    let mut printer_ids = Vec::new();
    for model in lookup::split_names(printer_models) {
        printer_ids.push(lookup::resolve_printer(&data.database, model).await?.id);
    }
    office::create_office(&data.database, name, place, &printer_ids).await
}

/// Turns the outcome of a management command into its reply.
///
/// Unique-constraint failures are reported as duplicates; other database errors are
/// handed back for the error hook.
pub fn manage_reply<T>(outcome: Result<T>, created: impl FnOnce(T) -> String) -> Result<String> {
    match outcome {
        Ok(value) => Ok(created(value)),
        Err(e) if e.is_user_facing() => Ok(format!("❌ {e}")),
        Err(Error::Database(message)) if message.to_lowercase().contains("unique") => {
            Ok("⚠️ That model is already registered. Model names must be unique.".to_string())
        }
        Err(e) => Err(e),
    }
}

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use super::{add_cartridge, add_office, add_printer, manage_reply};
    use crate::{
        bot::{BotData, handlers::autocomplete},
        errors::{Error, Result},
    };

    /// Parent command for registering catalog entries.
    #[poise::command(
        slash_command,
        subcommands("manage_cartridge", "manage_printer", "manage_office")
    )]
    pub async fn manage(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let help_text = "Catalog management command. Available subcommands:\n\
            `/manage cartridge add` - Register a cartridge model\n\
            `/manage printer add` - Register a printer and its cartridges\n\
            `/manage office add` - Register an office and its printers";

        ctx.say(help_text).await?;
        Ok(())
    }

    /// Cartridge catalog management.
    #[poise::command(slash_command, rename = "cartridge", subcommands("cartridge_add"))]
    pub async fn manage_cartridge(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        ctx.say("Use `/manage cartridge add`.").await?;
        Ok(())
    }

    /// Printer catalog management.
    #[poise::command(slash_command, rename = "printer", subcommands("printer_add"))]
    pub async fn manage_printer(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        ctx.say("Use `/manage printer add`.").await?;
        Ok(())
    }

    /// Office catalog management.
    #[poise::command(slash_command, rename = "office", subcommands("office_add"))]
    pub async fn manage_office(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        ctx.say("Use `/manage office add`.").await?;
        Ok(())
    }

    /// Registers a new cartridge model.
    #[poise::command(slash_command, rename = "add")]
    pub async fn cartridge_add(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Unique cartridge model (e.g., 'CF410A')"] model: String,
        #[description = "Cyan, Magenta, Yellow or Black"]
        #[autocomplete = "autocomplete::autocomplete_color"]
        color: String,
    ) -> Result<()> {
        let outcome = add_cartridge(ctx.data(), model, &color).await;
        let reply = manage_reply(outcome, |c| {
            format!("✅ Cartridge **{}** ({}) added.", c.cartridge_model, c.color)
        })?;
        ctx.say(reply).await?;
        Ok(())
    }

    /// Registers a new printer model and the cartridges it takes.
    #[poise::command(slash_command, rename = "add")]
    pub async fn printer_add(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Manufacturer (e.g., 'HP')"] brand: String,
        #[description = "Unique printer model (e.g., 'M477')"] model: String,
        #[description = "Compatible cartridge"]
        #[autocomplete = "autocomplete::autocomplete_cartridge_model"]
        cartridge1: String,
        #[description = "Another compatible cartridge"]
        #[autocomplete = "autocomplete::autocomplete_cartridge_model"]
        cartridge2: Option<String>,
        #[description = "Another compatible cartridge"]
        #[autocomplete = "autocomplete::autocomplete_cartridge_model"]
        cartridge3: Option<String>,
        #[description = "Another compatible cartridge"]
        #[autocomplete = "autocomplete::autocomplete_cartridge_model"]
        cartridge4: Option<String>,
    ) -> Result<()> {
        let cartridges: Vec<&str> = std::iter::once(cartridge1.as_str())
            .chain(cartridge2.as_deref())
            .chain(cartridge3.as_deref())
            .chain(cartridge4.as_deref())
            .collect();

        let outcome = add_printer(ctx.data(), brand, model, &cartridges).await;
        let reply = manage_reply(outcome, |p| {
            format!("✅ Printer **{}** added with {} cartridge(s).", p.label(), cartridges.len())
        })?;
        ctx.say(reply).await?;
        Ok(())
    }

    /// Registers a new office and the printers located there.
    #[poise::command(slash_command, rename = "add")]
    pub async fn office_add(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Office name (e.g., 'Accounting')"] name: String,
        #[description = "Where the office is (e.g., 'Main building, 2nd floor')"] place: String,
        #[description = "Printer models located there, comma-separated"] printers: String,
    ) -> Result<()> {
        let outcome = add_office(ctx.data(), name, place, &printers).await;
        let reply = manage_reply(outcome, |o| format!("✅ Office **{}** added.", o.label()))?;
        ctx.say(reply).await?;
        Ok(())
    }
}

pub use inner::*;
