//! Stock Discord commands - `cartridge_stock`, `printer_stock`, `stock`, and `history`.
//!
//! Movement commands resolve the typed names, run the proposal through the validated
//! recorder, and answer with either a confirmation or the reason it was refused.

use crate::{
    bot::{
        BotData,
        commands::listing::{DISCORD_MESSAGE_LIMIT, truncate_lines},
        lookup,
    },
    core::{
        item::ItemRef,
        movement,
        report::{self, MovementRow, StockSummary},
        validation::ProposedMovement,
    },
    entities::{ItemKind, stock_movement},
    errors::Result,
};
use std::fmt::Write;

/// Reply for an admitted movement.
pub const RECORD_ADDED: &str = "✅ Record added";

/// Longest history a single reply shows.
pub const MAX_HISTORY_LIMIT: u64 = 25;

/// Resolves command arguments into a proposal and records it.
///
/// `item_name` is a cartridge or printer model depending on `kind`.
///
/// # Errors
/// Returns user-facing errors for unknown names, bad input, or refused movements,
/// and database errors otherwise.
pub async fn record_stock(
    data: &BotData,
    office: &str,
    kind: ItemKind,
    item_name: &str,
    direction: &str,
    amount: i64,
    user_id: String,
) -> Result<stock_movement::Model> {
    let db = &data.database;
    let office = lookup::resolve_office(db, office).await?;
    let item = match kind {
        ItemKind::Cartridge => {
            ItemRef::cartridge(lookup::resolve_cartridge(db, item_name).await?.id)
        }
        ItemKind::Printer => ItemRef::printer(lookup::resolve_printer(db, item_name).await?.id),
    };
    let proposal = ProposedMovement::new(office.id, item, direction.parse()?, amount)?;
    movement::record_movement(db, &data.policy, &proposal, user_id).await
}

/// Turns the outcome of a movement command into its reply.
///
/// User-facing errors become the reply text; anything else is handed back for the
/// error hook.
pub fn movement_reply<T>(outcome: Result<T>) -> Result<String> {
    match outcome {
        Ok(_) => Ok(RECORD_ADDED.to_string()),
        Err(e) if e.is_user_facing() => Ok(format!("❌ {e}")),
        Err(e) => Err(e),
    }
}

/// Formats the stock summary as a Discord message.
///
/// A catalog too long for one message is cut at a line boundary.
pub fn format_stock_summary(summary: &StockSummary) -> Result<String> {
    let mut response = String::from("📦 **Current Stock**\n\n**Cartridges**\n");
    if summary.cartridges.is_empty() {
        response.push_str("_No cartridges registered_\n");
    }
    for line in &summary.cartridges {
        writeln!(&mut response, "• {}: **{}**", line.label, line.balance)?;
    }

    response.push_str("\n**Printers**\n");
    if summary.printers.is_empty() {
        response.push_str("_No printers registered_\n");
    }
    for line in &summary.printers {
        writeln!(&mut response, "• {}: **{}**", line.label, line.balance)?;
    }
    Ok(truncate_lines(&response, DISCORD_MESSAGE_LIMIT))
}

/// Formats resolved movements, newest first, as a Discord message.
///
/// Rows that do not fit in one message are dropped from the end.
pub fn format_history(rows: &[MovementRow]) -> Result<String> {
    if rows.is_empty() {
        return Ok("📜 No movements recorded yet.".to_string());
    }

    let mut response = String::from("📜 **Recent Movements**\n\n");
    for row in rows {
        writeln!(&mut response, "• {}", report::format_movement_summary(row))?;
    }
    Ok(truncate_lines(&response, DISCORD_MESSAGE_LIMIT))
}

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use super::{
        MAX_HISTORY_LIMIT, format_history, format_stock_summary, movement_reply, record_stock,
    };
    use crate::{
        bot::{BotData, handlers::autocomplete},
        core::{movement::DEFAULT_HISTORY_LIMIT, report},
        entities::ItemKind,
        errors::{Error, Result},
    };

    /// Records cartridges received at the warehouse or handed out to an office.
    ///
    /// Cartridges can only be handed out to an office with a printer that takes them,
    /// and only while more than the requested amount is in stock.
    #[poise::command(slash_command)]
    pub async fn cartridge_stock(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Office receiving or handing out the cartridges"]
        #[autocomplete = "autocomplete::autocomplete_office_name"]
        office: String,
        #[description = "Cartridge model"]
        #[autocomplete = "autocomplete::autocomplete_cartridge_model"]
        cartridge: String,
        #[description = "in or out"]
        #[autocomplete = "autocomplete::autocomplete_direction"]
        direction: String,
        #[description = "Number of cartridges"]
        #[min = 1]
        #[max = 2147483647]
        amount: i64,
    ) -> Result<()> {
        let outcome = record_stock(
            ctx.data(),
            &office,
            ItemKind::Cartridge,
            &cartridge,
            &direction,
            amount,
            ctx.author().id.to_string(),
        )
        .await;

        ctx.say(movement_reply(outcome)?).await?;
        Ok(())
    }

    /// Records printers received at the warehouse or handed out to an office.
    ///
    /// Printers can only be handed out while more than the requested amount is in stock.
    #[poise::command(slash_command)]
    pub async fn printer_stock(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Office receiving or handing out the printers"]
        #[autocomplete = "autocomplete::autocomplete_office_name"]
        office: String,
        #[description = "Printer model"]
        #[autocomplete = "autocomplete::autocomplete_printer_model"]
        printer: String,
        #[description = "in or out"]
        #[autocomplete = "autocomplete::autocomplete_direction"]
        direction: String,
        #[description = "Number of printers"]
        #[min = 1]
        #[max = 2147483647]
        amount: i64,
    ) -> Result<()> {
        let outcome = record_stock(
            ctx.data(),
            &office,
            ItemKind::Printer,
            &printer,
            &direction,
            amount,
            ctx.author().id.to_string(),
        )
        .await;

        ctx.say(movement_reply(outcome)?).await?;
        Ok(())
    }

    /// Shows the current balance of every cartridge and printer.
    #[poise::command(slash_command, prefix_command)]
    pub async fn stock(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let summary = report::generate_stock_summary(&ctx.data().database).await?;
        ctx.say(format_stock_summary(&summary)?).await?;
        Ok(())
    }

    /// Shows the most recent stock movements.
    #[poise::command(slash_command, prefix_command)]
    pub async fn history(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Only cartridges or only printers"]
        #[autocomplete = "autocomplete::autocomplete_item_kind"]
        kind: Option<String>,
        #[description = "How many movements to show (default 10, max 25)"]
        #[min = 1]
        #[max = 25]
        limit: Option<u32>,
    ) -> Result<()> {
        let kind = match kind.as_deref().map(str::parse::<ItemKind>).transpose() {
            Ok(kind) => kind,
            Err(e) => {
                ctx.say(format!("❌ {e}")).await?;
                return Ok(());
            }
        };
        let limit = limit
            .map_or(DEFAULT_HISTORY_LIMIT, u64::from)
            .min(MAX_HISTORY_LIMIT);

        let rows = report::generate_movement_log(&ctx.data().database, kind, Some(limit)).await?;
        ctx.say(format_history(&rows)?).await?;
        Ok(())
    }
}

pub use inner::*;
