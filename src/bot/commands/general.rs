//! General Discord commands - ping, help, and other utility commands.
//! This module contains simple commands that don't require database operations
//! and provide basic bot functionality and user assistance.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::BotData,
        errors::{Error, Result},
    };

    /// Responds with "Pong!" to test bot connectivity.
    ///
    /// This is a simple health check command that doesn't require any database operations.
    #[poise::command(slash_command, prefix_command)]
    pub async fn ping(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        ctx.say("Pong!").await?;
        Ok(())
    }

    /// Displays help information about available commands.
    #[poise::command(slash_command, prefix_command)]
    pub async fn help(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let help_text = "**IT Store Help**\n\
        Track cartridges and printers moving between the warehouse and the offices.\n\n\
        **Stock Commands**\n\
        • `/cartridge_stock <office> <cartridge> <in|out> <amount>` - \
        Records a cartridge movement.\n\
        • `/printer_stock <office> <printer> <in|out> <amount>` - Records a printer movement.\n\
        • `/stock` - Shows the current balance of every cartridge and printer.\n\
        • `/history [kind] [limit]` - Shows the most recent movements.\n\
        • `/list <cartridges|printers|offices|movements>` - Shows a catalog or ledger table.\n\n\
        **Management Commands**\n\
        • `/manage cartridge add <model> <color>` - Registers a cartridge model.\n\
        • `/manage printer add <brand> <model> <cartridges...>` - \
        Registers a printer and the cartridges it takes.\n\
        • `/manage office add <name> <place> <printers>` - \
        Registers an office and its printers.\n\n\
        **Utility Commands**\n\
        • `/ping` - Checks if the bot is responsive.\n\
        • `/help` - Shows this help message.\n\n\
        New stock can only be received at the central warehouse. Items can only be \
        handed out while more than the requested amount is in stock, and cartridges only \
        to offices with a printer that takes them.";

        ctx.say(help_text).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
