//! Listing Discord command - `list`.
//!
//! Shows one of the catalog or ledger tables as a code block.

use crate::core::listing::RenderedListing;

/// Discord rejects messages longer than this.
pub const DISCORD_MESSAGE_LIMIT: usize = 2000;

/// Marks a reply that was cut short to fit in one message.
pub const TRUNCATED_NOTICE: &str = "… (truncated)\n";

/// Keeps the leading whole lines of `text` that fit in `budget` bytes.
///
/// When a line has to be dropped, the kept lines are followed by `TRUNCATED_NOTICE`.
/// Room for the notice is always reserved, so the result never exceeds `budget`.
#[must_use]
pub fn truncate_lines(text: &str, budget: usize) -> String {
    let budget = budget.saturating_sub(TRUNCATED_NOTICE.len());
    let mut kept = String::new();
    for line in text.lines() {
        if kept.len() + line.len() + 1 > budget {
            kept.push_str(TRUNCATED_NOTICE);
            break;
        }
        kept.push_str(line);
        kept.push('\n');
    }
    kept
}

/// Wraps a rendered table in a code block that fits in one message.
///
/// Tables too long for Discord are cut at a line boundary and marked as truncated.
#[must_use]
pub fn format_listing_message(listing: &RenderedListing) -> String {
    let header = format!("📋 **{}** ({} rows)\n", listing.title, listing.row_count);
    let budget = DISCORD_MESSAGE_LIMIT - header.len() - "```\n```".len();
    let table = truncate_lines(&listing.table, budget);

    format!("{header}```\n{table}```")
}

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use super::format_listing_message;
    use crate::{
        bot::{BotData, handlers::autocomplete},
        core::listing::{self, ListingKind},
        errors::{Error, Result},
    };

    /// Shows the cartridge, printer, or office catalog, or the latest movements.
    #[poise::command(slash_command, prefix_command)]
    pub async fn list(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "cartridges, printers, offices or movements"]
        #[autocomplete = "autocomplete::autocomplete_listing_kind"]
        kind: String,
    ) -> Result<()> {
        let kind = match kind.parse::<ListingKind>() {
            Ok(kind) => kind,
            Err(e) => {
                ctx.say(format!("❌ {e}")).await?;
                return Ok(());
            }
        };

        let rendered = listing::render_listing(&ctx.data().database, kind, None).await?;
        ctx.say(format_listing_message(&rendered)).await?;
        Ok(())
    }
}

pub use inner::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_listing_message() {
        let listing = RenderedListing {
            title: "Offices",
            row_count: 1,
            table: "Name | Place\n---- | -----\nHQ   | Top\n".to_string(),
        };
        assert_eq!(
            format_listing_message(&listing),
            "📋 **Offices** (1 rows)\n```\nName | Place\n---- | -----\nHQ   | Top\n```"
        );
    }

    #[test]
    fn test_truncate_lines() {
        assert_eq!(truncate_lines("a\nbb\n", 100), "a\nbb\n");

        let text = "x".repeat(10) + "\n" + &"y".repeat(10) + "\n";
        let budget = 11 + TRUNCATED_NOTICE.len();
        let expected = format!("{}\n{TRUNCATED_NOTICE}", "x".repeat(10));
        assert_eq!(truncate_lines(&text, budget), expected);
    }

    #[test]
    fn test_format_listing_message_truncates() {
        let table: String = (0..500).map(|i| format!("Office {i:03} | Floor\n")).collect();
        let listing = RenderedListing {
            title: "Offices",
            row_count: 500,
            table,
        };

        let message = format_listing_message(&listing);
        assert!(message.len() <= DISCORD_MESSAGE_LIMIT);
        assert!(message.contains("Office 000 | Floor\n"));
        assert!(message.ends_with("… (truncated)\n```"));
    }
}
