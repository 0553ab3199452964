//! Autocomplete handlers for Discord slash command parameters.
//!
//! This module provides autocomplete functionality for command parameters like
//! office names and cartridge models, suggesting valid options as the user types.
//! Fixed choices (direction, item kind, color, listing) come from the enums' own
//! names so that every suggestion parses.

use crate::{
    bot::BotData,
    core::{cartridge, listing::ListingKind, office, printer},
    entities::{Color, Direction, ItemKind},
    errors::Error,
};

/// Discord shows at most this many suggestions.
pub const MAX_SUGGESTIONS: usize = 25;

/// Keeps the options containing `partial` (case-insensitive), sorted and capped.
#[must_use]
pub fn filter_choices<I, S>(options: I, partial: &str) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let partial_lower = partial.trim().to_lowercase();
    let mut matching: Vec<String> = options
        .into_iter()
        .map(Into::into)
        .filter(|option| option.to_lowercase().contains(&partial_lower))
        .collect();
    matching.sort();
    matching.dedup();
    matching.truncate(MAX_SUGGESTIONS);
    matching
}

/// Provides autocomplete suggestions for office names.
pub async fn autocomplete_office_name(
    ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<String> {
    let Ok(offices) = office::get_all_offices(&ctx.data().database).await else {
        return Vec::new();
    };
    filter_choices(offices.into_iter().map(|o| o.name), partial)
}

/// Provides autocomplete suggestions for cartridge models.
pub async fn autocomplete_cartridge_model(
    ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<String> {
    let Ok(cartridges) = cartridge::get_all_cartridges(&ctx.data().database).await else {
        return Vec::new();
    };
    filter_choices(cartridges.into_iter().map(|c| c.cartridge_model), partial)
}

/// Provides autocomplete suggestions for printer models.
pub async fn autocomplete_printer_model(
    ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<String> {
    let Ok(printers) = printer::get_all_printers(&ctx.data().database).await else {
        return Vec::new();
    };
    filter_choices(printers.into_iter().map(|p| p.printer_model), partial)
}

/// Suggests `in` and `out`.
pub async fn autocomplete_direction(
    _ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<String> {
    filter_choices([Direction::In, Direction::Out].map(Direction::as_str), partial)
}

/// Suggests `cartridge` and `printer`.
pub async fn autocomplete_item_kind(
    _ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<String> {
    filter_choices([ItemKind::Cartridge, ItemKind::Printer].map(ItemKind::as_str), partial)
}

/// Suggests the cartridge colors.
pub async fn autocomplete_color(
    _ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<String> {
    filter_choices(Color::ALL.map(Color::as_str), partial)
}

/// Suggests the listing names.
pub async fn autocomplete_listing_kind(
    _ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<String> {
    filter_choices(ListingKind::ALL.map(ListingKind::as_str), partial)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_choices() {
        let options = ["Warehouse", "Accounting", "Reception", "Accounting"];
        assert_eq!(filter_choices(options, "CC"), vec!["Accounting"]);
        assert_eq!(
            filter_choices(options, ""),
            vec!["Accounting", "Reception", "Warehouse"]
        );
        assert!(filter_choices(options, "lab").is_empty());
    }

    #[test]
    fn test_filter_choices_caps_suggestions() {
        let options = (0..40).map(|i| format!("Office {i:02}"));
        let choices = filter_choices(options, "office");
        assert_eq!(choices.len(), MAX_SUGGESTIONS);
        assert_eq!(choices[0], "Office 00");
    }

    #[test]
    fn test_enum_suggestions_parse() {
        for choice in filter_choices([Direction::In, Direction::Out].map(Direction::as_str), "") {
            assert!(choice.parse::<Direction>().is_ok());
        }
        for choice in filter_choices(Color::ALL.map(Color::as_str), "") {
            assert!(choice.parse::<Color>().is_ok());
        }
        for choice in filter_choices(ListingKind::ALL.map(ListingKind::as_str), "") {
            assert!(choice.parse::<ListingKind>().is_ok());
        }
    }
}
