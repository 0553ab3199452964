//! Staff configuration module for mapping Discord user IDs to nicknames.
//!
//! Movements store the Discord user ID of whoever recorded them. For display, IDs
//! listed in the `STAFF_NICKNAMES` environment variable are replaced by a nickname.
//! The variable holds comma-separated `user_id=nickname` pairs, for example
//! `STAFF_NICKNAMES="123456789=Anna,987654321=Boris"`.

use std::collections::HashMap;

/// Environment variable holding the nickname pairs.
pub const STAFF_NICKNAMES_VAR: &str = "STAFF_NICKNAMES";

/// Parses `user_id=nickname` pairs separated by commas.
///
/// Malformed entries (no `=`, or an empty side) are skipped.
#[must_use]
pub fn parse_nicknames(raw: &str) -> HashMap<String, String> {
    raw.split(',')
        .filter_map(|pair| {
            let (user_id, nickname) = pair.split_once('=')?;
            let (user_id, nickname) = (user_id.trim(), nickname.trim());
            (!user_id.is_empty() && !nickname.is_empty())
                .then(|| (user_id.to_string(), nickname.to_string()))
        })
        .collect()
}

/// Gets a mapping of user IDs to their configured nicknames.
///
/// Returns an empty map when `STAFF_NICKNAMES` is not set.
#[must_use]
pub fn get_user_nicknames() -> HashMap<String, String> {
    std::env::var(STAFF_NICKNAMES_VAR)
        .map(|raw| parse_nicknames(&raw))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_nicknames() {
        let nicknames = parse_nicknames("123=Anna, 456 = Boris ,bad,=nobody,789=");
        assert_eq!(nicknames.len(), 2);
        assert_eq!(nicknames.get("123").map(String::as_str), Some("Anna"));
        assert_eq!(nicknames.get("456").map(String::as_str), Some("Boris"));
    }

    #[test]
    fn test_parse_nicknames_empty() {
        assert!(parse_nicknames("").is_empty());
    }
}
