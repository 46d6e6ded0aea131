use crate::error::{Result, TriageError};
use crate::types::feed::FeedDocument;
use crate::types::item::{ExpiryDate, FoodItem};
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

pub const STDIN_MARKER: &str = "-";

pub fn is_stdin(input: &Path) -> bool {
    input.as_os_str() == STDIN_MARKER
}

/// Reads a feed file, or stdin when `input` is `-`.
pub fn load_items(input: &Path) -> Result<Vec<FoodItem>> {
    let content = if is_stdin(input) {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        if !input.exists() {
            return Err(TriageError::InputNotFound(input.display().to_string()));
        }
        std::fs::read_to_string(input)?
    };
    parse_items(&content)
}

pub fn parse_items(content: &str) -> Result<Vec<FoodItem>> {
    let document =
        FeedDocument::parse(content).map_err(|e| TriageError::FeedParse(e.to_string()))?;

    let items = match document {
        FeedDocument::Feed(feed) if !feed.success => {
            warn!("feed reported failure; no food items to triage");
            Vec::new()
        }
        FeedDocument::Feed(feed) => {
            debug!(
                page = ?feed.current_page,
                total_pages = ?feed.total_pages,
                items = feed.items.len(),
                "loaded paged feed"
            );
            feed.items
        }
        FeedDocument::Items(items) => items,
    };

    let unparsable = items
        .iter()
        .filter(|item| item.expiration_date == ExpiryDate::Unparsable)
        .count();
    if unparsable > 0 {
        warn!(
            count = unparsable,
            "items with missing or malformed expiration_date are treated as expired"
        );
    }

    Ok(items)
}
