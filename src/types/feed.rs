use crate::types::item::{or_default, FoodItem};
use serde::Deserialize;

/// Payload served by the donation backend's item listing endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemFeed {
    pub success: bool,
    #[serde(default)]
    pub items: Vec<FoodItem>,
    #[serde(default, deserialize_with = "or_default")]
    pub current_page: Option<u32>,
    #[serde(default, deserialize_with = "or_default")]
    pub total_pages: Option<u32>,
}

#[derive(Debug, Clone)]
pub enum FeedDocument {
    Feed(ItemFeed),
    Items(Vec<FoodItem>),
}

impl FeedDocument {
    /// A top-level array is a bare item list; anything else must be a paged feed.
    pub fn parse(content: &str) -> Result<Self, serde_json::Error> {
        if content.trim_start().starts_with('[') {
            serde_json::from_str(content).map(FeedDocument::Items)
        } else {
            serde_json::from_str(content).map(FeedDocument::Feed)
        }
    }
}
