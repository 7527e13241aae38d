use serde::Deserialize;

use crate::error::{Result, TradeupError};
use crate::model::Item;

/// A marketplace listing as returned by the listings endpoint.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MarketListing {
    #[serde(default)]
    pub id: String,
    /// Asking price in cents.
    #[serde(default)]
    pub price: u64,
    #[serde(default)]
    pub item: ListingItem,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ListingItem {
    #[serde(default)]
    pub asset_id: Option<String>,
    #[serde(default)]
    pub collection: Option<String>,
    #[serde(default)]
    pub rarity: Option<String>,
    #[serde(default)]
    pub is_stattrak: Option<bool>,
    #[serde(default)]
    pub is_souvenir: Option<bool>,
    #[serde(default)]
    pub float_value: Option<f64>,
    #[serde(default)]
    pub market_hash_name: Option<String>,
    #[serde(default)]
    pub item_name: Option<String>,
    #[serde(default)]
    pub wear_name: Option<String>,
}

impl MarketListing {
    /// Name the price book groups by: market hash name, else item name.
    pub fn display_name(&self) -> Option<&str> {
        self.item
            .market_hash_name
            .as_deref()
            .or(self.item.item_name.as_deref())
            .filter(|n| !n.trim().is_empty())
    }
}

impl TryFrom<&MarketListing> for Item {
    type Error = TradeupError;

    fn try_from(listing: &MarketListing) -> Result<Self> {
        let missing = |field: &str| {
            TradeupError::InvalidItem(format!("listing '{}' has no {}", listing.id, field))
        };
        let name = listing.display_name().ok_or_else(|| missing("name"))?;
        let collection = listing
            .item
            .collection
            .as_deref()
            .ok_or_else(|| missing("collection"))?;
        let rarity = listing
            .item
            .rarity
            .as_deref()
            .ok_or_else(|| missing("rarity"))?;
        let float_value = listing
            .item
            .float_value
            .ok_or_else(|| missing("float value"))?;

        Ok(Item::new(name, collection, rarity, float_value, listing.price)?
            .with_stattrak(listing.item.is_stattrak.unwrap_or(false))
            .with_souvenir(listing.item.is_souvenir.unwrap_or(false)))
    }
}

pub fn parse_listings(json: &str) -> Result<Vec<MarketListing>> {
    Ok(serde_json::from_str(json)?)
}

/// Convert listings into items, skipping any that lack required fields.
pub fn items_from_listings(listings: &[MarketListing]) -> Vec<Item> {
    listings
        .iter()
        .filter_map(|listing| match Item::try_from(listing) {
            Ok(item) => Some(item),
            Err(e) => {
                tracing::warn!(listing_id = %listing.id, error = %e, "Skipping listing");
                None
            }
        })
        .collect()
}
