use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::market::listing::MarketListing;
use crate::model::WearTier;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WearPrice {
    /// Mean of positive sample prices, truncated to whole cents.
    pub avg_price: u64,
    pub sample_size: usize,
    pub last_updated: DateTime<Utc>,
}

/// Average asking price per skin and wear tier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceBook {
    entries: BTreeMap<String, BTreeMap<WearTier, WearPrice>>,
}

/// Split `"AK-47 | Redline (Field-Tested)"` into base name and wear.
pub fn split_market_hash_name(name: &str) -> Option<(&str, WearTier)> {
    let trimmed = name.trim_end();
    let without_close = trimmed.strip_suffix(')')?;
    let open = without_close.rfind('(')?;
    let wear = WearTier::from_name(&without_close[open + 1..])?;
    Some((without_close[..open].trim_end(), wear))
}

impl PriceBook {
    /// Build from `(base name, wear, price)` samples. Non-positive prices are ignored.
    pub fn from_samples<'a, I>(samples: I, now: DateTime<Utc>) -> Self
    where
        I: IntoIterator<Item = (&'a str, WearTier, u64)>,
    {
        let mut sums: BTreeMap<(String, WearTier), (u64, usize)> = BTreeMap::new();
        for (name, wear, price) in samples {
            if price == 0 {
                continue;
            }
            let slot = sums.entry((name.to_string(), wear)).or_insert((0, 0));
            slot.0 = slot.0.saturating_add(price);
            slot.1 += 1;
        }

        let mut entries: BTreeMap<String, BTreeMap<WearTier, WearPrice>> = BTreeMap::new();
        for ((name, wear), (sum, count)) in sums {
            entries.entry(name).or_default().insert(
                wear,
                WearPrice {
                    avg_price: sum / count as u64,
                    sample_size: count,
                    last_updated: now,
                },
            );
        }
        Self { entries }
    }

    pub fn from_listings(listings: &[MarketListing], now: DateTime<Utc>) -> Self {
        let samples = listings.iter().filter_map(|listing| {
            let full = listing.display_name()?;
            let (base, wear) = match split_market_hash_name(full) {
                Some(parsed) => parsed,
                None => {
                    let wear = listing
                        .item
                        .wear_name
                        .as_deref()
                        .and_then(WearTier::from_name)
                        .or_else(|| listing.item.float_value.map(WearTier::from_float))?;
                    (full, wear)
                }
            };
            Some((base, wear, listing.price))
        });
        let book = Self::from_samples(samples, now);
        tracing::debug!(
            listings = listings.len(),
            skins = book.entries.len(),
            "Built price book"
        );
        book
    }

    pub fn price(&self, name: &str, wear: WearTier) -> Option<u64> {
        self.entry(name, wear).map(|p| p.avg_price)
    }

    pub fn entry(&self, name: &str, wear: WearTier) -> Option<&WearPrice> {
        self.entries.get(name).and_then(|w| w.get(&wear))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
