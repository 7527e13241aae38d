use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{RarityError, Result, TradeupError};
use crate::market::PriceBook;
use crate::model::{Item, WearTier};
use crate::rarity::RarityHierarchy;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSkin {
    pub weapon: String,
    pub skin: String,
}

impl CatalogSkin {
    /// `"<weapon> | <skin>"`, the name without a wear suffix.
    pub fn full_name(&self) -> String {
        format!("{} | {}", self.weapon, self.skin)
    }

    pub fn wear_variant(&self, wear: WearTier) -> String {
        format!("{} ({})", self.full_name(), wear)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    pub name: String,
    #[serde(default = "default_true")]
    pub tradeable: bool,
    /// Rarity name to skins of that rarity.
    #[serde(default)]
    pub skins: BTreeMap<String, Vec<CatalogSkin>>,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollectionCatalog {
    collections: Vec<Collection>,
}

impl CollectionCatalog {
    pub fn new(collections: Vec<Collection>) -> Result<Self> {
        for (idx, c) in collections.iter().enumerate() {
            if collections[..idx].iter().any(|prev| prev.name == c.name) {
                return Err(TradeupError::Catalog(format!(
                    "collection '{}' is defined more than once",
                    c.name
                )));
            }
        }
        Ok(Self { collections })
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let parsed: CollectionCatalog = serde_json::from_str(json)?;
        Self::new(parsed.collections)
    }

    pub fn get(&self, name: &str) -> Option<&Collection> {
        self.collections.iter().find(|c| c.name == name)
    }

    pub fn skins_by_rarity(&self, collection: &str, rarity: &str) -> &[CatalogSkin] {
        self.get(collection)
            .and_then(|c| c.skins.get(rarity))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Skins a contract of `input_rarity` inputs from `collection` can yield.
    pub fn tradeup_outcomes(
        &self,
        collection: &str,
        input_rarity: &str,
        hierarchy: &RarityHierarchy,
    ) -> std::result::Result<&[CatalogSkin], RarityError> {
        let output = hierarchy.upgrade(input_rarity)?;
        Ok(self.skins_by_rarity(collection, output))
    }

    pub fn tradeable_collections(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .collections
            .iter()
            .filter(|c| c.tradeable)
            .map(|c| c.name.as_str())
            .collect();
        names.sort_unstable();
        names
    }
}

pub fn wear_variants(skin: &CatalogSkin) -> Vec<String> {
    WearTier::ALL
        .into_iter()
        .map(|wear| skin.wear_variant(wear))
        .collect()
}

/// Priced outcome items for one wear tier. Skins without a price are left out.
///
/// Each item's float is the midpoint of `wear`.
pub fn build_outcome_pool(
    catalog: &CollectionCatalog,
    prices: &PriceBook,
    collection: &str,
    input_rarity: &str,
    hierarchy: &RarityHierarchy,
    wear: WearTier,
) -> Result<Vec<Item>> {
    let output_rarity = hierarchy.upgrade(input_rarity)?;
    let skins = catalog.tradeup_outcomes(collection, input_rarity, hierarchy)?;

    let mut pool = Vec::with_capacity(skins.len());
    for skin in skins {
        let Some(price) = prices.price(&skin.full_name(), wear) else {
            tracing::debug!(skin = %skin.full_name(), %wear, "No price for outcome skin");
            continue;
        };
        pool.push(Item::new(
            skin.wear_variant(wear),
            collection,
            output_rarity,
            wear.midpoint(),
            price,
        )?);
    }
    Ok(pool)
}
