use serde::Serialize;

use super::wear::WearTier;
use crate::error::{Result, TradeupError};

/// A priced marketplace item. Prices are integer minor-currency units (cents).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    name: String,
    collection: String,
    rarity: String,
    float_value: f64,
    price: u64,
    stattrak: bool,
    souvenir: bool,
}

impl Item {
    pub fn new(
        name: impl Into<String>,
        collection: impl Into<String>,
        rarity: impl Into<String>,
        float_value: f64,
        price: u64,
    ) -> Result<Self> {
        if !float_value.is_finite() || !(0.0..=1.0).contains(&float_value) {
            return Err(TradeupError::InvalidItem(format!(
                "float value {} is outside [0, 1]",
                float_value
            )));
        }
        let name = name.into();
        if name.trim().is_empty() {
            return Err(TradeupError::InvalidItem("item name is empty".to_string()));
        }
        Ok(Self {
            name,
            collection: collection.into(),
            rarity: rarity.into(),
            float_value,
            price,
            stattrak: false,
            souvenir: false,
        })
    }

    pub fn with_stattrak(mut self, stattrak: bool) -> Self {
        self.stattrak = stattrak;
        self
    }

    pub fn with_souvenir(mut self, souvenir: bool) -> Self {
        self.souvenir = souvenir;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    pub fn rarity(&self) -> &str {
        &self.rarity
    }

    pub fn float_value(&self) -> f64 {
        self.float_value
    }

    pub fn price(&self) -> u64 {
        self.price
    }

    pub fn wear(&self) -> WearTier {
        WearTier::from_float(self.float_value)
    }

    pub fn is_stattrak(&self) -> bool {
        self.stattrak
    }

    pub fn is_souvenir(&self) -> bool {
        self.souvenir
    }
}
