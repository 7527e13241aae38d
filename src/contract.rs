use std::collections::BTreeSet;

use crate::error::{Result, TradeupError};
use crate::model::Item;

pub const CONTRACT_SIZE: usize = 10;

/// A structural problem with a proposed set of contract inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractViolation {
    WrongItemCount(usize),
    MixedRarity(BTreeSet<String>),
    InconsistentStattrak,
    InconsistentSouvenir,
    StattrakSouvenirMix,
}

impl std::fmt::Display for ContractViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WrongItemCount(n) => write!(
                f,
                "trade-up requires exactly {} items, got {}",
                CONTRACT_SIZE, n
            ),
            Self::MixedRarity(found) => {
                let names: Vec<&str> = found.iter().map(String::as_str).collect();
                write!(
                    f,
                    "all input items must share one rarity, found: {}",
                    names.join(", ")
                )
            }
            Self::InconsistentStattrak => {
                write!(
                f,
                "inconsistent stattrak: StatTrak inputs must number 0 or {}",
                CONTRACT_SIZE
            )
            }
            Self::InconsistentSouvenir => {
                write!(
                f,
                "inconsistent souvenir: Souvenir inputs must number 0 or {}",
                CONTRACT_SIZE
            )
            }
            Self::StattrakSouvenirMix => f.write_str("cannot mix stattrak and souvenir items"),
        }
    }
}

/// Run every structural check and collect all violations.
pub fn check_contract(items: &[Item]) -> Vec<ContractViolation> {
    let mut violations = Vec::new();

    if items.len() != CONTRACT_SIZE {
        violations.push(ContractViolation::WrongItemCount(items.len()));
    }

    let rarities: BTreeSet<String> = items.iter().map(|i| i.rarity().to_string()).collect();
    if rarities.len() > 1 {
        violations.push(ContractViolation::MixedRarity(rarities));
    }

    let stattrak = items.iter().filter(|i| i.is_stattrak()).count();
    let souvenir = items.iter().filter(|i| i.is_souvenir()).count();
    if stattrak != 0 && stattrak != CONTRACT_SIZE {
        violations.push(ContractViolation::InconsistentStattrak);
    }
    if souvenir != 0 && souvenir != CONTRACT_SIZE {
        violations.push(ContractViolation::InconsistentSouvenir);
    }
    if stattrak > 0 && souvenir > 0 {
        violations.push(ContractViolation::StattrakSouvenirMix);
    }

    violations
}

/// Validate contract inputs, returning human-readable violations. Empty means valid.
pub fn validate_contract(items: &[Item]) -> Vec<String> {
    check_contract(items)
        .iter()
        .map(ToString::to_string)
        .collect()
}

/// Ten items that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct TradeupContract {
    items: Vec<Item>,
}

impl TradeupContract {
    pub fn new(items: Vec<Item>) -> Result<Self> {
        let violations = validate_contract(&items);
        if !violations.is_empty() {
            return Err(TradeupError::InvalidContract(violations));
        }
        Ok(Self { items })
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn rarity(&self) -> &str {
        self.items.first().map(Item::rarity).unwrap_or_default()
    }

    pub fn is_stattrak(&self) -> bool {
        self.items.first().is_some_and(Item::is_stattrak)
    }

    pub fn is_souvenir(&self) -> bool {
        self.items.first().is_some_and(Item::is_souvenir)
    }

    pub fn total_input_cost(&self) -> u64 {
        self.items.iter().map(Item::price).sum()
    }

    /// Collections contributing inputs, in first-seen order.
    pub fn collections(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for item in &self.items {
            if !out.contains(&item.collection()) {
                out.push(item.collection());
            }
        }
        out
    }
}
