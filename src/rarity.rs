use crate::error::{RarityError, Result, TradeupError};

pub const DEFAULT_RARITY_HIERARCHY: [&str; 6] = [
    "Consumer Grade",
    "Industrial Grade",
    "Mil-Spec Grade",
    "Restricted",
    "Classified",
    "Covert",
];

/// Ordered rarity tiers, lowest first. A contract of one tier yields the next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RarityHierarchy {
    tiers: Vec<String>,
}

impl Default for RarityHierarchy {
    fn default() -> Self {
        Self {
            tiers: DEFAULT_RARITY_HIERARCHY
                .iter()
                .map(|t| t.to_string())
                .collect(),
        }
    }
}

impl RarityHierarchy {
    pub fn new(tiers: Vec<String>) -> Result<Self> {
        if tiers.is_empty() {
            return Err(TradeupError::Catalog(
                "rarity hierarchy must not be empty".to_string(),
            ));
        }
        for (idx, tier) in tiers.iter().enumerate() {
            if tier.trim().is_empty() {
                return Err(TradeupError::Catalog(format!(
                    "rarity hierarchy entry {} is blank",
                    idx
                )));
            }
            if tiers[..idx].contains(tier) {
                return Err(TradeupError::Catalog(format!(
                    "rarity '{}' appears more than once in hierarchy",
                    tier
                )));
            }
        }
        Ok(Self { tiers })
    }

    pub fn tiers(&self) -> &[String] {
        &self.tiers
    }

    pub fn position(&self, rarity: &str) -> Option<usize> {
        self.tiers.iter().position(|t| t == rarity)
    }

    pub fn contains(&self, rarity: &str) -> bool {
        self.position(rarity).is_some()
    }

    pub fn top(&self) -> &str {
        // Non-empty by construction.
        self.tiers.last().map(String::as_str).unwrap_or_default()
    }

    /// Resolve the output rarity of a contract whose inputs are `rarity`.
    pub fn upgrade(&self, rarity: &str) -> std::result::Result<&str, RarityError> {
        let idx = self
            .position(rarity)
            .ok_or_else(|| RarityError::InvalidRarity(rarity.to_string()))?;
        self.tiers
            .get(idx + 1)
            .map(String::as_str)
            .ok_or_else(|| RarityError::CannotUpgrade(rarity.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upgrade_walks_default_hierarchy() {
        let h = RarityHierarchy::default();
        assert_eq!(h.upgrade("Consumer Grade").unwrap(), "Industrial Grade");
        assert_eq!(h.upgrade("Restricted").unwrap(), "Classified");
        assert_eq!(h.upgrade("Classified").unwrap(), "Covert");
        assert_eq!(h.top(), "Covert");
    }

    #[test]
    fn upgrade_reports_top_and_unknown_tiers() {
        let h = RarityHierarchy::default();
        assert_eq!(
            h.upgrade("Covert"),
            Err(RarityError::CannotUpgrade("Covert".to_string()))
        );
        assert_eq!(
            h.upgrade("Unknown"),
            Err(RarityError::InvalidRarity("Unknown".to_string()))
        );
    }

    #[test]
    fn new_rejects_empty_blank_and_duplicate_tiers() {
        assert!(RarityHierarchy::new(vec![]).is_err());
        assert!(RarityHierarchy::new(vec!["Common".to_string(), " ".to_string()]).is_err());
        assert!(RarityHierarchy::new(vec!["Common".to_string(), "Common".to_string()]).is_err());

        let h = RarityHierarchy::new(vec!["Common".to_string(), "Rare".to_string()]).unwrap();
        assert_eq!(h.upgrade("Common").unwrap(), "Rare");
        assert!(h.contains("Rare"));
        assert!(!h.contains("Covert"));
    }
}
