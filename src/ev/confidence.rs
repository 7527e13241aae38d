use serde::Deserialize;

use crate::error::{Result, TradeupError};

const LEVEL_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ConfidenceEntry {
    pub level: f64,
    pub z_score: f64,
}

/// Two-sided normal z-scores keyed by confidence level.
///
/// Lookups outside the table fail instead of falling back to another level.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfidenceTable {
    entries: Vec<ConfidenceEntry>,
}

impl Default for ConfidenceTable {
    fn default() -> Self {
        Self {
            entries: vec![
                ConfidenceEntry {
                    level: 0.95,
                    z_score: 1.96,
                },
                ConfidenceEntry {
                    level: 0.99,
                    z_score: 2.576,
                },
            ],
        }
    }
}

impl ConfidenceTable {
    /// Levels must lie in (0, 1) and be distinct; z-scores must be finite and positive.
    pub fn new(entries: Vec<ConfidenceEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(TradeupError::InvalidConfidenceTable(
                "at least one confidence level is required".to_string(),
            ));
        }
        for (idx, entry) in entries.iter().enumerate() {
            if !(entry.level > 0.0 && entry.level < 1.0) {
                return Err(TradeupError::InvalidConfidenceTable(format!(
                    "confidence level {} must be within (0, 1)",
                    entry.level
                )));
            }
            if !entry.z_score.is_finite() || entry.z_score <= 0.0 {
                return Err(TradeupError::InvalidConfidenceTable(format!(
                    "z-score {} for confidence level {} must be positive",
                    entry.z_score, entry.level
                )));
            }
            if entries[..idx]
                .iter()
                .any(|prev| (prev.level - entry.level).abs() < LEVEL_TOLERANCE)
            {
                return Err(TradeupError::InvalidConfidenceTable(format!(
                    "confidence level {} is listed more than once",
                    entry.level
                )));
            }
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[ConfidenceEntry] {
        &self.entries
    }

    pub fn levels(&self) -> Vec<f64> {
        self.entries.iter().map(|e| e.level).collect()
    }

    pub fn z_score(&self, level: f64) -> Result<f64> {
        self.entries
            .iter()
            .find(|e| (e.level - level).abs() < LEVEL_TOLERANCE)
            .map(|e| e.z_score)
            .ok_or_else(|| {
                let known: Vec<String> = self.entries.iter().map(|e| e.level.to_string()).collect();
                TradeupError::UnsupportedConfidenceLevel(level, known.join(", "))
            })
    }
}
