use serde::{Deserialize, Serialize};

/// Condition bucket derived from an item's float value.
///
/// Intervals are half-open `[min, max)` and partition `[0, 1)` in order; the
/// last tier also accepts exactly `1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WearTier {
    #[serde(rename = "Factory New")]
    FactoryNew,
    #[serde(rename = "Minimal Wear")]
    MinimalWear,
    #[serde(rename = "Field-Tested")]
    FieldTested,
    #[serde(rename = "Well-Worn")]
    WellWorn,
    #[serde(rename = "Battle-Scarred")]
    BattleScarred,
}

impl WearTier {
    pub const ALL: [WearTier; 5] = [
        WearTier::FactoryNew,
        WearTier::MinimalWear,
        WearTier::FieldTested,
        WearTier::WellWorn,
        WearTier::BattleScarred,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            Self::FactoryNew => "Factory New",
            Self::MinimalWear => "Minimal Wear",
            Self::FieldTested => "Field-Tested",
            Self::WellWorn => "Well-Worn",
            Self::BattleScarred => "Battle-Scarred",
        }
    }

    pub fn min_float(self) -> f64 {
        match self {
            Self::FactoryNew => 0.00,
            Self::MinimalWear => 0.07,
            Self::FieldTested => 0.15,
            Self::WellWorn => 0.38,
            Self::BattleScarred => 0.45,
        }
    }

    pub fn max_float(self) -> f64 {
        match self {
            Self::FactoryNew => 0.07,
            Self::MinimalWear => 0.15,
            Self::FieldTested => 0.38,
            Self::WellWorn => 0.45,
            Self::BattleScarred => 1.00,
        }
    }

    pub fn midpoint(self) -> f64 {
        (self.min_float() + self.max_float()) / 2.0
    }

    pub fn contains(self, float_value: f64) -> bool {
        if self == Self::BattleScarred {
            float_value >= self.min_float() && float_value <= self.max_float()
        } else {
            float_value >= self.min_float() && float_value < self.max_float()
        }
    }

    /// Out-of-range values fall into Battle-Scarred.
    pub fn from_float(float_value: f64) -> Self {
        Self::ALL
            .into_iter()
            .find(|tier| tier.contains(float_value))
            .unwrap_or(Self::BattleScarred)
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|tier| tier.display_name().eq_ignore_ascii_case(name))
    }
}

impl std::fmt::Display for WearTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
