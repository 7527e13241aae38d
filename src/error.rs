use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RarityError {
    #[error("invalid rarity: {0}")]
    InvalidRarity(String),

    #[error("cannot upgrade beyond {0}")]
    CannotUpgrade(String),
}

#[derive(Error, Debug)]
pub enum TradeupError {
    #[error("invalid item: {0}")]
    InvalidItem(String),

    #[error(transparent)]
    Rarity(#[from] RarityError),

    #[error("invalid contract: {}", .0.join("; "))]
    InvalidContract(Vec<String>),

    #[error("unsupported confidence level {0}; recognized levels: {1}")]
    UnsupportedConfidenceLevel(f64, String),

    #[error("invalid confidence table: {0}")]
    InvalidConfidenceTable(String),

    #[error("catalog error: {0}")]
    Catalog(String),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TradeupError>;
