//! Expected-value, probability and risk engine for trade-up contracts.
//!
//! Ten items of one rarity are exchanged for a single item of the next rarity,
//! drawn uniformly from the target collection's outcome pool. The engine is
//! pure: fetching listings, caching and report rendering are left to callers.

pub mod catalog;
pub mod config;
pub mod contract;
pub mod error;
pub mod ev;
pub mod logging;
pub mod market;
pub mod model;
pub mod rarity;

pub use contract::{validate_contract, TradeupContract};
pub use error::{RarityError, TradeupError};
pub use model::{Item, WearTier};
pub use rarity::RarityHierarchy;
