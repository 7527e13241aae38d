pub mod item;
pub mod wear;

pub use item::Item;
pub use wear::WearTier;
