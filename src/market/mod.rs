pub mod listing;
pub mod price_book;

pub use listing::{items_from_listings, parse_listings, ListingItem, MarketListing};
pub use price_book::{split_market_hash_name, PriceBook, WearPrice};
