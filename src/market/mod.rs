pub mod models;
pub mod props;
pub mod selector;

pub use models::{BestBet, Market, MarketPick, PropOpportunity, Stars};
