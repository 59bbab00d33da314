pub mod record;
pub mod slate;

pub use record::{GameRecord, RawGameRecord, WinLoss};
