pub mod signals;
pub mod verdict;

pub use signals::{ExtractError, Extraction, SiteSignals};
pub use verdict::Verdict;
