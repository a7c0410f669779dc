//! One race: the same random array sorted by every algorithm, then replayed.

mod driver;
mod error;
mod size;
mod summary;

pub use driver::{Lane, RaceDriver};
pub use error::RaceError;
pub use size::RaceSize;
pub use summary::{LaneResult, RaceSummary};
