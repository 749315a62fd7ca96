pub mod grid;
pub mod stats;
pub mod units;

pub use grid::SampleGrid;
pub use stats::StatsHelper;
pub use units::{kmh_to_ms, ms_to_kmh};
