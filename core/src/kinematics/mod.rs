pub mod acceleration;
pub mod deceleration;

pub use acceleration::{yellow_window_distance, AccelerationSweep};
pub use deceleration::{stopping_distance, DecelerationSweep};
