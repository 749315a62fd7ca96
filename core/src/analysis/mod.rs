pub mod assessment;
pub mod evaluation;

pub use assessment::{Assessment, Decision};
pub use evaluation::{evaluate, Evaluation};
