pub mod error;
pub mod estimator;
pub mod report;

pub use error::{Error, Result};
pub use estimator::{StateStatistics, TransitionEstimator, TransitionStat};
