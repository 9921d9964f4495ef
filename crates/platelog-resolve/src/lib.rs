//! Unknown-food resolution: asks the user for the calories of each food
//! the estimator did not recognize, learns them, then re-estimates.

pub mod session;
pub mod types;

pub use session::ResolutionSession;
pub use types::*;
