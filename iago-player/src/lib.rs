//! Players for the `iago-othello` engine: the agent seam, the rank-based
//! computer opponent, and the human-vs-computer [`Session`] that the
//! presentation layer drives.

mod agent;
mod heuristic;
mod session;

pub use agent::*;
pub use heuristic::*;
pub use session::*;
