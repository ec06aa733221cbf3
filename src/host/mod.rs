//! Host-side plumbing around the engine.
//!
//! The engine itself holds no global state. A host that runs many
//! channels keeps its matches in a [`MatchRegistry`] it owns, and reports
//! finished matches to its stats backend through [`StatsStore`].

mod registry;
mod stats;

pub use registry::{MatchRegistry, RegistryError};
pub use stats::{report_match, InMemoryStats, PlayerStats, StatsError, StatsReport, StatsStore};
