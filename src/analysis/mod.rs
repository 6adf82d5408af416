//! Structural analysis of carved mazes

/// Passage graph extraction and spanning tree checks
pub mod topology;

pub use topology::{MazeTopology, Passage};
