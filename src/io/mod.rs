/// Command-line interface for generating and exporting mazes
pub mod cli;
/// Generation constants and defaults
pub mod configuration;
/// Error and warning types
pub mod error;
/// PNG rendering and export
pub mod image;
/// Batch progress display
pub mod progress;
/// Cell-by-cell rendering capability
pub mod render;
/// ASCII rendering
pub mod text;
