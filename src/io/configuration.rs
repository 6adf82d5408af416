//! Generation constants and runtime configuration defaults

// Maze dimensions
/// Default number of columns
pub const DEFAULT_MAZE_WIDTH: usize = 30;
/// Default number of rows
pub const DEFAULT_MAZE_HEIGHT: usize = 30;
/// Smallest accepted width or height
pub const MIN_MAZE_DIMENSION: usize = 1;
/// Largest accepted width or height
pub const MAX_MAZE_DIMENSION: usize = 100;

/// Default start column
pub const DEFAULT_START_X: i32 = 0;
/// Default start row
pub const DEFAULT_START_Y: i32 = 0;

// Default values for configurable parameters
/// Number of mazes generated per run
pub const DEFAULT_MAZE_COUNT: usize = 1;

// Rendering settings
/// Side length of one cell in exported images, in pixels
pub const DEFAULT_CELL_PIXELS: u32 = 10;
/// Smallest cell size that still leaves room between walls
pub const MIN_CELL_PIXELS: u32 = 2;
/// Wall colour in exported images
pub const WALL_COLOUR: [u8; 3] = [0, 0, 0];
/// Floor colour in exported images
pub const FLOOR_COLOUR: [u8; 3] = [255, 255, 255];

// Output settings
/// File name prefix for mazes written into an output directory
pub const BATCH_FILE_PREFIX: &str = "maze_";
/// Extension for exported images
pub const IMAGE_EXTENSION: &str = "png";

// Progress bar display settings
/// Batches below this size run without a progress bar
pub const MIN_BATCH_FOR_PROGRESS: usize = 2;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
