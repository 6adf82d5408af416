/// Randomized depth-first carving with an explicit backtracking stack
pub mod carver;
/// Maze request entry points and the reusable generator component
pub mod generator;
/// Injectable randomness for direction ordering
pub mod random;
