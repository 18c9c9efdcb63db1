/// Implemented RL algorithms
pub mod algo;

/// Data structures
pub mod ds;

/// Exploration policies
pub mod exploration;

/// Experience replay
pub mod memory;

/// State-action value tables
pub mod table;
