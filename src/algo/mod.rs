pub mod sarsa;

pub use sarsa::{LastActionStats, SarsaAgent, SarsaAgentConfig};
