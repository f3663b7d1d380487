mod config;
pub mod engine;
mod guard;

#[cfg(test)]
mod tests;

/// Shallowest search the engine will run; smaller requests are raised to it.
pub const MIN_DEPTH: u8 = 1;

/// Deepest search the front end will ask for.
pub const MAX_DEPTH: u8 = 8;

pub use config::{ConfigParam, EngineConfig};
pub use engine::{Engine, SearchResult};
pub use guard::MoveGuard;
