//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI args
//! and writes its result to the given output.

pub mod classify;
pub mod config;
pub mod count;
pub mod show;

// Re-export execute functions for convenience
pub use classify::execute as classify;
pub use config::execute as config;
pub use count::execute as count;
pub use show::execute as show;
