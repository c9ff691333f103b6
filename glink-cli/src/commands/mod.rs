//! Command implementations for the glink CLI
//!
//! Each command module provides a `run` function that executes the command logic.

pub mod check;
pub mod export;
pub mod variants;
