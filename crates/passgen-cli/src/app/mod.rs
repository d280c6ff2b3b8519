//! Application-level utilities for the Passgen CLI.
//!
//! This module provides:
//! - Config path resolution and loading
//! - The application context shared by command handlers

mod context;
mod resolver;

// Re-export public API
pub use context::AppContext;
pub use resolver::resolve_config_path;
