//! UI primitives for the Passgen CLI.
//!
//! This module provides:
//! - **Context**: Environment detection (TTY, color)
//! - **Mode**: Output mode resolution (json, plain, pretty)
//! - **Theme**: Badge tokens and colors
//! - **Render**: Headings, hints, info notices and error messages

mod context;
mod mode;
pub mod render;
pub mod theme;

// Re-export core types at module level
pub use context::UiContext;
pub use mode::OutputMode;
pub use theme::Badge;

pub use render::{badge, heading, print, print_error, print_info};
