//! Command handlers, one module per subcommand family.

pub mod form;
pub mod generate;
pub mod history;
pub mod misc;
