//! Application context for the Passgen CLI.
//!
//! Provides a unified context that combines CLI arguments with
//! lazily-loaded configuration.

use once_cell::unsync::OnceCell;

use passgen_core::{Session, StoragePaths};

use crate::cli::Cli;
use crate::config::PassgenConfig;
use crate::errors::from_core;
use crate::ui::UiContext;

use super::resolver::load_config;

/// Application context that bundles CLI args with configuration.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<PassgenConfig>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Get the configuration, loading it lazily if needed.
    pub fn config(&self) -> anyhow::Result<&PassgenConfig> {
        self.config.get_or_try_init(load_config)
    }

    /// Build the UI context for a command.
    pub fn ui_context(&self, json: bool) -> UiContext {
        UiContext::from_env(json, self.cli.no_color)
    }

    /// Open the session over the fixed key and history files.
    pub fn open_session(&self) -> anyhow::Result<Session> {
        Session::open(&StoragePaths::default()).map_err(from_core)
    }
}
