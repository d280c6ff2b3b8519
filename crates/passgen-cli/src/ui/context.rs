//! Per-command rendering decisions, taken once from the environment.

use std::io::IsTerminal;

use super::OutputMode;

/// What the process is attached to.
#[derive(Debug, Clone, Copy, Default)]
pub struct Terminal {
    pub stdout_tty: bool,
    pub stdin_tty: bool,
    pub term_is_dumb: bool,
    pub no_color_env: bool,
}

impl Terminal {
    pub fn detect() -> Self {
        Self {
            stdout_tty: std::io::stdout().is_terminal(),
            stdin_tty: std::io::stdin().is_terminal(),
            term_is_dumb: std::env::var("TERM").is_ok_and(|v| v == "dumb"),
            no_color_env: std::env::var_os("NO_COLOR").is_some(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct UiContext {
    /// Both ends are terminals, so the form may prompt
    pub interactive: bool,
    pub color: bool,
    pub mode: OutputMode,
}

impl UiContext {
    pub fn from_env(json_flag: bool, no_color_flag: bool) -> Self {
        Self::resolve(Terminal::detect(), json_flag, no_color_flag)
    }

    pub fn resolve(term: Terminal, json_flag: bool, no_color_flag: bool) -> Self {
        let mode = OutputMode::resolve(json_flag, term.stdout_tty, term.term_is_dumb);
        Self {
            interactive: term.stdout_tty && term.stdin_tty,
            color: mode.is_pretty() && !no_color_flag && !term.no_color_env,
            mode,
        }
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }
}
