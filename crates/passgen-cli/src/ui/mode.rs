//! How command output is shaped.
//!
//! Passwords always go to stdout one per line in the text modes, so
//! `passgen generate | head -1` works the same with or without a terminal.
//! Only the decorations differ.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// A single JSON document on stdout
    Json,
    /// Bare passwords and `key=value` error lines
    #[default]
    Plain,
    /// Badges, bold headings, and the saved-to-history receipt
    Pretty,
}

impl OutputMode {
    /// `--json` wins; decorations need a capable terminal.
    pub fn resolve(json_flag: bool, is_tty: bool, term_is_dumb: bool) -> Self {
        match (json_flag, is_tty && !term_is_dumb) {
            (true, _) => Self::Json,
            (false, true) => Self::Pretty,
            (false, false) => Self::Plain,
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }

    pub fn is_pretty(&self) -> bool {
        matches!(self, Self::Pretty)
    }
}
