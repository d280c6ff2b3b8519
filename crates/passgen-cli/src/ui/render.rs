//! Rendering helpers shared by all commands.

use super::context::UiContext;
use super::theme::{bold, dim, Badge};

/// Render a badge with optional message.
pub fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    let badge_text = kind.styled(ctx.color);
    if message.is_empty() {
        badge_text
    } else {
        format!("{} {}", badge_text, message)
    }
}

/// Render a section heading.
///
/// Pretty mode: bold title
/// Plain mode: title as-is
pub fn heading(ctx: &UiContext, title: &str) -> String {
    bold(title, ctx.color && ctx.mode.is_pretty())
}

/// Render a hint line.
///
/// Pretty mode: "Hint: text" with dim styling
/// Plain mode: "hint=text"
pub fn hint(ctx: &UiContext, text: &str) -> String {
    let text = text.strip_prefix("Hint: ").unwrap_or(text);
    if ctx.mode.is_pretty() {
        format!("{} {}", dim("Hint:", ctx.color), text)
    } else {
        format!("hint={}", text)
    }
}

/// Print a message to stdout unless in JSON mode.
pub fn print(ctx: &UiContext, message: &str) {
    if !ctx.mode.is_json() {
        println!("{}", message);
    }
}

/// Print an informational notice (not an error).
pub fn print_info(ctx: &UiContext, message: &str) {
    if ctx.mode.is_pretty() {
        println!("{}", badge(ctx, Badge::Info, message));
    } else if !ctx.mode.is_json() {
        println!("{}", message);
    }
}

/// Format an error message with optional hint.
///
/// Pretty mode: "[ERR] message" with optional "Hint: ..." on next line
/// Plain mode: "error=message" with optional "hint=suggestion"
pub fn error_message(ctx: &UiContext, message: &str, error_hint: Option<&str>) -> String {
    let mut lines = Vec::new();

    if ctx.mode.is_pretty() {
        lines.push(badge(ctx, Badge::Err, message));
    } else {
        lines.push(format!("error={}", message));
    }
    if let Some(h) = error_hint {
        lines.push(hint(ctx, h));
    }

    lines.join("\n")
}

/// Print an error message to stderr with optional hint.
pub fn print_error(ctx: &UiContext, message: &str, error_hint: Option<&str>) {
    eprintln!("{}", error_message(ctx, message, error_hint));
}
