//! Interactive form: the prompt-driven equivalent of a generator window.
//!
//! Each menu action is one request. A failed request is reported and the
//! loop keeps running.

use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use passgen_core::Session;
use tracing::debug;

use crate::app::AppContext;
use crate::errors::CliError;
use crate::helpers::FormFields;
use crate::ui::{print_error, UiContext};

use super::generate::{generate_batch, print_passwords};
use super::history::show_history;

const MENU: &[&str] = &["Generate", "Show history", "Quit"];

pub fn handle_form(ctx: &AppContext) -> anyhow::Result<()> {
    let ui = ctx.ui_context(false);
    if !ui.is_interactive() {
        return Err(CliError::invalid_input(
            "The form needs an interactive terminal.\nHint: Use `passgen generate` in scripts.",
        )
        .into());
    }

    let theme = ColorfulTheme::default();
    let mut fields = FormFields::from_defaults(&ctx.config()?.generate);
    let mut session = ctx.open_session()?;

    loop {
        let choice = Select::with_theme(&theme)
            .with_prompt("Passgen")
            .items(MENU)
            .default(0)
            .interact()?;

        let outcome = match choice {
            0 => generate_from_form(&ui, &theme, &mut session, &mut fields, ctx.quiet()),
            1 => show_history(&ui, &session),
            _ => break,
        };

        if let Err(err) = outcome {
            let message = format!("{:#}", err);
            let (message, hint) = crate::split_hint(&message);
            print_error(&ui, message, hint);
        }
    }

    debug!(generated = session.generated().len(), "form closed");
    Ok(())
}

fn generate_from_form(
    ui: &UiContext,
    theme: &ColorfulTheme,
    session: &mut Session,
    fields: &mut FormFields,
    quiet: bool,
) -> anyhow::Result<()> {
    prompt_fields(theme, fields)?;
    let (request, count) = fields.parse()?;
    let passwords = generate_batch(session, &request, count)?;
    print_passwords(ui, &passwords, quiet);
    Ok(())
}

/// Prompt for every field, prefilled with the previous answers.
fn prompt_fields(theme: &ColorfulTheme, fields: &mut FormFields) -> anyhow::Result<()> {
    fields.adjectives = prompt_text(theme, "Adjectives", &fields.adjectives)?;
    fields.nouns = prompt_text(theme, "Nouns", &fields.nouns)?;
    fields.digits = prompt_text(theme, "Numbers", &fields.digits)?;
    fields.punctuation = prompt_text(theme, "Punctuations", &fields.punctuation)?;
    fields.count = prompt_text(theme, "How many passwords", &fields.count)?;
    fields.words = Input::<String>::with_theme(theme)
        .with_prompt("Custom words (space-separated)")
        .with_initial_text(fields.words.clone())
        .allow_empty(true)
        .interact_text()?;
    fields.scramble = Confirm::with_theme(theme)
        .with_prompt("Scramble")
        .default(fields.scramble)
        .interact()?;
    Ok(())
}

fn prompt_text(theme: &ColorfulTheme, label: &str, current: &str) -> anyhow::Result<String> {
    Input::<String>::with_theme(theme)
        .with_prompt(label)
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", label, e))
}
