use passgen_core::{GenerationRequest, Session};

use crate::app::AppContext;
use crate::cli::GenerateArgs;
use crate::config::GenerateSection;
use crate::errors::from_core;
use crate::helpers::split_words;
use crate::ui::{badge, print, Badge, UiContext};

pub fn handle_generate(ctx: &AppContext, args: &GenerateArgs) -> anyhow::Result<()> {
    let (request, count) = resolve_request(args, &ctx.config()?.generate);
    let ui = ctx.ui_context(args.json);

    let mut session = ctx.open_session()?;
    let passwords = generate_batch(&mut session, &request, count)?;

    if ui.mode.is_json() {
        let output = serde_json::json!({
            "passwords": passwords,
            "request": request,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    print_passwords(&ui, &passwords, ctx.quiet());
    Ok(())
}

/// Generate one batch and append it to history.
pub fn generate_batch(
    session: &mut Session,
    request: &GenerationRequest,
    count: usize,
) -> anyhow::Result<Vec<String>> {
    session.generate(request, count).map_err(from_core)
}

/// Print passwords one per line, with a saved receipt in pretty mode.
pub fn print_passwords(ui: &UiContext, passwords: &[String], quiet: bool) {
    for password in passwords {
        print(ui, password);
    }
    if ui.mode.is_pretty() && !quiet && !passwords.is_empty() {
        let noun = if passwords.len() == 1 { "password" } else { "passwords" };
        let message = format!("Saved {} {} to history", passwords.len(), noun);
        eprintln!("{}", badge(ui, Badge::Ok, &message));
    }
}

/// Merge command-line flags over configured defaults.
pub fn resolve_request(args: &GenerateArgs, defaults: &GenerateSection) -> (GenerationRequest, usize) {
    let scramble = if args.no_scramble {
        false
    } else if args.scramble {
        true
    } else {
        defaults.scramble
    };
    let words = args
        .words
        .as_deref()
        .map(split_words)
        .unwrap_or_else(|| defaults.words.clone());

    let request = GenerationRequest::new(
        args.adjectives.unwrap_or(defaults.adjectives),
        args.nouns.unwrap_or(defaults.nouns),
        args.digits.unwrap_or(defaults.digits),
        args.punctuation.unwrap_or(defaults.punctuation),
    )
    .with_scramble(scramble)
    .with_custom_words(words);

    (request, args.count.unwrap_or(defaults.count))
}
