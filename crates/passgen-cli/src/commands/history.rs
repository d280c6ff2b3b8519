use passgen_core::Session;

use crate::app::AppContext;
use crate::cli::HistoryArgs;
use crate::constants::NO_HISTORY_MESSAGE;
use crate::errors::from_core;
use crate::ui::{heading, print_info, UiContext};

pub fn handle_history(ctx: &AppContext, args: &HistoryArgs) -> anyhow::Result<()> {
    let ui = ctx.ui_context(args.json);
    let session = ctx.open_session()?;
    show_history(&ui, &session)
}

/// Decrypt and print every history batch.
pub fn show_history(ui: &UiContext, session: &Session) -> anyhow::Result<()> {
    let batches = session.history().map_err(from_core)?;

    if ui.mode.is_json() {
        let output = serde_json::json!({
            "batches": batches.as_ref().map(|batches| batch_lists(batches)),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    match batches {
        None => print_info(ui, NO_HISTORY_MESSAGE),
        Some(batches) => {
            println!("{}", heading(ui, "History:"));
            print!("{}", batches.join("\n"));
        }
    }
    Ok(())
}

/// Split each batch back into its passwords.
fn batch_lists(batches: &[String]) -> Vec<Vec<&str>> {
    batches
        .iter()
        .map(|batch| batch.lines().collect())
        .collect()
}
