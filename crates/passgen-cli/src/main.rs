//! Passgen CLI - memorable passwords with an encrypted local history
//!
//! This is the command-line interface for Passgen. It is a thin caller of
//! the core library: parse a request, run it, render the result.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod ui;

use clap::Parser;
use passgen_core::VERSION;
use tracing_subscriber::{fmt, EnvFilter};

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{form, generate, history, misc};
use crate::errors::exit_code_for;
use crate::ui::print_error;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli) {
        let ui_ctx = ctx.ui_context(false);
        let error_msg = format!("{:#}", e);
        let (message, hint) = split_hint(&error_msg);

        print_error(&ui_ctx, message, hint);
        std::process::exit(exit_code_for(&e));
    }
}

/// Map `-v` occurrences to a log level; `PASSGEN_LOG` overrides.
fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env("PASSGEN_LOG")
        .unwrap_or_else(|_| EnvFilter::new(format!("passgen={level},passgen_core={level}")));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Separate a trailing "Hint: ..." line from an error message.
pub(crate) fn split_hint(error: &str) -> (&str, Option<&str>) {
    match error.find("\nHint:") {
        Some(idx) => (&error[..idx], Some(&error[idx + 1..])),
        None => (error, None),
    }
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Generate(args)) => {
            generate::handle_generate(ctx, args)?;
        }
        Some(Commands::History(args)) => {
            history::handle_history(ctx, args)?;
        }
        Some(Commands::Form) => {
            form::handle_form(ctx)?;
        }
        Some(Commands::Config(args)) => {
            misc::handle_config(ctx, args)?;
        }
        Some(Commands::Completions(args)) => {
            misc::handle_completions(args)?;
        }
        None => {
            println!("Passgen v{}", VERSION);
            println!("\nQuickstart:");
            println!("  passgen generate -a 1 -n 2 -d 2 -p 1 -c 5");
            println!("  passgen generate --words \"orbit lantern\" --no-scramble");
            println!("  passgen history");
            println!("  passgen form");
            println!("\nRun `passgen --help` for full usage.");
        }
    }

    Ok(())
}
