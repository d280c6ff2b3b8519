use clap::CommandFactory;
use clap_complete::generate;

use crate::app::{resolve_config_path, AppContext};
use crate::cli::{Cli, CompletionsArgs, ConfigArgs};
use crate::config::{render_config, write_config, PassgenConfig};
use crate::ui::{badge, Badge};

pub fn handle_completions(args: &CompletionsArgs) -> anyhow::Result<()> {
    let mut cmd = Cli::command();
    generate(args.shell, &mut cmd, "passgen", &mut std::io::stdout());
    Ok(())
}

pub fn handle_config(ctx: &AppContext, args: &ConfigArgs) -> anyhow::Result<()> {
    let ui = ctx.ui_context(false);
    let path = resolve_config_path()?;

    if args.init {
        if path.exists() {
            let message = format!("Config already exists at {}", path.display());
            if ui.mode.is_pretty() {
                println!("{}", badge(&ui, Badge::Warn, &message));
            } else {
                println!("{}", message);
            }
            return Ok(());
        }
        write_config(&path, &PassgenConfig::default())?;
        if !ctx.quiet() {
            println!(
                "{}",
                badge(&ui, Badge::Ok, &format!("Wrote config to {}", path.display()))
            );
        }
        return Ok(());
    }

    if !ctx.quiet() {
        println!("# {}", path.display());
    }
    print!("{}", render_config(ctx.config()?)?);
    Ok(())
}
