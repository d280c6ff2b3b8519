use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;

use passgen_core::VERSION;

use crate::helpers::parse_count;

/// Passgen - memorable passwords with an encrypted local history
#[derive(Parser)]
#[command(name = "passgen")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (repeatable)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

/// Arguments for the `generate` command
#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Number of adjectives
    #[arg(short, long, value_name = "N", value_parser = parse_count)]
    pub adjectives: Option<usize>,

    /// Number of nouns
    #[arg(short, long, value_name = "N", value_parser = parse_count)]
    pub nouns: Option<usize>,

    /// Number of random digits
    #[arg(short, long, value_name = "N", value_parser = parse_count)]
    pub digits: Option<usize>,

    /// Number of punctuation symbols
    #[arg(short, long, value_name = "N", value_parser = parse_count)]
    pub punctuation: Option<usize>,

    /// How many passwords to generate
    #[arg(short, long, value_name = "N", value_parser = parse_count)]
    pub count: Option<usize>,

    /// Custom words (space-separated)
    #[arg(short, long, value_name = "WORDS")]
    pub words: Option<String>,

    /// Keep words, digits and punctuation in order
    #[arg(long, conflicts_with = "scramble")]
    pub no_scramble: bool,

    /// Shuffle words, digits and punctuation
    #[arg(long)]
    pub scramble: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `history` command
#[derive(Args, Debug, Default)]
pub struct HistoryArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `config` command
#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// Write a default config file if none exists
    #[arg(long)]
    pub init: bool,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate passwords and append them to the encrypted history
    Generate(GenerateArgs),

    /// Show the decrypted password history
    History(HistoryArgs),

    /// Interactive form: generate and browse history in a loop
    Form,

    /// Show or initialize generation defaults
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_generate_flags_parse() {
        let cli = Cli::try_parse_from([
            "passgen", "generate", "-a", "2", "-n", "1", "-d", "3", "-p", "0", "-c", "4", "--words",
            "orbit lantern", "--no-scramble",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Generate(args)) => {
                assert_eq!(args.adjectives, Some(2));
                assert_eq!(args.digits, Some(3));
                assert_eq!(args.punctuation, Some(0));
                assert_eq!(args.count, Some(4));
                assert_eq!(args.words.as_deref(), Some("orbit lantern"));
                assert!(args.no_scramble);
            }
            _ => panic!("expected generate command"),
        }
    }

    #[test]
    fn test_non_numeric_count_is_rejected() {
        let err = Cli::try_parse_from(["passgen", "generate", "-d", "three"])
            .err()
            .expect("parse should fail");
        assert!(err.to_string().contains("Please enter valid numeric values."));
    }

    #[test]
    fn test_scramble_flags_conflict() {
        assert!(Cli::try_parse_from(["passgen", "generate", "--scramble", "--no-scramble"]).is_err());
    }
}
