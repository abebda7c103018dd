use clap::{ArgAction, CommandFactory, Parser, Subcommand, ValueEnum};

use crate::text::NormalizerVariant;

pub mod extract;
pub mod normalize;
pub mod validators;

pub use extract::{FileArgs, JsonlArgs, OutputArgs};
pub use normalize::NormalizeArgs;

/// Top-level CLI entry point.
#[derive(Debug, Parser)]
#[command(
    name = "tweetsift",
    version,
    author,
    about = "Normalize social posts and keep the ones written in an allowed script"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
    /// Increase logging verbosity (-v, -vv).
    #[arg(global = true, short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn print_help() {
        let mut cmd = Cli::command();
        let _ = cmd.print_help();
        println!();
    }
}

/// Supported subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Extract records from a plain text file, one record per line.
    File(FileArgs),
    /// Extract records from a JSON-lines document export.
    Jsonl(JsonlArgs),
    /// Normalize text from the argument or stdin and report admissibility.
    Normalize(NormalizeArgs),
}

/// Normalization pipeline selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VariantArg {
    Base,
    Platform,
    Tokenizer,
}

impl From<VariantArg> for NormalizerVariant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Base => NormalizerVariant::Base,
            VariantArg::Platform => NormalizerVariant::Platform,
            VariantArg::Tokenizer => NormalizerVariant::Tokenizer,
        }
    }
}
