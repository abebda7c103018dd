use std::path::PathBuf;

use clap::{Args, ValueHint};

use super::VariantArg;
use super::validators::validate_target;

/// Options shared by the extraction subcommands.
#[derive(Debug, Args)]
pub struct OutputArgs {
    /// Number of records to read from the source (0 reads everything).
    #[arg(short = 'l', long, default_value_t = 0)]
    pub limit: usize,
    /// Directory receiving `<TARGET>.txt` (defaults to `output.target_dir`).
    #[arg(short = 't', long, value_name = "DIR", value_hint = ValueHint::DirPath)]
    pub target_dir: Option<PathBuf>,
    /// Normalization pipeline (defaults to `pipeline.variant`).
    #[arg(long, value_enum)]
    pub variant: Option<VariantArg>,
}

/// Extract records from a plain text file.
#[derive(Debug, Args)]
pub struct FileArgs {
    /// Target name; records are appended to `<DIR>/<TARGET>.txt`.
    #[arg(value_parser = validate_target)]
    pub target: String,
    /// Input file, one record per line.
    #[arg(value_hint = ValueHint::FilePath)]
    pub file_name: PathBuf,
    #[command(flatten)]
    pub output: OutputArgs,
}

/// Extract records from a JSON-lines document export.
#[derive(Debug, Args)]
pub struct JsonlArgs {
    /// Target name; records are appended to `<DIR>/<TARGET>.txt`.
    #[arg(value_parser = validate_target)]
    pub target: String,
    /// Input file, one JSON document per line.
    #[arg(value_hint = ValueHint::FilePath)]
    pub file_name: PathBuf,
    /// Document field holding the text (defaults to `source.field`).
    #[arg(long)]
    pub field: Option<String>,
    #[command(flatten)]
    pub output: OutputArgs,
}
