use clap::Args;

use super::VariantArg;

/// Normalize ad-hoc text and print `normalized<TAB>admissible`.
#[derive(Debug, Args)]
pub struct NormalizeArgs {
    /// Text to normalize; reads stdin line by line when omitted.
    pub text: Option<String>,
    /// Normalization pipeline (defaults to `pipeline.variant`).
    #[arg(long, value_enum)]
    pub variant: Option<VariantArg>,
}
