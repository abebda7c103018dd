//! Configuration loading with XDG, local, override-file and environment layers.

use std::env;
use std::num::NonZeroU64;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::Deserialize;
use thiserror::Error;

use crate::pipeline::DEFAULT_PROGRESS_EVERY;
use crate::text::{DEFAULT_WHITELIST, JapaneseClassifier, NormalizerVariant, ScriptFilter};

const LOCAL_CONFIG_FILE: &str = "config/settings";
const CONFIG_FILE_ENV: &str = "TWEETSIFT_CONFIG_FILE";
const ENV_PREFIX: &str = "TWEETSIFT";

#[derive(Debug, Error)]
pub enum AppConfigError {
    #[error(transparent)]
    Build(#[from] config::ConfigError),
    #[error("unknown normalizer variant `{0}` (expected base, platform or tokenizer)")]
    UnknownVariant(String),
    #[error("whitelist entry `{0}` must be exactly one character")]
    InvalidWhitelistEntry(String),
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub output: OutputConfig,
    pub pipeline: PipelineConfig,
    pub filter: FilterConfig,
    pub source: SourceConfig,
}

/// Command-line values take precedence over the loaded configuration.
impl AppConfig {
    pub fn resolve_variant(
        &self,
        cli_variant: Option<NormalizerVariant>,
    ) -> Result<NormalizerVariant, AppConfigError> {
        match cli_variant {
            Some(variant) => Ok(variant),
            None => self.pipeline.variant(),
        }
    }

    pub fn resolve_target_dir(&self, cli_dir: Option<&Path>) -> PathBuf {
        cli_dir.map_or_else(|| self.output.target_dir.clone(), Path::to_path_buf)
    }

    pub fn resolve_field(&self, cli_field: Option<String>) -> String {
        cli_field.unwrap_or_else(|| self.source.field.clone())
    }

    /// Zero falls back to [`DEFAULT_PROGRESS_EVERY`].
    pub fn progress_every(&self) -> NonZeroU64 {
        NonZeroU64::new(self.source.progress_every).unwrap_or(DEFAULT_PROGRESS_EVERY)
    }

    /// Japanese filter over the configured whitelist plus the characters
    /// `variant` introduces into its output.
    pub fn script_filter(
        &self,
        variant: NormalizerVariant,
    ) -> Result<ScriptFilter<JapaneseClassifier>, AppConfigError> {
        let whitelist = self.filter.whitelist_chars()?;
        Ok(ScriptFilter::with_whitelist(JapaneseClassifier, whitelist)
            .allow_all(variant.introduced_chars().iter().copied()))
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct OutputConfig {
    pub target_dir: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PipelineConfig {
    pub variant: String,
}

impl PipelineConfig {
    pub fn variant(&self) -> Result<NormalizerVariant, AppConfigError> {
        NormalizerVariant::from_str(self.variant.trim())
            .map_err(|_| AppConfigError::UnknownVariant(self.variant.clone()))
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct FilterConfig {
    pub whitelist: Vec<String>,
}

impl FilterConfig {
    pub fn whitelist_chars(&self) -> Result<Vec<char>, AppConfigError> {
        self.whitelist
            .iter()
            .map(|entry| {
                let mut chars = entry.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(c),
                    _ => Err(AppConfigError::InvalidWhitelistEntry(entry.clone())),
                }
            })
            .collect()
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct SourceConfig {
    /// Document field read by the JSON-lines source.
    pub field: String,
    /// Emit a debug progress event every N records.
    pub progress_every: u64,
}

/// Load configuration; later layers override earlier ones:
/// defaults, `$XDG_CONFIG_HOME/tweetsift/settings.*`, `./config/settings.*`,
/// the file named by `TWEETSIFT_CONFIG_FILE`, then `TWEETSIFT__*` variables.
pub fn load() -> Result<AppConfig, AppConfigError> {
    let whitelist: Vec<String> = DEFAULT_WHITELIST.iter().map(char::to_string).collect();
    let mut builder = Config::builder()
        .set_default("output.target_dir", "source")?
        .set_default("pipeline.variant", NormalizerVariant::default().as_ref())?
        .set_default("filter.whitelist", whitelist)?
        .set_default("source.field", "text")?
        .set_default("source.progress_every", 10_000_i64)?;

    if let Some(dirs) = project_dirs() {
        let user_file = dirs.config_dir().join("settings");
        builder = builder.add_source(File::with_name(&user_file.to_string_lossy()).required(false));
    }

    builder = builder.add_source(File::with_name(LOCAL_CONFIG_FILE).required(false));

    if let Some(path) = env::var_os(CONFIG_FILE_ENV) {
        builder = builder.add_source(File::from(PathBuf::from(path)).required(false));
    }

    let cfg = builder
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("filter.whitelist")
                .try_parsing(true),
        )
        .build()?
        .try_deserialize()?;
    Ok(cfg)
}

pub fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("dev", "ribelo", "tweetsift")
}
