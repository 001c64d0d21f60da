pub mod resolve;
pub mod template;

use std::path::Path;

use anyhow::{Context, Result};
use pixdiff::Pixel;
use serde::{Deserialize, Serialize};

pub use self::resolve::ResolvedDiffConfig;
pub use self::template::{config_file_exists, write_template};

pub(crate) const CONFIG_DIR: &str = ".pixdiff";
const CONFIG_FILE: &str = "config.toml";

const ENV_ENGINE: &str = "PIXDIFF_ENGINE";
const ENV_THRESHOLD: &str = "PIXDIFF_THRESHOLD";
const ENV_IGNORE_COLOR: &str = "PIXDIFF_IGNORE_COLOR";
const ENV_DIFF_COLOR: &str = "PIXDIFF_DIFF_COLOR";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Engine {
    /// Any RGBA channel change is a difference
    #[default]
    Exact,
    /// YIQ color distance above the threshold is a difference
    Perceptual,
}

/// Comparison settings.
///
/// Every field is `Option`; `None` means "use the next layer down".
/// Serves both TOML deserialization (`[diff]`) and CLI argument parsing.
#[derive(Clone, Debug, Default, PartialEq, clap::Args, Serialize, Deserialize)]
pub struct DiffConfig {
    /// Comparison strategy
    #[arg(long, short = 'e', value_enum)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine: Option<Engine>,

    /// Perceptual engine only: max allowed color distance (0.0–1.0)
    #[arg(long, short = 't', value_parser = parse_threshold)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f32>,

    /// Pixels of this color in either image are never reported (#rrggbb[aa])
    #[arg(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_color: Option<Pixel>,

    /// Color used to highlight differences (#rrggbb[aa])
    #[arg(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diff_color: Option<Pixel>,
}

impl DiffConfig {
    /// Overlay non-None fields from `other` onto self.
    pub fn merge(&mut self, other: &DiffConfig) {
        if other.engine.is_some() {
            self.engine = other.engine;
        }
        if other.threshold.is_some() {
            self.threshold = other.threshold;
        }
        if other.ignore_color.is_some() {
            self.ignore_color = other.ignore_color;
        }
        if other.diff_color.is_some() {
            self.diff_color = other.diff_color;
        }
    }

    /// Read the `PIXDIFF_*` variables through `var`.
    pub fn from_env_with(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let engine = var(ENV_ENGINE)
            .map(|v| <Engine as clap::ValueEnum>::from_str(&v, true))
            .transpose()
            .map_err(|e| anyhow::anyhow!("{ENV_ENGINE}: {e}"))?;
        let threshold = var(ENV_THRESHOLD)
            .map(|v| parse_threshold(&v))
            .transpose()
            .map_err(|e| anyhow::anyhow!("{ENV_THRESHOLD}: {e}"))?;
        let ignore_color = var(ENV_IGNORE_COLOR)
            .map(|v| v.parse::<Pixel>())
            .transpose()
            .with_context(|| format!("{ENV_IGNORE_COLOR} must be a hex color"))?;
        let diff_color = var(ENV_DIFF_COLOR)
            .map(|v| v.parse::<Pixel>())
            .transpose()
            .with_context(|| format!("{ENV_DIFF_COLOR} must be a hex color"))?;
        Ok(Self {
            engine,
            threshold,
            ignore_color,
            diff_color,
        })
    }

    pub fn from_env() -> Result<Self> {
        Self::from_env_with(|name| std::env::var(name).ok())
    }
}

fn parse_threshold(s: &str) -> Result<f32, String> {
    let v: f32 = s.trim().parse().map_err(|e| format!("{e}"))?;
    validate_threshold(v)
}

pub fn validate_threshold(v: f32) -> Result<f32, String> {
    if !(0.0..=1.0).contains(&v) {
        return Err(format!("threshold must be between 0.0 and 1.0, got {v}"));
    }
    Ok(v)
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub diff: DiffConfig,
}

/// Load `<dir>/.pixdiff/config.toml`. A missing file yields the defaults.
pub fn load_from(dir: &Path) -> Result<Config> {
    let path = dir.join(CONFIG_DIR).join(CONFIG_FILE);
    if !path.exists() {
        return Ok(Config::default());
    }
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config: Config =
        toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))?;
    if let Some(t) = config.diff.threshold {
        validate_threshold(t).map_err(|e| anyhow::anyhow!("diff.{e}"))?;
    }
    Ok(config)
}

pub fn load() -> Result<Config> {
    load_from(Path::new("."))
}
