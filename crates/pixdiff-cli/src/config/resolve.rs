use anyhow::{Context, Result};
use pixdiff::{
    DiffOptions, Differ, ExactDiffer, PerceptualDiffOptions, PerceptualDiffer, Pixel,
};
use tracing::debug;

use super::{DiffConfig, Engine, load, validate_threshold};

const DEFAULT_THRESHOLD: f32 = 0.1;

/// Fully resolved config after CLI > env > file > defaults merge.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedDiffConfig {
    pub engine: Engine,
    pub threshold: f32,
    pub ignore_color: Option<Pixel>,
    pub diff_color: Pixel,
}

impl ResolvedDiffConfig {
    pub fn new(cli: &DiffConfig) -> Result<Self> {
        // 1. File layer
        let file_config = load().context("Failed to load .pixdiff/config.toml")?;

        // 2. Env layer
        let env = DiffConfig::from_env()?;

        Self::layered(file_config.diff, &env, cli)
    }

    /// Merge `cli` over `env` over `file`, then fill in defaults.
    pub fn layered(file: DiffConfig, env: &DiffConfig, cli: &DiffConfig) -> Result<Self> {
        let mut merged = file;
        merged.merge(env);
        merged.merge(cli);

        let engine = merged.engine.unwrap_or_default();
        if engine == Engine::Exact && merged.threshold.is_some() {
            debug!("threshold has no effect with the exact engine");
        }

        let threshold = merged.threshold.unwrap_or(DEFAULT_THRESHOLD);
        validate_threshold(threshold).map_err(|e| anyhow::anyhow!("{e}"))?;

        Ok(Self {
            engine,
            threshold,
            ignore_color: merged.ignore_color,
            diff_color: merged.diff_color.unwrap_or(Pixel::RED),
        })
    }

    pub fn differ(&self) -> Differ {
        let common = DiffOptions {
            ignore_color: self.ignore_color,
            diff_color: self.diff_color,
        };
        match self.engine {
            Engine::Exact => ExactDiffer::new(common).into(),
            Engine::Perceptual => PerceptualDiffer::new(PerceptualDiffOptions {
                common,
                threshold: self.threshold,
            })
            .into(),
        }
    }
}
