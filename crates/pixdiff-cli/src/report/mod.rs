pub mod terminal;

use std::path::{Path, PathBuf};
use std::time::Duration;

use pixdiff::{DiffResult, DimensionMismatch};
use serde::Serialize;

/// Everything printed about one comparison, in either output format.
#[derive(Debug, Serialize)]
pub struct Report {
    pub left: PathBuf,
    pub right: PathBuf,
    pub engine: String,
    pub different: bool,
    pub diff_pixels: u64,
    pub total_pixels: u64,
    pub score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimension_mismatch: Option<DimensionMismatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_image: Option<PathBuf>,
    #[serde(rename = "elapsed_ms", serialize_with = "serialize_millis")]
    pub elapsed: Duration,
}

fn serialize_millis<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(d.as_secs_f64() * 1000.0)
}

impl Report {
    pub fn new<G>(
        left: &Path,
        right: &Path,
        engine: &str,
        result: &DiffResult<G>,
        diff_image: Option<&Path>,
        elapsed: Duration,
    ) -> Self {
        Self {
            left: left.to_path_buf(),
            right: right.to_path_buf(),
            engine: engine.to_owned(),
            different: result.different,
            diff_pixels: result.diff_pixels,
            total_pixels: result.total_pixels,
            score: result.score(),
            dimension_mismatch: result.dimension_mismatch,
            diff_image: diff_image.map(Path::to_path_buf),
            elapsed,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
