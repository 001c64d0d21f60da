use serde::{Deserialize, Serialize};

use crate::error::DiffError;
use crate::pixel::Pixel;

/// Options shared by every differ.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffOptions {
    /// Pixels of this exact color (in either image) are never reported as
    /// different and render as muted gray.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_color: Option<Pixel>,

    /// Color painted over differing pixels. Should be opaque.
    #[serde(default = "default_diff_color")]
    pub diff_color: Pixel,
}

fn default_diff_color() -> Pixel {
    Pixel::RED
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            ignore_color: None,
            diff_color: default_diff_color(),
        }
    }
}

impl DiffOptions {
    /// True if `ignore_color` is set and matches either pixel on all channels.
    pub fn is_ignored(&self, p1: Pixel, p2: Pixel) -> bool {
        self.ignore_color.is_some_and(|c| c == p1 || c == p2)
    }
}

/// Options for the perceptual differ.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PerceptualDiffOptions {
    #[serde(flatten)]
    pub common: DiffOptions,

    /// Fraction of the maximum YIQ distance two pixels may differ by and
    /// still count as equal. Only the magnitude matters; must be within
    /// `-1.0..=1.0`.
    #[serde(default)]
    pub threshold: f32,
}

impl PerceptualDiffOptions {
    pub fn with_threshold(threshold: f32) -> Self {
        Self {
            threshold,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), DiffError> {
        // NaN fails the comparison too and is rejected
        if self.threshold.abs() <= 1.0 {
            Ok(())
        } else {
            Err(DiffError::InvalidThreshold(self.threshold))
        }
    }
}

impl AsRef<DiffOptions> for PerceptualDiffOptions {
    fn as_ref(&self) -> &DiffOptions {
        &self.common
    }
}
