use crate::color::{MAX_YIQ_DELTA, perceptual_distance};
use crate::error::DiffError;
use crate::grid::PixelGrid;
use crate::options::PerceptualDiffOptions;
use crate::result::DiffResult;

use super::{PixelDiffer, scan};

/// Flags a pixel iff its YIQ distance exceeds `MAX_YIQ_DELTA * threshold^2`.
#[derive(Clone, Debug)]
pub struct PerceptualDiffer {
    /// `None` makes every `diff` call fail with `MissingArgument("options")`.
    pub options: Option<PerceptualDiffOptions>,
}

impl PerceptualDiffer {
    pub fn new(options: PerceptualDiffOptions) -> Self {
        Self {
            options: Some(options),
        }
    }
}

impl Default for PerceptualDiffer {
    fn default() -> Self {
        Self::new(PerceptualDiffOptions::default())
    }
}

/// Round to two decimals (ties to even) in `f64`.
fn round_hundredths(v: f32) -> f64 {
    (f64::from(v) * 100.0).round_ties_even() / 100.0
}

impl PixelDiffer for PerceptualDiffer {
    fn name(&self) -> &str {
        "perceptual"
    }

    fn diff<G: PixelGrid>(&self, left: &G, right: &G) -> Result<DiffResult<G>, DiffError> {
        let options = self
            .options
            .as_ref()
            .ok_or(DiffError::MissingArgument("options"))?;
        options.validate()?;

        // Squared-distance bound, so no sqrt per pixel.
        let max_difference = f64::from(MAX_YIQ_DELTA * options.threshold * options.threshold);

        Ok(scan(self.name(), left, right, &options.common, |p1, p2| {
            round_hundredths(perceptual_distance(p1, p2)) > max_difference
        }))
    }
}
