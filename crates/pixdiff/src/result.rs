use serde::Serialize;

/// Sizes of the two inputs when they could not be compared.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DimensionMismatch {
    pub left: (u32, u32),
    pub right: (u32, u32),
}

/// Outcome of one comparison.
///
/// `diff_image` is `Some` iff both inputs had the same dimensions.
#[derive(Clone, Debug)]
pub struct DiffResult<G> {
    pub different: bool,
    /// Unchanged pixels in muted gray, differing pixels in the diff color.
    pub diff_image: Option<G>,
    /// Number of pixels classified as different (ignored pixels excluded).
    pub diff_pixels: u64,
    pub total_pixels: u64,
    pub dimension_mismatch: Option<DimensionMismatch>,
}

impl<G> DiffResult<G> {
    pub(crate) fn mismatch(left: (u32, u32), right: (u32, u32)) -> Self {
        Self {
            different: true,
            diff_image: None,
            diff_pixels: 0,
            total_pixels: 0,
            dimension_mismatch: Some(DimensionMismatch { left, right }),
        }
    }

    /// Fraction of differing pixels: 0.0 = identical, 1.0 = all different
    /// (or not comparable).
    pub fn score(&self) -> f64 {
        if self.dimension_mismatch.is_some() {
            1.0
        } else if self.total_pixels == 0 {
            0.0
        } else {
            self.diff_pixels as f64 / self.total_pixels as f64
        }
    }
}
