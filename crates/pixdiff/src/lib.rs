//! Pixel-level image comparison for visual regression tests.
//!
//! Two strategies share one [`PixelDiffer`] interface:
//!
//! - [`ExactDiffer`]: a pixel differs iff any RGBA channel differs.
//! - [`PerceptualDiffer`]: a pixel differs iff its YIQ-weighted color distance
//!   exceeds a fraction of the metric's maximum.
//!
//! Both return a verdict plus a diff image in which unchanged pixels are
//! rendered in muted gray and changed pixels in a highlight color. Images are
//! read through the [`PixelGrid`] trait, implemented for [`image::RgbaImage`]
//! and the in-memory [`PixelBuffer`].
//!
//! ```
//! use pixdiff::{ExactDiffer, Pixel, PixelBuffer, PixelDiffer, PixelGrid};
//!
//! let reference = PixelBuffer::filled(4, 4, Pixel::WHITE);
//! let mut current = reference.clone();
//! current.set_pixel(2, 1, Pixel::BLACK);
//!
//! let result = ExactDiffer::default().diff(&reference, &current).unwrap();
//! assert!(result.different);
//! assert_eq!(result.diff_pixels, 1);
//! ```

pub mod color;
mod differ;
mod error;
mod grid;
mod options;
mod pixel;
mod result;
pub mod visualize;

pub use self::differ::{Differ, ExactDiffer, PerceptualDiffer, PixelDiffer};
pub use self::error::DiffError;
pub use self::grid::{PixelBuffer, PixelGrid};
pub use self::options::{DiffOptions, PerceptualDiffOptions};
pub use self::pixel::{ParsePixelError, Pixel};
pub use self::result::{DiffResult, DimensionMismatch};

/// Run `differ` on images that may be absent, e.g. a reference screenshot
/// that was never recorded.
///
/// Fails with [`DiffError::MissingArgument`] naming the first absent image.
pub fn compare<D, G>(
    differ: &D,
    left: Option<&G>,
    right: Option<&G>,
) -> Result<DiffResult<G>, DiffError>
where
    D: PixelDiffer,
    G: PixelGrid,
{
    let left = left.ok_or(DiffError::MissingArgument("left"))?;
    let right = right.ok_or(DiffError::MissingArgument("right"))?;
    differ.diff(left, right)
}
