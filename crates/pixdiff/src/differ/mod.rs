mod exact;
mod perceptual;

use tracing::debug;

pub use self::exact::ExactDiffer;
pub use self::perceptual::PerceptualDiffer;

use crate::error::DiffError;
use crate::grid::PixelGrid;
use crate::options::DiffOptions;
use crate::pixel::Pixel;
use crate::result::DiffResult;
use crate::visualize::to_muted_gray;

/// A pixel comparison strategy.
pub trait PixelDiffer {
    fn name(&self) -> &str;

    /// Compare `left` against `right`, rendering a diff image of the same
    /// backend type.
    fn diff<G: PixelGrid>(&self, left: &G, right: &G) -> Result<DiffResult<G>, DiffError>;
}

/// The built-in strategies, for picking one at runtime.
#[derive(Clone, Debug)]
pub enum Differ {
    Exact(ExactDiffer),
    Perceptual(PerceptualDiffer),
}

impl PixelDiffer for Differ {
    fn name(&self) -> &str {
        match self {
            Self::Exact(d) => d.name(),
            Self::Perceptual(d) => d.name(),
        }
    }

    fn diff<G: PixelGrid>(&self, left: &G, right: &G) -> Result<DiffResult<G>, DiffError> {
        match self {
            Self::Exact(d) => d.diff(left, right),
            Self::Perceptual(d) => d.diff(left, right),
        }
    }
}

impl From<ExactDiffer> for Differ {
    fn from(d: ExactDiffer) -> Self {
        Self::Exact(d)
    }
}

impl From<PerceptualDiffer> for Differ {
    fn from(d: PerceptualDiffer) -> Self {
        Self::Perceptual(d)
    }
}

/// Walk every coordinate, classify with `is_different` and render the diff
/// image. Ignored pixels are handled here and never reach `is_different`.
fn scan<G, F>(
    name: &str,
    left: &G,
    right: &G,
    options: &DiffOptions,
    is_different: F,
) -> DiffResult<G>
where
    G: PixelGrid,
    F: Fn(Pixel, Pixel) -> bool,
{
    if left.dimensions() != right.dimensions() {
        debug!(
            differ = name,
            left = ?left.dimensions(),
            right = ?right.dimensions(),
            "dimension mismatch, skipping pixel scan"
        );
        return DiffResult::mismatch(left.dimensions(), right.dimensions());
    }

    let (w, h) = left.dimensions();
    let total_pixels = u64::from(w) * u64::from(h);
    let mut diff_pixels: u64 = 0;
    let mut diff_image = G::blank(w, h);
    let ignored = options.ignore_color.map(to_muted_gray);

    for y in 0..h {
        for x in 0..w {
            let p1 = left.pixel(x, y);
            let p2 = right.pixel(x, y);

            if let Some(muted) = ignored
                && options.is_ignored(p1, p2)
            {
                diff_image.set_pixel(x, y, muted);
                continue;
            }

            if is_different(p1, p2) {
                diff_pixels += 1;
                diff_image.set_pixel(x, y, options.diff_color);
            } else {
                diff_image.set_pixel(x, y, to_muted_gray(p1));
            }
        }
    }

    debug!(differ = name, diff_pixels, total_pixels, "pixel scan complete");

    DiffResult {
        different: diff_pixels > 0,
        diff_image: Some(diff_image),
        diff_pixels,
        total_pixels,
        dimension_mismatch: None,
    }
}


#[cfg(test)]
mod tests {
    use image::RgbaImage;

    use super::test_support::pattern;
    use super::*;
    use crate::grid::PixelBuffer;
    use crate::options::PerceptualDiffOptions;

    fn differs() -> Vec<Differ> {
        vec![
            ExactDiffer::default().into(),
            PerceptualDiffer::new(PerceptualDiffOptions::with_threshold(0.1)).into(),
        ]
    }

    #[test]
    fn enum_dispatches_by_name() {
        let names: Vec<String> = differs().iter().map(|d| d.name().to_owned()).collect();
        assert_eq!(names, ["exact", "perceptual"]);
    }

    #[test]
    fn reflexive_and_renders_muted_gray() {
        let a = pattern(7, 5, 3);
        for differ in differs() {
            let r = differ.diff(&a, &a).unwrap();
            assert!(!r.different, "{}", differ.name());
            assert_eq!(r.diff_pixels, 0);
            assert_eq!(r.total_pixels, 35);
            let img = r.diff_image.unwrap();
            for y in 0..5 {
                for x in 0..7 {
                    assert_eq!(img.pixel(x, y), to_muted_gray(a.pixel(x, y)));
                }
            }
        }
    }

    #[test]
    fn mismatched_dimensions_skip_the_scan() {
        let a = pattern(2, 2, 0);
        for b in [pattern(2, 3, 0), pattern(3, 2, 0), PixelBuffer::blank(0, 0)] {
            for differ in differs() {
                let r = differ.diff(&a, &b).unwrap();
                assert!(r.different);
                assert!(r.diff_image.is_none());
                assert_eq!(r.score(), 1.0);
                assert_eq!(
                    r.dimension_mismatch,
                    Some(crate::DimensionMismatch {
                        left: (2, 2),
                        right: b.dimensions()
                    })
                );
            }
        }
    }

    #[test]
    fn same_verdict_in_both_directions() {
        let a = pattern(6, 6, 1);
        let mut b = a.clone();
        b.set_pixel(2, 3, Pixel::rgb(9, 9, 9));
        for differ in differs() {
            let ab = differ.diff(&a, &b).unwrap();
            let ba = differ.diff(&b, &a).unwrap();
            assert_eq!(ab.different, ba.different);
            assert_eq!(ab.diff_pixels, ba.diff_pixels);
        }
    }

    #[test]
    fn empty_images_are_equal() {
        let a = PixelBuffer::blank(0, 0);
        for differ in differs() {
            let r = differ.diff(&a, &a).unwrap();
            assert!(!r.different);
            assert_eq!(r.score(), 0.0);
            assert_eq!(r.diff_image.unwrap().dimensions(), (0, 0));
        }
    }

    #[test]
    fn backends_agree() {
        let a = pattern(9, 4, 11);
        let mut b = pattern(9, 4, 11);
        b.set_pixel(0, 0, Pixel::BLACK);
        b.set_pixel(8, 3, Pixel::WHITE);

        let (ia, ib) = (RgbaImage::from(&a), RgbaImage::from(&b));
        for differ in differs() {
            let buf = differ.diff(&a, &b).unwrap();
            let img = differ.diff(&ia, &ib).unwrap();
            assert_eq!(buf.different, img.different);
            assert_eq!(buf.diff_pixels, img.diff_pixels);
            assert_eq!(
                RgbaImage::from(&buf.diff_image.unwrap()),
                img.diff_image.unwrap()
            );
        }
    }

    #[test]
    fn score_is_ratio_of_diff_to_total() {
        let a = PixelBuffer::filled(4, 5, Pixel::WHITE);
        let mut b = a.clone();
        b.set_pixel(1, 1, Pixel::BLACK);
        b.set_pixel(3, 4, Pixel::BLACK);
        let r = ExactDiffer::default().diff(&a, &b).unwrap();
        assert_eq!(r.diff_pixels, 2);
        assert!((r.score() - 0.1).abs() < 1e-9);
    }
}
