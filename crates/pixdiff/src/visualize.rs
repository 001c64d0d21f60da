use crate::color::{blend, luminosity};
use crate::pixel::Pixel;

/// Blend weight that fades the gray 90% of the way towards white.
const MUTED_ALPHA: u8 = 26;

/// Desaturated, faded rendering of `p` used for pixels that did not change,
/// so only the highlighted differences stand out in the diff image.
pub fn to_muted_gray(p: Pixel) -> Pixel {
    let v = blend(luminosity(p.r, p.g, p.b, p.a), 255, MUTED_ALPHA);
    Pixel::gray(v)
}
