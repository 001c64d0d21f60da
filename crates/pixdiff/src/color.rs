//! Alpha blending and YIQ color math.
//!
//! The perceptual metric is from "Measuring perceived color difference using
//! YIQ NTSC transmission color space in mobile applications" (Kotsarenko and
//! Ramos, 2010). Coefficients must stay bit-exact: reference diff images are
//! compared pixel-for-pixel.

#![allow(clippy::excessive_precision)]

use crate::pixel::Pixel;

/// Maximum possible value of [`perceptual_distance`].
pub const MAX_YIQ_DELTA: f32 = 35215.0;

const Y_WEIGHT: f32 = 0.5053;
const I_WEIGHT: f32 = 0.299;
const Q_WEIGHT: f32 = 0.1957;

/// Composite `src` over `dst` with weight `alpha`.
///
/// Integer arithmetic with a flooring shift: `blend(0, 255, 26) == 229`.
pub fn blend(src: u8, dst: u8, alpha: u8) -> u8 {
    let delta = i32::from(src) - i32::from(dst);
    (((i32::from(alpha) * delta) >> 8) + i32::from(dst)) as u8
}

/// Blend each channel over white using the pixel's own alpha.
pub fn flatten(p: Pixel) -> (u8, u8, u8) {
    (blend(p.r, 255, p.a), blend(p.g, 255, p.a), blend(p.b, 255, p.a))
}

/// Luma of the color flattened over white, truncated to `u8`.
pub fn luminosity(r: u8, g: u8, b: u8, a: u8) -> u8 {
    let (r, g, b) = flatten(Pixel::rgba(r, g, b, a));
    rgb2y(r.into(), g.into(), b.into()) as u8
}

pub fn rgb2y(r: f32, g: f32, b: f32) -> f32 {
    r * 0.29889531 + g * 0.58662247 + b * 0.11448223
}

pub fn rgb2i(r: f32, g: f32, b: f32) -> f32 {
    r * 0.59597799 - g * 0.27417610 - b * 0.32180189
}

pub fn rgb2q(r: f32, g: f32, b: f32) -> f32 {
    r * 0.21147017 - g * 0.52261711 + b * 0.31114694
}

/// Squared, weighted YIQ distance between two colors after flattening
/// transparency over white. Symmetric; ranges over `0.0..=MAX_YIQ_DELTA`.
pub fn perceptual_distance(p1: Pixel, p2: Pixel) -> f32 {
    let (r1, g1, b1) = flatten(p1);
    let (r2, g2, b2) = flatten(p2);
    let (r1, g1, b1) = (f32::from(r1), f32::from(g1), f32::from(b1));
    let (r2, g2, b2) = (f32::from(r2), f32::from(g2), f32::from(b2));

    let y = rgb2y(r1, g1, b1) - rgb2y(r2, g2, b2);
    let i = rgb2i(r1, g1, b1) - rgb2i(r2, g2, b2);
    let q = rgb2q(r1, g1, b1) - rgb2q(r2, g2, b2);

    Y_WEIGHT * y * y + I_WEIGHT * i * i + Q_WEIGHT * q * q
}
