use std::fmt;
use std::str::FromStr;

use image::Rgba;
use serde::{Deserialize, Serialize};

/// An 8-bit-per-channel RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pixel {
    pub const TRANSPARENT: Pixel = Pixel::rgba(0, 0, 0, 0);
    pub const BLACK: Pixel = Pixel::rgb(0, 0, 0);
    pub const WHITE: Pixel = Pixel::rgb(255, 255, 255);
    pub const RED: Pixel = Pixel::rgb(255, 0, 0);
    pub const GREEN: Pixel = Pixel::rgb(0, 255, 0);
    pub const BLUE: Pixel = Pixel::rgb(0, 0, 255);
    pub const YELLOW: Pixel = Pixel::rgb(255, 255, 0);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    pub const fn gray(v: u8) -> Self {
        Self::rgb(v, v, v)
    }

    pub fn is_opaque(&self) -> bool {
        self.a == 255
    }
}

impl From<Rgba<u8>> for Pixel {
    fn from(Rgba([r, g, b, a]): Rgba<u8>) -> Self {
        Self::rgba(r, g, b, a)
    }
}

impl From<Pixel> for Rgba<u8> {
    fn from(p: Pixel) -> Self {
        Rgba([p.r, p.g, p.b, p.a])
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid color {0:?}: expected #rrggbb or #rrggbbaa")]
pub struct ParsePixelError(String);

/// Accepts `#rrggbb` or `#rrggbbaa` (the `#` is optional).
impl FromStr for Pixel {
    type Err = ParsePixelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !(hex.len() == 6 || hex.len() == 8) || !hex.is_ascii() {
            return Err(ParsePixelError(s.to_owned()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| ParsePixelError(s.to_owned()))
        };
        let a = if hex.len() == 8 { channel(6)? } else { 255 };
        Ok(Self::rgba(channel(0)?, channel(2)?, channel(4)?, a))
    }
}

impl TryFrom<String> for Pixel {
    type Error = ParsePixelError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Pixel> for String {
    fn from(p: Pixel) -> Self {
        p.to_string()
    }
}

/// Opaque colors print as `#rrggbb`, everything else as `#rrggbbaa`.
impl fmt::Display for Pixel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if !self.is_opaque() {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}
