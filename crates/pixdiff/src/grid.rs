use image::RgbaImage;

use crate::pixel::Pixel;

/// Random-access RGBA image storage the differs read from and render into.
///
/// Coordinates are zero-based. Implementations may panic on out-of-bounds
/// access; the differs only touch `0..width` x `0..height`.
pub trait PixelGrid: Sized {
    /// A grid of the given size with every pixel transparent black.
    fn blank(width: u32, height: u32) -> Self;

    fn width(&self) -> u32;

    fn height(&self) -> u32;

    fn pixel(&self, x: u32, y: u32) -> Pixel;

    fn set_pixel(&mut self, x: u32, y: u32, pixel: Pixel);

    fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }
}

impl PixelGrid for RgbaImage {
    fn blank(width: u32, height: u32) -> Self {
        RgbaImage::new(width, height)
    }

    fn width(&self) -> u32 {
        RgbaImage::width(self)
    }

    fn height(&self) -> u32 {
        RgbaImage::height(self)
    }

    fn pixel(&self, x: u32, y: u32) -> Pixel {
        (*self.get_pixel(x, y)).into()
    }

    fn set_pixel(&mut self, x: u32, y: u32, pixel: Pixel) {
        self.put_pixel(x, y, pixel.into());
    }
}

/// Row-major in-memory grid, for callers that don't go through `image`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Pixel>,
}

impl PixelBuffer {
    pub fn filled(width: u32, height: u32, pixel: Pixel) -> Self {
        Self {
            width,
            height,
            pixels: vec![pixel; width as usize * height as usize],
        }
    }

    /// Wrap row-major pixels. Returns `None` if `pixels.len() != width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Pixel>) -> Option<Self> {
        (pixels.len() == width as usize * height as usize).then_some(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    fn index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of bounds for {}x{} grid",
            self.width,
            self.height
        );
        y as usize * self.width as usize + x as usize
    }
}

impl PixelGrid for PixelBuffer {
    fn blank(width: u32, height: u32) -> Self {
        Self::filled(width, height, Pixel::TRANSPARENT)
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn pixel(&self, x: u32, y: u32) -> Pixel {
        self.pixels[self.index(x, y)]
    }

    fn set_pixel(&mut self, x: u32, y: u32, pixel: Pixel) {
        let i = self.index(x, y);
        self.pixels[i] = pixel;
    }
}

impl From<&RgbaImage> for PixelBuffer {
    fn from(img: &RgbaImage) -> Self {
        Self {
            width: img.width(),
            height: img.height(),
            pixels: img.pixels().map(|p| Pixel::from(*p)).collect(),
        }
    }
}

impl From<&PixelBuffer> for RgbaImage {
    fn from(buf: &PixelBuffer) -> Self {
        RgbaImage::from_fn(buf.width, buf.height, |x, y| buf.pixel(x, y).into())
    }
}
