//! The RGB pixel grid scenes render into.
//!
//! Rows are stored bottom-up so pixel (x, y) matches the y-up shading
//! coordinate system; `to_rgba8` flips rows into the top-down order that
//! textures and image files expect.

use glimmer_core::Rgb;

#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    data: Vec<Rgb>,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![Rgb::BLACK; (width * height) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    fn idx(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width && y < self.height);
        (y * self.width + x) as usize
    }

    pub fn get(&self, x: u32, y: u32) -> Rgb {
        self.data[self.idx(x, y)]
    }

    pub fn put(&mut self, x: u32, y: u32, color: Rgb) {
        let i = self.idx(x, y);
        self.data[i] = color;
    }

    /// Additive blend into one pixel
    pub fn add(&mut self, x: u32, y: u32, color: Rgb) {
        let i = self.idx(x, y);
        self.data[i] += color;
    }

    /// Multiply every pixel by `factor`. This is the trail fade: it must run
    /// before any new contributions are splatted for the frame.
    pub fn decay(&mut self, factor: f32) {
        for px in &mut self.data {
            *px = *px * factor;
        }
    }

    pub fn fill(&mut self, color: Rgb) {
        for px in &mut self.data {
            *px = color;
        }
    }

    /// Raw pixels, row-major from the bottom row up
    pub fn pixels(&self) -> &[Rgb] {
        &self.data
    }

    pub fn pixels_mut(&mut self) -> &mut [Rgb] {
        &mut self.data
    }

    /// Pack into 8-bit RGBA bytes, top row first, alpha fully opaque
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity((self.width * self.height * 4) as usize);
        for y in (0..self.height).rev() {
            for x in 0..self.width {
                let [r, g, b] = self.get(x, y).to_bytes();
                bytes.extend_from_slice(&[r, g, b, 255]);
            }
        }
        bytes
    }
}
