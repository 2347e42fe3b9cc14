//! In-memory monochrome panel
//!
//! Packs pixels one bit each, eight to a byte, row-major. Used by the hosted
//! binary in place of a real panel and by tests to inspect what was drawn.

use super::{Color, Display};
use crate::error::DisplayError;

/// Text drawn at a pixel position. Glyph rasterisation is the panel
/// driver's job, so the framebuffer only records it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRun {
    pub text: String,
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonoFramebuffer {
    width: u32,
    height: u32,
    stride: usize,
    pixels: Vec<u8>,
    texts: Vec<TextRun>,
    frames_presented: u64,
}

impl MonoFramebuffer {
    pub fn new(width: u32, height: u32) -> Self {
        let stride = width.div_ceil(8) as usize;
        Self {
            width,
            height,
            stride,
            pixels: vec![0; stride * height as usize],
            texts: Vec::new(),
            frames_presented: 0,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn texts(&self) -> &[TextRun] {
        &self.texts
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    pub fn pixel(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let byte = self.pixels[y as usize * self.stride + (x / 8) as usize];
        byte & (0x80 >> (x % 8)) != 0
    }

    pub fn lit_count(&self) -> usize {
        self.pixels.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Number of lit pixels in a rectangle
    pub fn lit_in_rect(&self, x: u32, y: u32, w: u32, h: u32) -> usize {
        (y..y + h)
            .flat_map(|py| (x..x + w).map(move |px| (px, py)))
            .filter(|&(px, py)| self.pixel(px, py))
            .count()
    }

    fn set(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return;
        }
        let idx = y as usize * self.stride + (x / 8) as usize;
        let mask = 0x80u8 >> (x % 8);
        if color.is_on() {
            self.pixels[idx] |= mask;
        } else {
            self.pixels[idx] &= !mask;
        }
    }

    /// Render as text, `#` for lit pixels, one line per `cell_px` rows and
    /// columns (sampling each block's top-left pixel plus its centre).
    pub fn to_ascii(&self, cell_px: u32) -> String {
        let step = cell_px.max(1);
        let mut out = String::new();
        for y in (0..self.height).step_by(step as usize) {
            for x in (0..self.width).step_by(step as usize) {
                let lit = self.pixel(x, y) || self.pixel(x + step / 2, y + step / 2);
                out.push(if lit { '#' } else { '.' });
            }
            out.push('\n');
        }
        for run in &self.texts {
            out.push_str(&format!("@({}, {}) {}\n", run.x, run.y, run.text));
        }
        out
    }
}

impl Display for MonoFramebuffer {
    fn clear_all(&mut self) -> Result<(), DisplayError> {
        self.pixels.fill(0);
        self.texts.clear();
        Ok(())
    }

    fn fill_rect(
        &mut self,
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        color: Color,
    ) -> Result<(), DisplayError> {
        for py in y..y + h as i32 {
            for px in x..x + w as i32 {
                self.set(px, py, color);
            }
        }
        Ok(())
    }

    fn draw_rect_outline(
        &mut self,
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        color: Color,
    ) -> Result<(), DisplayError> {
        if w == 0 || h == 0 {
            return Ok(());
        }
        let (x1, y1) = (x + w as i32 - 1, y + h as i32 - 1);
        for px in x..=x1 {
            self.set(px, y, color);
            self.set(px, y1, color);
        }
        for py in y..=y1 {
            self.set(x, py, color);
            self.set(x1, py, color);
        }
        Ok(())
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32) -> Result<(), DisplayError> {
        self.texts.push(TextRun {
            text: text.to_string(),
            x,
            y,
        });
        Ok(())
    }

    fn present(&mut self) -> Result<(), DisplayError> {
        self.frames_presented += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_and_clear() {
        let mut fb = MonoFramebuffer::new(16, 8);
        fb.fill_rect(2, 1, 3, 2, Color::On).unwrap();
        assert_eq!(fb.lit_count(), 6);
        assert!(fb.pixel(2, 1));
        assert!(fb.pixel(4, 2));
        assert!(!fb.pixel(5, 2));
        fb.clear_all().unwrap();
        assert_eq!(fb.lit_count(), 0);
    }

    #[test]
    fn test_drawing_is_clipped() {
        let mut fb = MonoFramebuffer::new(10, 10);
        fb.fill_rect(-4, 8, 8, 8, Color::On).unwrap();
        assert_eq!(fb.lit_count(), 4 * 2);
        assert!(!fb.pixel(10, 9));
    }

    #[test]
    fn test_outline() {
        let mut fb = MonoFramebuffer::new(16, 16);
        fb.draw_rect_outline(0, 0, 8, 8, Color::On).unwrap();
        assert_eq!(fb.lit_count(), 28);
        assert!(!fb.pixel(3, 3));
    }

    #[test]
    fn test_present_counts_frames() {
        let mut fb = MonoFramebuffer::new(8, 8);
        fb.present().unwrap();
        fb.present().unwrap();
        assert_eq!(fb.frames_presented(), 2);
    }

    #[test]
    fn test_ascii_dump() {
        let mut fb = MonoFramebuffer::new(16, 8);
        fb.fill_rect(8, 0, 8, 8, Color::On).unwrap();
        fb.draw_text("hi", 0, 0).unwrap();
        assert_eq!(fb.to_ascii(8), ".#\n@(0, 0) hi\n");
    }
}
