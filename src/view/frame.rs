//! Frame abstraction for drawing primitives
//!
//! Provides a simple, safe API for pixel buffer operations instead of
//! direct buffer indexing scattered throughout rendering code.

use slotdock::geometry::Rect;

/// Blend a foreground color onto a background color using alpha compositing.
///
/// Both colors are in ARGB format (0xAARRGGBB). Returns the blended color with
/// full opacity.
#[inline]
pub fn blend_colors(bg: u32, fg: u32, alpha: f32) -> u32 {
    let bg_r = ((bg >> 16) & 0xFF) as f32;
    let bg_g = ((bg >> 8) & 0xFF) as f32;
    let bg_b = (bg & 0xFF) as f32;

    let fg_r = ((fg >> 16) & 0xFF) as f32;
    let fg_g = ((fg >> 8) & 0xFF) as f32;
    let fg_b = (fg & 0xFF) as f32;

    let final_r = (bg_r * (1.0 - alpha) + fg_r * alpha) as u32;
    let final_g = (bg_g * (1.0 - alpha) + fg_g * alpha) as u32;
    let final_b = (bg_b * (1.0 - alpha) + fg_b * alpha) as u32;

    0xFF000000 | (final_r << 16) | (final_g << 8) | final_b
}

/// A frame buffer wrapper providing safe drawing primitives.
///
/// All coordinates are in physical pixels. Out-of-bounds operations are clipped.
pub struct Frame<'a> {
    buffer: &'a mut [u32],
    width: usize,
    height: usize,
}

impl<'a> Frame<'a> {
    /// Create a new frame from a mutable pixel buffer
    ///
    /// If the buffer is smaller than width*height, the height is reduced to fit.
    pub fn new(buffer: &'a mut [u32], width: usize, height: usize) -> Self {
        let expected_size = width * height;
        let actual_size = buffer.len();

        let height = if actual_size < expected_size && width > 0 {
            actual_size / width
        } else {
            height
        };

        Self {
            buffer,
            width,
            height,
        }
    }

    /// Clear the entire buffer with a solid color
    #[inline]
    pub fn clear(&mut self, color: u32) {
        self.buffer.fill(color);
    }

    /// Pixel bounds of a rect, clipped to the frame
    fn clip(&self, rect: Rect) -> (usize, usize, usize, usize) {
        let x0 = (rect.x.max(0.0) as usize).min(self.width);
        let y0 = (rect.y.max(0.0) as usize).min(self.height);
        let x1 = ((rect.x + rect.width).max(0.0) as usize).min(self.width);
        let y1 = ((rect.y + rect.height).max(0.0) as usize).min(self.height);
        (x0, y0, x1, y1)
    }

    /// Fill a rectangle with a solid color (no alpha blending)
    pub fn fill_rect(&mut self, rect: Rect, color: u32) {
        let (x0, y0, x1, y1) = self.clip(rect);
        for y in y0..y1 {
            let row_start = y * self.width;
            self.buffer[row_start + x0..row_start + x1].fill(color);
        }
    }

    /// Fill a rectangle with alpha blending (color is ARGB format)
    pub fn fill_rect_blended(&mut self, rect: Rect, color: u32) {
        let alpha = ((color >> 24) & 0xFF) as f32 / 255.0;
        if alpha <= 0.0 {
            return;
        }
        if alpha >= 1.0 {
            return self.fill_rect(rect, color | 0xFF000000);
        }

        let (x0, y0, x1, y1) = self.clip(rect);
        for y in y0..y1 {
            let row_start = y * self.width;
            for x in x0..x1 {
                let idx = row_start + x;
                self.buffer[idx] = blend_colors(self.buffer[idx], color, alpha);
            }
        }
    }

    /// Draw a rectangle outline `thickness` pixels wide, inside the rect
    pub fn stroke_rect(&mut self, rect: Rect, thickness: f32, color: u32) {
        let t = thickness.min(rect.width / 2.0).min(rect.height / 2.0);
        self.fill_rect(Rect::new(rect.x, rect.y, rect.width, t), color);
        self.fill_rect(
            Rect::new(rect.x, rect.y + rect.height - t, rect.width, t),
            color,
        );
        self.fill_rect(Rect::new(rect.x, rect.y, t, rect.height), color);
        self.fill_rect(
            Rect::new(rect.x + rect.width - t, rect.y, t, rect.height),
            color,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_rect_clips() {
        let mut buffer = vec![0u32; 4 * 3];
        let mut frame = Frame::new(&mut buffer, 4, 3);
        frame.fill_rect(Rect::new(2.0, 1.0, 10.0, 10.0), 0xFFFFFFFF);
        assert_eq!(buffer[1 * 4 + 1], 0);
        assert_eq!(buffer[1 * 4 + 2], 0xFFFFFFFF);
        assert_eq!(buffer[2 * 4 + 3], 0xFFFFFFFF);
    }

    #[test]
    fn test_negative_rect_draws_nothing() {
        let mut buffer = vec![0u32; 4];
        let mut frame = Frame::new(&mut buffer, 2, 2);
        frame.fill_rect(Rect::new(-10.0, -10.0, 5.0, 5.0), 0xFFFFFFFF);
        assert!(buffer.iter().all(|&px| px == 0));
    }

    #[test]
    fn test_blend_half() {
        let blended = blend_colors(0xFF000000, 0xFFFFFFFF, 0.5);
        assert_eq!(blended, 0xFF7F7F7F);
    }
}
