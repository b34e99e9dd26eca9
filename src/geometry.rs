//! Strip geometry and pointer-to-slot mapping
//!
//! All functions here are pure. Screen coordinates are converted to strip-local
//! ones using an origin the caller passes in, never ambient window state.
//!
//! Slots are assumed to share one width. A render function that produces
//! visuals of different widths will see pointer mapping and offsets computed
//! against the uniform `slot_width` regardless.

use serde::{Deserialize, Serialize};

use crate::error::DockError;

/// A point in logical pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Rectangle for layout calculations
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }

    /// Same rectangle moved along the x axis
    pub fn shifted_x(&self, dx: f32) -> Self {
        Self {
            x: self.x + dx,
            ..*self
        }
    }

    /// Shrink by `inset` on every side
    pub fn inset(&self, inset: f32) -> Self {
        Self {
            x: self.x + inset,
            y: self.y + inset,
            width: (self.width - 2.0 * inset).max(0.0),
            height: (self.height - 2.0 * inset).max(0.0),
        }
    }
}

/// Fixed slot dimensions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlotMetrics {
    /// Width of the item visual itself
    #[serde(default = "default_content_width")]
    pub content_width: f32,
    /// Horizontal margin on each side of the visual
    #[serde(default = "default_margin")]
    pub margin: f32,
    #[serde(default = "default_height")]
    pub height: f32,
}

fn default_content_width() -> f32 {
    48.0
}

fn default_margin() -> f32 {
    8.0
}

fn default_height() -> f32 {
    64.0
}

impl Default for SlotMetrics {
    fn default() -> Self {
        Self {
            content_width: default_content_width(),
            margin: default_margin(),
            height: default_height(),
        }
    }
}

impl SlotMetrics {
    /// Metrics whose outer width is exactly `slot_width`, no margins
    pub fn uniform(slot_width: f32) -> Self {
        Self {
            content_width: slot_width,
            margin: 0.0,
            height: default_height(),
        }
    }

    /// Outer width: content plus margins on both sides
    pub fn slot_width(&self) -> f32 {
        self.content_width + 2.0 * self.margin
    }

    pub fn validate(&self) -> Result<(), DockError> {
        let width = self.slot_width();
        if width.is_finite() && width > 0.0 && self.margin >= 0.0 {
            Ok(())
        } else {
            Err(DockError::InvalidSlotWidth(width))
        }
    }
}

/// Slot index under a strip-local x coordinate
///
/// `floor(x / slot_width)` clamped to `[0, len - 1]`. NaN maps to slot 0 and
/// infinities clamp to the ends. Returns `None` only for an empty strip.
pub fn slot_index_at(local_x: f32, slot_width: f32, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let raw = (local_x / slot_width).floor();
    // Float-to-int casts saturate and map NaN to 0; clamping the top end in
    // integer space keeps it exact for strips longer than f32 can count
    Some((raw.max(0.0) as usize).min(len - 1))
}

/// Placement of a strip on screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StripGeometry {
    /// Top-left corner of the strip's content box
    pub origin: Point,
    pub metrics: SlotMetrics,
    pub len: usize,
}

impl StripGeometry {
    pub fn new(origin: Point, metrics: SlotMetrics, len: usize) -> Self {
        Self {
            origin,
            metrics,
            len,
        }
    }

    /// Center a strip of `len` slots horizontally, `bottom_gap` above the bottom edge
    pub fn centered(
        window_width: f32,
        window_height: f32,
        bottom_gap: f32,
        metrics: SlotMetrics,
        len: usize,
    ) -> Self {
        let width = metrics.slot_width() * len as f32;
        let origin = Point::new(
            ((window_width - width) / 2.0).max(0.0),
            (window_height - metrics.height - bottom_gap).max(0.0),
        );
        Self::new(origin, metrics, len)
    }

    /// Bounds of the whole strip
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.origin.x,
            self.origin.y,
            self.metrics.slot_width() * self.len as f32,
            self.metrics.height,
        )
    }

    /// Outer rectangle of slot `index` before any drag offset
    pub fn slot_rect(&self, index: usize) -> Rect {
        let width = self.metrics.slot_width();
        Rect::new(
            self.origin.x + width * index as f32,
            self.origin.y,
            width,
            self.metrics.height,
        )
    }

    /// Rectangle of the item visual in slot `index`, moved by `offset`
    pub fn content_rect(&self, index: usize, offset: f32) -> Rect {
        let slot = self.slot_rect(index).shifted_x(offset);
        Rect::new(
            slot.x + self.metrics.margin,
            slot.y,
            self.metrics.content_width,
            slot.height,
        )
    }

    /// Screen x translated into strip-local x
    pub fn local_x(&self, screen_x: f32) -> f32 {
        screen_x - self.origin.x
    }

    /// Clamped target slot for a pointer at `screen_x`
    pub fn index_at(&self, screen_x: f32) -> Option<usize> {
        slot_index_at(self.local_x(screen_x), self.metrics.slot_width(), self.len)
    }

    /// Slot whose rectangle contains the point, without clamping
    pub fn hit_test(&self, point: Point) -> Option<usize> {
        if !self.bounds().contains(point.x, point.y) {
            return None;
        }
        let index = ((point.x - self.origin.x) / self.metrics.slot_width()).floor() as usize;
        (index < self.len).then_some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_slot_width() {
        assert_eq!(SlotMetrics::default().slot_width(), 64.0);
    }

    #[test]
    fn test_validate_rejects_zero_width() {
        let metrics = SlotMetrics {
            content_width: 0.0,
            margin: 0.0,
            height: 10.0,
        };
        assert_eq!(metrics.validate(), Err(DockError::InvalidSlotWidth(0.0)));
        assert!(SlotMetrics::default().validate().is_ok());
    }

    #[test]
    fn test_slot_index_edges() {
        assert_eq!(slot_index_at(0.0, 64.0, 5), Some(0));
        assert_eq!(slot_index_at(63.9, 64.0, 5), Some(0));
        assert_eq!(slot_index_at(64.0, 64.0, 5), Some(1));
        assert_eq!(slot_index_at(256.0, 64.0, 5), Some(4));
        assert_eq!(slot_index_at(10_000.0, 64.0, 5), Some(4));
        assert_eq!(slot_index_at(-1.0, 64.0, 5), Some(0));
    }

    #[test]
    fn test_slot_index_non_finite() {
        assert_eq!(slot_index_at(f32::NAN, 64.0, 5), Some(0));
        assert_eq!(slot_index_at(f32::INFINITY, 64.0, 5), Some(4));
        assert_eq!(slot_index_at(f32::NEG_INFINITY, 64.0, 5), Some(0));
    }

    #[test]
    fn test_slot_index_long_strip_stays_in_range() {
        // len - 1 is not representable in f32 past 2^24
        let len = 16_777_220;
        assert_eq!(slot_index_at(1.0e12, 64.0, len), Some(len - 1));
        assert_eq!(slot_index_at(f32::INFINITY, 64.0, len), Some(len - 1));
    }

    #[test]
    fn test_slot_index_empty_strip() {
        assert_eq!(slot_index_at(10.0, 64.0, 0), None);
    }

    #[test]
    fn test_strip_origin_is_explicit() {
        let strip = StripGeometry::new(Point::new(100.0, 20.0), SlotMetrics::default(), 5);
        assert_eq!(strip.index_at(100.0), Some(0));
        assert_eq!(strip.index_at(99.0), Some(0));
        assert_eq!(strip.index_at(100.0 + 64.0 * 2.5), Some(2));
    }

    #[test]
    fn test_content_rect_applies_margin_and_offset() {
        let strip = StripGeometry::new(Point::new(0.0, 0.0), SlotMetrics::default(), 5);
        let rect = strip.content_rect(1, -64.0);
        assert_eq!(rect, Rect::new(8.0, 0.0, 48.0, 64.0));
    }

    #[test]
    fn test_hit_test_outside_strip() {
        let strip = StripGeometry::new(Point::new(10.0, 10.0), SlotMetrics::default(), 3);
        assert_eq!(strip.hit_test(Point::new(5.0, 20.0)), None);
        assert_eq!(strip.hit_test(Point::new(10.0 + 64.0 * 3.0, 20.0)), None);
        assert_eq!(strip.hit_test(Point::new(80.0, 20.0)), Some(1));
    }

    #[test]
    fn test_centered_strip() {
        let strip = StripGeometry::centered(800.0, 600.0, 16.0, SlotMetrics::default(), 5);
        assert_eq!(strip.origin, Point::new(240.0, 520.0));
        assert_eq!(strip.bounds().width, 320.0);
    }
}
