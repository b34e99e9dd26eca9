//! View module - software rendering of the dock strip
//!
//! Everything is laid out in logical pixels and scaled to the surface's
//! physical pixels at draw time.

pub mod frame;

pub use frame::Frame;

use anyhow::Result;
use softbuffer::{Context, Surface};
use std::num::NonZeroU32;
use std::rc::Rc;
use winit::window::Window;

use slotdock::geometry::{Point, Rect, StripGeometry};
use slotdock::Dock;

const BACKGROUND: u32 = 0xFF1E1F22;
const SHELF: u32 = 0x66FFFFFF;
const SHELF_PADDING: f32 = 6.0;
const PLACEHOLDER: u32 = 0xFF5A5D63;
const SHADOW: u32 = 0x80000000;
const TILE_INSET: f32 = 4.0;
const ACCENT_HEIGHT: f32 = 6.0;

const PALETTE: [u32; 8] = [
    0xFFE06C75, 0xFF98C379, 0xFFE5C07B, 0xFF61AFEF, 0xFFC678DD, 0xFF56B6C2, 0xFFD19A66,
    0xFFABB2BF,
];

/// What the render function produces for one item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub color: u32,
    pub accent: u32,
}

impl Tile {
    /// Stable color for a label
    pub fn for_label(label: &str) -> Self {
        let hash = label
            .bytes()
            .fold(0usize, |acc, b| acc.wrapping_mul(31).wrapping_add(b as usize));
        let color = PALETTE[hash % PALETTE.len()];
        Self {
            color,
            accent: frame::blend_colors(color, 0xFFFFFFFF, 0.45),
        }
    }
}

fn scaled(rect: Rect, scale: f32) -> Rect {
    Rect::new(
        rect.x * scale,
        rect.y * scale,
        rect.width * scale,
        rect.height * scale,
    )
}

fn draw_tile(frame: &mut Frame, rect: Rect, tile: Tile, scale: f32) {
    frame.fill_rect(rect, tile.color);
    let accent = ACCENT_HEIGHT * scale;
    frame.fill_rect(
        Rect::new(rect.x, rect.y + rect.height - accent, rect.width, accent),
        tile.accent,
    );
}

pub struct Renderer {
    surface: Surface<Rc<Window>, Rc<Window>>,
    /// Softbuffer doesn't preserve buffer contents between frames,
    /// so frames are drawn here and copied on present.
    back_buffer: Vec<u32>,
    width: u32,
    height: u32,
    scale_factor: f64,
}

impl Renderer {
    /// Create a new renderer sized to the window
    pub fn new(window: Rc<Window>, context: &Context<Rc<Window>>) -> Result<Self> {
        let size = window.inner_size();
        let scale_factor = window.scale_factor();

        let surface = Surface::new(context, Rc::clone(&window))
            .map_err(|e| anyhow::anyhow!("Failed to create surface: {}", e))?;

        let mut renderer = Self {
            surface,
            back_buffer: Vec::new(),
            width: 0,
            height: 0,
            scale_factor,
        };
        renderer.resize(size.width, size.height)?;
        Ok(renderer)
    }

    /// Resize the surface and back buffer to physical `width` x `height`
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        let w = NonZeroU32::new(width).unwrap_or(NonZeroU32::MIN);
        let h = NonZeroU32::new(height).unwrap_or(NonZeroU32::MIN);
        self.surface
            .resize(w, h)
            .map_err(|e| anyhow::anyhow!("Failed to resize surface: {}", e))?;

        self.width = w.get();
        self.height = h.get();
        self.back_buffer = vec![0u32; (self.width as usize) * (self.height as usize)];
        Ok(())
    }

    pub fn set_scale_factor(&mut self, scale_factor: f64) {
        self.scale_factor = scale_factor;
    }

    /// Draw the strip, and the dragged tile under `pointer` when given
    pub fn render(
        &mut self,
        dock: &Dock<String, Tile>,
        strip: &StripGeometry,
        pointer: Option<Point>,
    ) -> Result<()> {
        let scale = self.scale_factor as f32;
        let mut frame = Frame::new(
            &mut self.back_buffer,
            self.width as usize,
            self.height as usize,
        );

        frame.clear(BACKGROUND);
        if !dock.is_empty() {
            frame.fill_rect_blended(scaled(strip.bounds().inset(-SHELF_PADDING), scale), SHELF);
        }

        for slot in dock.slots() {
            if slot.is_dragged {
                let hole = strip.content_rect(slot.index, 0.0).inset(TILE_INSET);
                frame.stroke_rect(scaled(hole, scale), 2.0 * scale, PLACEHOLDER);
                continue;
            }
            let rect = strip.content_rect(slot.index, slot.offset).inset(TILE_INSET);
            draw_tile(&mut frame, scaled(rect, scale), slot.visual, scale);
        }

        if let (Some(p), Some(tile)) = (pointer, dock.dragged_visual()) {
            let metrics = strip.metrics;
            let rect = Rect::new(
                p.x - metrics.content_width / 2.0,
                p.y - metrics.height / 2.0,
                metrics.content_width,
                metrics.height,
            )
            .inset(TILE_INSET);
            let shadow = Rect::new(rect.x + 3.0, rect.y + 3.0, rect.width, rect.height);
            frame.fill_rect_blended(scaled(shadow, scale), SHADOW);
            draw_tile(&mut frame, scaled(rect, scale), tile, scale);
        }

        let mut buffer = self
            .surface
            .buffer_mut()
            .map_err(|e| anyhow::anyhow!("Failed to get surface buffer: {}", e))?;
        buffer.copy_from_slice(&self.back_buffer);
        buffer
            .present()
            .map_err(|e| anyhow::anyhow!("Failed to present buffer: {}", e))?;

        Ok(())
    }
}
