use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::Result;
use softbuffer::Context;
use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalPosition};
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::keyboard::{Key, NamedKey};
use winit::window::{CursorIcon, Window, WindowId};

use slotdock::cli::StartupConfig;
use slotdock::geometry::{Point, StripGeometry};
use slotdock::{Cmd, Dock, DockError, Msg};

use crate::view::{Renderer, Tile};

/// Pointer travel before a press on a slot becomes a drag
const DRAG_THRESHOLD: f32 = 4.0;
/// Gap between the strip and the bottom edge of the window
const BOTTOM_GAP: f32 = 24.0;
const FRAME_INTERVAL: Duration = Duration::from_millis(16);
const WINDOW_WIDTH: f64 = 800.0;
const WINDOW_HEIGHT: f64 = 300.0;

pub struct App {
    dock: Dock<String, Tile>,
    renderer: Option<Renderer>,
    window: Option<Rc<Window>>,
    context: Option<Context<Rc<Window>>>,
    strip: StripGeometry,
    scale_factor: f64,
    /// Logical pointer position
    mouse_position: Option<Point>,
    left_mouse_down: bool,
    drag_start_position: Option<Point>,
    pressed_slot: Option<usize>,
    drag_active: bool,
}

impl App {
    pub fn new(startup: StartupConfig) -> Result<Self, DockError> {
        let dock = Dock::builder(startup.labels)
            .render(|label: &String| Tile::for_label(label))
            .config(startup.dock)
            .build()?;
        let strip = StripGeometry::centered(
            WINDOW_WIDTH as f32,
            WINDOW_HEIGHT as f32,
            BOTTOM_GAP,
            startup.dock.slot,
            dock.len(),
        );

        Ok(Self {
            dock,
            renderer: None,
            window: None,
            context: None,
            strip,
            scale_factor: 1.0,
            mouse_position: None,
            left_mouse_down: false,
            drag_start_position: None,
            pressed_slot: None,
            drag_active: false,
        })
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let window_attributes = Window::default_attributes()
            .with_title(self.title())
            .with_inner_size(LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT));

        let window = Rc::new(event_loop.create_window(window_attributes)?);
        let context = Context::new(Rc::clone(&window))
            .map_err(|e| anyhow::anyhow!("Failed to create context: {}", e))?;
        let renderer = Renderer::new(Rc::clone(&window), &context)?;

        self.scale_factor = window.scale_factor();
        let size = window.inner_size().to_logical::<f32>(self.scale_factor);
        self.relayout(size.width, size.height);

        self.renderer = Some(renderer);
        self.window = Some(window);
        self.context = Some(context);
        Ok(())
    }

    /// Window title lists the current order, since tiles carry no text
    fn title(&self) -> String {
        format!("slotdock: {}", self.dock.items().join(" "))
    }

    fn relayout(&mut self, width: f32, height: f32) {
        self.strip = StripGeometry::centered(
            width,
            height,
            BOTTOM_GAP,
            self.dock.model().metrics(),
            self.dock.len(),
        );
    }

    fn send(&mut self, msg: Msg) -> Option<Cmd> {
        self.dock.handle(msg)
    }

    fn handle_event(&mut self, event: &WindowEvent) -> Option<Cmd> {
        match event {
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    if let Err(e) = renderer.resize(size.width, size.height) {
                        tracing::error!("Resize failed: {}", e);
                    }
                }
                let logical = size.to_logical::<f32>(self.scale_factor);
                self.relayout(logical.width, logical.height);
                Some(Cmd::Redraw)
            }

            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.scale_factor = *scale_factor;
                if let Some(renderer) = &mut self.renderer {
                    renderer.set_scale_factor(*scale_factor);
                }
                Some(Cmd::Redraw)
            }

            WindowEvent::CursorMoved { position, .. } => self.on_cursor_moved(*position),

            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                ElementState::Pressed => self.on_press(),
                ElementState::Released => self.on_release(),
            },

            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                match &event.logical_key {
                    Key::Named(NamedKey::Escape) => self.cancel_drag(),
                    Key::Named(NamedKey::F7) => {
                        self.dump_state();
                        None
                    }
                    _ => None,
                }
            }

            WindowEvent::RedrawRequested => {
                if let Err(e) = self.render() {
                    tracing::error!("Render failed: {}", e);
                }
                None
            }

            _ => None,
        }
    }

    fn on_cursor_moved(&mut self, position: PhysicalPosition<f64>) -> Option<Cmd> {
        let logical = position.to_logical::<f32>(self.scale_factor);
        let point = Point::new(logical.x, logical.y);
        self.mouse_position = Some(point);

        if !self.drag_active && self.left_mouse_down {
            if let (Some(index), Some(start)) = (self.pressed_slot, self.drag_start_position) {
                let dx = point.x - start.x;
                let dy = point.y - start.y;
                if (dx * dx + dy * dy).sqrt() >= DRAG_THRESHOLD {
                    self.drag_active = true;
                    self.set_cursor(CursorIcon::Grabbing);
                    self.send(Msg::drag_start(index));
                }
            }
        }

        if !self.drag_active {
            return None;
        }
        let origin_x = self.strip.origin.x;
        self.send(Msg::drag_update(point.x, origin_x));
        // The floating tile follows the pointer even when no slot moved
        Some(Cmd::Redraw)
    }

    fn on_press(&mut self) -> Option<Cmd> {
        self.left_mouse_down = true;
        self.drag_start_position = self.mouse_position;
        self.pressed_slot = self
            .mouse_position
            .and_then(|point| self.strip.hit_test(point));
        None
    }

    fn on_release(&mut self) -> Option<Cmd> {
        self.left_mouse_down = false;
        self.drag_start_position = None;
        self.pressed_slot = None;
        if !self.drag_active {
            return None;
        }
        self.drag_active = false;
        self.set_cursor(CursorIcon::Default);

        let mut cmds = Vec::new();
        let dropped_on = self.mouse_position.and_then(|point| {
            let over_strip = self.strip.bounds().inset(-BOTTOM_GAP).contains(point.x, point.y);
            let target = self.strip.index_at(point.x)?;
            let source = self.dock.session().dragged()?;
            over_strip.then_some((source, target))
        });
        if let Some((source, target)) = dropped_on {
            cmds.extend(self.send(Msg::drop_accept(source, target)));
        }
        cmds.extend(self.send(Msg::drag_end()));

        if let Some(window) = &self.window {
            window.set_title(&self.title());
        }
        Some(Cmd::batch(cmds))
    }

    fn cancel_drag(&mut self) -> Option<Cmd> {
        if !self.drag_active {
            return None;
        }
        self.drag_active = false;
        self.pressed_slot = None;
        self.set_cursor(CursorIcon::Default);
        self.send(Msg::drag_end())
    }

    fn set_cursor(&self, icon: CursorIcon) {
        if let Some(window) = &self.window {
            window.set_cursor(icon);
        }
    }

    fn dump_state(&self) {
        match self.dock.snapshot().to_json() {
            Ok(json) => tracing::info!("Dock state:\n{}", json),
            Err(e) => tracing::warn!("Failed to serialize dock state: {}", e),
        }
    }

    fn render(&mut self) -> Result<()> {
        let pointer = if self.drag_active {
            self.mouse_position
        } else {
            None
        };
        if let Some(renderer) = &mut self.renderer {
            renderer.render(&self.dock, &self.strip, pointer)?;
        }
        Ok(())
    }

    fn tick(&mut self) -> Option<Cmd> {
        self.send(Msg::tick())
    }

    fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.init_window(event_loop) {
            tracing::error!("Failed to create window: {}", e);
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        if self.window.as_ref().map(|w| w.id()) != Some(window_id) {
            return;
        }

        if matches!(event, WindowEvent::CloseRequested) {
            self.dock.dispose();
            event_loop.exit();
            return;
        }

        if let Some(cmd) = self.handle_event(&event) {
            if cmd.needs_redraw() {
                self.request_redraw();
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if !self.dock.is_animating() {
            event_loop.set_control_flow(ControlFlow::Wait);
            return;
        }

        if self.tick().is_some_and(|cmd| cmd.needs_redraw()) {
            self.request_redraw();
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + FRAME_INTERVAL));
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.dock.dispose();
    }
}
