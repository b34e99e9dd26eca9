//! Message types for the Elm-style architecture
//!
//! Every change to a dock flows through these messages, delivered one at a
//! time in arrival order.

/// Pointer gesture events from the host's gesture provider
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragMsg {
    /// A drag began on the slot at `index`
    Start { index: usize },
    /// Pointer moved; `origin_x` is the screen x of the strip's content box
    Update { pointer_x: f32, origin_x: f32 },
    /// Gesture finished (with or without a drop)
    End,
    /// A drop target accepted the item from `source` at `target`
    DropAccept { source: usize, target: usize },
}

/// Lifecycle and frame-source messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DockMsg {
    /// A frame is due; advance animations to the clock's current time
    Tick,
    /// The dock is being torn down
    Dispose,
}

/// Top-level message type
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Msg {
    Drag(DragMsg),
    Dock(DockMsg),
}

// Convenience constructors for common messages
impl Msg {
    pub fn drag_start(index: usize) -> Self {
        Msg::Drag(DragMsg::Start { index })
    }

    pub fn drag_update(pointer_x: f32, origin_x: f32) -> Self {
        Msg::Drag(DragMsg::Update {
            pointer_x,
            origin_x,
        })
    }

    pub fn drag_end() -> Self {
        Msg::Drag(DragMsg::End)
    }

    pub fn drop_accept(source: usize, target: usize) -> Self {
        Msg::Drag(DragMsg::DropAccept { source, target })
    }

    pub fn tick() -> Self {
        Msg::Dock(DockMsg::Tick)
    }

    pub fn dispose() -> Self {
        Msg::Dock(DockMsg::Dispose)
    }
}
