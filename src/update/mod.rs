//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod dock;
mod drag;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::DockModel;

#[cfg(debug_assertions)]
use crate::tracing::SessionSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use dock::update_dock;
pub use drag::update_drag;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update<T>(model: &mut DockModel<T>, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner<T>(model: &mut DockModel<T>, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Drag(m) => drag::update_drag(model, m),
        Msg::Dock(m) => dock::update_dock(model, m),
    }
}

/// Command for a visible change: keep frames coming while a run is in flight
pub(crate) fn redraw_cmd<T>(model: &DockModel<T>) -> Cmd {
    if model.is_animating() {
        Cmd::RequestFrame
    } else {
        Cmd::Redraw
    }
}

/// Traced update wrapper (debug builds only)
#[cfg(debug_assertions)]
fn update_traced<T>(model: &mut DockModel<T>, msg: Msg) -> Option<Cmd> {
    use crate::messages::DockMsg;

    // Skip logging for per-frame ticks
    let is_noisy = matches!(&msg, Msg::Dock(DockMsg::Tick));

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    let before = SessionSnapshot::from_model(model);

    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let result = update_inner(model, msg);

    let after = SessionSnapshot::from_model(model);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "session", %diff, "state changed");
    }

    model.assert_invariants_with_context(&msg_name);

    result
}

#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Drag(m) => format!("Drag::{:?}", m),
        Msg::Dock(m) => format!("Dock::{:?}", m),
    }
}
