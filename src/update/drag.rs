//! Drag gesture update handlers
//!
//! Translates pointer gesture messages into drag session transitions. Index
//! misuse coming out of the model is logged and swallowed here so it never
//! reaches the host event loop.

use super::redraw_cmd;
use crate::commands::Cmd;
use crate::messages::DragMsg;
use crate::model::{DockModel, DropOutcome};

/// Update function for drag messages
pub fn update_drag<T>(model: &mut DockModel<T>, msg: DragMsg) -> Option<Cmd> {
    match msg {
        DragMsg::Start { index } => match model.start_drag(index) {
            Ok(true) => Some(Cmd::Redraw),
            Ok(false) => None,
            Err(e) => {
                tracing::warn!("ignoring drag start: {}", e);
                None
            }
        },

        DragMsg::Update {
            pointer_x,
            origin_x,
        } => {
            if model.update_target_at(pointer_x, origin_x) {
                Some(redraw_cmd(model))
            } else {
                None
            }
        }

        DragMsg::End => {
            if model.end_drag() {
                Some(redraw_cmd(model))
            } else {
                None
            }
        }

        DragMsg::DropAccept { source, target } => match model.accept_drop(source, target) {
            Ok(DropOutcome::Committed) => Some(Cmd::Redraw),
            Ok(DropOutcome::Rejected) => None,
            Err(e) => {
                tracing::warn!("ignoring drop {} → {}: {}", source, target, e);
                None
            }
        },
    }
}
