//! Dock lifecycle update handlers
//!
//! Handles frame ticks and teardown.

use super::redraw_cmd;
use crate::commands::Cmd;
use crate::messages::DockMsg;
use crate::model::DockModel;

/// Update function for dock messages
pub fn update_dock<T>(model: &mut DockModel<T>, msg: DockMsg) -> Option<Cmd> {
    match msg {
        DockMsg::Tick => {
            if model.tick() {
                Some(redraw_cmd(model))
            } else {
                None
            }
        }

        DockMsg::Dispose => {
            if model.is_disposed() {
                return None;
            }
            model.dispose();
            Some(Cmd::Redraw)
        }
    }
}
