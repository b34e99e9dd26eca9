//! Drop handling and the reorder commit

use super::{DockModel, DragSession};
use crate::error::DockError;

/// Result of a drop offered to the dock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The sequence was permuted and the session cleared
    Committed,
    /// Self-drop or disposed dock; nothing changed
    Rejected,
}

impl<T> DockModel<T> {
    /// Accept a drop of the item at `dragged` onto slot `target`
    ///
    /// Drops may arrive just before or just after the gesture's `end_drag`, so
    /// this does not depend on the session state. A drop onto its own slot is
    /// rejected without touching the sequence or the animation.
    pub fn accept_drop(&mut self, dragged: usize, target: usize) -> Result<DropOutcome, DockError> {
        if self.disposed {
            return Ok(DropOutcome::Rejected);
        }
        if dragged == target {
            tracing::debug!(dragged, "self-drop rejected");
            return Ok(DropOutcome::Rejected);
        }
        self.commit(dragged, target)?;
        Ok(DropOutcome::Committed)
    }

    /// Move the item and clear the session as one step
    ///
    /// On an out-of-range index nothing is modified.
    pub(crate) fn commit(&mut self, dragged: usize, target: usize) -> Result<(), DockError> {
        let item = self.items.id_at(dragged)?;
        self.items.move_item(dragged, target)?;
        self.animation.reset();
        self.session = DragSession::Idle;
        tracing::info!(from = dragged, to = target, ?item, "reorder committed");
        Ok(())
    }
}
