//! Drag session state

use serde::Serialize;

use super::sequence::ItemId;
use crate::animation::RunId;
use crate::offset::DragIndices;

/// What a dragging session is currently doing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum DragPhase {
    /// Pointer is down and moving over the strip
    Tracking,
    /// Gesture ended without a drop; offsets are animating back to rest
    Settling { run: RunId },
}

/// The single drag session owned by a dock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DragSession {
    #[default]
    Idle,
    Dragging {
        dragged: usize,
        target: usize,
        /// Identity of the dragged item, fixed for the session
        item: ItemId,
        phase: DragPhase,
    },
}

impl DragSession {
    pub fn is_idle(&self) -> bool {
        matches!(self, DragSession::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        !self.is_idle()
    }

    pub fn is_settling(&self) -> bool {
        matches!(
            self,
            DragSession::Dragging {
                phase: DragPhase::Settling { .. },
                ..
            }
        )
    }

    /// `(dragged, target)` while a session exists
    pub fn indices(&self) -> Option<DragIndices> {
        match *self {
            DragSession::Idle => None,
            DragSession::Dragging {
                dragged, target, ..
            } => Some(DragIndices::new(dragged, target)),
        }
    }

    pub fn dragged(&self) -> Option<usize> {
        self.indices().map(|drag| drag.dragged)
    }

    pub fn target(&self) -> Option<usize> {
        self.indices().map(|drag| drag.target)
    }

    pub fn item(&self) -> Option<ItemId> {
        match *self {
            DragSession::Idle => None,
            DragSession::Dragging { item, .. } => Some(item),
        }
    }

    /// Run id of the settle animation, if one is in flight
    pub fn settle_run(&self) -> Option<RunId> {
        match *self {
            DragSession::Dragging {
                phase: DragPhase::Settling { run },
                ..
            } => Some(run),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_has_no_indices() {
        let session = DragSession::default();
        assert!(session.is_idle());
        assert_eq!(session.indices(), None);
        assert_eq!(session.settle_run(), None);
    }

    #[test]
    fn test_settling_reports_run() {
        let session = DragSession::Dragging {
            dragged: 1,
            target: 3,
            item: ItemId(2),
            phase: DragPhase::Settling { run: RunId(9) },
        };
        assert!(session.is_settling());
        assert_eq!(session.settle_run(), Some(RunId(9)));
        assert_eq!(session.indices(), Some(DragIndices::new(1, 3)));
        assert_eq!(session.item(), Some(ItemId(2)));
    }
}
