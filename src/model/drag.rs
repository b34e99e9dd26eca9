//! Drag session transitions
//!
//! ```text
//!            start(i)                 update_target(t != target)
//!   Idle ─────────────────► Tracking ◄──────────── (restart forward run)
//!    ▲                         │
//!    │ reverse run completes   │ end()
//!    │                         ▼
//!    └──────────────────── Settling
//! ```
//!
//! `accept_drop` commits from any state and returns to `Idle` immediately.

use super::{DockModel, DragPhase, DragSession};
use crate::error::DockError;
use crate::geometry::slot_index_at;

impl<T> DockModel<T> {
    /// Begin dragging the item at `index`
    ///
    /// Returns `Ok(false)` when a drag is already tracking. A settle animation
    /// still in flight is cancelled so the new gesture starts from rest.
    pub fn start_drag(&mut self, index: usize) -> Result<bool, DockError> {
        if self.disposed {
            return Ok(false);
        }
        let item = self.items.id_at(index)?;

        match self.session {
            DragSession::Dragging {
                phase: DragPhase::Tracking,
                dragged,
                ..
            } => {
                tracing::debug!(dragged, ignored = index, "drag already in progress");
                return Ok(false);
            }
            DragSession::Dragging {
                phase: DragPhase::Settling { run },
                ..
            } => {
                tracing::debug!(?run, "new drag interrupts settle");
            }
            DragSession::Idle => {}
        }

        self.animation.reset();
        self.session = DragSession::Dragging {
            dragged: index,
            target: index,
            item,
            phase: DragPhase::Tracking,
        };
        tracing::debug!(index, ?item, "drag started");
        Ok(true)
    }

    /// Move the drop target, restarting the make-room animation
    ///
    /// Out-of-range targets clamp to the last slot. Returns whether the
    /// target changed.
    pub fn update_target(&mut self, new_target: usize) -> bool {
        if self.disposed {
            return false;
        }
        let DragSession::Dragging {
            target,
            phase: DragPhase::Tracking,
            ..
        } = self.session
        else {
            return false;
        };
        if new_target == target || self.items.is_empty() {
            return false;
        }

        let clamped = new_target.min(self.items.len() - 1);
        if clamped == target {
            return false;
        }

        if let DragSession::Dragging { target, .. } = &mut self.session {
            *target = clamped;
        }
        let run = self.animation.start_forward(self.clock.now());
        tracing::debug!(from = target, to = clamped, ?run, "drag target changed");
        true
    }

    /// Map a pointer x to a slot and retarget the drag
    ///
    /// `origin_x` is the screen x of the strip's content box.
    pub fn update_target_at(&mut self, pointer_x: f32, origin_x: f32) -> bool {
        match slot_index_at(pointer_x - origin_x, self.slot_width(), self.items.len()) {
            Some(index) => self.update_target(index),
            None => false,
        }
    }

    /// Gesture ended without a drop: settle back to rest
    ///
    /// No-op when idle (a drop already committed) or already settling.
    /// Returns whether anything changed.
    pub fn end_drag(&mut self) -> bool {
        if self.disposed {
            return false;
        }
        let DragSession::Dragging {
            dragged,
            target,
            item,
            phase: DragPhase::Tracking,
        } = self.session
        else {
            return false;
        };

        match self.animation.start_reverse(self.clock.now()) {
            Some(run) => {
                self.session = DragSession::Dragging {
                    dragged,
                    target,
                    item,
                    phase: DragPhase::Settling { run },
                };
                tracing::debug!(dragged, target, ?run, "drag ended, settling");
            }
            None => {
                self.animation.reset();
                self.session = DragSession::Idle;
                tracing::debug!(dragged, "drag ended at rest");
            }
        }
        true
    }

    /// Advance the animation to the clock's current time
    ///
    /// Completing the settle run returns the session to `Idle`. Returns whether
    /// anything visible changed.
    pub fn tick(&mut self) -> bool {
        if self.disposed || !self.animation.is_running() {
            return false;
        }

        let now = self.clock.now();
        if let Some(done) = self.animation.tick(now) {
            tracing::trace!(?done, "animation run completed");
            if self.session.settle_run() == Some(done.run) {
                self.animation.reset();
                self.session = DragSession::Idle;
                tracing::debug!("settle complete, session idle");
            }
        }
        true
    }
}
