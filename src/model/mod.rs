//! Model structs for the Elm-style architecture
//!
//! `DockModel` exclusively owns everything the drag interaction touches: the
//! item sequence, the drag session, the progress animation and the clock that
//! drives it. Transitions live in `drag` and `commit`; they all take
//! `&mut self`, so readers only ever see the state before or after a whole
//! transition.

mod commit;
mod drag;
pub mod sequence;
pub mod session;

use std::fmt;
use std::rc::Rc;
use std::time::Duration;

pub use commit::DropOutcome;
pub use sequence::{ItemId, ItemSequence};
pub use session::{DragPhase, DragSession};

use crate::animation::{Easing, FrameClock, ProgressAnimation, SystemClock};
use crate::config::DockConfig;
use crate::error::DockError;
use crate::geometry::SlotMetrics;
use crate::offset::{slot_offset, slot_offsets};

/// State of one dock instance
pub struct DockModel<T> {
    items: ItemSequence<T>,
    session: DragSession,
    animation: ProgressAnimation,
    clock: Rc<dyn FrameClock>,
    metrics: SlotMetrics,
    easing: Easing,
    disposed: bool,
}

impl<T> DockModel<T> {
    /// Create a model driven by real time
    pub fn new(items: impl IntoIterator<Item = T>, config: &DockConfig) -> Result<Self, DockError> {
        Self::with_clock(items, config, Rc::new(SystemClock::new()))
    }

    /// Create a model driven by the given clock
    pub fn with_clock(
        items: impl IntoIterator<Item = T>,
        config: &DockConfig,
        clock: Rc<dyn FrameClock>,
    ) -> Result<Self, DockError> {
        config.validate()?;
        Ok(Self {
            items: items.into_iter().collect(),
            session: DragSession::Idle,
            animation: ProgressAnimation::new(config.animation.duration()),
            clock,
            metrics: config.slot,
            easing: config.animation.easing,
            disposed: false,
        })
    }

    pub fn items(&self) -> &ItemSequence<T> {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn session(&self) -> &DragSession {
        &self.session
    }

    pub fn metrics(&self) -> SlotMetrics {
        self.metrics
    }

    pub fn slot_width(&self) -> f32 {
        self.metrics.slot_width()
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Current time according to the injected clock
    pub fn now(&self) -> Duration {
        self.clock.now()
    }

    /// Raw linear progress as of the last tick
    pub fn progress(&self) -> f32 {
        self.animation.value()
    }

    /// Progress after easing; this is what offsets are scaled by
    pub fn eased_progress(&self) -> f32 {
        self.easing.apply(self.animation.value())
    }

    pub fn animation(&self) -> &ProgressAnimation {
        &self.animation
    }

    /// Whether the host should keep delivering ticks
    pub fn is_animating(&self) -> bool {
        !self.disposed && self.animation.is_running()
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Displacement of one slot for the current session and progress
    pub fn offset(&self, index: usize) -> f32 {
        match self.session.indices() {
            Some(drag) => slot_offset(drag, index, self.eased_progress(), self.slot_width()),
            None => 0.0,
        }
    }

    /// Displacement of every slot for the current session and progress
    pub fn offsets(&self) -> Vec<f32> {
        slot_offsets(
            self.session.indices(),
            self.len(),
            self.eased_progress(),
            self.slot_width(),
        )
    }

    /// Append an item; refused while a drag session exists
    pub fn push(&mut self, value: T) -> Result<ItemId, DockError> {
        if self.session.is_dragging() {
            return Err(DockError::DragActive);
        }
        Ok(self.items.push(value))
    }

    /// Cancel pending animation and clear the session
    ///
    /// After disposal every event and tick is ignored.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.animation.reset();
        self.session = DragSession::Idle;
        self.disposed = true;
        tracing::debug!("dock disposed");
    }

    /// Validate model invariants (debug builds only)
    ///
    /// This function checks that:
    /// - dragged and target indices lie within `[0, len)`
    /// - the dragged index still holds the dragged item
    /// - progress lies within `[0, 1]`
    /// - a settling session owns the animation run in flight
    ///
    /// Panics in debug builds if any invariant is violated.
    #[cfg(debug_assertions)]
    pub fn assert_invariants_with_context(&self, context: &str) {
        let progress = self.animation.value();
        assert!(
            (0.0..=1.0).contains(&progress),
            "[{}] progress {} outside [0, 1]",
            context,
            progress
        );

        if let DragSession::Dragging {
            dragged,
            target,
            item,
            phase,
        } = self.session
        {
            let len = self.items.len();
            assert!(
                dragged < len && target < len,
                "[{}] drag indices ({}, {}) out of range for {} items",
                context,
                dragged,
                target,
                len
            );
            assert_eq!(
                self.items.id_at(dragged).ok(),
                Some(item),
                "[{}] dragged slot {} no longer holds {:?}",
                context,
                dragged,
                item
            );
            if let DragPhase::Settling { run } = phase {
                assert_eq!(
                    self.animation.current_run(),
                    Some(run),
                    "[{}] settling without its reverse run",
                    context
                );
            }
        }
    }

    /// No-op in release builds
    #[cfg(not(debug_assertions))]
    #[inline]
    pub fn assert_invariants_with_context(&self, _context: &str) {}
}

impl<T: fmt::Debug> fmt::Debug for DockModel<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DockModel")
            .field("items", &self.items)
            .field("session", &self.session)
            .field("animation", &self.animation)
            .field("metrics", &self.metrics)
            .field("easing", &self.easing)
            .field("disposed", &self.disposed)
            .finish_non_exhaustive()
    }
}
