//! Scalar progress animation with restart and cancellation bookkeeping
//!
//! A `ProgressAnimation` holds one value in `[0, 1]` and at most one active
//! run moving it toward 0 or 1. Each run gets a fresh `RunId`; callers match
//! completions against the id they stored, so a completion belonging to a
//! cancelled or superseded run is never mistaken for the current one.

use std::time::Duration;

use serde::Serialize;

/// Reference duration for a full 0 → 1 run
pub const DEFAULT_DURATION: Duration = Duration::from_millis(200);

/// Direction of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Toward 1
    Forward,
    /// Toward 0
    Reverse,
}

/// Identity of a single run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RunId(pub u64);

/// Reported by `tick` when the active run reaches its terminal value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    pub run: RunId,
    pub direction: Direction,
}

#[derive(Debug, Clone, Copy)]
struct Run {
    id: RunId,
    direction: Direction,
    from: f32,
    started_at: Duration,
    span: Duration,
}

impl Run {
    fn target(&self) -> f32 {
        match self.direction {
            Direction::Forward => 1.0,
            Direction::Reverse => 0.0,
        }
    }

    /// Value at `now`, clamped to the run's own segment
    fn sample(&self, now: Duration) -> f32 {
        let elapsed = now.saturating_sub(self.started_at);
        let t = if self.span.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / self.span.as_secs_f32()).clamp(0.0, 1.0)
        };
        let value = self.from + (self.target() - self.from) * t;
        value.clamp(0.0, 1.0)
    }

    fn is_done(&self, now: Duration) -> bool {
        now.saturating_sub(self.started_at) >= self.span
    }
}

/// Portion of `duration` covering `fraction` of the range, rounded to whole
/// microseconds so float noise in `fraction` cannot push completion past a tick
fn scaled_span(duration: Duration, fraction: f32) -> Duration {
    let micros = duration.as_micros() as f64 * f64::from(fraction.clamp(0.0, 1.0));
    Duration::from_micros(micros.round() as u64)
}

/// Progress value driven by discrete ticks
#[derive(Debug, Clone)]
pub struct ProgressAnimation {
    duration: Duration,
    value: f32,
    run: Option<Run>,
    next_run: u64,
}

impl ProgressAnimation {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            value: 0.0,
            run: None,
            next_run: 1,
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Progress as of the last tick or transition
    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn is_running(&self) -> bool {
        self.run.is_some()
    }

    pub fn direction(&self) -> Option<Direction> {
        self.run.map(|run| run.direction)
    }

    pub fn current_run(&self) -> Option<RunId> {
        self.run.map(|run| run.id)
    }

    fn next_id(&mut self) -> RunId {
        let id = RunId(self.next_run);
        self.next_run += 1;
        id
    }

    /// Restart from 0 toward 1, superseding any run in flight
    pub fn start_forward(&mut self, now: Duration) -> RunId {
        let id = self.next_id();
        self.value = 0.0;
        self.run = Some(Run {
            id,
            direction: Direction::Forward,
            from: 0.0,
            started_at: now,
            span: self.duration,
        });
        id
    }

    /// Run from the current value back to 0 at the forward rate
    ///
    /// Returns `None` when the value is already 0; nothing is scheduled then.
    pub fn start_reverse(&mut self, now: Duration) -> Option<RunId> {
        let from = self.sample(now);
        self.value = from;
        if from <= 0.0 {
            self.run = None;
            self.value = 0.0;
            return None;
        }

        let id = self.next_id();
        self.run = Some(Run {
            id,
            direction: Direction::Reverse,
            from,
            started_at: now,
            span: scaled_span(self.duration, from),
        });
        Some(id)
    }

    /// Value at `now` without advancing state
    pub fn sample(&self, now: Duration) -> f32 {
        match &self.run {
            Some(run) => run.sample(now),
            None => self.value,
        }
    }

    /// Advance to `now`; reports the run that just finished, if any
    pub fn tick(&mut self, now: Duration) -> Option<Completion> {
        let run = self.run?;
        self.value = run.sample(now);
        if run.is_done(now) {
            self.value = run.target();
            self.run = None;
            return Some(Completion {
                run: run.id,
                direction: run.direction,
            });
        }
        None
    }

    /// Drop the active run, keeping the current value
    pub fn cancel(&mut self) {
        if self.run.take().is_some() {
            self.next_run += 1;
        }
    }

    /// Drop the active run and return to 0
    pub fn reset(&mut self) {
        self.cancel();
        self.value = 0.0;
    }
}

impl Default for ProgressAnimation {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION)
    }
}
