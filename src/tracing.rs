//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging drag
//! session and animation state transitions.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=slotdock::model=trace` - every tick of the drag state machine
//! - `RUST_LOG=slotdock::update=debug` - message dispatch with session diffs
//!
//! # Log Files
//!
//! Logs are written to `~/.config/slotdock/logs/slotdock.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::{DockModel, DragPhase, DragSession};

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG (default `warn`). File logging writes to
/// `~/.config/slotdock/logs/slotdock.log` with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender =
                tracing_appender::rolling::daily(logs_dir, crate::config_paths::LOG_FILE_PREFIX);
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of session state for diffing
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub state: &'static str,
    pub dragged: Option<usize>,
    pub target: Option<usize>,
    pub progress: f32,
    pub len: usize,
}

impl SessionSnapshot {
    pub fn from_model<T>(model: &DockModel<T>) -> Self {
        let state = match model.session() {
            DragSession::Idle => "idle",
            DragSession::Dragging {
                phase: DragPhase::Tracking,
                ..
            } => "tracking",
            DragSession::Dragging {
                phase: DragPhase::Settling { .. },
                ..
            } => "settling",
        };
        Self {
            state,
            dragged: model.session().dragged(),
            target: model.session().target(),
            progress: model.progress(),
            len: model.len(),
        }
    }

    /// Generate a diff description between two snapshots
    ///
    /// Progress changes alone are not reported; ticks would drown everything else.
    pub fn diff(&self, other: &SessionSnapshot) -> Option<String> {
        let mut changes = Vec::new();
        if self.state != other.state {
            changes.push(format!("state: {} → {}", self.state, other.state));
        }
        if self.dragged != other.dragged {
            changes.push(format!("dragged: {:?} → {:?}", self.dragged, other.dragged));
        }
        if self.target != other.target {
            changes.push(format!("target: {:?} → {:?}", self.target, other.target));
        }
        if self.len != other.len {
            changes.push(format!("len: {} → {}", self.len, other.len));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(state: &'static str, dragged: Option<usize>, target: Option<usize>) -> SessionSnapshot {
        SessionSnapshot {
            state,
            dragged,
            target,
            progress: 0.0,
            len: 5,
        }
    }

    #[test]
    fn test_diff_reports_target_change() {
        let before = snapshot("tracking", Some(0), Some(0));
        let after = snapshot("tracking", Some(0), Some(3));
        assert_eq!(
            before.diff(&after),
            Some("target: Some(0) → Some(3)".to_string())
        );
    }

    #[test]
    fn test_diff_ignores_progress() {
        let before = snapshot("settling", Some(1), Some(2));
        let mut after = before.clone();
        after.progress = 0.4;
        assert_eq!(before.diff(&after), None);
    }
}
