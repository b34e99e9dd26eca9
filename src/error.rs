//! Error types for dock operations

use thiserror::Error;

/// Errors raised by the dock core
///
/// Pointer-derived indices are clamped before they reach the state machine, so
/// `IndexOutOfRange` only surfaces when the API is called directly with bad
/// arguments.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DockError {
    /// An index argument fell outside `[0, len)`
    #[error("index {index} out of range for {len} slots")]
    IndexOutOfRange { index: usize, len: usize },

    /// `DockBuilder::build` was called without a render function
    #[error("dock has no render function")]
    MissingRenderer,

    /// The sequence cannot be edited while a drag session is active
    #[error("cannot modify items while a drag is in progress")]
    DragActive,

    /// Slot width must be finite and strictly positive
    #[error("invalid slot width: {0}")]
    InvalidSlotWidth(f32),

    /// Configuration could not be read, parsed or written
    #[error("config error: {0}")]
    Config(String),
}

impl DockError {
    /// Helper for range checks against a sequence length
    pub fn check_index(index: usize, len: usize) -> Result<(), DockError> {
        if index < len {
            Ok(())
        } else {
            Err(DockError::IndexOutOfRange { index, len })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_index() {
        assert!(DockError::check_index(0, 1).is_ok());
        assert_eq!(
            DockError::check_index(3, 3),
            Err(DockError::IndexOutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn test_display() {
        let err = DockError::IndexOutOfRange { index: 7, len: 5 };
        assert_eq!(err.to_string(), "index 7 out of range for 5 slots");
    }
}
