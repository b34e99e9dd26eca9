//! Per-slot displacement during a drag
//!
//! While an item is dragged from `dragged` toward `target`, the slots between
//! them slide one slot width toward the vacated position, scaled by progress.
//! Positive values move right along the strip, negative values move left.
//!
//! The dragged slot itself never moves: its item is drawn as a floating visual
//! under the pointer instead.

/// Indices of an active drag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragIndices {
    pub dragged: usize,
    pub target: usize,
}

impl DragIndices {
    pub fn new(dragged: usize, target: usize) -> Self {
        Self { dragged, target }
    }
}

/// Displacement of slot `index`
pub fn slot_offset(drag: DragIndices, index: usize, progress: f32, slot_width: f32) -> f32 {
    let DragIndices { dragged, target } = drag;
    let progress = if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    };

    if index == dragged {
        0.0
    } else if target > dragged && dragged < index && index <= target {
        -slot_width * progress
    } else if target < dragged && target <= index && index < dragged {
        slot_width * progress
    } else {
        0.0
    }
}

/// Displacement for every slot of a strip with `len` slots
///
/// With no drag in progress every slot sits at 0.
pub fn slot_offsets(drag: Option<DragIndices>, len: usize, progress: f32, slot_width: f32) -> Vec<f32> {
    match drag {
        Some(drag) => (0..len)
            .map(|index| slot_offset(drag, index, progress, slot_width))
            .collect(),
        None => vec![0.0; len],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: f32 = 64.0;

    #[test]
    fn test_dragged_slot_never_moves() {
        for target in 0..5 {
            for step in 0..=10 {
                let progress = step as f32 / 10.0;
                assert_eq!(slot_offset(DragIndices::new(2, target), 2, progress, W), 0.0);
            }
        }
    }

    #[test]
    fn test_forward_drag_shifts_left() {
        let offsets = slot_offsets(Some(DragIndices::new(0, 3)), 5, 1.0, W);
        assert_eq!(offsets, vec![0.0, -64.0, -64.0, -64.0, 0.0]);
    }

    #[test]
    fn test_backward_drag_shifts_right() {
        let offsets = slot_offsets(Some(DragIndices::new(4, 1)), 5, 0.5, W);
        assert_eq!(offsets, vec![0.0, 32.0, 32.0, 32.0, 0.0]);
    }

    #[test]
    fn test_target_on_dragged_slot_is_flat() {
        let offsets = slot_offsets(Some(DragIndices::new(2, 2)), 5, 1.0, W);
        assert!(offsets.iter().all(|&offset| offset == 0.0));
    }

    #[test]
    fn test_zero_progress_is_flat() {
        let offsets = slot_offsets(Some(DragIndices::new(0, 4)), 5, 0.0, W);
        assert!(offsets.iter().all(|&offset| offset == 0.0));
    }

    #[test]
    fn test_idle_is_flat() {
        assert_eq!(slot_offsets(None, 3, 1.0, W), vec![0.0; 3]);
    }
}
