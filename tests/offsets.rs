//! Slot displacement properties

use slotdock::offset::{slot_offset, slot_offsets, DragIndices};

const W: f32 = 64.0;
const LEN: usize = 6;

fn all_drags() -> impl Iterator<Item = DragIndices> {
    (0..LEN).flat_map(|d| (0..LEN).map(move |t| DragIndices::new(d, t)))
}

#[test]
fn test_dragged_slot_never_moves() {
    for drag in all_drags() {
        for progress in [0.0, 0.3, 1.0] {
            assert_eq!(slot_offset(drag, drag.dragged, progress, W), 0.0);
        }
    }
}

#[test]
fn test_zero_progress_means_no_displacement() {
    for drag in all_drags() {
        assert!(slot_offsets(Some(drag), LEN, 0.0, W)
            .iter()
            .all(|&o| o == 0.0));
    }
}

#[test]
fn test_offsets_bounded_by_one_slot() {
    for drag in all_drags() {
        for progress in [0.25, 0.5, 1.0] {
            for offset in slot_offsets(Some(drag), LEN, progress, W) {
                assert!(offset.abs() <= W * progress + f32::EPSILON);
            }
        }
    }
}

#[test]
fn test_full_progress_moves_exactly_the_span() {
    for drag in all_drags() {
        let offsets = slot_offsets(Some(drag), LEN, 1.0, W);
        let moved = offsets.iter().filter(|o| **o != 0.0).count();
        assert_eq!(moved, drag.dragged.abs_diff(drag.target), "{:?}", drag);
    }
}

#[test]
fn test_shift_direction_points_toward_vacated_slot() {
    for drag in all_drags() {
        let offsets = slot_offsets(Some(drag), LEN, 1.0, W);
        for (index, offset) in offsets.into_iter().enumerate() {
            if offset == 0.0 {
                continue;
            }
            // Moving toward `dragged` means the sign matches (dragged - index)
            let toward = drag.dragged as f32 - index as f32;
            assert!(offset.signum() == toward.signum(), "{:?} slot {}", drag, index);
        }
    }
}

#[test]
fn test_no_drag_all_zero() {
    assert_eq!(slot_offsets(None, 3, 1.0, W), vec![0.0; 3]);
}

#[test]
fn test_out_of_range_progress_is_clamped() {
    let drag = DragIndices::new(0, 2);
    assert_eq!(slot_offset(drag, 1, 3.0, W), -W);
    assert_eq!(slot_offset(drag, 1, -1.0, W), 0.0);
    assert_eq!(slot_offset(drag, 1, f32::NAN, W), 0.0);
}
