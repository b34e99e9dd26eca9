//! Benchmarks for the drag Msg → Update → Cmd loop
//!
//! Run with: cargo bench drag_cycle

mod support;
use support::make_model;

use slotdock::geometry::slot_index_at;
use slotdock::offset::{slot_offsets, DragIndices};
use slotdock::update::update;
use slotdock::Msg;

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

// ============================================================================
// Update-only benchmarks
// ============================================================================

/// Pointer sweeping across the whole strip, one tick per move
#[divan::bench(args = [8, 64, 512])]
fn drag_sweep(len: usize) {
    let (mut model, clock) = make_model(len);
    let width = model.slot_width();

    update(&mut model, Msg::drag_start(0));
    for i in 0..len {
        let pointer_x = (i as f32 + 0.5) * width;
        let cmd = update(&mut model, Msg::drag_update(pointer_x, 0.0));
        divan::black_box(cmd);
        clock.advance_ms(16);
        divan::black_box(update(&mut model, Msg::tick()));
    }
    update(&mut model, Msg::drop_accept(0, len - 1));

    divan::black_box(&model);
}

/// Full gesture without a drop, ticked until the settle completes
#[divan::bench(args = [8, 64])]
fn drag_end_and_settle(len: usize) {
    let (mut model, clock) = make_model(len);
    let width = model.slot_width();

    update(&mut model, Msg::drag_start(len / 2));
    update(&mut model, Msg::drag_update(width * (len - 1) as f32, 0.0));
    clock.advance_ms(120);
    update(&mut model, Msg::tick());
    update(&mut model, Msg::drag_end());
    while model.is_animating() {
        clock.advance_ms(16);
        divan::black_box(update(&mut model, Msg::tick()));
    }

    divan::black_box(&model);
}

// ============================================================================
// Layout math
// ============================================================================

#[divan::bench(args = [8, 64, 512])]
fn offsets_for_frame(len: usize) -> Vec<f32> {
    let drag = DragIndices::new(0, len - 1);
    slot_offsets(Some(divan::black_box(drag)), len, divan::black_box(0.5), 64.0)
}

#[divan::bench]
fn index_lookup() -> Option<usize> {
    slot_index_at(divan::black_box(1234.5), 64.0, divan::black_box(100))
}
