//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::rc::Rc;

use slotdock::animation::ManualClock;
use slotdock::config::DockConfig;
use slotdock::model::DockModel;
use slotdock::{Dock, Msg};

pub const LABELS: [char; 5] = ['A', 'B', 'C', 'D', 'E'];

/// Default slot width: 48 content + 8 margin each side
pub const SLOT_WIDTH: f32 = 64.0;

/// Forward run length with the default config
pub const DURATION_MS: u64 = 200;

/// Create a model over A..E driven by a manual clock
pub fn test_model() -> (DockModel<char>, ManualClock) {
    test_model_with(LABELS, DockConfig::default())
}

pub fn test_model_with<const N: usize>(
    items: [char; N],
    config: DockConfig,
) -> (DockModel<char>, ManualClock) {
    let clock = ManualClock::new();
    let model = DockModel::with_clock(items, &config, Rc::new(clock.clone()))
        .expect("test config is valid");
    (model, clock)
}

/// Create a dock over A..E that renders each item as its lowercase form
pub fn test_dock() -> (Dock<char, char>, ManualClock) {
    let clock = ManualClock::new();
    let dock = Dock::builder(LABELS)
        .render(|c: &char| c.to_ascii_lowercase())
        .clock(Rc::new(clock.clone()))
        .build()
        .expect("test dock builds");
    (dock, clock)
}

/// Advance the clock and deliver a tick
pub fn advance(dock: &mut Dock<char, char>, clock: &ManualClock, ms: u64) {
    clock.advance_ms(ms);
    dock.handle(Msg::tick());
}

/// Run the animation to completion in small frames
pub fn settle(dock: &mut Dock<char, char>, clock: &ManualClock) {
    for _ in 0..100 {
        if !dock.is_animating() {
            return;
        }
        advance(dock, clock, 16);
    }
    panic!("animation did not finish");
}

/// Current order of a model's items
pub fn order(model: &DockModel<char>) -> Vec<char> {
    model.items().to_vec()
}

/// Assert two float slices match within a small tolerance
pub fn assert_offsets(actual: &[f32], expected: &[f32]) {
    assert_eq!(actual.len(), expected.len(), "offsets: {:?}", actual);
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!(
            (a - e).abs() < 1e-3,
            "slot {}: expected {}, got {} (all: {:?})",
            i,
            e,
            a,
            actual
        );
    }
}
