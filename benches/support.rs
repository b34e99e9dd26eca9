//! Shared helpers for dock benchmarks

#![allow(dead_code)]

use std::rc::Rc;

use slotdock::animation::ManualClock;
use slotdock::config::DockConfig;
use slotdock::model::DockModel;

/// Model with `len` numbered items on a manual clock
pub fn make_model(len: usize) -> (DockModel<usize>, ManualClock) {
    let clock = ManualClock::new();
    let model = DockModel::with_clock(0..len, &DockConfig::default(), Rc::new(clock.clone()))
        .expect("default config is valid");
    (model, clock)
}
