//! Debug state dump for development diagnostics
//!
//! Serializes a snapshot of a dock to JSON for easier debugging.

use serde::Serialize;

use crate::animation::Direction;
use crate::model::{DockModel, DragSession, ItemId};

#[derive(Debug, Serialize)]
pub struct DockSnapshot<'a, T> {
    pub items: Vec<ItemDump<'a, T>>,
    pub session: DragSession,
    pub progress: f32,
    pub eased_progress: f32,
    pub direction: Option<Direction>,
    pub offsets: Vec<f32>,
    pub slot_width: f32,
    pub disposed: bool,
}

#[derive(Debug, Serialize)]
pub struct ItemDump<'a, T> {
    pub index: usize,
    pub id: ItemId,
    pub value: &'a T,
}

impl<'a, T> DockSnapshot<'a, T> {
    pub fn capture(model: &'a DockModel<T>) -> Self {
        Self {
            items: model
                .items()
                .iter_with_ids()
                .enumerate()
                .map(|(index, (id, value))| ItemDump { index, id, value })
                .collect(),
            session: *model.session(),
            progress: model.progress(),
            eased_progress: model.eased_progress(),
            direction: model.animation().direction(),
            offsets: model.offsets(),
            slot_width: model.slot_width(),
            disposed: model.is_disposed(),
        }
    }
}

impl<T: Serialize> DockSnapshot<'_, T> {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
