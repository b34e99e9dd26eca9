//! Dock facade: a model paired with the host's render function
//!
//! The render function is opaque to the dock. It turns an item into whatever
//! visual the host draws, and the dock only decides where each visual goes.

use std::fmt;
use std::rc::Rc;

use crate::animation::FrameClock;
use crate::commands::Cmd;
use crate::config::DockConfig;
use crate::error::DockError;
use crate::messages::Msg;
use crate::model::{DockModel, DragSession, ItemId};
use crate::snapshot::DockSnapshot;
use crate::update::update;

type RenderFn<T, V> = Box<dyn Fn(&T) -> V>;

/// One slot as the render layer should draw it
#[derive(Debug, Clone, PartialEq)]
pub struct SlotView<V> {
    pub index: usize,
    pub id: ItemId,
    /// Displacement along the strip for this frame
    pub offset: f32,
    /// The item in this slot is being dragged and is drawn under the pointer instead
    pub is_dragged: bool,
    pub visual: V,
}

/// A reorderable strip of items
pub struct Dock<T, V> {
    model: DockModel<T>,
    render: RenderFn<T, V>,
}

impl<T, V> Dock<T, V> {
    pub fn builder(items: impl IntoIterator<Item = T>) -> DockBuilder<T, V> {
        DockBuilder::new(items)
    }

    /// Feed one event through the update loop
    pub fn handle(&mut self, msg: Msg) -> Option<Cmd> {
        update(&mut self.model, msg)
    }

    pub fn model(&self) -> &DockModel<T> {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut DockModel<T> {
        &mut self.model
    }

    pub fn session(&self) -> &DragSession {
        self.model.session()
    }

    pub fn len(&self) -> usize {
        self.model.len()
    }

    pub fn is_empty(&self) -> bool {
        self.model.is_empty()
    }

    pub fn offsets(&self) -> Vec<f32> {
        self.model.offsets()
    }

    pub fn is_animating(&self) -> bool {
        self.model.is_animating()
    }

    /// Render the item at `index`
    pub fn render_item(&self, index: usize) -> Result<V, DockError> {
        self.model.items().get(index).map(|item| (self.render)(item))
    }

    /// Visual of the dragged item, for the floating copy under the pointer
    pub fn dragged_visual(&self) -> Option<V> {
        let index = self.model.session().dragged()?;
        self.render_item(index).ok()
    }

    /// Every slot in order with its visual and current displacement
    pub fn slots(&self) -> Vec<SlotView<V>> {
        let dragged = self.model.session().dragged();
        self.model
            .items()
            .iter_with_ids()
            .enumerate()
            .map(|(index, (id, item))| SlotView {
                index,
                id,
                offset: self.model.offset(index),
                is_dragged: dragged == Some(index),
                visual: (self.render)(item),
            })
            .collect()
    }

    pub fn snapshot(&self) -> DockSnapshot<'_, T> {
        DockSnapshot::capture(&self.model)
    }

    /// Cancel pending animation; further events are ignored
    pub fn dispose(&mut self) -> Option<Cmd> {
        self.handle(Msg::dispose())
    }
}

impl<T: Clone, V> Dock<T, V> {
    /// Current order of items
    pub fn items(&self) -> Vec<T> {
        self.model.items().to_vec()
    }
}

impl<T, V> Drop for Dock<T, V> {
    fn drop(&mut self) {
        self.model.dispose();
    }
}

impl<T: fmt::Debug, V> fmt::Debug for Dock<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dock")
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

/// Builder for `Dock`; a render function is required
pub struct DockBuilder<T, V> {
    items: Vec<T>,
    render: Option<RenderFn<T, V>>,
    config: DockConfig,
    clock: Option<Rc<dyn FrameClock>>,
}

impl<T, V> DockBuilder<T, V> {
    pub fn new(items: impl IntoIterator<Item = T>) -> Self {
        Self {
            items: items.into_iter().collect(),
            render: None,
            config: DockConfig::default(),
            clock: None,
        }
    }

    pub fn render(mut self, render: impl Fn(&T) -> V + 'static) -> Self {
        self.render = Some(Box::new(render));
        self
    }

    pub fn config(mut self, config: DockConfig) -> Self {
        self.config = config;
        self
    }

    pub fn clock(mut self, clock: Rc<dyn FrameClock>) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn build(self) -> Result<Dock<T, V>, DockError> {
        let render = self.render.ok_or(DockError::MissingRenderer)?;
        let model = match self.clock {
            Some(clock) => DockModel::with_clock(self.items, &self.config, clock)?,
            None => DockModel::new(self.items, &self.config)?,
        };
        Ok(Dock { model, render })
    }
}
