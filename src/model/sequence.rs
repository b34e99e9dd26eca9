//! Ordered item storage with stable identities
//!
//! Items are addressed by index for layout, but each one carries an `ItemId`
//! assigned at insertion so renderers and the drag session can follow an item
//! across reorders even when several items compare equal.

use serde::Serialize;

use crate::error::DockError;

/// Stable identifier for an item, independent of its current slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ItemId(pub u64);

/// An item paired with its identity
#[derive(Debug, Clone)]
struct Entry<T> {
    id: ItemId,
    value: T,
}

/// Ordered, index-addressable items; indices always form `[0, len)`
#[derive(Debug, Clone)]
pub struct ItemSequence<T> {
    entries: Vec<Entry<T>>,
    next_id: u64,
}

impl<T> ItemSequence<T> {
    /// Build a sequence, assigning ids in initial order starting at 1
    pub fn new(items: impl IntoIterator<Item = T>) -> Self {
        let mut next_id = 1;
        let entries = items
            .into_iter()
            .map(|value| {
                let id = ItemId(next_id);
                next_id += 1;
                Entry { id, value }
            })
            .collect();
        Self { entries, next_id }
    }

    /// Current number of items
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Item at `index`
    pub fn get(&self, index: usize) -> Result<&T, DockError> {
        self.entries
            .get(index)
            .map(|entry| &entry.value)
            .ok_or(DockError::IndexOutOfRange {
                index,
                len: self.len(),
            })
    }

    /// Identity of the item currently at `index`
    pub fn id_at(&self, index: usize) -> Result<ItemId, DockError> {
        self.entries
            .get(index)
            .map(|entry| entry.id)
            .ok_or(DockError::IndexOutOfRange {
                index,
                len: self.len(),
            })
    }

    /// Current index of the item with `id`, if it is still present
    pub fn index_of(&self, id: ItemId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    /// Move the item at `from` so it ends up at `to`
    ///
    /// Items strictly between the two positions shift one slot toward `from`.
    /// The permutation happens in one step through a slice rotation, so no
    /// reader can observe a removed-but-not-reinserted state.
    pub fn move_item(&mut self, from: usize, to: usize) -> Result<(), DockError> {
        let len = self.len();
        DockError::check_index(from, len)?;
        DockError::check_index(to, len)?;

        if from < to {
            self.entries[from..=to].rotate_left(1);
        } else if from > to {
            self.entries[to..=from].rotate_right(1);
        }
        Ok(())
    }

    /// Append an item at the end, returning its new id
    pub fn push(&mut self, value: T) -> ItemId {
        let id = ItemId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry { id, value });
        id
    }

    /// Iterate values in slot order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|entry| &entry.value)
    }

    /// Iterate `(id, value)` pairs in slot order
    pub fn iter_with_ids(&self) -> impl Iterator<Item = (ItemId, &T)> {
        self.entries.iter().map(|entry| (entry.id, &entry.value))
    }

    /// Ids in slot order
    pub fn ids(&self) -> Vec<ItemId> {
        self.entries.iter().map(|entry| entry.id).collect()
    }
}

impl<T: Clone> ItemSequence<T> {
    /// Snapshot of the values in slot order
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T> FromIterator<T> for ItemSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter)
    }
}
