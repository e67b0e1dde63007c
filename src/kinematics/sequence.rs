use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{KinematicsError, Result};

/// Stable identity of an item in a [`Sequence`].
///
/// Ids survive reordering and are never handed out twice by the same sequence,
/// even after the item is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(u64);

impl ItemId {
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry<T> {
    id: ItemId,
    pub value: T,
}

impl<T> Entry<T> {
    pub fn id(&self) -> ItemId {
        self.id
    }
}

/// Ordered, user-editable list whose items keep their identity while being
/// inserted, removed and reordered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sequence<T> {
    entries: Vec<Entry<T>>,
    next_id: u64,
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Sequence<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    fn allocate_id(&mut self) -> ItemId {
        let id = ItemId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn push(&mut self, value: T) -> ItemId {
        let id = self.allocate_id();
        self.entries.push(Entry { id, value });
        id
    }

    /// Inserts before `index`; `index == len()` appends.
    pub fn insert(&mut self, index: usize, value: T) -> Result<ItemId> {
        if index > self.entries.len() {
            return Err(KinematicsError::IndexOutOfBounds {
                index,
                len: self.entries.len(),
            });
        }

        let id = self.allocate_id();
        self.entries.insert(index, Entry { id, value });
        Ok(id)
    }

    pub fn remove(&mut self, id: ItemId) -> Result<T> {
        let index = self.index_of(id)?;
        Ok(self.entries.remove(index).value)
    }

    pub fn position(&self, id: ItemId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    fn index_of(&self, id: ItemId) -> Result<usize> {
        self.position(id).ok_or(KinematicsError::UnknownItem(id))
    }

    pub fn get(&self, id: ItemId) -> Option<&T> {
        self.entries.iter().find(|e| e.id == id).map(|e| &e.value)
    }

    pub fn get_mut(&mut self, id: ItemId) -> Option<&mut T> {
        self.entries
            .iter_mut()
            .find(|e| e.id == id)
            .map(|e| &mut e.value)
    }

    pub fn entry_at(&self, index: usize) -> Option<&Entry<T>> {
        self.entries.get(index)
    }

    /// Moves the item one place towards the front. No-op for the first item.
    pub fn move_up(&mut self, id: ItemId) -> Result<()> {
        let index = self.index_of(id)?;
        if index > 0 {
            self.entries.swap(index, index - 1);
        }
        Ok(())
    }

    /// Moves the item one place towards the back. No-op for the last item.
    pub fn move_down(&mut self, id: ItemId) -> Result<()> {
        let index = self.index_of(id)?;
        if index + 1 < self.entries.len() {
            self.entries.swap(index, index + 1);
        }
        Ok(())
    }

    pub fn swap(&mut self, a: usize, b: usize) -> Result<()> {
        let len = self.entries.len();
        for index in [a, b] {
            if index >= len {
                return Err(KinematicsError::IndexOutOfBounds { index, len });
            }
        }
        self.entries.swap(a, b);
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry<T>> + '_ {
        self.entries.iter()
    }

    pub fn values(&self) -> impl Iterator<Item = &T> + '_ {
        self.entries.iter().map(|e| &e.value)
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> + '_ {
        self.entries.iter_mut().map(|e| &mut e.value)
    }

    pub fn ids(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.entries.iter().map(|e| e.id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every item. Ids already handed out stay retired.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut sequence = Self::new();
        for value in iter {
            sequence.push(value);
        }
        sequence
    }
}

impl<T> Extend<T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}
