use std::mem;

use crate::{Error, Result};

/// An opaque, stable reference to one live entry in an
/// [`AdaptablePriorityQueue`].
///
/// A handle stays valid across any number of heap reorganizations and is
/// invalidated only when its entry leaves the queue through `extract_min` or
/// `remove`. Operating on a detached handle returns
/// [`Error::DetachedHandle`]. Handles are only meaningful for the queue that
/// issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle(usize);

/// One heap entry: a key, its payload, and the slot that tracks where in the
/// heap array the entry currently sits.
#[derive(Debug)]
struct Entry<K, V> {
    key: K,
    value: V,
    slot: usize,
}

/// A binary min-heap supporting O(log n) key updates and removal of arbitrary
/// entries through stable handles.
///
/// Each entry records the slot it was issued under, and a side table maps
/// slots back to current heap positions. Every swap during rebalancing also
/// updates the table, so an entry can be relocated from its handle without a
/// linear scan. Slot numbers are never recycled, which lets a stale handle be
/// detected instead of silently aliasing a newer entry.
#[derive(Debug)]
pub struct AdaptablePriorityQueue<K, V>
where
    K: Ord,
{
    /// Heap-ordered entries
    body: Vec<Entry<K, V>>,

    /// slot id -> current position in `body`; `None` once detached
    slots: Vec<Option<usize>>,
}

impl<K, V> AdaptablePriorityQueue<K, V>
where
    K: Ord,
{
    /// Creates a new empty queue
    pub fn new() -> Self {
        AdaptablePriorityQueue {
            body: Vec::new(),
            slots: Vec::new(),
        }
    }

    /// Creates a queue with room for `capacity` entries before reallocating
    pub fn with_capacity(capacity: usize) -> Self {
        AdaptablePriorityQueue {
            body: Vec::with_capacity(capacity),
            slots: Vec::with_capacity(capacity),
        }
    }

    /// Returns true if no entries remain
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the number of live entries
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Inserts a new entry and returns the handle that tracks it.
    ///
    /// The entry is appended at the next free position and sifted toward the
    /// root while it violates heap order with its parent. O(log n).
    pub fn insert(&mut self, key: K, value: V) -> Handle {
        let slot = self.slots.len();
        let position = self.body.len();
        self.slots.push(Some(position));
        self.body.push(Entry { key, value, slot });
        self.rebalance(position);
        Handle(slot)
    }

    /// Returns the minimum entry without removing it
    pub fn peek_min(&self) -> Result<(&K, &V)> {
        self.body
            .first()
            .map(|entry| (&entry.key, &entry.value))
            .ok_or(Error::EmptyQueue)
    }

    /// Removes and returns the minimum entry, detaching its handle.
    ///
    /// The last entry is moved into the root slot and sifted downward until
    /// heap order is restored. O(log n).
    pub fn extract_min(&mut self) -> Result<(K, V)> {
        if self.body.is_empty() {
            return Err(Error::EmptyQueue);
        }
        let entry = self.body.swap_remove(0);
        self.slots[entry.slot] = None;
        if !self.body.is_empty() {
            self.slots[self.body[0].slot] = Some(0);
            self.rebalance(0);
        }
        Ok((entry.key, entry.value))
    }

    /// Replaces the key of the entry behind `handle` and restores heap order,
    /// returning the old key.
    ///
    /// Exactly one direction (toward the parent or toward the children) can
    /// need movement, since only one key changed; movement may cascade further
    /// in that direction. O(log n).
    pub fn update_key(&mut self, handle: Handle, new_key: K) -> Result<K> {
        let position = self.position(handle)?;
        let old_key = mem::replace(&mut self.body[position].key, new_key);
        self.rebalance(position);
        Ok(old_key)
    }

    /// Returns the current key of the entry behind `handle`
    pub fn key_of(&self, handle: Handle) -> Result<&K> {
        let position = self.position(handle)?;
        Ok(&self.body[position].key)
    }

    /// Removes an arbitrary entry, detaching its handle.
    ///
    /// The last entry is moved into the removed entry's position and the heap
    /// is rebalanced from there, in whichever direction order demands.
    /// O(log n).
    pub fn remove(&mut self, handle: Handle) -> Result<(K, V)> {
        let position = self.position(handle)?;
        let entry = self.body.swap_remove(position);
        self.slots[entry.slot] = None;
        if position < self.body.len() {
            self.slots[self.body[position].slot] = Some(position);
            self.rebalance(position);
        }
        Ok((entry.key, entry.value))
    }

    /// Resolves a handle to its current heap position
    fn position(&self, handle: Handle) -> Result<usize> {
        self.slots
            .get(handle.0)
            .copied()
            .flatten()
            .ok_or(Error::DetachedHandle)
    }

    /// Restores heap order starting from `index`: sift up while the parent's
    /// key is greater, otherwise sift down toward the smaller in-bounds child,
    /// until no swap is needed. Every swap also updates the slot table so each
    /// live handle keeps pointing at its entry.
    fn rebalance(&mut self, mut index: usize) {
        loop {
            if index > 0 {
                let parent = (index - 1) / 2;
                if self.body[index].key < self.body[parent].key {
                    self.swap_entries(index, parent);
                    index = parent;
                    continue;
                }
            }

            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut smallest = index;
            if left < self.body.len() && self.body[left].key < self.body[smallest].key {
                smallest = left;
            }
            if right < self.body.len() && self.body[right].key < self.body[smallest].key {
                smallest = right;
            }
            if smallest == index {
                break;
            }
            self.swap_entries(index, smallest);
            index = smallest;
        }
    }

    /// Swaps two heap positions, keeping the slot table consistent
    fn swap_entries(&mut self, a: usize, b: usize) {
        self.body.swap(a, b);
        self.slots[self.body[a].slot] = Some(a);
        self.slots[self.body[b].slot] = Some(b);
    }
}

impl<K, V> Default for AdaptablePriorityQueue<K, V>
where
    K: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}
