//! Ready queue of live task instances.
//!
//! Insertion order is preserved except for removals, and it is observable:
//! equal-deadline dispatch ties fall back to queue position (oldest first),
//! and the printed queue snapshot lists instances oldest first. Removal is
//! O(n) shift-based; instance counts are small enough that an index-stable
//! structure is not warranted.

use std::ops::{Index, IndexMut};

use super::TaskInstance;

/// Ordered owning collection of live task instances.
///
/// Instances enter at the tail on admission and leave only on completion.
#[derive(Debug, Clone, Default)]
pub struct ReadyQueue {
    instances: Vec<TaskInstance>,
}

impl ReadyQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live instances.
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// Whether the queue holds no instances.
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Appends an instance at the tail.
    pub fn push(&mut self, instance: TaskInstance) {
        self.instances.push(instance);
    }

    /// Removes and returns the instance at `index`, shifting later entries
    /// toward the front so relative order is preserved.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> TaskInstance {
        self.instances.remove(index)
    }

    /// Iterates instances oldest first.
    pub fn iter(&self) -> std::slice::Iter<'_, TaskInstance> {
        self.instances.iter()
    }

    /// Iterates instances mutably, oldest first.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, TaskInstance> {
        self.instances.iter_mut()
    }
}

impl Index<usize> for ReadyQueue {
    type Output = TaskInstance;

    fn index(&self, index: usize) -> &TaskInstance {
        &self.instances[index]
    }
}

impl IndexMut<usize> for ReadyQueue {
    fn index_mut(&mut self, index: usize) -> &mut TaskInstance {
        &mut self.instances[index]
    }
}
