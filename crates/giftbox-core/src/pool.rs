//! Bounded, insertion-ordered particle storage.

use std::collections::VecDeque;

/// Identifier of a live particle
pub type ParticleId = u64;

/// Anything the pool can hold
pub trait Particle {
    fn id(&self) -> ParticleId;
}

/// Fixed-capacity pool. Inserting into a full pool evicts the oldest entry.
#[derive(Clone, Debug)]
pub struct ParticlePool<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T: Particle> ParticlePool<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity.min(1024)),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Insert, returning whatever had to be evicted to make room.
    pub fn insert(&mut self, item: T) -> Option<T> {
        if self.capacity == 0 {
            return Some(item);
        }
        let evicted = if self.items.len() >= self.capacity {
            self.items.pop_front()
        } else {
            None
        };
        self.items.push_back(item);
        evicted
    }

    pub fn remove(&mut self, id: ParticleId) -> Option<T> {
        let index = self.items.iter().position(|p| p.id() == id)?;
        self.items.remove(index)
    }

    /// Remove every particle matching `pred`, returning how many went.
    pub fn remove_where(&mut self, mut pred: impl FnMut(&T) -> bool) -> usize {
        let before = self.items.len();
        self.items.retain(|p| !pred(p));
        before - self.items.len()
    }

    pub fn get(&self, id: ParticleId) -> Option<&T> {
        self.items.iter().find(|p| p.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.items.iter_mut()
    }
}
