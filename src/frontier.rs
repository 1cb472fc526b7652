//! Open list and closed set for the search driver.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

use crate::key::StateKey;

struct Entry<T> {
    f: usize,
    seq: u64,
    item: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.f == other.f && self.seq == other.seq
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    // BinaryHeap is a max-heap: smallest f first, then earliest insertion
    fn cmp(&self, other: &Self) -> Ordering {
        other.f.cmp(&self.f).then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Min-priority queue on `f`; equal priorities come out first-in-first-out.
pub struct Frontier<T> {
    heap: BinaryHeap<Entry<T>>,
    next_seq: u64,
}

impl<T> Frontier<T> {
    pub fn new() -> Self {
        Frontier {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    pub fn push(&mut self, f: usize, item: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry { f, seq, item });
    }

    pub fn pop(&mut self) -> Option<(usize, T)> {
        self.heap.pop().map(|e| (e.f, e.item))
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<T> Default for Frontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Keys of states that have already been expanded.
#[derive(Default)]
pub struct Visited {
    keys: HashSet<StateKey>,
}

impl Visited {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if the key was already present.
    pub fn insert(&mut self, key: StateKey) -> bool {
        self.keys.insert(key)
    }

    pub fn contains(&self, key: &StateKey) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
