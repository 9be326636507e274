//! Indexed min-priority queue of vertices.
//!
//! A binary heap keyed by tentative travel time, with a position table so
//! a queued vertex's key can be lowered in place in O(log V). The queue is
//! allocated per search; only vertices that have been reached are ever
//! inserted, so no "unreached" sentinel key is needed.

use crate::domain::Minutes;
use crate::graph::VertexId;

/// Min-heap of vertices supporting decrease-key.
#[derive(Debug, Clone)]
pub struct VertexQueue {
    heap: Vec<(Minutes, VertexId)>,
    /// Heap slot of each vertex, or `None` if not queued.
    positions: Vec<Option<usize>>,
}

impl VertexQueue {
    /// Create an empty queue able to hold vertices `0..vertex_count`.
    pub fn with_capacity(vertex_count: usize) -> Self {
        Self {
            heap: Vec::new(),
            positions: vec![None; vertex_count],
        }
    }

    /// Returns the number of queued vertices.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if no vertices are queued.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Check whether a vertex is currently queued.
    pub fn contains(&self, id: VertexId) -> bool {
        self.positions
            .get(id.index())
            .is_some_and(|pos| pos.is_some())
    }

    /// Returns the key of a queued vertex.
    pub fn key(&self, id: VertexId) -> Option<Minutes> {
        let pos = (*self.positions.get(id.index())?)?;
        Some(self.heap[pos].0)
    }

    /// Insert a vertex, or lower its key if already queued.
    ///
    /// Returns false, leaving the queue untouched, if the vertex is queued
    /// with a key no greater than `key`.
    pub fn push_or_decrease(&mut self, id: VertexId, key: Minutes) -> bool {
        if id.index() >= self.positions.len() {
            self.positions.resize(id.index() + 1, None);
        }

        match self.positions[id.index()] {
            Some(pos) => {
                if key >= self.heap[pos].0 {
                    return false;
                }
                self.heap[pos].0 = key;
                self.sift_up(pos);
            }
            None => {
                let pos = self.heap.len();
                self.heap.push((key, id));
                self.positions[id.index()] = Some(pos);
                self.sift_up(pos);
            }
        }
        true
    }

    /// Remove and return the vertex with the smallest key.
    pub fn pop_min(&mut self) -> Option<(VertexId, Minutes)> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let (key, id) = self.heap.pop()?;
        self.positions[id.index()] = None;
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some((id, key))
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if self.heap[pos].0 >= self.heap[parent].0 {
                break;
            }
            self.swap(pos, parent);
            pos = parent;
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * pos + 1;
            let right = left + 1;
            let mut smallest = pos;

            if left < len && self.heap[left].0 < self.heap[smallest].0 {
                smallest = left;
            }
            if right < len && self.heap[right].0 < self.heap[smallest].0 {
                smallest = right;
            }
            if smallest == pos {
                break;
            }
            self.swap(pos, smallest);
            pos = smallest;
        }
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.heap.swap(i, j);
        self.positions[self.heap[i].1.index()] = Some(i);
        self.positions[self.heap[j].1.index()] = Some(j);
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Whatever the sequence of inserts and decreases, pops come out in
        /// non-decreasing key order and each vertex carries its lowest key
        #[test]
        fn pops_sorted_with_lowest_keys(ops in prop::collection::vec((0usize..20, 0u32..100), 0..200)) {
            let mut queue = VertexQueue::with_capacity(20);
            let mut best: std::collections::HashMap<usize, u32> = std::collections::HashMap::new();
            for &(id, key) in &ops {
                queue.push_or_decrease(VertexId(id), Minutes::new(key));
                let entry = best.entry(id).or_insert(key);
                *entry = (*entry).min(key);
            }

            let mut last = Minutes::ZERO;
            let mut popped = 0;
            while let Some((id, key)) = queue.pop_min() {
                prop_assert!(key >= last);
                prop_assert_eq!(Some(&key.get()), best.get(&id.index()));
                last = key;
                popped += 1;
            }
            prop_assert_eq!(popped, best.len());
        }
    }
}
