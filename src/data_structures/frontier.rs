use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;
use num_traits::{Float, Zero};

/// Open set of a label-setting search over dense node indices
///
/// Tracks the best known distance of every node and which nodes are settled.
/// A node relaxed twice leaves its older heap entry behind; `pop` discards such
/// stale entries, so each node is returned at most once. Among equal distances
/// the lowest index pops first.
#[derive(Debug)]
pub struct Frontier<W>
where
    W: Float + Zero + Debug + Copy + Ord,
{
    heap: BinaryHeap<Reverse<(W, usize)>>,
    distances: Vec<W>,
    settled: Vec<bool>,
    settled_count: usize,
}

impl<W> Frontier<W>
where
    W: Float + Zero + Debug + Copy + Ord,
{
    /// Empty frontier over `node_count` nodes, all at infinite distance
    pub fn new(node_count: usize) -> Self {
        Frontier {
            heap: BinaryHeap::with_capacity(node_count),
            distances: vec![W::infinity(); node_count],
            settled: vec![false; node_count],
            settled_count: 0,
        }
    }

    /// Offers `distance` for `node`; true if it improved an unsettled node
    pub fn relax(&mut self, node: usize, distance: W) -> bool {
        if node >= self.distances.len() || self.settled[node] || distance >= self.distances[node] {
            return false;
        }
        self.distances[node] = distance;
        self.heap.push(Reverse((distance, node)));
        true
    }

    /// Settles and returns the closest unsettled node
    pub fn pop(&mut self) -> Option<(usize, W)> {
        while let Some(Reverse((distance, node))) = self.heap.pop() {
            if self.settled[node] || distance > self.distances[node] {
                continue;
            }
            self.settled[node] = true;
            self.settled_count += 1;
            return Some((node, distance));
        }
        None
    }

    pub fn settled_count(&self) -> usize {
        self.settled_count
    }

    /// Final distances, infinite for nodes never reached
    pub fn into_distances(self) -> Vec<W> {
        self.distances
    }
}
