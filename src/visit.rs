//! Graph traversal building blocks.

use std::{
    collections::{HashSet, VecDeque},
    hash::BuildHasher,
};

use fixedbitset::FixedBitSet;

use crate::core::{Neighbors, VertexId, VertexSet};

pub trait VisitSet {
    /// Marks the vertex as visited. Returns `true` if it was not visited
    /// before.
    fn visit(&mut self, id: VertexId) -> bool;
    fn is_visited(&self, id: &VertexId) -> bool;
    fn visited_count(&self) -> usize;
}

impl<S: BuildHasher> VisitSet for HashSet<VertexId, S> {
    fn visit(&mut self, id: VertexId) -> bool {
        self.insert(id)
    }

    fn is_visited(&self, id: &VertexId) -> bool {
        self.contains(id)
    }

    fn visited_count(&self) -> usize {
        self.len()
    }
}

impl VisitSet for FixedBitSet {
    fn visit(&mut self, id: VertexId) -> bool {
        let index = id.as_usize();
        if self.len() <= index {
            self.grow(index + 1);
        }
        !self.put(index)
    }

    fn is_visited(&self, id: &VertexId) -> bool {
        self.contains(id.as_usize())
    }

    fn visited_count(&self) -> usize {
        self.count_ones(0..self.len())
    }
}

pub trait Visitor<G> {
    type Item;

    fn visit_next(&mut self, graph: &G) -> Option<Self::Item>;

    fn iter<'a>(&'a mut self, graph: &'a G) -> Iter<'a, Self, G>
    where
        Self: Sized,
    {
        Iter {
            visitor: self,
            graph,
        }
    }
}

pub struct Iter<'a, V, G> {
    visitor: &'a mut V,
    graph: &'a G,
}

impl<'a, V, G> Iterator for Iter<'a, V, G>
where
    V: Visitor<G>,
{
    type Item = V::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.visitor.visit_next(self.graph)
    }
}

/// Breadth-first traversal.
///
/// Vertices are yielded in the order in which they are dequeued from the FIFO
/// frontier. A vertex is marked visited when it is enqueued, so it is never
/// enqueued twice.
#[derive(Debug)]
pub struct Bfs {
    visited: FixedBitSet,
    queue: VecDeque<VertexId>,
}

impl Bfs {
    pub fn new<G: VertexSet>(graph: &G) -> Self {
        Self {
            visited: FixedBitSet::with_capacity(graph.vertex_count()),
            queue: VecDeque::new(),
        }
    }

    /// Adds a root to the frontier. Roots that were visited already are
    /// ignored.
    pub fn start(&mut self, root: VertexId) -> &mut Self {
        if self.visited.visit(root) {
            self.queue.push_back(root);
        }
        self
    }

    pub fn visited(&self) -> &impl VisitSet {
        &self.visited
    }
}

impl<G: Neighbors> Visitor<G> for Bfs {
    type Item = VertexId;

    fn visit_next(&mut self, graph: &G) -> Option<Self::Item> {
        let vertex = self.queue.pop_front()?;

        for &neighbor in graph.neighbors(vertex) {
            if self.visited.visit(neighbor) {
                self.queue.push_back(neighbor);
            }
        }

        Some(vertex)
    }
}
