// Copyright 2025 the Dsviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inputs handed over by the UI layer: the parsed dataset and its option flags.

use alloc::vec::Vec;

bitflags::bitflags! {
    /// Rendering options chosen alongside a dataset.
    ///
    /// Each flag only affects the shapes it names; the others ignore it.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Options: u8 {
        /// Graph edges get arrowheads at their target end.
        const DIRECTED = 0b0000_0001;
        /// Graph rows carry a weight and edges get labels.
        const WEIGHTED = 0b0000_0010;
        /// Reshape a tree into a binary search tree.
        const BINARY   = 0b0000_0100;
        /// Reshape a tree into a min-heap.
        const MIN_HEAP = 0b0000_1000;
        /// Reshape a tree into a max-heap.
        const MAX_HEAP = 0b0001_0000;
        /// Linked-list edges get a reverse arrowhead too.
        const DOUBLY   = 0b0010_0000;
    }
}

impl Default for Options {
    fn default() -> Self {
        Self::empty()
    }
}

/// A structural value, already validated by the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Dataset {
    /// Graph edge rows: `[a, b]`, or `[weight, a, b]` when weighted.
    EdgeList(Vec<Vec<i64>>),
    /// Square adjacency matrix; nodes are numbered from 1.
    AdjacencyMatrix(Vec<Vec<i64>>),
    /// Level-order tree values with `None` for absent children.
    Tree(Vec<Option<i64>>),
    /// Linked-list values in order.
    LinkedList(Vec<Option<i64>>),
    /// Stack values, bottom first.
    Stack(Vec<Option<i64>>),
    /// Queue values, front first.
    Queue(Vec<Option<i64>>),
}

impl Dataset {
    /// Short lowercase name of the shape this dataset draws.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EdgeList(_) | Self::AdjacencyMatrix(_) => "graph",
            Self::Tree(_) => "tree",
            Self::LinkedList(_) => "linked list",
            Self::Stack(_) => "stack",
            Self::Queue(_) => "queue",
        }
    }
}
