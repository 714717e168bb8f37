// Copyright 2025 the Dsviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Binary trees built from level-order arrays.
//!
//! ## Construction
//!
//! The first value becomes the root. Every later value fills the first child
//! slot that is still [`Child::Unset`], scanning nodes breadth first; a `None`
//! value marks that slot [`Child::Absent`] instead of creating a node. Absent
//! children are never visited again, so `[1, null, 2]` puts `2` as the right
//! child of the root and `[1, null, null, 2]` has nowhere to put `2` at all.
//!
//! Nodes live in an arena in creation order, which is level order, so a
//! parent always has a smaller [`NodeId`] than its children.
//!
//! ## Reshaping
//!
//! - [`BinaryTree::to_bst`] keeps the shape and redistributes the sorted
//!   values by subtree size, giving an in-order-sorted tree.
//! - [`BinaryTree::to_heap`] sorts the values, puts the gaps back where they
//!   were in the input, and rebuilds.
//!
//! ## Layout
//!
//! A node in column `j` of depth `d` is centered in the `j`-th of `2^d` equal
//! horizontal cells. Children of column `j` sit in columns `2j` and `2j + 1`
//! whether or not their siblings exist, so sparse subtrees keep the columns
//! they would have in a complete tree.

use alloc::collections::VecDeque;
use alloc::string::ToString;
use alloc::vec::Vec;

use dsviz_animation::{EdgeCursor, EdgeSequence, EdgeStep, Scheduler};
use dsviz_geometry::{Plane, RelativePoint};
use dsviz_surface::Surface;

use crate::util::{shortened, trim_nulls};
use crate::{Options, Shape, Style, paint};

/// Pieces each tree edge is revealed in.
pub const TREE_EDGE_STEPS: usize = 20;

/// Index of a node in a [`BinaryTree`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// The root of any non-empty tree.
    pub const ROOT: Self = Self(0);

    const fn idx(self) -> usize {
        self.0
    }
}

/// A child slot.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Child {
    /// Not reached during construction.
    #[default]
    Unset,
    /// Explicitly empty: the input had a `None` here.
    Absent,
    /// Holds a node.
    Present(NodeId),
}

impl Child {
    /// The node in this slot, if any.
    pub const fn node(self) -> Option<NodeId> {
        match self {
            Self::Present(id) => Some(id),
            Self::Unset | Self::Absent => None,
        }
    }
}

/// A tree node with cached subtree sizes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BinaryNode {
    /// The node's value.
    pub value: i64,
    /// Left child slot.
    pub left: Child,
    /// Right child slot.
    pub right: Child,
    /// Number of nodes under `left`, once counted.
    pub left_count: usize,
    /// Number of nodes under `right`, once counted.
    pub right_count: usize,
    /// Distance from the root.
    pub depth: usize,
}

impl BinaryNode {
    const fn new(value: i64, depth: usize) -> Self {
        Self {
            value,
            left: Child::Unset,
            right: Child::Unset,
            left_count: 0,
            right_count: 0,
            depth,
        }
    }
}

/// Which end of the ordering a heap keeps at its root.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HeapOrder {
    /// Smallest value at the root.
    Min,
    /// Largest value at the root.
    Max,
}

/// An arena-backed binary tree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BinaryTree {
    nodes: Vec<BinaryNode>,
    max_depth: usize,
}

impl BinaryTree {
    /// Build a tree from level-order values; outer `None` runs are trimmed first.
    pub fn from_level_order(values: &[Option<i64>]) -> Self {
        let mut tree = Self::default();
        let values = trim_nulls(values);
        let Some((&Some(root), rest)) = values.split_first() else {
            return tree;
        };
        tree.nodes.push(BinaryNode::new(root, 0));

        // Nodes that still have an unset slot, in BFS order.
        let mut open = VecDeque::from([NodeId::ROOT]);
        for (placed, &value) in rest.iter().enumerate() {
            let Some(&parent) = open.front() else {
                tracing::debug!(
                    dropped = rest.len() - placed,
                    "no unset child slot left; ignoring remaining values"
                );
                break;
            };
            let child = match value {
                None => Child::Absent,
                Some(value) => {
                    let depth = tree.nodes[parent.idx()].depth + 1;
                    let id = NodeId(tree.nodes.len());
                    tree.nodes.push(BinaryNode::new(value, depth));
                    tree.max_depth = tree.max_depth.max(depth);
                    open.push_back(id);
                    Child::Present(id)
                }
            };
            let slot = &mut tree.nodes[parent.idx()];
            if slot.left == Child::Unset {
                slot.left = child;
            } else {
                slot.right = child;
                open.pop_front();
            }
        }
        tree
    }

    /// The root, unless the tree is empty.
    pub fn root(&self) -> Option<NodeId> {
        (!self.nodes.is_empty()).then_some(NodeId::ROOT)
    }

    /// Look up a node.
    pub fn get(&self, id: NodeId) -> Option<&BinaryNode> {
        self.nodes.get(id.idx())
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Depth of the deepest node, with the root at 0.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Node values in level order.
    pub fn level_order(&self) -> Vec<i64> {
        self.nodes.iter().map(|n| n.value).collect()
    }

    /// Node ids in level order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId)
    }

    /// Fill in `left_count` and `right_count` for every node.
    pub fn count_subtrees(&mut self) {
        // Children always come after their parent, so a reverse sweep sees
        // every subtree before the node above it.
        for i in (0..self.nodes.len()).rev() {
            let left = self.subtree_size(self.nodes[i].left);
            let right = self.subtree_size(self.nodes[i].right);
            let node = &mut self.nodes[i];
            node.left_count = left;
            node.right_count = right;
        }
    }

    fn subtree_size(&self, child: Child) -> usize {
        child
            .node()
            .and_then(|id| self.get(id))
            .map_or(0, |n| n.left_count + 1 + n.right_count)
    }

    /// Reorder values into binary-search-tree order without changing the shape.
    ///
    /// `flat` is the level-order input this tree was built from. Returns the
    /// reshaped tree together with the sorted values after their gaps have been
    /// put back at their input positions. That second array is not
    /// consulted when reshaping and need not match the tree's level order.
    pub fn to_bst(&self, flat: &[Option<i64>]) -> (Self, Vec<Option<i64>>) {
        let mut shaped = self.clone();
        shaped.count_subtrees();

        let (mut values, gaps) = displace_nulls(trim_nulls(flat));
        values.sort_unstable();

        // The sorted range each subtree draws its values from.
        let mut ranges = alloc::vec![(0, 0); shaped.nodes.len()];
        if let Some(root) = ranges.first_mut() {
            *root = (0, values.len());
        }
        for i in 0..shaped.nodes.len() {
            let (start, end) = ranges[i];
            let BinaryNode {
                left,
                right,
                left_count,
                ..
            } = shaped.nodes[i];
            let pivot = (start + left_count).min(end);
            if let Some(&value) = values[..end].get(pivot) {
                shaped.nodes[i].value = value;
            }
            if let Some(id) = left.node() {
                ranges[id.idx()] = (start, pivot);
            }
            if let Some(id) = right.node() {
                ranges[id.idx()] = ((pivot + 1).min(end), end);
            }
        }

        let ordered = reinsert_nulls(values, &gaps);
        (shaped, ordered)
    }

    /// Rebuild as a heap from the values of `flat`.
    ///
    /// Gaps stay at their input positions, so the heap has the same shape as
    /// a tree built from `flat`. Returns the heap and the level-order array it
    /// was built from.
    pub fn to_heap(flat: &[Option<i64>], order: HeapOrder) -> (Self, Vec<Option<i64>>) {
        let (mut values, gaps) = displace_nulls(trim_nulls(flat));
        match order {
            HeapOrder::Min => values.sort_unstable(),
            HeapOrder::Max => values.sort_unstable_by(|a, b| b.cmp(a)),
        }
        let ordered = reinsert_nulls(values, &gaps);
        (Self::from_level_order(&ordered), ordered)
    }
}

/// Split `flat` into its values and the indices of its gaps.
fn displace_nulls(flat: &[Option<i64>]) -> (Vec<i64>, Vec<usize>) {
    let mut values = Vec::with_capacity(flat.len());
    let mut gaps = Vec::new();
    for (i, v) in flat.iter().enumerate() {
        match v {
            Some(v) => values.push(*v),
            None => gaps.push(i),
        }
    }
    (values, gaps)
}

/// Insert a gap at each index of `gaps` (ascending), walking left to right.
fn reinsert_nulls(values: Vec<i64>, gaps: &[usize]) -> Vec<Option<i64>> {
    let mut out: Vec<Option<i64>> = values.into_iter().map(Some).collect();
    let mut gaps = gaps.iter().copied().peekable();
    let mut j = 0;
    while j < out.len() {
        let Some(&gap) = gaps.peek() else { break };
        if j == gap {
            out.insert(j, None);
            gaps.next();
        }
        j += 1;
    }
    out
}

/// Positions and edges of a laid-out tree.
#[derive(Clone, Debug, Default)]
pub struct TreeLayout {
    /// Node centers, indexed like the tree's nodes.
    pub positions: Vec<RelativePoint>,
    /// Parent-to-child edges, trimmed to the node circles.
    pub edges: Vec<(RelativePoint, RelativePoint)>,
    /// Node radius.
    pub radius: f64,
}

impl TreeLayout {
    /// Lay out `tree` on `plane`.
    pub fn new(tree: &BinaryTree, plane: Plane, style: &Style) -> Self {
        let Some(root) = tree.root() else {
            return Self::default();
        };
        let grid_height = (tree.max_depth() + 1) as f64;
        // Width of a cell on the deepest level.
        let cell = (0..tree.max_depth()).fold(plane.width, |w, _| w / 2.0);
        let radius = style.clamped_radius(cell);
        let row_height = plane.height / grid_height;

        let mut positions = alloc::vec![RelativePoint::new(0.0, 0.0, plane); tree.len()];
        // (column, cell width) per node; a child's cell is half its parent's.
        let mut columns = alloc::vec![(0.0_f64, plane.width); tree.len()];
        let mut edges = Vec::new();

        for id in tree.ids() {
            let Some(node) = tree.get(id) else { continue };
            let (column, span) = columns[id.idx()];
            let x = column * span + span / 2.0;
            let mut y = cell / 2.0 + row_height * node.depth as f64;
            if y - radius <= 0.0 {
                y = radius;
            }
            positions[id.idx()] = RelativePoint::new(x, y, plane);

            for (slot, offset) in [(node.left, 0.0), (node.right, 1.0)] {
                if let Some(child) = slot.node() {
                    columns[child.idx()] = (column * 2.0 + offset, span / 2.0);
                }
            }
        }

        // Parents precede children, so every parent is placed by now.
        for id in tree.ids() {
            let Some(node) = tree.get(id) else { continue };
            for child in [node.left, node.right].into_iter().filter_map(Child::node) {
                edges.push(shortened(positions[id.idx()], positions[child.idx()], radius));
            }
        }

        tracing::debug!(nodes = tree.len(), depth = tree.max_depth(), root = ?root, radius, "tree laid out");
        Self {
            positions,
            edges,
            radius,
        }
    }
}

/// A tree visualization.
#[derive(Clone, Debug)]
pub struct Tree {
    plane: Plane,
    style: Style,
    tree: BinaryTree,
    ordered_values: Vec<Option<i64>>,
    layout: TreeLayout,
    reveal: EdgeSequence,
}

impl Tree {
    /// Build, reshape per `options`, and lay out a tree.
    ///
    /// [`Options::BINARY`] wins over [`Options::MAX_HEAP`], which wins over
    /// [`Options::MIN_HEAP`].
    pub fn parse(values: &[Option<i64>], options: Options, plane: Plane, style: Style) -> Self {
        let flat = trim_nulls(values);
        let built = BinaryTree::from_level_order(flat);
        let (tree, ordered_values) = if options.contains(Options::BINARY) {
            built.to_bst(flat)
        } else if options.contains(Options::MAX_HEAP) {
            BinaryTree::to_heap(flat, HeapOrder::Max)
        } else if options.contains(Options::MIN_HEAP) {
            BinaryTree::to_heap(flat, HeapOrder::Min)
        } else {
            (built, flat.to_vec())
        };
        let layout = TreeLayout::new(&tree, plane, &style);
        Self {
            plane,
            style,
            tree,
            ordered_values,
            layout,
            reveal: EdgeSequence::default(),
        }
    }

    /// The (possibly reshaped) tree.
    pub fn tree(&self) -> &BinaryTree {
        &self.tree
    }

    /// The flat value array after reshaping; see [`BinaryTree::to_bst`].
    pub fn ordered_values(&self) -> &[Option<i64>] {
        &self.ordered_values
    }

    /// Node positions and edges.
    pub fn layout(&self) -> &TreeLayout {
        &self.layout
    }
}

impl Shape for Tree {
    fn plot(&mut self, scheduler: &mut Scheduler, surface: &mut dyn Surface) {
        paint::background(surface, self.plane, &self.style);
        for id in self.tree.ids() {
            if let Some(node) = self.tree.get(id) {
                let label = node.value.to_string();
                let center = self.layout.positions[id.idx()];
                paint::node(surface, &self.style, center, self.layout.radius, &label);
            }
        }

        if scheduler.is_enabled() {
            self.reveal = EdgeSequence::new(
                self.layout
                    .edges
                    .iter()
                    .map(|&(from, to)| EdgeCursor::between(from, to, TREE_EDGE_STEPS))
                    .collect(),
            );
            self.on_frame(scheduler, surface);
        } else {
            for &(from, to) in &self.layout.edges {
                paint::line(surface, self.style.edge, from, to);
            }
        }
    }

    fn on_frame(&mut self, scheduler: &mut Scheduler, surface: &mut dyn Surface) {
        if let Some((_, EdgeStep::Segment { from, to })) = self.reveal.step(scheduler) {
            paint::line(surface, self.style.edge, from, to);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some(values: &[i64]) -> Vec<Option<i64>> {
        values.iter().copied().map(Some).collect()
    }

    fn child_value(tree: &BinaryTree, child: Child) -> Option<i64> {
        child.node().and_then(|id| tree.get(id)).map(|n| n.value)
    }

    #[test]
    fn level_order_construction() {
        let tree = BinaryTree::from_level_order(&some(&[1, 2, 3, 4, 5]));
        let root = tree.get(NodeId::ROOT).unwrap();
        assert_eq!(root.value, 1);
        assert_eq!(child_value(&tree, root.left), Some(2));
        assert_eq!(child_value(&tree, root.right), Some(3));
        let left = tree.get(root.left.node().unwrap()).unwrap();
        assert_eq!(child_value(&tree, left.left), Some(4));
        assert_eq!(child_value(&tree, left.right), Some(5));
        assert_eq!(tree.max_depth(), 2);
        // 3 was never given children.
        let right = tree.get(root.right.node().unwrap()).unwrap();
        assert_eq!((right.left, right.right), (Child::Unset, Child::Unset));
    }

    #[test]
    fn gaps_become_absent_slots() {
        let tree = BinaryTree::from_level_order(&[Some(1), None, Some(2), Some(3)]);
        let root = tree.get(NodeId::ROOT).unwrap();
        assert_eq!(root.left, Child::Absent);
        assert_eq!(child_value(&tree, root.right), Some(2));
        let two = tree.get(root.right.node().unwrap()).unwrap();
        assert_eq!(child_value(&tree, two.left), Some(3));
        assert_eq!(tree.max_depth(), 2);
    }

    #[test]
    fn values_with_no_open_slot_are_dropped() {
        let tree = BinaryTree::from_level_order(&[Some(1), None, None, Some(2)]);
        assert_eq!(tree.level_order(), [1]);
        assert_eq!(tree.max_depth(), 0);
    }

    #[test]
    fn outer_gaps_are_trimmed_and_empty_input_is_empty() {
        let tree = BinaryTree::from_level_order(&[None, None, Some(3), None, Some(5), None]);
        assert_eq!(tree.level_order(), [3, 5]);
        let root = tree.get(NodeId::ROOT).unwrap();
        assert_eq!(root.left, Child::Absent);
        assert!(BinaryTree::from_level_order(&[None, None]).is_empty());
        assert!(BinaryTree::from_level_order(&[]).root().is_none());
    }

    #[test]
    fn subtree_counts() {
        let mut tree = BinaryTree::from_level_order(&some(&[1, 2, 3, 4, 5, 6]));
        tree.count_subtrees();
        let root = tree.get(NodeId::ROOT).unwrap();
        assert_eq!((root.left_count, root.right_count), (3, 2));
        let leaf = tree.get(NodeId(5)).unwrap();
        assert_eq!((leaf.left_count, leaf.right_count), (0, 0));
    }

    #[test]
    fn min_heap_of_small_input() {
        let (heap, ordered) = BinaryTree::to_heap(&some(&[5, 3, 8, 1]), HeapOrder::Min);
        assert_eq!(heap.level_order(), [1, 3, 5, 8]);
        assert_eq!(ordered, some(&[1, 3, 5, 8]));
    }

    #[test]
    fn max_heap_keeps_gaps_in_place() {
        let flat = [Some(2), None, Some(9), Some(4)];
        let (heap, ordered) = BinaryTree::to_heap(&flat, HeapOrder::Max);
        assert_eq!(ordered, [Some(9), None, Some(4), Some(2)]);
        let root = heap.get(NodeId::ROOT).unwrap();
        assert_eq!(root.left, Child::Absent);
        assert_eq!(heap.level_order(), [9, 4, 2]);
    }

    #[test]
    fn bst_without_gaps_is_in_order() {
        let flat = some(&[50, 20, 70, 10, 90, 30]);
        let (bst, ordered) = BinaryTree::from_level_order(&flat).to_bst(&flat);
        // Shape: 50 -> (20 -> (10, 90), 70 -> (30, _)); six nodes, sorted
        // in-order: 10 20 30 50 70 90.
        assert_eq!(bst.level_order(), [50, 20, 90, 10, 30, 70]);
        assert_eq!(ordered, some(&[10, 20, 30, 50, 70, 90]));
    }

    #[test]
    fn bst_gap_reinsertion_is_pinned() {
        // The reinserted array follows input gap positions, not the tree.
        let flat = [Some(4), Some(2), None, Some(7), Some(1)];
        let (bst, ordered) = BinaryTree::from_level_order(&flat).to_bst(&flat);
        assert_eq!(bst.level_order(), [7, 2, 1, 4]);
        let root = bst.get(NodeId::ROOT).unwrap();
        assert_eq!(root.right, Child::Absent);
        assert_eq!(ordered, [Some(1), Some(2), None, Some(4), Some(7)]);
    }

    #[test]
    fn layout_keeps_sparse_columns() {
        let plane = Plane::new(400.0, 300.0);
        let style = Style::default();
        // 1 -> (_, 2 -> (_, 3)): depth 2.
        let tree = BinaryTree::from_level_order(&[Some(1), None, Some(2), None, Some(3)]);
        let layout = TreeLayout::new(&tree, plane, &style);
        let xs: Vec<f64> = layout.positions.iter().map(|p| p.x).collect();
        assert_eq!(xs, [200.0, 300.0, 350.0]);
        // Deepest cell is 100 wide: radius 25, rows 100 tall starting at 50.
        assert_eq!(layout.radius, 25.0);
        let ys: Vec<f64> = layout.positions.iter().map(|p| p.y).collect();
        assert_eq!(ys, [50.0, 150.0, 250.0]);
        assert_eq!(layout.edges.len(), 2);
    }

    #[test]
    fn shallow_trees_are_pushed_off_the_top_edge() {
        let plane = Plane::new(40.0, 400.0);
        let style = Style::default();
        let tree = BinaryTree::from_level_order(&[Some(1)]);
        let layout = TreeLayout::new(&tree, plane, &style);
        // cell/2 = 20 clears the 11px radius.
        assert_eq!(layout.positions[0].y, 20.0);

        let plane = Plane::new(20.0, 400.0);
        let layout = TreeLayout::new(&tree, plane, &style);
        // cell/2 = 10, radius clamps up to 11, so the node is raised to y = 11.
        assert_eq!(layout.positions[0].y, 11.0);
    }
}
