// Copyright 2025 the Dsviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Graphs laid out on a square grid.
//!
//! Node ids are sorted and dealt row-major into chunks of `side` ids, where
//! `side` is the smallest square side that fits them all. Chunk `r` becomes
//! grid column `r`, so ids run top to bottom, then left to right. Each node is
//! nudged by a [`Jitter`] so edges through a row or column of nodes do not
//! overlap their neighbors.

use alloc::collections::BTreeSet;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use dsviz_animation::{EdgeCursor, EdgeSequence, EdgeStep, Scheduler};
use dsviz_geometry::arrow::angled_arrowhead;
use dsviz_geometry::kernel::{Direction, midpoint, relative_direction, relative_slope};
use dsviz_geometry::{Plane, RelativePoint};
use dsviz_surface::Surface;
use hashbrown::HashMap;
use kurbo::Point;
use smallvec::SmallVec;

use crate::style::{EDGE_LABEL_COLOR, LABEL_FONT};
use crate::util::{isqrt_ceil, shortened};
use crate::{Jitter, Options, Shape, Style, paint};

/// Pieces each graph edge is revealed in.
pub const GRAPH_EDGE_STEPS: usize = 20;

type WeightBucket = SmallVec<[i64; 2]>;

/// Nodes, edges, and weight buckets of a parsed graph.
#[derive(Clone, Debug, Default)]
pub struct GraphModel {
    nodes: Vec<i64>,
    edges: Vec<(i64, i64)>,
    weights: HashMap<(i64, i64), WeightBucket>,
    weighted: bool,
}

/// The same key for `(a, b)` and `(b, a)`.
fn pair_key(a: i64, b: i64) -> (i64, i64) {
    if a <= b { (a, b) } else { (b, a) }
}

impl GraphModel {
    /// Parse edge rows. The last two entries of a row are its endpoints; the
    /// first is its weight when `weighted`. Rows with fewer than two entries
    /// are skipped.
    pub fn from_edge_list(rows: &[Vec<i64>], weighted: bool) -> Self {
        let mut model = Self {
            weighted,
            ..Self::default()
        };
        let mut nodes = BTreeSet::new();
        for row in rows {
            let [.., a, b] = row.as_slice() else {
                tracing::debug!(?row, "skipping edge row without two endpoints");
                continue;
            };
            nodes.insert(*a);
            nodes.insert(*b);
            model.edges.push((*a, *b));
            if weighted {
                model.add_weight(*a, *b, row[0]);
            }
        }
        model.nodes = nodes.into_iter().collect();
        model
    }

    /// Parse a square adjacency matrix. Nodes are numbered from 1 and every
    /// non-zero entry above the diagonal is an edge weighted by that entry.
    pub fn from_adjacency_matrix(rows: &[Vec<i64>], weighted: bool) -> Self {
        let mut model = Self {
            weighted,
            ..Self::default()
        };
        model.nodes = (1..).take(rows.len()).collect();
        for ((a, row), skip) in (1_i64..).zip(rows).zip(1..) {
            for (b, &w) in (1_i64..).zip(row).skip(skip) {
                if w != 0 {
                    model.edges.push((a, b));
                    if weighted {
                        model.add_weight(a, b, w);
                    }
                }
            }
        }
        model
    }

    fn add_weight(&mut self, a: i64, b: i64, weight: i64) {
        self.weights.entry(pair_key(a, b)).or_default().push(weight);
    }

    /// Sorted, de-duplicated node ids.
    pub fn nodes(&self) -> &[i64] {
        &self.nodes
    }

    /// Edges in input order, parallel edges included.
    pub fn edges(&self) -> &[(i64, i64)] {
        &self.edges
    }

    /// Whether edges carry weights.
    pub fn is_weighted(&self) -> bool {
        self.weighted
    }

    /// Side of the square grid the nodes are placed on.
    pub fn side(&self) -> usize {
        isqrt_ceil(self.nodes.len())
    }

    /// Whether the pair `a`–`b` still has weights waiting to be labeled.
    pub fn has_pending_weights(&self, a: i64, b: i64) -> bool {
        self.weights
            .get(&pair_key(a, b))
            .is_some_and(|bucket| !bucket.is_empty())
    }

    /// The label for the pair `a`–`b`: its weights ascending, joined by `", "`.
    ///
    /// The bucket is emptied, so each pair is labeled at most once.
    pub fn take_label(&mut self, a: i64, b: i64) -> Option<String> {
        let bucket = self.weights.get_mut(&pair_key(a, b))?;
        if bucket.is_empty() {
            return None;
        }
        bucket.sort_unstable();
        let label = bucket
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        bucket.clear();
        Some(label)
    }
}

/// Offset from an edge's midpoint to its label.
fn label_offset(slope: f64, label: &str) -> (f64, f64) {
    let len = label.chars().count();
    match relative_direction(slope) {
        Some(Direction::Vertical | Direction::Diagonal) => {
            let shift = if len > 1 { len as f64 + 10.0 } else { 6.0 };
            (-shift, 0.0)
        }
        Some(Direction::Horizontal) => (0.0, -3.0),
        None => (0.0, 0.0),
    }
}

/// A graph visualization.
#[derive(Clone, Debug)]
pub struct Graph {
    plane: Plane,
    style: Style,
    options: Options,
    model: GraphModel,
    positions: HashMap<i64, RelativePoint>,
    radius: f64,
    reveal: EdgeSequence,
}

impl Graph {
    /// Place the nodes of `model` on `plane`.
    pub fn new(
        model: GraphModel,
        options: Options,
        plane: Plane,
        style: Style,
        jitter: &mut dyn Jitter,
    ) -> Self {
        let side = model.side();
        let cell = if side == 0 {
            plane.width
        } else {
            plane.width / side as f64
        };
        let radius = style.capped_radius(cell);

        let mut positions = HashMap::with_capacity(model.nodes.len());
        if side > 0 {
            for (r, chunk) in model.nodes.chunks(side).enumerate() {
                for (c, &id) in chunk.iter().enumerate() {
                    let nudge = jitter.offset();
                    let x = cell * r as f64 + cell / 2.0 + nudge.x;
                    let mut y = cell * c as f64 + cell / 2.0 + nudge.y;
                    if y - radius <= 0.0 {
                        y = radius;
                    }
                    positions.insert(id, RelativePoint::new(x, y, plane));
                }
            }
        }
        tracing::debug!(
            nodes = model.nodes.len(),
            edges = model.edges.len(),
            side,
            radius,
            "graph laid out"
        );

        Self {
            plane,
            style,
            options,
            model,
            positions,
            radius,
            reveal: EdgeSequence::default(),
        }
    }

    /// The parsed graph.
    pub fn model(&self) -> &GraphModel {
        &self.model
    }

    /// Center of node `id`.
    pub fn position(&self, id: i64) -> Option<RelativePoint> {
        self.positions.get(&id).copied()
    }

    /// Node radius.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    fn draw_arrowhead(&self, surface: &mut dyn Surface, tip: RelativePoint, tail: RelativePoint) {
        if let Some(head) = angled_arrowhead(tip, tail, self.style.arrowhead_size) {
            paint::arrowhead(surface, self.style.edge, &head);
        }
    }

    fn draw_label(&mut self, surface: &mut dyn Surface, a: i64, b: i64, p1: RelativePoint, p2: RelativePoint) {
        let Some(label) = self.model.take_label(a, b) else {
            return;
        };
        let mid = midpoint(p1, p2);
        let (dx, dy) = label_offset(relative_slope(p1, p2), &label);
        paint::text(
            surface,
            &label,
            Point::new(mid.x + dx, mid.y + dy),
            EDGE_LABEL_COLOR,
            LABEL_FONT,
        );
    }
}

impl Shape for Graph {
    fn plot(&mut self, scheduler: &mut Scheduler, surface: &mut dyn Surface) {
        paint::background(surface, self.plane, &self.style);
        for &id in &self.model.nodes {
            if let Some(&center) = self.positions.get(&id) {
                paint::node(surface, &self.style, center, self.radius, &id.to_string());
            }
        }

        let animated = scheduler.is_enabled();
        let directed = self.options.contains(Options::DIRECTED);
        let mut cursors = Vec::new();
        for i in 0..self.model.edges.len() {
            let (a, b) = self.model.edges[i];
            let (Some(&p1), Some(&p2)) = (self.positions.get(&a), self.positions.get(&b)) else {
                continue;
            };
            if self.model.weighted && !self.model.has_pending_weights(a, b) {
                continue;
            }
            // Self loops have no direction to draw along.
            if p1.point() != p2.point() {
                let (from, to) = shortened(p1, p2, self.radius);
                if animated {
                    cursors.push(EdgeCursor::between(from, to, GRAPH_EDGE_STEPS));
                } else {
                    paint::line(surface, self.style.edge, from, to);
                    if directed {
                        self.draw_arrowhead(surface, to, from);
                    }
                }
            }
            if self.model.weighted {
                self.draw_label(surface, a, b, p1, p2);
            }
        }

        if animated {
            self.reveal = EdgeSequence::new(cursors);
            self.on_frame(scheduler, surface);
        }
    }

    fn on_frame(&mut self, scheduler: &mut Scheduler, surface: &mut dyn Surface) {
        match self.reveal.step(scheduler) {
            Some((_, EdgeStep::Segment { from, to })) => {
                paint::line(surface, self.style.edge, from, to);
            }
            Some((_, EdgeStep::Done { first, last })) => {
                if self.options.contains(Options::DIRECTED) {
                    self.draw_arrowhead(surface, last, first);
                }
            }
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NoJitter;
    use alloc::vec;

    #[test]
    fn edge_list_nodes_and_grid() {
        let model = GraphModel::from_edge_list(&[vec![1, 2], vec![2, 3], vec![4, 2]], false);
        assert_eq!(model.nodes(), [1, 2, 3, 4]);
        assert_eq!(model.side(), 2);
        assert_eq!(model.edges().len(), 3);
        assert!(!model.is_weighted());
    }

    #[test]
    fn weighted_rows_lead_with_the_weight() {
        let mut model =
            GraphModel::from_edge_list(&[vec![7, 1, 2], vec![3, 2, 1], vec![5, 2, 3]], true);
        assert_eq!(model.nodes(), [1, 2, 3]);
        assert_eq!(model.edges(), [(1, 2), (2, 1), (2, 3)]);
        assert_eq!(model.take_label(2, 1).as_deref(), Some("3, 7"));
        // Labeled once only.
        assert_eq!(model.take_label(1, 2), None);
        assert!(!model.has_pending_weights(1, 2));
        assert!(model.has_pending_weights(3, 2));
    }

    #[test]
    fn short_rows_are_skipped() {
        let model = GraphModel::from_edge_list(&[vec![1], vec![], vec![5, 6]], false);
        assert_eq!(model.nodes(), [5, 6]);
        assert_eq!(model.edges(), [(5, 6)]);
    }

    #[test]
    fn adjacency_matrix_reads_the_upper_triangle() {
        let rows = vec![vec![0, 4, 0], vec![4, 0, 9], vec![0, 9, 0]];
        let mut model = GraphModel::from_adjacency_matrix(&rows, true);
        assert_eq!(model.nodes(), [1, 2, 3]);
        assert_eq!(model.edges(), [(1, 2), (2, 3)]);
        assert_eq!(model.take_label(1, 2).as_deref(), Some("4"));
        assert_eq!(model.take_label(3, 2).as_deref(), Some("9"));
    }

    #[test]
    fn grid_positions_without_jitter() {
        let model = GraphModel::from_edge_list(&[vec![1, 2], vec![2, 3], vec![4, 2]], false);
        let plane = Plane::new(400.0, 400.0);
        let graph = Graph::new(model, Options::empty(), plane, Style::default(), &mut NoJitter);
        // Cells are 200 wide; chunk [1, 2] is the first column.
        let at = |id| graph.position(id).map(|p| (p.x, p.y));
        assert_eq!(at(1), Some((100.0, 100.0)));
        assert_eq!(at(2), Some((100.0, 300.0)));
        assert_eq!(at(3), Some((300.0, 100.0)));
        assert_eq!(at(4), Some((300.0, 300.0)));
        assert_eq!(graph.radius(), 50.0);
    }

    #[test]
    fn label_offsets_follow_the_edge_direction() {
        assert_eq!(label_offset(0.0, "7"), (-6.0, 0.0));
        assert_eq!(label_offset(1.0, "3, 7"), (-14.0, 0.0));
        assert_eq!(label_offset(f64::INFINITY, "7"), (0.0, -3.0));
        assert_eq!(label_offset(2.0, "7"), (0.0, 0.0));
    }
}
