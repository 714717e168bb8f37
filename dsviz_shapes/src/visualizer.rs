// Copyright 2025 the Dsviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The entry point a UI layer drives.

use alloc::boxed::Box;

use dsviz_animation::Scheduler;
use dsviz_geometry::Plane;
use dsviz_surface::{Color, Surface};

use crate::graph::{Graph, GraphModel};
use crate::linked_list::LinkedList;
use crate::queue::Queue;
use crate::stack::Stack;
use crate::tree::Tree;
use crate::{Dataset, Jitter, Options, RandomJitter, Shape, Style};

/// The shape on screen.
#[derive(Clone, Debug)]
pub enum Current {
    /// A graph from an edge list or adjacency matrix.
    Graph(Graph),
    /// A tree.
    Tree(Tree),
    /// A linked list.
    LinkedList(LinkedList),
    /// A stack.
    Stack(Stack),
    /// A queue.
    Queue(Queue),
}

impl Current {
    fn shape_mut(&mut self) -> &mut dyn Shape {
        match self {
            Self::Graph(shape) => shape,
            Self::Tree(shape) => shape,
            Self::LinkedList(shape) => shape,
            Self::Stack(shape) => shape,
            Self::Queue(shape) => shape,
        }
    }
}

/// Owns the scheduler and the shape on screen, and routes frames and
/// operations to it.
///
/// Starting a new visualization cancels whatever animation is in flight.
#[derive(Debug)]
pub struct Visualizer {
    scheduler: Scheduler,
    plane: Plane,
    style: Style,
    jitter: Box<dyn Jitter>,
    animated: bool,
    last: Option<(Dataset, Options)>,
    current: Option<Current>,
}

impl Visualizer {
    /// A visualizer for a canvas of `plane`'s size, animating by default.
    pub fn new(plane: Plane) -> Self {
        Self {
            scheduler: Scheduler::new(),
            plane,
            style: Style::default(),
            jitter: Box::new(RandomJitter::default()),
            animated: true,
            last: None,
            current: None,
        }
    }

    /// Replace the style used by later visualizations.
    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Replace the source of graph node offsets.
    #[must_use]
    pub fn with_jitter(mut self, jitter: impl Jitter + 'static) -> Self {
        self.jitter = Box::new(jitter);
        self
    }

    /// The frame scheduler.
    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// The active style.
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// The shape on screen.
    pub fn current(&self) -> Option<&Current> {
        self.current.as_ref()
    }

    /// Whether a frame request is outstanding.
    pub fn is_animating(&self) -> bool {
        self.scheduler.is_active()
    }

    /// Whether new drawings animate.
    pub fn is_animated(&self) -> bool {
        self.animated
    }

    /// Choose between animated and instant drawing for later operations.
    pub fn set_animated(&mut self, animated: bool) {
        self.animated = animated;
        self.scheduler.set_enabled(animated);
    }

    /// Draw `dataset` from scratch, replacing the current shape.
    pub fn visualize(&mut self, dataset: &Dataset, options: Options, surface: &mut dyn Surface) {
        self.scheduler.cancel();
        self.scheduler.set_enabled(self.animated);
        tracing::debug!(kind = dataset.kind(), ?options, animated = self.animated, "visualizing");

        let mut current = self.build(dataset, options);
        current.shape_mut().plot(&mut self.scheduler, surface);
        self.current = Some(current);
        self.last = Some((dataset.clone(), options));
    }

    fn build(&mut self, dataset: &Dataset, options: Options) -> Current {
        let plane = self.plane;
        let style = self.style.clone();
        let weighted = options.contains(Options::WEIGHTED);
        match dataset {
            Dataset::EdgeList(rows) => Current::Graph(Graph::new(
                GraphModel::from_edge_list(rows, weighted),
                options,
                plane,
                style,
                self.jitter.as_mut(),
            )),
            Dataset::AdjacencyMatrix(rows) => Current::Graph(Graph::new(
                GraphModel::from_adjacency_matrix(rows, weighted),
                options,
                plane,
                style,
                self.jitter.as_mut(),
            )),
            Dataset::Tree(values) => Current::Tree(Tree::parse(values, options, plane, style)),
            Dataset::LinkedList(values) => {
                Current::LinkedList(LinkedList::parse(values, options, plane, style))
            }
            Dataset::Stack(values) => Current::Stack(Stack::parse(values, plane, style)),
            Dataset::Queue(values) => Current::Queue(Queue::parse(values, plane, style)),
        }
    }

    /// Deliver one due frame to the current shape.
    ///
    /// Returns `false` when no frame was due.
    pub fn on_frame(&mut self, surface: &mut dyn Surface) -> bool {
        let Some(current) = self.current.as_mut() else {
            return false;
        };
        if self.scheduler.next_frame().is_none() {
            return false;
        }
        current.shape_mut().on_frame(&mut self.scheduler, surface);
        true
    }

    /// Deliver frames until the animation settles; returns how many ran.
    pub fn run_until_idle(&mut self, surface: &mut dyn Surface) -> usize {
        let Some(current) = self.current.as_mut() else {
            return 0;
        };
        let shape = current.shape_mut();
        self.scheduler
            .drain(|scheduler, _| shape.on_frame(scheduler, &mut *surface))
    }

    /// Push onto the stack on screen.
    ///
    /// Returns `false` when no stack is shown or it refused the push.
    pub fn push(&mut self, value: Option<i64>, surface: &mut dyn Surface) -> bool {
        match self.current.as_mut() {
            Some(Current::Stack(stack)) => stack.push(value, &mut self.scheduler, surface),
            _ => {
                tracing::debug!("push without a stack on screen");
                false
            }
        }
    }

    /// Pop from the stack on screen.
    pub fn pop(&mut self, surface: &mut dyn Surface) -> bool {
        match self.current.as_mut() {
            Some(Current::Stack(stack)) => stack.pop(&mut self.scheduler, surface),
            _ => {
                tracing::debug!("pop without a stack on screen");
                false
            }
        }
    }

    /// Enqueue onto the queue on screen.
    pub fn enqueue(&mut self, value: Option<i64>, surface: &mut dyn Surface) -> bool {
        match self.current.as_mut() {
            Some(Current::Queue(queue)) => queue.enqueue(value, &mut self.scheduler, surface),
            _ => {
                tracing::debug!("enqueue without a queue on screen");
                false
            }
        }
    }

    /// Dequeue from the queue on screen.
    pub fn dequeue(&mut self, surface: &mut dyn Surface) -> bool {
        match self.current.as_mut() {
            Some(Current::Queue(queue)) => queue.dequeue(&mut self.scheduler, surface),
            _ => {
                tracing::debug!("dequeue without a queue on screen");
                false
            }
        }
    }

    /// Recolor nodes and redraw the last dataset without animation.
    ///
    /// Node labels switch to whichever of light or dark text reads better on
    /// `color`; that text color is returned.
    pub fn restyle_nodes(&mut self, color: Color, surface: &mut dyn Surface) -> Color {
        let text = color.contrasting_text();
        self.style.node = color;
        self.style.node_font_color = text;
        self.redraw_instantly(surface);
        text
    }

    /// Recolor edges and redraw the last dataset without animation.
    ///
    /// Returns the text color that reads best on `color`, for the picker's own
    /// label.
    pub fn restyle_edges(&mut self, color: Color, surface: &mut dyn Surface) -> Color {
        self.style.edge = color;
        self.redraw_instantly(surface);
        color.contrasting_text()
    }

    fn redraw_instantly(&mut self, surface: &mut dyn Surface) {
        let Some((dataset, options)) = self.last.take() else {
            return;
        };
        let animated = self.animated;
        self.animated = false;
        self.visualize(&dataset, options, surface);
        self.set_animated(animated);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NoJitter;
    use alloc::vec;
    use dsviz_surface::Recording;

    fn visualizer() -> Visualizer {
        Visualizer::new(Plane::new(400.0, 400.0)).with_jitter(NoJitter)
    }

    #[test]
    fn operations_need_the_matching_shape() {
        let mut vis = visualizer();
        let mut rec = Recording::new();
        assert!(!vis.push(Some(1), &mut rec));
        vis.visualize(&Dataset::Queue(vec![Some(1)]), Options::empty(), &mut rec);
        assert!(!vis.push(Some(1), &mut rec));
        assert!(!vis.pop(&mut rec));
        vis.run_until_idle(&mut rec);
        assert!(vis.enqueue(Some(2), &mut rec));
    }

    #[test]
    fn revisualizing_cancels_the_running_animation() {
        let mut vis = visualizer();
        let mut rec = Recording::new();
        vis.visualize(&Dataset::Tree(vec![Some(1), Some(2), Some(3)]), Options::empty(), &mut rec);
        let first = vis.scheduler().active();
        assert!(first.is_some());

        vis.visualize(&Dataset::Stack(vec![]), Options::empty(), &mut rec);
        let first = first.unwrap();
        assert!(vis.scheduler().is_cancelled(first));
        assert!(!vis.is_animating());
        assert!(matches!(vis.current(), Some(Current::Stack(_))));
    }

    #[test]
    fn restyling_redraws_instantly_and_keeps_the_preference() {
        let mut vis = visualizer();
        let mut rec = Recording::new();
        vis.visualize(&Dataset::LinkedList(vec![Some(1), Some(2)]), Options::empty(), &mut rec);
        assert!(vis.is_animating());

        rec.clear();
        let text = vis.restyle_nodes(Color::rgb8(0x20, 0x20, 0x60), &mut rec);
        assert_eq!(text, Color::rgb8(0xdd, 0xdd, 0xdd));
        assert_eq!(vis.style().node_font_color, text);
        assert!(!vis.is_animating(), "the redraw is instant");
        assert!(vis.is_animated());
        assert!(vis.scheduler().is_enabled());
        // The link and its arrowhead wings are already on screen.
        assert_eq!(rec.stroked_lines().len(), 3);

        let text = vis.restyle_edges(Color::rgb8(0xf0, 0xf0, 0xf0), &mut rec);
        assert_eq!(text, Color::rgb8(0x11, 0x11, 0x11));
        assert_eq!(vis.style().edge, Color::rgb8(0xf0, 0xf0, 0xf0));
    }

    #[test]
    fn frames_are_delivered_one_at_a_time() {
        let mut vis = visualizer();
        let mut rec = Recording::new();
        assert!(!vis.on_frame(&mut rec));
        vis.visualize(&Dataset::Tree(vec![Some(1), Some(2)]), Options::empty(), &mut rec);
        let mut frames = 0;
        while vis.on_frame(&mut rec) {
            frames += 1;
        }
        // The first of the 20 pieces is drawn during plotting; the last frame
        // delivers the edge's terminal step.
        assert_eq!(frames, 20);
        assert!(!vis.is_animating());
    }
}
