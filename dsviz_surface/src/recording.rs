// Copyright 2025 the Dsviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A surface that records draw calls instead of rasterizing them.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use kurbo::{Line, Point, Rect};

use crate::{Color, Surface, TextAlign};

/// One call made against a [`Surface`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// [`Surface::fill_rect`].
    FillRect(Rect),
    /// [`Surface::begin_path`].
    BeginPath,
    /// [`Surface::close_path`].
    ClosePath,
    /// [`Surface::arc`].
    Arc {
        /// Center of the arc.
        center: Point,
        /// Radius of the arc.
        radius: f64,
        /// Start angle in radians.
        start: f64,
        /// End angle in radians.
        end: f64,
    },
    /// [`Surface::move_to`].
    MoveTo(Point),
    /// [`Surface::line_to`].
    LineTo(Point),
    /// [`Surface::stroke`].
    Stroke,
    /// [`Surface::fill`].
    Fill,
    /// [`Surface::fill_text`].
    FillText {
        /// The text drawn.
        text: String,
        /// Anchor position.
        at: Point,
    },
    /// [`Surface::set_fill_style`].
    FillStyle(Color),
    /// [`Surface::set_stroke_style`].
    StrokeStyle(Color),
    /// [`Surface::set_font`].
    Font(String),
    /// [`Surface::set_text_align`].
    TextAlign(TextAlign),
}

/// Records every call in order.
///
/// The query helpers replay the recorded style state, so tests can ask which
/// color a rectangle or line was drawn with.
#[derive(Clone, Debug, Default)]
pub struct Recording {
    commands: Vec<DrawCommand>,
}

/// A piece of text together with the style it was drawn in.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedText {
    /// The text drawn.
    pub text: String,
    /// Anchor position.
    pub at: Point,
    /// Fill color in effect.
    pub color: Option<Color>,
    /// Font in effect.
    pub font: Option<String>,
}

impl Recording {
    /// An empty recording.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every recorded call, oldest first.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Forget everything recorded so far.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Filled rectangles with the fill color in effect when they were drawn.
    pub fn filled_rects(&self) -> Vec<(Rect, Option<Color>)> {
        let mut fill = None;
        let mut out = Vec::new();
        for command in &self.commands {
            match command {
                DrawCommand::FillStyle(c) => fill = Some(*c),
                DrawCommand::FillRect(r) => out.push((*r, fill)),
                _ => {}
            }
        }
        out
    }

    /// Text draws with the fill color and font in effect.
    pub fn texts(&self) -> Vec<RecordedText> {
        let mut fill = None;
        let mut font: Option<&str> = None;
        let mut out = Vec::new();
        for command in &self.commands {
            match command {
                DrawCommand::FillStyle(c) => fill = Some(*c),
                DrawCommand::Font(f) => font = Some(f),
                DrawCommand::FillText { text, at } => out.push(RecordedText {
                    text: text.clone(),
                    at: *at,
                    color: fill,
                    font: font.map(ToString::to_string),
                }),
                _ => {}
            }
        }
        out
    }

    /// Circles drawn with a full-turn arc, as `(center, radius)`.
    pub fn circles(&self) -> Vec<(Point, f64)> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Arc { center, radius, .. } => Some((*center, *radius)),
                _ => None,
            })
            .collect()
    }

    /// Straight lines that were stroked, with the stroke color in effect.
    ///
    /// Each `line_to` contributes one line from the current pen position.
    /// Lines belong to the path they were added to and are reported once that
    /// path is stroked.
    pub fn stroked_lines(&self) -> Vec<(Line, Option<Color>)> {
        let mut stroke = None;
        let mut pen: Option<Point> = None;
        let mut path: Vec<Line> = Vec::new();
        let mut out = Vec::new();
        for command in &self.commands {
            match command {
                DrawCommand::StrokeStyle(c) => stroke = Some(*c),
                DrawCommand::BeginPath => path.clear(),
                DrawCommand::MoveTo(p) => pen = Some(*p),
                DrawCommand::LineTo(p) => {
                    if let Some(start) = pen {
                        path.push(Line::new(start, *p));
                    }
                    pen = Some(*p);
                }
                DrawCommand::Stroke => {
                    out.extend(path.iter().map(|line| (*line, stroke)));
                    path.clear();
                }
                _ => {}
            }
        }
        out
    }

    /// Number of recorded calls matching `predicate`.
    pub fn count(&self, predicate: impl Fn(&DrawCommand) -> bool) -> usize {
        self.commands.iter().filter(|c| predicate(c)).count()
    }
}

impl Surface for Recording {
    fn fill_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::FillRect(rect));
    }

    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn close_path(&mut self) {
        self.commands.push(DrawCommand::ClosePath);
    }

    fn arc(&mut self, center: Point, radius: f64, start: f64, end: f64) {
        self.commands.push(DrawCommand::Arc {
            center,
            radius,
            start,
            end,
        });
    }

    fn move_to(&mut self, point: Point) {
        self.commands.push(DrawCommand::MoveTo(point));
    }

    fn line_to(&mut self, point: Point) {
        self.commands.push(DrawCommand::LineTo(point));
    }

    fn stroke(&mut self) {
        self.commands.push(DrawCommand::Stroke);
    }

    fn fill(&mut self) {
        self.commands.push(DrawCommand::Fill);
    }

    fn fill_text(&mut self, text: &str, at: Point) {
        self.commands.push(DrawCommand::FillText {
            text: text.to_string(),
            at,
        });
    }

    fn set_fill_style(&mut self, color: Color) {
        self.commands.push(DrawCommand::FillStyle(color));
    }

    fn set_stroke_style(&mut self, color: Color) {
        self.commands.push(DrawCommand::StrokeStyle(color));
    }

    fn set_font(&mut self, font: &str) {
        self.commands.push(DrawCommand::Font(font.to_string()));
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.commands.push(DrawCommand::TextAlign(align));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::rgb8(255, 0, 0);
    const BLUE: Color = Color::rgb8(0, 0, 255);

    #[test]
    fn style_state_is_replayed() {
        let mut rec = Recording::new();
        rec.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0));
        rec.set_fill_style(RED);
        rec.fill_rect(Rect::new(1.0, 1.0, 2.0, 2.0));
        rec.set_font("10px monospace");
        rec.fill_text("7", Point::new(3.0, 4.0));

        let rects = rec.filled_rects();
        assert_eq!(rects[0].1, None);
        assert_eq!(rects[1].1, Some(RED));

        let texts = rec.texts();
        assert_eq!(texts.len(), 1);
        assert_eq!(texts[0].text, "7");
        assert_eq!(texts[0].color, Some(RED));
        assert_eq!(texts[0].font.as_deref(), Some("10px monospace"));
    }

    #[test]
    fn only_stroked_paths_count_as_lines() {
        let mut rec = Recording::new();
        rec.begin_path();
        rec.set_stroke_style(BLUE);
        rec.move_to(Point::new(0.0, 0.0));
        rec.line_to(Point::new(5.0, 0.0));
        rec.line_to(Point::new(5.0, 5.0));
        rec.stroke();
        // Never stroked.
        rec.begin_path();
        rec.move_to(Point::new(9.0, 9.0));
        rec.line_to(Point::new(8.0, 8.0));

        let lines = rec.stroked_lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].0, Line::new((5.0, 0.0), (5.0, 5.0)));
        assert_eq!(lines[1].1, Some(BLUE));
        assert_eq!(rec.count(|c| matches!(c, DrawCommand::Stroke)), 1);
    }
}
