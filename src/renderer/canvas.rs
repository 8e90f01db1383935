//! Drawing capability the scene painter targets
//!
//! Coordinates are screen pixels, top-left origin, y down.

use glam::Vec2;

use crate::sim::{Color, Rect, Viewport};

/// Something the road can be painted onto
pub trait Canvas {
    /// Start a frame at the given surface size (resizes the target if needed)
    fn begin_frame(&mut self, viewport: Viewport);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn stroke_rect(&mut self, rect: Rect, color: Color, line_width: f32);
    /// Fill a closed convex polygon
    fn fill_polygon(&mut self, points: &[Vec2], color: Color);
    /// Outline a closed polygon
    fn stroke_polygon(&mut self, points: &[Vec2], color: Color, line_width: f32);
    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, color: Color);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Color, line_width: f32);
    /// Finish the frame (present, flush)
    fn end_frame(&mut self);
}

/// One recorded drawing call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect {
        rect: Rect,
        color: Color,
    },
    StrokeRect {
        rect: Rect,
        color: Color,
        line_width: f32,
    },
    FillPolygon {
        points: Vec<Vec2>,
        color: Color,
    },
    StrokePolygon {
        points: Vec<Vec2>,
        color: Color,
        line_width: f32,
    },
    FillEllipse {
        center: Vec2,
        radii: Vec2,
        color: Color,
    },
    StrokeLine {
        from: Vec2,
        to: Vec2,
        color: Color,
        line_width: f32,
    },
}

/// Canvas that keeps the last frame's commands (headless runs, tests)
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    pub viewport: Option<Viewport>,
    pub commands: Vec<DrawCommand>,
    /// Completed frames
    pub frames: u64,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Canvas for RecordingCanvas {
    fn begin_frame(&mut self, viewport: Viewport) {
        self.viewport = Some(viewport);
        self.commands.clear();
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, line_width: f32) {
        self.commands.push(DrawCommand::StrokeRect {
            rect,
            color,
            line_width,
        });
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Color) {
        self.commands.push(DrawCommand::FillPolygon {
            points: points.to_vec(),
            color,
        });
    }

    fn stroke_polygon(&mut self, points: &[Vec2], color: Color, line_width: f32) {
        self.commands.push(DrawCommand::StrokePolygon {
            points: points.to_vec(),
            color,
            line_width,
        });
    }

    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, color: Color) {
        self.commands.push(DrawCommand::FillEllipse {
            center,
            radii,
            color,
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Color, line_width: f32) {
        self.commands.push(DrawCommand::StrokeLine {
            from,
            to,
            color,
            line_width,
        });
    }

    fn end_frame(&mut self) {
        self.frames += 1;
    }
}
