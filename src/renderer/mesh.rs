//! Canvas that tessellates draw calls into a triangle list for the GPU

use glam::Vec2;

use super::canvas::Canvas;
use super::shapes;
use super::vertex::Vertex;
use crate::sim::{Color, Rect, Viewport};

/// Collects one frame worth of coloured triangles
#[derive(Debug, Clone, Default)]
pub struct MeshCanvas {
    vertices: Vec<Vertex>,
    viewport: Option<Viewport>,
}

impl MeshCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Triangles emitted since the last `begin_frame`, in paint order
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Hand the finished frame over (leaves the canvas empty)
    pub fn into_vertices(self) -> Vec<Vertex> {
        self.vertices
    }

    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }
}

impl Canvas for MeshCanvas {
    fn begin_frame(&mut self, viewport: Viewport) {
        self.viewport = Some(viewport);
        self.vertices.clear();
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.vertices
            .extend(shapes::rect(&rect, color.to_linear_rgba()));
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, line_width: f32) {
        let corners = shapes::rect_corners(&rect);
        self.vertices.extend(shapes::polygon_outline(
            &corners,
            line_width,
            color.to_linear_rgba(),
        ));
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Color) {
        self.vertices
            .extend(shapes::convex_polygon(points, color.to_linear_rgba()));
    }

    fn stroke_polygon(&mut self, points: &[Vec2], color: Color, line_width: f32) {
        self.vertices.extend(shapes::polygon_outline(
            points,
            line_width,
            color.to_linear_rgba(),
        ));
    }

    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, color: Color) {
        self.vertices.extend(shapes::ellipse(
            center,
            radii,
            color.to_linear_rgba(),
            shapes::ELLIPSE_SEGMENTS,
        ));
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Color, line_width: f32) {
        self.vertices
            .extend(shapes::line(from, to, line_width, color.to_linear_rgba()));
    }

    fn end_frame(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_frame_resets_vertices() {
        let mut mesh = MeshCanvas::new();
        assert_eq!(mesh.viewport(), None);

        mesh.begin_frame(Viewport::new(800.0, 600.0));
        mesh.fill_rect(Rect::new(10.0, 20.0, 30.0, 40.0), Color::rgb(255, 0, 0));
        assert_eq!(mesh.vertices().len(), 6);
        assert_eq!(mesh.viewport(), Some(Viewport::new(800.0, 600.0)));

        mesh.begin_frame(Viewport::new(640.0, 480.0));
        assert!(mesh.vertices().is_empty());
        assert_eq!(mesh.viewport(), Some(Viewport::new(640.0, 480.0)));
    }

    #[test]
    fn test_vertices_keep_paint_order_and_color() {
        let mut mesh = MeshCanvas::new();
        let red = Color::rgb(255, 0, 0);
        let white = Color::rgb(255, 255, 255);
        mesh.begin_frame(Viewport::new(100.0, 100.0));
        mesh.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), red);
        mesh.fill_ellipse(Vec2::new(50.0, 50.0), Vec2::new(5.0, 8.0), white);
        // Zero-length line draws nothing
        mesh.stroke_line(Vec2::ZERO, Vec2::ZERO, white, 4.0);

        let vertices = mesh.vertices();
        assert_eq!(vertices.len(), 6 + 3 * shapes::ELLIPSE_SEGMENTS as usize);
        assert_eq!(vertices[0].color, red.to_linear_rgba());
        assert_eq!(vertices[6].color, white.to_linear_rgba());
        assert_eq!(vertices[6].position, [50.0, 50.0]);

        let owned = mesh.clone().into_vertices();
        assert_eq!(owned.as_slice(), vertices);
    }
}
