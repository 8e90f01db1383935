//! Shape generation for 2D primitives
//!
//! Everything becomes a triangle list in screen pixels.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;
use crate::sim::Rect;

/// Segments used for ellipses (wheels are small)
pub const ELLIPSE_SEGMENTS: u32 = 24;

/// Generate vertices for a filled rectangle
pub fn rect(rect: &Rect, color: [f32; 4]) -> Vec<Vertex> {
    let (x0, y0, x1, y1) = (rect.x, rect.y, rect.right(), rect.bottom());
    vec![
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y1, color),
    ]
}

/// Generate vertices for a filled convex polygon (triangle fan from the first point)
pub fn convex_polygon(points: &[Vec2], color: [f32; 4]) -> Vec<Vertex> {
    if points.len() < 3 {
        return Vec::new();
    }

    let mut vertices = Vec::with_capacity((points.len() - 2) * 3);
    let origin = points[0];
    for pair in points[1..].windows(2) {
        vertices.push(Vertex::new(origin.x, origin.y, color));
        vertices.push(Vertex::new(pair[0].x, pair[0].y, color));
        vertices.push(Vertex::new(pair[1].x, pair[1].y, color));
    }
    vertices
}

/// Generate vertices for a filled axis-aligned ellipse
pub fn ellipse(center: Vec2, radii: Vec2, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radii.x * theta1.cos(),
            center.y + radii.y * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radii.x * theta2.cos(),
            center.y + radii.y * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a thick line segment
pub fn line(from: Vec2, to: Vec2, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let dir = (to - from).normalize_or_zero();
    if dir == Vec2::ZERO {
        return Vec::new();
    }
    // Perpendicular for width
    let perp = Vec2::new(-dir.y, dir.x) * (width / 2.0);

    let a1 = from + perp;
    let a2 = from - perp;
    let b1 = to + perp;
    let b2 = to - perp;

    vec![
        Vertex::new(a1.x, a1.y, color),
        Vertex::new(a2.x, a2.y, color),
        Vertex::new(b1.x, b1.y, color),
        Vertex::new(b1.x, b1.y, color),
        Vertex::new(a2.x, a2.y, color),
        Vertex::new(b2.x, b2.y, color),
    ]
}

/// Generate vertices for a closed polygon outline
pub fn polygon_outline(points: &[Vec2], width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(points.len() * 6);
    for (i, &start) in points.iter().enumerate() {
        let end = points[(i + 1) % points.len()];
        vertices.extend(line(start, end, width, color));
    }
    vertices
}

/// Corner points of a rectangle, clockwise from top-left
pub fn rect_corners(rect: &Rect) -> [Vec2; 4] {
    [
        Vec2::new(rect.x, rect.y),
        Vec2::new(rect.right(), rect.y),
        Vec2::new(rect.right(), rect.bottom()),
        Vec2::new(rect.x, rect.bottom()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: [f32; 4] = [1.0; 4];

    #[test]
    fn test_rect_is_two_triangles() {
        let v = rect(&Rect::new(10.0, 20.0, 30.0, 40.0), WHITE);
        assert_eq!(v.len(), 6);
        assert!(v.iter().all(|v| (10.0..=40.0).contains(&v.position[0])));
        assert!(v.iter().all(|v| (20.0..=60.0).contains(&v.position[1])));
    }

    #[test]
    fn test_polygon_fan() {
        let quad = rect_corners(&Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(convex_polygon(&quad, WHITE).len(), 6);
        assert!(convex_polygon(&quad[..2], WHITE).is_empty());
    }

    #[test]
    fn test_ellipse_stays_within_radii() {
        let center = Vec2::new(50.0, 50.0);
        let v = ellipse(center, Vec2::new(8.0, 4.0), WHITE, ELLIPSE_SEGMENTS);
        assert_eq!(v.len(), (ELLIPSE_SEGMENTS * 3) as usize);
        for vertex in v {
            assert!((vertex.position[0] - 50.0).abs() <= 8.0 + 1e-4);
            assert!((vertex.position[1] - 50.0).abs() <= 4.0 + 1e-4);
        }
    }

    #[test]
    fn test_line_width() {
        let v = line(Vec2::new(0.0, 0.0), Vec2::new(0.0, 30.0), 4.0, WHITE);
        assert_eq!(v.len(), 6);
        let xs: Vec<f32> = v.iter().map(|v| v.position[0]).collect();
        let min = xs.iter().cloned().fold(f32::MAX, f32::min);
        let max = xs.iter().cloned().fold(f32::MIN, f32::max);
        assert!((max - min - 4.0).abs() < 1e-5);

        assert!(line(Vec2::ONE, Vec2::ONE, 4.0, WHITE).is_empty());
    }

    #[test]
    fn test_outline_closes_polygon() {
        let quad = rect_corners(&Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(polygon_outline(&quad, 2.0, WHITE).len(), 4 * 6);
    }
}
