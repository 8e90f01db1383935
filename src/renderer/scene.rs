//! Paints the road, the player and traffic onto a [`Canvas`]
//!
//! Read-only over [`GameState`]; the same state always produces the same
//! command stream.

use glam::Vec2;

use super::canvas::Canvas;
use super::vertex::colors;
use crate::sim::{GameState, Rect, Vehicle, VehicleKind};

/// Lane divider stroke width
const LANE_MARK_WIDTH: f32 = 4.0;
/// Vehicle outline stroke width
const OUTLINE_WIDTH: f32 = 2.0;

/// Draw one complete frame
pub fn render<C: Canvas + ?Sized>(state: &GameState, canvas: &mut C) {
    canvas.begin_frame(state.viewport);
    draw_road(state, canvas);
    draw_vehicle(&state.player.vehicle, canvas);
    for enemy in &state.enemies {
        draw_vehicle(enemy, canvas);
    }
    canvas.end_frame();
}

/// Asphalt, sidewalks and scrolling lane dashes
fn draw_road<C: Canvas + ?Sized>(state: &GameState, canvas: &mut C) {
    let viewport = state.viewport;
    let road = state.road();

    canvas.fill_rect(
        Rect::new(0.0, 0.0, viewport.width, viewport.height),
        colors::ROAD,
    );

    if road.margin > 0.0 {
        canvas.fill_rect(
            Rect::new(0.0, 0.0, road.margin, viewport.height),
            colors::SIDEWALK,
        );
        canvas.fill_rect(
            Rect::new(viewport.width - road.margin, 0.0, road.margin, viewport.height),
            colors::SIDEWALK,
        );
    }

    // 30 on / 30 off, shifted down by the animation offset
    let period = state.tuning.dash_period;
    let dash = period / 2.0;
    for lane in 1..road.lane_count {
        let x = road.divider_x(lane);
        let mut y = state.lane_offset - dash;
        while y < viewport.height {
            canvas.stroke_line(
                Vec2::new(x, y),
                Vec2::new(x, y + dash),
                colors::LANE_MARK,
                LANE_MARK_WIDTH,
            );
            y += period;
        }
    }
}

/// Body, roof and wheels, mirrored top-to-bottom so the car faces up
fn draw_vehicle<C: Canvas + ?Sized>(vehicle: &Vehicle, canvas: &mut C) {
    let Vehicle {
        x,
        y,
        width: w,
        height: h,
        ..
    } = *vehicle;
    // Point at fractions (fx, fy) of the body, after the vertical flip
    let at = |fx: f32, fy: f32| Vec2::new(x + w * fx, y + h * (1.0 - fy));

    let body = vehicle.rect();
    canvas.fill_rect(body, vehicle.color);
    canvas.stroke_rect(body, colors::OUTLINE, OUTLINE_WIDTH);

    let roof = [at(0.2, 0.1), at(0.8, 0.1), at(0.7, 0.4), at(0.3, 0.4)];
    canvas.fill_polygon(&roof, colors::WINDSHIELD);
    canvas.stroke_polygon(&roof, colors::OUTLINE, OUTLINE_WIDTH);

    let radii = match vehicle.kind {
        VehicleKind::Car => Vec2::new(w * 0.15, h * 0.1),
        VehicleKind::Truck => Vec2::new(w * 0.2, h * 0.12),
    };
    canvas.fill_ellipse(at(0.25, 0.85), radii, colors::WHEEL);
    canvas.fill_ellipse(at(0.75, 0.85), radii, colors::WHEEL);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::canvas::{DrawCommand, RecordingCanvas};
    use crate::sim::{Color, Viewport};
    use crate::tuning::Tuning;

    fn state() -> GameState {
        GameState::new(4, Tuning::default(), Viewport::new(1000.0, 600.0))
    }

    fn truck(x: f32, y: f32) -> Vehicle {
        Vehicle {
            x,
            y,
            width: 70.0,
            height: 160.0,
            color: Color::rgb(150, 200, 250),
            kind: VehicleKind::Truck,
        }
    }

    fn assert_close(actual: Vec2, expected: Vec2) {
        assert!(
            (actual - expected).length() < 1e-3,
            "expected {expected:?}, got {actual:?}"
        );
    }

    fn lines(canvas: &RecordingCanvas) -> Vec<(Vec2, Vec2)> {
        canvas
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::StrokeLine { from, to, .. } => Some((*from, *to)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_background_and_sidewalks_first() {
        let mut canvas = RecordingCanvas::new();
        render(&state(), &mut canvas);

        assert_eq!(canvas.frames, 1);
        assert_eq!(canvas.viewport, Some(Viewport::new(1000.0, 600.0)));
        assert_eq!(
            canvas.commands[0],
            DrawCommand::FillRect {
                rect: Rect::new(0.0, 0.0, 1000.0, 600.0),
                color: colors::ROAD,
            }
        );
        assert_eq!(
            canvas.commands[1],
            DrawCommand::FillRect {
                rect: Rect::new(0.0, 0.0, 300.0, 600.0),
                color: colors::SIDEWALK,
            }
        );
        assert_eq!(
            canvas.commands[2],
            DrawCommand::FillRect {
                rect: Rect::new(700.0, 0.0, 300.0, 600.0),
                color: colors::SIDEWALK,
            }
        );
    }

    #[test]
    fn test_lane_dashes_follow_offset() {
        let mut s = state();
        let mut canvas = RecordingCanvas::new();
        render(&s, &mut canvas);

        let dashes = lines(&canvas);
        // 4 dividers, dashes starting at -30, 30, ..., 570
        assert_eq!(dashes.len(), 4 * 11);
        assert_eq!(dashes[0], (Vec2::new(380.0, -30.0), Vec2::new(380.0, 0.0)));
        assert_eq!(dashes[1].0, Vec2::new(380.0, 30.0));

        s.lane_offset = 20.0;
        render(&s, &mut canvas);
        let dashes = lines(&canvas);
        assert_eq!(dashes[0].0, Vec2::new(380.0, -10.0));
        assert!(dashes.iter().all(|(from, to)| to.y - from.y == 30.0));
    }

    #[test]
    fn test_vehicle_is_flipped() {
        let mut s = state();
        s.enemies.push(truck(400.0, 100.0));
        let mut canvas = RecordingCanvas::new();
        render(&s, &mut canvas);

        let roofs: Vec<&Vec<Vec2>> = canvas
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillPolygon { points, .. } => Some(points),
                _ => None,
            })
            .collect();
        assert_eq!(roofs.len(), 2);
        // Roof's wide edge sits near the bottom of the truck after the flip
        let roof = roofs[1];
        assert_close(roof[0], Vec2::new(414.0, 244.0));
        assert_close(roof[2], Vec2::new(449.0, 196.0));

        let wheels: Vec<(Vec2, Vec2)> = canvas
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillEllipse { center, radii, .. } => Some((*center, *radii)),
                _ => None,
            })
            .collect();
        assert_eq!(wheels.len(), 4);
        // Player car wheels
        assert_close(wheels[0].1, Vec2::new(7.5, 10.0));
        // Truck wheels are bigger and near the top
        assert_close(wheels[2].1, Vec2::new(14.0, 19.2));
        assert_close(wheels[2].0, Vec2::new(417.5, 124.0));
    }

    #[test]
    fn test_player_painted_before_enemies() {
        let mut s = state();
        s.enemies.push(truck(400.0, 100.0));
        let mut canvas = RecordingCanvas::new();
        render(&s, &mut canvas);

        let bodies: Vec<Color> = canvas
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillRect { rect, color } if rect.width < 100.0 => Some(*color),
                _ => None,
            })
            .collect();
        assert_eq!(bodies, vec![s.player.vehicle.color, Color::rgb(150, 200, 250)]);
    }

    #[test]
    fn test_narrow_viewport_skips_sidewalks() {
        let s = GameState::new(4, Tuning::default(), Viewport::new(300.0, 600.0));
        let mut canvas = RecordingCanvas::new();
        render(&s, &mut canvas);
        assert!(!canvas.commands.iter().any(|c| matches!(
            c,
            DrawCommand::FillRect { color, .. } if *color == colors::SIDEWALK
        )));
    }
}
