//! Shape generation for 2D primitives
//!
//! Everything is built in play-area coordinates (origin top-left, y down);
//! the pipeline maps to NDC.

use glam::Vec2;

use super::vertex::{Vertex, colors};
use crate::frontend::Frame;
use crate::sim::Ship;

/// Generate vertices for a filled axis-aligned rectangle
pub fn rect(min: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    if size.x <= 0.0 || size.y <= 0.0 {
        return Vec::new();
    }
    let max = min + size;

    vec![
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}

/// Generate vertices for a filled triangle
pub fn triangle(a: Vec2, b: Vec2, c: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    vec![
        Vertex::new(a.x, a.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(c.x, c.y, color),
    ]
}

/// Translucent frame along the four play-area edges
pub fn border(play_area: Vec2, width: f32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(24);
    let color = colors::BORDER;
    vertices.extend(rect(Vec2::ZERO, Vec2::new(play_area.x, width), color));
    vertices.extend(rect(Vec2::ZERO, Vec2::new(width, play_area.y), color));
    vertices.extend(rect(
        Vec2::new(0.0, play_area.y - width),
        Vec2::new(play_area.x, width),
        color,
    ));
    vertices.extend(rect(
        Vec2::new(play_area.x - width, 0.0),
        Vec2::new(width, play_area.y),
        color,
    ));
    vertices
}

/// Ship sprite: nose-up hull with cockpit and engine flare, filling its bounding box
pub fn ship(ship: &Ship) -> Vec<Vertex> {
    let Ship { pos, size } = *ship;
    let at = |u: f32, v: f32| pos + Vec2::new(u * size.x, v * size.y);

    let mut vertices = Vec::with_capacity(12);
    // Engine flare under the hull
    vertices.extend(triangle(at(0.35, 0.8), at(0.65, 0.8), at(0.5, 1.0), colors::SHIP_ENGINE));
    // Hull
    vertices.extend(triangle(at(0.5, 0.0), at(1.0, 0.85), at(0.0, 0.85), colors::SHIP_HULL));
    // Cockpit
    vertices.extend(triangle(at(0.5, 0.25), at(0.62, 0.55), at(0.38, 0.55), colors::SHIP_COCKPIT));
    vertices
}

/// Full triangle list for a frame, back to front
pub fn frame_vertices(frame: &Frame<'_>) -> Vec<Vertex> {
    let mut vertices =
        Vec::with_capacity(24 + frame.stars.len() * 6 + frame.obstacles.len() * 6 + 9);

    vertices.extend(border(frame.play_area, frame.border_width));

    for star in frame.stars {
        vertices.extend(rect(star.pos, Vec2::splat(star.size), colors::STAR));
    }

    for obstacle in frame.obstacles {
        vertices.extend(rect(
            obstacle.pos,
            Vec2::new(obstacle.width, frame.obstacle_height),
            colors::OBSTACLE,
        ));
    }

    vertices.extend(ship(frame.ship));
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GameState, spawn_obstacle_pair_at};
    use crate::tuning::Tuning;

    #[test]
    fn test_rect_covers_bounds() {
        let v = rect(Vec2::new(10.0, 20.0), Vec2::new(30.0, 40.0), colors::STAR);
        assert_eq!(v.len(), 6);
        let xs: Vec<f32> = v.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = v.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), 10.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 40.0);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), 20.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 60.0);
    }

    #[test]
    fn test_empty_rect_emits_nothing() {
        assert!(rect(Vec2::ZERO, Vec2::new(0.0, 80.0), colors::OBSTACLE).is_empty());
    }

    #[test]
    fn test_ship_stays_in_bounding_box() {
        let ship = Ship {
            pos: Vec2::new(100.0, 200.0),
            size: Vec2::new(50.0, 50.0),
        };
        for v in super::ship(&ship) {
            assert!((100.0..=150.0).contains(&v.position[0]));
            assert!((200.0..=250.0).contains(&v.position[1]));
        }
    }

    #[test]
    fn test_frame_vertex_count() {
        let mut state = GameState::new(Tuning::default(), 5);
        spawn_obstacle_pair_at(&mut state, 100.0);
        let frame = Frame::new(&state, 0);

        let vertices = frame_vertices(&frame);
        // border + stars + obstacles + ship
        assert_eq!(vertices.len(), 24 + 100 * 6 + 2 * 6 + 9);
    }
}
