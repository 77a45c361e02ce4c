use crate::geometry::{Point, Size};
use std::f64::consts::PI;

/// Orbit radius as a share of the region's shorter side.
pub const RADIUS_FACTOR: f64 = 0.35;
/// Index 0 sits at 12 o'clock.
pub const START_OFFSET: f64 = -PI / 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub index: usize,
    /// Radians from the positive x axis, clockwise on screen.
    pub angle: f64,
    /// Where the tool's visual center belongs.
    pub position: Point,
    pub line_length: f64,
    pub line_angle_degrees: f64,
}

pub fn radius(region: Size) -> f64 {
    region.min_side() * RADIUS_FACTOR
}

pub fn angle_step(count: usize) -> f64 {
    2.0 * PI / count as f64
}

pub fn angle(index: usize, count: usize) -> f64 {
    angle_step(count) * index as f64 + START_OFFSET
}

/// Spreads `count` tools evenly on a circle around the region's center.
///
/// A zero-sized region collapses every tool onto the center; that is not an
/// error. Line length and angle are measured from the resulting points rather
/// than taken from the shared radius, so they stay right if tools ever get
/// individual radii.
pub fn compute_layout(count: usize, region: Size) -> Vec<Placement> {
    let center = region.center();
    let radius = radius(region);

    (0..count)
        .map(|index| {
            let angle = angle(index, count);
            let position = center.offset(radius * angle.cos(), radius * angle.sin());
            let (dx, dy) = (position.x - center.x, position.y - center.y);

            Placement {
                index,
                angle,
                position,
                line_length: (dx * dx + dy * dy).sqrt(),
                line_angle_degrees: dy.atan2(dx).to_degrees(),
            }
        })
        .collect()
}

/// Top-left origin that puts the visual center of a `size` box on `target`.
pub fn centered_origin(target: Point, size: Size) -> Point {
    target.offset(-size.width / 2.0, -size.height / 2.0)
}
