use itertools::Itertools;

use crate::util::{mean, std_dev};

/// A position on the logical canvas. Origin is top-left, y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// Even-odd containment test: casts a ray from `point` towards +x and counts
/// how many edges of the closed polygon it crosses.
///
/// The polygon is `path` taken in order, closed by an edge from the last point
/// back to the first. Edges only count when their endpoints sit strictly on
/// opposite sides of the horizontal through `point`, so horizontal edges never
/// contribute.
pub fn contains_point(path: &[Point], point: Point) -> bool {
    if path.len() < 3 {
        return false;
    }

    let crossings = path
        .iter()
        .circular_tuple_windows::<(_, _)>()
        .filter(|(a, b)| (a.y > point.y) != (b.y > point.y))
        .filter(|(a, b)| {
            let x_at = a.x + (point.y - a.y) * (b.x - a.x) / (b.y - a.y);
            x_at > point.x
        })
        .count();

    crossings % 2 == 1
}

/// Mean and population standard deviation of the distances from a center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialStats {
    pub mean_radius: f64,
    pub std_dev: f64,
}

impl RadialStats {
    pub fn of(path: &[Point], center: Point) -> Option<Self> {
        let distances = path
            .iter()
            .map(|p| p.distance_to(&center))
            .collect::<Vec<f64>>();

        Some(Self {
            mean_radius: mean(&distances)?,
            std_dev: std_dev(&distances)?,
        })
    }
}
