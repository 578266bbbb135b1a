//! Planar geometry: points, boundary ordering, centroids and pivot rotation.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// A position on the floor in viewport coordinates (y grows downward).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Sort order used for boundary ordering: x ascending, then y ascending.
    fn cmp_xy(&self, other: &Point) -> Ordering {
        self.x.total_cmp(&other.x).then(self.y.total_cmp(&other.y))
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Display dimensions in pixels. May change between frames.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The four corners, clockwise from the origin.
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(0.0, 0.0),
            Point::new(self.width, 0.0),
            Point::new(self.width, self.height),
            Point::new(0.0, self.height),
        ]
    }
}

/// Orders an unordered point set into a closed polygon boundary.
///
/// Points are sorted by x (ties by y), then split by the chord joining the
/// leftmost and rightmost points. The boundary runs left to right along the
/// points above the chord and returns right to left along the rest, so star
/// and blob shapes formed by people on the floor do not cross themselves.
///
/// This is a chain split, not a hull: every input point is kept. Sets with
/// several points sharing an extreme x can still produce crossing edges.
///
/// Sets of two or fewer points are returned unchanged.
pub fn order_points(points: &[Point]) -> Vec<Point> {
    if points.len() <= 2 {
        return points.to_vec();
    }

    let mut sorted = points.to_vec();
    sorted.sort_by(Point::cmp_xy);

    let leftmost = sorted[0];
    let rightmost = sorted[sorted.len() - 1];
    let interior = &sorted[1..sorted.len() - 1];

    let (upper, lower): (Vec<Point>, Vec<Point>) = interior
        .iter()
        .copied()
        .partition(|p| p.y > chord_y(p.x, leftmost, rightmost));

    let mut boundary = Vec::with_capacity(sorted.len());
    boundary.push(leftmost);
    boundary.extend(upper);
    boundary.push(rightmost);
    boundary.extend(lower.into_iter().rev());
    boundary
}

/// Height of the leftmost-rightmost chord at `x`.
///
/// A vertical chord has no defined height; the leftmost y is used so the
/// split stays total.
fn chord_y(x: f64, left: Point, right: Point) -> f64 {
    let span = right.x - left.x;
    if span == 0.0 {
        return left.y;
    }
    let fraction = (x - left.x) / span;
    left.y + fraction * (right.y - left.y)
}

/// Arithmetic mean of the point set, or `None` when the set is empty.
#[allow(clippy::cast_precision_loss)]
pub fn centroid(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
        return None;
    }
    let (sum_x, sum_y) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    let n = points.len() as f64;
    Some(Point::new(sum_x / n, sum_y / n))
}

/// Rotation by a fixed angle about a pivot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    pivot: Point,
    sin: f64,
    cos: f64,
}

impl Rotation {
    pub fn about(pivot: Point, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self { pivot, sin, cos }
    }

    pub fn pivot(&self) -> Point {
        self.pivot
    }

    /// Maps a point through the rotation.
    pub fn apply(&self, point: Point) -> Point {
        let dx = point.x - self.pivot.x;
        let dy = point.y - self.pivot.y;
        Point::new(
            self.pivot.x + dx * self.cos - dy * self.sin,
            self.pivot.y + dx * self.sin + dy * self.cos,
        )
    }

    pub fn apply_all(&self, points: &[Point]) -> Vec<Point> {
        points.iter().map(|&p| self.apply(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(raw: &[(f64, f64)]) -> Vec<Point> {
        raw.iter().copied().map(Point::from).collect()
    }

    fn sorted(mut points: Vec<Point>) -> Vec<Point> {
        points.sort_by(Point::cmp_xy);
        points
    }

    /// Proper intersection test between segments ab and cd.
    fn segments_cross(a: Point, b: Point, c: Point, d: Point) -> bool {
        fn orient(p: Point, q: Point, r: Point) -> f64 {
            (q.x - p.x) * (r.y - p.y) - (q.y - p.y) * (r.x - p.x)
        }
        let d1 = orient(c, d, a);
        let d2 = orient(c, d, b);
        let d3 = orient(a, b, c);
        let d4 = orient(a, b, d);
        d1 * d2 < 0.0 && d3 * d4 < 0.0
    }

    fn is_simple(boundary: &[Point]) -> bool {
        let n = boundary.len();
        for i in 0..n {
            for j in (i + 1)..n {
                // skip adjacent edges, they share a vertex
                if j == i + 1 || (i == 0 && j == n - 1) {
                    continue;
                }
                let (a, b) = (boundary[i], boundary[(i + 1) % n]);
                let (c, d) = (boundary[j], boundary[(j + 1) % n]);
                if segments_cross(a, b, c, d) {
                    return false;
                }
            }
        }
        true
    }

    #[test]
    fn test_small_sets_unchanged() {
        assert!(order_points(&[]).is_empty());

        let one = pts(&[(3.0, 4.0)]);
        assert_eq!(order_points(&one), one);

        let two = pts(&[(9.0, 1.0), (2.0, 5.0)]);
        assert_eq!(order_points(&two), two);
    }

    #[test]
    fn test_square_walks_upper_then_lower() {
        let input = pts(&[(0.0, 0.0), (4.0, 4.0), (0.0, 4.0), (4.0, 0.0)]);
        let boundary = order_points(&input);

        // leftmost (0,0), upper chain, rightmost (4,4), lower chain reversed
        assert_eq!(
            boundary,
            pts(&[(0.0, 0.0), (0.0, 4.0), (4.0, 4.0), (4.0, 0.0)])
        );
        assert!(is_simple(&boundary));
    }

    #[test]
    fn test_lower_chain_is_reversed() {
        let input = pts(&[
            (0.0, 50.0),
            (100.0, 50.0),
            (20.0, 10.0),
            (60.0, 20.0),
            (30.0, 90.0),
            (70.0, 80.0),
        ]);
        let boundary = order_points(&input);
        assert_eq!(
            boundary,
            pts(&[
                (0.0, 50.0),
                (30.0, 90.0),
                (70.0, 80.0),
                (100.0, 50.0),
                (60.0, 20.0),
                (20.0, 10.0),
            ])
        );
    }

    #[test]
    fn test_order_is_permutation() {
        let input = pts(&[
            (512.0, 300.0),
            (100.0, 120.0),
            (700.0, 610.0),
            (330.0, 330.0),
            (330.0, 90.0),
            (45.0, 500.0),
            (610.0, 50.0),
        ]);
        let boundary = order_points(&input);
        assert_eq!(boundary.len(), input.len());
        assert_eq!(sorted(boundary), sorted(input));
    }

    #[test]
    fn test_order_is_permutation_on_random_grids() {
        use rand::prelude::*;
        use rand_chacha::ChaCha8Rng;

        // a 5x5 grid forces duplicates and shared extreme x
        let mut rng = ChaCha8Rng::seed_from_u64(2024);
        for _ in 0..5_000 {
            let len = rng.random_range(3..=11);
            let input: Vec<Point> = (0..len)
                .map(|_| {
                    Point::new(
                        f64::from(rng.random_range(0..5_u8)),
                        f64::from(rng.random_range(0..5_u8)),
                    )
                })
                .collect();
            let boundary = order_points(&input);
            assert_eq!(sorted(boundary), sorted(input.clone()), "input {input:?}");
        }
    }

    #[test]
    fn test_star_shape_is_simple() {
        // Ten people standing in a five-pointed star.
        let center = Point::new(400.0, 300.0);
        let input: Vec<Point> = (0..10)
            .map(|i| {
                let angle = f64::from(i) * std::f64::consts::PI / 5.0 + 0.1;
                let radius = if i % 2 == 0 { 200.0 } else { 80.0 };
                Point::new(
                    center.x + radius * angle.cos(),
                    center.y + radius * angle.sin(),
                )
            })
            .collect();

        let boundary = order_points(&input);
        assert_eq!(sorted(boundary.clone()), sorted(input));
        assert!(is_simple(&boundary));
    }

    #[test]
    fn test_vertical_chord_is_permutation() {
        let input = pts(&[(5.0, 9.0), (5.0, 1.0), (5.0, 4.0), (5.0, 7.0)]);
        let boundary = order_points(&input);
        assert_eq!(boundary[0], Point::new(5.0, 1.0));
        assert_eq!(boundary[boundary.len() / 2 + 1], Point::new(5.0, 9.0));
        assert_eq!(sorted(boundary), sorted(input));
    }

    #[test]
    fn test_ties_break_by_y() {
        let input = pts(&[(0.0, 8.0), (0.0, 2.0), (10.0, 3.0), (10.0, 1.0)]);
        let boundary = order_points(&input);
        assert_eq!(boundary[0], Point::new(0.0, 2.0));
        assert!(boundary.contains(&Point::new(10.0, 3.0)));
        assert_eq!(boundary.len(), 4);
    }

    #[test]
    fn test_centroid_of_square() {
        let square = pts(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]);
        assert_eq!(centroid(&square), Some(Point::new(2.0, 2.0)));
    }

    #[test]
    fn test_centroid_empty() {
        assert_eq!(centroid(&[]), None);
        assert_eq!(
            centroid(&[Point::new(7.0, -3.0)]),
            Some(Point::new(7.0, -3.0))
        );
    }

    #[test]
    fn test_rotation_about_pivot() {
        let pivot = Point::new(100.0, 100.0);
        let quarter = Rotation::about(pivot, std::f64::consts::FRAC_PI_2);
        let moved = quarter.apply(Point::new(110.0, 100.0));
        assert!((moved.x - 100.0).abs() < 1e-9);
        assert!((moved.y - 110.0).abs() < 1e-9);
        assert_eq!(quarter.apply(pivot), pivot);
    }

    #[test]
    fn test_viewport_corners() {
        let viewport = Viewport::new(640.0, 480.0);
        let far = viewport
            .corners()
            .iter()
            .map(|c| c.distance(Point::new(0.0, 0.0)))
            .fold(0.0, f64::max);
        assert!((far - 800.0).abs() < 1e-9);
    }
}
