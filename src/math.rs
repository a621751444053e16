use std::collections::HashSet;

use approx::AbsDiffEq;
use geo_types::{point, CoordFloat, Point};
use ordered_float::OrderedFloat;

use crate::error::TriangulationError;

/// Floating-point coordinate accepted by the triangulation and the codec.
///
/// The wire format stores `f32`; conversions go through `f64` so that both
/// precisions share one set of design constants.
pub trait CoordType: CoordFloat + AbsDiffEq<Epsilon = Self> {
    fn from_f64(v: f64) -> Self;

    fn into_f64(self) -> f64;
}

impl CoordType for f64 {
    #[inline(always)]
    fn from_f64(v: f64) -> Self {
        v
    }

    #[inline(always)]
    fn into_f64(self) -> f64 {
        self
    }
}

impl CoordType for f32 {
    #[inline(always)]
    fn from_f64(v: f64) -> Self {
        v as f32
    }

    #[inline(always)]
    fn into_f64(self) -> f64 {
        f64::from(self)
    }
}

/// Returns `true` when every point lies on the line through the first two.
///
/// Fewer than three points are always collinear. The signed area is compared
/// against exactly zero, no tolerance is applied.
pub fn are_collinear<T: CoordType>(points: &[Point<T>]) -> bool {
    if points.len() < 3 {
        return true;
    }

    let (x1, y1) = points[0].x_y();
    let (x2, y2) = points[1].x_y();

    points[2..].iter().all(|p| {
        let (xi, yi) = p.x_y();
        let det = (x2 - x1) * (yi - y1) - (y2 - y1) * (xi - x1);
        det == T::zero()
    })
}

/// Returns `true` if two points share exactly equal coordinates.
pub fn has_duplicate<T: CoordType>(points: &[Point<T>]) -> bool {
    let mut seen = HashSet::with_capacity(points.len());

    for p in points {
        // NaN never compares equal, so it can't duplicate anything
        if p.x().is_nan() || p.y().is_nan() {
            continue;
        }
        if !seen.insert((OrderedFloat(p.x().into_f64()), OrderedFloat(p.y().into_f64()))) {
            return true;
        }
    }

    false
}

/// Euclidean distance between two points.
#[inline]
pub fn distance<T: CoordType>(p1: Point<T>, p2: Point<T>) -> T {
    let dx = p2.x() - p1.x();
    let dy = p2.y() - p1.y();
    (dx * dx + dy * dy).sqrt()
}

/// Center and radius of the circle through `p1`, `p2` and `p3`.
///
/// # Errors
///
/// [`TriangulationError::CollinearPoints`] if the three points are collinear
/// in the sense of [`are_collinear`].
pub fn circumcircle<T: CoordType>(
    p1: Point<T>,
    p2: Point<T>,
    p3: Point<T>,
) -> Result<(Point<T>, T), TriangulationError> {
    if are_collinear(&[p1, p2, p3]) {
        return Err(TriangulationError::CollinearPoints);
    }

    let (ax, ay) = p1.x_y();
    let (bx, by) = p2.x_y();
    let (cx, cy) = p3.x_y();

    let two = T::from_f64(2.0);
    let d = two * (ax * (by - cy) + bx * (cy - ay) + cx * (ay - by));

    let a2 = ax * ax + ay * ay;
    let b2 = bx * bx + by * by;
    let c2 = cx * cx + cy * cy;

    let ux = (a2 * (by - cy) + b2 * (cy - ay) + c2 * (ay - by)) / d;
    let uy = (a2 * (cx - bx) + b2 * (ax - cx) + c2 * (bx - ax)) / d;

    let center = point!(x: ux, y: uy);
    let radius = distance(center, p1);

    Ok((center, radius))
}

/// Strict interior test against the circumcircle of `p1`, `p2`, `p3`.
///
/// A point is inside when its distance to the center is below
/// `radius - epsilon`. Collinear triangles contain nothing.
pub fn point_in_circumcircle<T: CoordType>(
    point: Point<T>,
    p1: Point<T>,
    p2: Point<T>,
    p3: Point<T>,
) -> bool {
    point_in_circumcircle_eps(point, p1, p2, p3, T::from_f64(crate::params::CIRCUMCIRCLE_EPSILON))
}

pub(crate) fn point_in_circumcircle_eps<T: CoordType>(
    point: Point<T>,
    p1: Point<T>,
    p2: Point<T>,
    p3: Point<T>,
    epsilon: T,
) -> bool {
    match circumcircle(p1, p2, p3) {
        Ok((center, radius)) => distance(point, center) < radius - epsilon,
        Err(_) => false,
    }
}

/// Bounding box center and its larger side.
pub(crate) fn calc_bbox<T: CoordType>(points: &[Point<T>]) -> (Point<T>, T) {
    let mut min_x: T = T::infinity();
    let mut min_y: T = T::infinity();
    let mut max_x: T = T::neg_infinity();
    let mut max_y: T = T::neg_infinity();

    for p in points.iter() {
        min_x = min_x.min(p.x());
        min_y = min_y.min(p.y());
        max_x = max_x.max(p.x());
        max_y = max_y.max(p.y());
    }

    let two = T::from_f64(2.0);
    let center = point!(x: (min_x + max_x) / two, y: (min_y + max_y) / two);

    (center, (max_x - min_x).max(max_y - min_y))
}
