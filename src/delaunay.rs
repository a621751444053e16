/*!
Incremental [Bowyer-Watson](https://en.wikipedia.org/wiki/Bowyer%E2%80%93Watson_algorithm)
Delaunay triangulation of 2D points.

# Example

```rust
use triangulator::triangulate;
use geo_types::{point, Point};

let points = vec![
    point!(x: 0., y: 0.),
    point!(x: 1., y: 0.),
    point!(x: 1., y: 1.),
    point!(x: 0., y: 1.),
];

let result = triangulate(&points).unwrap();
println!("{:?}", result.triangles); // [[1, 0, 2], [2, 0, 3]]
```
*/

use std::collections::HashMap;

use geo_types::{point, Point};
use tracing::{debug, trace};

use crate::codec::wire_u32;
use crate::error::{TriangulationError, TriangulationResult};
use crate::math::{are_collinear, calc_bbox, has_duplicate, point_in_circumcircle_eps, CoordType};
use crate::params::TriangulationParams;

/// Three vertex indices forming a triangle.
pub type Triangle = [u32; 3];

// working triangle; indices may point at the super-triangle vertices
type WorkTriangle = [usize; 3];

/// Result of the Delaunay triangulation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Triangulation {
    /// Triangles as index triples into the input points, in construction order.
    ///
    /// The order follows the insertion sequence and is deterministic for a given
    /// input, but it is not sorted by any canonical key.
    pub triangles: Vec<Triangle>,
}

impl Triangulation {
    /// The number of triangles in the triangulation.
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Triangle> {
        self.triangles.iter()
    }

    /// Triangulate a set of 2D points with the default parameters.
    ///
    /// # Errors
    ///
    /// See [`Triangulation::triangulate_with`].
    pub fn triangulate<T: CoordType>(points: &[Point<T>]) -> TriangulationResult<Triangulation> {
        Self::triangulate_with(points, &TriangulationParams::default())
    }

    /// Triangulate a set of 2D points.
    ///
    /// Points are inserted one by one in input order into a super-triangle that
    /// encloses them all. Triangles still touching the super-triangle are dropped
    /// at the end, so every returned index refers to `points`.
    ///
    /// # Panics
    ///
    /// If a returned index exceeds `u32::MAX`.
    ///
    /// # Errors
    ///
    /// Checked in this order, before any triangle is built:
    /// - [`TriangulationError::DuplicatePoints`] if two points are exactly equal
    /// - [`TriangulationError::TooFewPoints`] if there are fewer than 3 points
    /// - [`TriangulationError::CollinearPoints`] if all points lie on one line
    pub fn triangulate_with<T: CoordType>(
        points: &[Point<T>],
        params: &TriangulationParams,
    ) -> TriangulationResult<Triangulation> {
        Self::check_input(points)?;

        let n = points.len();
        debug!(points = n, "starting Bowyer-Watson triangulation");

        let epsilon = T::from_f64(params.circumcircle_epsilon);
        let mut vertices = Vec::with_capacity(n + 3);
        vertices.extend_from_slice(points);
        vertices.extend_from_slice(&Self::super_triangle(points, params));

        let mut triangles: Vec<WorkTriangle> = vec![[n, n + 1, n + 2]];

        for (i, &p) in points.iter().enumerate() {
            let (bad, good): (Vec<WorkTriangle>, Vec<WorkTriangle>) =
                triangles.into_iter().partition(|t| {
                    point_in_circumcircle_eps(
                        p,
                        vertices[t[0]],
                        vertices[t[1]],
                        vertices[t[2]],
                        epsilon,
                    )
                });

            let boundary = cavity_boundary(&bad);
            trace!(
                point = i,
                bad_triangles = bad.len(),
                boundary_edges = boundary.len(),
                "inserted point"
            );

            triangles = good;
            triangles.extend(boundary.into_iter().map(|(a, b)| [a, b, i]));
        }

        let triangles: Vec<Triangle> = triangles
            .into_iter()
            .filter(|t| t.iter().all(|&v| v < n))
            .map(|[a, b, c]| [wire_u32(a), wire_u32(b), wire_u32(c)])
            .collect();

        debug!(
            points = n,
            triangles = triangles.len(),
            "finished Bowyer-Watson triangulation"
        );

        Ok(Triangulation { triangles })
    }

    fn check_input<T: CoordType>(points: &[Point<T>]) -> TriangulationResult<()> {
        let err = if has_duplicate(points) {
            TriangulationError::DuplicatePoints
        } else if points.len() < 3 {
            TriangulationError::TooFewPoints {
                count: points.len(),
            }
        } else if are_collinear(points) {
            TriangulationError::CollinearPoints
        } else {
            return Ok(());
        };

        debug!(points = points.len(), error = %err, "rejected triangulation input");
        Err(err)
    }

    /// Three synthetic vertices far outside the bounding box of `points`.
    fn super_triangle<T: CoordType>(
        points: &[Point<T>],
        params: &TriangulationParams,
    ) -> [Point<T>; 3] {
        let (mid, delta) = calc_bbox(points);
        let (mid_x, mid_y) = mid.x_y();
        let scale = T::from_f64(params.super_triangle_scale);

        [
            point!(x: mid_x - scale * delta, y: mid_y - delta),
            point!(x: mid_x, y: mid_y + scale * delta),
            point!(x: mid_x + scale * delta, y: mid_y - delta),
        ]
    }
}

impl IntoIterator for Triangulation {
    type Item = Triangle;
    type IntoIter = std::vec::IntoIter<Triangle>;

    fn into_iter(self) -> Self::IntoIter {
        self.triangles.into_iter()
    }
}

impl<'a> IntoIterator for &'a Triangulation {
    type Item = &'a Triangle;
    type IntoIter = std::slice::Iter<'a, Triangle>;

    fn into_iter(self) -> Self::IntoIter {
        self.triangles.iter()
    }
}

#[inline]
fn edges(t: &WorkTriangle) -> [(usize, usize); 3] {
    [(t[0], t[1]), (t[1], t[2]), (t[2], t[0])]
}

#[inline]
fn edge_key((a, b): (usize, usize)) -> (usize, usize) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Edges of the bad triangles not shared with another bad triangle, in the
/// order and winding they appear in `bad`.
fn cavity_boundary(bad: &[WorkTriangle]) -> Vec<(usize, usize)> {
    let mut counts: HashMap<(usize, usize), usize> = HashMap::with_capacity(bad.len() * 3);
    for e in bad.iter().flat_map(edges) {
        *counts.entry(edge_key(e)).or_insert(0) += 1;
    }

    bad.iter()
        .flat_map(edges)
        .filter(|&e| counts[&edge_key(e)] == 1)
        .collect()
}
