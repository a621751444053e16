use geo_types::Point;

use crate::codec::{deserialize_triangles, serialize_triangles};
use crate::error::{CodecResult, TriangulationResult};
use crate::math::CoordType;
use crate::params::TriangulationParams;
use crate::{Triangle, Triangulation};

/// Vertices together with the triangles that index into them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh<T>
where
    T: CoordType,
{
    pub vertices: Vec<Point<T>>,

    /// Index triples into `vertices`.
    pub triangles: Vec<Triangle>,
}

impl<T> Mesh<T>
where
    T: CoordType,
{
    pub fn new(vertices: Vec<Point<T>>, triangles: Vec<Triangle>) -> Self {
        Self {
            vertices,
            triangles,
        }
    }

    /// Triangulate `points` and keep them as the mesh vertices.
    ///
    /// # Errors
    ///
    /// Any [`TriangulationError`](crate::TriangulationError) from [`Triangulation::triangulate_with`].
    pub fn from_points(
        points: Vec<Point<T>>,
        params: &TriangulationParams,
    ) -> TriangulationResult<Self> {
        let triangulation = Triangulation::triangulate_with(&points, params)?;
        Ok(Self::new(points, triangulation.triangles))
    }

    /// The number of triangles.
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Corner points of the `i`-th triangle, or `None` if `i` or any of its
    /// indices is out of range.
    pub fn triangle_points(&self, i: usize) -> Option<[Point<T>; 3]> {
        let [a, b, c] = *self.triangles.get(i)?;
        Some([
            *self.vertices.get(a as usize)?,
            *self.vertices.get(b as usize)?,
            *self.vertices.get(c as usize)?,
        ])
    }

    /// Encode with [`serialize_triangles`].
    pub fn to_bytes(&self) -> Vec<u8> {
        serialize_triangles(&self.vertices, &self.triangles)
    }

    /// Decode with [`deserialize_triangles`].
    ///
    /// # Errors
    ///
    /// Any [`CodecError`](crate::CodecError) raised while decoding.
    pub fn from_bytes(data: &[u8]) -> CodecResult<Self> {
        deserialize_triangles(data)
    }
}
