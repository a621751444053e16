pub use codec::{deserialize_pointset, deserialize_triangles, serialize_pointset, serialize_triangles};
pub use delaunay::{Triangle, Triangulation};
pub use error::{CodecError, CodecResult, Error, TriangulationError, TriangulationResult};
use geo_types::Point;
pub use math::{are_collinear, circumcircle, distance, has_duplicate, point_in_circumcircle, CoordType};
pub use mesh::Mesh;
pub use params::TriangulationParams;

mod codec;
mod delaunay;
mod error;
mod math;
mod mesh;
mod params;

pub fn triangulate<T>(points: &[Point<T>]) -> TriangulationResult<Triangulation>
where
    T: CoordType,
{
    Triangulation::triangulate(points)
}

pub fn triangulate_with<T>(
    points: &[Point<T>],
    params: &TriangulationParams,
) -> TriangulationResult<Triangulation>
where
    T: CoordType,
{
    Triangulation::triangulate_with(points, params)
}

/// Decode a point set, triangulate it, and encode the resulting mesh.
///
/// Decoding and triangulation happen in `f64`; the output carries the decoded
/// points as vertices.
///
/// # Errors
///
/// [`Error::Codec`] for a malformed point set, [`Error::Triangulation`] for a
/// point set that can't be triangulated.
pub fn triangulate_bytes(pointset: &[u8]) -> Result<Vec<u8>, Error> {
    let points = deserialize_pointset::<f64>(pointset)?;
    let mesh = Mesh::from_points(points, &TriangulationParams::default())?;
    Ok(mesh.to_bytes())
}
