//! Binary encoding of point sets and triangle meshes.
//!
//! All integers are little-endian `u32`, all coordinates little-endian `f32`.
//! There is no header, version tag or padding.
//!
//! ```text
//! PointSet := u32(count) ++ count * (f32 x, f32 y)
//! Mesh     := PointSet(vertices) ++ u32(triangle_count) ++ triangle_count * (u32 i, u32 j, u32 k)
//! ```

use std::convert::TryFrom;

use geo_types::{point, Point};
use tracing::trace;

use crate::error::{CodecError, CodecResult};
use crate::math::CoordType;
use crate::mesh::Mesh;
use crate::Triangle;

/// Size of a count field in bytes.
const COUNT_SIZE: usize = 4;

/// Size of one `(x, y)` record in bytes.
const POINT_SIZE: usize = 8;

/// Size of one `(i, j, k)` record in bytes.
const TRIANGLE_SIZE: usize = 12;

/// Encode a point set. Coordinates are narrowed to `f32`.
///
/// # Panics
///
/// If there are more than `u32::MAX` points.
pub fn serialize_pointset<T: CoordType>(points: &[Point<T>]) -> Vec<u8> {
    let mut data = Vec::with_capacity(pointset_len(points.len()));
    write_pointset(&mut data, points);
    data
}

/// Decode a point set, requiring the buffer to be exactly as long as the count declares.
///
/// # Errors
///
/// - [`CodecError::TooShort`] if the count itself can't be read
/// - [`CodecError::InvalidLength`] if the buffer is truncated or has trailing bytes
pub fn deserialize_pointset<T: CoordType>(data: &[u8]) -> CodecResult<Vec<Point<T>>> {
    let count = read_count(data, 0).ok_or(CodecError::TooShort { len: data.len() })?;
    let expected = pointset_len(count);

    if data.len() != expected {
        return Err(CodecError::InvalidLength {
            expected,
            actual: data.len(),
        });
    }

    trace!(points = count, "decoding point set");

    Ok(data[COUNT_SIZE..]
        .chunks_exact(POINT_SIZE)
        .map(read_point)
        .collect())
}

/// Encode vertices followed by triangles. Indices are not range-checked.
///
/// # Panics
///
/// If either count exceeds `u32::MAX`.
pub fn serialize_triangles<T: CoordType>(vertices: &[Point<T>], triangles: &[Triangle]) -> Vec<u8> {
    let len = pointset_len(vertices.len()) + COUNT_SIZE + triangles.len() * TRIANGLE_SIZE;
    let mut data = Vec::with_capacity(len);

    write_pointset(&mut data, vertices);
    write_count(&mut data, triangles.len());
    for t in triangles {
        for i in t {
            data.extend_from_slice(&i.to_le_bytes());
        }
    }

    data
}

/// Decode a mesh.
///
/// Validation is staged and stops at the first failure. Triangles with repeated
/// indices are accepted, only the index range is checked.
///
/// # Errors
///
/// - [`CodecError::TooShort`] if the vertex count can't be read
/// - [`CodecError::TooShortForVertices`] if the vertex block is cut off
/// - [`CodecError::TooShortForTriangleCount`] if the triangle count is missing
/// - [`CodecError::InvalidLength`] if the triangle block length is wrong
/// - [`CodecError::IndexOutOfBounds`] if a triangle references a missing vertex
pub fn deserialize_triangles<T: CoordType>(data: &[u8]) -> CodecResult<Mesh<T>> {
    let vertex_count = read_count(data, 0).ok_or(CodecError::TooShort { len: data.len() })?;
    let vertices_end = pointset_len(vertex_count);

    if data.len() < vertices_end {
        return Err(CodecError::TooShortForVertices {
            expected: vertices_end,
            actual: data.len(),
        });
    }

    let vertices = deserialize_pointset(&data[..vertices_end])?;

    let triangle_count =
        read_count(data, vertices_end).ok_or(CodecError::TooShortForTriangleCount {
            expected: vertices_end.saturating_add(COUNT_SIZE),
            actual: data.len(),
        })?;
    let expected = triangle_count
        .saturating_mul(TRIANGLE_SIZE)
        .saturating_add(vertices_end + COUNT_SIZE);

    if data.len() != expected {
        return Err(CodecError::InvalidLength {
            expected,
            actual: data.len(),
        });
    }

    trace!(
        vertices = vertex_count,
        triangles = triangle_count,
        "decoding mesh"
    );

    let triangles = data[vertices_end + COUNT_SIZE..]
        .chunks_exact(TRIANGLE_SIZE)
        .map(|buf| {
            let triangle = read_triangle(buf);
            if triangle.iter().any(|&i| i as usize >= vertex_count) {
                Err(CodecError::IndexOutOfBounds {
                    triangle,
                    vertex_count,
                })
            } else {
                Ok(triangle)
            }
        })
        .collect::<CodecResult<Vec<_>>>()?;

    Ok(Mesh {
        vertices,
        triangles,
    })
}

#[inline]
fn pointset_len(count: usize) -> usize {
    count.saturating_mul(POINT_SIZE).saturating_add(COUNT_SIZE)
}

/// Narrow a count or index to its `u32` wire width.
///
/// # Panics
///
/// If `value` exceeds `u32::MAX`; a wrapped value would no longer describe the payload.
pub(crate) fn wire_u32(value: usize) -> u32 {
    match u32::try_from(value) {
        Ok(v) => v,
        Err(_) => panic!("{} does not fit the u32 wire format", value),
    }
}

fn write_count(data: &mut Vec<u8>, count: usize) {
    data.extend_from_slice(&wire_u32(count).to_le_bytes());
}

fn write_pointset<T: CoordType>(data: &mut Vec<u8>, points: &[Point<T>]) {
    write_count(data, points.len());
    for p in points {
        data.extend_from_slice(&(p.x().into_f64() as f32).to_le_bytes());
        data.extend_from_slice(&(p.y().into_f64() as f32).to_le_bytes());
    }
}

/// Count stored at `offset`, or `None` if the buffer ends before it.
fn read_count(data: &[u8], offset: usize) -> Option<usize> {
    let buf = data.get(offset..offset.checked_add(COUNT_SIZE)?)?;
    Some(read_u32(buf) as usize)
}

#[inline]
fn read_u32(buf: &[u8]) -> u32 {
    u32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]])
}

/// Read a point from 8 bytes (2 f32s).
fn read_point<T: CoordType>(buf: &[u8]) -> Point<T> {
    let x = f32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]);
    let y = f32::from_le_bytes([buf[4], buf[5], buf[6], buf[7]]);
    point!(x: T::from_f64(f64::from(x)), y: T::from_f64(f64::from(y)))
}

/// Read a triangle from 12 bytes (3 u32s).
fn read_triangle(buf: &[u8]) -> Triangle {
    [read_u32(&buf[0..4]), read_u32(&buf[4..8]), read_u32(&buf[8..12])]
}
