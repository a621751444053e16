//! Error types for triangulation and the binary codec.

use thiserror::Error;

use crate::Triangle;

/// Result type for triangulation.
pub type TriangulationResult<T> = Result<T, TriangulationError>;

/// Result type for encoding and decoding.
pub type CodecResult<T> = Result<T, CodecError>;

/// Input rejected before triangulation starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TriangulationError {
    /// Fewer than three points were given.
    #[error("at least 3 points are required, got {count}")]
    TooFewPoints {
        /// Number of points supplied.
        count: usize,
    },

    /// Two points share exactly equal coordinates.
    #[error("point set contains duplicate points")]
    DuplicatePoints,

    /// All points lie on a single line.
    #[error("points are collinear, no triangle can be formed")]
    CollinearPoints,
}

/// Byte buffer does not match the declared point set or mesh layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Not enough bytes to read the leading count.
    #[error("data too short to contain a count: {len} bytes")]
    TooShort {
        /// Length of the buffer.
        len: usize,
    },

    /// The vertex block is truncated.
    #[error("data too short for vertices: expected at least {expected} bytes, got {actual}")]
    TooShortForVertices {
        /// Bytes needed for the declared vertices.
        expected: usize,
        /// Length of the buffer.
        actual: usize,
    },

    /// The vertex block is complete but the triangle count is missing.
    #[error("data too short for triangle count: expected at least {expected} bytes, got {actual}")]
    TooShortForTriangleCount {
        /// Bytes needed up to and including the triangle count.
        expected: usize,
        /// Length of the buffer.
        actual: usize,
    },

    /// Buffer length differs from what the counts declare.
    #[error("invalid data length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Length implied by the declared counts.
        expected: usize,
        /// Length of the buffer.
        actual: usize,
    },

    /// A triangle references a vertex that does not exist.
    #[error("triangle index out of bounds: {triangle:?} with {vertex_count} vertices")]
    IndexOutOfBounds {
        /// The offending index triple.
        triangle: Triangle,
        /// Number of decoded vertices.
        vertex_count: usize,
    },
}

/// Any failure of the decode, triangulate, encode pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The point set could not be triangulated.
    #[error(transparent)]
    Triangulation(#[from] TriangulationError),

    /// The input bytes could not be decoded.
    #[error(transparent)]
    Codec(#[from] CodecError),
}
