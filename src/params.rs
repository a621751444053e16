//! Tunable constants of the Bowyer-Watson insertion.

/// Default half-width of the super-triangle, in multiples of the input's larger extent.
pub const SUPER_TRIANGLE_SCALE: f64 = 20.0;

/// Default inward tolerance of the circumcircle containment test.
pub const CIRCUMCIRCLE_EPSILON: f64 = 1e-10;

/// Parameters for [`triangulate_with`](crate::triangulate_with).
///
/// # Example
///
/// ```
/// use triangulator::TriangulationParams;
///
/// let params = TriangulationParams::default();
/// assert_eq!(params.super_triangle_scale, 20.0);
///
/// let wide = TriangulationParams::default().super_triangle_scale(100.0);
/// assert_eq!(wide.super_triangle_scale, 100.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangulationParams {
    /// How far the synthetic vertices sit from the bounding box center.
    /// Must be large enough that every input point falls inside the super-triangle.
    pub super_triangle_scale: f64,

    /// A point counts as inside a circumcircle only when it is closer than
    /// `radius - circumcircle_epsilon` to the center.
    pub circumcircle_epsilon: f64,
}

impl Default for TriangulationParams {
    fn default() -> Self {
        Self {
            super_triangle_scale: SUPER_TRIANGLE_SCALE,
            circumcircle_epsilon: CIRCUMCIRCLE_EPSILON,
        }
    }
}

impl TriangulationParams {
    /// Set the super-triangle scale.
    #[must_use]
    pub const fn super_triangle_scale(mut self, scale: f64) -> Self {
        self.super_triangle_scale = scale;
        self
    }

    /// Set the circumcircle tolerance.
    #[must_use]
    pub const fn circumcircle_epsilon(mut self, epsilon: f64) -> Self {
        self.circumcircle_epsilon = epsilon;
        self
    }
}
