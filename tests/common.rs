use std::fs::File;

use geo_types::{point, Point};
use triangulator::{
    circumcircle, deserialize_pointset, deserialize_triangles, serialize_pointset,
    serialize_triangles, triangulate, triangulate_with, CodecError, CoordType, Triangle,
    TriangulationError, TriangulationParams,
};

fn validate<T>(points: &[Point<T>]) -> Vec<Triangle>
where
    T: CoordType,
{
    let triangulation = triangulate(points).unwrap();
    let n = points.len();

    assert!(!triangulation.is_empty(), "Expected at least one triangle");
    assert!(
        triangulation.len() <= 2 * n - 5 || n == 3,
        "Too many triangles: {} for {} points",
        triangulation.len(),
        n
    );

    for t in &triangulation {
        // indices are valid and distinct
        assert!(t.iter().all(|&i| (i as usize) < n), "Index out of range: {:?}", t);
        assert!(t[0] != t[1] && t[1] != t[2] && t[2] != t[0], "Degenerate triangle: {:?}", t);

        let [a, b, c] = [points[t[0] as usize], points[t[1] as usize], points[t[2] as usize]];
        let area = (b.x() - a.x()) * (c.y() - a.y()) - (b.y() - a.y()) * (c.x() - a.x());
        assert!(area != T::zero(), "Zero-area triangle: {:?}", t);

        // empty circumcircle, with slack for the coordinate precision
        let (center, radius) = circumcircle(a, b, c).unwrap();
        let slack = T::one() - T::epsilon().sqrt();
        for (i, p) in points.iter().enumerate() {
            let d = (*p - center).dot(*p - center).sqrt();
            assert!(
                d >= radius * slack,
                "Point {} lies inside the circumcircle of {:?}",
                i,
                t
            );
        }
    }

    triangulation.triangles
}

pub fn basic<T>()
where
    T: CoordType,
{
    let points = to_points::<T>(&[(0., 0.), (1., 0.), (0.5, 1.)]);
    let triangles = validate(&points);
    assert_eq!(triangles.len(), 1, "Expected exactly one triangle (3 points)");

    let mut t = triangles[0];
    t.sort_unstable();
    assert_eq!(t, [0, 1, 2]);

    let points = to_points::<T>(&[(0., 0.), (0., 1.), (1., 0.), (0.5, 0.5)]);
    let count = validate(&points).len();
    assert!(
        (2..=3).contains(&count),
        "Expected 2 or 3 triangles, got {}",
        count
    );
}

pub fn fixtures<T>()
where
    T: CoordType,
{
    validate::<T>(&load_fixture("tests/fixtures/ten_points.json"));
    validate::<T>(&load_fixture("tests/fixtures/random60.json"));
    validate::<T>(&load_fixture("tests/fixtures/grid5.json"));
}

pub fn fixture_counts<T>()
where
    T: CoordType,
{
    // 2n - 2 - h for n points with h of them on the hull
    assert_eq!(validate::<T>(&load_fixture("tests/fixtures/ten_points.json")).len(), 13);
    assert_eq!(validate::<T>(&load_fixture("tests/fixtures/random60.json")).len(), 107);
    assert_eq!(validate::<T>(&load_fixture("tests/fixtures/grid5.json")).len(), 32);
}

pub fn custom_params<T>()
where
    T: CoordType,
{
    let grid = load_fixture::<T>("tests/fixtures/grid5.json");
    let defaults = TriangulationParams::default();

    assert_eq!(
        triangulate_with(&grid, &defaults),
        triangulate(&grid),
        "Expected default parameters to match triangulate"
    );

    // a super-triangle narrower than the grid leaves points outside it
    let narrow = defaults.super_triangle_scale(0.5);
    let triangles = triangulate_with(&grid, &narrow).unwrap();
    assert_eq!(triangles.len(), 15, "Expected a partial triangulation");

    // with a tolerance wider than any circumcircle no triangle is ever replaced
    let points = to_points::<T>(&[(0., 0.), (2., 0.), (1., 3.), (1., 1.)]);
    let blunt = defaults.circumcircle_epsilon(1e6);
    assert!(triangulate_with(&points, &blunt).unwrap().is_empty());
    assert_eq!(triangulate_with(&points, &defaults).unwrap().len(), 3);
}

pub fn translated<T>()
where
    T: CoordType,
{
    let points = load_fixture::<T>("tests/fixtures/ten_points.json");
    let offset = T::from_f64(1000.0);
    let moved: Vec<Point<T>> = points
        .iter()
        .map(|p| point!(x: p.x() + offset, y: p.y() - offset))
        .collect();

    validate::<T>(&moved);
}

pub fn bad_input<T>()
where
    T: CoordType,
{
    let mut points = vec![];
    assert_eq!(
        triangulate::<T>(&points),
        Err(TriangulationError::TooFewPoints { count: 0 }),
        "Expected rejection (0 point)"
    );

    points.push(point!(x: T::one(), y: T::one()));
    assert_eq!(
        triangulate(&points),
        Err(TriangulationError::TooFewPoints { count: 1 }),
        "Expected rejection (1 point)"
    );

    points.push(point!(x: T::one(), y: T::one()));
    assert_eq!(
        triangulate(&points),
        Err(TriangulationError::DuplicatePoints),
        "Expected duplicate rejection (2 equal points)"
    );

    points[1] = point!(x: T::from_f64(2.), y: T::from_f64(2.));
    assert_eq!(
        triangulate(&points),
        Err(TriangulationError::TooFewPoints { count: 2 }),
        "Expected rejection (2 points)"
    );

    points.push(point!(x: T::from_f64(3.), y: T::from_f64(3.)));
    assert_eq!(
        triangulate(&points),
        Err(TriangulationError::CollinearPoints),
        "Expected collinear rejection (3 collinear points)"
    );

    points.push(point!(x: T::from_f64(3.), y: T::zero()));
    validate(&points);
}

pub fn unordered_collinear_points_input<T>()
where
    T: CoordType,
{
    let points: Vec<Point<T>> = [10, 2, 4, 1, 0, 3, 6, 8, 5, 7, 9]
        .iter()
        .map(|&i| T::from_f64(f64::from(i)))
        .map(|y| point!(x: T::zero(), y: y))
        .collect();

    assert_eq!(triangulate(&points), Err(TriangulationError::CollinearPoints));

    let mut with_dup = points.clone();
    with_dup.push(points[3]);
    assert_eq!(
        triangulate(&with_dup),
        Err(TriangulationError::DuplicatePoints)
    );
}

pub fn codec_round_trip<T>()
where
    T: CoordType,
{
    let points = load_fixture::<T>("tests/fixtures/random60.json");
    let data = serialize_pointset(&points);
    assert_eq!(data.len(), 4 + 8 * points.len());

    let decoded: Vec<Point<T>> = deserialize_pointset(&data).unwrap();
    assert_eq!(decoded.len(), points.len());
    for (orig, back) in points.iter().zip(&decoded) {
        assert_eq!(back.x().into_f64(), orig.x().into_f64() as f32 as f64);
        assert_eq!(back.y().into_f64(), orig.y().into_f64() as f32 as f64);
    }

    let triangles = triangulate(&decoded).unwrap().triangles;
    let data = serialize_triangles(&decoded, &triangles);
    let mesh = deserialize_triangles::<T>(&data).unwrap();
    assert_eq!(mesh.vertices, decoded);
    assert_eq!(mesh.triangles, triangles);
}

pub fn codec_rejects_bad_buffers<T>()
where
    T: CoordType,
{
    let vertices = to_points::<T>(&[(0., 0.), (1., 0.), (0.5, 1.)]);
    let data = serialize_triangles(&vertices, &[[0, 1, 2], [0, 2, 1]]);

    assert_eq!(
        deserialize_triangles::<T>(&data[..data.len() - 12]),
        Err(CodecError::InvalidLength {
            expected: 56,
            actual: 44
        })
    );
    assert_eq!(
        deserialize_triangles::<T>(&data[..30]),
        Err(CodecError::TooShortForTriangleCount {
            expected: 32,
            actual: 30
        })
    );
    assert_eq!(
        deserialize_triangles::<T>(&data[..27]),
        Err(CodecError::TooShortForVertices {
            expected: 28,
            actual: 27
        })
    );

    let data = serialize_triangles(&vertices, &[[0, 1, 3]]);
    assert_eq!(
        deserialize_triangles::<T>(&data),
        Err(CodecError::IndexOutOfBounds {
            triangle: [0, 1, 3],
            vertex_count: 3
        })
    );
}

fn to_points<T>(raw: &[(f64, f64)]) -> Vec<Point<T>>
where
    T: CoordType,
{
    raw.iter()
        .map(|&(x, y)| point!(x: T::from_f64(x), y: T::from_f64(y)))
        .collect()
}

fn load_fixture<T>(path: &str) -> Vec<Point<T>>
where
    T: CoordType,
{
    let file = File::open(path).unwrap();
    let u: Vec<(f64, f64)> = serde_json::from_reader(file).unwrap();
    to_points(&u)
}
