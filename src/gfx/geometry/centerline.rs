//! # Centerline Interpolation
//!
//! Densifies a control-point polyline into evenly subdivided samples. Each
//! control segment contributes `subdivisions` samples and the final control
//! point is appended exactly so the tube always reaches its endpoint.

use cgmath::Point3;

/// Sample the polyline at fractional control-point index `f`.
///
/// The bracketing indices are clamped to the valid range, so any `f` at or
/// past the last control point returns that point.
///
/// # Panics
///
/// Panics if `points` is empty.
pub fn interp_position(points: &[Point3<f32>], f: f32) -> Point3<f32> {
    let last = points.len().saturating_sub(1) as f32;
    let a = f.floor().clamp(0.0, last);
    let b = f.ceil().clamp(0.0, last);
    let t = f - a;

    let start = points[a as usize];
    let end = points[b as usize];
    start + (end - start) * t
}

/// Number of samples [`interpolate`] produces, saturating at `usize::MAX`.
pub fn sample_count(control_points: usize, subdivisions: usize) -> usize {
    control_points
        .saturating_sub(1)
        .saturating_mul(subdivisions)
        .saturating_add(1)
}

/// Densify `points` into `(N - 1) * subdivisions + 1` samples.
///
/// Callers validate the inputs with
/// [`TubeProfile::validate_with`](super::TubeProfile::validate_with) first.
///
/// # Panics
///
/// Panics if `points` is empty or the sample count overflows `usize`.
pub fn interpolate(points: &[Point3<f32>], subdivisions: usize) -> Vec<Point3<f32>> {
    let steps = (points.len() - 1) * subdivisions;
    let mut samples = Vec::with_capacity(steps + 1);

    for k in 0..steps {
        let f = k as f32 / subdivisions as f32;
        samples.push(interp_position(points, f));
    }

    if let Some(&last) = points.last() {
        samples.push(last);
    }

    samples
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zigzag() -> Vec<Point3<f32>> {
        vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 2.0, 3.0),
            Point3::new(-4.0, 5.0, 6.5),
            Point3::new(7.25, -8.0, 9.0),
        ]
    }

    #[test]
    fn test_single_subdivision_hits_control_points() {
        let points = zigzag();
        let samples = interpolate(&points, 1);

        assert_eq!(samples.len(), points.len());
        for (k, sample) in samples.iter().enumerate() {
            assert_eq!(*sample, points[k]);
        }
    }

    #[test]
    fn test_sample_count() {
        let points = zigzag();
        for subdivisions in 1..6 {
            let samples = interpolate(&points, subdivisions);
            assert_eq!(samples.len(), (points.len() - 1) * subdivisions + 1);
            assert_eq!(samples.len(), sample_count(points.len(), subdivisions));
        }
    }

    #[test]
    fn test_midpoints() {
        let points = vec![Point3::new(0.0, 0.0, 0.0), Point3::new(0.0, 0.0, 10.0)];
        let samples = interpolate(&points, 4);

        assert_eq!(samples.len(), 5);
        assert_eq!(samples[1], Point3::new(0.0, 0.0, 2.5));
        assert_eq!(samples[2], Point3::new(0.0, 0.0, 5.0));
        assert_eq!(samples[3], Point3::new(0.0, 0.0, 7.5));
        assert_eq!(samples[4], points[1]);
    }

    #[test]
    fn test_interp_position_clamps() {
        let points = zigzag();
        assert_eq!(interp_position(&points, -2.0), points[0]);
        assert_eq!(interp_position(&points, 3.0), points[3]);
        assert_eq!(interp_position(&points, 42.5), points[3]);
    }

    #[test]
    #[should_panic]
    fn test_interp_position_empty_panics() {
        interp_position(&[], 0.0);
    }
}
