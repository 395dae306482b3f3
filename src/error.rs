//! Error types for tube generation.

use thiserror::Error;

/// Result type for tube generation operations.
pub type TubeResult<T> = Result<T, TubeError>;

/// Errors reported when tube inputs violate their preconditions.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TubeError {
    /// The centerline has too few control points.
    #[error("centerline needs at least {min} control points, got {actual}")]
    TooFewPoints {
        /// Minimum required points.
        min: usize,
        /// Actual point count.
        actual: usize,
    },

    /// A ring needs at least three vertices to enclose a volume.
    #[error("segments must be at least {min}, got {actual}")]
    TooFewSegments {
        /// Minimum required segments.
        min: usize,
        /// Actual segment count.
        actual: usize,
    },

    /// Interpolation density must be at least one step per control segment.
    #[error("subdivisions must be at least 1, got {0}")]
    InvalidSubdivisions(usize),

    /// Width is negative or not finite.
    #[error("invalid {which} width: {value}")]
    InvalidWidth {
        /// Which end of the tube the width belongs to.
        which: &'static str,
        /// Offending value.
        value: f32,
    },

    /// A control point has a NaN or infinite coordinate.
    #[error("control point {index} has a non-finite coordinate")]
    NonFinitePoint {
        /// Index of the offending control point.
        index: usize,
    },

    /// The mesh would not fit in memory or in a 32-bit index buffer.
    #[error(
        "mesh too large: {control_points} control points x {subdivisions} subdivisions x {segments} segments"
    )]
    MeshTooLarge {
        control_points: usize,
        subdivisions: usize,
        segments: usize,
    },
}

/// Errors from reading or writing Wavefront OBJ files.
#[derive(Debug, Error)]
pub enum ObjError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A vertex line could not be parsed.
    #[error("line {line}: {message}")]
    Parse {
        /// 1-based line number.
        line: usize,
        message: String,
    },
}
