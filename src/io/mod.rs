//! File formats for centerlines and generated meshes.

pub mod obj;

pub use obj::{load_polyline, read_polyline, save_obj, write_obj};
