//! # Wavefront OBJ
//!
//! Writes generated tube meshes as OBJ and reads centerlines from the `v`
//! lines of an OBJ polyline.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use cgmath::Point3;

use crate::error::ObjError;
use crate::gfx::geometry::MeshBuffers;

/// Write `mesh` as a single OBJ object.
///
/// Positions, texture coordinates, and normals share one index per vertex,
/// so every face corner is written as `v/v/v`.
pub fn write_obj<W: Write>(mesh: &MeshBuffers, name: &str, writer: &mut W) -> Result<(), ObjError> {
    writeln!(writer, "o {}", name)?;

    for v in &mesh.vertices {
        writeln!(writer, "v {} {} {}", v[0], v[1], v[2])?;
    }
    for vt in &mesh.tex_coords {
        writeln!(writer, "vt {} {}", vt[0], vt[1])?;
    }
    for vn in &mesh.normals {
        writeln!(writer, "vn {} {} {}", vn[0], vn[1], vn[2])?;
    }

    for tri in mesh.indices.chunks_exact(3) {
        let (a, b, c) = (tri[0] + 1, tri[1] + 1, tri[2] + 1);
        writeln!(writer, "f {a}/{a}/{a} {b}/{b}/{b} {c}/{c}/{c}")?;
    }

    Ok(())
}

/// Write `mesh` to an OBJ file at `path`.
pub fn save_obj<P: AsRef<Path>>(mesh: &MeshBuffers, path: P) -> Result<(), ObjError> {
    let path = path.as_ref();
    let name = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("tube");

    let mut writer = BufWriter::new(File::create(path)?);
    write_obj(mesh, name, &mut writer)?;
    writer.flush()?;

    log::info!(
        "wrote {} ({} vertices, {} triangles)",
        path.display(),
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    Ok(())
}

/// Read control points from the `v` lines of an OBJ polyline.
///
/// Every other line is ignored, so the file may also contain `l` elements.
pub fn read_polyline<R: BufRead>(reader: R) -> Result<Vec<Point3<f32>>, ObjError> {
    let mut points = Vec::new();

    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        let mut fields = line.split_whitespace();
        if fields.next() != Some("v") {
            continue;
        }

        let mut coords = [0.0f32; 3];
        for coord in coords.iter_mut() {
            let field = fields.next().ok_or_else(|| ObjError::Parse {
                line: number + 1,
                message: "vertex needs three coordinates".to_string(),
            })?;
            *coord = field.parse().map_err(|err| ObjError::Parse {
                line: number + 1,
                message: format!("bad coordinate {:?}: {}", field, err),
            })?;
        }

        points.push(Point3::new(coords[0], coords[1], coords[2]));
    }

    Ok(points)
}

/// Read control points from an OBJ polyline file.
pub fn load_polyline<P: AsRef<Path>>(path: P) -> Result<Vec<Point3<f32>>, ObjError> {
    let file = File::open(path.as_ref())?;
    let points = read_polyline(BufReader::new(file))?;
    log::debug!("read {} control points from {}", points.len(), path.as_ref().display());
    Ok(points)
}
