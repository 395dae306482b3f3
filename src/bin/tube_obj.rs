//! Generate a tube mesh from a centerline and write it as OBJ.
//!
//! ```text
//! tube-obj --input cable.json --output cable.obj
//! tube-obj --input path.obj --segments 16 --start-width 0.2 --end-width 0.05
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;

use tuberender::gfx::geometry::{TubeDescription, TubeProfile};
use tuberender::io::{load_polyline, save_obj};
use tuberender::tube::TubeRenderer;

/// command line arguments for tube generation
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// centerline to sweep: a JSON tube description or an OBJ polyline
    #[arg(long, short)]
    input: PathBuf,

    /// where to write the generated mesh
    #[arg(long, short, default_value = "tube.obj")]
    output: PathBuf,

    /// interpolated points per control segment
    #[arg(long)]
    subdivisions: Option<usize>,

    /// vertices per ring
    #[arg(long)]
    segments: Option<usize>,

    /// radius at the first control point
    #[arg(long)]
    start_width: Option<f32>,

    /// radius at the last control point
    #[arg(long)]
    end_width: Option<f32>,

    /// texture coordinate scale around the tube
    #[arg(long)]
    uv_scale_u: Option<f32>,

    /// texture coordinate scale along the tube
    #[arg(long)]
    uv_scale_v: Option<f32>,

    /// render the interior surface (true) or the exterior (false)
    #[arg(long)]
    inside: Option<bool>,

    /// print a sphere per control point
    #[arg(long, default_value_t = false)]
    show_nodes: bool,
}

impl CliArgs {
    /// Apply command line overrides on top of `profile`.
    fn profile(&self, mut profile: TubeProfile) -> TubeProfile {
        if let Some(subdivisions) = self.subdivisions {
            profile.subdivisions = subdivisions;
        }
        if let Some(segments) = self.segments {
            profile.segments = segments;
        }
        if let Some(start_width) = self.start_width {
            profile.start_width = start_width;
        }
        if let Some(end_width) = self.end_width {
            profile.end_width = end_width;
        }
        if let Some(u) = self.uv_scale_u {
            profile.uv_scale[0] = u;
        }
        if let Some(v) = self.uv_scale_v {
            profile.uv_scale[1] = v;
        }
        if let Some(inside) = self.inside {
            profile.inside = inside;
        }
        profile
    }
}

fn load_description(path: &Path) -> Result<TubeDescription> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("json") => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("failed to parse {}", path.display()))
        }
        Some("obj") => {
            let points = load_polyline(path)
                .with_context(|| format!("failed to read polyline {}", path.display()))?;
            Ok(TubeDescription::new(&points, TubeProfile::default()))
        }
        _ => bail!("unsupported input {}: expected .json or .obj", path.display()),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = CliArgs::parse();
    let description = load_description(&args.input)?;
    let profile = args.profile(description.profile);

    let mut tube = TubeRenderer::new(description.control_points(), profile)
        .with_nodes_shown(args.show_nodes);
    let mut mesh = tuberender::gfx::geometry::MeshBuffers::new();

    tube.initialize(&mut mesh)
        .with_context(|| format!("cannot build a tube from {}", args.input.display()))?;

    for sphere in tube.node_spheres() {
        println!(
            "node ({:.3}, {:.3}, {:.3}) radius {:.3}",
            sphere.center.x, sphere.center.y, sphere.center.z, sphere.radius
        );
    }

    save_obj(&mesh, &args.output)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliArgs {
        let mut argv = vec!["tube-obj", "--input", "cable.json"];
        argv.extend_from_slice(args);
        CliArgs::parse_from(argv)
    }

    #[test]
    fn test_overrides_replace_description_values() {
        let described = TubeProfile::default().with_segments(4).inside(true);
        let profile = parse(&["--segments", "12", "--inside", "false"]).profile(described);

        assert_eq!(profile.segments, 12);
        assert!(!profile.inside);
        assert_eq!(profile.subdivisions, described.subdivisions);
    }

    #[test]
    fn test_missing_flags_keep_description_values() {
        let described = TubeProfile::default().with_widths(0.2, 0.05).inside(true);
        let profile = parse(&[]).profile(described);
        assert_eq!(profile, described);

        let profile = parse(&["--inside", "true"]).profile(TubeProfile::default());
        assert!(profile.inside);
    }
}
