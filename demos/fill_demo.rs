//! Foamshot demo — computes a shot for a cavity and prints its fill animation.
//!
//! Usage:
//! ```text
//! cargo run --example fill_demo                                  # Small preset, box mesh
//! cargo run --example fill_demo -- Medium:100x60x60              # preset label
//! cargo run --example fill_demo -- 40x30x25 cavity.stl 12        # custom size, STL mesh, steps
//! cargo run --example fill_demo -- Large --save data/results.csv # append to log
//! ```

use foamshot::animation::FillAnimator;
use foamshot::history::ResultsLog;
use foamshot::material::{defaults, CavityDimensions, CavityPreset, TargetDensity};
use foamshot::math::Point3;
use foamshot::mesh::CavityMesh;
use foamshot::operations::ratio::RatioEngine;
use foamshot::Result;

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for foamshot.
    // Override with RUST_LOG env var (e.g. RUST_LOG=foamshot=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("fill_demo=info".parse().unwrap_or_default())
        .add_directive("foamshot=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let save_path = take_flag_value(&mut args, "--save");

    let dimensions = match args.first() {
        Some(arg) => match arg.parse::<CavityPreset>() {
            Ok(preset) => preset.dimensions()?,
            Err(_) => arg.parse::<CavityDimensions>()?,
        },
        None => CavityPreset::Small.dimensions()?,
    };

    let result = RatioEngine::new().compute(
        &dimensions,
        TargetDensity::new(defaults::TARGET_DENSITY)?,
        &defaults::standard_shot(),
    )?;

    println!(
        "Foam Volume: {:.2} cm³ ({:.6} m³)",
        result.volume_cm3, result.volume_m3
    );
    println!(
        "Total Mass Required: {:.2} g ({:.2} kg)",
        result.total_mass_g, result.total_mass_kg
    );
    println!("Polyol required: {:.2} g", result.required_polyol);
    println!("c-Pentane required: {:.2} g", result.required_c_pentane);
    println!("MDI required: {:.2} g", result.required_mdi);
    println!(
        "Estimated Foam Thickening Time: {} sec (at 25°C)",
        result.thickening_time_sec
    );
    println!("Target Foam Density Reference: {} kg/m³", result.target_density);

    if let Some(path) = save_path {
        let log = ResultsLog::new(path);
        log.append(&result)?;
        println!("Results saved to {}", log.path().display());
    }

    let mesh = match args.get(1) {
        Some(path) => CavityMesh::read_stl(path)?,
        None => box_mesh(&dimensions)?,
    };
    let steps = args
        .get(2)
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(10);

    for frame in FillAnimator::new(steps).generate_frames(&mesh)? {
        let filled = frame
            .vertices
            .iter()
            .zip(mesh.vertices())
            .filter(|(out, orig)| out.z >= orig.z)
            .count();
        println!(
            "step {:>3}  fill {:>7.2} cm  {:>3}/{} vertices reached",
            frame.step,
            frame.fill_height,
            filled,
            mesh.vertex_count()
        );
    }

    Ok(())
}

fn take_flag_value(args: &mut Vec<String>, flag: &str) -> Option<String> {
    let pos = args.iter().position(|a| a == flag)?;
    args.remove(pos);
    (pos < args.len()).then(|| args.remove(pos))
}

/// Closed box with the cavity's dimensions, twelve triangles.
fn box_mesh(dimensions: &CavityDimensions) -> Result<CavityMesh> {
    let (l, w, h) = (dimensions.length(), dimensions.width(), dimensions.height());
    let vertices = vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(l, 0.0, 0.0),
        Point3::new(l, w, 0.0),
        Point3::new(0.0, w, 0.0),
        Point3::new(0.0, 0.0, h),
        Point3::new(l, 0.0, h),
        Point3::new(l, w, h),
        Point3::new(0.0, w, h),
    ];
    let faces = vec![
        [0, 2, 1],
        [0, 3, 2],
        [4, 5, 6],
        [4, 6, 7],
        [0, 1, 5],
        [0, 5, 4],
        [1, 2, 6],
        [1, 6, 5],
        [2, 3, 7],
        [2, 7, 6],
        [3, 0, 4],
        [3, 4, 7],
    ];
    CavityMesh::new(vertices, faces)
}
