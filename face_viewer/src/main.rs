pub mod scene;
pub mod swatch;
pub mod texture;

use std::path::{Path, PathBuf};

use clap::Parser;
use glam::DVec3;
use shading::{shade_faces, Color, SceneState, ShadeRequest};
use tracing_subscriber::EnvFilter;

use scene::{Scene, SceneFace, SceneFile};
use swatch::Swatch;

/// Predict the color every face of a scene is displayed with.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Scene snapshot (JSON)
    scene: PathBuf,

    /// Write a PNG swatch with one tile per face
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(long, default_value_t = 32)]
    tile_size: u32,

    #[arg(long, default_value_t = 8)]
    columns: u32,

    /// Force sun shading on
    #[arg(long, conflicts_with = "no_sun")]
    sun: bool,

    /// Force sun shading off (camera headlight)
    #[arg(long)]
    no_sun: bool,

    /// Sun light percentage
    #[arg(long)]
    light: Option<f64>,

    /// Sun dark percentage
    #[arg(long)]
    dark: Option<f64>,

    /// Camera eye as x,y,z
    #[arg(long, value_parser = parse_vector)]
    eye: Option<DVec3>,

    /// Camera target as x,y,z
    #[arg(long, value_parser = parse_vector)]
    target: Option<DVec3>,

    /// Worker threads, defaults to one per core
    #[arg(long)]
    threads: Option<usize>,
}

impl Args {
    /// Layer the command line over the scene file's view settings.
    fn apply_overrides(&self, state: &mut SceneState) {
        let si = &mut state.view.shadow_info;
        if self.sun {
            si.use_sun_for_all_shading = true;
        }
        if self.no_sun {
            si.use_sun_for_all_shading = false;
            si.display_shadows = false;
        }
        if let Some(light) = self.light {
            si.light = light;
        }
        if let Some(dark) = self.dark {
            si.dark = dark;
        }

        let camera = &mut state.view.camera;
        if let Some(eye) = self.eye {
            camera.eye = eye;
        }
        if let Some(target) = self.target {
            camera.target = target;
        }
    }
}

fn parse_vector(s: &str) -> Result<DVec3, String> {
    let parts = s
        .split(',')
        .map(|p| p.trim().parse::<f64>().map_err(|e| format!("{:?}: {}", p, e)))
        .collect::<Result<Vec<_>, _>>()?;
    match parts[..] {
        [x, y, z] => Ok(DVec3::new(x, y, z)),
        _ => Err(format!("expected x,y,z, got {} components", parts.len())),
    }
}

struct FaceReport<'a> {
    name: &'a str,
    base: Color,
    shaded: Color,
    back: bool,
    previewed: bool,
}

fn shade_scene<'a>(faces: &'a [SceneFace], state: &SceneState) -> Vec<FaceReport<'a>> {
    let requests: Vec<ShadeRequest> = faces.iter().map(SceneFace::request).collect();
    faces
        .iter()
        .zip(shade_faces(&requests, state))
        .map(|(f, shaded)| FaceReport {
            name: &f.name,
            base: shaded.base,
            shaded: shaded.color,
            back: shaded.back,
            previewed: f.preview_plane.is_some(),
        })
        .collect()
}

fn load_scene(path: &Path) -> anyhow::Result<Scene> {
    let base_dir = path.parent().unwrap_or(Path::new("."));
    let scene = SceneFile::read(path)?.load(base_dir)?;
    tracing::info!(
        scene = %path.display(),
        faces = scene.faces.len(),
        sun = scene.state.view.shadow_info.sun_for_shading(),
        "loaded scene"
    );
    Ok(scene)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
    }

    let mut scene = load_scene(&args.scene)?;
    args.apply_overrides(&mut scene.state);

    let start = std::time::Instant::now();
    let reports = shade_scene(&scene.faces, &scene.state);
    tracing::debug!(elapsed = ?start.elapsed(), "shaded scene");

    for r in &reports {
        println!(
            "{:<24} {} -> {}  {}{}",
            r.name,
            r.base,
            r.shaded,
            if r.back { "back" } else { "front" },
            if r.previewed { " (preview)" } else { "" }
        );
    }

    if let Some(output) = &args.output {
        let mut swatch = Swatch::new(reports.len(), args.tile_size, args.columns)?;
        for (index, r) in reports.iter().enumerate() {
            swatch.draw_tile(index, r.base, r.shaded);
        }
        swatch.save(output)?;
        tracing::info!(
            path = %output.display(),
            width = swatch.width(),
            height = swatch.height(),
            "wrote swatch"
        );
    }

    Ok(())
}
