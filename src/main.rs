use anyhow::Context;
use clap::Parser;
use sdf_march::demo::{self, DemoScene};
use sdf_march::{render_image, LightMode, MarchConfig, RenderSettings, Screen, ShadeConfig};
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, default_value_t = 800)]
    width: u32,

    #[arg(long, default_value_t = 600)]
    height: u32,

    #[arg(short, long, value_enum, default_value_t = DemoScene::RayMarcher)]
    scene: DemoScene,

    #[arg(short, long, default_value_t = MarchConfig::default().epsilon)]
    epsilon: f64,

    #[arg(short, long, default_value_t = MarchConfig::default().max_steps)]
    max_steps: u32,

    /// Give up on rays once they have travelled this far.
    #[arg(long)]
    max_distance: Option<f64>,

    #[arg(short, long, value_enum, default_value_t = LightMode::Clamped)]
    light: LightMode,

    /// Vertical field of view in degrees.
    #[arg(short, long)]
    fov: Option<f64>,

    #[arg(short, long, default_value = "out.png")]
    out: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let args = Args::parse();

    let scene = demo::build(args.scene).context("building scene")?;
    let mut camera_desc = demo::camera_description();
    camera_desc.fov = args.fov;
    let camera = sdf_march::build_camera(&camera_desc).context("building camera")?;
    let screen = Screen::new(args.width, args.height)?;
    let settings = RenderSettings {
        march: MarchConfig {
            epsilon: args.epsilon,
            max_steps: args.max_steps,
            max_distance: args.max_distance,
        },
        shade: ShadeConfig { light: args.light },
    };

    info!(scene = ?args.scene, width = args.width, height = args.height, "rendering image");
    let start = Instant::now();
    let img = render_image(&scene, &camera, &screen, &settings);
    info!("render took {} s", start.elapsed().as_secs_f32());

    img.save(&args.out)
        .with_context(|| format!("writing {}", args.out))?;
    info!(out = %args.out, "saved");
    Ok(())
}
