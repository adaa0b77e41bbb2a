mod algebra;
mod app;
mod camera;
mod framebuffer;
mod material;
mod object;
mod renderer;
mod scene;
mod sphere;
mod tonemap;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, LevelFilter};

use crate::{algebra::Vec3, camera::Camera, framebuffer::Framebuffer, scene::Scene};

/// Interactive Whitted ray tracer over a scene of spheres.
#[derive(Parser)]
#[command(name = "rayview")]
#[command(about = "Interactive Whitted ray tracer")]
struct Args {
    /// JSON scene file; the built-in demo scene is used when omitted
    #[arg(short, long)]
    scene: Option<String>,

    /// Render a single frame to a PNG instead of opening a window
    #[arg(long)]
    headless: bool,

    /// Output path for --headless
    #[arg(short, long, default_value = "render.png")]
    output: String,

    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if args.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .init();

    let scene = match &args.scene {
        Some(path) => {
            info!("loading scene from {path}");
            Scene::load(path)?
        }
        None => Scene::default_scene(),
    };
    info!(
        "{} objects, {}x{}",
        scene.objects.len(),
        app::WIDTH,
        app::HEIGHT
    );

    if args.headless {
        render_once(&scene, &args.output)
    } else {
        app::run(&scene)
    }
}

/// One frame from the start pose, saved as a PNG.
fn render_once(scene: &Scene, output: &str) -> anyhow::Result<()> {
    let camera = Camera::new(Vec3(0.0, 2.0, 5.0));
    let mut frame = Framebuffer::new(app::WIDTH, app::HEIGHT);

    let bar = ProgressBar::new_spinner();
    bar.set_style(ProgressStyle::default_spinner().template("{spinner} rendering {elapsed_precise}")?);
    bar.enable_steady_tick(std::time::Duration::from_millis(100));

    renderer::render(&mut frame, &scene.objects, &camera);

    bar.finish_and_clear();
    frame.save_png(output)?;
    info!("saved {output}");
    Ok(())
}
