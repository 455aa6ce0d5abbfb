//! Simple path tracer example.
//!
//! Renders a scene and saves it as a PNG.
//!
//! ```text
//! cargo run --release --example simple_render [scene.json] [output.png]
//! ```
//!
//! Without a scene file, renders a diffuse sphere resting on a large ground
//! sphere. Set `RUST_LOG=debug` to see per-worker progress.

use std::sync::Arc;

use anyhow::{Context, Result};
use lumen_renderer::{Camera, Color, HittableList, Lambertian, SceneDescription, Sphere, Vec3};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let scene_path = args.next();
    let output = args.next().unwrap_or_else(|| "output.png".to_string());

    let (mut camera, world) = match scene_path {
        Some(path) => SceneDescription::from_path(&path)
            .and_then(|scene| scene.build())
            .with_context(|| format!("Failed to load scene {path}"))?,
        None => default_scene(),
    };

    let image = camera.render_to_image(&world)?;

    image::save_buffer(
        &output,
        image.as_bytes(),
        image.width,
        image.height,
        image::ColorType::Rgba8,
    )
    .with_context(|| format!("Failed to save {output}"))?;

    println!("Saved {}x{} image to {}", image.width, image.height, output);
    Ok(())
}

fn default_scene() -> (Camera, HittableList) {
    let mut world = HittableList::new();

    // Ground
    world.add(Box::new(Sphere::new(
        Vec3::new(0.0, -100.5, -1.0),
        100.0,
        Arc::new(Lambertian::new(Color::rgb(0.5, 0.5, 0.5))),
    )));

    world.add(Box::new(Sphere::new(
        Vec3::new(0.0, 0.0, -1.0),
        0.5,
        Arc::new(Lambertian::new(Color::rgb(0.7, 0.3, 0.3))),
    )));

    let camera = Camera::new()
        .with_resolution(400, 16.0 / 9.0)
        .with_quality(100, 50);

    (camera, world)
}
