//! Render a few diffuse spheres under a sky gradient.
//!
//! Usage: `cargo run --example render_spheres --release -- [config.json] [output_dir]`
//!
//! Writes `spheres.bmp` and `spheres.png` into the output directory
//! (default `output/`).
//!
//! The scene is Y-up to match the [`Zenith`] sky, which blends on the y
//! component of escaping rays.

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::Arc;
use strata_renderer::{
    default_pinhole, map_to_image, save_bmp, Brdf, Color, Hemisphere, Lambertian, RenderConfig,
    Sphere, UVec2, Vec3, World, Zenith,
};

const WIDTH: u32 = 400;
const HEIGHT: u32 = 300;

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config {}", path))?;
            RenderConfig::from_json(&json)?
        }
        None => RenderConfig::default(),
    };
    let output_dir = PathBuf::from(args.next().unwrap_or_else(|| "output".to_string()));
    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;

    log::info!("Config: {:?}", config);

    let mut rng = config.build_rng();
    let sampler = config.build_sampler(&mut rng);

    let mut world = build_scene(&config)?;
    let view_point = Vec3::new(0.0, 1.5, 8.0);
    let look_at = Vec3::new(0.0, 0.8, 0.0);
    world
        .set_camera(default_pinhole(
            UVec2::new(WIDTH, HEIGHT),
            view_point,
            look_at - view_point,
            50f32.to_radians(),
            Vec3::Y,
        ))
        .set_sampler(sampler)
        .set_ray_tracer(Hemisphere::new(config.max_steps))
        .set_sky(Zenith::new(
            Color::new(0.6, 0.75, 1.0),
            Color::new(0.9, 0.9, 0.85),
        ));

    world.render()?;

    let image = world.image().context("World has no camera")?;
    let display = map_to_image(image);
    save_bmp(output_dir.join("spheres.bmp"), &display)?;
    display.save_image(output_dir.join("spheres.png"))?;

    Ok(())
}

fn build_scene(config: &RenderConfig) -> Result<World> {
    let diffuse = |value: f32, color: Color| -> Arc<dyn Brdf> {
        Arc::new(Lambertian::new(value, color).with_exponent(config.hemisphere_exponent))
    };

    let mut world = World::new();

    // Ground
    world.add_object(Sphere::new(
        Vec3::new(0.0, -1000.0, 0.0),
        1000.0,
        Some(diffuse(0.8, Color::new(0.5, 0.5, 0.5))),
    )?);

    for (i, color) in [
        Color::new(0.8, 0.3, 0.3),
        Color::new(0.3, 0.8, 0.3),
        Color::new(0.3, 0.3, 0.8),
    ]
    .into_iter()
    .enumerate()
    {
        let x = (i as f32 - 1.0) * 2.2;
        world.add_object(Sphere::new(
            Vec3::new(x, 1.0, 0.0),
            1.0,
            Some(diffuse(0.9, color)),
        )?);
    }

    Ok(world)
}
