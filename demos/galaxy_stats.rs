//! # Galaxy Stats
//!
//! Generates a galaxy, walks it through a color-only edit and a structural
//! edit, and prints what each step produced.
//!
//! ## What This Demonstrates
//!
//! - Loading parameters from a JSON preset (or using the defaults)
//! - Seeded, reproducible generation
//! - Recoloring without touching positions
//! - How parameter changes are routed (`Update`)
//!
//! Run with: `cargo run --example galaxy_stats -- [preset.json] [seed]`
//! Set `RUST_LOG=debug` to see the library's log output.

use galaxy_field::prelude::*;
use log::info;

fn summarize(label: &str, field: &GalaxyField) {
    let positions = field.positions_vec3();
    let (min, max) = positions.iter().fold(
        (Vec3::splat(f32::MAX), Vec3::splat(f32::MIN)),
        |(min, max), p| (min.min(*p), max.max(*p)),
    );
    let mean_distance =
        field.points.iter().map(|p| p.distance).sum::<f32>() / field.len().max(1) as f32;

    println!("--- {} ---", label);
    println!("Points:        {}", field.len());
    println!("Bounds min:    {:.3} {:.3} {:.3}", min.x, min.y, min.z);
    println!("Bounds max:    {:.3} {:.3} {:.3}", max.x, max.y, max.z);
    println!("Mean distance: {:.3}", mean_distance);
    println!("First color:   {}", field.color(0));
    println!("Buffer bytes:  {}", field.position_bytes().len() + field.color_bytes().len());
    println!();
}

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let params = match args.next() {
        Some(path) => GalaxyParams::load(&path)?,
        None => GalaxyParams::default(),
    }
    .clamped();
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(42);

    println!("=== Galaxy Stats ===");
    println!("{}", params.to_json()?);
    println!("Seed: {}", seed);
    println!();

    let mut galaxy = Galaxy::with_seed(params, seed)?;
    summarize("Generated", galaxy.field());

    let swapped = params.with_colors(params.outside_color, params.inside_color);
    let update = galaxy.update(swapped)?;
    info!("Color swap routed as {:?}", update);
    summarize("Colors swapped", galaxy.field());

    let twisted = swapped.with_spiral_angle(params.spiral_angle * 2.0).clamped();
    let update = galaxy.update(twisted)?;
    info!("Spiral change routed as {:?}", update);
    summarize("Spiral doubled", galaxy.field());

    Ok(())
}
