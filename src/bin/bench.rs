//! Headless frame benchmark.
//!
//! ```bash
//! cargo run --release --bin bench -- --frames 3000
//! ```

use clap::Parser;
use std::{path::PathBuf, time::Instant};

use raycast_rs::{
    engine::{Engine, EngineConfig},
    wad::load_level,
    world::Level,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Spin the view and time the ray sweep")]
struct Opts {
    /// Level file (text or binary); the built-in demo map if omitted
    #[arg(long, value_name = "FILE")]
    level: Option<PathBuf>,

    #[arg(long, default_value_t = 3000)]
    frames: usize,

    #[arg(long, default_value_t = 500)]
    rays: usize,

    /// View radius in map units
    #[arg(long, default_value_t = 450.0)]
    radius: f32,

    /// Disable the move-to-front candidate ordering
    #[arg(long)]
    no_reorder: bool,
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::parse();

    let level = match &opts.level {
        Some(path) => load_level(path)?,
        None => Level::demo(),
    };
    let config = EngineConfig::for_view(opts.rays, opts.radius);
    let mut engine = Engine::new(config, level, glam::vec2(250.0, 250.0), 0.0)?;
    engine.set_reorder(!opts.no_reorder);

    let mut hits = 0usize;
    let t0 = Instant::now();
    for _ in 0..opts.frames {
        engine.angle += 1.0 / 500.0;
        hits += engine.frame().iter().flatten().count();
    }
    let elapsed = t0.elapsed();

    let avg_ms = elapsed.as_secs_f64() * 1000.0 / opts.frames.max(1) as f64;
    println!(
        "{} frames x {} rays: {:.3} ms/frame, {} hits (reorder {})",
        opts.frames,
        opts.rays,
        avg_ms,
        hits,
        if opts.no_reorder { "off" } else { "on" }
    );
    Ok(())
}
