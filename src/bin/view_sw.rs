use clap::Parser;
use minifb::{Key, KeyRepeat, MouseMode, Window, WindowOptions};
use std::{
    path::PathBuf,
    time::{Duration, Instant},
};

use raycast_rs::{
    engine::{Engine, EngineConfig},
    renderer::{RendererExt, Software},
    sim::{InputCmd, Player, TicRunner},
    wad::load_level,
    world::Level,
};

const H: usize = 500;
/// Mouse pixels per radian of turn.
const MOUSE_SENSITIVITY: f32 = 180.0;
/// Turn per frame for the arrow keys.
const KEY_TURN: f32 = 0.04;

#[derive(Parser, Debug)]
#[command(author, version, about = "Software raycaster viewer")]
struct Opts {
    /// Level file (text or binary); the built-in demo map if omitted
    #[arg(long, value_name = "FILE")]
    level: Option<PathBuf>,

    /// Rays per frame (= window width)
    #[arg(long, default_value_t = 500)]
    rays: usize,

    /// View radius in map units
    #[arg(long, default_value_t = 450.0)]
    radius: f32,
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::parse();

    let level = match &opts.level {
        Some(path) => load_level(path)?,
        None => Level::demo(),
    };
    println!("level: {} ({} walls)", level.name, level.len());

    let config = EngineConfig::for_view(opts.rays, opts.radius);
    let start = glam::vec2(250.0, 250.0);
    let mut player = Player::new(start, 0.0, config.view_radius);
    let mut engine = Engine::new(config, level, start, 0.0)?;
    let mut renderer = Software::default();
    let mut tics = TicRunner::new();

    let w = config.rays;
    let mut win = Window::new("Raycaster", w, H, WindowOptions::default())?;
    win.set_target_fps(60);
    win.set_cursor_visibility(false);

    // ────────────────── benchmarking state ──────────────────────────────
    let mut acc_time = Duration::ZERO; // cumulated render time
    let mut acc_frames = 0usize; // frames in the current window
    let mut last_print = Instant::now(); // when we printed last
    let mut last_tick = Instant::now();

    while win.is_open() && !win.is_key_down(Key::Escape) {
        let t0 = Instant::now(); // ┌─ frame timer start
        let dt = last_tick.elapsed().min(Duration::from_millis(100));
        last_tick = t0;

        /* --------------- input ------------------------------------------ */
        let mut cmd = InputCmd {
            forward: win.is_key_down(Key::W) || win.is_key_down(Key::Up),
            back_step: win.is_key_pressed(Key::S, KeyRepeat::No)
                || win.is_key_pressed(Key::Down, KeyRepeat::No),
            turn: 0.0,
        };
        if win.is_active() {
            if let Some((mx, _)) = win.get_mouse_pos(MouseMode::Discard) {
                // minifb cannot warp the cursor; steer by offset from centre
                let off = mx - w as f32 * 0.5;
                if off.abs() > w as f32 * 0.1 {
                    cmd.turn += off / MOUSE_SENSITIVITY * dt.as_secs_f32();
                }
            }
        }
        if win.is_key_down(Key::Left) || win.is_key_down(Key::A) {
            cmd.turn -= KEY_TURN;
        }
        if win.is_key_down(Key::Right) || win.is_key_down(Key::D) {
            cmd.turn += KEY_TURN;
        }

        tics.pump(&mut player, &cmd, |p| {
            engine.pos = p.pos;
            engine.angle = p.angle;
            engine.frame();
            engine.blocked()
        });

        /* --------------- frame ------------------------------------------ */
        engine.pos = player.pos;
        engine.angle = player.angle;
        engine.frame();

        let mut submit_err = None;
        renderer.draw_frame(
            w,
            H,
            engine.hits(),
            engine.fan().wall_constants(),
            |fb, fw, fh| {
                acc_time += t0.elapsed();
                acc_frames += 1;
                submit_err = win.update_with_buffer(fb, fw, fh).err();
            },
        );
        if let Some(e) = submit_err {
            return Err(e.into());
        }

        if last_print.elapsed() >= Duration::from_secs(3) {
            let avg_ms = acc_time.as_secs_f64() * 1000.0 / acc_frames as f64;
            let fps = 1000.0 / avg_ms;
            println!(
                "avg render: {:.2} ms  ({:.1} FPS)  candidates: {}",
                avg_ms,
                fps,
                engine.candidates().len()
            );
            acc_time = Duration::ZERO;
            acc_frames = 0;
            last_print = Instant::now();
        }
    }
    Ok(())
}
