//! pack_walls.rs - convert a text `.walls` level into the binary format.
//!
//! USAGE:
//! ```bash
//! cargo run --bin pack_walls -- \
//!     --input maps/demo.walls \
//!     --output maps/demo.bin
//! ```

use anyhow::Context;
use clap::Parser;
use std::{fs, path::PathBuf};

use raycast_rs::wad::{encode_binary, load_level};

/// CLI options handled via `clap` derive.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Opts {
    /// Source level (text or binary)
    #[arg(long, value_name = "FILE")]
    input: PathBuf,

    /// Binary level to write
    #[arg(long, value_name = "FILE")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::parse();

    let level = load_level(&opts.input)
        .with_context(|| format!("reading {}", opts.input.display()))?;
    let bytes = encode_binary(&level)?;
    fs::write(&opts.output, &bytes)
        .with_context(|| format!("writing {}", opts.output.display()))?;

    println!(
        "{}: {} walls, {} bytes -> {}",
        level.name,
        level.len(),
        bytes.len(),
        opts.output.display()
    );
    Ok(())
}
