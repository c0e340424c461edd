//! Command-line entry point for the `hilbert-pbm` tool.
//!
//! Generates a Hilbert curve of the requested order and writes its
//! rasterization to `hilbert.pbm` in the working directory.

use std::{
    fs::File,
    io::{BufWriter, Write},
    process,
};

use anyhow::{Context, Result};
use clap::Parser;
use hilbertgen::{
    curve::{HilbertCurve, MAX_ORDER, MIN_ORDER},
    raster,
};

/// Order used when no argument is given or the argument is out of range.
const DEFAULT_ORDER: u32 = 10;

/// Output file, overwritten unconditionally.
const OUTPUT_PATH: &str = "hilbert.pbm";

#[derive(Parser)]
#[command(name = "hilbert-pbm")]
#[command(version = env!("CARGO_PKG_VERSION"))]
/// Render a Hilbert curve of a given order into a binary PBM image.
struct Cli {
    /// Curve order (1-13); out-of-range or non-numeric values fall back to
    /// the default.
    #[arg(allow_negative_numbers = true)]
    order: Option<String>,
}

/// Resolve the curve order from the optional argument.
///
/// Values that fail to parse or fall outside the supported range are
/// silently replaced with [`DEFAULT_ORDER`] rather than reported.
fn resolve_order(arg: Option<&str>) -> u32 {
    arg.and_then(|raw| raw.trim().parse::<i64>().ok())
        .filter(|&v| (i64::from(MIN_ORDER)..=i64::from(MAX_ORDER)).contains(&v))
        .map_or(DEFAULT_ORDER, |v| v as u32)
}

/// Run the generate → rasterize → serialize pipeline.
fn run(order: u32) -> Result<()> {
    println!("the first argument selects the curve order ({MIN_ORDER}-{MAX_ORDER})");
    println!("selected hilbert curve of order {order}, generating ...");

    let curve = HilbertCurve::generate(order)?;
    println!("allocated {}B buffer for the curve", curve.packed_len());

    let image = raster::draw_curve(&curve);
    println!("allocated {}B buffer for the image", image.byte_len());

    let file =
        File::create(OUTPUT_PATH).with_context(|| format!("failed to create {OUTPUT_PATH}"))?;
    let mut out = BufWriter::new(file);
    image
        .write_pbm(&mut out)
        .with_context(|| format!("failed to write {OUTPUT_PATH}"))?;
    out.flush()
        .with_context(|| format!("failed to write {OUTPUT_PATH}"))?;

    println!(
        "wrote {OUTPUT_PATH} ({}x{} pixels)",
        image.width(),
        image.height()
    );
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let order = resolve_order(cli.order.as_deref());

    if let Err(e) = run(order) {
        eprintln!("{e:#}");
        process::exit(1);
    }
}
