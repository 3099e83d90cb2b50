//! # Sprite Demo
//!
//! Layers bitmaps on a simulated 10x20 matrix and saves the result as a PNG:
//! a ground line, a sprite facing right, and the same sprite mirrored to face
//! left. Zero bits are transparent, so the sprites sit on top of the ground
//! without erasing it.
//!
//! ## Run it
//! ```sh
//! cargo run --example sprite -- sprite.png
//! ```

use clap::Parser;
use neo_matrix_rs::bitmap::{Bitmap, Orientation, draw_bitmap};
use neo_matrix_rs::preview::{render_ascii, write_png};
use neo_matrix_rs::{HostStrip, MatrixConfig, MatrixSlot, pack_color};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sprite")]
#[command(about = "Compose layered bitmaps and save them as a PNG")]
struct Args {
    /// Where to write the PNG
    #[arg(default_value = "sprite.png")]
    output: PathBuf,
}

/// A small bird, beak on the right.
const BIRD: [u64; 6] = [
    0b0011_0000,
    0b0111_1010,
    0b1111_1111,
    0b0111_1110,
    0b0010_0100,
    0b0110_0110,
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_target(false).compact().init();
    let args = Args::parse();

    let mut slot = MatrixSlot::new();
    let config = MatrixConfig {
        brightness: 255,
        ..MatrixConfig::new(10, 20)
    };
    let matrix = slot.configure(config, |_, count, _| Ok(HostStrip::new(count)))?;

    let ground = Bitmap::new(vec![u64::MAX >> 44; 2], 20, 2)?;
    draw_bitmap(matrix, &ground, pack_color(0, 120, 0), 0, 8, Orientation::Normal);

    let bird = Bitmap::new(BIRD.to_vec(), 8, BIRD.len())?;
    draw_bitmap(matrix, &bird, pack_color(255, 200, 0), 0, 3, Orientation::Normal);
    draw_bitmap(matrix, &bird, pack_color(255, 60, 60), 12, 3, Orientation::Mirrored);

    matrix.show()?;
    print!("{}", render_ascii(matrix.driver().pixels(), 20, 10));
    write_png(
        matrix.driver().pixels(),
        matrix.width(),
        matrix.height(),
        matrix.brightness().0,
        24,
        &args.output,
    )?;
    Ok(())
}
