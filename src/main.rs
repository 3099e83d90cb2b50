//! NeoPixel matrix simulator
//!
//! Drives a serpentine-wired matrix held in memory and prints every flushed
//! frame to the terminal, so text scrolls and bitmaps can be checked without
//! hardware attached.
//!
//! ## Usage
//! ```sh
//! neo-matrix-rs --width 32 scroll "Hello!" --delay 60
//! neo-matrix-rs bitmap 0b0110 0b1111 0b0110 --bitmap-width 4 --x 3 --png out.png
//! neo-matrix-rs glyph '@'
//! RUST_LOG=debug neo-matrix-rs --config matrix.json scroll "debug run"
//! ```

use clap::{Parser, Subcommand};
use neo_matrix_rs::bitmap::{Bitmap, Orientation, draw_bitmap};
use neo_matrix_rs::glyph::{GLYPH_HEIGHT, GLYPH_WIDTH};
use neo_matrix_rs::preview::{render_ascii, write_png};
use neo_matrix_rs::scroll::{FrameDelay, Scroll, ScrollDirection, ScrollOutcome, scroll_text_while};
use neo_matrix_rs::{
    Brightness, Color, HostStrip, MatrixConfig, MatrixError, MatrixSlot, PackedColor,
    StripDriver, setup_signal_handler,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// NeoPixel matrix simulator
#[derive(Parser)]
#[command(name = "neo-matrix-rs")]
#[command(about = "Render text and bitmaps onto a simulated serpentine LED matrix")]
#[command(version)]
struct Args {
    /// JSON file with height, width, color_mode, pin and brightness
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of rows on the matrix (overrides the config file)
    #[arg(long)]
    height: Option<usize>,

    /// Number of columns on the matrix (overrides the config file)
    #[arg(long)]
    width: Option<usize>,

    /// Strip brightness, 0-255 (overrides the config file)
    #[arg(long)]
    brightness: Option<i64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scroll text across the matrix
    Scroll {
        text: String,

        /// Milliseconds between frames (0-2000)
        #[arg(long, default_value = "100")]
        delay: u64,

        /// Text color as r,g,b
        #[arg(long, default_value = "255,255,255", value_parser = parse_rgb)]
        color: Color,

        /// `left` or `right`
        #[arg(long, default_value = "left")]
        direction: ScrollDirection,
    },

    /// Draw a bitmap given as one number per row (decimal, 0x.. or 0b..)
    Bitmap {
        #[arg(required = true, value_parser = parse_row)]
        rows: Vec<u64>,

        /// Columns encoded in each row
        #[arg(long)]
        bitmap_width: usize,

        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        x: i64,

        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        y: i64,

        /// Mirror the bitmap horizontally
        #[arg(long)]
        mirror: bool,

        #[arg(long, default_value = "255,0,0", value_parser = parse_rgb)]
        color: Color,

        /// Also write the frame to this PNG file
        #[arg(long)]
        png: Option<PathBuf>,
    },

    /// Print the font glyph for a character
    Glyph { ch: char },
}

fn parse_rgb(s: &str) -> Result<Color, String> {
    let channels: Vec<u8> = s
        .split(',')
        .map(|part| part.trim().parse::<u8>())
        .collect::<Result<_, _>>()
        .map_err(|e| format!("bad color `{s}`: {e}"))?;
    match channels.as_slice() {
        &[r, g, b] => Ok(Color::new(r, g, b)),
        _ => Err(format!("bad color `{s}`: expected r,g,b")),
    }
}

fn parse_row(s: &str) -> Result<u64, String> {
    let parsed = if let Some(bits) = s.strip_prefix("0b") {
        u64::from_str_radix(&bits.replace('_', ""), 2)
    } else if let Some(hex) = s.strip_prefix("0x") {
        u64::from_str_radix(&hex.replace('_', ""), 16)
    } else {
        s.parse()
    };
    parsed.map_err(|e| format!("bad bitmap row `{s}`: {e}"))
}

/// Host strip that prints each flushed frame to stdout.
struct TerminalStrip {
    strip: HostStrip,
    width: usize,
    height: usize,
}

impl StripDriver for TerminalStrip {
    fn len(&self) -> usize {
        self.strip.len()
    }

    fn set_pixel_color(&mut self, index: usize, color: PackedColor) {
        self.strip.set_pixel_color(index, color);
    }

    fn show(&mut self) -> neo_matrix_rs::Result<()> {
        // Redraw in place after the first frame.
        if self.strip.show_count() > 0 {
            print!("\x1b[{}A", self.height);
        }
        print!("{}", render_ascii(self.strip.pixels(), self.width, self.height));
        self.strip.show()
    }

    fn clear(&mut self) {
        self.strip.clear();
    }

    fn set_brightness(&mut self, level: u8) {
        self.strip.set_brightness(level);
    }
}

fn load_config(args: &Args) -> Result<MatrixConfig, MatrixError> {
    let mut config = match &args.config {
        Some(path) => MatrixConfig::from_json_file(path)?,
        None => MatrixConfig::default(),
    };
    if let Some(height) = args.height {
        config.height = height;
    }
    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(level) = args.brightness {
        config.brightness = Brightness::try_from(level)?.0;
    }
    Ok(config)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so frames on stdout stay readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let args = Args::parse();
    let mut config = load_config(&args)?;
    if matches!(args.command, Command::Glyph { .. }) {
        config.height = GLYPH_HEIGHT;
        config.width = GLYPH_WIDTH;
    }

    tracing::info!("neo-matrix-rs v{}", env!("CARGO_PKG_VERSION"));

    let mut slot = MatrixSlot::new();
    let matrix = slot.configure(config, |pin, count, mode| {
        tracing::debug!("Simulating {} pixel {:?} strip on pin {}", count, mode, pin);
        Ok(TerminalStrip {
            strip: HostStrip::new(count),
            width: config.width,
            height: config.height,
        })
    })?;

    match args.command {
        Command::Scroll {
            text,
            delay,
            color,
            direction,
        } => {
            let delay = FrameDelay::try_from(delay)?;
            let running = setup_signal_handler()?;
            let outcome =
                scroll_text_while(matrix, &text, delay, color.pack(), direction, &running)?;
            if let ScrollOutcome::Cancelled(frames) = outcome {
                println!("\nStopped after {frames} frames.");
            }
        }

        Command::Bitmap {
            rows,
            bitmap_width,
            x,
            y,
            mirror,
            color,
            png,
        } => {
            let height = rows.len();
            let bitmap = Bitmap::new(rows, bitmap_width, height)?;
            draw_bitmap(
                matrix,
                &bitmap,
                color.pack(),
                x,
                y,
                Orientation::from_mirror(mirror),
            );
            matrix.show()?;
            if let Some(path) = png {
                write_png(
                    matrix.driver().strip.pixels(),
                    matrix.width(),
                    matrix.height(),
                    matrix.brightness().0,
                    16,
                    &path,
                )?;
            }
        }

        Command::Glyph { ch } => {
            let scroll = Scroll::new(
                &ch.to_string(),
                PackedColor(0xFFFFFF),
                ScrollDirection::Left,
                matrix.width(),
            );
            scroll.compose(matrix, 0);
            matrix.show()?;
        }
    }

    Ok(())
}
