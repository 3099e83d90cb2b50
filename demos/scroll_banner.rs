//! # Scrolling Banner Demo
//!
//! Scrolls a banner back and forth across a simulated 8x32 matrix until
//! Ctrl+C, printing each frame to the terminal.
//!
//! Instead of the blocking `scroll_text`, this drives a `Scroll` one frame at
//! a time, the way an application with its own main loop would.
//!
//! ## Run it
//! ```sh
//! cargo run --example scroll_banner -- "Hello, world!"
//! ```

use neo_matrix_rs::preview::render_ascii;
use neo_matrix_rs::scroll::{Scroll, ScrollDirection};
use neo_matrix_rs::{
    HostStrip, MatrixConfig, MatrixSlot, is_running, pack_color, setup_signal_handler,
};
use std::thread;
use std::time::Duration;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_target(false).compact().init();

    let text = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "Rust on NeoPixels!".to_string());

    let mut slot = MatrixSlot::new();
    let matrix = slot.configure(MatrixConfig::new(8, 32), |_, count, _| {
        Ok(HostStrip::new(count))
    })?;
    let running = setup_signal_handler()?;

    let colors = [pack_color(255, 80, 0), pack_color(0, 160, 255)];
    let mut pass = 0usize;

    'banner: while is_running(&running) {
        let direction = if pass % 2 == 0 {
            ScrollDirection::Left
        } else {
            ScrollDirection::Right
        };
        let mut scroll = Scroll::new(&text, colors[pass % 2], direction, matrix.width());

        while let Some(xpos) = scroll.next_offset() {
            if !is_running(&running) {
                break 'banner;
            }
            // Preview the composed frame before `step` flushes and clears it.
            scroll.compose(matrix, xpos);
            print!("\x1b[2J\x1b[H{}", render_ascii(matrix.driver().pixels(), 32, 8));
            matrix.clear();

            scroll.step(matrix)?;
            thread::sleep(Duration::from_millis(40));
        }
        pass += 1;
    }

    matrix.clear();
    matrix.show()?;
    println!("\nShutting down cleanly after {pass} passes.");
    Ok(())
}
