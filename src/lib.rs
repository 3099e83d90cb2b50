//! Text scrolling and bitmap rendering for serpentine-wired NeoPixel matrices.
//!
//! This module provides the pieces every other module shares:
//! - Packed colors and the `pack_color` helper
//! - Validated brightness values
//! - Signal handling for clean shutdown of long-running loops
//!
//! Rendering lives in the submodules: [`matrix`] owns the surface,
//! [`bitmap`] blits bitmaps, [`scroll`] animates text using the
//! [`glyph`] table, and [`preview`] turns a host strip back into a picture.

pub mod addressing;
pub mod bitmap;
pub mod config;
pub mod driver;
pub mod error;
pub mod glyph;
pub mod matrix;
pub mod preview;
pub mod scroll;

pub use config::MatrixConfig;
pub use driver::{ColorMode, HostStrip, SmartLedsStrip, StripDriver};
pub use error::{MatrixError, Result};
pub use matrix::{Matrix, MatrixSlot};

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

// ── Color ──────────────────────────────────────────────────────────

/// A color packed into one integer: red in bits 16-23, green in 8-15,
/// blue in 0-7.
///
/// Rendering code never looks inside; it only forwards the value to the
/// strip driver.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PackedColor(pub u32);

impl PackedColor {
    pub const OFF: Self = Self(0);

    pub fn is_off(self) -> bool {
        self.0 & 0x00FF_FFFF == 0
    }
}

/// Separate channel view of a color, used at the driver and preview edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn pack(self) -> PackedColor {
        pack_color(self.r, self.g, self.b)
    }

    /// Scale each channel by `brightness / 256`, the way NeoPixel libraries do.
    ///
    /// A brightness of 255 is treated as full scale.
    pub fn scale(self, brightness: u8) -> Self {
        if brightness == u8::MAX {
            return self;
        }
        let scale = |channel: u8| ((u16::from(channel) * u16::from(brightness)) >> 8) as u8;
        Self {
            r: scale(self.r),
            g: scale(self.g),
            b: scale(self.b),
        }
    }
}

impl From<PackedColor> for Color {
    fn from(packed: PackedColor) -> Self {
        let [_, r, g, b] = packed.0.to_be_bytes();
        Self { r, g, b }
    }
}

impl From<Color> for smart_leds::RGB8 {
    fn from(c: Color) -> Self {
        smart_leds::RGB8::new(c.r, c.g, c.b)
    }
}

/// Pack three 8-bit channels into a [`PackedColor`].
pub fn pack_color(r: u8, g: u8, b: u8) -> PackedColor {
    PackedColor((u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b))
}

// ── Brightness ─────────────────────────────────────────────────────

/// Global strip brightness, 0 (off) to 255 (full).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Brightness(pub u8);

impl Brightness {
    /// Brightness applied when a matrix is first configured.
    pub const DEFAULT: Self = Self(32);
}

impl Default for Brightness {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// # Rust concept: TryFrom
/// `TryFrom` is the fallible twin of `From`. Callers holding a wide integer
/// write `Brightness::try_from(level)?` and get an `InvalidArgument` error
/// for anything outside 0-255, so code past this point never re-checks.
impl TryFrom<i64> for Brightness {
    type Error = MatrixError;

    fn try_from(level: i64) -> Result<Self> {
        u8::try_from(level)
            .map(Self)
            .map_err(|_| MatrixError::invalid("brightness", format!("must be 0-255, got {level}")))
    }
}

// ── Shutdown ───────────────────────────────────────────────────────

/// Set up a Ctrl+C handler that sets `running` to false.
///
/// Long-running loops (demo banners, CLI scrolling) poll the returned flag
/// between frames.
///
/// # Rust concept: Arc and AtomicBool
/// The flag is shared between the scroll loop and the signal handler, which
/// runs on another thread. `Arc` gives both sides ownership of the same
/// value, and `AtomicBool` can be flipped through a shared reference without
/// a mutex.
pub fn setup_signal_handler() -> Result<Arc<AtomicBool>> {
    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();

    ctrlc::set_handler(move || {
        r.store(false, Ordering::SeqCst);
    })
    .map_err(|e| MatrixError::Driver(format!("failed to install Ctrl+C handler: {e}")))?;

    Ok(running)
}

/// Check if the main loop should keep running.
///
/// # Rust concept: Ordering
/// `SeqCst` is the strictest memory ordering. A stop flag is read once per
/// frame, so its cost does not matter here.
pub fn is_running(running: &AtomicBool) -> bool {
    running.load(Ordering::SeqCst)
}

// ── Tests ──────────────────────────────────────────────────────────
