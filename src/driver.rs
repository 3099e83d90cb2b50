//! The pixel-strand driver seam.
//!
//! [`Matrix`](crate::Matrix) never talks to hardware directly. It writes
//! packed colors into a [`StripDriver`] by strand index and asks it to flush.
//! Two drivers ship with the crate:
//! - [`HostStrip`]: an in-memory strand for tests, the CLI simulator and demos
//! - [`SmartLedsStrip`]: wraps any `smart-leds` writer (WS2812 over SPI, PIO, RMT, ...)

use crate::{Color, MatrixError, PackedColor, Result};
use serde::{Deserialize, Serialize};
use smart_leds::{RGB8, SmartLedsWrite, brightness};

/// Byte layout the strip expects on the wire.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorMode {
    /// GRB order, as used by WS2812 / NeoPixel parts.
    #[default]
    Grb,
    Rgb,
    /// RGB plus a dedicated white channel.
    Rgbw,
}

/// Operations a pixel-strand driver provides.
///
/// Indices are positions along the strand. Writes outside `0..len()` are
/// ignored rather than reported, as NeoPixel-style libraries do.
pub trait StripDriver {
    /// Number of pixels on the strand.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Set one pixel in the in-memory buffer.
    fn set_pixel_color(&mut self, index: usize, color: PackedColor);

    /// Push the buffer out to the strand.
    fn show(&mut self) -> Result<()>;

    /// Turn every pixel in the buffer off. Does not flush.
    fn clear(&mut self);

    /// Global brightness applied on the next `show`.
    fn set_brightness(&mut self, level: u8);
}

// ── Host strip ─────────────────────────────────────────────────────

/// In-memory strand that records what would have been sent to hardware.
#[derive(Clone, Debug)]
pub struct HostStrip {
    pixels: Vec<PackedColor>,
    brightness: u8,
    show_count: usize,
    ignored_writes: usize,
    history: Option<Vec<Vec<PackedColor>>>,
}

impl HostStrip {
    pub fn new(pixel_count: usize) -> Self {
        Self {
            pixels: vec![PackedColor::OFF; pixel_count],
            brightness: u8::MAX,
            show_count: 0,
            ignored_writes: 0,
            history: None,
        }
    }

    /// Keep a copy of the buffer every time `show` is called.
    pub fn with_history(mut self) -> Self {
        self.history = Some(Vec::new());
        self
    }

    /// Current buffer contents, in strand order.
    pub fn pixels(&self) -> &[PackedColor] {
        &self.pixels
    }

    pub fn pixel(&self, index: usize) -> Option<PackedColor> {
        self.pixels.get(index).copied()
    }

    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    pub fn show_count(&self) -> usize {
        self.show_count
    }

    /// Writes dropped because their index was past the end of the strand.
    pub fn ignored_writes(&self) -> usize {
        self.ignored_writes
    }

    /// Buffers captured by `show`, oldest first. Empty unless
    /// [`with_history`](Self::with_history) was used.
    pub fn history(&self) -> &[Vec<PackedColor>] {
        self.history.as_deref().unwrap_or_default()
    }

    /// Number of pixels that are currently lit.
    pub fn lit_count(&self) -> usize {
        self.pixels.iter().filter(|p| !p.is_off()).count()
    }
}

impl StripDriver for HostStrip {
    fn len(&self) -> usize {
        self.pixels.len()
    }

    fn set_pixel_color(&mut self, index: usize, color: PackedColor) {
        match self.pixels.get_mut(index) {
            Some(slot) => *slot = color,
            None => {
                self.ignored_writes += 1;
                tracing::warn!(index, len = self.pixels.len(), "ignoring write past end of strip");
            }
        }
    }

    fn show(&mut self) -> Result<()> {
        self.show_count += 1;
        if let Some(history) = self.history.as_mut() {
            history.push(self.pixels.clone());
        }
        Ok(())
    }

    fn clear(&mut self) {
        self.pixels.fill(PackedColor::OFF);
    }

    fn set_brightness(&mut self, level: u8) {
        self.brightness = level;
    }
}

// ── smart-leds adapter ─────────────────────────────────────────────

/// Adapter that drives real LEDs through any [`SmartLedsWrite`] implementation.
///
/// Color order on the wire is the writer's concern; this adapter only keeps
/// an `RGB8` buffer and applies brightness while streaming it out.
pub struct SmartLedsStrip<W> {
    writer: W,
    buffer: Vec<RGB8>,
    brightness: u8,
}

impl<W> SmartLedsStrip<W>
where
    W: SmartLedsWrite<Color = RGB8>,
    W::Error: core::fmt::Debug,
{
    pub fn new(writer: W, pixel_count: usize) -> Self {
        Self {
            writer,
            buffer: vec![RGB8::default(); pixel_count],
            brightness: u8::MAX,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> StripDriver for SmartLedsStrip<W>
where
    W: SmartLedsWrite<Color = RGB8>,
    W::Error: core::fmt::Debug,
{
    fn len(&self) -> usize {
        self.buffer.len()
    }

    fn set_pixel_color(&mut self, index: usize, color: PackedColor) {
        if let Some(slot) = self.buffer.get_mut(index) {
            *slot = Color::from(color).into();
        }
    }

    fn show(&mut self) -> Result<()> {
        self.writer
            .write(brightness(self.buffer.iter().copied(), self.brightness))
            .map_err(|e| MatrixError::Driver(format!("{e:?}")))
    }

    fn clear(&mut self) {
        self.buffer.fill(RGB8::default());
    }

    fn set_brightness(&mut self, level: u8) {
        self.brightness = level;
    }
}
