//! The matrix surface: dimensions, brightness, and drawing primitives.
//!
//! A [`Matrix`] owns exactly one strip driver sized `width * height` and
//! translates `(x, y)` positions into strand indices through
//! [`address`](crate::addressing::address).
//!
//! Matrices are created through a [`MatrixSlot`]. The first `configure` call
//! builds the driver; later calls hand back the matrix that already exists
//! and ignore their arguments. There is no way to resize a configured matrix.

use crate::addressing::address;
use crate::config::MatrixConfig;
use crate::driver::{ColorMode, StripDriver};
use crate::{Brightness, MatrixError, PackedColor, Result};

pub struct Matrix<D> {
    driver: D,
    width: usize,
    height: usize,
    brightness: Brightness,
}

impl<D: StripDriver> Matrix<D> {
    fn new(driver: D, config: &MatrixConfig) -> Self {
        let mut matrix = Self {
            driver,
            width: config.width,
            height: config.height,
            brightness: Brightness(config.brightness),
        };
        matrix.driver.set_brightness(config.brightness);
        matrix
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn brightness(&self) -> Brightness {
        self.brightness
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Flush the buffer to the strand.
    pub fn show(&mut self) -> Result<()> {
        self.driver.show()
    }

    /// Turn every pixel off in the buffer. Takes effect on the next `show`.
    pub fn clear(&mut self) {
        self.driver.clear();
    }

    pub fn set_brightness(&mut self, level: Brightness) {
        self.brightness = level;
        self.driver.set_brightness(level.0);
    }

    /// Set the pixel at column `x`, row `y`.
    ///
    /// Coordinates past the right or bottom edge saturate to the last
    /// column or row, so callers that overshoot slightly still land on
    /// the matrix.
    pub fn set_pixel(&mut self, x: usize, y: usize, color: PackedColor) {
        let x = x.min(self.width - 1);
        let y = y.min(self.height - 1);
        self.driver.set_pixel_color(address(x, y, self.height), color);
    }

    /// Write a pixel at a signed position, skipping it when it falls off
    /// the matrix. Used by the bitmap and text renderers, whose offsets may
    /// legitimately place pixels outside the visible area.
    pub(crate) fn plot(&mut self, column: i64, row: i64, color: PackedColor) {
        let (Ok(x), Ok(y)) = (usize::try_from(column), usize::try_from(row)) else {
            return;
        };
        if x >= self.width || y >= self.height {
            return;
        }
        self.driver.set_pixel_color(address(x, y, self.height), color);
    }
}

/// Holder that creates a [`Matrix`] at most once.
///
/// # Rust concept: Option as a one-time slot
/// The slot starts as `None` and becomes `Some` on the first successful
/// `configure`. Because the factory is an `FnOnce`, the compiler already
/// guarantees it is called at most once per `configure` call; the `Option`
/// guarantees it is called at most once per slot.
pub struct MatrixSlot<D> {
    matrix: Option<Matrix<D>>,
}

impl<D: StripDriver> MatrixSlot<D> {
    pub const fn new() -> Self {
        Self { matrix: None }
    }

    /// Create the matrix on first call; return the existing one afterwards.
    ///
    /// `create` receives the data pin, the pixel count and the color mode,
    /// and is only invoked when no matrix exists yet.
    pub fn configure<F>(&mut self, config: MatrixConfig, create: F) -> Result<&mut Matrix<D>>
    where
        F: FnOnce(u8, usize, ColorMode) -> Result<D>,
    {
        if self.matrix.is_some() {
            tracing::debug!(
                "Matrix already configured, ignoring {}x{} request",
                config.width,
                config.height
            );
        } else {
            config.validate()?;
            let driver = create(config.pin, config.pixel_count(), config.color_mode)?;
            if driver.len() < config.pixel_count() {
                return Err(MatrixError::invalid(
                    "driver",
                    format!(
                        "strip has {} pixels, matrix needs {}",
                        driver.len(),
                        config.pixel_count()
                    ),
                ));
            }
            tracing::info!(
                "Matrix configured: {}x{} on pin {} ({:?}, brightness {})",
                config.width,
                config.height,
                config.pin,
                config.color_mode,
                config.brightness
            );
            self.matrix = Some(Matrix::new(driver, &config));
        }

        self.matrix
            .as_mut()
            .ok_or_else(|| MatrixError::Driver("matrix slot is empty".to_string()))
    }

    pub fn get(&self) -> Option<&Matrix<D>> {
        self.matrix.as_ref()
    }

    pub fn get_mut(&mut self) -> Option<&mut Matrix<D>> {
        self.matrix.as_mut()
    }

    pub fn is_configured(&self) -> bool {
        self.matrix.is_some()
    }
}

impl<D: StripDriver> Default for MatrixSlot<D> {
    fn default() -> Self {
        Self::new()
    }
}
