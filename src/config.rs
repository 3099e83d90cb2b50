//! Matrix configuration: dimensions, wiring, and startup brightness.
//!
//! Values come from code, a JSON file, or CLI flags layered on top of a file.
//!
//! ```json
//! { "height": 8, "width": 32, "color_mode": "grb", "pin": 2 }
//! ```

use crate::driver::ColorMode;
use crate::{Brightness, MatrixError, Result};
use serde::Deserialize;
use std::path::Path;

fn default_height() -> usize {
    8
}

fn default_width() -> usize {
    32
}

fn default_pin() -> u8 {
    2
}

fn default_brightness() -> u8 {
    Brightness::DEFAULT.0
}

/// Everything needed to create a matrix and its strip driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct MatrixConfig {
    /// Rows on the matrix (LEDs per strand column)
    #[serde(default = "default_height")]
    pub height: usize,
    /// Columns on the matrix
    #[serde(default = "default_width")]
    pub width: usize,
    #[serde(default)]
    pub color_mode: ColorMode,
    /// Data pin the strand is attached to
    #[serde(default = "default_pin")]
    pub pin: u8,
    /// Brightness applied when the matrix is created (0-255)
    #[serde(default = "default_brightness")]
    pub brightness: u8,
}

impl MatrixConfig {
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            ..Self::default()
        }
    }

    /// Total number of pixels on the strand. Call [`validate`](Self::validate)
    /// first; dimensions whose product overflows are rejected there.
    pub fn pixel_count(&self) -> usize {
        self.height * self.width
    }

    pub fn validate(&self) -> Result<()> {
        if self.height == 0 {
            return Err(MatrixError::invalid("height", "must be greater than zero"));
        }
        if self.width == 0 {
            return Err(MatrixError::invalid("width", "must be greater than zero"));
        }
        if self.height.checked_mul(self.width).is_none() {
            return Err(MatrixError::invalid(
                "width",
                format!("{}x{} pixels does not fit in usize", self.width, self.height),
            ));
        }
        Ok(())
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        tracing::debug!("Loaded matrix config from {}", path.display());
        Self::from_json_str(&json)
    }
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            height: default_height(),
            width: default_width(),
            color_mode: ColorMode::default(),
            pin: default_pin(),
            brightness: default_brightness(),
        }
    }
}
