//! Bitmap blitting.
//!
//! A bitmap is a list of rows; each row's bits encode columns left to right,
//! with the highest used bit as the leftmost column. Zero bits are
//! transparent: nothing is written, so earlier drawing shows through and
//! bitmaps can be layered.

use crate::matrix::Matrix;
use crate::{MatrixError, PackedColor, Result, StripDriver};

/// Widest bitmap a `u64` row can describe.
pub const MAX_BITMAP_WIDTH: usize = 64;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmap {
    rows: Vec<u64>,
    width: usize,
    height: usize,
}

impl Bitmap {
    pub fn new(rows: Vec<u64>, width: usize, height: usize) -> Result<Self> {
        if width == 0 || width > MAX_BITMAP_WIDTH {
            return Err(MatrixError::invalid(
                "width",
                format!("must be 1-{MAX_BITMAP_WIDTH}, got {width}"),
            ));
        }
        if height == 0 {
            return Err(MatrixError::invalid("height", "must be greater than zero"));
        }
        if rows.len() < height {
            return Err(MatrixError::invalid(
                "rows",
                format!("{} rows supplied for a height of {height}", rows.len()),
            ));
        }
        Ok(Self {
            rows,
            width,
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn rows(&self) -> &[u64] {
        &self.rows[..self.height]
    }

    /// Number of columns walked while blitting. Odd widths are rounded up
    /// so mirrored placement stays symmetric.
    pub fn blit_width(&self) -> usize {
        self.width + self.width % 2
    }

    /// Whether blit column `column` of row `row` is lit.
    fn is_lit(&self, column: usize, row: usize) -> bool {
        let shift = self.blit_width() - 1 - column;
        (self.rows[row] >> shift) & 1 == 1
    }
}

/// How bitmap columns map onto matrix columns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Orientation {
    /// Column `k` lands on `xoffset + k`.
    #[default]
    Normal,
    /// Column `k` lands on `xoffset + (width - 1 - k)`.
    Mirrored,
}

impl Orientation {
    pub fn from_mirror(mirror: bool) -> Self {
        if mirror { Self::Mirrored } else { Self::Normal }
    }

    /// Matrix column for bitmap column `k` of a bitmap `width` columns wide.
    pub fn column(self, k: usize, width: usize, xoffset: i64) -> i64 {
        let k = k as i64;
        let width = width as i64;
        match self {
            Self::Normal => xoffset + k,
            Self::Mirrored => xoffset + (width - 1 - k),
        }
    }
}

/// Draw the lit bits of `bitmap` with its top-left corner at
/// `(xoffset, yoffset)`.
///
/// Rows that land above or below the matrix are skipped, as are columns
/// past either side. Pixels under zero bits are left untouched.
pub fn draw_bitmap<D: StripDriver>(
    matrix: &mut Matrix<D>,
    bitmap: &Bitmap,
    color: PackedColor,
    xoffset: i64,
    yoffset: i64,
    orientation: Orientation,
) {
    let width = bitmap.blit_width();
    let height = matrix.height() as i64;

    for k in 0..width {
        let column = orientation.column(k, width, xoffset);
        for j in 0..bitmap.height() {
            if !bitmap.is_lit(k, j) {
                continue;
            }
            let row = j as i64 + yoffset;
            if !(0..height).contains(&row) {
                continue;
            }
            matrix.plot(column, row, color);
        }
    }
}
