//! Serpentine (zig-zag) pixel addressing.
//!
//! The strand snakes vertically through the matrix one column at a time:
//! even columns run top to bottom, odd columns bottom to top.
//!
//! ```text
//! height = 3, width = 4
//!
//!   LED0  LED5  LED6  LED11
//!   LED1  LED4  LED7  LED10
//!   LED2  LED3  LED8  LED9
//! ```

/// Map logical column `x` and row `y` (both from the top-left) to the index
/// of that pixel on the strand.
///
/// Inputs are not checked; callers clamp or skip before addressing.
pub fn address(x: usize, y: usize, height: usize) -> usize {
    if x % 2 == 0 {
        y + height * x
    } else {
        height - 1 - y + height * x
    }
}

/// Inverse of [`address`]: the `(x, y)` position of strand pixel `index`.
pub fn locate(index: usize, height: usize) -> (usize, usize) {
    let x = index / height;
    let offset = index % height;
    if x % 2 == 0 {
        (x, offset)
    } else {
        (x, height - 1 - offset)
    }
}
