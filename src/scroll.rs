//! Horizontal text scrolling.
//!
//! A scroll walks a horizontal offset `xpos` one column per frame. Each frame
//! draws every character whose 6-column cell overlaps the matrix, flushes,
//! clears, and waits.
//!
//! - [`ScrollDirection::Left`]: `xpos` runs from `width` down to
//!   `-(len * 6) + 1`; text enters on the right and leaves on the left.
//! - [`ScrollDirection::Right`]: `xpos` runs from `-(len * 6)` up to
//!   `width - 1`, drawing characters last to first.
//!
//! Either way a scroll of `len` characters on a `width`-column matrix takes
//! exactly `width + len * 6` frames.
//!
//! [`scroll_text`] blocks the calling thread until the last frame. Callers
//! that need to stop early use [`scroll_text_while`], or drive a [`Scroll`]
//! one [`step`](Scroll::step) at a time from their own scheduler.

use crate::glyph::{GLYPH_ADVANCE, GLYPH_HEIGHT, GLYPH_WIDTH, glyph, row_bit};
use crate::matrix::Matrix;
use crate::{MatrixError, PackedColor, Result, StripDriver, is_running};
use std::str::FromStr;
use std::sync::atomic::AtomicBool;
use std::thread;
use std::time::Duration;

// ── Parameters ─────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrollDirection {
    /// Text moves right to left.
    #[default]
    Left = 0,
    /// Text moves left to right.
    Right = 1,
}

impl TryFrom<u8> for ScrollDirection {
    type Error = MatrixError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Self::Left),
            1 => Ok(Self::Right),
            other => Err(MatrixError::invalid(
                "direction",
                format!("must be 0 (left) or 1 (right), got {other}"),
            )),
        }
    }
}

impl FromStr for ScrollDirection {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "left" | "0" => Ok(Self::Left),
            "right" | "1" => Ok(Self::Right),
            other => Err(MatrixError::invalid(
                "direction",
                format!("expected `left` or `right`, got `{other}`"),
            )),
        }
    }
}

/// Pause between scroll frames, at most two seconds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameDelay(Duration);

impl FrameDelay {
    pub const MAX_MS: u64 = 2000;

    pub fn as_duration(self) -> Duration {
        self.0
    }
}

impl TryFrom<u64> for FrameDelay {
    type Error = MatrixError;

    fn try_from(ms: u64) -> Result<Self> {
        if ms > Self::MAX_MS {
            return Err(MatrixError::invalid(
                "delay",
                format!("must be at most {} ms, got {ms}", Self::MAX_MS),
            ));
        }
        Ok(Self(Duration::from_millis(ms)))
    }
}

// ── Scroll session ─────────────────────────────────────────────────

/// One scroll of a piece of text across a matrix.
#[derive(Clone, Debug)]
pub struct Scroll {
    chars: Vec<char>,
    color: PackedColor,
    direction: ScrollDirection,
    next: i64,
    end: i64,
}

impl Scroll {
    /// Prepare a scroll for a matrix `width` columns wide.
    pub fn new(text: &str, color: PackedColor, direction: ScrollDirection, width: usize) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let span = (chars.len() * GLYPH_ADVANCE) as i64;
        let width = width as i64;
        let (next, end) = match direction {
            ScrollDirection::Left => (width, -span),
            ScrollDirection::Right => (-span, width),
        };
        Self {
            chars,
            color,
            direction,
            next,
            end,
        }
    }

    /// Frames left to render.
    pub fn remaining_frames(&self) -> usize {
        self.end.abs_diff(self.next) as usize
    }

    pub fn is_finished(&self) -> bool {
        self.next == self.end
    }

    /// Offset the next frame will be drawn at, if any remain.
    pub fn next_offset(&self) -> Option<i64> {
        (!self.is_finished()).then_some(self.next)
    }

    /// Compose the next frame, flush it, and clear the buffer.
    ///
    /// Returns `false` without touching the matrix once every frame has
    /// been rendered.
    pub fn step<D: StripDriver>(&mut self, matrix: &mut Matrix<D>) -> Result<bool> {
        let Some(xpos) = self.next_offset() else {
            return Ok(false);
        };
        self.next += match self.direction {
            ScrollDirection::Left => -1,
            ScrollDirection::Right => 1,
        };

        tracing::trace!(xpos, "scroll frame");
        self.compose(matrix, xpos);
        matrix.show()?;
        matrix.clear();
        Ok(true)
    }

    /// Draw the characters visible at offset `xpos` without flushing.
    pub fn compose<D: StripDriver>(&self, matrix: &mut Matrix<D>, xpos: i64) {
        let advance = GLYPH_ADVANCE as i64;
        match self.direction {
            ScrollDirection::Left => {
                for (i, &ch) in self.chars.iter().enumerate() {
                    draw_char(matrix, ch, xpos + advance * i as i64, self.color);
                }
            }
            ScrollDirection::Right => {
                for (i, &ch) in self.chars.iter().enumerate().rev() {
                    draw_char(matrix, ch, xpos + advance * (i as i64 + 1), self.color);
                }
            }
        }
    }
}

/// Draw one glyph with its left edge at column `left`, vertically centred.
fn draw_char<D: StripDriver>(matrix: &mut Matrix<D>, ch: char, left: i64, color: PackedColor) {
    if left <= -(GLYPH_ADVANCE as i64) || left >= matrix.width() as i64 {
        return;
    }
    let top = (matrix.height().saturating_sub(GLYPH_HEIGHT) / 2) as i64;
    let rows = glyph(ch);
    for k in 0..GLYPH_WIDTH {
        for (j, &row) in rows.iter().enumerate() {
            if row_bit(row, k) {
                matrix.plot(left + k as i64, top + j as i64, color);
            }
        }
    }
}

// ── Blocking drivers ───────────────────────────────────────────────

/// How a cancellable scroll ended, with the number of frames shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollOutcome {
    Completed(usize),
    Cancelled(usize),
}

/// Scroll `text` across the matrix, blocking until the last frame.
///
/// Returns the number of frames rendered.
pub fn scroll_text<D: StripDriver>(
    matrix: &mut Matrix<D>,
    text: &str,
    delay: FrameDelay,
    color: PackedColor,
    direction: ScrollDirection,
) -> Result<usize> {
    let always = AtomicBool::new(true);
    match scroll_text_while(matrix, text, delay, color, direction, &always)? {
        ScrollOutcome::Completed(frames) | ScrollOutcome::Cancelled(frames) => Ok(frames),
    }
}

/// Like [`scroll_text`], but checks `running` before every frame and stops
/// as soon as it reads `false`.
pub fn scroll_text_while<D: StripDriver>(
    matrix: &mut Matrix<D>,
    text: &str,
    delay: FrameDelay,
    color: PackedColor,
    direction: ScrollDirection,
    running: &AtomicBool,
) -> Result<ScrollOutcome> {
    matrix.clear();
    matrix.show()?;

    let mut scroll = Scroll::new(text, color, direction, matrix.width());
    tracing::info!(
        "Scrolling {:?} {:?} over {} frames ({} ms/frame)",
        text,
        direction,
        scroll.remaining_frames(),
        delay.as_duration().as_millis()
    );

    let mut frames = 0;
    while !scroll.is_finished() {
        if !is_running(running) {
            tracing::info!("Scroll cancelled after {} frames", frames);
            return Ok(ScrollOutcome::Cancelled(frames));
        }
        scroll.step(matrix)?;
        frames += 1;
        thread::sleep(delay.as_duration());
    }

    tracing::debug!("Scroll finished after {} frames", frames);
    Ok(ScrollOutcome::Completed(frames))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HostStrip;
    use crate::addressing::locate;
    use crate::matrix::tests::host_matrix;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::sync::atomic::Ordering;

    const WHITE: PackedColor = PackedColor(0xFFFFFF);

    fn recording_matrix(height: usize, width: usize) -> Matrix<HostStrip> {
        let mut matrix = host_matrix(height, width);
        *matrix.driver_mut() = HostStrip::new(height * width).with_history();
        matrix
    }

    /// Lit `(x, y)` cells of a captured frame, sorted by column then row.
    fn lit(frame: &[PackedColor], height: usize) -> Vec<(usize, usize)> {
        let mut cells: Vec<_> = frame
            .iter()
            .enumerate()
            .filter(|(_, p)| !p.is_off())
            .map(|(i, _)| locate(i, height))
            .collect();
        cells.sort();
        cells
    }

    fn no_delay() -> FrameDelay {
        FrameDelay::try_from(0).unwrap()
    }

    #[rstest]
    #[case(0, ScrollDirection::Left)]
    #[case(1, ScrollDirection::Right)]
    fn direction_from_number(#[case] value: u8, #[case] expected: ScrollDirection) {
        assert_eq!(ScrollDirection::try_from(value).unwrap(), expected);
    }

    #[test]
    fn direction_rejects_other_numbers() {
        assert!(matches!(
            ScrollDirection::try_from(2),
            Err(MatrixError::InvalidArgument { name: "direction", .. })
        ));
    }

    #[rstest]
    #[case("left", ScrollDirection::Left)]
    #[case("RIGHT", ScrollDirection::Right)]
    #[case("1", ScrollDirection::Right)]
    fn direction_from_str(#[case] s: &str, #[case] expected: ScrollDirection) {
        assert_eq!(s.parse::<ScrollDirection>().unwrap(), expected);
    }

    #[rstest]
    #[case(0)]
    #[case(100)]
    #[case(2000)]
    fn delay_accepts_up_to_two_seconds(#[case] ms: u64) {
        assert_eq!(
            FrameDelay::try_from(ms).unwrap().as_duration(),
            Duration::from_millis(ms)
        );
    }

    #[test]
    fn delay_rejects_over_two_seconds() {
        assert!(matches!(
            FrameDelay::try_from(2001),
            Err(MatrixError::InvalidArgument { name: "delay", .. })
        ));
    }

    #[rstest]
    #[case("A", ScrollDirection::Left, 16, 22)]
    #[case("A", ScrollDirection::Right, 16, 22)]
    #[case("Hello", ScrollDirection::Left, 32, 62)]
    #[case("", ScrollDirection::Left, 8, 8)]
    fn frame_count_is_width_plus_text_span(
        #[case] text: &str,
        #[case] direction: ScrollDirection,
        #[case] width: usize,
        #[case] expected: usize,
    ) {
        assert_eq!(
            Scroll::new(text, WHITE, direction, width).remaining_frames(),
            expected
        );
    }

    #[test]
    fn single_letter_scroll_renders_22_frames() {
        let mut matrix = host_matrix(8, 16);
        let frames =
            scroll_text(&mut matrix, "A", no_delay(), WHITE, ScrollDirection::Left).unwrap();

        assert_eq!(frames, 22);
        // One flush for the initial clear, then one per frame.
        assert_eq!(matrix.driver().show_count(), 23);
        assert_eq!(matrix.driver().lit_count(), 0);
    }

    #[test]
    fn leftward_offsets_count_down_from_width() {
        let mut scroll = Scroll::new("A", WHITE, ScrollDirection::Left, 16);
        let mut matrix = host_matrix(8, 16);
        let mut offsets = Vec::new();
        while let Some(xpos) = scroll.next_offset() {
            offsets.push(xpos);
            assert!(scroll.step(&mut matrix).unwrap());
        }
        assert_eq!(offsets.first(), Some(&16));
        assert_eq!(offsets.last(), Some(&-5));
        assert!(!scroll.step(&mut matrix).unwrap());
    }

    #[test]
    fn rightward_offsets_count_up_to_width() {
        let mut scroll = Scroll::new("AB", WHITE, ScrollDirection::Right, 16);
        let mut matrix = host_matrix(8, 16);
        let mut offsets = Vec::new();
        while let Some(xpos) = scroll.next_offset() {
            offsets.push(xpos);
            scroll.step(&mut matrix).unwrap();
        }
        assert_eq!(offsets.len(), 28);
        assert_eq!(offsets.first(), Some(&-12));
        assert_eq!(offsets.last(), Some(&15));
    }

    #[test]
    fn leftward_text_enters_from_the_right() {
        let mut matrix = recording_matrix(8, 16);
        scroll_text(&mut matrix, "I", no_delay(), WHITE, ScrollDirection::Left).unwrap();
        let history = matrix.driver().history();

        // history[0] is the initial clear; frame n is drawn at xpos 16 - n.
        assert!(lit(&history[1], 8).is_empty());
        // xpos 14: only columns 0 and 1 of the glyph are on the matrix.
        assert_eq!(lit(&history[3], 8), vec![(15, 0), (15, 6)]);
        // xpos 0: 'I' is 0x0E, 0x04 x5, 0x0E.
        assert_eq!(
            lit(&history[17], 8),
            vec![
                (1, 0),
                (1, 6),
                (2, 0),
                (2, 1),
                (2, 2),
                (2, 3),
                (2, 4),
                (2, 5),
                (2, 6),
                (3, 0),
                (3, 6),
            ]
        );
    }

    #[test]
    fn glyph_is_identical_in_even_and_odd_columns() {
        let mut even = host_matrix(8, 16);
        let mut odd = host_matrix(8, 16);
        let scroll = Scroll::new("F", WHITE, ScrollDirection::Left, 16);
        scroll.compose(&mut even, 4);
        scroll.compose(&mut odd, 5);

        let shifted: Vec<_> = lit(even.driver().pixels(), 8)
            .into_iter()
            .map(|(x, y)| (x + 1, y))
            .collect();
        assert_eq!(lit(odd.driver().pixels(), 8), shifted);
    }

    #[test]
    fn characters_advance_six_columns() {
        let mut matrix = host_matrix(8, 16);
        let scroll = Scroll::new("--", WHITE, ScrollDirection::Left, 16);
        scroll.compose(&mut matrix, 0);
        let columns: Vec<usize> = lit(matrix.driver().pixels(), 8)
            .into_iter()
            .map(|(x, _)| x)
            .collect();
        assert_eq!(columns, vec![0, 1, 2, 3, 4, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn rightward_draws_each_character_one_cell_later() {
        let mut matrix = host_matrix(8, 16);
        let scroll = Scroll::new("-", WHITE, ScrollDirection::Right, 16);
        scroll.compose(&mut matrix, -6);
        let columns: Vec<usize> = lit(matrix.driver().pixels(), 8)
            .into_iter()
            .map(|(x, _)| x)
            .collect();
        assert_eq!(columns, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn tall_matrix_centres_text() {
        let mut matrix = host_matrix(12, 16);
        let scroll = Scroll::new("-", WHITE, ScrollDirection::Left, 16);
        scroll.compose(&mut matrix, 0);
        // '-' lights row 3 of the glyph; (12 - 8) / 2 = 2 rows of padding.
        assert!(
            lit(matrix.driver().pixels(), 12)
                .iter()
                .all(|&(_, y)| y == 5)
        );
    }

    #[test]
    fn short_matrix_clips_bottom_rows() {
        let mut matrix = host_matrix(4, 8);
        let scroll = Scroll::new("I", WHITE, ScrollDirection::Left, 8);
        scroll.compose(&mut matrix, 0);
        assert_eq!(
            lit(matrix.driver().pixels(), 4),
            vec![(1, 0), (2, 0), (2, 1), (2, 2), (2, 3), (3, 0)]
        );
        assert_eq!(matrix.driver().ignored_writes(), 0);
    }

    #[test]
    fn unsupported_characters_draw_nothing() {
        let mut matrix = recording_matrix(8, 16);
        scroll_text(&mut matrix, "~ ~", no_delay(), WHITE, ScrollDirection::Left).unwrap();
        assert!(
            matrix
                .driver()
                .history()
                .iter()
                .all(|frame| frame.iter().all(|p| p.is_off()))
        );
    }

    #[test]
    fn long_text_never_writes_past_the_strip() {
        let mut matrix = host_matrix(8, 10);
        scroll_text(
            &mut matrix,
            "The quick brown fox!",
            no_delay(),
            WHITE,
            ScrollDirection::Right,
        )
        .unwrap();
        assert_eq!(matrix.driver().ignored_writes(), 0);
    }

    #[test]
    fn cleared_flag_cancels_before_first_frame() {
        let mut matrix = host_matrix(8, 16);
        let running = AtomicBool::new(false);
        let outcome = scroll_text_while(
            &mut matrix,
            "A",
            no_delay(),
            WHITE,
            ScrollDirection::Left,
            &running,
        )
        .unwrap();
        assert_eq!(outcome, ScrollOutcome::Cancelled(0));
        assert_eq!(matrix.driver().show_count(), 1);
    }

    #[test]
    fn set_flag_runs_to_completion() {
        let mut matrix = host_matrix(8, 16);
        let running = AtomicBool::new(true);
        let outcome = scroll_text_while(
            &mut matrix,
            "A",
            no_delay(),
            WHITE,
            ScrollDirection::Right,
            &running,
        )
        .unwrap();
        assert_eq!(outcome, ScrollOutcome::Completed(22));
        assert!(running.load(Ordering::SeqCst));
    }
}
