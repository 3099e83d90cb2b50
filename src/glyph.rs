//! 5x8 bitmap font.
//!
//! Each glyph is eight rows, top to bottom. A row uses its low five bits,
//! with bit 4 as the leftmost column:
//!
//! ```text
//! 'A'   0x0E  .###.
//!       0x11  #...#
//!       0x11  #...#
//!       0x11  #...#
//!       0x1F  #####
//!       0x11  #...#
//!       0x11  #...#
//!       0x00  .....
//! ```
//!
//! Lookup is total: characters without a glyph (space included) draw blank.

/// Rows per glyph.
pub const GLYPH_HEIGHT: usize = 8;
/// Columns per glyph.
pub const GLYPH_WIDTH: usize = 5;
/// Horizontal advance from one character cell to the next.
pub const GLYPH_ADVANCE: usize = GLYPH_WIDTH + 1;

pub type Glyph = [u8; GLYPH_HEIGHT];

pub const BLANK: Glyph = [0; GLYPH_HEIGHT];

const FONT: &[(char, Glyph)] = &[
    ('a', [0x00, 0x00, 0x0E, 0x01, 0x0F, 0x11, 0x0F, 0x00]),
    ('b', [0x10, 0x10, 0x1E, 0x11, 0x11, 0x11, 0x1E, 0x00]),
    ('c', [0x00, 0x00, 0x0E, 0x10, 0x10, 0x10, 0x0E, 0x00]),
    ('d', [0x01, 0x01, 0x0F, 0x11, 0x11, 0x11, 0x0F, 0x00]),
    ('e', [0x00, 0x00, 0x0E, 0x11, 0x1F, 0x10, 0x0E, 0x00]),
    ('f', [0x06, 0x09, 0x08, 0x1C, 0x08, 0x08, 0x08, 0x00]),
    ('g', [0x00, 0x00, 0x0F, 0x11, 0x11, 0x0F, 0x01, 0x0E]),
    ('h', [0x10, 0x10, 0x16, 0x19, 0x11, 0x11, 0x11, 0x00]),
    ('i', [0x04, 0x00, 0x0C, 0x04, 0x04, 0x04, 0x0E, 0x00]),
    ('j', [0x02, 0x00, 0x06, 0x02, 0x02, 0x02, 0x12, 0x0C]),
    ('k', [0x08, 0x08, 0x09, 0x0A, 0x0C, 0x0A, 0x09, 0x00]),
    ('l', [0x0C, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E, 0x00]),
    ('m', [0x00, 0x00, 0x1A, 0x15, 0x15, 0x11, 0x11, 0x00]),
    ('n', [0x00, 0x00, 0x16, 0x19, 0x11, 0x11, 0x11, 0x00]),
    ('o', [0x00, 0x00, 0x0E, 0x11, 0x11, 0x11, 0x0E, 0x00]),
    ('p', [0x00, 0x00, 0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10]),
    ('q', [0x00, 0x00, 0x0F, 0x11, 0x11, 0x0F, 0x01, 0x01]),
    ('r', [0x00, 0x00, 0x16, 0x19, 0x10, 0x10, 0x10, 0x00]),
    ('s', [0x00, 0x00, 0x0E, 0x10, 0x0E, 0x01, 0x1E, 0x00]),
    ('t', [0x08, 0x08, 0x1C, 0x08, 0x08, 0x09, 0x06, 0x00]),
    ('u', [0x00, 0x00, 0x11, 0x11, 0x11, 0x13, 0x0D, 0x00]),
    ('v', [0x00, 0x00, 0x11, 0x11, 0x11, 0x0A, 0x04, 0x00]),
    ('w', [0x00, 0x00, 0x11, 0x11, 0x15, 0x15, 0x0A, 0x00]),
    ('x', [0x00, 0x00, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x00]),
    ('y', [0x00, 0x00, 0x11, 0x11, 0x11, 0x0F, 0x01, 0x0E]),
    ('z', [0x00, 0x00, 0x1F, 0x02, 0x04, 0x08, 0x1F, 0x00]),
    ('A', [0x0E, 0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x00]),
    ('B', [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E, 0x00]),
    ('C', [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E, 0x00]),
    ('D', [0x1C, 0x12, 0x11, 0x11, 0x11, 0x12, 0x1C, 0x00]),
    ('E', [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F, 0x00]),
    ('F', [0x1F, 0x10, 0x10, 0x1C, 0x10, 0x10, 0x10, 0x00]),
    ('G', [0x0E, 0x11, 0x10, 0x10, 0x13, 0x11, 0x0E, 0x00]),
    ('H', [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11, 0x00]),
    ('I', [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E, 0x00]),
    ('J', [0x07, 0x02, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C]),
    ('K', [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11, 0x00]),
    ('L', [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F, 0x00]),
    ('M', [0x11, 0x1B, 0x15, 0x11, 0x11, 0x11, 0x11, 0x00]),
    ('N', [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11, 0x00]),
    ('O', [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E, 0x00]),
    ('P', [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10, 0x00]),
    ('Q', [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D, 0x00]),
    ('R', [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11, 0x00]),
    ('S', [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E, 0x00]),
    ('T', [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04, 0x00]),
    ('U', [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E, 0x00]),
    ('V', [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04, 0x00]),
    ('W', [0x11, 0x11, 0x11, 0x15, 0x15, 0x1B, 0x11, 0x00]),
    ('X', [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11, 0x00]),
    ('Y', [0x11, 0x11, 0x0A, 0x04, 0x04, 0x04, 0x04, 0x00]),
    ('Z', [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F, 0x00]),
    ('.', [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C, 0x00]),
    ('0', [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E, 0x00]),
    ('1', [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E, 0x00]),
    ('2', [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F, 0x00]),
    ('3', [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E, 0x00]),
    ('4', [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02, 0x00]),
    ('5', [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E, 0x00]),
    ('6', [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E, 0x00]),
    ('7', [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08, 0x00]),
    ('8', [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E, 0x00]),
    ('9', [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C, 0x00]),
    (',', [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x04, 0x10]),
    (':', [0x00, 0x0C, 0x0C, 0x00, 0x0C, 0x0C, 0x00, 0x00]),
    (';', [0x00, 0x0C, 0x0C, 0x00, 0x0C, 0x04, 0x10, 0x00]),
    ('?', [0x0E, 0x11, 0x02, 0x02, 0x04, 0x00, 0x04, 0x00]),
    ('!', [0x04, 0x04, 0x04, 0x04, 0x04, 0x00, 0x04, 0x00]),
    ('-', [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00, 0x00]),
    ('+', [0x00, 0x04, 0x04, 0x1F, 0x04, 0x04, 0x00, 0x00]),
    ('=', [0x00, 0x00, 0x1F, 0x00, 0x1F, 0x00, 0x00, 0x00]),
    ('*', [0x00, 0x0A, 0x04, 0x1F, 0x04, 0x0A, 0x00, 0x00]),
    ('/', [0x00, 0x01, 0x02, 0x04, 0x08, 0x10, 0x00, 0x00]),
    ('(', [0x02, 0x04, 0x08, 0x08, 0x08, 0x04, 0x02, 0x00]),
    (')', [0x08, 0x04, 0x02, 0x02, 0x02, 0x04, 0x08, 0x00]),
    ('<', [0x01, 0x02, 0x04, 0x08, 0x04, 0x02, 0x01, 0x00]),
    ('>', [0x10, 0x08, 0x04, 0x02, 0x04, 0x08, 0x10, 0x00]),
    ('^', [0x04, 0x0A, 0x11, 0x00, 0x00, 0x00, 0x00, 0x00]),
    ('%', [0x18, 0x19, 0x02, 0x04, 0x08, 0x0B, 0x03, 0x00]),
    ('&', [0x0C, 0x12, 0x14, 0x08, 0x15, 0x12, 0x0D, 0x00]),
    ('#', [0x0A, 0x0A, 0x1F, 0x0A, 0x1F, 0x0A, 0x0A, 0x00]),
    ('$', [0x04, 0x0E, 0x14, 0x0E, 0x05, 0x1E, 0x04, 0x00]),
    ('@', [0x0E, 0x11, 0x01, 0x0D, 0x15, 0x15, 0x0E, 0x00]),
];

static TABLE: [Glyph; 128] = build_table();

const fn build_table() -> [Glyph; 128] {
    let mut table = [BLANK; 128];
    let mut i = 0;
    while i < FONT.len() {
        let (ch, rows) = FONT[i];
        table[ch as usize] = rows;
        i += 1;
    }
    table
}

/// Glyph for `ch`, or [`BLANK`] if the font has none.
pub fn glyph(ch: char) -> &'static Glyph {
    TABLE.get(ch as usize).unwrap_or(&BLANK)
}

/// Whether the font has a visible glyph for `ch`.
pub fn is_supported(ch: char) -> bool {
    glyph(ch) != &BLANK
}

/// Whether column `column` (0 = leftmost) of `row` is lit.
pub fn row_bit(row: u8, column: usize) -> bool {
    row & (0x10 >> column) != 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn ascii_art(g: &Glyph) -> Vec<String> {
        g.iter()
            .map(|&row| {
                (0..GLYPH_WIDTH)
                    .map(|col| if row_bit(row, col) { '#' } else { '.' })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn uppercase_a_renders() {
        assert_eq!(
            ascii_art(glyph('A')),
            vec![
                ".###.", "#...#", "#...#", "#...#", "#####", "#...#", "#...#", ".....",
            ]
        );
    }

    #[test]
    fn descenders_use_the_last_row() {
        assert_eq!(glyph('g')[7], 0x0E);
        assert_eq!(glyph('j')[7], 0x0C);
    }

    #[test]
    fn covers_letters_and_digits() {
        for ch in ('a'..='z').chain('A'..='Z').chain('0'..='9') {
            assert!(is_supported(ch), "missing glyph for {ch:?}");
        }
    }

    #[rstest]
    #[case('.')]
    #[case(',')]
    #[case(':')]
    #[case(';')]
    #[case('?')]
    #[case('!')]
    #[case('-')]
    #[case('+')]
    #[case('=')]
    #[case('*')]
    #[case('/')]
    #[case('(')]
    #[case(')')]
    #[case('<')]
    #[case('>')]
    #[case('^')]
    #[case('%')]
    #[case('&')]
    #[case('#')]
    #[case('$')]
    #[case('@')]
    fn covers_symbols(#[case] ch: char) {
        assert!(is_supported(ch));
    }

    #[rstest]
    #[case(' ')]
    #[case('~')]
    #[case('_')]
    #[case('\n')]
    #[case('é')]
    #[case('😀')]
    #[case(char::MAX)]
    fn unknown_characters_are_blank(#[case] ch: char) {
        assert_eq!(glyph(ch), &BLANK);
    }

    #[test]
    fn every_ascii_lookup_is_eight_rows_of_five_bits() {
        for code in 0u8..=127 {
            let g = glyph(char::from(code));
            assert_eq!(g.len(), GLYPH_HEIGHT);
            assert!(g.iter().all(|&row| row <= 0x1F), "wide row in {code}");
        }
    }

    #[test]
    fn font_has_no_duplicate_characters() {
        for (i, (a, _)) in FONT.iter().enumerate() {
            assert!(FONT[i + 1..].iter().all(|(b, _)| a != b), "duplicate {a:?}");
        }
    }
}
