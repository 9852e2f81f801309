//! Block letters for the large SURF wordmark.

pub const GLYPH_ROWS: usize = 5;
pub const GLYPH_WIDTH: usize = 6;

/// Five rows of a block letter. Unknown characters are blank.
pub fn block_letter(c: char) -> [&'static str; GLYPH_ROWS] {
    match c.to_ascii_uppercase() {
        'S' => ["█████ ", "█     ", "█████ ", "    █ ", "█████ "],
        'U' => ["█   █ ", "█   █ ", "█   █ ", "█   █ ", "█████ "],
        'R' => ["████  ", "█   █ ", "████  ", "█  █  ", "█   █ "],
        'F' => ["█████ ", "█     ", "████  ", "█     ", "█     "],
        _ => ["      "; GLYPH_ROWS],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_have_uniform_width() {
        for c in ['S', 'u', 'R', 'F', '?'] {
            for row in block_letter(c) {
                assert_eq!(row.chars().count(), GLYPH_WIDTH);
            }
        }
    }
}
