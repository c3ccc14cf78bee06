//! Spot label derivation.
//!
//! A spot's label ("A1", "B3") is a projection of its position: the letter
//! comes from the horizontal row band the spot sits in, the suffix from how
//! many spots already occupy that row. Labels are recomputed on every move
//! and are purely presentational: they can change and even collide after
//! drags, which is accepted behavior, not a bug.

/// Row index of a y coordinate: `floor(y / row_height)`.
pub fn row_index(y: i32, row_height: i32) -> i32 {
    debug_assert!(row_height > 0, "row_height must be positive");
    y.div_euclid(row_height)
}

/// Letter for a row index: 0 -> "A", 25 -> "Z", then spreadsheet-style
/// continuation (26 -> "AA", 27 -> "AB", ...). Negative rows (elements
/// dragged above the canvas origin) collapse to "A".
pub fn row_letter(index: i32) -> String {
    let mut n = index.max(0) as u64 + 1;
    let mut letters = Vec::new();
    while n > 0 {
        n -= 1;
        letters.push(b'A' + (n % 26) as u8);
        n /= 26;
    }
    letters.reverse();
    // letters is always ASCII uppercase
    String::from_utf8(letters).unwrap_or_else(|_| "A".to_string())
}

/// Composes a spot label from its row and the number of spots already in
/// that row (the new spot becomes `existing_in_row + 1`).
pub fn spot_label(row: i32, existing_in_row: usize) -> String {
    format!("{}{}", row_letter(row), existing_in_row + 1)
}
