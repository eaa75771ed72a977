//! Keymap construction.
//!
//! Expands a flat per-family scancode table into 4-slot keymap rows:
//! slot 0 is the table entry, slot 1 its shifted pairing where one
//! exists, slots 2 and 3 start empty. Redundant slots are then
//! collapsed in a fixed rule order so the result is canonical for any
//! input table.

use crate::input::keysyms::*;

pub const KEYMAP_WIDTH: usize = 4;
pub const KEYMAP_LEN: usize = 256;

/// A built keymap: one 4-slot row per scancode, plus the inclusive
/// range of scancodes that carry at least one symbol.
#[derive(Debug, Clone)]
pub struct Keymap {
    rows: Vec<[Keysym; KEYMAP_WIDTH]>,
    min_code: usize,
    max_code: usize,
}

/// Shifted pairing for symbols that have one on a US layout. Letters
/// have none; case conversion happens downstream.
fn shifted(sym: Keysym) -> Keysym {
    match sym {
        KS_1 => KS_EXCLAM,
        KS_2 => KS_AT,
        KS_3 => KS_NUMBERSIGN,
        KS_4 => KS_DOLLAR,
        KS_5 => KS_PERCENT,
        KS_6 => KS_ASCIICIRCUM,
        KS_7 => KS_AMPERSAND,
        KS_8 => KS_ASTERISK,
        KS_9 => KS_PARENLEFT,
        KS_0 => KS_PARENRIGHT,
        KS_MINUS => KS_UNDERSCORE,
        KS_EQUAL => KS_PLUS,
        KS_GRAVE => KS_ASCIITILDE,
        KS_BRACKETLEFT => KS_BRACELEFT,
        KS_BRACKETRIGHT => KS_BRACERIGHT,
        KS_BACKSLASH => KS_BAR,
        KS_SEMICOLON => KS_COLON,
        KS_APOSTROPHE => KS_QUOTEDBL,
        KS_COMMA => KS_LESS,
        KS_PERIOD => KS_GREATER,
        KS_SLASH => KS_QUESTION,
        KS_ALT_L => KS_META_L,
        KS_ALT_R => KS_META_R,
        KS_PRINT => KS_SYS_REQ,
        _ => KS_NONE,
    }
}

/// Drop slots that repeat earlier ones, in a fixed order. Applied per
/// row after the shifted pairing is filled in.
fn collapse(k: &mut [Keysym; KEYMAP_WIDTH]) {
    if k[3] == k[2] {
        k[3] = KS_NONE;
    }
    if k[2] == k[1] {
        k[2] = KS_NONE;
    }
    if k[1] == k[0] {
        k[1] = KS_NONE;
    }
    if k[0] == k[2] && k[1] == k[3] {
        k[2] = KS_NONE;
        k[3] = KS_NONE;
    }
    if k[3] == k[0] && k[2] == k[1] && k[2] == KS_NONE {
        k[3] = KS_NONE;
    }
}

impl Keymap {
    /// Build a keymap from a flat scancode table.
    pub fn from_table(table: &[Keysym]) -> Self {
        let mut rows = Vec::with_capacity(table.len());
        let mut min_code = KEYMAP_LEN;
        let mut max_code = 0;
        for (code, &sym) in table.iter().enumerate() {
            let mut row = [sym, shifted(sym), KS_NONE, KS_NONE];
            collapse(&mut row);
            if row.iter().any(|&s| s != KS_NONE) {
                if code < min_code {
                    min_code = code;
                }
                if code > max_code {
                    max_code = code;
                }
            }
            rows.push(row);
        }
        Keymap {
            rows,
            min_code,
            max_code,
        }
    }

    /// Symbols for a scancode, or None when out of range.
    pub fn syms(&self, code: usize) -> Option<&[Keysym; KEYMAP_WIDTH]> {
        self.rows.get(code)
    }

    /// Lowest scancode that carries a symbol. Greater than
    /// [`Keymap::max_code`] when the table is empty.
    pub fn min_code(&self) -> usize {
        self.min_code
    }

    pub fn max_code(&self) -> usize {
        self.max_code
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::keymaps::USB_KEYMAP;

    #[test]
    fn digit_rows_get_shifted_pairs() {
        let map = Keymap::from_table(&USB_KEYMAP);
        // HID usage 30 is the '1' key
        let row = map.syms(30).unwrap();
        assert_eq!(row[0], KS_1);
        assert_eq!(row[1], KS_EXCLAM);
        assert_eq!(row[2], KS_NONE);
        assert_eq!(row[3], KS_NONE);
    }

    #[test]
    fn letter_rows_collapse_to_one_slot() {
        let map = Keymap::from_table(&USB_KEYMAP);
        let row = map.syms(4).unwrap();
        assert_eq!(row[0], KS_A);
        assert_eq!(&row[1..], &[KS_NONE; 3]);
    }

    #[test]
    fn alt_pairs_with_meta() {
        let map = Keymap::from_table(&USB_KEYMAP);
        let row = map.syms(226).unwrap();
        assert_eq!(row[0], KS_ALT_L);
        assert_eq!(row[1], KS_META_L);
    }

    #[test]
    fn collapse_is_idempotent() {
        let map = Keymap::from_table(&USB_KEYMAP);
        for code in 0..map.len() {
            let mut row = *map.syms(code).unwrap();
            let before = row;
            collapse(&mut row);
            assert_eq!(row, before, "code {}", code);
        }
    }

    #[test]
    fn code_range_tracks_populated_rows() {
        let map = Keymap::from_table(&USB_KEYMAP);
        assert_eq!(map.min_code(), 4);
        assert_eq!(map.max_code(), 231);

        let sparse = [KS_NONE, KS_NONE, KS_Q, KS_NONE];
        let map = Keymap::from_table(&sparse);
        assert_eq!(map.min_code(), 2);
        assert_eq!(map.max_code(), 2);
    }

    #[test]
    fn empty_table_has_inverted_range() {
        let map = Keymap::from_table(&[]);
        assert!(map.min_code() > map.max_code());
        assert!(map.is_empty());
    }
}
