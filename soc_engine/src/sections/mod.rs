//! Section body parsers, one `impl Load` block per family of directives.

mod character;
mod config;
mod freeslots;
mod gametype;
mod level;
mod menus;
mod objects;
mod progress;
mod sprites;
mod story;

use soc_formats::tokens::atoi;

use crate::loader::Load;

/// Cuts captured free text the way select screen notes are cut: at the
/// `max_lines`-th line break or the first `#`, and never past the last
/// character (the line break the capture ended on).
pub(crate) fn cut_text_lines(text: &str, max_lines: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut lines = 0;
    let mut end = chars.len();
    for (idx, c) in chars.iter().enumerate() {
        if lines < max_lines && *c == '\n' {
            lines += 1;
        }
        if lines >= max_lines || *c == '#' {
            end = idx;
            break;
        }
    }
    let end = end.min(chars.len().saturating_sub(1));
    chars[..end].iter().collect()
}

impl Load<'_> {
    /// `TYPEOFLEVEL` value: a number, or a comma list of level type names
    /// OR-ed together. Unknown names warn and add nothing.
    pub(crate) fn level_types(&mut self, value: &str, owner: &str) -> u32 {
        let number = atoi(value);
        if number != 0 {
            return number as u32;
        }
        let mut mask = 0;
        for name in value.split(',') {
            match self.context.symbols.level_types.find_ignore_case(name.trim()) {
                Some(flag) => mask |= flag,
                None => self.warn(format!("{owner}: unknown typeoflevel flag {name}")),
            }
        }
        mask
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captured_text_drops_the_final_line_break() {
        assert_eq!(cut_text_lines("Fast and blue\nLoves chili dogs\n", 20), "Fast and blue\nLoves chili dogs");
    }

    #[test]
    fn captured_text_stops_at_a_hash_or_the_line_limit() {
        assert_eq!(cut_text_lines("one#two\n", 20), "one");
        assert_eq!(cut_text_lines("a\nb\nc\nd\n", 2), "a\nb");
        assert_eq!(cut_text_lines("", 20), "");
    }
}
