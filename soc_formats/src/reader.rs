//! Logical line reader for SOC / DeHackEd text patches.
//!
//! Lines are decoded byte-for-byte: every input byte becomes the `char` with
//! the same code point, so text color codes (`0x80..=0x89`) and hex escapes
//! survive as `U+0080..U+00FF` and can be turned back into bytes with `as u8`.

/// Capacity of the shared line buffer, terminator included.
pub const MAXLINELEN: usize = 1024;

/// One patch lump or file being consumed.
#[derive(Debug, Clone)]
pub struct PatchSource {
    data: Vec<u8>,
    pos: usize,
    last_line: usize,
    wad: u16,
    line: Option<usize>,
}

impl PatchSource {
    pub fn new(data: impl Into<Vec<u8>>, wad: u16) -> Self {
        Self {
            data: data.into(),
            pos: 0,
            last_line: 0,
            wad,
            line: None,
        }
    }

    pub fn from_text(text: &str) -> Self {
        Self::new(text.as_bytes().to_vec(), 0)
    }

    /// Archive the patch came from; tags sprite names claimed by this source.
    pub fn wad(&self) -> u16 {
        self.wad
    }

    /// Zero-based number of the last line read, `None` before the first read.
    pub fn line(&self) -> Option<usize> {
        self.line
    }

    pub fn at_end(&self) -> bool {
        self.pos >= self.data.len()
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    /// Moves the cursor back to the start of the most recent `read_line`.
    pub fn rewind_line(&mut self) {
        if self.pos != self.last_line {
            self.pos = self.last_line;
            self.line = match self.line {
                Some(0) | None => None,
                Some(n) => Some(n - 1),
            };
        }
    }

    /// Reads one logical line, `\n` included, applying `^` color and `\`
    /// hex escapes. Returns `None` once the cursor is at the end.
    pub fn read_line(&mut self) -> Option<String> {
        if self.at_end() {
            return None;
        }
        self.last_line = self.pos;

        let mut out = String::new();
        let mut count = 0;
        while count < MAXLINELEN - 1 && !self.at_end() {
            let c = self.next_byte();
            match c {
                b'^' => out.push(char::from(self.color_code())),
                b'\\' => out.push(char::from(self.hex_escape())),
                b'\r' => continue,
                other => out.push(char::from(other)),
            }
            count += 1;
            if c == b'\n' {
                break;
            }
        }

        self.line = Some(self.line.map_or(0, |n| n + 1));
        Some(out)
    }

    /// Reads free text up to (not including) the next `#`, across line
    /// breaks. The cursor is left on the `#`, so the following `read_line`
    /// sees it.
    pub fn read_line_hashterminated(&mut self) -> Option<String> {
        self.read_hash_capped(MAXLINELEN - 1)
    }

    /// Same as [`read_line_hashterminated`](Self::read_line_hashterminated)
    /// with a caller-chosen length cap.
    pub fn read_hash_capped(&mut self, cap: usize) -> Option<String> {
        if self.at_end() {
            return None;
        }

        let mut out = String::new();
        let mut count = 0;
        while count < cap && !self.at_end() {
            let start = self.pos;
            let c = self.next_byte();
            match c {
                b'#' => {
                    self.pos = start;
                    break;
                }
                b'^' => out.push(char::from(self.color_code())),
                b'\\' => out.push(char::from(self.hex_escape())),
                b'\r' => continue,
                other => out.push(char::from(other)),
            }
            count += 1;
            if c == b'\n' {
                self.line = Some(self.line.map_or(0, |n| n + 1));
            }
        }
        Some(out)
    }

    fn next_byte(&mut self) -> u8 {
        let byte = self.data.get(self.pos).copied().unwrap_or(0);
        self.pos += 1;
        byte
    }

    fn color_code(&mut self) -> u8 {
        match self.next_byte() {
            b'^' => b'^',
            c @ b'0'..=b'9' => 0x80 + (c - b'0'),
            _ => 0x80,
        }
    }

    fn hex_escape(&mut self) -> u8 {
        let high = self.next_byte();
        if high == b'\\' {
            return b'\\';
        }
        let Some(high) = hex_value(high) else {
            return b'?';
        };
        let Some(low) = hex_value(self.next_byte()) else {
            return b'?';
        };
        (high << 4) | low
    }
}

fn hex_value(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'A'..=b'F' => Some(c - b'A' + 10),
        b'a'..=b'f' => Some(c - b'a' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_lines_with_newline_and_drops_carriage_returns() {
        let mut source = PatchSource::from_text("THING 1\r\nSPEED = 10\n\n");
        assert_eq!(source.read_line().as_deref(), Some("THING 1\n"));
        assert_eq!(source.line(), Some(0));
        assert_eq!(source.read_line().as_deref(), Some("SPEED = 10\n"));
        assert_eq!(source.read_line().as_deref(), Some("\n"));
        assert_eq!(source.line(), Some(2));
        assert!(source.read_line().is_none());
    }

    #[test]
    fn last_line_without_newline_is_returned() {
        let mut source = PatchSource::from_text("LEVEL 1");
        assert_eq!(source.read_line().as_deref(), Some("LEVEL 1"));
        assert!(source.at_end());
    }

    #[test]
    fn caret_codes_map_to_color_bytes() {
        let mut source = PatchSource::from_text("^1red^^^x\n");
        let line = source.read_line().unwrap();
        let bytes: Vec<u8> = line.chars().map(|c| c as u8).collect();
        assert_eq!(bytes, vec![0x81, b'r', b'e', b'd', b'^', 0x80, b'\n']);
    }

    #[test]
    fn backslash_hex_escapes_decode() {
        let mut source = PatchSource::from_text("\\41\\7a\\\\\\zz\n");
        let line = source.read_line().unwrap();
        // "\zz": invalid high nibble yields '?', the second 'z' is literal
        assert_eq!(line, "Az\\?z\n");
    }

    #[test]
    fn hash_capture_stops_before_marker_and_leaves_it_visible() {
        let mut source = PatchSource::from_text("first\n\nsecond#rest\nNEXT\n");
        let text = source.read_line_hashterminated().unwrap();
        assert_eq!(text, "first\n\nsecond");
        assert_eq!(source.line(), Some(1));
        assert_eq!(source.read_line().as_deref(), Some("#rest\n"));
        assert_eq!(source.read_line().as_deref(), Some("NEXT\n"));
    }

    #[test]
    fn rewind_returns_to_previous_line_start() {
        let mut source = PatchSource::from_text("A\nB\n");
        source.read_line();
        source.read_line();
        source.rewind_line();
        assert_eq!(source.read_line().as_deref(), Some("B\n"));
        assert_eq!(source.line(), Some(1));
    }

    #[test]
    fn overlong_lines_are_split_at_buffer_capacity() {
        let long = "x".repeat(MAXLINELEN + 10);
        let mut source = PatchSource::from_text(&format!("{long}\n"));
        let first = source.read_line().unwrap();
        assert_eq!(first.len(), MAXLINELEN - 1);
        let rest = source.read_line().unwrap();
        assert_eq!(rest.len(), 12);
    }
}
