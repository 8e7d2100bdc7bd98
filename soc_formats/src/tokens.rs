//! Tokenizing helpers shared by every section parser.

/// Parses a leading decimal integer like C `atoi`: leading whitespace and an
/// optional sign are accepted, parsing stops at the first non-digit, and an
/// empty or non-numeric prefix gives 0. Out-of-range values saturate.
pub fn atoi(text: &str) -> i32 {
    let trimmed = text.trim_start();
    let mut chars = trimmed.chars().peekable();
    let negative = match chars.peek() {
        Some('-') => {
            chars.next();
            true
        }
        Some('+') => {
            chars.next();
            false
        }
        _ => false,
    };

    let mut value: i64 = 0;
    for c in chars {
        let Some(digit) = c.to_digit(10) else {
            break;
        };
        value = (value * 10 + i64::from(digit)).min(i64::from(i32::MAX) + 1);
    }
    if negative {
        value = -value;
    }
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Parses a leading decimal number like C `atof`, 0.0 when there is none.
pub fn atof(text: &str) -> f64 {
    let trimmed = text.trim_start();
    let mut end = 0;
    let mut seen_dot = false;
    for (idx, c) in trimmed.char_indices() {
        match c {
            '+' | '-' if idx == 0 => {}
            '.' if !seen_dot => seen_dot = true,
            c if c.is_ascii_digit() => {}
            _ => break,
        }
        end = idx + c.len_utf8();
    }
    trimmed[..end].parse().unwrap_or(0.0)
}

/// Cuts a line at its first `#`.
pub fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(idx) => &line[..idx],
        None => line,
    }
}

/// Drops the trailing line break a reader leaves on every line.
pub fn strip_newline(line: &str) -> &str {
    match line.find('\n') {
        Some(idx) => &line[..idx],
        None => line,
    }
}

/// `KEY VALUE` style split: the key ends at the first space, the value is the
/// next run of characters that are neither spaces nor `=`.
pub fn split_whitespace(line: &str) -> (Option<&str>, Option<&str>) {
    let line = strip_newline(line);
    let mut rest = line.trim_start_matches(' ');
    if rest.is_empty() {
        return (None, None);
    }
    let key_end = rest.find(' ').unwrap_or(rest.len());
    let key = &rest[..key_end];
    rest = rest[key_end..].trim_start_matches([' ', '=']);
    if rest.is_empty() {
        return (Some(key), None);
    }
    let value_end = rest.find([' ', '=']).unwrap_or(rest.len());
    (Some(key), Some(&rest[..value_end]))
}

/// `KEY = VALUE` style split at the first `=`. The key is trimmed, the value
/// keeps everything after the separator except surrounding whitespace.
pub fn split_equals(line: &str) -> Option<(&str, &str)> {
    let line = strip_newline(line);
    let idx = line.find('=')?;
    let key = line[..idx].trim();
    let value = line[idx + 1..].trim();
    Some((key, value))
}

/// Raw text after the first `=` on a line, with the single separating space
/// skipped. Used by free-text fields that keep their exact contents.
pub fn text_after_equals(line: &str) -> Option<&str> {
    let idx = line.find('=')?;
    let rest = &line[idx + 1..];
    Some(rest.strip_prefix(' ').unwrap_or(rest))
}

/// A field value that is read as text or as a number depending on the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldValue<'a> {
    text: &'a str,
}

impl<'a> FieldValue<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    pub fn as_text(&self) -> &'a str {
        self.text
    }

    pub fn as_int(&self) -> i32 {
        atoi(self.text)
    }

    pub fn first_char(&self) -> Option<char> {
        self.text.chars().next()
    }

    /// Nonzero number, or text starting with `T` or `Y`.
    pub fn is_truthy(&self) -> bool {
        self.as_int() != 0
            || matches!(
                self.first_char().map(|c| c.to_ascii_uppercase()),
                Some('T') | Some('Y')
            )
    }

    pub fn starts_with_digit(&self) -> bool {
        self.first_char().is_some_and(|c| c.is_ascii_digit())
    }
}

/// Copies at most `max - 1` characters, the way fixed engine buffers hold
/// strings. Returns the stored text and whether it was cut.
pub fn truncate_to(text: &str, max: usize) -> (String, bool) {
    let limit = max.saturating_sub(1);
    let count = text.chars().count();
    if count > limit {
        (text.chars().take(limit).collect(), true)
    } else {
        (text.to_string(), false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atoi_matches_c_prefix_parsing() {
        assert_eq!(atoi("10"), 10);
        assert_eq!(atoi("  -42abc"), -42);
        assert_eq!(atoi("+7"), 7);
        assert_eq!(atoi("MT_FOO"), 0);
        assert_eq!(atoi(""), 0);
        assert_eq!(atoi("99999999999"), i32::MAX);
    }

    #[test]
    fn atof_reads_the_numeric_prefix() {
        assert_eq!(atof("0.5"), 0.5);
        assert_eq!(atof(" -1.25x"), -1.25);
        assert_eq!(atof("2"), 2.0);
        assert_eq!(atof("abc"), 0.0);
        assert_eq!(atof("-"), 0.0);
    }

    #[test]
    fn whitespace_split_uses_space_and_equals_delimiters() {
        assert_eq!(split_whitespace("SPEED = 10\n"), (Some("SPEED"), Some("10")));
        assert_eq!(split_whitespace("SPEED 10 20"), (Some("SPEED"), Some("10")));
        assert_eq!(split_whitespace("SPEED=10"), (Some("SPEED=10"), None));
        assert_eq!(split_whitespace("FLAGS\n"), (Some("FLAGS"), None));
        assert_eq!(split_whitespace("\n"), (None, None));
    }

    #[test]
    fn equals_split_trims_both_sides() {
        assert_eq!(split_equals("LEVELNAME = Green Flower\n"), Some(("LEVELNAME", "Green Flower")));
        assert_eq!(split_equals("ACT=1"), Some(("ACT", "1")));
        assert_eq!(split_equals("NOEQUALS"), None);
    }

    #[test]
    fn truthy_values_follow_engine_convention() {
        for value in ["1", "-3", "TRUE", "Yes", "t", "Y"] {
            assert!(FieldValue::new(value).is_truthy(), "{value} should be true");
        }
        for value in ["0", "", "FALSE", "NO", "OFF", "ON"] {
            assert!(!FieldValue::new(value).is_truthy(), "{value} should be false");
        }
    }

    #[test]
    fn truncation_reports_cut_text() {
        assert_eq!(truncate_to("ABCDEFGH", 5), ("ABCD".to_string(), true));
        assert_eq!(truncate_to("ABC", 5), ("ABC".to_string(), false));
    }

    #[test]
    fn text_after_equals_keeps_case_and_newline() {
        assert_eq!(text_after_equals("SceneText = Hello\n"), Some("Hello\n"));
        assert_eq!(text_after_equals("NoValue"), None);
    }
}
