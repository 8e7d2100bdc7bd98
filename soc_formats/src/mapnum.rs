//! Map numbering shared by level headers, music slots and unlockables.
//!
//! `01`..`99` are plain numbers. From 100 on, maps are named by a letter
//! followed by a digit or letter: `A0` is 100, `A9` is 109, `AA` is 110 and
//! `ZZ` is 1035.

/// Highest map number a two-character name can address.
pub const MAX_MAP_NUMBER: i32 = 1035;

/// Converts a two-character map name into its number, 0 when malformed.
pub fn map_number(first: char, second: char) -> i32 {
    if first.is_ascii_digit() {
        if second.is_ascii_digit() {
            return digit(first) * 10 + digit(second);
        }
        return 0;
    }

    if !first.is_ascii_alphabetic() || !second.is_ascii_alphanumeric() {
        return 0;
    }

    let high = (first.to_ascii_uppercase() as i32 - 'A' as i32) * 36;
    let low = if second.is_ascii_digit() {
        digit(second)
    } else {
        second.to_ascii_uppercase() as i32 - 'A' as i32 + 10
    };
    100 + high + low
}

/// [`map_number`] over the first two characters of `word`.
pub fn map_number_str(word: &str) -> i32 {
    let mut chars = word.chars();
    let first = chars.next().unwrap_or('\0');
    let second = chars.next().unwrap_or('\0');
    map_number(first, second)
}

/// Lump-style map name, `MAP01` or `MAPAB`.
pub fn map_name(num: i32) -> String {
    if num < 100 {
        return format!("MAP{num:02}");
    }
    let offset = num - 100;
    let first = char::from(b'A' + (offset / 36) as u8);
    let rem = (offset % 36) as u8;
    let second = if rem < 10 {
        char::from(b'0' + rem)
    } else {
        char::from(b'A' + rem - 10)
    };
    format!("MAP{first}{second}")
}

/// True for map shorthand like `AB` or `C4`: a capital letter and length 2.
pub fn is_letter_pair(word: &str) -> bool {
    word.len() == 2 && word.as_bytes()[0].is_ascii_uppercase()
}

fn digit(c: char) -> i32 {
    c as i32 - '0' as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_and_letter_pairs_encode_map_numbers() {
        assert_eq!(map_number('0', '1'), 1);
        assert_eq!(map_number('9', '9'), 99);
        assert_eq!(map_number('A', '0'), 100);
        assert_eq!(map_number('A', 'B'), 111);
        assert_eq!(map_number('z', 'z'), MAX_MAP_NUMBER);
        assert_eq!(map_number('1', 'A'), 0);
        assert_eq!(map_number('_', 'A'), 0);
    }

    #[test]
    fn map_names_round_trip_through_numbers() {
        for num in [1, 42, 99, 100, 111, 500, MAX_MAP_NUMBER] {
            let name = map_name(num);
            assert_eq!(map_number_str(&name[3..]), num, "{name}");
        }
        assert_eq!(map_name(7), "MAP07");
        assert_eq!(map_name(111), "MAPAB");
    }
}
