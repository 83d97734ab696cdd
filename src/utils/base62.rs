/// Base62 alphabet: digits, then uppercase, then lowercase
const CHARSET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
const BASE: u64 = 62;

/// Converts a number to base62 representation (0-9, A-Z, a-z)
pub fn encode_base62(mut num: u64) -> String {
    if num == 0 {
        return "0".to_string();
    }

    let mut result = Vec::new();

    while num > 0 {
        result.push(CHARSET[(num % BASE) as usize] as char);
        num /= BASE;
    }

    // Digits were collected least-significant first
    result.iter().rev().collect()
}

/// Converts a base62 string back to its number.
///
/// Returns `None` for an empty string, a character outside the alphabet, or a
/// value that does not fit in a `u64`.
pub fn decode_base62(encoded: &str) -> Option<u64> {
    if encoded.is_empty() {
        return None;
    }

    encoded.bytes().try_fold(0u64, |acc, byte| {
        let digit = digit_value(byte)?;
        acc.checked_mul(BASE)?.checked_add(digit)
    })
}

fn digit_value(byte: u8) -> Option<u64> {
    let value = match byte {
        b'0'..=b'9' => byte - b'0',
        b'A'..=b'Z' => byte - b'A' + 10,
        b'a'..=b'z' => byte - b'a' + 36,
        _ => return None,
    };
    Some(value as u64)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_encode_fixed_points() {
        assert_eq!(encode_base62(0), "0");
        assert_eq!(encode_base62(1), "1");
        assert_eq!(encode_base62(9), "9");
        assert_eq!(encode_base62(10), "A");
        assert_eq!(encode_base62(35), "Z");
        assert_eq!(encode_base62(36), "a");
        assert_eq!(encode_base62(61), "z");
        assert_eq!(encode_base62(62), "10");
        assert_eq!(encode_base62(62 * 62), "100");
        assert_eq!(encode_base62(62 * 62 - 1), "zz");
    }

    #[test]
    fn test_encode_u64_max() {
        assert_eq!(encode_base62(u64::MAX), "LygHa16AHYF");
        assert_eq!(decode_base62("LygHa16AHYF"), Some(u64::MAX));
    }

    #[test]
    fn test_decode_inverts_encode() {
        let samples = (0..5_000u64)
            .chain([238_327, 238_328, 14_776_335, 14_776_336, 1 << 40, u64::MAX - 1]);

        for n in samples {
            assert_eq!(decode_base62(&encode_base62(n)), Some(n), "round trip of {}", n);
        }
    }

    #[test]
    fn test_decode_rejects_bad_input() {
        assert_eq!(decode_base62(""), None);
        assert_eq!(decode_base62("abc-"), None);
        assert_eq!(decode_base62("héllo"), None);
        // One past u64::MAX
        assert_eq!(decode_base62("LygHa16AHYG"), None);
        assert_eq!(decode_base62("zzzzzzzzzzzz"), None);
    }

    #[test]
    fn test_decode_is_case_sensitive() {
        assert_eq!(decode_base62("a"), Some(36));
        assert_eq!(decode_base62("A"), Some(10));
    }

    #[test]
    fn test_codes_are_distinct_and_grow_in_length() {
        let mut seen = HashSet::new();
        let mut previous_len = 0;

        for id in 1..20_000u64 {
            let code = encode_base62(id);
            assert!(code.len() >= previous_len, "length shrank at id {}", id);
            assert!(seen.insert(code.clone()), "duplicate code {} at id {}", code, id);
            previous_len = code.len();
        }
    }
}
