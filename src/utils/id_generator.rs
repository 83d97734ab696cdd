use super::base62::encode_base62;

/// Derives the short code for a store-assigned row id.
///
/// Row ids are positive by construction; anything else means the store did not
/// hand out a usable identifier and no code may be derived from it.
pub fn short_code_for_id(id: i64) -> Option<String> {
    if id <= 0 {
        return None;
    }

    u64::try_from(id).ok().map(encode_base62)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_code_for_positive_ids() {
        assert_eq!(short_code_for_id(1).as_deref(), Some("1"));
        assert_eq!(short_code_for_id(10).as_deref(), Some("A"));
        assert_eq!(short_code_for_id(61).as_deref(), Some("z"));
        assert_eq!(short_code_for_id(62).as_deref(), Some("10"));
        assert_eq!(short_code_for_id(i64::MAX).as_deref(), Some("AzL8n0Y58m7"));
    }

    #[test]
    fn test_short_code_rejects_unusable_ids() {
        assert_eq!(short_code_for_id(0), None);
        assert_eq!(short_code_for_id(-1), None);
        assert_eq!(short_code_for_id(i64::MIN), None);
    }
}
