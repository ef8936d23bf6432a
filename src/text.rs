// text.rs - whitespace handling shared by requests and responses

/// Collapse every run of whitespace into a single space and trim both ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Character count, which is what the service reports as a length
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// First `max_chars` characters of `text`, never splitting a code point
pub fn preview(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_runs() {
        assert_eq!(
            normalize_whitespace("  Việt   Nam\n\tđã\r\n ghi nhận  "),
            "Việt Nam đã ghi nhận"
        );
    }

    #[test]
    fn test_normalize_whitespace_only_is_empty() {
        assert_eq!(normalize_whitespace(" \n\t  "), "");
        assert_eq!(normalize_whitespace(""), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let inputs = [
            "",
            "a",
            "  leading",
            "trailing \n",
            "many     spaces\u{00A0}and\u{2003}unicode",
            "Trí tuệ  nhân\ttạo (AI)\n\nđang trở thành",
        ];
        for input in inputs {
            let once = normalize_whitespace(input);
            assert_eq!(normalize_whitespace(&once), once, "input: {input:?}");
        }
    }

    #[test]
    fn test_char_len_counts_code_points() {
        assert_eq!(char_len("Tóm tắt"), 7);
        assert_eq!(char_len(""), 0);
    }

    #[test]
    fn test_preview_respects_char_boundaries() {
        assert_eq!(preview("Tóm tắt văn bản", 5), "Tóm t");
        assert_eq!(preview("short", 200), "short");
    }
}
