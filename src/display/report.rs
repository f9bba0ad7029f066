//! Report formatting utilities for terminal output
//!
//! Section banners and text fitting shared by the report tables.

/// A full-width rule made of `ch`
pub fn rule(ch: char, width: usize) -> String {
    ch.to_string().repeat(width)
}

/// Section banner: rule, title, rule
pub fn banner(title: &str, width: usize) -> String {
    format!("{}\n{}\n{}\n", rule('=', width), title, rule('=', width))
}

/// Truncate a string to a maximum length with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner() {
        assert_eq!(banner("MONTHLY SUMMARY", 5), "=====\nMONTHLY SUMMARY\n=====\n");
        assert_eq!(rule('-', 3), "---");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello World", 5), "He...");
        assert_eq!(truncate("Hi", 5), "Hi");
        assert_eq!(truncate("Test", 4), "Test");
        assert_eq!(truncate("Unknown (£1234.50)", 12), "Unknown (...");
        assert_eq!(truncate("abcdef", 2), "..");
    }
}
