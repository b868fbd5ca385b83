//! Domain Value Objects
//!
//! Immutable value types and pure rules for the contact domain.

/// Whitespace as matched by `\s` in an ECMAScript regular expression.
///
/// Differs from [`char::is_whitespace`]: U+FEFF is included, U+0085 is not.
fn is_ecma_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{000B}'
            | '\u{000C}'
            | '\r'
            | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Permissive email format check.
///
/// Equivalent to `^[^\s@]+@[^\s@]+\.[^\s@]+$`: a non-empty local part, a
/// single `@`, and a domain with at least one `.` that has a character on
/// each side. Consecutive dots are accepted; a domain without a dot is not.
pub fn is_valid_email(candidate: &str) -> bool {
    if candidate.chars().any(is_ecma_whitespace) {
        return false;
    }

    let Some((local, domain)) = candidate.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    // '.' is one byte, so `i + 1 < len` means at least one char follows it
    domain
        .char_indices()
        .skip(1)
        .any(|(i, c)| c == '.' && i + 1 < domain.len())
}

/// Branding interpolated into outgoing mail
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteBranding {
    pub name: String,
    pub tagline: String,
    pub url: String,
}

impl SiteBranding {
    /// Host part of the site URL, for display (`https://katplay.fun` -> `katplay.fun`)
    pub fn display_host(&self) -> &str {
        let without_scheme = self
            .url
            .split_once("://")
            .map_or(self.url.as_str(), |(_, rest)| rest);
        without_scheme.trim_end_matches('/')
    }
}

impl Default for SiteBranding {
    fn default() -> Self {
        Self {
            name: "Katplay".to_string(),
            tagline: "Born to Kat, built to play.".to_string(),
            url: "https://katplay.fun".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("user.name+tag@example.co.jp"));
        assert!(is_valid_email("ユーザー@例え.テスト"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("a@@b.com"));
        assert!(!is_valid_email("a@b@c.com"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("No email"));
    }

    #[test]
    fn test_permissive_forms_still_match() {
        assert!(is_valid_email("a@b..c"));
        assert!(is_valid_email("a@.b.c"));
        assert!(is_valid_email("a.@b.c"));
    }

    #[test]
    fn test_whitespace_anywhere_rejects() {
        assert!(!is_valid_email("a@b.co "));
        assert!(!is_valid_email("a@b.co\n"));
        assert!(!is_valid_email("a\t@b.co"));
        assert!(!is_valid_email("a@b\u{3000}.co"));
        assert!(!is_valid_email("\u{FEFF}a@b.co"));
    }

    #[test]
    fn test_next_line_is_not_ecma_whitespace() {
        assert!(is_valid_email("a\u{0085}@b.co"));
    }

    #[test]
    fn test_display_host() {
        let site = SiteBranding::default();
        assert_eq!(site.display_host(), "katplay.fun");

        let site = SiteBranding {
            url: "http://localhost:3000/".to_string(),
            ..SiteBranding::default()
        };
        assert_eq!(site.display_host(), "localhost:3000");
    }
}
