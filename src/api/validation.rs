//! Input checks for records inserted outside the HTTP surface.

use regex::Regex;

lazy_static::lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap();
}

// Column widths of the usuario table.
pub const MAX_NAME_LEN: usize = 250;
pub const MAX_EMAIL_LEN: usize = 120;
pub const MAX_GENERO_LEN: usize = 80;

pub fn validate_email(email: &str) -> bool {
    ensure_max_len(email, MAX_EMAIL_LEN) && EMAIL_RE.is_match(email)
}

pub fn ensure_max_len(value: &str, max: usize) -> bool {
    value.chars().count() <= max
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(validate_email("luke@rebellion.org"));
        assert!(validate_email("r2.d2+astromech@naboo.gov"));
    }

    #[test]
    fn rejects_malformed_or_oversized_addresses() {
        assert!(!validate_email("vader"));
        assert!(!validate_email("vader@empire"));
        let long = format!("{}@empire.gov", "x".repeat(MAX_EMAIL_LEN));
        assert!(!validate_email(&long));
    }

    #[test]
    fn counts_characters_not_bytes() {
        assert!(ensure_max_len("ñññ", 3));
        assert!(!ensure_max_len("abcd", 3));
    }
}
