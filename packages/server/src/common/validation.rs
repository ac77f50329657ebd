// Field checks shared by the job and account endpoints

use validator::ValidateEmail;

/// Syntactic email check (RFC 5322 / HTML5 rules from `validator`)
pub fn is_valid_email(email: &str) -> bool {
    email.validate_email()
}

/// The value of a required text field, or `None` when it is missing or empty
pub fn filled(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("hr@acme.test"));
        assert!(is_valid_email("first.last+tag@example.co.uk"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("missing@"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_filled() {
        assert_eq!(filled(Some("x".into())), Some("x".into()));
        assert_eq!(filled(Some(String::new())), None);
        assert_eq!(filled(None), None);
    }
}
