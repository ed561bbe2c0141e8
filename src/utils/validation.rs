// src/utils/validation.rs
use regex::Regex;

const MAX_PATH_LENGTH: usize = 512;
const MAX_SLUG_LENGTH: usize = 64;

lazy_static::lazy_static! {
    static ref SLUG_REGEX: Regex = Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap();
    static ref NON_DIGIT_REGEX: Regex = Regex::new(r"\D").unwrap();
}

/// Validates a relative asset path before it is joined onto the asset root.
pub fn is_safe_path(path: &str) -> bool {
    if path.is_empty() || path.len() > MAX_PATH_LENGTH {
        return false;
    }

    if path.contains("..") {
        return false;
    }

    if path.starts_with('/') || path.starts_with('\\') {
        return false;
    }

    // Windows drive letters
    if path.len() >= 2 && path.chars().nth(1) == Some(':') {
        return false;
    }

    if path.chars().any(|c| c.is_control()) {
        return false;
    }

    let dangerous_patterns = ["~", "$", "`", "|", ";", "&", "!", "\\"];
    !dangerous_patterns.iter().any(|pattern| path.contains(pattern))
}

/// Program ids are lowercase kebab-case slugs.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty() && slug.len() <= MAX_SLUG_LENGTH && SLUG_REGEX.is_match(slug)
}

/// Slug rule in the shape `validator`'s `custom` attribute expects.
pub fn validate_slug(slug: &str) -> Result<(), validator::ValidationError> {
    if is_valid_slug(slug) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("slug"))
    }
}

/// Strips everything but digits, e.g. for `wa.me` deep links.
pub fn digits_only(phone: &str) -> String {
    NON_DIGIT_REGEX.replace_all(phone, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_traversal_detection() {
        assert!(!is_safe_path("../etc/passwd"));
        assert!(!is_safe_path("assets/../../etc/passwd"));
        assert!(!is_safe_path("/etc/passwd"));
        assert!(!is_safe_path("C:\\windows"));
        assert!(!is_safe_path(""));
        assert!(is_safe_path("assets/data/programs.json"));
        assert!(is_safe_path("assets/data/programs/ambulance-services.json"));
    }

    #[test]
    fn test_slug_validation() {
        assert!(is_valid_slug("ambulance-services"));
        assert!(is_valid_slug("mfi"));
        assert!(!is_valid_slug("Ambulance"));
        assert!(!is_valid_slug("../secrets"));
        assert!(!is_valid_slug("double--dash"));
        assert!(!is_valid_slug(""));
        assert!(validate_slug("x y").is_err());
    }

    #[test]
    fn test_digits_only() {
        assert_eq!(digits_only("+91 98765-43210"), "919876543210");
        assert_eq!(digits_only("(044) 2345 6789"), "04423456789");
        assert_eq!(digits_only("no digits"), "");
    }
}
