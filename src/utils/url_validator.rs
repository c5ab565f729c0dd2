//! URL format validation.

use url::Url;

/// Returns true iff the string parses as a well-formed absolute URL with
/// both a scheme and an authority.
///
/// No network or reachability check is performed. Scheme-only URLs such as
/// `mailto:` links are rejected because they carry no host to redirect to.
pub fn is_valid_url(candidate: &str) -> bool {
    match Url::parse(candidate) {
        Ok(url) => url.has_host(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_and_https() {
        assert!(is_valid_url("http://example.com"));
        assert!(is_valid_url("https://example.com/path?q=1#frag"));
    }

    #[test]
    fn test_accepts_other_schemes_with_authority() {
        assert!(is_valid_url("ftp://files.example.com/pub"));
    }

    #[test]
    fn test_rejects_relative_urls() {
        assert!(!is_valid_url("/just/a/path"));
        assert!(!is_valid_url("example.com"));
    }

    #[test]
    fn test_rejects_missing_authority() {
        assert!(!is_valid_url("mailto:user@example.com"));
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(!is_valid_url("not a url"));
        assert!(!is_valid_url(""));
    }
}
