//! Base-URL normalization: trim, strip trailing slashes, default fallback.

use super::DEFAULT_API_BASE_URL;

/// Normalizes a raw base-URL candidate.
///
/// - Trims leading/trailing whitespace
/// - Substitutes the default when the trimmed value is empty
/// - Strips all trailing `/` characters
/// - Substitutes the (unstripped) default when stripping empties the string
pub fn sanitize_base_url(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return DEFAULT_API_BASE_URL.to_string();
    }
    let without_trailing_slash = trimmed.trim_end_matches('/');
    if without_trailing_slash.is_empty() {
        DEFAULT_API_BASE_URL.to_string()
    } else {
        without_trailing_slash.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_trailing_slashes() {
        assert_eq!(
            sanitize_base_url("http://example.com/api/"),
            "http://example.com/api"
        );
        assert_eq!(
            sanitize_base_url("http://example.com///"),
            "http://example.com"
        );
    }

    #[test]
    fn trims_whitespace() {
        assert_eq!(
            sanitize_base_url("  http://example.com  "),
            "http://example.com"
        );
    }

    #[test]
    fn blank_falls_back_to_default() {
        assert_eq!(sanitize_base_url(""), DEFAULT_API_BASE_URL);
        assert_eq!(sanitize_base_url("   "), DEFAULT_API_BASE_URL);
    }

    #[test]
    fn slashes_only_falls_back_to_default() {
        assert_eq!(sanitize_base_url("/"), DEFAULT_API_BASE_URL);
        assert_eq!(sanitize_base_url("///"), DEFAULT_API_BASE_URL);
        assert_eq!(sanitize_base_url("  //  "), DEFAULT_API_BASE_URL);
    }
}
