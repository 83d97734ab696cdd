use url::Url;
use validator::ValidationError;

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(message.into())
}

/// Validates that a URL string is an absolute http(s) URL with a host.
///
/// The string itself is never rewritten: dedup compares the exact submitted
/// text, so validation only accepts or rejects.
pub fn validate_url(url_str: &str) -> Result<(), ValidationError> {
    if url_str.trim().is_empty() {
        return Err(invalid("url_empty", "long_url must not be empty"));
    }

    // The parser would silently drop these, but they cannot go into a Location header
    if url_str.chars().any(char::is_control) {
        return Err(invalid("url_control_chars", "URL must not contain control characters"));
    }

    // Stored verbatim, so the parser must not be the one trimming it
    if url_str.trim() != url_str {
        return Err(invalid(
            "url_whitespace",
            "URL must not have leading or trailing whitespace",
        ));
    }

    match Url::parse(url_str) {
        Ok(url) => {
            // Ensure URL has a scheme and host
            if url.scheme().is_empty() || url.host().is_none() {
                return Err(invalid("url_not_absolute", "URL must have a scheme and host"));
            }

            // Only accept HTTP and HTTPS URLs
            if url.scheme() != "http" && url.scheme() != "https" {
                return Err(invalid("url_scheme", "URL scheme must be http or https"));
            }

            // The parser supplies a host for `http:example.com` or `https:\\host`,
            // but a client reading the stored text resolves those against us
            let has_authority = url_str
                .get(url.scheme().len()..)
                .is_some_and(|rest| rest.starts_with("://"));
            if !has_authority {
                return Err(invalid("url_not_absolute", "URL must have a scheme and host"));
            }

            Ok(())
        }
        Err(e) => {
            let mut err = invalid("url_format", "Invalid URL format");
            err.add_param("reason".into(), &e.to_string());
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url_accepts_absolute_http_urls() {
        assert!(validate_url("https://example.com").is_ok());
        assert!(validate_url("https://example.com/a").is_ok());
        assert!(validate_url("http://example.com/path?query=value#frag").is_ok());
        assert!(validate_url("http://127.0.0.1:8080/").is_ok());
        assert!(validate_url("https://[::1]/x").is_ok());
    }

    #[test]
    fn test_validate_url_rejects_malformed_input() {
        assert!(validate_url("").is_err());
        assert!(validate_url("   ").is_err());
        assert!(validate_url("not-a-url").is_err());
        assert!(validate_url("/relative/path").is_err());
        assert!(validate_url("example.com").is_err());
        assert!(validate_url("https://").is_err());
        assert!(validate_url("https://example.com/a\nb").is_err());
        assert!(validate_url("https://example.com/\t").is_err());
    }

    #[test]
    fn test_validate_url_rejects_input_the_parser_would_rewrite() {
        // No `//` authority in the submitted text
        assert!(validate_url("http:example.com").is_err());
        assert!(validate_url("https:/example.com").is_err());
        assert!(validate_url("https:\\\\example.com\\a").is_err());
        assert!(validate_url("https:/\\example.com").is_err());

        // Surrounding whitespace
        assert!(validate_url(" https://example.com/a").is_err());
        assert!(validate_url("https://example.com/a ").is_err());

        let err = validate_url("http:example.com").unwrap_err();
        assert_eq!(err.code, "url_not_absolute");
    }

    #[test]
    fn test_validate_url_accepts_uppercase_scheme() {
        assert!(validate_url("HTTPS://example.com/a").is_ok());
    }

    #[test]
    fn test_validate_url_rejects_other_schemes() {
        assert!(validate_url("ftp://example.com").is_err());
        assert!(validate_url("mailto:someone@example.com").is_err());
        assert!(validate_url("file:///etc/passwd").is_err());
    }

    #[test]
    fn test_validation_error_carries_message() {
        let err = validate_url("not-a-url").unwrap_err();
        assert_eq!(err.code, "url_format");
        assert_eq!(err.message.as_deref(), Some("Invalid URL format"));
    }
}
