//! Basic-auth header derivation for personal access tokens.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Build the `Authorization` header value for a personal access token.
///
/// Azure DevOps accepts PATs as the password half of basic auth with an
/// empty username: `Basic base64(":" + token)`. Pure function of the token;
/// the token itself is never logged.
pub fn basic_header(token: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!(":{token}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_username_token_as_password() {
        // base64(":my-pat")
        assert_eq!(basic_header("my-pat"), "Basic Om15LXBhdA==");
    }

    #[test]
    fn test_header_is_deterministic() {
        assert_eq!(basic_header("t"), basic_header("t"));
    }
}
