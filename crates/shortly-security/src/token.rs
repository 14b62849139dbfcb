//! Opaque session-token generation
//!
//! Tokens are bearer credentials: 32 bytes from a CSPRNG, hex-encoded so they
//! are cookie- and URL-safe. 256 bits of entropy makes guessing infeasible.

use rand::RngCore;

use shortly_shared::constants::SESSION_TOKEN_BYTES;

pub struct TokenService;

impl TokenService {
    pub fn generate_session_token() -> String {
        let mut bytes = [0u8; SESSION_TOKEN_BYTES];
        rand::rng().fill_bytes(&mut bytes);
        hex::encode(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_is_lowercase_hex() {
        let token = TokenService::generate_session_token();
        assert_eq!(token.len(), SESSION_TOKEN_BYTES * 2);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_tokens_are_distinct() {
        let a = TokenService::generate_session_token();
        let b = TokenService::generate_session_token();
        assert_ne!(a, b);
    }
}
