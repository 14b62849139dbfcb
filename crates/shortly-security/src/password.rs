//! Password hashing with bcrypt
//!
//! bcrypt salts every hash and its verify runs in constant time with respect
//! to the stored digest, so a mismatch is indistinguishable from timing alone.

use thiserror::Error;

use shortly_shared::constants::BCRYPT_COST;

#[derive(Error, Debug)]
pub enum PasswordError {
    #[error("Hash error: {0}")]
    HashError(String),
}

pub struct PasswordService;

impl PasswordService {
    pub fn hash(password: &str) -> Result<String, PasswordError> {
        bcrypt::hash(password, BCRYPT_COST).map_err(|e| PasswordError::HashError(e.to_string()))
    }

    pub fn verify(password: &str, hash: &str) -> Result<bool, PasswordError> {
        bcrypt::verify(password, hash).map_err(|e| PasswordError::HashError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify() {
        let hash = PasswordService::hash("hunter22").unwrap();
        assert!(PasswordService::verify("hunter22", &hash).unwrap());
        assert!(!PasswordService::verify("hunter23", &hash).unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let a = PasswordService::hash("same-password").unwrap();
        let b = PasswordService::hash("same-password").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_garbage_hash_is_an_error() {
        assert!(PasswordService::verify("anything", "not-a-bcrypt-hash").is_err());
    }
}
