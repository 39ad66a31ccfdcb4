//! Password Hashing and Verification
//!
//! Argon2id hashing with:
//! - A tunable work factor (memory / iterations / parallelism)
//! - Zeroization of plaintext material
//! - Constant-time comparison (argon2 internal)
//!
//! The stored form is a single PHC string carrying the algorithm
//! identifier, parameters, salt, and digest, so verification never needs
//! out-of-band state. Malformed stored digests fail verification with
//! `false` rather than surfacing an error to the caller.

use std::fmt;

use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version,
    password_hash::SaltString,
};
use rand::rngs::OsRng;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Maximum password length in Unicode code points
pub const MAX_PASSWORD_LENGTH: usize = 128;

// ============================================================================
// Error Types
// ============================================================================

/// Password policy violation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    /// Password is too long
    #[error("Password must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },

    /// Password contains only whitespace
    #[error("Password cannot be empty or contain only whitespace")]
    EmptyOrWhitespace,

    /// Password contains invalid characters (control characters)
    #[error("Password contains invalid control characters")]
    InvalidCharacter,
}

/// Password hashing errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    /// Hashing operation failed
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// Invalid hash format
    #[error("Invalid password hash format")]
    InvalidHashFormat,

    /// Work factor parameters rejected by the algorithm
    #[error("Invalid work factor: {0}")]
    InvalidWorkFactor(String),
}

// ============================================================================
// Work Factor
// ============================================================================

/// Tunable Argon2id cost parameters
///
/// Controls brute-force resistance. Defaults follow the OWASP
/// recommendation: m=19456 KiB, t=2, p=1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkFactor {
    /// Memory cost in KiB
    pub memory_kib: u32,
    /// Number of iterations
    pub iterations: u32,
    /// Degree of parallelism
    pub parallelism: u32,
}

impl Default for WorkFactor {
    fn default() -> Self {
        Self {
            memory_kib: 19_456,
            iterations: 2,
            parallelism: 1,
        }
    }
}

impl WorkFactor {
    /// A deliberately cheap work factor for tests
    ///
    /// Not for production use; it exists so the test suite does not spend
    /// seconds per hash.
    pub fn fast_insecure() -> Self {
        Self {
            memory_kib: 8,
            iterations: 1,
            parallelism: 1,
        }
    }

    fn hasher(&self) -> Result<Argon2<'static>, PasswordHashError> {
        let params = Params::new(self.memory_kib, self.iterations, self.parallelism, None)
            .map_err(|e| PasswordHashError::InvalidWorkFactor(e.to_string()))?;
        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }
}

// ============================================================================
// Plain Password (Zeroized on drop)
// ============================================================================

/// Plaintext password with automatic memory zeroization
///
/// Does not implement `Clone`; Debug output is redacted. The value is
/// NFKC-normalized on construction so visually identical input always
/// hashes identically.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct PlainPassword(String);

impl PlainPassword {
    /// Create a new plaintext password with validation
    ///
    /// Rejects empty/whitespace-only input, control characters, and
    /// anything longer than [`MAX_PASSWORD_LENGTH`] code points.
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        let normalized: String = raw.nfkc().collect();

        if normalized.trim().is_empty() {
            return Err(PasswordPolicyError::EmptyOrWhitespace);
        }

        // Count Unicode code points, not bytes
        let char_count = normalized.chars().count();
        if char_count > MAX_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooLong {
                max: MAX_PASSWORD_LENGTH,
                actual: char_count,
            });
        }

        for ch in normalized.chars() {
            if ch.is_control() {
                return Err(PasswordPolicyError::InvalidCharacter);
            }
        }

        Ok(Self(normalized))
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Hash the password using Argon2id
    ///
    /// Generates a fresh random salt per call; two hashes of the same
    /// password never compare equal as strings.
    pub fn hash(&self, work_factor: &WorkFactor) -> Result<PasswordDigest, PasswordHashError> {
        let salt = SaltString::generate(OsRng);
        let argon2 = work_factor.hasher()?;

        let hash = argon2
            .hash_password(self.as_bytes(), &salt)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        Ok(PasswordDigest {
            hash: hash.to_string(),
        })
    }
}

impl fmt::Debug for PlainPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PlainPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// Password Digest (Safe to store)
// ============================================================================

/// Hashed password in PHC string format
///
/// Safe to persist; carries algorithm, version, parameters, salt, and
/// digest in one encoded string.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordDigest {
    hash: String,
}

impl PasswordDigest {
    /// Create from a PHC string (e.g. loaded from the store)
    pub fn from_phc_string(s: impl Into<String>) -> Result<Self, PasswordHashError> {
        let hash = s.into();

        PasswordHash::new(&hash).map_err(|_| PasswordHashError::InvalidHashFormat)?;

        Ok(Self { hash })
    }

    /// Get the PHC string for storage
    pub fn as_phc_string(&self) -> &str {
        &self.hash
    }

    /// Verify a password against this digest
    ///
    /// Recomputes with the salt and parameters embedded in the PHC
    /// string. A digest that fails to parse verifies as `false`.
    pub fn verify(&self, password: &PlainPassword) -> bool {
        let parsed_hash = match PasswordHash::new(&self.hash) {
            Ok(h) => h,
            Err(_) => return false,
        };

        // Argon2 uses constant-time comparison internally
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }
}

impl fmt::Debug for PasswordDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordDigest")
            .field("hash", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn wf() -> WorkFactor {
        WorkFactor::fast_insecure()
    }

    #[test]
    fn test_password_empty() {
        let result = PlainPassword::new("".to_string());
        assert!(matches!(result, Err(PasswordPolicyError::EmptyOrWhitespace)));
    }

    #[test]
    fn test_password_whitespace_only() {
        let result = PlainPassword::new("        ".to_string());
        assert!(matches!(result, Err(PasswordPolicyError::EmptyOrWhitespace)));
    }

    #[test]
    fn test_password_too_long() {
        let long_password = "a".repeat(MAX_PASSWORD_LENGTH + 1);
        let result = PlainPassword::new(long_password);
        assert!(matches!(result, Err(PasswordPolicyError::TooLong { .. })));
    }

    #[test]
    fn test_password_control_characters() {
        let result = PlainPassword::new("pass\u{0007}word".to_string());
        assert!(matches!(result, Err(PasswordPolicyError::InvalidCharacter)));
    }

    #[test]
    fn test_short_password_accepted() {
        // Length policy is deliberately light; strength comes from the
        // hashing work factor.
        assert!(PlainPassword::new("pw1".to_string()).is_ok());
    }

    #[test]
    fn test_hash_and_verify() {
        let password = PlainPassword::new("TestPassword123!".to_string()).unwrap();
        let digest = password.hash(&wf()).unwrap();

        assert!(digest.verify(&password));

        let wrong = PlainPassword::new("WrongPassword123!".to_string()).unwrap();
        assert!(!digest.verify(&wrong));
    }

    #[test]
    fn test_fresh_salt_per_hash() {
        let password = PlainPassword::new("TestPassword123!".to_string()).unwrap();
        let a = password.hash(&wf()).unwrap();
        let b = password.hash(&wf()).unwrap();

        assert_ne!(a.as_phc_string(), b.as_phc_string());
        assert!(a.verify(&password));
        assert!(b.verify(&password));
    }

    #[test]
    fn test_phc_string_roundtrip() {
        let password = PlainPassword::new("TestPassword123!".to_string()).unwrap();
        let digest = password.hash(&wf()).unwrap();

        let phc = digest.as_phc_string().to_string();
        let restored = PasswordDigest::from_phc_string(phc).unwrap();

        assert!(restored.verify(&password));
    }

    #[test]
    fn test_phc_string_embeds_work_factor() {
        let password = PlainPassword::new("TestPassword123!".to_string()).unwrap();
        let digest = password.hash(&wf()).unwrap();

        let phc = digest.as_phc_string();
        assert!(phc.starts_with("$argon2id$"));
        assert!(phc.contains("m=8,t=1,p=1"));
    }

    #[test]
    fn test_invalid_phc_string() {
        assert!(PasswordDigest::from_phc_string("not_a_valid_hash").is_err());
    }

    #[test]
    fn test_unicode_normalization() {
        // NFC "é" and NFD "e\u{0301}" normalize to the same plaintext
        let a = PlainPassword::new("caf\u{00e9}-terrace".to_string()).unwrap();
        let b = PlainPassword::new("cafe\u{0301}-terrace".to_string()).unwrap();

        let digest = a.hash(&wf()).unwrap();
        assert!(digest.verify(&b));
    }

    #[test]
    fn test_debug_redaction() {
        let password = PlainPassword::new("secret-value".to_string()).unwrap();
        let debug_output = format!("{:?}", password);
        assert!(debug_output.contains("REDACTED"));
        assert!(!debug_output.contains("secret-value"));

        let digest = password.hash(&wf()).unwrap();
        let debug_output = format!("{:?}", digest);
        assert!(debug_output.contains("HASH"));
        assert!(!debug_output.contains("argon2id"));
    }
}
