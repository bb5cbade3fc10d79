//! Credentials value object
//!
//! Pairs an email address with a password digest. The plain password is only
//! seen by the constructor, which validates it and keeps its SHA-256 digest.

use std::fmt;

use crate::error::{LibraryError, LibraryResult};

/// SHA-256 digest of a password, stored with a `sha256:` prefix
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PasswordDigest(String);

impl PasswordDigest {
    /// Prefix for SHA-256 digests
    pub const PREFIX: &'static str = "sha256:";

    /// Digest a plain password
    pub fn of(password: &str) -> Self {
        use sha2::{Digest, Sha256};
        let hash = Sha256::digest(password.as_bytes());
        Self(format!("{}{:x}", Self::PREFIX, hash))
    }

    /// Check a plain password against this digest
    pub fn matches(&self, password: &str) -> bool {
        *self == Self::of(password)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Just the hex part without prefix
    pub fn hex(&self) -> &str {
        self.0.strip_prefix(Self::PREFIX).unwrap_or(&self.0)
    }
}

impl fmt::Debug for PasswordDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordDigest(..)")
    }
}

/// Login credentials for one user, keyed by email
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    email: String,
    digest: PasswordDigest,
}

impl Credentials {
    /// Minimum accepted password length
    pub const MIN_PASSWORD_LEN: usize = 6;

    /// Validate and build credentials.
    ///
    /// The email must contain `@` and the password must be at least
    /// [`Self::MIN_PASSWORD_LEN`] characters long.
    pub fn new(email: impl Into<String>, password: &str) -> LibraryResult<Self> {
        let email = email.into();
        if !email.contains('@') {
            return Err(LibraryError::InvalidEmail { email });
        }
        if password.chars().count() < Self::MIN_PASSWORD_LEN {
            return Err(LibraryError::PasswordTooShort {
                min: Self::MIN_PASSWORD_LEN,
            });
        }
        Ok(Self {
            email,
            digest: PasswordDigest::of(password),
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn digest(&self) -> &PasswordDigest {
        &self.digest
    }

    /// Exact email match plus password match
    pub fn verify(&self, email: &str, password: &str) -> bool {
        self.email == email && self.digest.matches(password)
    }
}
