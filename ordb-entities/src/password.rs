use std::str::FromStr;

use pwhash::bcrypt;
use thiserror::Error;

/// A one-way hashed password credential.
///
/// The plaintext is consumed on parsing and never stored.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Password(String);

impl Password {
    pub const fn min_len() -> usize {
        6
    }

    /// Rebuild from a hash that was persisted earlier.
    pub const fn from_hash(hash: String) -> Self {
        Self(hash)
    }

    pub fn verify(&self, plain: &str) -> bool {
        bcrypt::verify(plain, &self.0)
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<Password> for String {
    fn from(from: Password) -> Self {
        from.0
    }
}

#[derive(Debug, Error)]
#[error("Invalid password")]
pub struct ParseError;

impl FromStr for Password {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Password, Self::Err> {
        if s.len() < Self::min_len() {
            return Err(ParseError);
        }
        let hash = bcrypt::hash(s).map_err(|_| ParseError)?;
        Ok(Self(hash))
    }
}
