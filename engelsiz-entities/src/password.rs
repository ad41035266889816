use std::{fmt, str::FromStr};

use thiserror::Error;

pub const MIN_PASSWORD_LEN: usize = 6;

/// A bcrypt password hash.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub const fn from_hash(hash: String) -> Self {
        Self(hash)
    }

    pub fn as_hash(&self) -> &str {
        &self.0
    }

    pub fn verify(&self, plain: &str) -> bool {
        pwhash::bcrypt::verify(plain, &self.0)
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("The password must contain at least {MIN_PASSWORD_LEN} characters")]
    TooShort,
    #[error(transparent)]
    Hash(#[from] pwhash::error::Error),
}

/// Hashes a plain text password.
impl FromStr for Password {
    type Err = ParseError;
    fn from_str(plain: &str) -> Result<Self, Self::Err> {
        if plain.chars().count() < MIN_PASSWORD_LEN {
            return Err(ParseError::TooShort);
        }
        Ok(Self(pwhash::bcrypt::hash(plain)?))
    }
}
