use std::{fmt, str::FromStr};

use thiserror::Error;

/// A syntactically valid, normalized (trimmed and lower-cased) e-mail address.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Wrap an address that has already been validated, e.g. when
    /// loading it from the database.
    pub const fn new_unchecked(address: String) -> Self {
        Self(address)
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

#[derive(Debug, Error)]
#[error("Invalid E-Mail address")]
pub struct EmailAddressParseError;

impl FromStr for EmailAddress {
    type Err = EmailAddressParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let address = s.trim().to_lowercase();
        if !fast_chemail::is_valid_email(&address) {
            return Err(EmailAddressParseError);
        }
        Ok(Self(address))
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
