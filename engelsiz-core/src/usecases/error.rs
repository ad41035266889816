use crate::repositories;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Please fill in all required fields")]
    MissingRequiredField,
    #[error("The answer to the security question is wrong")]
    Captcha,
    #[error("Invalid email address")]
    Email,
    #[error("Invalid password")]
    Password,
    #[error("The user already exists")]
    UserExists,
    #[error("Invalid credentials")]
    Credentials,
    #[error("This is not allowed")]
    Forbidden,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<engelsiz_entities::password::ParseError> for Error {
    fn from(_: engelsiz_entities::password::ParseError) -> Self {
        Self::Password
    }
}

impl From<engelsiz_entities::email::EmailAddressParseError> for Error {
    fn from(_: engelsiz_entities::email::EmailAddressParseError) -> Self {
        Self::Email
    }
}
