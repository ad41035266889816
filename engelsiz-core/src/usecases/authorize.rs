use super::prelude::*;

/// A user whose admin role has been verified.
///
/// Only obtainable through [`authorize_admin`], which makes it
/// a required argument of all moderation use cases.
#[derive(Debug, Clone)]
pub struct Admin(User);

impl Admin {
    pub fn user(&self) -> &User {
        &self.0
    }

    pub fn email(&self) -> &EmailAddress {
        &self.0.email
    }
}

/// Anonymous, unknown and non-admin callers all get the same
/// [`Error::Forbidden`].
pub fn authorize_admin<R: UserRepo>(repo: &R, logged_in_email: Option<&str>) -> Result<Admin> {
    match load_logged_in_user(repo, logged_in_email)? {
        Some(user) if user.role.is_admin() => Ok(Admin(user)),
        Some(user) => {
            log::debug!("User {} is not allowed to moderate", user.email);
            Err(Error::Forbidden)
        }
        None => Err(Error::Forbidden),
    }
}

/// Look up the user of a session.
///
/// An e-mail address that is malformed or does not belong
/// to any user is treated like an anonymous session.
pub fn load_logged_in_user<R: UserRepo>(
    repo: &R,
    logged_in_email: Option<&str>,
) -> Result<Option<User>> {
    let Some(email) = logged_in_email.and_then(|s| s.parse::<EmailAddress>().ok()) else {
        return Ok(None);
    };
    Ok(repo.try_get_user_by_email(&email)?)
}
