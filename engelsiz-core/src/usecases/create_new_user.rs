use super::prelude::*;
use crate::RepoError;

#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Register a new courier account.
pub fn create_new_user<R: UserRepo>(repo: &R, u: NewUser) -> Result<User> {
    create_user_with_role(repo, u, Role::Courier)
}

/// Create the configured admin account unless a user
/// with the same e-mail address already exists.
pub fn create_admin_if_missing<R: UserRepo>(repo: &R, u: NewUser) -> Result<Option<User>> {
    let email = u.email.parse::<EmailAddress>()?;
    if repo.try_get_user_by_email(&email)?.is_some() {
        log::debug!("Admin account {email} already exists");
        return Ok(None);
    }
    let admin = create_user_with_role(repo, u, Role::Admin)?;
    log::info!("Created admin account {}", admin.email);
    Ok(Some(admin))
}

fn create_user_with_role<R: UserRepo>(repo: &R, u: NewUser, role: Role) -> Result<User> {
    let NewUser {
        name,
        email,
        password,
    } = u;
    let name = name.trim();
    if name.is_empty() || email.trim().is_empty() || password.is_empty() {
        return Err(Error::MissingRequiredField);
    }
    let email = email.parse::<EmailAddress>()?;
    let password = password.parse::<Password>()?;
    if repo.try_get_user_by_email(&email)?.is_some() {
        return Err(Error::UserExists);
    }
    let new_user = User {
        id: Id::new(),
        name: name.to_owned(),
        email,
        password,
        role,
        created_at: Timestamp::now(),
    };
    log::debug!("Creating new user: email = {}", new_user.email);
    repo.create_user(&new_user).map_err(|err| match err {
        RepoError::AlreadyExists => Error::UserExists,
        err => Error::Repo(err),
    })?;
    Ok(new_user)
}
