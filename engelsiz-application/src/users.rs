use super::*;

pub fn register_user(connections: &sqlite::Connections, new_user: usecases::NewUser) -> Result<User> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::create_new_user(conn, new_user).inspect_err(|err| {
            info!("Registration failed: {err}");
        })
    })?)
}

pub fn login_with_email(
    connections: &sqlite::Connections,
    credentials: &usecases::Credentials,
) -> Result<User> {
    let user = usecases::login_with_email(&connections.shared()?, credentials).inspect_err(|_| {
        info!("Login failed for {}", credentials.email);
    })?;
    Ok(user)
}

pub fn load_logged_in_user(
    connections: &sqlite::Connections,
    logged_in_email: Option<&str>,
) -> Result<Option<User>> {
    Ok(usecases::load_logged_in_user(
        &connections.shared()?,
        logged_in_email,
    )?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    fn new_user(email: &str) -> usecases::NewUser {
        usecases::NewUser {
            name: "Mehmet".into(),
            email: email.into(),
            password: "secret1".into(),
        }
    }

    #[test]
    fn register_and_login() {
        let fixture = BackendFixture::new();
        let user = flows::register_user(&fixture.db_connections, new_user("Mehmet@Example.com"))
            .unwrap();
        assert_eq!(user.role, Role::Courier);
        assert_eq!(user.email.as_str(), "mehmet@example.com");

        let credentials = usecases::Credentials {
            email: "mehmet@example.com",
            password: "secret1",
        };
        let logged_in = flows::login_with_email(&fixture.db_connections, &credentials).unwrap();
        assert_eq!(logged_in.id, user.id);

        let me = flows::load_logged_in_user(&fixture.db_connections, Some("mehmet@example.com"))
            .unwrap()
            .unwrap();
        assert_eq!(me.name, "Mehmet");
    }

    #[test]
    fn register_twice() {
        let fixture = BackendFixture::new();
        flows::register_user(&fixture.db_connections, new_user("mehmet@example.com")).unwrap();
        let err = flows::register_user(&fixture.db_connections, new_user("mehmet@example.com"))
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::Business(BError::Parameter(usecases::Error::UserExists))
        ));
    }

    #[test]
    fn login_with_wrong_password() {
        let fixture = BackendFixture::new();
        flows::register_user(&fixture.db_connections, new_user("mehmet@example.com")).unwrap();
        let credentials = usecases::Credentials {
            email: "mehmet@example.com",
            password: "secret2",
        };
        assert!(matches!(
            flows::login_with_email(&fixture.db_connections, &credentials),
            Err(AppError::Business(BError::Parameter(
                usecases::Error::Credentials
            )))
        ));
    }
}
