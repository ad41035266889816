use super::*;

impl UserRepo for DbReadOnly<'_> {
    fn create_user(&self, _user: &User) -> Result<()> {
        Err(read_only_err())
    }
    fn get_user_by_email(&self, email: &EmailAddress) -> Result<User> {
        get_user_by_email(&mut self.conn.borrow_mut(), email)
    }
}

impl UserRepo for DbConnection<'_> {
    fn create_user(&self, user: &User) -> Result<()> {
        create_user(&mut self.conn.borrow_mut(), user)
    }
    fn get_user_by_email(&self, email: &EmailAddress) -> Result<User> {
        get_user_by_email(&mut self.conn.borrow_mut(), email)
    }
}

fn create_user(conn: &mut SqliteConnection, u: &User) -> Result<()> {
    let new_user = models::NewUser {
        id: u.id.as_str(),
        name: &u.name,
        email: u.email.as_str(),
        password_hash: u.password.as_hash(),
        role: u.role.as_ref(),
        created_at: u.created_at.as_millis(),
    };
    diesel::insert_into(schema::users::table)
        .values(&new_user)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn get_user_by_email(conn: &mut SqliteConnection, email: &EmailAddress) -> Result<User> {
    use schema::users::dsl;
    let entity = dsl::users
        .filter(dsl::email.eq(email.as_str()))
        .first::<models::UserEntity>(conn)
        .map_err(from_diesel_err)?;
    user_from_entity(entity)
}

fn user_from_entity(entity: models::UserEntity) -> Result<User> {
    let models::UserEntity {
        id,
        name,
        email,
        password_hash,
        role,
        created_at,
    } = entity;
    let role = role
        .parse::<Role>()
        .map_err(|err| anyhow!("Invalid role '{role}' of user {id}: {err}"))?;
    Ok(User {
        id: id.into(),
        name,
        email: EmailAddress::new_unchecked(email),
        password: Password::from_hash(password_hash),
        role,
        created_at: Timestamp::from_millis(created_at),
    })
}
