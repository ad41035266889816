use super::*;

#[post("/auth/register", format = "application/json", data = "<new_user>")]
pub fn post_register(
    connections: sqlite::Connections,
    cookies: &CookieJar<'_>,
    new_user: JsonResult<json::NewUser>,
) -> Result<json::CurrentUser> {
    let new_user = from_json::new_user(new_user?.into_inner());
    let user = flows::register_user(&connections, new_user)?;
    start_session(cookies, user.email.as_str().to_owned());
    Ok(Json(json::CurrentUser {
        user: Some(user.into()),
    }))
}

#[post("/auth/login", format = "application/json", data = "<login>")]
pub fn post_login(
    connections: sqlite::Connections,
    cookies: &CookieJar<'_>,
    login: JsonResult<json::Credentials>,
) -> Result<json::CurrentUser> {
    let login = login?.into_inner();
    if login.email.trim().is_empty() || login.password.is_empty() {
        return Err(usecases::Error::MissingRequiredField.into());
    }
    let credentials = usecases::Credentials {
        email: &login.email,
        password: &login.password,
    };
    let user = flows::login_with_email(&connections, &credentials)?;
    start_session(cookies, user.email.as_str().to_owned());
    Ok(Json(json::CurrentUser {
        user: Some(user.into()),
    }))
}

#[post("/auth/logout")]
pub fn post_logout(cookies: &CookieJar<'_>) -> Json<json::Success> {
    end_session(cookies);
    Json(json::Success::new())
}

#[get("/auth/me")]
pub fn get_current_user(
    connections: sqlite::Connections,
    auth: Auth,
) -> Result<json::CurrentUser> {
    let user = flows::load_logged_in_user(&connections, auth.account_email())?;
    Ok(Json(json::CurrentUser {
        user: user.map(Into::into),
    }))
}
