use std::sync::Arc;

use engelsiz_core::gateways::geocode::GeoCodingGateway;
use rocket::{
    http::{Cookie, CookieJar, SameSite},
    request::{FromRequest, Outcome, Request},
    time::Duration,
};

pub const COOKIE_EMAIL_KEY: &str = "engelsiz-user-email";
pub const SESSION_MAX_AGE: Duration = Duration::days(30);

/// The e-mail address of the logged in user, if any.
///
/// Whether the account exists and what it is allowed to do
/// is decided by the use cases.
#[derive(Debug)]
pub struct Auth {
    account_email: Option<String>,
}

impl Auth {
    pub fn account_email(&self) -> Option<&str> {
        self.account_email.as_deref()
    }

    pub fn into_account_email(self) -> Option<String> {
        self.account_email
    }

    fn account_email_from_cookie(request: &Request) -> Option<String> {
        request
            .cookies()
            .get_private(COOKIE_EMAIL_KEY)
            .map(|cookie| cookie.value().to_owned())
            .filter(|email| !email.is_empty())
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Auth {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let account_email = Self::account_email_from_cookie(request);
        Outcome::Success(Self { account_email })
    }
}

pub fn start_session(cookies: &CookieJar<'_>, email: String) {
    cookies.add_private(
        Cookie::build((COOKIE_EMAIL_KEY, email))
            .http_only(true)
            .same_site(SameSite::Lax)
            .max_age(SESSION_MAX_AGE),
    );
}

pub fn end_session(cookies: &CookieJar<'_>) {
    cookies.remove_private(COOKIE_EMAIL_KEY);
}

pub struct GeoCoding(pub Arc<dyn GeoCodingGateway + Send + Sync>);
