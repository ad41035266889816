use strum::{AsRefStr, EnumString};

use crate::{email::EmailAddress, id::Id, password::Password, time::Timestamp};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id         : Id,
    pub name       : String,
    pub email      : EmailAddress,
    pub password   : Password,
    pub role       : Role,
    pub created_at : Timestamp,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, AsRefStr, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum Role {
    #[default]
    Courier,
    Admin,
}

impl Role {
    pub fn is_admin(self) -> bool {
        self == Self::Admin
    }
}
