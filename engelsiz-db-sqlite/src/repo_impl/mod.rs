// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use anyhow::anyhow;
use diesel::{
    prelude::*,
    result::{DatabaseErrorKind, Error as DieselError},
};

use engelsiz_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::*;

mod report;
mod section;
mod user;

type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            repo::Error::AlreadyExists
        }
        _ => repo::Error::Other(err.into()),
    }
}

fn read_only_err() -> repo::Error {
    anyhow!("Cannot modify data through a read-only connection").into()
}
