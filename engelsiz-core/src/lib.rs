pub mod gateways;
pub mod repositories;
pub mod usecases;

pub mod entities {
    pub use engelsiz_entities::{
        address::*, email::*, geo::*, id::*, password::*, report::*, section::*, time::*,
        user::*,
    };
}

pub use self::repositories::Error as RepoError;
