#[macro_use]
extern crate log;

mod initialize;
mod moderate_reports;
mod sections;
mod submit_report;
mod users;

pub mod prelude {
    pub use super::{
        initialize::*, moderate_reports::*, sections::*, submit_report::*, users::*,
    };
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use engelsiz_core::{entities::*, usecases};

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod sqlite {
    pub use engelsiz_db_sqlite::Connections;
}
