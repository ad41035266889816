mod authorize;
mod create_new_report;
mod create_new_user;
mod error;
mod load_reports;
mod login;
mod resolve_location;
mod review_reports;
mod sections;

#[cfg(test)]
pub mod tests;

pub use self::{
    authorize::*, create_new_report::*, create_new_user::*, error::Error, load_reports::*,
    login::*, resolve_location::*, review_reports::*, sections::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::*};
}
