// Low-level database access traits.
// Each repository is responsible for a single entity.
// Reports only reference their submitter by id and e-mail
// and never load or modify the user.

use crate::entities::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait ReportRepo {
    fn create_report(&self, report: &ObstacleReport) -> Result<()>;
    fn get_report(&self, id: &str) -> Result<ObstacleReport>;

    // Both ordered by `reported_at`, newest first
    fn all_reports(&self) -> Result<Vec<ObstacleReport>>;
    fn verified_reports(&self) -> Result<Vec<ObstacleReport>>;

    fn count_reports(&self) -> Result<ReportCounts>;

    // Return the number of affected rows, zero if `id` is unknown
    fn set_report_verified(&self, id: &str, verified: bool) -> Result<usize>;
    fn delete_report(&self, id: &str) -> Result<usize>;
}

pub trait SectionRepo {
    fn create_section(&self, section: &Section) -> Result<()>;
    fn get_section(&self, key: &str) -> Result<Section>;

    /// All sections ordered by page and key.
    fn all_sections(&self) -> Result<Vec<Section>>;
    fn count_sections(&self) -> Result<usize>;

    /// Fails with [`Error::NotFound`] if no section exists for `key`.
    fn update_section(&self, key: &str, update: &SectionUpdate, updated_at: Timestamp)
        -> Result<()>;
}

pub trait UserRepo {
    fn create_user(&self, user: &User) -> Result<()>;
    fn get_user_by_email(&self, email: &EmailAddress) -> Result<User>;
    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>> {
        match self.get_user_by_email(email) {
            Ok(user) => Ok(Some(user)),
            Err(Error::NotFound) => Ok(None),
            Err(err) => Err(err),
        }
    }
}
