use super::json_error_response;
use engelsiz_application::error::{AppError, BError};
pub use engelsiz_core::{repositories::Error as RepoError, usecases::Error as ParameterError};
use rocket::{
    self,
    http::Status,
    response::{self, Responder},
    serde::json::Error as JsonError,
    tokio::task::JoinError,
};
use thiserror::Error;

/// Message of all responses that hide the actual cause.
pub const SERVER_ERROR_MESSAGE: &str = "Server error";

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    App(#[from] AppError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<JsonError<'_>> for Error {
    fn from(err: JsonError) -> Self {
        match err {
            JsonError::Io(err) => Self::Other(err.into()),
            JsonError::Parse(_str, err) => Self::Other(err.into()),
        }
    }
}

impl From<JoinError> for Error {
    fn from(err: JoinError) -> Self {
        Self::Other(err.into())
    }
}

impl From<ParameterError> for Error {
    fn from(err: ParameterError) -> Self {
        Self::App(err.into())
    }
}

impl From<RepoError> for Error {
    fn from(err: RepoError) -> Self {
        Self::App(err.into())
    }
}

impl From<BError> for Error {
    fn from(err: BError) -> Self {
        Self::App(err.into())
    }
}

fn parameter_error_status(err: &ParameterError) -> Status {
    match err {
        ParameterError::Credentials => Status::Unauthorized,
        ParameterError::Forbidden => Status::Forbidden,
        ParameterError::UserExists => Status::Conflict,
        _ => Status::BadRequest,
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &rocket::Request) -> response::Result<'o> {
        if let Error::App(AppError::Business(err)) = &self {
            match err {
                BError::Parameter(err) => {
                    return json_error_response(req, err, parameter_error_status(err));
                }
                BError::Repo(RepoError::NotFound) => {
                    return json_error_response(req, err, Status::NotFound);
                }
                BError::Repo(_) => {}
            }
        }
        error!("Error: {self}");
        json_error_response(req, &SERVER_ERROR_MESSAGE, Status::InternalServerError)
    }
}
