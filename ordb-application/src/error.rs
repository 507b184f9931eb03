use std::io;

use ordb_core::{repositories::Error as RepoError, usecases::Error as ParameterError};
use thiserror::Error;

pub use ordb_core::repositories;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Business(#[from] BError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> AppError {
        AppError::Business(BError::Repo(err))
    }
}

impl From<ParameterError> for AppError {
    fn from(err: ParameterError) -> AppError {
        AppError::Business(err.into())
    }
}

#[derive(Debug, Error)]
pub enum BError {
    #[error(transparent)]
    Parameter(#[from] ParameterError),
    #[error(transparent)]
    Repo(#[from] RepoError),
}

impl From<ordb_entities::password::ParseError> for AppError {
    fn from(err: ordb_entities::password::ParseError) -> Self {
        BError::Parameter(err.into()).into()
    }
}

impl From<ordb_entities::email::EmailAddressParseError> for AppError {
    fn from(err: ordb_entities::email::EmailAddressParseError) -> Self {
        BError::Parameter(err.into()).into()
    }
}
