use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Unknown template pattern '{0}' (expected one of: login, payment, profile, search, settings, generic)")]
    UnknownPattern(String),

    #[error("Please enter a description first")]
    EmptyDescription,
}
