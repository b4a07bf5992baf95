use thiserror::Error;

/// Errors produced by this crate
///
/// Construction-time kind validation is the only fallible operation;
/// every append and the encoder itself are total.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A value outside the protocol's accepted vocabulary was supplied
    #[error("invalid pointer kind '{0}', expected one of: mouse, pen, touch")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, Error>;
