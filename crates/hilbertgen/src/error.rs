use thiserror::Error;

/// Errors produced while constructing a curve.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The requested curve order falls outside the supported range.
    #[error("invalid curve order {0}: supported orders are 1..=13")]
    Order(u32),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
