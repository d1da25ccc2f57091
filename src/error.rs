use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("failed to parse '{0}' as rational")]
    Parse(String),

    /// non-positive side, wrong side count or failed triangle inequality
    #[error("invalid triangle '{0}'")]
    InvalidTriangle(String),

    /// area is not rational
    #[error("triangle '{0}' is not heronian")]
    NonHeronian(String),

    /// semiperimeter or inradius differs from an earlier input
    #[error("triangle '{0}' has mismatched properties")]
    MismatchedInvariants(String),
}
