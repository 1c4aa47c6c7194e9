/// Errors reported by this crate.
///
/// Lookups and removals never fail: a missing key is reported as `None` or
/// `false`. Errors are reserved for arguments no table can be built from.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An argument violated the calling contract
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

/// Result alias for fallible operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;
