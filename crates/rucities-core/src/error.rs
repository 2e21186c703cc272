// crates/rucities-core/src/error.rs
use thiserror::Error;

/// Everything that can go wrong while loading or querying a [`RecordStore`].
///
/// Query failures (`NotFound`, `InvalidArgument`) are ordinary return values;
/// adapters pick a response code by matching on the variant. The remaining
/// variants only come out of the loader.
///
/// [`RecordStore`]: crate::RecordStore
#[derive(Debug, Error)]
pub enum GeoError {
    /// No record matches the requested id or name.
    #[error("{0}")]
    NotFound(String),

    /// A paging argument lies outside its valid domain.
    #[error("{0}")]
    InvalidArgument(String),

    /// Ids are duplicated or out of order. Fatal, load time only.
    #[error("dataset invariant violated: {0}")]
    LoadInvariant(String),

    /// A dataset row could not be parsed.
    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot codec error: {0}")]
    Bincode(#[from] bincode::Error),
}

impl GeoError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        GeoError::NotFound(msg.into())
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        GeoError::InvalidArgument(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, GeoError>;
