pub mod error_location;

// -------------------------------------------------------------------------- //

use crate::ErrorLocation;

use std::error::Error as StdError;
use std::panic::Location;
use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum UserError {
    #[error("Invalid user status: {value} {location}")]
    InvalidStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("user not found {location}")]
    NotFound { location: ErrorLocation },

    #[error("unexpected error in users ({op}): {source} {location}")]
    Internal {
        op: &'static str,
        source: Box<dyn StdError + Send + Sync>,
        location: ErrorLocation,
    },
}

impl UserError {
    #[track_caller]
    pub fn invalid_status(value: impl Into<String>) -> Self {
        Self::InvalidStatus {
            value: value.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found() -> Self {
        Self::NotFound {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Wrap a store failure, recording the operation it surfaced from.
    /// The cause stays reachable through the standard source chain.
    #[track_caller]
    pub fn internal<E>(op: &'static str, source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::Internal {
            op,
            source: Box::new(source),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::InvalidStatus { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Internal { .. })
    }

    /// Operation name recorded on an internal error, if any
    pub fn op(&self) -> Option<&'static str> {
        match self {
            Self::Internal { op, .. } => Some(op),
            _ => None,
        }
    }
}

pub type Result<T> = StdResult<T, UserError>;
