//! Normalization of arbitrary errors into structured errors

use super::types::{BoxError, Error};
use std::sync::Arc;

/// Turn any error into a structured [`Error`]
///
/// A structured error passed in is handed back unchanged, chain included.
/// Anything else becomes the cause of a fresh single-node chain.
#[track_caller]
#[must_use]
pub fn ensure<E: Into<BoxError>>(err: E) -> Error {
    match err.into().downcast::<Error>() {
        Ok(sp) => *sp,
        Err(other) => {
            log::trace!("wrapping foreign error: {other}");
            Error::builder_from_cause(Arc::from(other)).build()
        }
    }
}

/// Extension for results whose error should become structured
pub trait ResultExt<T> {
    /// Map the error through [`ensure`]
    fn ensured(self) -> Result<T, Error>;
}

impl<T, E: Into<BoxError>> ResultExt<T> for Result<T, E> {
    #[track_caller]
    fn ensured(self) -> Result<T, Error> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(ensure(err)),
        }
    }
}
