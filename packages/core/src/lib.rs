//! Chained structured errors for lighthouse
//!
//! This crate provides:
//! - [`Error`]: a structured error carrying a cause, a [`Level`], localized
//!   messages and a content-hash identity, linked to the error it supersedes
//! - [`Chain`]: newest-first traversal of such a chain
//! - Shallow (`is`), deep (`deep_is`) and identity (`is_sp`) comparison
//! - [`hooks`]: rendering of an error into log fields for a given level

pub mod hooks;
pub mod identity;
pub mod lang;
pub mod levels;
pub mod sperror;

pub use hooks::Field;
pub use identity::{Digest, Identity};
pub use levels::Level;
pub use sperror::{ensure, Chain, Error, ErrorBuilder, ErrorRecord, RecordError, Result, ResultExt};
