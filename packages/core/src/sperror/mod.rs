//! Structured errors
//!
//! Provides the chained error type used across lighthouse:
//! - Content-hash identity that survives serialization
//! - A chain of superseded errors with destructive cursor traversal
//! - Shallow, deep and identity comparison
//! - Normalization of foreign errors via [`ensure`]

pub mod chain;
pub mod compare;
pub mod constructors;
pub mod display;
pub mod ensure;
pub mod record;
pub mod types;

pub use chain::Chain;
pub use constructors::ErrorBuilder;
pub use ensure::{ensure, ResultExt};
pub use record::{ErrorRecord, NodeRecord, OpaqueCause, RecordError};
pub use types::{BoxError, Cause, Error, Result};
