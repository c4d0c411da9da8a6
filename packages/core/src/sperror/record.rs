//! Serializable form of an error chain
//!
//! A record keeps every content field of every node but only the
//! description of each cause. Rebuilt errors carry an [`OpaqueCause`], so
//! they still compare equal under [`Error::is_sp`] while `is` against the
//! original cause type no longer matches.

use super::constructors::content_identity;
use super::types::Error;
use crate::identity::Digest;
use crate::lang::Messages;
use crate::levels::Level;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Errors raised while rebuilding an error from its record
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    /// Recorded id does not match the recomputed content hash
    #[error("identity mismatch at depth {depth}: recorded {expected}, computed {actual}")]
    IdentityMismatch {
        /// Position in the chain, 0 for the head
        depth: usize,
        /// Id stored in the record
        expected: Digest,
        /// Id recomputed from the record content
        actual: Digest,
    },

    /// Record holds no nodes
    #[error("error record has no nodes")]
    Empty,

    /// Malformed JSON
    #[error("invalid error record: {0}")]
    Json(#[from] serde_json::Error),
}

/// Serialized chain, newest node first
///
/// Nodes are stored flat so that neither parsing nor dropping a record
/// recurses once per chain link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorRecord {
    /// Chain nodes, head first
    pub nodes: Vec<NodeRecord>,
}

/// One serialized chain node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRecord {
    /// Content digest
    pub id: Digest,
    /// Cause description
    pub cause: String,
    /// Level
    pub level: Level,
    /// Code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<u32>,
    /// Hint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    /// Localized texts
    #[serde(default, skip_serializing_if = "Messages::is_empty")]
    pub messages: Messages,
}

/// Cause of an error rebuilt from a record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpaqueCause {
    description: String,
}

impl OpaqueCause {
    /// Wrap a bare description
    pub fn new<S: Into<String>>(description: S) -> Self {
        Self {
            description: description.into(),
        }
    }

    /// The original cause's description
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl fmt::Display for OpaqueCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

impl std::error::Error for OpaqueCause {}

fn node_record(node: &Error) -> NodeRecord {
    NodeRecord {
        id: node.digest(),
        cause: node.cause().to_string(),
        level: node.level(),
        code: node.code(),
        hint: node.hint().map(str::to_string),
        messages: node.messages().clone(),
    }
}

#[track_caller]
fn rebuild(
    record: NodeRecord,
    previous: Option<Error>,
    depth: usize,
) -> Result<Error, RecordError> {
    let actual = content_identity(
        &record.cause,
        record.level,
        record.code,
        record.hint.as_deref(),
        &record.messages,
    )
    .digest();
    if actual != record.id {
        log::warn!("error record at depth {depth} failed identity check");
        return Err(RecordError::IdentityMismatch {
            depth,
            expected: record.id,
            actual,
        });
    }

    let mut builder =
        Error::builder_from_cause(Arc::new(OpaqueCause::new(record.cause))).level(record.level);
    if let Some(code) = record.code {
        builder = builder.code(code);
    }
    if let Some(hint) = record.hint {
        builder = builder.hint(hint);
    }
    for (lang, text) in record.messages {
        builder = builder.msg(lang, text);
    }
    if let Some(previous) = previous {
        builder = builder.previous(previous);
    }
    Ok(builder.build())
}

impl Error {
    /// Serializable copy of the whole chain
    #[must_use]
    pub fn to_record(&self) -> ErrorRecord {
        ErrorRecord {
            nodes: self.chain().map(|node| node_record(&node)).collect(),
        }
    }

    /// Rebuild a chain from its record, verifying every node's id
    #[track_caller]
    pub fn from_record(record: ErrorRecord) -> Result<Self, RecordError> {
        let mut nodes = record.nodes;

        // Rebuilt from the root upward, each node linking the one before
        let mut previous = None;
        while let Some(node) = nodes.pop() {
            let depth = nodes.len();
            previous = Some(rebuild(node, previous, depth)?);
        }
        previous.ok_or(RecordError::Empty)
    }

    /// Serialize the chain as JSON
    pub fn to_json(&self) -> Result<String, RecordError> {
        Ok(serde_json::to_string(&self.to_record())?)
    }

    /// Rebuild a chain from JSON produced by [`Error::to_json`]
    #[track_caller]
    pub fn from_json(json: &str) -> Result<Self, RecordError> {
        let record: ErrorRecord = serde_json::from_str(json)?;
        Self::from_record(record)
    }
}
