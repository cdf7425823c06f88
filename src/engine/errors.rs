use std::io;
use thiserror::Error;
use tracing::{debug, error, warn};

/// Errors raised by the k-way merge iterator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MergeError {
    #[error("merge exhausted: no items remain in any source")]
    EmptySequence,

    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),
}

impl MergeError {
    pub fn log_error(&self) {
        match self {
            MergeError::EmptySequence => {
                error!(target: "socnet_feed::merge", "Advanced an exhausted merge");
            }
            MergeError::UnsupportedOperation(op) => {
                error!(target: "socnet_feed::merge", "Unsupported operation: {}", op);
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("Unknown person: {0}")]
    UnknownPerson(String),

    #[error("Duplicate person: {0}")]
    DuplicatePerson(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to parse graph JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

impl GraphError {
    pub fn log_error(&self) {
        match self {
            GraphError::UnknownPerson(name) => {
                warn!(target: "socnet_feed::graph", "Unknown person: {}", name);
            }
            GraphError::DuplicatePerson(name) => {
                warn!(target: "socnet_feed::graph", "Duplicate person: {}", name);
            }
            GraphError::Io(e) => {
                error!(target: "socnet_feed::graph", "Graph IO error: {}", e);
                debug!(target: "socnet_feed::graph", "Graph IO error details: {:?}", e);
            }
            GraphError::Parse(e) => {
                error!(target: "socnet_feed::graph", "Graph parse error: {}", e);
                debug!(target: "socnet_feed::graph", "Graph parse error details: {:?}", e);
            }
        }
    }
}

/// Errors surfaced while building or consuming a friends activity stream.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("Merge error: {0}")]
    Merge(#[from] MergeError),
}

impl FeedError {
    pub fn log_error(&self) {
        match self {
            FeedError::Graph(e) => e.log_error(),
            FeedError::Merge(e) => e.log_error(),
        }
    }
}
