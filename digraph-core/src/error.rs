//! Error Types
//!
//! Every fallible operation in the crate returns [`GraphError`]. Failures are
//! local and synchronous; nothing is retried internally.

/// Errors produced by graph mutation, queries and tabular loading.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// `remove_edge` was called for a pair with no edge.
    #[error("edge not found: {from} -> {to}")]
    EdgeNotFound { from: String, to: String },

    /// A path search named an attribute no edge uses, or a subset query
    /// governs on an attribute its budget does not limit.
    #[error("unknown attribute: {0}")]
    UnknownAttribute(String),

    /// The target cannot be reached from the source.
    #[error("no path from {from} to {to}")]
    NoPath { from: String, to: String },

    /// The search source is not a node of the graph.
    #[error("node not found: {0}")]
    NodeNotFound(String),

    /// A subset query was given a budget without any attribute.
    #[error("budget names no attribute")]
    EmptyBudget,

    #[error("invalid weight for attribute {attribute}: {value}")]
    InvalidWeight { attribute: String, value: f64 },

    /// A configured column is absent from the tabular header.
    #[error("missing column: {0}")]
    MissingColumn(String),

    /// A weight cell could not be parsed as a number.
    #[error("row {row}: invalid value {value:?} in column {column}")]
    InvalidValue {
        row: usize,
        column: String,
        value: String,
    },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}

impl GraphError {
    pub(crate) fn edge_not_found<N: std::fmt::Debug>(source: &N, target: &N) -> Self {
        Self::EdgeNotFound {
            from: format!("{:?}", source),
            to: format!("{:?}", target),
        }
    }

    pub(crate) fn no_path<N: std::fmt::Debug>(source: &N, target: &N) -> Self {
        Self::NoPath {
            from: format!("{:?}", source),
            to: format!("{:?}", target),
        }
    }

    pub(crate) fn node_not_found<N: std::fmt::Debug>(node: &N) -> Self {
        Self::NodeNotFound(format!("{:?}", node))
    }
}

/// Result type for the crate.
pub type Result<T> = std::result::Result<T, GraphError>;
