//! Tabular Loading
//!
//! Builds a graph from a CSV edge list. Each row is one edge: a source
//! column, a target column, and any number of numeric weight columns.
//!
//! ```text
//! source,target,distance,time
//! a,b,150,5
//! b,c,120,3
//! ```
//!
//! Column names come from a [`TabularConfig`], which can be written by hand
//! or deserialized from JSON.

use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{GraphError, Result};
use crate::graph::{DirectedGraph, EdgeAttributes};

/// Which CSV columns hold the edge endpoints and weights.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabularConfig {
    pub source_column: String,
    pub target_column: String,

    /// Columns read as edge attributes, named after the column.
    #[serde(default)]
    pub weight_columns: Vec<String>,
}

impl TabularConfig {
    pub fn new<I, S>(
        source_column: impl Into<String>,
        target_column: impl Into<String>,
        weights: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            source_column: source_column.into(),
            target_column: target_column.into(),
            weight_columns: weights.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a config from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl DirectedGraph<String> {
    /// Load a graph from the CSV file at `path`.
    pub fn from_csv_path(path: impl AsRef<Path>, config: &TabularConfig) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading edge list");
        let reader = csv::ReaderBuilder::new().has_headers(true).from_path(path)?;
        Self::from_csv(reader, config)
    }

    /// Load a graph from CSV data read from `reader`.
    pub fn from_csv_reader<R: io::Read>(reader: R, config: &TabularConfig) -> Result<Self> {
        let reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);
        Self::from_csv(reader, config)
    }

    fn from_csv<R: io::Read>(mut reader: csv::Reader<R>, config: &TabularConfig) -> Result<Self> {
        let headers = reader.headers()?.clone();
        let column = |name: &str| {
            headers
                .iter()
                .position(|header| header.trim() == name)
                .ok_or_else(|| GraphError::MissingColumn(name.to_string()))
        };

        let source_index = column(&config.source_column)?;
        let target_index = column(&config.target_column)?;
        let weight_indices = config
            .weight_columns
            .iter()
            .map(|name| column(name).map(|index| (name.as_str(), index)))
            .collect::<Result<Vec<_>>>()?;

        let mut graph = Self::new();
        for (offset, record) in reader.records().enumerate() {
            let record = record?;
            let row = offset + 1;

            let mut attributes = EdgeAttributes::new();
            for &(name, index) in &weight_indices {
                let cell = record.get(index).unwrap_or_default().trim();
                if cell.is_empty() {
                    warn!(row, column = name, "skipping empty weight cell");
                    continue;
                }
                let value = cell.parse::<f64>().map_err(|_| GraphError::InvalidValue {
                    row,
                    column: name.to_string(),
                    value: cell.to_string(),
                })?;
                attributes.insert(name, value);
            }

            let source = record.get(source_index).unwrap_or_default().trim();
            let target = record.get(target_index).unwrap_or_default().trim();
            graph.add_edge(source.to_string(), target.to_string(), attributes)?;
        }

        debug!(
            edges = graph.edge_count(),
            sources = graph.source_nodes().len(),
            targets = graph.target_nodes().len(),
            "loaded edge list"
        );
        Ok(graph)
    }
}
