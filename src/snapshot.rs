use std::fs;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::bridge::DocumentSource;
use crate::node::Node;

/// A host-captured document snapshot: the current page plus whatever
/// selection was active when the snapshot was taken.
#[derive(Debug, Clone, Deserialize)]
pub struct Snapshot {
    pub page: Node,
    #[serde(default)]
    pub selection: Vec<Node>,
}

impl Snapshot {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("failed to read snapshot file {}", path.display()))?;
        json.parse()
    }
}

impl FromStr for Snapshot {
    type Err = anyhow::Error;

    fn from_str(json: &str) -> Result<Self> {
        let snapshot: Snapshot =
            serde_json::from_str(json).context("failed to parse snapshot JSON")?;
        tracing::debug!(selection = snapshot.selection.len(), "parsed snapshot");
        Ok(snapshot)
    }
}

impl DocumentSource for Snapshot {
    fn selection(&self) -> Vec<Node> {
        self.selection.clone()
    }

    fn page(&self) -> Node {
        self.page.clone()
    }
}
