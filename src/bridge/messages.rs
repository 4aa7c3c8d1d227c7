use serde::{Deserialize, Serialize};

/// Inbound message from the host UI, discriminated by its `type` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Request {
    /// Re-render the current selection (or page) and push the result.
    Preview,
    /// Tear the session down; the embedder owns the actual shutdown.
    Close,
}

/// Outbound message pushed to the host UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Response {
    Render { text: String },
}
