//! Renders a design-document node tree as an indented text outline.
//!
//! The input is a read-only snapshot of host nodes (frames, shapes, text,
//! component instances); the output is a deterministic two-space-indented
//! outline annotating each node with its type, layout, visibility, and
//! instance metadata.

pub mod bridge;
pub mod node;
pub mod renderer;
pub mod snapshot;

pub use bridge::*;
pub use node::*;
pub use renderer::*;
pub use snapshot::*;
