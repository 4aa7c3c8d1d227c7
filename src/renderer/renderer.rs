use crate::node::Node;
use crate::renderer::traits::*;

/// Top-level entry point: renders each root independently and joins the
/// results with a blank line, preserving root order.
pub struct OutlineRenderer;

impl OutlineRenderer {
    pub fn render(&self, roots: &[Node]) -> String {
        let context = RenderContext::new();

        let rendered: Vec<String> = roots.iter().map(|root| root.render(&context)).collect();
        rendered.join("\n\n")
    }
}
