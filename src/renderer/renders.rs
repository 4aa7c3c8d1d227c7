use crate::node::Node;
use crate::renderer::tags::TagRenderer;
use crate::renderer::traits::*;

impl Render for Node {
    fn render(&self, context: &RenderContext) -> String {
        let tag_renderer = TagRenderer;

        let line = format!(
            "{}- {} {}",
            context.indent(),
            tag_renderer.label(self),
            tag_renderer.tag_for(self)
        );
        let mut lines = vec![line.trim_end().to_string()];

        // Depth-first, pre-order: the node's own line, then each child one
        // level deeper, in document z-order.
        if let Some(children) = &self.children {
            let child_context = context.with_depth(context.depth + 1);
            for child in children {
                lines.push(child.render(&child_context));
            }
        }

        lines.join("\n")
    }
}
