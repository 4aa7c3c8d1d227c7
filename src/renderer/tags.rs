use crate::node::*;
use serde_json::Value;

/// Helper for rendering node tag annotations
pub struct TagRenderer;

impl TagRenderer {
    /// Classifies a node kind into its short outline tag. Total: anything
    /// the table does not know falls back to the raw host tag, lower-cased.
    pub fn type_tag(&self, kind: &NodeKind) -> String {
        match kind {
            NodeKind::Text => "text".to_string(),
            NodeKind::Group => "group".to_string(),
            NodeKind::Component => "component".to_string(),
            NodeKind::ComponentSet => "component-set".to_string(),
            NodeKind::Instance => "instance".to_string(),
            NodeKind::Frame => "frame".to_string(),
            NodeKind::Section => "section".to_string(),
            NodeKind::Rectangle
            | NodeKind::Ellipse
            | NodeKind::Line
            | NodeKind::Polygon
            | NodeKind::Star
            | NodeKind::Vector => "shape".to_string(),
            NodeKind::Other(raw) => raw.to_lowercase(),
        }
    }

    /// Display label: the trimmed node name, or a placeholder when empty.
    pub fn label(&self, node: &Node) -> String {
        let trimmed = node.name.trim();
        if trimmed.is_empty() {
            "(unnamed)".to_string()
        } else {
            trimmed.to_string()
        }
    }

    /// Concatenated bracket annotations in fixed order: type, autolayout,
    /// hidden, then the instance-only annotations.
    pub fn tag_for(&self, node: &Node) -> String {
        let mut tags = String::new();

        tags.push_str(&format!("[{}]", self.type_tag(&node.kind)));
        if node.has_auto_layout() {
            tags.push_str("[autolayout]");
        }
        if !node.is_visible() {
            tags.push_str("[hidden]");
        }

        if node.is_instance() {
            tags.push_str(&self.main_component_annotation(node));
            tags.push_str(&self.component_props_annotation(node));
        }

        tags
    }

    /// ` <Name>` when the main component is readable, otherwise nothing.
    pub fn main_component_annotation(&self, node: &Node) -> String {
        match &node.main_component {
            HostProp::Value(main) => format!(" <{}>", main.name),
            HostProp::Absent | HostProp::Denied => String::new(),
        }
    }

    /// ` {name=value, ...}` in property order. A denied property read
    /// renders the fixed ` {props:error}` marker; no properties at all
    /// render nothing (not an empty brace pair).
    pub fn component_props_annotation(&self, node: &Node) -> String {
        let props = match &node.component_properties {
            HostProp::Denied => return " {props:error}".to_string(),
            HostProp::Absent => return String::new(),
            HostProp::Value(props) => props,
        };

        if props.0.is_empty() {
            return String::new();
        }

        let parts: Vec<String> = props
            .0
            .iter()
            .map(|(name, descriptor)| format!("{}={}", name, self.prop_value(&descriptor.value)))
            .collect();

        format!(" {{{}}}", parts.join(", "))
    }

    pub fn prop_value(&self, value: &Value) -> String {
        match value {
            // Embedded quotes stay unescaped to keep the output identical
            // to the host tool's own preview.
            Value::String(s) => format!("\"{}\"", s),
            Value::Object(_) | Value::Array(_) => {
                serde_json::to_string(value).unwrap_or_else(|_| "[object]".to_string())
            }
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            Value::Null => "null".to_string(),
        }
    }
}
