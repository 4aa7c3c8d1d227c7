use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fmt;

/// Discriminator tag for a design-document node.
///
/// Host tools report node types as SCREAMING_SNAKE strings (`"TEXT"`,
/// `"COMPONENT_SET"`, ...); unrecognized tags are preserved verbatim in
/// `Other` so they can still be classified in the output.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "String")]
pub enum NodeKind {
    Text,
    Group,
    Component,
    ComponentSet,
    Instance,
    Frame,
    Section,
    Rectangle,
    Ellipse,
    Line,
    Polygon,
    Star,
    Vector,
    Other(String),
}

impl From<String> for NodeKind {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "TEXT" => NodeKind::Text,
            "GROUP" => NodeKind::Group,
            "COMPONENT" => NodeKind::Component,
            "COMPONENT_SET" => NodeKind::ComponentSet,
            "INSTANCE" => NodeKind::Instance,
            "FRAME" => NodeKind::Frame,
            "SECTION" => NodeKind::Section,
            "RECTANGLE" => NodeKind::Rectangle,
            "ELLIPSE" => NodeKind::Ellipse,
            "LINE" => NodeKind::Line,
            "POLYGON" => NodeKind::Polygon,
            "STAR" => NodeKind::Star,
            "VECTOR" => NodeKind::Vector,
            _ => NodeKind::Other(raw),
        }
    }
}

impl Default for NodeKind {
    fn default() -> Self {
        // A snapshot with no type tag still classifies (to the empty tag).
        NodeKind::Other(String::new())
    }
}

/// Access state of a host-owned property.
///
/// Host objects can refuse access to some properties (the getter throws on
/// the host side). A snapshot records that as a `"$error"` marker; anything
/// else that fails to deserialize lands in `Denied` too, so reading a
/// `HostProp` never fails.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum HostProp<T> {
    #[default]
    Absent,
    Denied,
    Value(T),
}

impl<T> HostProp<T> {
    pub fn value(&self) -> Option<&T> {
        match self {
            HostProp::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_denied(&self) -> bool {
        matches!(self, HostProp::Denied)
    }
}

impl<'de, T> Deserialize<'de> for HostProp<T>
where
    T: serde::de::DeserializeOwned,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        if raw.is_null() {
            return Ok(HostProp::Absent);
        }
        Ok(match serde_json::from_value::<T>(raw) {
            Ok(value) => HostProp::Value(value),
            Err(_) => HostProp::Denied,
        })
    }
}

/// The component definition an instance node was placed from.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MainComponent {
    #[serde(default)]
    pub name: String,
}

/// A single component property override attached to an instance.
///
/// The `value` is kept as raw JSON: hosts attach strings, booleans, numbers,
/// and structured payloads here, and the renderer formats each shape
/// differently.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PropertyDescriptor {
    #[serde(default)]
    pub value: Value,
}

/// Ordered component-property overrides on an instance.
///
/// Stored as an explicit list of pairs rather than a map: the enumeration
/// order of the source object is part of the output contract.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentProps(pub Vec<(String, PropertyDescriptor)>);

impl<'de> Deserialize<'de> for ComponentProps {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PropsVisitor;

        impl<'de> Visitor<'de> for PropsVisitor {
            type Value = ComponentProps;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of component property descriptors")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, PropertyDescriptor>()? {
                    entries.push(entry);
                }
                Ok(ComponentProps(entries))
            }
        }

        deserializer.deserialize_map(PropsVisitor)
    }
}

/// A read-only element of the design-document tree.
///
/// Field presence carries meaning: a missing `visible` means the node is
/// always visible, and a present `children` sequence (even an empty one)
/// marks the node as a container.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    #[serde(rename = "type", default)]
    pub kind: NodeKind,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub visible: Option<bool>,
    #[serde(default)]
    pub layout_mode: Option<String>,
    #[serde(default)]
    pub children: Option<Vec<Node>>,
    #[serde(default)]
    pub main_component: HostProp<MainComponent>,
    #[serde(default)]
    pub component_properties: HostProp<ComponentProps>,
}

impl Node {
    /// Visibility is an override on the host side; absence means visible.
    pub fn is_visible(&self) -> bool {
        self.visible.unwrap_or(true)
    }

    /// `"NONE"` is the host sentinel for "auto layout switched off".
    pub fn has_auto_layout(&self) -> bool {
        match &self.layout_mode {
            Some(mode) => !mode.is_empty() && mode != "NONE",
            None => false,
        }
    }

    /// Containment is decided by the presence of a child sequence, not by
    /// the node kind.
    pub fn is_container(&self) -> bool {
        self.children.is_some()
    }

    pub fn is_instance(&self) -> bool {
        matches!(self.kind, NodeKind::Instance)
    }
}
