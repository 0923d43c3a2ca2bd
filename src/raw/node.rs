//! Raw node type.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use super::attr::AttrValue;

/// Opaque identity of a node in the dumped object graph.
///
/// The dump producer writes addresses either as JSON integers or as decimal
/// strings; both deserialize to the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct NodeAddress(u64);

impl NodeAddress {
    /// Create an address from its numeric value.
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the numeric value.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for NodeAddress {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl<'de> Deserialize<'de> for NodeAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Number(u64),
            Text(String),
        }

        match Wire::deserialize(deserializer)? {
            Wire::Number(n) => Ok(Self(n)),
            Wire::Text(s) => s
                .trim()
                .parse::<u64>()
                .map(Self)
                .map_err(|_| serde::de::Error::custom(format!("invalid node address: {:?}", s))),
        }
    }
}

/// One node of the dumped UI object graph.
///
/// Only the four fields below are read; anything else the producer writes
/// alongside them is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawNode {
    /// Identity of the node.
    #[serde(rename = "pythonObjectAddress")]
    pub address: NodeAddress,
    /// Type tag of the node.
    #[serde(rename = "pythonObjectTypeName")]
    pub type_name: String,
    /// Attribute map.
    #[serde(rename = "dictEntriesOfInterest")]
    pub attrs: BTreeMap<String, AttrValue>,
    /// Child nodes in declaration order.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub children: Vec<RawNode>,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<RawNode>, D::Error> {
    Ok(Option::<Vec<RawNode>>::deserialize(deserializer)?.unwrap_or_default())
}

impl RawNode {
    /// Create a node with no attributes and no children.
    pub fn new(address: u64, type_name: impl Into<String>) -> Self {
        Self {
            address: NodeAddress(address),
            type_name: type_name.into(),
            attrs: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute (builder style).
    pub fn with_attr(mut self, key: impl Into<String>, value: AttrValue) -> Self {
        self.attrs.insert(key.into(), value);
        self
    }

    /// Set the four local geometry attributes (builder style).
    pub fn with_geometry(self, x: f64, y: f64, width: f64, height: f64) -> Self {
        self.with_attr(super::ATTR_X, AttrValue::Number(x))
            .with_attr(super::ATTR_Y, AttrValue::Number(y))
            .with_attr(super::ATTR_WIDTH, AttrValue::Number(width))
            .with_attr(super::ATTR_HEIGHT, AttrValue::Number(height))
    }

    /// Append a child (builder style).
    pub fn with_child(mut self, child: RawNode) -> Self {
        self.children.push(child);
        self
    }

    /// Look up an attribute.
    pub fn attr(&self, key: &str) -> Option<&AttrValue> {
        self.attrs.get(key)
    }
}

// Dumps nest thousands of levels deep; unlink children level by level
// instead of letting drop glue recurse.
impl Drop for RawNode {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}
