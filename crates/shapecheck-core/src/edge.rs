//! Edge values: an immutable association between two node values.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Typed value stored in an edge's property bag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<PropertyValue>),
}

impl From<bool> for PropertyValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for PropertyValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for PropertyValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for PropertyValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

/// Map of property names to values. Ordered so iteration is stable.
pub type PropertyMap = BTreeMap<String, PropertyValue>;

/// An edge from `from` to `to` with an optional weight and a property bag.
///
/// Edges carry no identity: two edges with the same endpoints and weight
/// compare equal, but a [`Graph`](crate::graph::Graph) keeps both as separate
/// entries (multi-edge semantics).
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<N, W = f64> {
    from: N,
    to: N,
    weight: Option<W>,
    properties: PropertyMap,
}

impl<N, W> Edge<N, W> {
    /// Unweighted edge with no properties.
    pub fn new(from: N, to: N) -> Self {
        Self {
            from,
            to,
            weight: None,
            properties: PropertyMap::new(),
        }
    }

    pub fn weighted(from: N, to: N, weight: W) -> Self {
        Self {
            from,
            to,
            weight: Some(weight),
            properties: PropertyMap::new(),
        }
    }

    #[must_use]
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_properties(mut self, properties: PropertyMap) -> Self {
        self.properties.extend(properties);
        self
    }

    pub fn from(&self) -> &N {
        &self.from
    }

    pub fn to(&self) -> &N {
        &self.to
    }

    pub fn properties(&self) -> &PropertyMap {
        &self.properties
    }

    pub fn property(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }

    pub fn has_property(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }
}

impl<N, W: Copy> Edge<N, W> {
    pub fn weight(&self) -> Option<W> {
        self.weight
    }
}

impl<N, W: Copy + Default> Edge<N, W> {
    /// Weight used by range queries: an absent weight counts as zero.
    pub fn weight_or_default(&self) -> W {
        self.weight.unwrap_or_default()
    }
}
