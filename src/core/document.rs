//! In-memory JSON document tree.
//!
//! `serde_json::Value` collapses repeated property names into one entry, which
//! would hide exactly the collisions the flattener must report. [`Node`] keeps
//! every property in document order instead.
//!
//! Numbers keep the exact text they had in the document (`serde_json` is
//! built with `arbitrary_precision`), so integers of any width survive.

use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde_json::Number;
use std::fmt;

/// Map key under which `serde_json` hands over the source text of a number.
const NUMBER_TOKEN: &str = "$serde_json::private::Number";

/// A parsed JSON value.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Properties in document order, repeated names included.
    Object(Vec<(String, Node)>),
    /// Elements in index order.
    Array(Vec<Node>),
    /// Any leaf value.
    Scalar(Scalar),
}

/// A JSON leaf value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// A string, already unescaped.
    String(String),
    /// An integer or floating point number, as written in the document.
    Number(Number),
    /// `true` or `false`.
    Bool(bool),
    /// `null`.
    Null,
}

impl Node {
    /// Read a document from JSON text.
    pub fn from_json(input: &str) -> serde_json::Result<Self> {
        serde_json::from_str(input)
    }

    /// Short name of the node's kind, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Object(_) => "object",
            Node::Array(_) => "array",
            Node::Scalar(Scalar::String(_)) => "string",
            Node::Scalar(Scalar::Number(_)) => "number",
            Node::Scalar(Scalar::Bool(_)) => "boolean",
            Node::Scalar(Scalar::Null) => "null",
        }
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(NodeVisitor)
    }
}

struct NodeVisitor;

impl<'de> Visitor<'de> for NodeVisitor {
    type Value = Node;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any valid JSON value")
    }

    fn visit_bool<E>(self, value: bool) -> Result<Node, E> {
        Ok(Node::Scalar(Scalar::Bool(value)))
    }

    fn visit_i64<E>(self, value: i64) -> Result<Node, E> {
        Ok(Node::Scalar(Scalar::Number(value.into())))
    }

    fn visit_u64<E>(self, value: u64) -> Result<Node, E> {
        Ok(Node::Scalar(Scalar::Number(value.into())))
    }

    fn visit_f64<E>(self, value: f64) -> Result<Node, E>
    where
        E: de::Error,
    {
        Number::from_f64(value)
            .map(|n| Node::Scalar(Scalar::Number(n)))
            .ok_or_else(|| E::custom(format!("number {} is not finite", value)))
    }

    fn visit_str<E>(self, value: &str) -> Result<Node, E> {
        Ok(Node::Scalar(Scalar::String(value.to_owned())))
    }

    fn visit_string<E>(self, value: String) -> Result<Node, E> {
        Ok(Node::Scalar(Scalar::String(value)))
    }

    fn visit_unit<E>(self) -> Result<Node, E> {
        Ok(Node::Scalar(Scalar::Null))
    }

    fn visit_none<E>(self) -> Result<Node, E> {
        Ok(Node::Scalar(Scalar::Null))
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Node, D::Error>
    where
        D: Deserializer<'de>,
    {
        Deserialize::deserialize(deserializer)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Node, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(Node::Array(items))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Node, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut props = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some(name) = map.next_key::<String>()? {
            // A number arrives as a single-entry map holding its source text
            if props.is_empty() && name == NUMBER_TOKEN {
                let text: String = map.next_value()?;
                let number = text.parse::<Number>().map_err(de::Error::custom)?;
                return Ok(Node::Scalar(Scalar::Number(number)));
            }
            props.push((name, map.next_value()?));
        }
        Ok(Node::Object(props))
    }
}
