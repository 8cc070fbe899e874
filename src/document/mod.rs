// Wed Oct 14 2026 - Alex

//! Ordered key-value tree the gamedata loaders walk.
//!
//! Member order is the order of the source document, which the address
//! action interpreter depends on.

pub mod error;
pub mod numeric;

pub use error::DocumentError;
pub use numeric::parse_offset;

use indexmap::IndexMap;
use serde_json::Value;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Null,
    Bool(bool),
    /// Integers keep their raw 64-bit pattern; negative values are two's complement.
    Integer(u64),
    Float(f64),
    String(String),
    Array(Vec<Node>),
    Table(IndexMap<String, Node>),
}

impl Node {
    pub fn table() -> Self {
        Node::Table(IndexMap::new())
    }

    pub fn from_json_str(text: &str) -> Result<Self, DocumentError> {
        let value: Value = serde_json::from_str(text)?;
        let node = Node::from(value);

        match node {
            Node::Table(_) => Ok(node),
            other => Err(DocumentError::RootNotTable(other.type_name())),
        }
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, DocumentError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Node::Null => "null",
            Node::Bool(_) => "bool",
            Node::Integer(_) => "integer",
            Node::Float(_) => "float",
            Node::String(_) => "string",
            Node::Array(_) => "array",
            Node::Table(_) => "table",
        }
    }

    pub fn with_member(mut self, name: &str, node: Node) -> Self {
        if let Node::Table(members) = &mut self {
            members.insert(name.to_string(), node);
        }
        self
    }

    pub fn remove_member(&mut self, name: &str) -> Option<Node> {
        match self {
            Node::Table(members) => members.shift_remove(name),
            _ => None,
        }
    }

    pub fn as_table(&self) -> Option<&IndexMap<String, Node>> {
        match self {
            Node::Table(members) => Some(members),
            _ => None,
        }
    }

    pub fn find_member(&self, name: &str) -> Option<&Node> {
        self.as_table().and_then(|members| members.get(name))
    }

    pub fn member_count(&self) -> usize {
        self.as_table().map_or(0, IndexMap::len)
    }

    pub fn member(&self, index: usize) -> Option<&Node> {
        self.as_table()
            .and_then(|members| members.get_index(index))
            .map(|(_, node)| node)
    }

    pub fn member_name(&self, index: usize) -> Option<&str> {
        self.as_table()
            .and_then(|members| members.get_index(index))
            .map(|(name, _)| name.as_str())
    }

    /// Members in document order; scalars have none.
    pub fn members(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.as_table()
            .into_iter()
            .flat_map(|members| members.iter())
            .map(|(name, node)| (name.as_str(), node))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn get_string<'a>(&'a self, default: &'a str) -> &'a str {
        self.as_str().unwrap_or(default)
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Node::Integer(value) => Some(*value),
            Node::Bool(value) => Some(*value as u64),
            _ => None,
        }
    }

    /// Signed displacement held by this node.
    ///
    /// Strings are parsed with [`parse_offset`]; integers are reinterpreted
    /// from their 64-bit pattern to the native pointer-difference width.
    pub fn read_offset(&self) -> Option<isize> {
        match self {
            Node::String(text) => Some(parse_offset(text)),
            Node::Integer(value) => Some(*value as i64 as isize),
            _ => None,
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            Node::Null => Value::Null,
            Node::Bool(value) => Value::Bool(*value),
            Node::Integer(value) => Value::from(*value),
            Node::Float(value) => serde_json::Number::from_f64(*value)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            Node::String(value) => Value::String(value.clone()),
            Node::Array(items) => Value::Array(items.iter().map(Node::to_json).collect()),
            Node::Table(members) => Value::Object(
                members
                    .iter()
                    .map(|(name, node)| (name.clone(), node.to_json()))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Node::Null,
            Value::Bool(value) => Node::Bool(value),
            Value::Number(number) => {
                if let Some(value) = number.as_u64() {
                    Node::Integer(value)
                } else if let Some(value) = number.as_i64() {
                    Node::Integer(value as u64)
                } else {
                    Node::Float(number.as_f64().unwrap_or_default())
                }
            }
            Value::String(value) => Node::String(value),
            Value::Array(items) => Node::Array(items.into_iter().map(Node::from).collect()),
            Value::Object(members) => Node::Table(
                members
                    .into_iter()
                    .map(|(name, value)| (name, Node::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::String(value.to_string())
    }
}

impl From<i64> for Node {
    fn from(value: i64) -> Self {
        Node::Integer(value as u64)
    }
}
