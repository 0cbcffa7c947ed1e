//! Atomic delta operations.

use serde_json::Value;

use crate::attributes::AttributeMap;

/// Length reported for the endless retain past the end of a delta.
pub const INFINITY: usize = usize::MAX;

/// Placeholder char standing in for an embed when a document is flattened
/// for character diffing.
pub const EMBED_PLACEHOLDER: char = '\0';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpType {
    Insert,
    Delete,
    Retain,
}

impl OpType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OpType::Insert => "insert",
            OpType::Delete => "delete",
            OpType::Retain => "retain",
        }
    }
}

/// Content of an insert: text, or an indivisible embed of length 1.
#[derive(Debug, Clone, PartialEq)]
pub enum InsertValue {
    Text(String),
    Embed(Value),
}

impl InsertValue {
    /// Length in chars, or 1 for an embed.
    pub fn len(&self) -> usize {
        match self {
            InsertValue::Text(s) => s.chars().count(),
            InsertValue::Embed(_) => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, InsertValue::Text(s) if s.is_empty())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            InsertValue::Text(s) => Some(s),
            InsertValue::Embed(_) => None,
        }
    }

    /// Interpret a JSON value as insert content. Strings become text, any
    /// other non-null value an embed.
    pub fn from_json(value: &Value) -> Option<InsertValue> {
        match value {
            Value::Null => None,
            Value::String(s) => Some(InsertValue::Text(s.clone())),
            v => Some(InsertValue::Embed(v.clone())),
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            InsertValue::Text(s) => Value::String(s.clone()),
            InsertValue::Embed(v) => v.clone(),
        }
    }
}

impl From<&str> for InsertValue {
    fn from(s: &str) -> Self {
        InsertValue::Text(s.to_string())
    }
}

impl From<String> for InsertValue {
    fn from(s: String) -> Self {
        InsertValue::Text(s)
    }
}

impl From<Value> for InsertValue {
    fn from(v: Value) -> Self {
        match v {
            Value::String(s) => InsertValue::Text(s),
            v => InsertValue::Embed(v),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Insert {
        value: InsertValue,
        attributes: Option<AttributeMap>,
    },
    Delete(usize),
    Retain {
        len: usize,
        attributes: Option<AttributeMap>,
    },
}

impl Op {
    pub fn insert(value: impl Into<InsertValue>, attributes: Option<AttributeMap>) -> Op {
        Op::Insert {
            value: value.into(),
            attributes: attributes.filter(|a| !a.is_empty()),
        }
    }

    pub fn retain(len: usize, attributes: Option<AttributeMap>) -> Op {
        Op::Retain {
            len,
            attributes: attributes.filter(|a| !a.is_empty()),
        }
    }

    pub fn kind(&self) -> OpType {
        match self {
            Op::Insert { .. } => OpType::Insert,
            Op::Delete(_) => OpType::Delete,
            Op::Retain { .. } => OpType::Retain,
        }
    }

    /// Number of document units this operation spans.
    pub fn len(&self) -> usize {
        match self {
            Op::Insert { value, .. } => value.len(),
            Op::Delete(n) => *n,
            Op::Retain { len, .. } => *len,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn attributes(&self) -> Option<&AttributeMap> {
        match self {
            Op::Insert { attributes, .. } | Op::Retain { attributes, .. } => attributes.as_ref(),
            Op::Delete(_) => None,
        }
    }

    pub fn is_insert(&self) -> bool {
        matches!(self, Op::Insert { .. })
    }

    pub fn is_delete(&self) -> bool {
        matches!(self, Op::Delete(_))
    }

    pub fn is_retain(&self) -> bool {
        matches!(self, Op::Retain { .. })
    }

    /// The op's contribution to a flattened diff string, or `None` if the op
    /// is not part of a document.
    pub(crate) fn document_text(&self) -> Option<String> {
        match self {
            Op::Insert {
                value: InsertValue::Text(s),
                ..
            } => Some(s.clone()),
            Op::Insert {
                value: InsertValue::Embed(_),
                ..
            } => Some(EMBED_PLACEHOLDER.to_string()),
            _ => None,
        }
    }
}
