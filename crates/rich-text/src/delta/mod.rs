//! Delta: an ordered list of operations describing a document or a change.
//!
//! Every mutation keeps the list in its canonical, maximally compacted form:
//! - no zero-length operations;
//! - adjacent deletes, and adjacent text inserts or retains with identical
//!   attributes, are merged;
//! - an insert and a delete at the same index are stored insert-first.
//!
//! A trailing attribute-free retain carries no information. It is kept during
//! ordinary mutation and removed by [`Delta::chop`], which every derived
//! algorithm applies to its result.

mod compose;
mod diff;
mod slice;
mod transform;

use serde_json::Value;

use crate::attributes::AttributeMap;
use crate::codec::json::op_from_json;
use crate::op::{InsertValue, Op};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Delta {
    ops: Vec<Op>,
}

impl Delta {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    pub fn into_ops(self) -> Vec<Op> {
        self.ops
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Append an insert. Empty text and `null` embeds are ignored.
    pub fn insert(
        &mut self,
        value: impl Into<InsertValue>,
        attributes: Option<AttributeMap>,
    ) -> &mut Self {
        let value = value.into();
        if value.is_empty() || matches!(value, InsertValue::Embed(Value::Null)) {
            return self;
        }
        self.push(Op::insert(value, attributes))
    }

    /// Append a delete. A zero length is ignored.
    pub fn delete(&mut self, length: usize) -> &mut Self {
        if length == 0 {
            return self;
        }
        self.push(Op::Delete(length))
    }

    /// Append a retain. A zero length is ignored.
    pub fn retain(&mut self, length: usize, attributes: Option<AttributeMap>) -> &mut Self {
        if length == 0 {
            return self;
        }
        self.push(Op::retain(length, attributes))
    }

    /// Append `op`, merging it into or reordering it around the last stored
    /// operation so the list stays canonical.
    pub fn push(&mut self, op: Op) -> &mut Self {
        if op.is_empty() {
            return self;
        }
        let mut index = self.ops.len();
        let Some(last) = self.ops.last_mut() else {
            self.ops.push(op);
            return self;
        };

        if let (Op::Delete(n), Op::Delete(m)) = (&mut *last, &op) {
            *n += *m;
            return self;
        }

        // Insert goes ahead of a delete at the same index. Deletes are always
        // merged, so at most one trailing delete has to be skipped.
        if last.is_delete() && op.is_insert() {
            index -= 1;
            if index == 0 {
                self.ops.insert(0, op);
                return self;
            }
        }

        let prev = &mut self.ops[index - 1];
        if prev.attributes() == op.attributes() {
            match (prev, &op) {
                (
                    Op::Insert {
                        value: InsertValue::Text(text),
                        ..
                    },
                    Op::Insert {
                        value: InsertValue::Text(more),
                        ..
                    },
                ) => {
                    text.push_str(more);
                    return self;
                }
                (Op::Retain { len, .. }, Op::Retain { len: more, .. }) => {
                    *len += *more;
                    return self;
                }
                _ => {}
            }
        }

        self.ops.insert(index, op);
        self
    }

    /// Total length of all operations.
    pub fn length(&self) -> usize {
        self.ops.iter().map(Op::len).sum()
    }

    /// Drop a trailing retain that carries no attributes.
    pub fn chop(&mut self) -> &mut Self {
        if let Some(Op::Retain {
            attributes: None, ..
        }) = self.ops.last()
        {
            self.ops.pop();
        }
        self
    }

    /// Move the delta out of a builder chain.
    pub fn take(&mut self) -> Delta {
        std::mem::take(self)
    }
}

impl From<Vec<Op>> for Delta {
    fn from(ops: Vec<Op>) -> Self {
        let mut delta = Delta::new();
        for op in ops {
            delta.push(op);
        }
        delta
    }
}

/// Lenient construction from serialized operations.
///
/// Accepts an array of operation records or an object holding one under
/// `"ops"`. Anything else yields an empty delta; malformed records are
/// skipped.
impl From<&Value> for Delta {
    fn from(value: &Value) -> Self {
        let records = match value {
            Value::Array(records) => records,
            Value::Object(obj) => match obj.get("ops") {
                Some(Value::Array(records)) => records,
                _ => return Delta::new(),
            },
            _ => return Delta::new(),
        };
        let mut delta = Delta::new();
        for record in records {
            if let Ok(op) = op_from_json(record) {
                delta.push(op);
            }
        }
        delta
    }
}

impl From<Value> for Delta {
    fn from(value: Value) -> Self {
        Delta::from(&value)
    }
}
