//! JSON codec for delta operations.
//!
//! Each operation is a record with exactly one of `insert`, `delete` or
//! `retain`, plus an optional `attributes` object in which `null` clears an
//! attribute:
//!
//! ```json
//! [{"insert": "Hello", "attributes": {"bold": true}}, {"retain": 3}, {"delete": 2}]
//! ```

use serde_json::{Map, Value};

use crate::attributes::{self, AttributeMap};
use crate::delta::Delta;
use crate::error::DeltaError;
use crate::op::{InsertValue, Op, OpType};

// ── Serialization ─────────────────────────────────────────────────────────

pub fn op_to_json(op: &Op) -> Value {
    let mut m = Map::new();
    let value = match op {
        Op::Insert { value, .. } => value.to_json(),
        Op::Delete(n) => Value::from(*n),
        Op::Retain { len, .. } => Value::from(*len),
    };
    m.insert(op.kind().as_str().into(), value);
    if let Some(attrs) = op.attributes() {
        m.insert("attributes".into(), attributes::to_json(attrs));
    }
    Value::Object(m)
}

pub fn to_json(delta: &Delta) -> Value {
    Value::Array(delta.ops().iter().map(op_to_json).collect())
}

pub fn to_string(delta: &Delta) -> String {
    to_json(delta).to_string()
}

// ── Deserialization ───────────────────────────────────────────────────────

fn decode_count(v: &Value, key: &str) -> Result<usize, DeltaError> {
    v.as_u64()
        .filter(|n| *n > 0)
        .map(|n| n as usize)
        .ok_or_else(|| DeltaError::InvalidOp(format!("{key} must be a positive integer")))
}

fn decode_attributes(obj: &Map<String, Value>) -> Result<Option<AttributeMap>, DeltaError> {
    match obj.get("attributes") {
        None | Some(Value::Null) => Ok(None),
        Some(v) if v.is_object() => {
            let attrs = attributes::from_json(v);
            Ok(if attrs.is_empty() { None } else { Some(attrs) })
        }
        Some(_) => Err(DeltaError::InvalidOp("attributes must be an object".into())),
    }
}

/// Decode a single operation record.
pub fn op_from_json(v: &Value) -> Result<Op, DeltaError> {
    let obj = v
        .as_object()
        .ok_or_else(|| DeltaError::InvalidOp("operation must be an object".into()))?;

    let kinds = [OpType::Insert, OpType::Delete, OpType::Retain]
        .iter()
        .filter(|k| obj.contains_key(k.as_str()))
        .count();
    if kinds != 1 {
        return Err(DeltaError::InvalidOp(
            "operation must have exactly one of insert, delete, retain".into(),
        ));
    }

    let attributes = decode_attributes(obj)?;
    if let Some(value) = obj.get("insert") {
        let value = InsertValue::from_json(value)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| DeltaError::InvalidOp("insert must be non-empty text or an embed".into()))?;
        return Ok(Op::insert(value, attributes));
    }
    if let Some(n) = obj.get("delete") {
        if attributes.is_some() {
            return Err(DeltaError::InvalidOp("delete cannot carry attributes".into()));
        }
        return Ok(Op::Delete(decode_count(n, "delete")?));
    }
    let n = obj.get("retain").unwrap_or(&Value::Null);
    Ok(Op::retain(decode_count(n, "retain")?, attributes))
}

/// Strictly decode a delta from an array of records or `{"ops": [...]}`.
pub fn from_json(v: &Value) -> Result<Delta, DeltaError> {
    let records = match v {
        Value::Array(records) => records,
        Value::Object(obj) => obj
            .get("ops")
            .and_then(Value::as_array)
            .ok_or_else(|| DeltaError::InvalidOp("ops must be array".into()))?,
        _ => return Err(DeltaError::InvalidOp("delta must be an array or an object".into())),
    };
    let mut delta = Delta::new();
    for record in records {
        delta.push(op_from_json(record)?);
    }
    Ok(delta)
}

pub fn from_str(s: &str) -> Result<Delta, DeltaError> {
    let v: Value = serde_json::from_str(s)?;
    from_json(&v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrs;
    use serde_json::json;

    #[test]
    fn encodes_all_op_kinds() {
        let mut delta = Delta::new();
        delta
            .insert("Hi", Some(attrs! {"bold" => true}))
            .retain(2, Some(attrs! {"color" => null}))
            .delete(1);
        assert_eq!(
            to_json(&delta),
            json!([
                {"insert": "Hi", "attributes": {"bold": true}},
                {"retain": 2, "attributes": {"color": null}},
                {"delete": 1}
            ])
        );
    }

    #[test]
    fn decodes_embed_and_clear() {
        let op = op_from_json(&json!({"insert": {"image": "a.png"}, "attributes": {"alt": null}}))
            .unwrap();
        assert_eq!(op, Op::insert(json!({"image": "a.png"}), Some(attrs! {"alt" => null})));
    }

    #[test]
    fn record_key_matches_op_type() {
        for op in [Op::insert("a", None), Op::Delete(2), Op::retain(3, None)] {
            let json = op_to_json(&op);
            assert!(json.get(op.kind().as_str()).is_some());
        }
    }

    #[test]
    fn rejects_ambiguous_record() {
        let err = op_from_json(&json!({"insert": "a", "delete": 1})).unwrap_err();
        assert!(matches!(err, DeltaError::InvalidOp(_)));
    }

    #[test]
    fn rejects_non_positive_counts() {
        assert!(op_from_json(&json!({"delete": 0})).is_err());
        assert!(op_from_json(&json!({"retain": -3})).is_err());
        assert!(op_from_json(&json!({"retain": "5"})).is_err());
    }

    #[test]
    fn from_json_accepts_ops_wrapper() {
        let delta = from_json(&json!({"ops": [{"delete": 3}]})).unwrap();
        assert_eq!(delta.ops(), &[Op::Delete(3)]);
    }

    #[test]
    fn from_json_canonicalizes() {
        let delta = from_json(&json!([{"delete": 1}, {"insert": "a"}, {"insert": "b"}])).unwrap();
        assert_eq!(delta.ops(), &[Op::insert("ab", None), Op::Delete(1)]);
    }

    #[test]
    fn from_str_reports_parse_errors() {
        assert!(matches!(from_str("[{"), Err(DeltaError::Json(_))));
    }
}
