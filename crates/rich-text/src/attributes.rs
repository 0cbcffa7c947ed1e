//! Formatting attributes and their algebra.
//!
//! An attribute map carries a per-key opinion about formatting. A key that is
//! missing from the map expresses no opinion; [`AttrValue::Clear`] asks for the
//! attribute to be removed; [`AttrValue::Set`] assigns a value.

use indexmap::IndexMap;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    /// Remove the attribute (serialized as JSON `null`).
    Clear,
    Set(Value),
}

impl AttrValue {
    pub fn is_clear(&self) -> bool {
        matches!(self, AttrValue::Clear)
    }

    /// The value this entry leaves behind, with `Clear` counting as nothing.
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            AttrValue::Clear => None,
            AttrValue::Set(v) => Some(v),
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            AttrValue::Clear => Value::Null,
            AttrValue::Set(v) => v.clone(),
        }
    }
}

impl From<Value> for AttrValue {
    fn from(v: Value) -> Self {
        match v {
            Value::Null => AttrValue::Clear,
            v => AttrValue::Set(v),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::Set(Value::String(s.to_string()))
    }
}

impl From<bool> for AttrValue {
    fn from(b: bool) -> Self {
        AttrValue::Set(Value::Bool(b))
    }
}

/// Attribute maps compare by content; key order is irrelevant.
pub type AttributeMap = IndexMap<String, AttrValue>;

/// Build an [`AttributeMap`] from a JSON object. Non-objects yield an empty map.
pub fn from_json(value: &Value) -> AttributeMap {
    match value {
        Value::Object(obj) => obj
            .iter()
            .map(|(k, v)| (k.clone(), AttrValue::from(v.clone())))
            .collect(),
        _ => AttributeMap::new(),
    }
}

pub fn to_json(attrs: &AttributeMap) -> Value {
    Value::Object(attrs.iter().map(|(k, v)| (k.clone(), v.to_json())).collect())
}

fn non_empty(attrs: AttributeMap) -> Option<AttributeMap> {
    if attrs.is_empty() {
        None
    } else {
        Some(attrs)
    }
}

/// Attributes of `a` followed by `b`.
///
/// `b` wins every key it mentions; `a` survives only where `b` is silent.
/// `Clear` entries coming from `b` are dropped unless `keep_null` is set,
/// which callers use when the result is still a retain and the clear has to
/// reach the underlying document.
pub fn compose(
    a: Option<&AttributeMap>,
    b: Option<&AttributeMap>,
    keep_null: bool,
) -> Option<AttributeMap> {
    let mut attributes: AttributeMap = match b {
        Some(b) => b
            .iter()
            .filter(|(_, v)| keep_null || !v.is_clear())
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect(),
        None => AttributeMap::new(),
    };
    if let Some(a) = a {
        for (key, value) in a {
            let silent = b.map_or(true, |b| !b.contains_key(key));
            if silent {
                attributes.insert(key.clone(), value.clone());
            }
        }
    }
    non_empty(attributes)
}

/// Re-base the attribute changes `b` against concurrent changes `a`.
///
/// With `priority`, `a` is treated as applied first and keeps every key it
/// touched; otherwise `b` passes through unchanged.
pub fn transform(
    a: Option<&AttributeMap>,
    b: Option<&AttributeMap>,
    priority: bool,
) -> Option<AttributeMap> {
    let Some(a) = a else {
        return b.cloned().and_then(non_empty);
    };
    let b = b?;
    if !priority {
        return non_empty(b.clone());
    }
    non_empty(
        b.iter()
            .filter(|(k, _)| !a.contains_key(*k))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect(),
    )
}

/// The attribute changes turning formatting `a` into formatting `b`.
pub fn diff(a: Option<&AttributeMap>, b: Option<&AttributeMap>) -> Option<AttributeMap> {
    let effective = |m: Option<&AttributeMap>, key: &str| -> Option<Value> {
        m.and_then(|m| m.get(key)).and_then(AttrValue::as_value).cloned()
    };

    let keys = a
        .into_iter()
        .flat_map(|m| m.keys())
        .chain(b.into_iter().flat_map(|m| m.keys()));

    let mut attributes = AttributeMap::new();
    for key in keys {
        if attributes.contains_key(key) {
            continue;
        }
        let old = effective(a, key.as_str());
        let new = effective(b, key.as_str());
        if old != new {
            let entry = match new {
                Some(v) => AttrValue::Set(v),
                None => AttrValue::Clear,
            };
            attributes.insert(key.clone(), entry);
        }
    }
    non_empty(attributes)
}
