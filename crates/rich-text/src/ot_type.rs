//! OT type registration surface.
//!
//! Exposes the delta algebra as the named functions an OT-type registry
//! (e.g. a sharedb-style server) calls with raw JSON operation sequences.
//! Inputs go through the lenient [`Delta`] construction, so anything that is
//! not an operation list is treated as an empty one.

use std::str::FromStr;

use serde_json::Value;

use crate::delta::Delta;
use crate::error::DeltaError;

pub const NAME: &str = "rich-text";
pub const URI: &str = "http://github.com/sachinrekhi/richtextpy";

/// Which operand of [`transform`] is treated as having happened first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl FromStr for Side {
    type Err = DeltaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Side::Left),
            "right" => Ok(Side::Right),
            other => Err(DeltaError::InvalidOp(format!("unknown side: {other}"))),
        }
    }
}

pub fn create(initial: &Value) -> Delta {
    Delta::from(initial)
}

/// Apply `delta` to the document `snapshot`.
pub fn apply(snapshot: &Value, delta: &Value) -> Delta {
    Delta::from(snapshot).compose(&Delta::from(delta))
}

pub fn compose(a: &Value, b: &Value) -> Delta {
    Delta::from(a).compose(&Delta::from(b))
}

pub fn diff(a: &Value, b: &Value) -> Result<Delta, DeltaError> {
    Delta::from(a).diff(&Delta::from(b))
}

/// Rebase `a` so it applies after the concurrent `b`. [`Side::Left`] gives
/// `b` priority, so on an insert tie `a`'s insert lands after `b`'s.
pub fn transform(a: &Value, b: &Value, side: Side) -> Delta {
    Delta::from(b).transform(&Delta::from(a), side == Side::Left)
}
