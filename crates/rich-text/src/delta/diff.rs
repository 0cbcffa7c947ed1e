use rich_text_diff::PatchOpType;
use tracing::{debug, trace};

use crate::attributes;
use crate::error::DeltaError;
use crate::iterator::OpIterator;
use crate::op::Op;

use super::Delta;

/// Flatten a document into the string handed to the character diff.
fn document_text(ops: &[Op]) -> Result<String, DeltaError> {
    ops.iter()
        .map(|op| op.document_text().ok_or(DeltaError::NotADocument))
        .collect()
}

impl Delta {
    /// The change turning document `self` into document `other`, so that
    /// `self.compose(&self.diff(other)?) == *other`.
    ///
    /// Both operands must consist of inserts only.
    pub fn diff(&self, other: &Delta) -> Result<Delta, DeltaError> {
        let (this_text, other_text) = match (document_text(&self.ops), document_text(&other.ops)) {
            (Ok(a), Ok(b)) => (a, b),
            (Err(e), _) | (_, Err(e)) => {
                debug!("diff rejected: operand contains retain or delete");
                return Err(e);
            }
        };
        if self.ops == other.ops {
            return Ok(Delta::new());
        }

        let patch = rich_text_diff::diff(&this_text, &other_text);
        trace!(spans = patch.len(), "character diff computed");

        let mut this_iter = OpIterator::new(&self.ops);
        let mut other_iter = OpIterator::new(&other.ops);
        let mut delta = Delta::new();

        for (op_type, text) in patch {
            let mut length = text.chars().count();
            while length > 0 {
                let op_length = match op_type {
                    PatchOpType::Ins => {
                        let op_length = other_iter.peek_length().min(length);
                        delta.push(other_iter.next(op_length));
                        op_length
                    }
                    PatchOpType::Del => {
                        let op_length = this_iter.peek_length().min(length);
                        this_iter.next(op_length);
                        delta.delete(op_length);
                        op_length
                    }
                    PatchOpType::Eql => {
                        let op_length = this_iter
                            .peek_length()
                            .min(other_iter.peek_length())
                            .min(length);
                        let this_op = this_iter.next(op_length);
                        let other_op = other_iter.next(op_length);
                        match (this_op, other_op) {
                            // Equal placeholders only mean equal content once the
                            // values themselves compare equal.
                            (
                                Op::Insert {
                                    value: this_value,
                                    attributes: this_attrs,
                                },
                                Op::Insert {
                                    value: other_value,
                                    attributes: other_attrs,
                                },
                            ) if this_value == other_value => {
                                let attrs =
                                    attributes::diff(this_attrs.as_ref(), other_attrs.as_ref());
                                delta.retain(op_length, attrs);
                            }
                            (_, other_op) => {
                                delta.push(other_op).delete(op_length);
                            }
                        }
                        op_length
                    }
                };
                length -= op_length;
            }
        }

        delta.chop();
        Ok(delta)
    }
}
