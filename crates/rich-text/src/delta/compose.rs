use crate::attributes;
use crate::iterator::OpIterator;
use crate::op::{Op, OpType};

use super::Delta;

impl Delta {
    /// Combine `self` with `other`, where `other` is applied to the result of
    /// `self`. Neither input is modified.
    pub fn compose(&self, other: &Delta) -> Delta {
        let mut this_iter = OpIterator::new(&self.ops);
        let mut other_iter = OpIterator::new(&other.ops);
        let mut delta = Delta::new();

        while this_iter.has_next() || other_iter.has_next() {
            if other_iter.peek_type() == OpType::Insert {
                delta.push(other_iter.next_op());
            } else if this_iter.peek_type() == OpType::Delete {
                delta.push(this_iter.next_op());
            } else {
                let length = this_iter.peek_length().min(other_iter.peek_length());
                let this_op = this_iter.next(length);
                let other_op = other_iter.next(length);
                match other_op {
                    Op::Retain {
                        attributes: other_attrs,
                        ..
                    } => {
                        // Clears only need to survive while the result is still a retain.
                        let keep_null = this_op.is_retain();
                        let attrs = attributes::compose(
                            this_op.attributes(),
                            other_attrs.as_ref(),
                            keep_null,
                        );
                        match this_op {
                            Op::Insert { value, .. } => delta.push(Op::insert(value, attrs)),
                            _ => delta.push(Op::retain(length, attrs)),
                        };
                    }
                    Op::Delete(n) if this_op.is_retain() => {
                        delta.push(Op::Delete(n));
                    }
                    // Deleting freshly inserted content cancels both.
                    _ => {}
                }
            }
        }

        delta.chop();
        delta
    }
}
