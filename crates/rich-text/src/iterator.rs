//! Cursor over the operations of a delta.
//!
//! The cursor hands out operations in pieces of any requested length,
//! splitting text inserts, retains and deletes as needed. Past the last
//! operation it behaves like an endless attribute-free retain, which lets the
//! algorithms compare remaining lengths of two cursors without special-casing
//! the end of either delta.

use crate::op::{InsertValue, Op, OpType, INFINITY};

#[derive(Debug, Clone)]
pub struct OpIterator<'a> {
    ops: &'a [Op],
    index: usize,
    offset: usize,
}

impl<'a> OpIterator<'a> {
    pub fn new(ops: &'a [Op]) -> Self {
        Self {
            ops,
            index: 0,
            offset: 0,
        }
    }

    pub fn has_next(&self) -> bool {
        self.peek_length() < INFINITY
    }

    /// Remaining length of the current operation, or [`INFINITY`] past the end.
    pub fn peek_length(&self) -> usize {
        match self.ops.get(self.index) {
            Some(op) => op.len() - self.offset,
            None => INFINITY,
        }
    }

    pub fn peek_type(&self) -> OpType {
        self.ops
            .get(self.index)
            .map_or(OpType::Retain, Op::kind)
    }

    /// Consume the whole remainder of the current operation.
    pub fn next_op(&mut self) -> Op {
        self.next(INFINITY)
    }

    /// Consume at most `length` units of the current operation.
    ///
    /// Embeds are returned whole regardless of `length`.
    pub fn next(&mut self, length: usize) -> Op {
        let Some(op) = self.ops.get(self.index) else {
            return Op::Retain {
                len: INFINITY,
                attributes: None,
            };
        };

        let offset = self.offset;
        let remaining = op.len() - offset;
        let length = if length >= remaining {
            self.index += 1;
            self.offset = 0;
            remaining
        } else {
            self.offset += length;
            length
        };

        match op {
            Op::Delete(_) => Op::Delete(length),
            Op::Retain { attributes, .. } => Op::Retain {
                len: length,
                attributes: attributes.clone(),
            },
            Op::Insert { value, attributes } => {
                let value = match value {
                    InsertValue::Text(s) => {
                        InsertValue::Text(s.chars().skip(offset).take(length).collect())
                    }
                    InsertValue::Embed(v) => InsertValue::Embed(v.clone()),
                };
                Op::Insert {
                    value,
                    attributes: attributes.clone(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delta::Delta;
    use serde_json::json;

    fn sample() -> Delta {
        let mut delta = Delta::new();
        delta
            .insert("Hello", Some(crate::attrs! {"bold" => true}))
            .retain(3, None)
            .insert(json!(2), Some(crate::attrs! {"src" => "http://quilljs.com/"}))
            .delete(4);
        delta
    }

    #[test]
    fn has_next_until_exhausted() {
        let delta = sample();
        let mut iter = OpIterator::new(delta.ops());
        assert!(iter.has_next());
        for _ in 0..delta.ops().len() {
            iter.next_op();
        }
        assert!(!iter.has_next());
    }

    #[test]
    fn empty_delta_has_no_next() {
        let delta = Delta::new();
        let iter = OpIterator::new(delta.ops());
        assert!(!iter.has_next());
        assert_eq!(iter.peek_length(), INFINITY);
        assert_eq!(iter.peek_type(), OpType::Retain);
    }

    #[test]
    fn peek_length_follows_offset() {
        let delta = sample();
        let mut iter = OpIterator::new(delta.ops());
        assert_eq!(iter.peek_length(), 5);
        iter.next(2);
        assert_eq!(iter.peek_length(), 3);
        iter.next_op();
        assert_eq!(iter.peek_length(), 3);
        iter.next_op();
        assert_eq!(iter.peek_length(), 1);
        iter.next_op();
        assert_eq!(iter.peek_length(), 4);
        iter.next_op();
        assert_eq!(iter.peek_length(), INFINITY);
    }

    #[test]
    fn peek_type_walks_ops() {
        let delta = sample();
        let mut iter = OpIterator::new(delta.ops());
        assert_eq!(iter.peek_type(), OpType::Insert);
        iter.next_op();
        assert_eq!(iter.peek_type(), OpType::Retain);
        iter.next_op();
        assert_eq!(iter.peek_type(), OpType::Insert);
        iter.next_op();
        assert_eq!(iter.peek_type(), OpType::Delete);
        iter.next_op();
        assert_eq!(iter.peek_type(), OpType::Retain);
    }

    #[test]
    fn next_splits_text_and_keeps_embeds_whole() {
        let delta = sample();
        let mut iter = OpIterator::new(delta.ops());
        assert_eq!(iter.next(2), Op::insert("He", Some(crate::attrs! {"bold" => true})));
        assert_eq!(iter.next(10), Op::insert("llo", Some(crate::attrs! {"bold" => true})));
        assert_eq!(iter.next(1), Op::retain(1, None));
        assert_eq!(iter.next(2), Op::retain(2, None));
        assert_eq!(
            iter.next(5),
            Op::insert(json!(2), Some(crate::attrs! {"src" => "http://quilljs.com/"}))
        );
        assert_eq!(iter.next(3), Op::Delete(3));
        assert_eq!(iter.next(3), Op::Delete(1));
        assert_eq!(
            iter.next(1),
            Op::Retain {
                len: INFINITY,
                attributes: None
            }
        );
    }

    #[test]
    fn next_slices_by_char() {
        let mut delta = Delta::new();
        delta.insert("añb😀c", None);
        let mut iter = OpIterator::new(delta.ops());
        assert_eq!(iter.next(2), Op::insert("añ", None));
        assert_eq!(iter.next(2), Op::insert("b😀", None));
        assert_eq!(iter.next_op(), Op::insert("c", None));
    }
}
