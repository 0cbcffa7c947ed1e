use crate::attributes;
use crate::iterator::OpIterator;
use crate::op::OpType;

use super::Delta;

impl Delta {
    /// Transform `other` against `self`, both made on the same base document.
    ///
    /// The result applies `other`'s intent on top of the document `self`
    /// produced. `priority` decides ties: when true, `self` is considered to
    /// have happened first, so its inserts win the position and its
    /// attribute choices win conflicts.
    pub fn transform(&self, other: &Delta, priority: bool) -> Delta {
        let mut this_iter = OpIterator::new(&self.ops);
        let mut other_iter = OpIterator::new(&other.ops);
        let mut delta = Delta::new();

        while this_iter.has_next() || other_iter.has_next() {
            if this_iter.peek_type() == OpType::Insert
                && (priority || other_iter.peek_type() != OpType::Insert)
            {
                delta.retain(this_iter.next_op().len(), None);
            } else if other_iter.peek_type() == OpType::Insert {
                delta.push(other_iter.next_op());
            } else {
                let length = this_iter.peek_length().min(other_iter.peek_length());
                let this_op = this_iter.next(length);
                let other_op = other_iter.next(length);
                if this_op.is_delete() {
                    // Already gone from the document `other` is rebased onto.
                    continue;
                }
                if other_op.is_delete() {
                    delta.push(other_op);
                } else {
                    let attrs = attributes::transform(
                        this_op.attributes(),
                        other_op.attributes(),
                        priority,
                    );
                    delta.retain(length, attrs);
                }
            }
        }

        delta.chop();
        delta
    }

    /// Map a cursor position through this delta.
    ///
    /// With `priority`, an insert exactly at `index` is treated as coming
    /// after the cursor, which therefore stays put.
    pub fn transform_position(&self, index: usize, priority: bool) -> usize {
        let mut iter = OpIterator::new(&self.ops);
        let mut index = index;
        let mut offset = 0usize;

        while iter.has_next() && offset <= index {
            let length = iter.peek_length();
            let kind = iter.peek_type();
            iter.next_op();
            match kind {
                OpType::Delete => {
                    index -= length.min(index - offset);
                    continue;
                }
                OpType::Insert if offset < index || !priority => {
                    index += length;
                }
                _ => {}
            }
            offset += length;
        }

        index
    }
}
