use crate::iterator::OpIterator;
use crate::op::INFINITY;

use super::Delta;

impl Delta {
    /// The operations covering `start..end`, splitting ops at both bounds.
    pub fn slice(&self, start: usize, end: usize) -> Delta {
        let mut iter = OpIterator::new(&self.ops);
        let mut delta = Delta::new();
        let mut index = 0usize;

        while index < end && iter.has_next() {
            let op = if index < start {
                iter.next(start - index)
            } else {
                let op = iter.next(end - index);
                delta.push(op.clone());
                op
            };
            index += op.len();
        }

        delta
    }

    /// Everything from `start` to the end.
    pub fn slice_from(&self, start: usize) -> Delta {
        self.slice(start, INFINITY)
    }

    /// `self` followed by `other`, merging the two boundary operations when
    /// they are compatible.
    ///
    /// Every op of `other` goes through [`Delta::push`]: an insert that moves
    /// ahead of a trailing delete can leave the next op of `other` adjacent to
    /// that delete, so the boundary is not limited to the first op.
    pub fn concat(&self, other: &Delta) -> Delta {
        let mut delta = self.slice_from(0);
        for op in &other.ops {
            delta.push(op.clone());
        }
        delta
    }
}
