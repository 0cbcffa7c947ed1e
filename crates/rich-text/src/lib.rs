//! rich-text: operational transformation for rich-text documents.
//!
//! A [`Delta`] is an ordered list of insert/delete/retain operations, each
//! optionally carrying formatting attributes. It describes either a whole
//! document (inserts only) or a change to one. The algebra over deltas:
//!
//! - [`Delta::compose`]: merge two sequential changes;
//! - [`Delta::transform`] / [`Delta::transform_position`]: rebase a change
//!   or a cursor against a concurrent change;
//! - [`Delta::diff`]: the change between two documents;
//! - [`Delta::slice`] / [`Delta::concat`].
//!
//! ```
//! use rich_text::Delta;
//!
//! let mut doc = Delta::new();
//! doc.insert("Hello", None);
//! let mut change = Delta::new();
//! change.retain(3, None).insert("X", None);
//!
//! let mut expected = Delta::new();
//! expected.insert("HelXlo", None);
//! assert_eq!(doc.compose(&change), expected);
//! ```

pub mod attributes;
pub mod cli;
pub mod codec;
pub mod delta;
pub mod error;
pub mod iterator;
pub mod op;
pub mod ot_type;

pub use attributes::{AttrValue, AttributeMap};
pub use delta::Delta;
pub use error::DeltaError;
pub use iterator::OpIterator;
pub use op::{InsertValue, Op, OpType, INFINITY};

#[doc(hidden)]
pub use serde_json as __json;

/// Build an [`AttributeMap`] from `key => json` pairs; `null` clears.
///
/// Each value is a single token tree, so negative numbers and other
/// multi-token expressions go in parentheses.
///
/// ```
/// use rich_text::attributes::AttrValue;
///
/// let attrs = rich_text::attrs! {"bold" => true, "color" => null, "indent" => (-1)};
/// assert_eq!(attrs.len(), 3);
/// assert_eq!(attrs["indent"], AttrValue::Set(serde_json::json!(-1)));
/// ```
#[macro_export]
macro_rules! attrs {
    ($($key:literal => $value:tt),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut map = $crate::attributes::AttributeMap::new();
        $(
            map.insert(
                ::std::string::String::from($key),
                $crate::attributes::AttrValue::from($crate::__json::json!($value)),
            );
        )*
        map
    }};
}
