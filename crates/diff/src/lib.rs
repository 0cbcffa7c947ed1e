//! rich-text-diff: character-level diff used to seed structural document
//! diffs.
//!
//! The output is an ordered list of equal/insert/delete spans. Deleted and
//! equal spans reconstruct the source text; inserted and equal spans
//! reconstruct the destination text.

pub mod text;

pub use text::{diff, normalize, patch_dst, patch_src, pfx, sfx, Patch, PatchOpType, PatchOperation};
