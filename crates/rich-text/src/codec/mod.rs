//! Delta codecs.

pub mod json;
