//! Format implementations.
//!
//! `rst`, `html` and `treeviz` work on the document tree and implement the
//! [`Format`](crate::format::Format) trait; `plain` and `markdown` map
//! source text straight to HTML and are reached through
//! [`convert`](crate::convert::convert).

pub mod html;
pub mod markdown;
pub mod plain;
pub mod rst;
pub mod treeviz;
