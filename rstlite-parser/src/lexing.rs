//! Line-level lexing
//!
//!     The block grammar of the rst subset is line oriented: every construct
//!     is recognized from a whole line plus at most one line of lookahead.
//!     This module provides the two line-level pieces the block tokenizer is
//!     built on:
//!
//!     - [`lines`]: the normalizer that turns raw source into ordered
//!       (indent, text) pairs, and
//!     - [`classify`]: one pure matcher per construct. Each matcher takes
//!       the stripped line text and returns the parsed captures, or nothing.
//!       Matchers never look at neighbouring lines and hold no state; the
//!       tokenizer owns all ordering and lookahead decisions.

pub mod classify;
pub mod lines;

pub use lines::{normalize, Line};
