//! Block-level tokenization
//!
//!     The block tokenizer walks the normalized line sequence once, keeping
//!     an open-block stack of node handles and a parallel stack of indent
//!     thresholds. Indentation changes push and pop the stacks; each line's
//!     text is then classified against the construct matchers in a fixed
//!     order, first match wins.
//!
//!     Classification never fails hard: malformed constructs become `error`
//!     nodes at their point of occurrence and everything the subset does not
//!     know degrades to paragraph text.

pub mod engine;

pub use engine::tokenize;
