//! Inline markup tokenization
//!
//!     Paragraph text is scanned left to right into a flat sequence of
//!     inline leaf nodes; inline markup in this subset never nests. The
//!     scanner's single piece of state is the last consumed character:
//!     markup may only open right after whitespace or an opening
//!     punctuation/quote character, which is what keeps asterisks and
//!     backticks inside ordinary words (`can't*not*`) from matching.

pub mod parser;

pub use parser::tokenize;
