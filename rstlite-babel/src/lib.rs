//! Format conversion for rstlite documents
//!
//!     This crate turns source text into HTML for preview. The native input
//!     is the rst subset understood by rstlite-parser; `plain` and
//!     `markdown` inputs are supported as alternative formatters selected by
//!     [`convert`], optionally through a `#format` directive at the start of
//!     the text.
//!
//! Architecture
//!
//!     Formats that work on the parsed tree implement the [`Format`] trait
//!     and are discovered through the [`FormatRegistry`]:
//!
//!     - `rst`: parses source into the document tree (never fails; bad
//!       constructs become error nodes in the tree);
//!     - `html`: serializes the tree to an HTML fragment, the main output;
//!     - `treeviz`: a one-line-per-node dump of the tree for diagnostics,
//!       purely observational.
//!
//!     The `plain` and `markdown` formatters short-circuit the tree and map
//!     source text directly to HTML; they live under [`formats`] next to
//!     the others and are reached through [`convert`].
//!
//!     This is a pure library: nothing here touches the environment, and
//!     every conversion is a plain string-in/string-out call.

pub mod convert;
pub mod error;
pub mod format;
pub mod formats;
pub mod registry;

pub use convert::{convert, determine, FormatName};
pub use error::FormatError;
pub use format::Format;
pub use formats::html::HtmlOptions;
pub use registry::FormatRegistry;

/// Convert rst-subset source text to an HTML fragment with default options.
///
/// The single entry point for preview rendering: always returns a fragment,
/// for any input. Empty input yields an empty wrapper.
pub fn render(source: &str) -> String {
    render_with_options(source, &HtmlOptions::default())
}

/// Convert rst-subset source text to an HTML fragment.
pub fn render_with_options(source: &str, options: &HtmlOptions) -> String {
    let doc = rstlite_parser::parse(source);
    formats::html::serialize_to_html(&doc, options)
}
