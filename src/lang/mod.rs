/*!
# Language Module

This module provides lexical analysis and parsing of the Tiny BASIC
dialect. The scanner tags raw source text and the parser builds the
flat syntax tree in `ast`. Neither stage keeps token text; everything
downstream works from byte ranges into the original source.

*/

mod error;
mod parse;
mod scan;

pub mod ast;
pub mod token;

pub use error::Error;
pub use error::ErrorKind;
pub use parse::parse;
pub use scan::annotate;
pub use scan::scan;
pub use scan::Scanner;

/// Byte range of a token in the source text.
pub type Column = std::ops::Range<usize>;

/// Index into the scanned token list.
pub type TokenId = usize;

/// Index into the syntax tree arena.
pub type NodeId = usize;

/// Half-open range into the arena's extra data array.
pub type ExtraRange = std::ops::Range<usize>;
