//! Generic utility primitives with zero domain knowledge.
//!
//! - `array` - Identity-keyed search, removal, upsert, and filtering
//! - `int` - Integer and numeric coercion
//! - `path` - Dotted-path lookup and mutation on JSON values
//! - `text` - Substring checks, JSON validity, positional templates

pub mod array;
pub mod int;
pub mod path;
pub mod text;

pub use array::{Identifiable, SliceExt, TextSearchable, Upsert, VecExt};
pub use int::IntConvertible;
pub use path::PathLookup;
pub use text::StrExt;
