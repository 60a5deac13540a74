//! The R5 object model.
//!
//! Split the way the schema is split: shared element headers, primitive
//! types, code types with closed value sets, complex datatypes, and the
//! resources themselves.

pub mod codes;
pub mod complex_types;
pub mod element;
pub mod primitives;
pub mod resources;
