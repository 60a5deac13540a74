//! Shared runtime contract for the Lumen FHIR object model.
//!
//! Every generated resource and datatype leans on this crate for three
//! things: the construction-failure taxonomy raised by builders
//! ([`error::FhirError`]), the structural checks evaluated at build time
//! ([`validation`]), and the traversal protocol generic consumers use to
//! walk an object graph without the objects knowing about them
//! ([`visitor`]). Declarative constraint and terminology-binding metadata
//! is carried by [`constraint`] but never evaluated here.

pub mod constraint;
pub mod error;
pub mod traits;
pub mod validation;
pub mod visitor;

pub use constraint::{Binding, BindingStrength, ConstraintSeverity, Invariant};
pub use error::FhirError;
pub use traits::ChoiceElement;
pub use visitor::{Value, Visitable, Visitor};
