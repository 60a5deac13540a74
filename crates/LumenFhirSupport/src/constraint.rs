//! Declarative constraint and terminology-binding metadata.
//!
//! The object model carries this metadata for external engines (a FHIRPath
//! constraint evaluator, a terminology service) but never evaluates it.
//! Generated types expose their tables through associated constants.

/// Enforcement level of an invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintSeverity {
    /// Violations make an instance invalid.
    Rule,
    /// Violations are reportable but not invalidating.
    Warning,
}

/// A declared invariant on a type, expressed as a FHIRPath expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Invariant {
    pub key: &'static str,
    pub severity: ConstraintSeverity,
    /// Human-readable statement of the rule.
    pub human: &'static str,
    /// FHIRPath expression; evaluated by an external engine, not here.
    pub expression: &'static str,
    /// Declared FHIR path the rule applies to (e.g. `"Account.diagnosis"`).
    pub path: &'static str,
    pub source: &'static str,
}

/// Rigor with which a coded field's values should conform to its value set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingStrength {
    Required,
    Extensible,
    Preferred,
    Example,
}

/// Value-set binding metadata for a coded field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    pub name: &'static str,
    /// FHIR path of the bound field (e.g. `"Account.status"`).
    pub path: &'static str,
    pub strength: BindingStrength,
    pub value_set: &'static str,
}
