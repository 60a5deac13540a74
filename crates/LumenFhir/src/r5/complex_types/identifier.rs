use lumen_fhir_support::FhirError;
use lumen_fhir_support::validation::{self, ReferenceTarget};
use lumen_fhir_support::visitor::{accept_opt, Visitable, Visitor};

use crate::r5::codes::{IdentifierUse, IdentifierUseValue};
use crate::r5::complex_types::{CodeableConcept, Extension, Period};
use crate::r5::element::Element;
use crate::r5::primitives as types;

/// A business identifier within some assigning system.
///
/// `assigner` is boxed to break the type-level cycle with [`Reference`],
/// which embeds an `Identifier` of its own.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Identifier {
    pub(crate) element: Element,
    pub(crate) r#use: Option<IdentifierUse>,
    pub(crate) r#type: Option<CodeableConcept>,
    pub(crate) system: Option<types::Uri>,
    pub(crate) value: Option<types::String>,
    pub(crate) period: Option<Period>,
    pub(crate) assigner: Option<Box<Reference>>,
}

impl Identifier {
    pub fn builder() -> IdentifierBuilder {
        IdentifierBuilder::default()
    }

    pub fn id(&self) -> Option<&str> {
        self.element.id()
    }

    pub fn extension(&self) -> &[Extension] {
        self.element.extension()
    }

    pub fn r#use(&self) -> Option<&IdentifierUse> {
        self.r#use.as_ref()
    }

    pub fn r#type(&self) -> Option<&CodeableConcept> {
        self.r#type.as_ref()
    }

    pub fn system(&self) -> Option<&types::Uri> {
        self.system.as_ref()
    }

    pub fn value(&self) -> Option<&types::String> {
        self.value.as_ref()
    }

    pub fn period(&self) -> Option<&Period> {
        self.period.as_ref()
    }

    pub fn assigner(&self) -> Option<&Reference> {
        self.assigner.as_deref()
    }

    pub fn to_builder(&self) -> IdentifierBuilder {
        IdentifierBuilder {
            inner: self.clone(),
        }
    }

    fn validate(&self) -> Result<(), FhirError> {
        validation::check_reference_type(self.assigner(), "assigner", &["Organization"])?;
        validation::require_value_or_children(self)
    }
}

#[derive(Debug, Clone, Default)]
pub struct IdentifierBuilder {
    inner: Identifier,
}

impl IdentifierBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.inner.element.id = Some(id.into());
        self
    }

    pub fn extension(mut self, extension: Extension) -> Self {
        self.inner.element.extension.push(extension);
        self
    }

    pub fn set_extension(mut self, extension: Vec<Extension>) -> Self {
        self.inner.element.extension = extension;
        self
    }

    pub fn r#use(mut self, r#use: impl Into<IdentifierUse>) -> Self {
        self.inner.r#use = Some(r#use.into());
        self
    }

    pub fn r#type(mut self, r#type: CodeableConcept) -> Self {
        self.inner.r#type = Some(r#type);
        self
    }

    pub fn system(mut self, system: impl Into<types::Uri>) -> Self {
        self.inner.system = Some(system.into());
        self
    }

    pub fn value(mut self, value: impl Into<types::String>) -> Self {
        self.inner.value = Some(value.into());
        self
    }

    pub fn period(mut self, period: Period) -> Self {
        self.inner.period = Some(period);
        self
    }

    pub fn assigner(mut self, assigner: Reference) -> Self {
        self.inner.assigner = Some(Box::new(assigner));
        self
    }

    pub fn build(self) -> Result<Identifier, FhirError> {
        self.inner.validate()?;
        Ok(self.inner)
    }

    pub fn build_unchecked(self) -> Identifier {
        self.inner
    }
}

impl Visitable for Identifier {
    fn type_name(&self) -> &'static str {
        "Identifier"
    }

    fn has_children(&self) -> bool {
        self.element.has_children()
            || self.r#use.is_some()
            || self.r#type.is_some()
            || self.system.is_some()
            || self.value.is_some()
            || self.period.is_some()
            || self.assigner.is_some()
    }

    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        if visitor.pre_visit(self) {
            visitor.visit_start(name, index, self);
            if visitor.visit(name, index, self) {
                self.element.accept_children(visitor);
                accept_opt(&self.r#use, "use", visitor);
                accept_opt(&self.r#type, "type", visitor);
                accept_opt(&self.system, "system", visitor);
                accept_opt(&self.value, "value", visitor);
                accept_opt(&self.period, "period", visitor);
                if let Some(assigner) = &self.assigner {
                    assigner.accept("assigner", None, visitor);
                }
            }
            visitor.visit_end(name, index, self);
            visitor.post_visit(self);
        }
    }
}

/// A reference from one resource to another.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Reference {
    pub(crate) element: Element,
    pub(crate) reference: Option<types::String>,
    pub(crate) r#type: Option<types::Uri>,
    pub(crate) identifier: Option<Identifier>,
    pub(crate) display: Option<types::String>,
}

impl Reference {
    pub fn builder() -> ReferenceBuilder {
        ReferenceBuilder::default()
    }

    /// A relative `Type/id` reference to the given target.
    pub fn to(target_type: &str, id: &str) -> Self {
        Self {
            reference: Some(types::String::of(format!("{target_type}/{id}"))),
            ..Self::default()
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.element.id()
    }

    pub fn extension(&self) -> &[Extension] {
        self.element.extension()
    }

    pub fn reference(&self) -> Option<&types::String> {
        self.reference.as_ref()
    }

    pub fn r#type(&self) -> Option<&types::Uri> {
        self.r#type.as_ref()
    }

    pub fn identifier(&self) -> Option<&Identifier> {
        self.identifier.as_ref()
    }

    pub fn display(&self) -> Option<&types::String> {
        self.display.as_ref()
    }

    pub fn to_builder(&self) -> ReferenceBuilder {
        ReferenceBuilder {
            inner: self.clone(),
        }
    }

    fn validate(&self) -> Result<(), FhirError> {
        validation::require_value_or_children(self)
    }
}

impl ReferenceTarget for Reference {
    /// The explicit `type` element wins; otherwise the `Type/id` prefix of
    /// the literal reference. Absolute URLs, fragments and plain ids yield
    /// `None`, which allow-list checks treat as undeterminable.
    fn target_type(&self) -> Option<&str> {
        if let Some(explicit) = self.r#type.as_ref().and_then(|t| t.value()) {
            return Some(explicit.as_str());
        }
        let literal = self.reference.as_ref().and_then(|r| r.value())?;
        if literal.starts_with('#') {
            return None;
        }
        let (head, _) = literal.split_once('/')?;
        if head.is_empty() || head.contains(':') {
            None
        } else {
            Some(head)
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ReferenceBuilder {
    inner: Reference,
}

impl ReferenceBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.inner.element.id = Some(id.into());
        self
    }

    pub fn extension(mut self, extension: Extension) -> Self {
        self.inner.element.extension.push(extension);
        self
    }

    pub fn set_extension(mut self, extension: Vec<Extension>) -> Self {
        self.inner.element.extension = extension;
        self
    }

    pub fn reference(mut self, reference: impl Into<types::String>) -> Self {
        self.inner.reference = Some(reference.into());
        self
    }

    pub fn r#type(mut self, r#type: impl Into<types::Uri>) -> Self {
        self.inner.r#type = Some(r#type.into());
        self
    }

    pub fn identifier(mut self, identifier: Identifier) -> Self {
        self.inner.identifier = Some(identifier);
        self
    }

    pub fn display(mut self, display: impl Into<types::String>) -> Self {
        self.inner.display = Some(display.into());
        self
    }

    pub fn build(self) -> Result<Reference, FhirError> {
        self.inner.validate()?;
        Ok(self.inner)
    }

    pub fn build_unchecked(self) -> Reference {
        self.inner
    }
}

impl Visitable for Reference {
    fn type_name(&self) -> &'static str {
        "Reference"
    }

    fn has_children(&self) -> bool {
        self.element.has_children()
            || self.reference.is_some()
            || self.r#type.is_some()
            || self.identifier.is_some()
            || self.display.is_some()
    }

    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        if visitor.pre_visit(self) {
            visitor.visit_start(name, index, self);
            if visitor.visit(name, index, self) {
                self.element.accept_children(visitor);
                accept_opt(&self.reference, "reference", visitor);
                accept_opt(&self.r#type, "type", visitor);
                accept_opt(&self.identifier, "identifier", visitor);
                accept_opt(&self.display, "display", visitor);
            }
            visitor.visit_end(name, index, self);
            visitor.post_visit(self);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_type_from_literal_prefix() {
        assert_eq!(
            Reference::to("Patient", "p1").target_type(),
            Some("Patient")
        );
        let absolute = Reference::builder()
            .reference("https://example.org/fhir/Patient/p1")
            .build()
            .unwrap();
        assert_eq!(absolute.target_type(), None);
        let fragment = Reference::builder().reference("#contained-1").build().unwrap();
        assert_eq!(fragment.target_type(), None);
        let display_only = Reference::builder().display("Dr. Odin").build().unwrap();
        assert_eq!(display_only.target_type(), None);
    }

    #[test]
    fn test_explicit_type_wins_over_literal() {
        let reference = Reference::builder()
            .reference("Patient/p1")
            .r#type("RelatedPerson")
            .build()
            .unwrap();
        assert_eq!(reference.target_type(), Some("RelatedPerson"));
    }

    #[test]
    fn test_identifier_assigner_must_be_an_organization() {
        let err = Identifier::builder()
            .system("urn:lumen:mrn")
            .value("12345")
            .assigner(Reference::to("Patient", "p1"))
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            FhirError::DisallowedReferenceTarget {
                field: "assigner",
                target: "Patient".to_string(),
            }
        );
    }

    #[test]
    fn test_identifier_use_accepts_value_enum() {
        let identifier = Identifier::builder()
            .r#use(IdentifierUseValue::Official)
            .value("12345")
            .build()
            .unwrap();
        assert_eq!(
            identifier.r#use().and_then(|u| u.value()),
            Some(IdentifierUseValue::Official)
        );
    }
}
