use lumen_fhir_support::FhirError;
use lumen_fhir_support::validation;
use lumen_fhir_support::visitor::{accept_all, accept_opt, Visitable, Visitor};

use crate::r5::complex_types::{Extension, Reference};
use crate::r5::element::Element;
use crate::r5::primitives as types;

/// A single code drawn from a code system.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Coding {
    pub(crate) element: Element,
    pub(crate) system: Option<types::Uri>,
    pub(crate) version: Option<types::String>,
    pub(crate) code: Option<types::Code>,
    pub(crate) display: Option<types::String>,
    pub(crate) user_selected: Option<types::Boolean>,
}

impl Coding {
    pub fn builder() -> CodingBuilder {
        CodingBuilder::default()
    }

    pub fn id(&self) -> Option<&str> {
        self.element.id()
    }

    pub fn extension(&self) -> &[Extension] {
        self.element.extension()
    }

    pub fn system(&self) -> Option<&types::Uri> {
        self.system.as_ref()
    }

    pub fn version(&self) -> Option<&types::String> {
        self.version.as_ref()
    }

    pub fn code(&self) -> Option<&types::Code> {
        self.code.as_ref()
    }

    pub fn display(&self) -> Option<&types::String> {
        self.display.as_ref()
    }

    pub fn user_selected(&self) -> Option<&types::Boolean> {
        self.user_selected.as_ref()
    }

    pub fn to_builder(&self) -> CodingBuilder {
        CodingBuilder {
            inner: self.clone(),
        }
    }

    fn validate(&self) -> Result<(), FhirError> {
        validation::require_value_or_children(self)
    }
}

#[derive(Debug, Clone, Default)]
pub struct CodingBuilder {
    inner: Coding,
}

impl CodingBuilder {
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

    pub fn system(mut self, system: impl Into<types::Uri>) -> Self {
        self.inner.system = Some(system.into());
        self
    }

    pub fn version(mut self, version: impl Into<types::String>) -> Self {
        self.inner.version = Some(version.into());
        self
    }

    pub fn code(mut self, code: impl Into<types::Code>) -> Self {
        self.inner.code = Some(code.into());
        self
    }

    pub fn display(mut self, display: impl Into<types::String>) -> Self {
        self.inner.display = Some(display.into());
        self
    }

    pub fn user_selected(mut self, user_selected: impl Into<types::Boolean>) -> Self {
        self.inner.user_selected = Some(user_selected.into());
        self
    }

    pub fn build(self) -> Result<Coding, FhirError> {
        self.inner.validate()?;
        Ok(self.inner)
    }

    pub fn build_unchecked(self) -> Coding {
        self.inner
    }
}

impl Visitable for Coding {
    fn type_name(&self) -> &'static str {
        "Coding"
    }

    fn has_children(&self) -> bool {
        self.element.has_children()
            || self.system.is_some()
            || self.version.is_some()
            || self.code.is_some()
            || self.display.is_some()
            || self.user_selected.is_some()
    }

    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        if visitor.pre_visit(self) {
            visitor.visit_start(name, index, self);
            if visitor.visit(name, index, self) {
                self.element.accept_children(visitor);
                accept_opt(&self.system, "system", visitor);
                accept_opt(&self.version, "version", visitor);
                accept_opt(&self.code, "code", visitor);
                accept_opt(&self.display, "display", visitor);
                accept_opt(&self.user_selected, "userSelected", visitor);
            }
            visitor.visit_end(name, index, self);
            visitor.post_visit(self);
        }
    }
}

/// A concept expressed through one or more codings and/or free text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct CodeableConcept {
    pub(crate) element: Element,
    pub(crate) coding: Vec<Coding>,
    pub(crate) text: Option<types::String>,
}

impl CodeableConcept {
    pub fn builder() -> CodeableConceptBuilder {
        CodeableConceptBuilder::default()
    }

    pub fn id(&self) -> Option<&str> {
        self.element.id()
    }

    pub fn extension(&self) -> &[Extension] {
        self.element.extension()
    }

    pub fn coding(&self) -> &[Coding] {
        &self.coding
    }

    pub fn text(&self) -> Option<&types::String> {
        self.text.as_ref()
    }

    pub fn to_builder(&self) -> CodeableConceptBuilder {
        CodeableConceptBuilder {
            inner: self.clone(),
        }
    }

    fn validate(&self) -> Result<(), FhirError> {
        validation::require_value_or_children(self)
    }
}

#[derive(Debug, Clone, Default)]
pub struct CodeableConceptBuilder {
    inner: CodeableConcept,
}

impl CodeableConceptBuilder {
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

    pub fn coding(mut self, coding: Coding) -> Self {
        self.inner.coding.push(coding);
        self
    }

    pub fn set_coding(mut self, coding: Vec<Coding>) -> Self {
        self.inner.coding = coding;
        self
    }

    pub fn text(mut self, text: impl Into<types::String>) -> Self {
        self.inner.text = Some(text.into());
        self
    }

    pub fn build(self) -> Result<CodeableConcept, FhirError> {
        self.inner.validate()?;
        Ok(self.inner)
    }

    pub fn build_unchecked(self) -> CodeableConcept {
        self.inner
    }
}

impl Visitable for CodeableConcept {
    fn type_name(&self) -> &'static str {
        "CodeableConcept"
    }

    fn has_children(&self) -> bool {
        self.element.has_children() || !self.coding.is_empty() || self.text.is_some()
    }

    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        if visitor.pre_visit(self) {
            visitor.visit_start(name, index, self);
            if visitor.visit(name, index, self) {
                self.element.accept_children(visitor);
                accept_all(&self.coding, "coding", visitor);
                accept_opt(&self.text, "text", visitor);
            }
            visitor.visit_end(name, index, self);
            visitor.post_visit(self);
        }
    }
}

/// A concept, a reference to a resource, or both.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct CodeableReference {
    pub(crate) element: Element,
    pub(crate) concept: Option<CodeableConcept>,
    pub(crate) reference: Option<Reference>,
}

impl CodeableReference {
    pub fn builder() -> CodeableReferenceBuilder {
        CodeableReferenceBuilder::default()
    }

    pub fn id(&self) -> Option<&str> {
        self.element.id()
    }

    pub fn extension(&self) -> &[Extension] {
        self.element.extension()
    }

    pub fn concept(&self) -> Option<&CodeableConcept> {
        self.concept.as_ref()
    }

    pub fn reference(&self) -> Option<&Reference> {
        self.reference.as_ref()
    }

    pub fn to_builder(&self) -> CodeableReferenceBuilder {
        CodeableReferenceBuilder {
            inner: self.clone(),
        }
    }

    fn validate(&self) -> Result<(), FhirError> {
        validation::require_value_or_children(self)
    }
}

#[derive(Debug, Clone, Default)]
pub struct CodeableReferenceBuilder {
    inner: CodeableReference,
}

impl CodeableReferenceBuilder {
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

    pub fn concept(mut self, concept: CodeableConcept) -> Self {
        self.inner.concept = Some(concept);
        self
    }

    pub fn reference(mut self, reference: Reference) -> Self {
        self.inner.reference = Some(reference);
        self
    }

    pub fn build(self) -> Result<CodeableReference, FhirError> {
        self.inner.validate()?;
        Ok(self.inner)
    }

    pub fn build_unchecked(self) -> CodeableReference {
        self.inner
    }
}

impl Visitable for CodeableReference {
    fn type_name(&self) -> &'static str {
        "CodeableReference"
    }

    fn has_children(&self) -> bool {
        self.element.has_children() || self.concept.is_some() || self.reference.is_some()
    }

    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        if visitor.pre_visit(self) {
            visitor.visit_start(name, index, self);
            if visitor.visit(name, index, self) {
                self.element.accept_children(visitor);
                accept_opt(&self.concept, "concept", visitor);
                accept_opt(&self.reference, "reference", visitor);
            }
            visitor.visit_end(name, index, self);
            visitor.post_visit(self);
        }
    }
}
