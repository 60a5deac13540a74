use lumen_fhir_support::FhirError;
use lumen_fhir_support::validation;
use lumen_fhir_support::visitor::{accept_all, accept_opt, Visitable, Visitor};

use crate::r5::codes::{PublicationStatus, RelatedArtifactType};
use crate::r5::complex_types::{Attachment, CodeableConcept, Extension, Reference};
use crate::r5::element::Element;
use crate::r5::primitives as types;

/// A related knowledge artifact: documentation, citations, predecessors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct RelatedArtifact {
    pub(crate) element: Element,
    pub(crate) r#type: Option<RelatedArtifactType>,
    pub(crate) classifier: Vec<CodeableConcept>,
    pub(crate) label: Option<types::String>,
    pub(crate) display: Option<types::String>,
    pub(crate) citation: Option<types::Markdown>,
    pub(crate) document: Option<Attachment>,
    pub(crate) resource: Option<types::Canonical>,
    pub(crate) resource_reference: Option<Reference>,
    pub(crate) publication_status: Option<PublicationStatus>,
    pub(crate) publication_date: Option<types::Date>,
}

impl RelatedArtifact {
    pub fn builder() -> RelatedArtifactBuilder {
        RelatedArtifactBuilder::default()
    }

    pub fn id(&self) -> Option<&str> {
        self.element.id()
    }

    pub fn extension(&self) -> &[Extension] {
        self.element.extension()
    }

    pub fn r#type(&self) -> Option<&RelatedArtifactType> {
        self.r#type.as_ref()
    }

    pub fn classifier(&self) -> &[CodeableConcept] {
        &self.classifier
    }

    pub fn label(&self) -> Option<&types::String> {
        self.label.as_ref()
    }

    pub fn display(&self) -> Option<&types::String> {
        self.display.as_ref()
    }

    pub fn citation(&self) -> Option<&types::Markdown> {
        self.citation.as_ref()
    }

    pub fn document(&self) -> Option<&Attachment> {
        self.document.as_ref()
    }

    pub fn resource(&self) -> Option<&types::Canonical> {
        self.resource.as_ref()
    }

    pub fn resource_reference(&self) -> Option<&Reference> {
        self.resource_reference.as_ref()
    }

    pub fn publication_status(&self) -> Option<&PublicationStatus> {
        self.publication_status.as_ref()
    }

    pub fn publication_date(&self) -> Option<&types::Date> {
        self.publication_date.as_ref()
    }

    pub fn to_builder(&self) -> RelatedArtifactBuilder {
        RelatedArtifactBuilder {
            inner: self.clone(),
        }
    }

    fn validate(&self) -> Result<(), FhirError> {
        validation::require_non_null(&self.r#type, "type")?;
        validation::require_value_or_children(self)
    }
}

#[derive(Debug, Clone, Default)]
pub struct RelatedArtifactBuilder {
    inner: RelatedArtifact,
}

impl RelatedArtifactBuilder {
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

    pub fn r#type(mut self, r#type: impl Into<RelatedArtifactType>) -> Self {
        self.inner.r#type = Some(r#type.into());
        self
    }

    pub fn classifier(mut self, classifier: CodeableConcept) -> Self {
        self.inner.classifier.push(classifier);
        self
    }

    pub fn set_classifier(mut self, classifier: Vec<CodeableConcept>) -> Self {
        self.inner.classifier = classifier;
        self
    }

    pub fn label(mut self, label: impl Into<types::String>) -> Self {
        self.inner.label = Some(label.into());
        self
    }

    pub fn display(mut self, display: impl Into<types::String>) -> Self {
        self.inner.display = Some(display.into());
        self
    }

    pub fn citation(mut self, citation: impl Into<types::Markdown>) -> Self {
        self.inner.citation = Some(citation.into());
        self
    }

    pub fn document(mut self, document: Attachment) -> Self {
        self.inner.document = Some(document);
        self
    }

    pub fn resource(mut self, resource: impl Into<types::Canonical>) -> Self {
        self.inner.resource = Some(resource.into());
        self
    }

    pub fn resource_reference(mut self, resource_reference: Reference) -> Self {
        self.inner.resource_reference = Some(resource_reference);
        self
    }

    pub fn publication_status(
        mut self,
        publication_status: impl Into<PublicationStatus>,
    ) -> Self {
        self.inner.publication_status = Some(publication_status.into());
        self
    }

    pub fn publication_date(mut self, publication_date: impl Into<types::Date>) -> Self {
        self.inner.publication_date = Some(publication_date.into());
        self
    }

    pub fn build(self) -> Result<RelatedArtifact, FhirError> {
        self.inner.validate()?;
        Ok(self.inner)
    }

    pub fn build_unchecked(self) -> RelatedArtifact {
        self.inner
    }
}

impl Visitable for RelatedArtifact {
    fn type_name(&self) -> &'static str {
        "RelatedArtifact"
    }

    fn has_children(&self) -> bool {
        self.element.has_children()
            || self.r#type.is_some()
            || !self.classifier.is_empty()
            || self.label.is_some()
            || self.display.is_some()
            || self.citation.is_some()
            || self.document.is_some()
            || self.resource.is_some()
            || self.resource_reference.is_some()
            || self.publication_status.is_some()
            || self.publication_date.is_some()
    }

    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        if visitor.pre_visit(self) {
            visitor.visit_start(name, index, self);
            if visitor.visit(name, index, self) {
                self.element.accept_children(visitor);
                accept_opt(&self.r#type, "type", visitor);
                accept_all(&self.classifier, "classifier", visitor);
                accept_opt(&self.label, "label", visitor);
                accept_opt(&self.display, "display", visitor);
                accept_opt(&self.citation, "citation", visitor);
                accept_opt(&self.document, "document", visitor);
                accept_opt(&self.resource, "resource", visitor);
                accept_opt(&self.resource_reference, "resourceReference", visitor);
                accept_opt(&self.publication_status, "publicationStatus", visitor);
                accept_opt(&self.publication_date, "publicationDate", visitor);
            }
            visitor.visit_end(name, index, self);
            visitor.post_visit(self);
        }
    }
}
