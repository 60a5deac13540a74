use lumen_fhir_support::FhirError;
use lumen_fhir_support::validation;
use lumen_fhir_support::visitor::{accept_opt, Visitable, Visitor};

use crate::r5::codes::NarrativeStatus;
use crate::r5::complex_types::Extension;
use crate::r5::element::Element;
use crate::r5::primitives as types;

/// Human-readable summary of a resource. Both fields are required.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Narrative {
    pub(crate) element: Element,
    pub(crate) status: Option<NarrativeStatus>,
    pub(crate) div: Option<types::Xhtml>,
}

impl Narrative {
    pub fn builder() -> NarrativeBuilder {
        NarrativeBuilder::default()
    }

    pub fn id(&self) -> Option<&str> {
        self.element.id()
    }

    pub fn extension(&self) -> &[Extension] {
        self.element.extension()
    }

    pub fn status(&self) -> Option<&NarrativeStatus> {
        self.status.as_ref()
    }

    pub fn div(&self) -> Option<&types::Xhtml> {
        self.div.as_ref()
    }

    pub fn to_builder(&self) -> NarrativeBuilder {
        NarrativeBuilder {
            inner: self.clone(),
        }
    }

    fn validate(&self) -> Result<(), FhirError> {
        validation::require_non_null(&self.status, "status")?;
        validation::require_non_null(&self.div, "div")
    }
}

#[derive(Debug, Clone, Default)]
pub struct NarrativeBuilder {
    inner: Narrative,
}

impl NarrativeBuilder {
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

    pub fn status(mut self, status: impl Into<NarrativeStatus>) -> Self {
        self.inner.status = Some(status.into());
        self
    }

    pub fn div(mut self, div: impl Into<types::Xhtml>) -> Self {
        self.inner.div = Some(div.into());
        self
    }

    pub fn build(self) -> Result<Narrative, FhirError> {
        self.inner.validate()?;
        Ok(self.inner)
    }

    pub fn build_unchecked(self) -> Narrative {
        self.inner
    }
}

impl Visitable for Narrative {
    fn type_name(&self) -> &'static str {
        "Narrative"
    }

    fn has_children(&self) -> bool {
        self.element.has_children() || self.status.is_some() || self.div.is_some()
    }

    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        if visitor.pre_visit(self) {
            visitor.visit_start(name, index, self);
            if visitor.visit(name, index, self) {
                self.element.accept_children(visitor);
                accept_opt(&self.status, "status", visitor);
                accept_opt(&self.div, "div", visitor);
            }
            visitor.visit_end(name, index, self);
            visitor.post_visit(self);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r5::codes::NarrativeStatusValue;

    #[test]
    fn test_narrative_requires_status_and_div() {
        let err = Narrative::builder()
            .div("<div xmlns=\"http://www.w3.org/1999/xhtml\">ok</div>")
            .build()
            .unwrap_err();
        assert_eq!(err, FhirError::MissingRequiredField("status"));

        let err = Narrative::builder()
            .status(NarrativeStatusValue::Generated)
            .build()
            .unwrap_err();
        assert_eq!(err, FhirError::MissingRequiredField("div"));
    }
}
