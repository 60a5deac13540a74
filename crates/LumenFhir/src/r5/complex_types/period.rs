use lumen_fhir_support::FhirError;
use lumen_fhir_support::validation;
use lumen_fhir_support::visitor::{accept_opt, Visitable, Visitor};

use crate::r5::complex_types::Extension;
use crate::r5::element::Element;
use crate::r5::primitives as types;

/// A time range bounded by two dateTimes, either end open.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Period {
    pub(crate) element: Element,
    pub(crate) start: Option<types::DateTime>,
    pub(crate) end: Option<types::DateTime>,
}

impl Period {
    pub fn builder() -> PeriodBuilder {
        PeriodBuilder::default()
    }

    pub fn id(&self) -> Option<&str> {
        self.element.id()
    }

    pub fn extension(&self) -> &[Extension] {
        self.element.extension()
    }

    pub fn start(&self) -> Option<&types::DateTime> {
        self.start.as_ref()
    }

    pub fn end(&self) -> Option<&types::DateTime> {
        self.end.as_ref()
    }

    pub fn to_builder(&self) -> PeriodBuilder {
        PeriodBuilder {
            inner: self.clone(),
        }
    }

    fn validate(&self) -> Result<(), FhirError> {
        validation::require_value_or_children(self)
    }
}

#[derive(Debug, Clone, Default)]
pub struct PeriodBuilder {
    inner: Period,
}

impl PeriodBuilder {
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

    pub fn start(mut self, start: impl Into<types::DateTime>) -> Self {
        self.inner.start = Some(start.into());
        self
    }

    pub fn end(mut self, end: impl Into<types::DateTime>) -> Self {
        self.inner.end = Some(end.into());
        self
    }

    pub fn build(self) -> Result<Period, FhirError> {
        self.inner.validate()?;
        Ok(self.inner)
    }

    pub fn build_unchecked(self) -> Period {
        self.inner
    }
}

impl Visitable for Period {
    fn type_name(&self) -> &'static str {
        "Period"
    }

    fn has_children(&self) -> bool {
        self.element.has_children() || self.start.is_some() || self.end.is_some()
    }

    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        if visitor.pre_visit(self) {
            visitor.visit_start(name, index, self);
            if visitor.visit(name, index, self) {
                self.element.accept_children(visitor);
                accept_opt(&self.start, "start", visitor);
                accept_opt(&self.end, "end", visitor);
            }
            visitor.visit_end(name, index, self);
            visitor.post_visit(self);
        }
    }
}
