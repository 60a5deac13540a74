use lumen_fhir_support::FhirError;
use lumen_fhir_support::validation;
use lumen_fhir_support::visitor::{accept_opt, Visitable, Visitor};

use crate::r5::complex_types::{CodeableConcept, Coding, Extension, Quantity, Range, Reference};
use crate::r5::element::Element;

choice_type!(
    UsageContextValue, "value", {
        CodeableConcept(CodeableConcept) => "valueCodeableConcept",
        Quantity(Quantity) => "valueQuantity",
        Range(Range) => "valueRange",
        Reference(Reference) => "valueReference",
    }
);

/// A use context an artifact is intended for. Both fields are required.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct UsageContext {
    pub(crate) element: Element,
    pub(crate) code: Option<Coding>,
    pub(crate) value: Option<UsageContextValue>,
}

impl UsageContext {
    pub fn builder() -> UsageContextBuilder {
        UsageContextBuilder::default()
    }

    pub fn id(&self) -> Option<&str> {
        self.element.id()
    }

    pub fn extension(&self) -> &[Extension] {
        self.element.extension()
    }

    pub fn code(&self) -> Option<&Coding> {
        self.code.as_ref()
    }

    pub fn value(&self) -> Option<&UsageContextValue> {
        self.value.as_ref()
    }

    pub fn to_builder(&self) -> UsageContextBuilder {
        UsageContextBuilder {
            inner: self.clone(),
        }
    }

    fn validate(&self) -> Result<(), FhirError> {
        validation::require_non_null(&self.code, "code")?;
        validation::require_non_null(&self.value, "value")
    }
}

#[derive(Debug, Clone, Default)]
pub struct UsageContextBuilder {
    inner: UsageContext,
}

impl UsageContextBuilder {
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

    pub fn code(mut self, code: Coding) -> Self {
        self.inner.code = Some(code);
        self
    }

    pub fn value(mut self, value: UsageContextValue) -> Self {
        self.inner.value = Some(value);
        self
    }

    pub fn build(self) -> Result<UsageContext, FhirError> {
        self.inner.validate()?;
        Ok(self.inner)
    }

    pub fn build_unchecked(self) -> UsageContext {
        self.inner
    }
}

impl Visitable for UsageContext {
    fn type_name(&self) -> &'static str {
        "UsageContext"
    }

    fn has_children(&self) -> bool {
        self.element.has_children() || self.code.is_some() || self.value.is_some()
    }

    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        if visitor.pre_visit(self) {
            visitor.visit_start(name, index, self);
            if visitor.visit(name, index, self) {
                self.element.accept_children(visitor);
                accept_opt(&self.code, "code", visitor);
                if let Some(value) = &self.value {
                    value.accept(visitor);
                }
            }
            visitor.visit_end(name, index, self);
            visitor.post_visit(self);
        }
    }
}
