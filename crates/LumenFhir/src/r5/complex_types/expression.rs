use lumen_fhir_support::FhirError;
use lumen_fhir_support::validation;
use lumen_fhir_support::visitor::{accept_opt, Visitable, Visitor};

use crate::r5::complex_types::Extension;
use crate::r5::element::Element;
use crate::r5::primitives as types;

/// An expression in some language, carried for external evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Expression {
    pub(crate) element: Element,
    pub(crate) description: Option<types::String>,
    pub(crate) name: Option<types::Code>,
    pub(crate) language: Option<types::Code>,
    pub(crate) expression: Option<types::String>,
    pub(crate) reference: Option<types::Uri>,
}

impl Expression {
    pub fn builder() -> ExpressionBuilder {
        ExpressionBuilder::default()
    }

    pub fn id(&self) -> Option<&str> {
        self.element.id()
    }

    pub fn extension(&self) -> &[Extension] {
        self.element.extension()
    }

    pub fn description(&self) -> Option<&types::String> {
        self.description.as_ref()
    }

    pub fn name(&self) -> Option<&types::Code> {
        self.name.as_ref()
    }

    pub fn language(&self) -> Option<&types::Code> {
        self.language.as_ref()
    }

    pub fn expression(&self) -> Option<&types::String> {
        self.expression.as_ref()
    }

    pub fn reference(&self) -> Option<&types::Uri> {
        self.reference.as_ref()
    }

    pub fn to_builder(&self) -> ExpressionBuilder {
        ExpressionBuilder {
            inner: self.clone(),
        }
    }

    fn validate(&self) -> Result<(), FhirError> {
        validation::require_value_or_children(self)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ExpressionBuilder {
    inner: Expression,
}

impl ExpressionBuilder {
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

    pub fn description(mut self, description: impl Into<types::String>) -> Self {
        self.inner.description = Some(description.into());
        self
    }

    pub fn name(mut self, name: impl Into<types::Code>) -> Self {
        self.inner.name = Some(name.into());
        self
    }

    pub fn language(mut self, language: impl Into<types::Code>) -> Self {
        self.inner.language = Some(language.into());
        self
    }

    pub fn expression(mut self, expression: impl Into<types::String>) -> Self {
        self.inner.expression = Some(expression.into());
        self
    }

    pub fn reference(mut self, reference: impl Into<types::Uri>) -> Self {
        self.inner.reference = Some(reference.into());
        self
    }

    pub fn build(self) -> Result<Expression, FhirError> {
        self.inner.validate()?;
        Ok(self.inner)
    }

    pub fn build_unchecked(self) -> Expression {
        self.inner
    }
}

impl Visitable for Expression {
    fn type_name(&self) -> &'static str {
        "Expression"
    }

    fn has_children(&self) -> bool {
        self.element.has_children()
            || self.description.is_some()
            || self.name.is_some()
            || self.language.is_some()
            || self.expression.is_some()
            || self.reference.is_some()
    }

    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        if visitor.pre_visit(self) {
            visitor.visit_start(name, index, self);
            if visitor.visit(name, index, self) {
                self.element.accept_children(visitor);
                accept_opt(&self.description, "description", visitor);
                accept_opt(&self.name, "name", visitor);
                accept_opt(&self.language, "language", visitor);
                accept_opt(&self.expression, "expression", visitor);
                accept_opt(&self.reference, "reference", visitor);
            }
            visitor.visit_end(name, index, self);
            visitor.post_visit(self);
        }
    }
}
