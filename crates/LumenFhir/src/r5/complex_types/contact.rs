use lumen_fhir_support::FhirError;
use lumen_fhir_support::validation;
use lumen_fhir_support::visitor::{accept_all, accept_opt, Visitable, Visitor};

use crate::r5::codes::{ContactPointSystem, ContactPointUse};
use crate::r5::complex_types::{Extension, Period};
use crate::r5::element::Element;
use crate::r5::primitives as types;

/// A contact detail for a person or organization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ContactPoint {
    pub(crate) element: Element,
    pub(crate) system: Option<ContactPointSystem>,
    pub(crate) value: Option<types::String>,
    pub(crate) r#use: Option<ContactPointUse>,
    pub(crate) rank: Option<types::PositiveInt>,
    pub(crate) period: Option<Period>,
}

impl ContactPoint {
    pub fn builder() -> ContactPointBuilder {
        ContactPointBuilder::default()
    }

    pub fn id(&self) -> Option<&str> {
        self.element.id()
    }

    pub fn extension(&self) -> &[Extension] {
        self.element.extension()
    }

    pub fn system(&self) -> Option<&ContactPointSystem> {
        self.system.as_ref()
    }

    pub fn value(&self) -> Option<&types::String> {
        self.value.as_ref()
    }

    pub fn r#use(&self) -> Option<&ContactPointUse> {
        self.r#use.as_ref()
    }

    pub fn rank(&self) -> Option<&types::PositiveInt> {
        self.rank.as_ref()
    }

    pub fn period(&self) -> Option<&Period> {
        self.period.as_ref()
    }

    pub fn to_builder(&self) -> ContactPointBuilder {
        ContactPointBuilder {
            inner: self.clone(),
        }
    }

    fn validate(&self) -> Result<(), FhirError> {
        validation::require_value_or_children(self)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ContactPointBuilder {
    inner: ContactPoint,
}

impl ContactPointBuilder {
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

    pub fn system(mut self, system: impl Into<ContactPointSystem>) -> Self {
        self.inner.system = Some(system.into());
        self
    }

    pub fn value(mut self, value: impl Into<types::String>) -> Self {
        self.inner.value = Some(value.into());
        self
    }

    pub fn r#use(mut self, r#use: impl Into<ContactPointUse>) -> Self {
        self.inner.r#use = Some(r#use.into());
        self
    }

    pub fn rank(mut self, rank: impl Into<types::PositiveInt>) -> Self {
        self.inner.rank = Some(rank.into());
        self
    }

    pub fn period(mut self, period: Period) -> Self {
        self.inner.period = Some(period);
        self
    }

    pub fn build(self) -> Result<ContactPoint, FhirError> {
        self.inner.validate()?;
        Ok(self.inner)
    }

    pub fn build_unchecked(self) -> ContactPoint {
        self.inner
    }
}

impl Visitable for ContactPoint {
    fn type_name(&self) -> &'static str {
        "ContactPoint"
    }

    fn has_children(&self) -> bool {
        self.element.has_children()
            || self.system.is_some()
            || self.value.is_some()
            || self.r#use.is_some()
            || self.rank.is_some()
            || self.period.is_some()
    }

    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        if visitor.pre_visit(self) {
            visitor.visit_start(name, index, self);
            if visitor.visit(name, index, self) {
                self.element.accept_children(visitor);
                accept_opt(&self.system, "system", visitor);
                accept_opt(&self.value, "value", visitor);
                accept_opt(&self.r#use, "use", visitor);
                accept_opt(&self.rank, "rank", visitor);
                accept_opt(&self.period, "period", visitor);
            }
            visitor.visit_end(name, index, self);
            visitor.post_visit(self);
        }
    }
}

/// A named party that can be contacted about an artifact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ContactDetail {
    pub(crate) element: Element,
    pub(crate) name: Option<types::String>,
    pub(crate) telecom: Vec<ContactPoint>,
}

impl ContactDetail {
    pub fn builder() -> ContactDetailBuilder {
        ContactDetailBuilder::default()
    }

    pub fn id(&self) -> Option<&str> {
        self.element.id()
    }

    pub fn extension(&self) -> &[Extension] {
        self.element.extension()
    }

    pub fn name(&self) -> Option<&types::String> {
        self.name.as_ref()
    }

    pub fn telecom(&self) -> &[ContactPoint] {
        &self.telecom
    }

    pub fn to_builder(&self) -> ContactDetailBuilder {
        ContactDetailBuilder {
            inner: self.clone(),
        }
    }

    fn validate(&self) -> Result<(), FhirError> {
        validation::require_value_or_children(self)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ContactDetailBuilder {
    inner: ContactDetail,
}

impl ContactDetailBuilder {
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

    pub fn name(mut self, name: impl Into<types::String>) -> Self {
        self.inner.name = Some(name.into());
        self
    }

    pub fn telecom(mut self, telecom: ContactPoint) -> Self {
        self.inner.telecom.push(telecom);
        self
    }

    pub fn set_telecom(mut self, telecom: Vec<ContactPoint>) -> Self {
        self.inner.telecom = telecom;
        self
    }

    pub fn build(self) -> Result<ContactDetail, FhirError> {
        self.inner.validate()?;
        Ok(self.inner)
    }

    pub fn build_unchecked(self) -> ContactDetail {
        self.inner
    }
}

impl Visitable for ContactDetail {
    fn type_name(&self) -> &'static str {
        "ContactDetail"
    }

    fn has_children(&self) -> bool {
        self.element.has_children() || self.name.is_some() || !self.telecom.is_empty()
    }

    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        if visitor.pre_visit(self) {
            visitor.visit_start(name, index, self);
            if visitor.visit(name, index, self) {
                self.element.accept_children(visitor);
                accept_opt(&self.name, "name", visitor);
                accept_all(&self.telecom, "telecom", visitor);
            }
            visitor.visit_end(name, index, self);
            visitor.post_visit(self);
        }
    }
}
