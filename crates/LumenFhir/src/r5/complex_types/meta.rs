use lumen_fhir_support::FhirError;
use lumen_fhir_support::validation;
use lumen_fhir_support::visitor::{accept_all, accept_opt, Visitable, Visitor};

use crate::r5::complex_types::{Coding, Extension};
use crate::r5::element::Element;
use crate::r5::primitives as types;

/// Metadata maintained by the infrastructure about a resource instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Meta {
    pub(crate) element: Element,
    pub(crate) version_id: Option<types::Id>,
    pub(crate) last_updated: Option<types::Instant>,
    pub(crate) source: Option<types::Uri>,
    pub(crate) profile: Vec<types::Canonical>,
    pub(crate) security: Vec<Coding>,
    pub(crate) tag: Vec<Coding>,
}

impl Meta {
    pub fn builder() -> MetaBuilder {
        MetaBuilder::default()
    }

    pub fn id(&self) -> Option<&str> {
        self.element.id()
    }

    pub fn extension(&self) -> &[Extension] {
        self.element.extension()
    }

    pub fn version_id(&self) -> Option<&types::Id> {
        self.version_id.as_ref()
    }

    pub fn last_updated(&self) -> Option<&types::Instant> {
        self.last_updated.as_ref()
    }

    pub fn source(&self) -> Option<&types::Uri> {
        self.source.as_ref()
    }

    pub fn profile(&self) -> &[types::Canonical] {
        &self.profile
    }

    pub fn security(&self) -> &[Coding] {
        &self.security
    }

    pub fn tag(&self) -> &[Coding] {
        &self.tag
    }

    pub fn to_builder(&self) -> MetaBuilder {
        MetaBuilder {
            inner: self.clone(),
        }
    }

    fn validate(&self) -> Result<(), FhirError> {
        validation::require_value_or_children(self)
    }
}

#[derive(Debug, Clone, Default)]
pub struct MetaBuilder {
    inner: Meta,
}

impl MetaBuilder {
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

    pub fn version_id(mut self, version_id: impl Into<types::Id>) -> Self {
        self.inner.version_id = Some(version_id.into());
        self
    }

    pub fn last_updated(mut self, last_updated: impl Into<types::Instant>) -> Self {
        self.inner.last_updated = Some(last_updated.into());
        self
    }

    pub fn source(mut self, source: impl Into<types::Uri>) -> Self {
        self.inner.source = Some(source.into());
        self
    }

    pub fn profile(mut self, profile: impl Into<types::Canonical>) -> Self {
        self.inner.profile.push(profile.into());
        self
    }

    pub fn set_profile(mut self, profile: Vec<types::Canonical>) -> Self {
        self.inner.profile = profile;
        self
    }

    pub fn security(mut self, security: Coding) -> Self {
        self.inner.security.push(security);
        self
    }

    pub fn set_security(mut self, security: Vec<Coding>) -> Self {
        self.inner.security = security;
        self
    }

    pub fn tag(mut self, tag: Coding) -> Self {
        self.inner.tag.push(tag);
        self
    }

    pub fn set_tag(mut self, tag: Vec<Coding>) -> Self {
        self.inner.tag = tag;
        self
    }

    pub fn build(self) -> Result<Meta, FhirError> {
        self.inner.validate()?;
        Ok(self.inner)
    }

    pub fn build_unchecked(self) -> Meta {
        self.inner
    }
}

impl Visitable for Meta {
    fn type_name(&self) -> &'static str {
        "Meta"
    }

    fn has_children(&self) -> bool {
        self.element.has_children()
            || self.version_id.is_some()
            || self.last_updated.is_some()
            || self.source.is_some()
            || !self.profile.is_empty()
            || !self.security.is_empty()
            || !self.tag.is_empty()
    }

    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        if visitor.pre_visit(self) {
            visitor.visit_start(name, index, self);
            if visitor.visit(name, index, self) {
                self.element.accept_children(visitor);
                accept_opt(&self.version_id, "versionId", visitor);
                accept_opt(&self.last_updated, "lastUpdated", visitor);
                accept_opt(&self.source, "source", visitor);
                accept_all(&self.profile, "profile", visitor);
                accept_all(&self.security, "security", visitor);
                accept_all(&self.tag, "tag", visitor);
            }
            visitor.visit_end(name, index, self);
            visitor.post_visit(self);
        }
    }
}
