//! Shared headers embedded by every generated type.
//!
//! Inheritance in the source schema (Element, BackboneElement,
//! DomainResource) becomes composition here: each generated struct embeds
//! the header for its base and delegates the common accessors and the
//! common leg of traversal to it.

use lumen_fhir_support::visitor::{accept_all, accept_opt, Value, Visitor};

use crate::r5::complex_types::{Extension, Meta, Narrative};
use crate::r5::primitives as types;
use crate::r5::resources::Resource;

/// Header shared by all element types: inter-element id plus extensions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Element {
    pub(crate) id: Option<String>,
    pub(crate) extension: Vec<Extension>,
}

impl Element {
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn extension(&self) -> &[Extension] {
        &self.extension
    }

    pub(crate) fn has_children(&self) -> bool {
        self.id.is_some() || !self.extension.is_empty()
    }

    pub(crate) fn accept_children(&self, visitor: &mut dyn Visitor) {
        if let Some(id) = &self.id {
            visitor.visit_value("id", Value::String(id));
        }
        accept_all(&self.extension, "extension", visitor);
    }
}

/// Header for backbone elements, which add modifier extensions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct BackboneElement {
    pub(crate) element: Element,
    pub(crate) modifier_extension: Vec<Extension>,
}

impl BackboneElement {
    pub fn id(&self) -> Option<&str> {
        self.element.id()
    }

    pub fn extension(&self) -> &[Extension] {
        self.element.extension()
    }

    pub fn modifier_extension(&self) -> &[Extension] {
        &self.modifier_extension
    }

    pub(crate) fn has_children(&self) -> bool {
        self.element.has_children() || !self.modifier_extension.is_empty()
    }

    pub(crate) fn accept_children(&self, visitor: &mut dyn Visitor) {
        self.element.accept_children(visitor);
        accept_all(&self.modifier_extension, "modifierExtension", visitor);
    }
}

/// Header for domain resources: identity, metadata, narrative, contained
/// resources, and extensions. Child order here is the fixed prefix of every
/// resource's traversal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct DomainResource {
    pub(crate) id: Option<String>,
    pub(crate) meta: Option<Meta>,
    pub(crate) implicit_rules: Option<types::Uri>,
    pub(crate) language: Option<types::Code>,
    pub(crate) text: Option<Narrative>,
    pub(crate) contained: Vec<Resource>,
    pub(crate) extension: Vec<Extension>,
    pub(crate) modifier_extension: Vec<Extension>,
}

impl DomainResource {
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }

    pub fn implicit_rules(&self) -> Option<&types::Uri> {
        self.implicit_rules.as_ref()
    }

    pub fn language(&self) -> Option<&types::Code> {
        self.language.as_ref()
    }

    pub fn text(&self) -> Option<&Narrative> {
        self.text.as_ref()
    }

    pub fn contained(&self) -> &[Resource] {
        &self.contained
    }

    pub fn extension(&self) -> &[Extension] {
        &self.extension
    }

    pub fn modifier_extension(&self) -> &[Extension] {
        &self.modifier_extension
    }

    pub(crate) fn has_children(&self) -> bool {
        self.id.is_some()
            || self.meta.is_some()
            || self.implicit_rules.is_some()
            || self.language.is_some()
            || self.text.is_some()
            || !self.contained.is_empty()
            || !self.extension.is_empty()
            || !self.modifier_extension.is_empty()
    }

    pub(crate) fn accept_children(&self, visitor: &mut dyn Visitor) {
        if let Some(id) = &self.id {
            visitor.visit_value("id", Value::Id(id));
        }
        accept_opt(&self.meta, "meta", visitor);
        accept_opt(&self.implicit_rules, "implicitRules", visitor);
        accept_opt(&self.language, "language", visitor);
        accept_opt(&self.text, "text", visitor);
        accept_all(&self.contained, "contained", visitor);
        accept_all(&self.extension, "extension", visitor);
        accept_all(&self.modifier_extension, "modifierExtension", visitor);
    }
}
