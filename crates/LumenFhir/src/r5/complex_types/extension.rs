use lumen_fhir_support::FhirError;
use lumen_fhir_support::validation;
use lumen_fhir_support::visitor::{Value, Visitable, Visitor};

use crate::r5::complex_types::{
    Attachment, CodeableConcept, CodeableReference, Coding, ContactDetail, ContactPoint,
    DataRequirement, Expression, Identifier, Money, Period, Quantity, Range, Ratio, Reference,
    RelatedArtifact, Timing, TriggerDefinition, UsageContext,
};
use crate::r5::element::Element;
use crate::r5::primitives as types;

choice_type!(
    /// The payload of an extension, one of the datatypes this model carries.
    ExtensionValue, "value", {
        Base64Binary(types::Base64Binary) => "valueBase64Binary",
        Boolean(types::Boolean) => "valueBoolean",
        Canonical(types::Canonical) => "valueCanonical",
        Code(types::Code) => "valueCode",
        Date(types::Date) => "valueDate",
        DateTime(types::DateTime) => "valueDateTime",
        Decimal(types::Decimal) => "valueDecimal",
        Id(types::Id) => "valueId",
        Instant(types::Instant) => "valueInstant",
        Integer(types::Integer) => "valueInteger",
        Integer64(types::Integer64) => "valueInteger64",
        Markdown(types::Markdown) => "valueMarkdown",
        PositiveInt(types::PositiveInt) => "valuePositiveInt",
        String(types::String) => "valueString",
        Time(types::Time) => "valueTime",
        UnsignedInt(types::UnsignedInt) => "valueUnsignedInt",
        Uri(types::Uri) => "valueUri",
        Url(types::Url) => "valueUrl",
        Attachment(Attachment) => "valueAttachment",
        CodeableConcept(CodeableConcept) => "valueCodeableConcept",
        CodeableReference(CodeableReference) => "valueCodeableReference",
        Coding(Coding) => "valueCoding",
        ContactPoint(ContactPoint) => "valueContactPoint",
        Identifier(Identifier) => "valueIdentifier",
        Money(Money) => "valueMoney",
        Period(Period) => "valuePeriod",
        Quantity(Quantity) => "valueQuantity",
        Range(Range) => "valueRange",
        Ratio(Ratio) => "valueRatio",
        Reference(Reference) => "valueReference",
        Timing(Timing) => "valueTiming",
        ContactDetail(ContactDetail) => "valueContactDetail",
        DataRequirement(DataRequirement) => "valueDataRequirement",
        Expression(Expression) => "valueExpression",
        RelatedArtifact(RelatedArtifact) => "valueRelatedArtifact",
        TriggerDefinition(TriggerDefinition) => "valueTriggerDefinition",
        UsageContext(UsageContext) => "valueUsageContext",
    }
);

/// Additional content defined by an implementation, identified by its
/// defining `url`. The url is a raw scalar slot, not an element.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Extension {
    pub(crate) element: Element,
    pub(crate) url: Option<String>,
    pub(crate) value: Option<ExtensionValue>,
}

impl Extension {
    pub fn builder() -> ExtensionBuilder {
        ExtensionBuilder::default()
    }

    pub fn id(&self) -> Option<&str> {
        self.element.id()
    }

    /// Nested extensions; populated for complex extensions, which carry no
    /// value of their own.
    pub fn extension(&self) -> &[Extension] {
        self.element.extension()
    }

    /// The source of the extension's definition. Required.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn value(&self) -> Option<&ExtensionValue> {
        self.value.as_ref()
    }

    pub fn to_builder(&self) -> ExtensionBuilder {
        ExtensionBuilder {
            inner: self.clone(),
        }
    }

    fn validate(&self) -> Result<(), FhirError> {
        validation::require_non_null(&self.url, "url")
    }
}

#[derive(Debug, Clone, Default)]
pub struct ExtensionBuilder {
    inner: Extension,
}

impl ExtensionBuilder {
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

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.inner.url = Some(url.into());
        self
    }

    pub fn value(mut self, value: ExtensionValue) -> Self {
        self.inner.value = Some(value);
        self
    }

    pub fn build(self) -> Result<Extension, FhirError> {
        self.inner.validate()?;
        Ok(self.inner)
    }

    pub fn build_unchecked(self) -> Extension {
        self.inner
    }
}

impl Visitable for Extension {
    fn type_name(&self) -> &'static str {
        "Extension"
    }

    fn has_children(&self) -> bool {
        self.element.has_children() || self.url.is_some() || self.value.is_some()
    }

    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        if visitor.pre_visit(self) {
            visitor.visit_start(name, index, self);
            if visitor.visit(name, index, self) {
                self.element.accept_children(visitor);
                if let Some(url) = &self.url {
                    visitor.visit_value("url", Value::Uri(url));
                }
                if let Some(value) = &self.value {
                    value.accept(visitor);
                }
            }
            visitor.visit_end(name, index, self);
            visitor.post_visit(self);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_fhir_support::ChoiceElement;

    #[test]
    fn test_extension_requires_url() {
        let err = Extension::builder()
            .value(ExtensionValue::Boolean(types::Boolean::of(true)))
            .build()
            .unwrap_err();
        assert_eq!(err, FhirError::MissingRequiredField("url"));
    }

    #[test]
    fn test_choice_site_reports_field_names() {
        let value = ExtensionValue::String(types::String::of("ok"));
        assert_eq!(ExtensionValue::base_name(), "value");
        assert_eq!(value.field_name(), "valueString");
        assert!(ExtensionValue::possible_field_names().contains(&"valueCodeableConcept"));
    }
}
