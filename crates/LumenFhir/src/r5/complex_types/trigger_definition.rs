use lumen_fhir_support::FhirError;
use lumen_fhir_support::validation;
use lumen_fhir_support::visitor::{accept_all, accept_opt, Visitable, Visitor};

use crate::r5::codes::TriggerType;
use crate::r5::complex_types::{
    CodeableConcept, DataRequirement, Expression, Extension, Reference, Timing,
};
use crate::r5::element::Element;
use crate::r5::primitives as types;

choice_type!(
    /// When a periodic trigger fires.
    TriggerDefinitionTiming, "timing", {
        Timing(Timing) => "timingTiming",
        Reference(Reference) => "timingReference",
        Date(types::Date) => "timingDate",
        DateTime(types::DateTime) => "timingDateTime",
    }
);

/// A declared event, data condition or schedule that triggers an action.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct TriggerDefinition {
    pub(crate) element: Element,
    pub(crate) r#type: Option<TriggerType>,
    pub(crate) name: Option<types::String>,
    pub(crate) code: Option<CodeableConcept>,
    pub(crate) subscription_topic: Option<types::Canonical>,
    pub(crate) timing: Option<TriggerDefinitionTiming>,
    pub(crate) data: Vec<DataRequirement>,
    pub(crate) condition: Option<Expression>,
}

impl TriggerDefinition {
    pub fn builder() -> TriggerDefinitionBuilder {
        TriggerDefinitionBuilder::default()
    }

    pub fn id(&self) -> Option<&str> {
        self.element.id()
    }

    pub fn extension(&self) -> &[Extension] {
        self.element.extension()
    }

    pub fn r#type(&self) -> Option<&TriggerType> {
        self.r#type.as_ref()
    }

    pub fn name(&self) -> Option<&types::String> {
        self.name.as_ref()
    }

    pub fn code(&self) -> Option<&CodeableConcept> {
        self.code.as_ref()
    }

    pub fn subscription_topic(&self) -> Option<&types::Canonical> {
        self.subscription_topic.as_ref()
    }

    pub fn timing(&self) -> Option<&TriggerDefinitionTiming> {
        self.timing.as_ref()
    }

    pub fn data(&self) -> &[DataRequirement] {
        &self.data
    }

    pub fn condition(&self) -> Option<&Expression> {
        self.condition.as_ref()
    }

    pub fn to_builder(&self) -> TriggerDefinitionBuilder {
        TriggerDefinitionBuilder {
            inner: self.clone(),
        }
    }

    fn validate(&self) -> Result<(), FhirError> {
        validation::require_non_null(&self.r#type, "type")?;
        if let Some(TriggerDefinitionTiming::Reference(reference)) = &self.timing {
            validation::check_reference_type(Some(reference), "timing", &["Schedule"])?;
        }
        validation::require_value_or_children(self)
    }
}

#[derive(Debug, Clone, Default)]
pub struct TriggerDefinitionBuilder {
    inner: TriggerDefinition,
}

impl TriggerDefinitionBuilder {
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

    pub fn r#type(mut self, r#type: impl Into<TriggerType>) -> Self {
        self.inner.r#type = Some(r#type.into());
        self
    }

    pub fn name(mut self, name: impl Into<types::String>) -> Self {
        self.inner.name = Some(name.into());
        self
    }

    pub fn code(mut self, code: CodeableConcept) -> Self {
        self.inner.code = Some(code);
        self
    }

    pub fn subscription_topic(mut self, subscription_topic: impl Into<types::Canonical>) -> Self {
        self.inner.subscription_topic = Some(subscription_topic.into());
        self
    }

    pub fn timing(mut self, timing: TriggerDefinitionTiming) -> Self {
        self.inner.timing = Some(timing);
        self
    }

    pub fn data(mut self, data: DataRequirement) -> Self {
        self.inner.data.push(data);
        self
    }

    pub fn set_data(mut self, data: Vec<DataRequirement>) -> Self {
        self.inner.data = data;
        self
    }

    pub fn condition(mut self, condition: Expression) -> Self {
        self.inner.condition = Some(condition);
        self
    }

    pub fn build(self) -> Result<TriggerDefinition, FhirError> {
        self.inner.validate()?;
        Ok(self.inner)
    }

    pub fn build_unchecked(self) -> TriggerDefinition {
        self.inner
    }
}

impl Visitable for TriggerDefinition {
    fn type_name(&self) -> &'static str {
        "TriggerDefinition"
    }

    fn has_children(&self) -> bool {
        self.element.has_children()
            || self.r#type.is_some()
            || self.name.is_some()
            || self.code.is_some()
            || self.subscription_topic.is_some()
            || self.timing.is_some()
            || !self.data.is_empty()
            || self.condition.is_some()
    }

    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        if visitor.pre_visit(self) {
            visitor.visit_start(name, index, self);
            if visitor.visit(name, index, self) {
                self.element.accept_children(visitor);
                accept_opt(&self.r#type, "type", visitor);
                accept_opt(&self.name, "name", visitor);
                accept_opt(&self.code, "code", visitor);
                accept_opt(&self.subscription_topic, "subscriptionTopic", visitor);
                if let Some(timing) = &self.timing {
                    timing.accept(visitor);
                }
                accept_all(&self.data, "data", visitor);
                accept_opt(&self.condition, "condition", visitor);
            }
            visitor.visit_end(name, index, self);
            visitor.post_visit(self);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r5::codes::TriggerTypeValue;

    #[test]
    fn test_trigger_requires_type() {
        let err = TriggerDefinition::builder()
            .name("nightly-close")
            .build()
            .unwrap_err();
        assert_eq!(err, FhirError::MissingRequiredField("type"));
    }

    #[test]
    fn test_timing_reference_must_point_at_a_schedule() {
        let err = TriggerDefinition::builder()
            .r#type(TriggerTypeValue::Periodic)
            .timing(TriggerDefinitionTiming::Reference(Reference::to(
                "Patient", "p1",
            )))
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            FhirError::DisallowedReferenceTarget {
                field: "timing",
                target: "Patient".to_string(),
            }
        );

        let ok = TriggerDefinition::builder()
            .r#type(TriggerTypeValue::Periodic)
            .timing(TriggerDefinitionTiming::Reference(Reference::to(
                "Schedule", "s1",
            )))
            .build();
        assert!(ok.is_ok());
    }
}
