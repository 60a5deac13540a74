use lumen_fhir_support::FhirError;
use lumen_fhir_support::validation;
use lumen_fhir_support::visitor::{accept_all, accept_opt, Visitable, Visitor};

use crate::r5::codes::SortDirection;
use crate::r5::complex_types::{
    CodeableConcept, Coding, Duration, Extension, Period, Reference,
};
use crate::r5::element::Element;
use crate::r5::primitives as types;

choice_type!(
    DataRequirementSubject, "subject", {
        CodeableConcept(CodeableConcept) => "subjectCodeableConcept",
        Reference(Reference) => "subjectReference",
    }
);

choice_type!(
    DataRequirementDateFilterValue, "value", {
        DateTime(types::DateTime) => "valueDateTime",
        Period(Period) => "valuePeriod",
        Duration(Duration) => "valueDuration",
    }
);

choice_type!(
    DataRequirementValueFilterValue, "value", {
        DateTime(types::DateTime) => "valueDateTime",
        Period(Period) => "valuePeriod",
        Duration(Duration) => "valueDuration",
    }
);

/// A machine-processable description of required data, as used by trigger
/// and action inputs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct DataRequirement {
    pub(crate) element: Element,
    pub(crate) r#type: Option<types::Code>,
    pub(crate) profile: Vec<types::Canonical>,
    pub(crate) subject: Option<DataRequirementSubject>,
    pub(crate) must_support: Vec<types::String>,
    pub(crate) code_filter: Vec<DataRequirementCodeFilter>,
    pub(crate) date_filter: Vec<DataRequirementDateFilter>,
    pub(crate) value_filter: Vec<DataRequirementValueFilter>,
    pub(crate) limit: Option<types::PositiveInt>,
    pub(crate) sort: Vec<DataRequirementSort>,
}

impl DataRequirement {
    pub fn builder() -> DataRequirementBuilder {
        DataRequirementBuilder::default()
    }

    pub fn id(&self) -> Option<&str> {
        self.element.id()
    }

    pub fn extension(&self) -> &[Extension] {
        self.element.extension()
    }

    /// The resource or datatype name the requirement selects. Required.
    pub fn r#type(&self) -> Option<&types::Code> {
        self.r#type.as_ref()
    }

    pub fn profile(&self) -> &[types::Canonical] {
        &self.profile
    }

    pub fn subject(&self) -> Option<&DataRequirementSubject> {
        self.subject.as_ref()
    }

    pub fn must_support(&self) -> &[types::String] {
        &self.must_support
    }

    pub fn code_filter(&self) -> &[DataRequirementCodeFilter] {
        &self.code_filter
    }

    pub fn date_filter(&self) -> &[DataRequirementDateFilter] {
        &self.date_filter
    }

    pub fn value_filter(&self) -> &[DataRequirementValueFilter] {
        &self.value_filter
    }

    pub fn limit(&self) -> Option<&types::PositiveInt> {
        self.limit.as_ref()
    }

    pub fn sort(&self) -> &[DataRequirementSort] {
        &self.sort
    }

    pub fn to_builder(&self) -> DataRequirementBuilder {
        DataRequirementBuilder {
            inner: self.clone(),
        }
    }

    fn validate(&self) -> Result<(), FhirError> {
        validation::require_non_null(&self.r#type, "type")?;
        if let Some(DataRequirementSubject::Reference(reference)) = &self.subject {
            validation::check_reference_type(Some(reference), "subject", &["Group"])?;
        }
        validation::require_value_or_children(self)
    }
}

#[derive(Debug, Clone, Default)]
pub struct DataRequirementBuilder {
    inner: DataRequirement,
}

impl DataRequirementBuilder {
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

    pub fn r#type(mut self, r#type: impl Into<types::Code>) -> Self {
        self.inner.r#type = Some(r#type.into());
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

    pub fn subject(mut self, subject: DataRequirementSubject) -> Self {
        self.inner.subject = Some(subject);
        self
    }

    pub fn must_support(mut self, must_support: impl Into<types::String>) -> Self {
        self.inner.must_support.push(must_support.into());
        self
    }

    pub fn set_must_support(mut self, must_support: Vec<types::String>) -> Self {
        self.inner.must_support = must_support;
        self
    }

    pub fn code_filter(mut self, code_filter: DataRequirementCodeFilter) -> Self {
        self.inner.code_filter.push(code_filter);
        self
    }

    pub fn set_code_filter(mut self, code_filter: Vec<DataRequirementCodeFilter>) -> Self {
        self.inner.code_filter = code_filter;
        self
    }

    pub fn date_filter(mut self, date_filter: DataRequirementDateFilter) -> Self {
        self.inner.date_filter.push(date_filter);
        self
    }

    pub fn set_date_filter(mut self, date_filter: Vec<DataRequirementDateFilter>) -> Self {
        self.inner.date_filter = date_filter;
        self
    }

    pub fn value_filter(mut self, value_filter: DataRequirementValueFilter) -> Self {
        self.inner.value_filter.push(value_filter);
        self
    }

    pub fn set_value_filter(mut self, value_filter: Vec<DataRequirementValueFilter>) -> Self {
        self.inner.value_filter = value_filter;
        self
    }

    pub fn limit(mut self, limit: impl Into<types::PositiveInt>) -> Self {
        self.inner.limit = Some(limit.into());
        self
    }

    pub fn sort(mut self, sort: DataRequirementSort) -> Self {
        self.inner.sort.push(sort);
        self
    }

    pub fn set_sort(mut self, sort: Vec<DataRequirementSort>) -> Self {
        self.inner.sort = sort;
        self
    }

    pub fn build(self) -> Result<DataRequirement, FhirError> {
        self.inner.validate()?;
        Ok(self.inner)
    }

    pub fn build_unchecked(self) -> DataRequirement {
        self.inner
    }
}

impl Visitable for DataRequirement {
    fn type_name(&self) -> &'static str {
        "DataRequirement"
    }

    fn has_children(&self) -> bool {
        self.element.has_children()
            || self.r#type.is_some()
            || !self.profile.is_empty()
            || self.subject.is_some()
            || !self.must_support.is_empty()
            || !self.code_filter.is_empty()
            || !self.date_filter.is_empty()
            || !self.value_filter.is_empty()
            || self.limit.is_some()
            || !self.sort.is_empty()
    }

    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        if visitor.pre_visit(self) {
            visitor.visit_start(name, index, self);
            if visitor.visit(name, index, self) {
                self.element.accept_children(visitor);
                accept_opt(&self.r#type, "type", visitor);
                accept_all(&self.profile, "profile", visitor);
                if let Some(subject) = &self.subject {
                    subject.accept(visitor);
                }
                accept_all(&self.must_support, "mustSupport", visitor);
                accept_all(&self.code_filter, "codeFilter", visitor);
                accept_all(&self.date_filter, "dateFilter", visitor);
                accept_all(&self.value_filter, "valueFilter", visitor);
                accept_opt(&self.limit, "limit", visitor);
                accept_all(&self.sort, "sort", visitor);
            }
            visitor.visit_end(name, index, self);
            visitor.post_visit(self);
        }
    }
}

/// A code-valued filter over the selected data.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct DataRequirementCodeFilter {
    pub(crate) element: Element,
    pub(crate) path: Option<types::String>,
    pub(crate) search_param: Option<types::String>,
    pub(crate) value_set: Option<types::Canonical>,
    pub(crate) code: Vec<Coding>,
}

impl DataRequirementCodeFilter {
    pub fn builder() -> DataRequirementCodeFilterBuilder {
        DataRequirementCodeFilterBuilder::default()
    }

    pub fn id(&self) -> Option<&str> {
        self.element.id()
    }

    pub fn extension(&self) -> &[Extension] {
        self.element.extension()
    }

    pub fn path(&self) -> Option<&types::String> {
        self.path.as_ref()
    }

    pub fn search_param(&self) -> Option<&types::String> {
        self.search_param.as_ref()
    }

    pub fn value_set(&self) -> Option<&types::Canonical> {
        self.value_set.as_ref()
    }

    pub fn code(&self) -> &[Coding] {
        &self.code
    }

    pub fn to_builder(&self) -> DataRequirementCodeFilterBuilder {
        DataRequirementCodeFilterBuilder {
            inner: self.clone(),
        }
    }

    fn validate(&self) -> Result<(), FhirError> {
        validation::require_value_or_children(self)
    }
}

#[derive(Debug, Clone, Default)]
pub struct DataRequirementCodeFilterBuilder {
    inner: DataRequirementCodeFilter,
}

impl DataRequirementCodeFilterBuilder {
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

    pub fn path(mut self, path: impl Into<types::String>) -> Self {
        self.inner.path = Some(path.into());
        self
    }

    pub fn search_param(mut self, search_param: impl Into<types::String>) -> Self {
        self.inner.search_param = Some(search_param.into());
        self
    }

    pub fn value_set(mut self, value_set: impl Into<types::Canonical>) -> Self {
        self.inner.value_set = Some(value_set.into());
        self
    }

    pub fn code(mut self, code: Coding) -> Self {
        self.inner.code.push(code);
        self
    }

    pub fn set_code(mut self, code: Vec<Coding>) -> Self {
        self.inner.code = code;
        self
    }

    pub fn build(self) -> Result<DataRequirementCodeFilter, FhirError> {
        self.inner.validate()?;
        Ok(self.inner)
    }

    pub fn build_unchecked(self) -> DataRequirementCodeFilter {
        self.inner
    }
}

impl Visitable for DataRequirementCodeFilter {
    fn type_name(&self) -> &'static str {
        "DataRequirement.codeFilter"
    }

    fn has_children(&self) -> bool {
        self.element.has_children()
            || self.path.is_some()
            || self.search_param.is_some()
            || self.value_set.is_some()
            || !self.code.is_empty()
    }

    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        if visitor.pre_visit(self) {
            visitor.visit_start(name, index, self);
            if visitor.visit(name, index, self) {
                self.element.accept_children(visitor);
                accept_opt(&self.path, "path", visitor);
                accept_opt(&self.search_param, "searchParam", visitor);
                accept_opt(&self.value_set, "valueSet", visitor);
                accept_all(&self.code, "code", visitor);
            }
            visitor.visit_end(name, index, self);
            visitor.post_visit(self);
        }
    }
}

/// A date-valued filter over the selected data.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct DataRequirementDateFilter {
    pub(crate) element: Element,
    pub(crate) path: Option<types::String>,
    pub(crate) search_param: Option<types::String>,
    pub(crate) value: Option<DataRequirementDateFilterValue>,
}

impl DataRequirementDateFilter {
    pub fn builder() -> DataRequirementDateFilterBuilder {
        DataRequirementDateFilterBuilder::default()
    }

    pub fn id(&self) -> Option<&str> {
        self.element.id()
    }

    pub fn extension(&self) -> &[Extension] {
        self.element.extension()
    }

    pub fn path(&self) -> Option<&types::String> {
        self.path.as_ref()
    }

    pub fn search_param(&self) -> Option<&types::String> {
        self.search_param.as_ref()
    }

    pub fn value(&self) -> Option<&DataRequirementDateFilterValue> {
        self.value.as_ref()
    }

    pub fn to_builder(&self) -> DataRequirementDateFilterBuilder {
        DataRequirementDateFilterBuilder {
            inner: self.clone(),
        }
    }

    fn validate(&self) -> Result<(), FhirError> {
        validation::require_value_or_children(self)
    }
}

#[derive(Debug, Clone, Default)]
pub struct DataRequirementDateFilterBuilder {
    inner: DataRequirementDateFilter,
}

impl DataRequirementDateFilterBuilder {
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

    pub fn path(mut self, path: impl Into<types::String>) -> Self {
        self.inner.path = Some(path.into());
        self
    }

    pub fn search_param(mut self, search_param: impl Into<types::String>) -> Self {
        self.inner.search_param = Some(search_param.into());
        self
    }

    pub fn value(mut self, value: DataRequirementDateFilterValue) -> Self {
        self.inner.value = Some(value);
        self
    }

    pub fn build(self) -> Result<DataRequirementDateFilter, FhirError> {
        self.inner.validate()?;
        Ok(self.inner)
    }

    pub fn build_unchecked(self) -> DataRequirementDateFilter {
        self.inner
    }
}

impl Visitable for DataRequirementDateFilter {
    fn type_name(&self) -> &'static str {
        "DataRequirement.dateFilter"
    }

    fn has_children(&self) -> bool {
        self.element.has_children()
            || self.path.is_some()
            || self.search_param.is_some()
            || self.value.is_some()
    }

    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        if visitor.pre_visit(self) {
            visitor.visit_start(name, index, self);
            if visitor.visit(name, index, self) {
                self.element.accept_children(visitor);
                accept_opt(&self.path, "path", visitor);
                accept_opt(&self.search_param, "searchParam", visitor);
                if let Some(value) = &self.value {
                    value.accept(visitor);
                }
            }
            visitor.visit_end(name, index, self);
            visitor.post_visit(self);
        }
    }
}

/// A comparator-based filter over the selected data.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct DataRequirementValueFilter {
    pub(crate) element: Element,
    pub(crate) path: Option<types::String>,
    pub(crate) search_param: Option<types::String>,
    pub(crate) comparator: Option<types::Code>,
    pub(crate) value: Option<DataRequirementValueFilterValue>,
}

impl DataRequirementValueFilter {
    pub fn builder() -> DataRequirementValueFilterBuilder {
        DataRequirementValueFilterBuilder::default()
    }

    pub fn id(&self) -> Option<&str> {
        self.element.id()
    }

    pub fn extension(&self) -> &[Extension] {
        self.element.extension()
    }

    pub fn path(&self) -> Option<&types::String> {
        self.path.as_ref()
    }

    pub fn search_param(&self) -> Option<&types::String> {
        self.search_param.as_ref()
    }

    pub fn comparator(&self) -> Option<&types::Code> {
        self.comparator.as_ref()
    }

    pub fn value(&self) -> Option<&DataRequirementValueFilterValue> {
        self.value.as_ref()
    }

    pub fn to_builder(&self) -> DataRequirementValueFilterBuilder {
        DataRequirementValueFilterBuilder {
            inner: self.clone(),
        }
    }

    fn validate(&self) -> Result<(), FhirError> {
        validation::require_value_or_children(self)
    }
}

#[derive(Debug, Clone, Default)]
pub struct DataRequirementValueFilterBuilder {
    inner: DataRequirementValueFilter,
}

impl DataRequirementValueFilterBuilder {
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

    pub fn path(mut self, path: impl Into<types::String>) -> Self {
        self.inner.path = Some(path.into());
        self
    }

    pub fn search_param(mut self, search_param: impl Into<types::String>) -> Self {
        self.inner.search_param = Some(search_param.into());
        self
    }

    pub fn comparator(mut self, comparator: impl Into<types::Code>) -> Self {
        self.inner.comparator = Some(comparator.into());
        self
    }

    pub fn value(mut self, value: DataRequirementValueFilterValue) -> Self {
        self.inner.value = Some(value);
        self
    }

    pub fn build(self) -> Result<DataRequirementValueFilter, FhirError> {
        self.inner.validate()?;
        Ok(self.inner)
    }

    pub fn build_unchecked(self) -> DataRequirementValueFilter {
        self.inner
    }
}

impl Visitable for DataRequirementValueFilter {
    fn type_name(&self) -> &'static str {
        "DataRequirement.valueFilter"
    }

    fn has_children(&self) -> bool {
        self.element.has_children()
            || self.path.is_some()
            || self.search_param.is_some()
            || self.comparator.is_some()
            || self.value.is_some()
    }

    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        if visitor.pre_visit(self) {
            visitor.visit_start(name, index, self);
            if visitor.visit(name, index, self) {
                self.element.accept_children(visitor);
                accept_opt(&self.path, "path", visitor);
                accept_opt(&self.search_param, "searchParam", visitor);
                accept_opt(&self.comparator, "comparator", visitor);
                if let Some(value) = &self.value {
                    value.accept(visitor);
                }
            }
            visitor.visit_end(name, index, self);
            visitor.post_visit(self);
        }
    }
}

/// A sort rule; both fields are required.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct DataRequirementSort {
    pub(crate) element: Element,
    pub(crate) path: Option<types::String>,
    pub(crate) direction: Option<SortDirection>,
}

impl DataRequirementSort {
    pub fn builder() -> DataRequirementSortBuilder {
        DataRequirementSortBuilder::default()
    }

    pub fn id(&self) -> Option<&str> {
        self.element.id()
    }

    pub fn extension(&self) -> &[Extension] {
        self.element.extension()
    }

    pub fn path(&self) -> Option<&types::String> {
        self.path.as_ref()
    }

    pub fn direction(&self) -> Option<&SortDirection> {
        self.direction.as_ref()
    }

    pub fn to_builder(&self) -> DataRequirementSortBuilder {
        DataRequirementSortBuilder {
            inner: self.clone(),
        }
    }

    fn validate(&self) -> Result<(), FhirError> {
        validation::require_non_null(&self.path, "path")?;
        validation::require_non_null(&self.direction, "direction")
    }
}

#[derive(Debug, Clone, Default)]
pub struct DataRequirementSortBuilder {
    inner: DataRequirementSort,
}

impl DataRequirementSortBuilder {
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

    pub fn path(mut self, path: impl Into<types::String>) -> Self {
        self.inner.path = Some(path.into());
        self
    }

    pub fn direction(mut self, direction: impl Into<SortDirection>) -> Self {
        self.inner.direction = Some(direction.into());
        self
    }

    pub fn build(self) -> Result<DataRequirementSort, FhirError> {
        self.inner.validate()?;
        Ok(self.inner)
    }

    pub fn build_unchecked(self) -> DataRequirementSort {
        self.inner
    }
}

impl Visitable for DataRequirementSort {
    fn type_name(&self) -> &'static str {
        "DataRequirement.sort"
    }

    fn has_children(&self) -> bool {
        self.element.has_children() || self.path.is_some() || self.direction.is_some()
    }

    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        if visitor.pre_visit(self) {
            visitor.visit_start(name, index, self);
            if visitor.visit(name, index, self) {
                self.element.accept_children(visitor);
                accept_opt(&self.path, "path", visitor);
                accept_opt(&self.direction, "direction", visitor);
            }
            visitor.visit_end(name, index, self);
            visitor.post_visit(self);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r5::codes::SortDirectionValue;

    #[test]
    fn test_data_requirement_requires_type() {
        let err = DataRequirement::builder()
            .profile("http://hl7.org/fhir/StructureDefinition/Observation")
            .build()
            .unwrap_err();
        assert_eq!(err, FhirError::MissingRequiredField("type"));
    }

    #[test]
    fn test_subject_reference_must_be_a_group() {
        let err = DataRequirement::builder()
            .r#type("Observation")
            .subject(DataRequirementSubject::Reference(Reference::to(
                "Patient", "p1",
            )))
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            FhirError::DisallowedReferenceTarget {
                field: "subject",
                target: "Patient".to_string(),
            }
        );
    }

    #[test]
    fn test_sort_requires_path_and_direction() {
        let err = DataRequirementSort::builder()
            .direction(SortDirectionValue::Ascending)
            .build()
            .unwrap_err();
        assert_eq!(err, FhirError::MissingRequiredField("path"));

        let err = DataRequirementSort::builder().path("effective").build().unwrap_err();
        assert_eq!(err, FhirError::MissingRequiredField("direction"));
    }
}
