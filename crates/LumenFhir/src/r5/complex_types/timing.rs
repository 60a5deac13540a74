use lumen_fhir_support::FhirError;
use lumen_fhir_support::validation;
use lumen_fhir_support::visitor::{accept_all, accept_opt, Visitable, Visitor};

use crate::r5::codes::{DaysOfWeek, UnitsOfTime};
use crate::r5::complex_types::{CodeableConcept, Duration, Extension, Period, Range};
use crate::r5::element::{BackboneElement, Element};
use crate::r5::primitives as types;

choice_type!(
    /// Outer limit of a repeat schedule.
    TimingRepeatBounds, "bounds", {
        Duration(Duration) => "boundsDuration",
        Range(Range) => "boundsRange",
        Period(Period) => "boundsPeriod",
    }
);

/// A schedule of events: explicit timestamps, a repeat rule, or a code.
/// Timing is a backbone type, so it carries modifier extensions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Timing {
    pub(crate) backbone: BackboneElement,
    pub(crate) event: Vec<types::DateTime>,
    pub(crate) repeat: Option<TimingRepeat>,
    pub(crate) code: Option<CodeableConcept>,
}

impl Timing {
    pub fn builder() -> TimingBuilder {
        TimingBuilder::default()
    }

    pub fn id(&self) -> Option<&str> {
        self.backbone.id()
    }

    pub fn extension(&self) -> &[Extension] {
        self.backbone.extension()
    }

    pub fn modifier_extension(&self) -> &[Extension] {
        self.backbone.modifier_extension()
    }

    pub fn event(&self) -> &[types::DateTime] {
        &self.event
    }

    pub fn repeat(&self) -> Option<&TimingRepeat> {
        self.repeat.as_ref()
    }

    pub fn code(&self) -> Option<&CodeableConcept> {
        self.code.as_ref()
    }

    pub fn to_builder(&self) -> TimingBuilder {
        TimingBuilder {
            inner: self.clone(),
        }
    }

    fn validate(&self) -> Result<(), FhirError> {
        validation::require_value_or_children(self)
    }
}

#[derive(Debug, Clone, Default)]
pub struct TimingBuilder {
    inner: Timing,
}

impl TimingBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.inner.backbone.element.id = Some(id.into());
        self
    }

    pub fn extension(mut self, extension: Extension) -> Self {
        self.inner.backbone.element.extension.push(extension);
        self
    }

    pub fn set_extension(mut self, extension: Vec<Extension>) -> Self {
        self.inner.backbone.element.extension = extension;
        self
    }

    pub fn modifier_extension(mut self, modifier_extension: Extension) -> Self {
        self.inner.backbone.modifier_extension.push(modifier_extension);
        self
    }

    pub fn set_modifier_extension(mut self, modifier_extension: Vec<Extension>) -> Self {
        self.inner.backbone.modifier_extension = modifier_extension;
        self
    }

    pub fn event(mut self, event: impl Into<types::DateTime>) -> Self {
        self.inner.event.push(event.into());
        self
    }

    pub fn set_event(mut self, event: Vec<types::DateTime>) -> Self {
        self.inner.event = event;
        self
    }

    pub fn repeat(mut self, repeat: TimingRepeat) -> Self {
        self.inner.repeat = Some(repeat);
        self
    }

    pub fn code(mut self, code: CodeableConcept) -> Self {
        self.inner.code = Some(code);
        self
    }

    pub fn build(self) -> Result<Timing, FhirError> {
        self.inner.validate()?;
        Ok(self.inner)
    }

    pub fn build_unchecked(self) -> Timing {
        self.inner
    }
}

impl Visitable for Timing {
    fn type_name(&self) -> &'static str {
        "Timing"
    }

    fn has_children(&self) -> bool {
        self.backbone.has_children()
            || !self.event.is_empty()
            || self.repeat.is_some()
            || self.code.is_some()
    }

    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        if visitor.pre_visit(self) {
            visitor.visit_start(name, index, self);
            if visitor.visit(name, index, self) {
                self.backbone.accept_children(visitor);
                accept_all(&self.event, "event", visitor);
                accept_opt(&self.repeat, "repeat", visitor);
                accept_opt(&self.code, "code", visitor);
            }
            visitor.visit_end(name, index, self);
            visitor.post_visit(self);
        }
    }
}

/// The repeat rule of a [`Timing`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct TimingRepeat {
    pub(crate) element: Element,
    pub(crate) bounds: Option<TimingRepeatBounds>,
    pub(crate) count: Option<types::PositiveInt>,
    pub(crate) count_max: Option<types::PositiveInt>,
    pub(crate) duration: Option<types::Decimal>,
    pub(crate) duration_max: Option<types::Decimal>,
    pub(crate) duration_unit: Option<UnitsOfTime>,
    pub(crate) frequency: Option<types::PositiveInt>,
    pub(crate) frequency_max: Option<types::PositiveInt>,
    pub(crate) period: Option<types::Decimal>,
    pub(crate) period_max: Option<types::Decimal>,
    pub(crate) period_unit: Option<UnitsOfTime>,
    pub(crate) day_of_week: Vec<DaysOfWeek>,
    pub(crate) time_of_day: Vec<types::Time>,
    pub(crate) when: Vec<types::Code>,
    pub(crate) offset: Option<types::UnsignedInt>,
}

impl TimingRepeat {
    pub fn builder() -> TimingRepeatBuilder {
        TimingRepeatBuilder::default()
    }

    pub fn id(&self) -> Option<&str> {
        self.element.id()
    }

    pub fn extension(&self) -> &[Extension] {
        self.element.extension()
    }

    pub fn bounds(&self) -> Option<&TimingRepeatBounds> {
        self.bounds.as_ref()
    }

    pub fn count(&self) -> Option<&types::PositiveInt> {
        self.count.as_ref()
    }

    pub fn count_max(&self) -> Option<&types::PositiveInt> {
        self.count_max.as_ref()
    }

    pub fn duration(&self) -> Option<&types::Decimal> {
        self.duration.as_ref()
    }

    pub fn duration_max(&self) -> Option<&types::Decimal> {
        self.duration_max.as_ref()
    }

    pub fn duration_unit(&self) -> Option<&UnitsOfTime> {
        self.duration_unit.as_ref()
    }

    pub fn frequency(&self) -> Option<&types::PositiveInt> {
        self.frequency.as_ref()
    }

    pub fn frequency_max(&self) -> Option<&types::PositiveInt> {
        self.frequency_max.as_ref()
    }

    pub fn period(&self) -> Option<&types::Decimal> {
        self.period.as_ref()
    }

    pub fn period_max(&self) -> Option<&types::Decimal> {
        self.period_max.as_ref()
    }

    pub fn period_unit(&self) -> Option<&UnitsOfTime> {
        self.period_unit.as_ref()
    }

    pub fn day_of_week(&self) -> &[DaysOfWeek] {
        &self.day_of_week
    }

    pub fn time_of_day(&self) -> &[types::Time] {
        &self.time_of_day
    }

    /// Event timing codes (e.g. `"MORN"`, `"AC"`).
    pub fn when(&self) -> &[types::Code] {
        &self.when
    }

    pub fn offset(&self) -> Option<&types::UnsignedInt> {
        self.offset.as_ref()
    }

    pub fn to_builder(&self) -> TimingRepeatBuilder {
        TimingRepeatBuilder {
            inner: self.clone(),
        }
    }

    fn validate(&self) -> Result<(), FhirError> {
        validation::require_value_or_children(self)
    }
}

#[derive(Debug, Clone, Default)]
pub struct TimingRepeatBuilder {
    inner: TimingRepeat,
}

impl TimingRepeatBuilder {
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

    pub fn bounds(mut self, bounds: TimingRepeatBounds) -> Self {
        self.inner.bounds = Some(bounds);
        self
    }

    pub fn count(mut self, count: impl Into<types::PositiveInt>) -> Self {
        self.inner.count = Some(count.into());
        self
    }

    pub fn count_max(mut self, count_max: impl Into<types::PositiveInt>) -> Self {
        self.inner.count_max = Some(count_max.into());
        self
    }

    pub fn duration(mut self, duration: impl Into<types::Decimal>) -> Self {
        self.inner.duration = Some(duration.into());
        self
    }

    pub fn duration_max(mut self, duration_max: impl Into<types::Decimal>) -> Self {
        self.inner.duration_max = Some(duration_max.into());
        self
    }

    pub fn duration_unit(mut self, duration_unit: impl Into<UnitsOfTime>) -> Self {
        self.inner.duration_unit = Some(duration_unit.into());
        self
    }

    pub fn frequency(mut self, frequency: impl Into<types::PositiveInt>) -> Self {
        self.inner.frequency = Some(frequency.into());
        self
    }

    pub fn frequency_max(mut self, frequency_max: impl Into<types::PositiveInt>) -> Self {
        self.inner.frequency_max = Some(frequency_max.into());
        self
    }

    pub fn period(mut self, period: impl Into<types::Decimal>) -> Self {
        self.inner.period = Some(period.into());
        self
    }

    pub fn period_max(mut self, period_max: impl Into<types::Decimal>) -> Self {
        self.inner.period_max = Some(period_max.into());
        self
    }

    pub fn period_unit(mut self, period_unit: impl Into<UnitsOfTime>) -> Self {
        self.inner.period_unit = Some(period_unit.into());
        self
    }

    pub fn day_of_week(mut self, day_of_week: impl Into<DaysOfWeek>) -> Self {
        self.inner.day_of_week.push(day_of_week.into());
        self
    }

    pub fn set_day_of_week(mut self, day_of_week: Vec<DaysOfWeek>) -> Self {
        self.inner.day_of_week = day_of_week;
        self
    }

    pub fn time_of_day(mut self, time_of_day: impl Into<types::Time>) -> Self {
        self.inner.time_of_day.push(time_of_day.into());
        self
    }

    pub fn set_time_of_day(mut self, time_of_day: Vec<types::Time>) -> Self {
        self.inner.time_of_day = time_of_day;
        self
    }

    pub fn when(mut self, when: impl Into<types::Code>) -> Self {
        self.inner.when.push(when.into());
        self
    }

    pub fn set_when(mut self, when: Vec<types::Code>) -> Self {
        self.inner.when = when;
        self
    }

    pub fn offset(mut self, offset: impl Into<types::UnsignedInt>) -> Self {
        self.inner.offset = Some(offset.into());
        self
    }

    pub fn build(self) -> Result<TimingRepeat, FhirError> {
        self.inner.validate()?;
        Ok(self.inner)
    }

    pub fn build_unchecked(self) -> TimingRepeat {
        self.inner
    }
}

impl Visitable for TimingRepeat {
    fn type_name(&self) -> &'static str {
        "Timing.repeat"
    }

    fn has_children(&self) -> bool {
        self.element.has_children()
            || self.bounds.is_some()
            || self.count.is_some()
            || self.count_max.is_some()
            || self.duration.is_some()
            || self.duration_max.is_some()
            || self.duration_unit.is_some()
            || self.frequency.is_some()
            || self.frequency_max.is_some()
            || self.period.is_some()
            || self.period_max.is_some()
            || self.period_unit.is_some()
            || !self.day_of_week.is_empty()
            || !self.time_of_day.is_empty()
            || !self.when.is_empty()
            || self.offset.is_some()
    }

    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        if visitor.pre_visit(self) {
            visitor.visit_start(name, index, self);
            if visitor.visit(name, index, self) {
                self.element.accept_children(visitor);
                if let Some(bounds) = &self.bounds {
                    bounds.accept(visitor);
                }
                accept_opt(&self.count, "count", visitor);
                accept_opt(&self.count_max, "countMax", visitor);
                accept_opt(&self.duration, "duration", visitor);
                accept_opt(&self.duration_max, "durationMax", visitor);
                accept_opt(&self.duration_unit, "durationUnit", visitor);
                accept_opt(&self.frequency, "frequency", visitor);
                accept_opt(&self.frequency_max, "frequencyMax", visitor);
                accept_opt(&self.period, "period", visitor);
                accept_opt(&self.period_max, "periodMax", visitor);
                accept_opt(&self.period_unit, "periodUnit", visitor);
                accept_all(&self.day_of_week, "dayOfWeek", visitor);
                accept_all(&self.time_of_day, "timeOfDay", visitor);
                accept_all(&self.when, "when", visitor);
                accept_opt(&self.offset, "offset", visitor);
            }
            visitor.visit_end(name, index, self);
            visitor.post_visit(self);
        }
    }
}
