//! Complex datatypes shared across resources.

mod attachment;
mod coding;
mod contact;
mod data_requirement;
mod expression;
mod extension;
mod identifier;
mod meta;
mod narrative;
mod period;
mod quantity;
mod related_artifact;
mod timing;
mod trigger_definition;
mod usage_context;

pub use attachment::{Attachment, AttachmentBuilder};
pub use coding::{
    CodeableConcept, CodeableConceptBuilder, CodeableReference, CodeableReferenceBuilder, Coding,
    CodingBuilder,
};
pub use contact::{ContactDetail, ContactDetailBuilder, ContactPoint, ContactPointBuilder};
pub use data_requirement::{
    DataRequirement, DataRequirementBuilder, DataRequirementCodeFilter,
    DataRequirementCodeFilterBuilder, DataRequirementDateFilter, DataRequirementDateFilterBuilder,
    DataRequirementDateFilterValue, DataRequirementSort, DataRequirementSortBuilder,
    DataRequirementSubject, DataRequirementValueFilter, DataRequirementValueFilterBuilder,
    DataRequirementValueFilterValue,
};
pub use expression::{Expression, ExpressionBuilder};
pub use extension::{Extension, ExtensionBuilder, ExtensionValue};
pub use identifier::{Identifier, IdentifierBuilder, Reference, ReferenceBuilder};
pub use meta::{Meta, MetaBuilder};
pub use narrative::{Narrative, NarrativeBuilder};
pub use period::{Period, PeriodBuilder};
pub use quantity::{
    Age, Duration, Money, MoneyBuilder, Quantity, QuantityBuilder, Range, RangeBuilder, Ratio,
    RatioBuilder, SimpleQuantity,
};
pub use related_artifact::{RelatedArtifact, RelatedArtifactBuilder};
pub use timing::{Timing, TimingBuilder, TimingRepeat, TimingRepeatBounds, TimingRepeatBuilder};
pub use trigger_definition::{
    TriggerDefinition, TriggerDefinitionBuilder, TriggerDefinitionTiming,
};
pub use usage_context::{UsageContext, UsageContextBuilder, UsageContextValue};
