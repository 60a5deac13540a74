use lumen_fhir_support::constraint::{
    Binding, BindingStrength, ConstraintSeverity, Invariant,
};
use lumen_fhir_support::FhirError;
use lumen_fhir_support::validation;
use lumen_fhir_support::visitor::{accept_all, accept_opt, Visitable, Visitor};

use crate::r5::codes::{
    ActionCardinalityBehavior, ActionConditionKind, ActionGroupingBehavior, ActionParticipantType,
    ActionPrecheckBehavior, ActionRelationshipType, ActionRequiredBehavior, ActionSelectionBehavior,
    PublicationStatus, RequestPriority,
};
use crate::r5::complex_types::{
    Age, CodeableConcept, CodeableReference, Coding, ContactDetail, DataRequirement, Duration,
    Expression, Extension, Identifier, Meta, Narrative, Period, Quantity, Range, Ratio, Reference,
    RelatedArtifact, Timing, TriggerDefinition, UsageContext,
};
use crate::r5::element::{BackboneElement, DomainResource};
use crate::r5::primitives as types;
use crate::r5::resources::Resource;

const SUBJECT_REFERENCE_TYPES: &[&str] = &[
    "Group",
    "MedicinalProductDefinition",
    "SubstanceDefinition",
    "AdministrableProductDefinition",
    "ManufacturedItemDefinition",
    "PackagedProductDefinition",
];

const PARTICIPANT_REFERENCE_TYPES: &[&str] = &[
    "CareTeam",
    "Device",
    "DeviceDefinition",
    "Endpoint",
    "Group",
    "HealthcareService",
    "Location",
    "Organization",
    "Patient",
    "Practitioner",
    "PractitionerRole",
    "RelatedPerson",
];

choice_type!(
    /// How the business version is compared to prior versions.
    PlanDefinitionVersionAlgorithm, "versionAlgorithm", {
        String(types::String) => "versionAlgorithmString",
        Coding(Coding) => "versionAlgorithmCoding",
    }
);

choice_type!(
    /// The intended subjects of the plan definition.
    PlanDefinitionSubject, "subject", {
        CodeableConcept(CodeableConcept) => "subjectCodeableConcept",
        Reference(Reference) => "subjectReference",
        Canonical(types::Canonical) => "subjectCanonical",
    }
);

choice_type!(
    /// Preconditions for service when the plan is an order set.
    PlanDefinitionAsNeeded, "asNeeded", {
        Boolean(types::Boolean) => "asNeededBoolean",
        CodeableConcept(CodeableConcept) => "asNeededCodeableConcept",
    }
);

choice_type!(
    /// The target value of a goal to be achieved.
    PlanDefinitionGoalTargetDetail, "detail", {
        Quantity(Quantity) => "detailQuantity",
        Range(Range) => "detailRange",
        CodeableConcept(CodeableConcept) => "detailCodeableConcept",
        String(types::String) => "detailString",
        Boolean(types::Boolean) => "detailBoolean",
        Integer(types::Integer) => "detailInteger",
        Ratio(Ratio) => "detailRatio",
    }
);

choice_type!(
    /// The subject of a single action, when it differs from the plan's.
    PlanDefinitionActionSubject, "subject", {
        CodeableConcept(CodeableConcept) => "subjectCodeableConcept",
        Reference(Reference) => "subjectReference",
        Canonical(types::Canonical) => "subjectCanonical",
    }
);

choice_type!(
    /// The temporal offset of a related action.
    PlanDefinitionActionRelatedActionOffset, "offset", {
        Duration(Duration) => "offsetDuration",
        Range(Range) => "offsetRange",
    }
);

choice_type!(
    /// When the action should take place.
    PlanDefinitionActionTiming, "timing", {
        Age(Age) => "timingAge",
        Duration(Duration) => "timingDuration",
        Range(Range) => "timingRange",
        Timing(Timing) => "timingTiming",
    }
);

choice_type!(
    /// The definition the action is based on.
    PlanDefinitionActionDefinition, "definition", {
        Canonical(types::Canonical) => "definitionCanonical",
        Uri(types::Uri) => "definitionUri",
    }
);

/// A pre-defined group of actions, such as a protocol, order set or
/// clinical guideline, expressed independently of any patient.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct PlanDefinition {
    pub(crate) resource: DomainResource,
    pub(crate) url: Option<types::Uri>,
    pub(crate) identifier: Vec<Identifier>,
    pub(crate) version: Option<types::String>,
    pub(crate) version_algorithm: Option<PlanDefinitionVersionAlgorithm>,
    pub(crate) name: Option<types::String>,
    pub(crate) title: Option<types::String>,
    pub(crate) subtitle: Option<types::String>,
    pub(crate) r#type: Option<CodeableConcept>,
    pub(crate) status: Option<PublicationStatus>,
    pub(crate) experimental: Option<types::Boolean>,
    pub(crate) subject: Option<PlanDefinitionSubject>,
    pub(crate) date: Option<types::DateTime>,
    pub(crate) publisher: Option<types::String>,
    pub(crate) contact: Vec<ContactDetail>,
    pub(crate) description: Option<types::Markdown>,
    pub(crate) use_context: Vec<UsageContext>,
    pub(crate) jurisdiction: Vec<CodeableConcept>,
    pub(crate) purpose: Option<types::Markdown>,
    pub(crate) usage: Option<types::Markdown>,
    pub(crate) copyright: Option<types::Markdown>,
    pub(crate) copyright_label: Option<types::String>,
    pub(crate) approval_date: Option<types::Date>,
    pub(crate) last_review_date: Option<types::Date>,
    pub(crate) effective_period: Option<Period>,
    pub(crate) topic: Vec<CodeableConcept>,
    pub(crate) author: Vec<ContactDetail>,
    pub(crate) editor: Vec<ContactDetail>,
    pub(crate) reviewer: Vec<ContactDetail>,
    pub(crate) endorser: Vec<ContactDetail>,
    pub(crate) related_artifact: Vec<RelatedArtifact>,
    pub(crate) library: Vec<types::Canonical>,
    pub(crate) goal: Vec<PlanDefinitionGoal>,
    pub(crate) actor: Vec<PlanDefinitionActor>,
    pub(crate) action: Vec<PlanDefinitionAction>,
    pub(crate) as_needed: Option<PlanDefinitionAsNeeded>,
}

impl PlanDefinition {
    /// Declared FHIRPath invariants, carried for external evaluation.
    pub const CONSTRAINTS: &'static [Invariant] = &[
        Invariant {
            key: "pdf-0",
            severity: ConstraintSeverity::Warning,
            human: "Name should be usable as an identifier for the module by machine processing applications such as code generation",
            expression: "name.exists() implies name.matches('^[A-Z]([A-Za-z0-9_]){1,254}$')",
            path: "PlanDefinition",
            source: "http://hl7.org/fhir/StructureDefinition/PlanDefinition",
        },
        Invariant {
            key: "pld-3",
            severity: ConstraintSeverity::Warning,
            human: "goalid should reference the id of a goal definition",
            expression: "%context.repeat(action).where((goalId in %context.goal.id).not()).exists().not()",
            path: "PlanDefinition",
            source: "http://hl7.org/fhir/StructureDefinition/PlanDefinition",
        },
        Invariant {
            key: "pld-4",
            severity: ConstraintSeverity::Warning,
            human: "targetId should reference the id of an action",
            expression: "%context.repeat(action).relatedAction.where((targetId in %context.repeat(action).id).not()).exists().not()",
            path: "PlanDefinition",
            source: "http://hl7.org/fhir/StructureDefinition/PlanDefinition",
        },
    ];

    /// Terminology bindings, carried for external resolution.
    pub const BINDINGS: &'static [Binding] = &[
        Binding {
            name: "PublicationStatus",
            path: "PlanDefinition.status",
            strength: BindingStrength::Required,
            value_set: "http://hl7.org/fhir/ValueSet/publication-status|5.0.0",
        },
        Binding {
            name: "SubjectType",
            path: "PlanDefinition.subject[x]",
            strength: BindingStrength::Extensible,
            value_set: "http://hl7.org/fhir/ValueSet/participant-resource-types",
        },
        Binding {
            name: "GoalCategory",
            path: "PlanDefinition.goal.category",
            strength: BindingStrength::Example,
            value_set: "http://hl7.org/fhir/ValueSet/goal-category",
        },
        Binding {
            name: "GoalPriority",
            path: "PlanDefinition.goal.priority",
            strength: BindingStrength::Preferred,
            value_set: "http://hl7.org/fhir/ValueSet/goal-priority",
        },
        Binding {
            name: "GoalStartEvent",
            path: "PlanDefinition.goal.start",
            strength: BindingStrength::Example,
            value_set: "http://hl7.org/fhir/ValueSet/goal-start-event",
        },
        Binding {
            name: "ActionParticipantType",
            path: "PlanDefinition.actor.option.type",
            strength: BindingStrength::Required,
            value_set: "http://hl7.org/fhir/ValueSet/action-participant-type|5.0.0",
        },
        Binding {
            name: "RequestPriority",
            path: "PlanDefinition.action.priority",
            strength: BindingStrength::Required,
            value_set: "http://hl7.org/fhir/ValueSet/request-priority|5.0.0",
        },
        Binding {
            name: "ActionConditionKind",
            path: "PlanDefinition.action.condition.kind",
            strength: BindingStrength::Required,
            value_set: "http://hl7.org/fhir/ValueSet/action-condition-kind|5.0.0",
        },
        Binding {
            name: "ActionRelationshipType",
            path: "PlanDefinition.action.relatedAction.relationship",
            strength: BindingStrength::Required,
            value_set: "http://hl7.org/fhir/ValueSet/action-relationship-type|5.0.0",
        },
        Binding {
            name: "ActionParticipantType",
            path: "PlanDefinition.action.participant.type",
            strength: BindingStrength::Required,
            value_set: "http://hl7.org/fhir/ValueSet/action-participant-type|5.0.0",
        },
        Binding {
            name: "ActionGroupingBehavior",
            path: "PlanDefinition.action.groupingBehavior",
            strength: BindingStrength::Required,
            value_set: "http://hl7.org/fhir/ValueSet/action-grouping-behavior|5.0.0",
        },
        Binding {
            name: "ActionSelectionBehavior",
            path: "PlanDefinition.action.selectionBehavior",
            strength: BindingStrength::Required,
            value_set: "http://hl7.org/fhir/ValueSet/action-selection-behavior|5.0.0",
        },
        Binding {
            name: "ActionRequiredBehavior",
            path: "PlanDefinition.action.requiredBehavior",
            strength: BindingStrength::Required,
            value_set: "http://hl7.org/fhir/ValueSet/action-required-behavior|5.0.0",
        },
        Binding {
            name: "ActionPrecheckBehavior",
            path: "PlanDefinition.action.precheckBehavior",
            strength: BindingStrength::Required,
            value_set: "http://hl7.org/fhir/ValueSet/action-precheck-behavior|5.0.0",
        },
        Binding {
            name: "ActionCardinalityBehavior",
            path: "PlanDefinition.action.cardinalityBehavior",
            strength: BindingStrength::Required,
            value_set: "http://hl7.org/fhir/ValueSet/action-cardinality-behavior|5.0.0",
        },
    ];

    pub fn builder() -> PlanDefinitionBuilder {
        PlanDefinitionBuilder::default()
    }

    pub fn id(&self) -> Option<&str> {
        self.resource.id()
    }

    pub fn meta(&self) -> Option<&Meta> {
        self.resource.meta()
    }

    pub fn implicit_rules(&self) -> Option<&types::Uri> {
        self.resource.implicit_rules()
    }

    pub fn language(&self) -> Option<&types::Code> {
        self.resource.language()
    }

    pub fn text(&self) -> Option<&Narrative> {
        self.resource.text()
    }

    pub fn contained(&self) -> &[Resource] {
        self.resource.contained()
    }

    pub fn extension(&self) -> &[Extension] {
        self.resource.extension()
    }

    pub fn modifier_extension(&self) -> &[Extension] {
        self.resource.modifier_extension()
    }

    pub fn url(&self) -> Option<&types::Uri> {
        self.url.as_ref()
    }

    pub fn identifier(&self) -> &[Identifier] {
        &self.identifier
    }

    pub fn version(&self) -> Option<&types::String> {
        self.version.as_ref()
    }

    pub fn version_algorithm(&self) -> Option<&PlanDefinitionVersionAlgorithm> {
        self.version_algorithm.as_ref()
    }

    pub fn name(&self) -> Option<&types::String> {
        self.name.as_ref()
    }

    pub fn title(&self) -> Option<&types::String> {
        self.title.as_ref()
    }

    pub fn subtitle(&self) -> Option<&types::String> {
        self.subtitle.as_ref()
    }

    pub fn r#type(&self) -> Option<&CodeableConcept> {
        self.r#type.as_ref()
    }

    /// The publication status. Required.
    pub fn status(&self) -> Option<&PublicationStatus> {
        self.status.as_ref()
    }

    pub fn experimental(&self) -> Option<&types::Boolean> {
        self.experimental.as_ref()
    }

    pub fn subject(&self) -> Option<&PlanDefinitionSubject> {
        self.subject.as_ref()
    }

    pub fn date(&self) -> Option<&types::DateTime> {
        self.date.as_ref()
    }

    pub fn publisher(&self) -> Option<&types::String> {
        self.publisher.as_ref()
    }

    pub fn contact(&self) -> &[ContactDetail] {
        &self.contact
    }

    pub fn description(&self) -> Option<&types::Markdown> {
        self.description.as_ref()
    }

    pub fn use_context(&self) -> &[UsageContext] {
        &self.use_context
    }

    pub fn jurisdiction(&self) -> &[CodeableConcept] {
        &self.jurisdiction
    }

    pub fn purpose(&self) -> Option<&types::Markdown> {
        self.purpose.as_ref()
    }

    pub fn usage(&self) -> Option<&types::Markdown> {
        self.usage.as_ref()
    }

    pub fn copyright(&self) -> Option<&types::Markdown> {
        self.copyright.as_ref()
    }

    pub fn copyright_label(&self) -> Option<&types::String> {
        self.copyright_label.as_ref()
    }

    pub fn approval_date(&self) -> Option<&types::Date> {
        self.approval_date.as_ref()
    }

    pub fn last_review_date(&self) -> Option<&types::Date> {
        self.last_review_date.as_ref()
    }

    pub fn effective_period(&self) -> Option<&Period> {
        self.effective_period.as_ref()
    }

    pub fn topic(&self) -> &[CodeableConcept] {
        &self.topic
    }

    pub fn author(&self) -> &[ContactDetail] {
        &self.author
    }

    pub fn editor(&self) -> &[ContactDetail] {
        &self.editor
    }

    pub fn reviewer(&self) -> &[ContactDetail] {
        &self.reviewer
    }

    pub fn endorser(&self) -> &[ContactDetail] {
        &self.endorser
    }

    pub fn related_artifact(&self) -> &[RelatedArtifact] {
        &self.related_artifact
    }

    pub fn library(&self) -> &[types::Canonical] {
        &self.library
    }

    pub fn goal(&self) -> &[PlanDefinitionGoal] {
        &self.goal
    }

    pub fn actor(&self) -> &[PlanDefinitionActor] {
        &self.actor
    }

    pub fn action(&self) -> &[PlanDefinitionAction] {
        &self.action
    }

    pub fn as_needed(&self) -> Option<&PlanDefinitionAsNeeded> {
        self.as_needed.as_ref()
    }

    pub fn to_builder(&self) -> PlanDefinitionBuilder {
        PlanDefinitionBuilder {
            inner: self.clone(),
        }
    }

    fn validate(&self) -> Result<(), FhirError> {
        validation::require_non_null(&self.status, "status")?;
        if let Some(PlanDefinitionSubject::Reference(reference)) = &self.subject {
            validation::check_reference_type(Some(reference), "subject", SUBJECT_REFERENCE_TYPES)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct PlanDefinitionBuilder {
    inner: PlanDefinition,
}

impl PlanDefinitionBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.inner.resource.id = Some(id.into());
        self
    }

    pub fn meta(mut self, meta: Meta) -> Self {
        self.inner.resource.meta = Some(meta);
        self
    }

    pub fn implicit_rules(mut self, implicit_rules: impl Into<types::Uri>) -> Self {
        self.inner.resource.implicit_rules = Some(implicit_rules.into());
        self
    }

    pub fn language(mut self, language: impl Into<types::Code>) -> Self {
        self.inner.resource.language = Some(language.into());
        self
    }

    pub fn text(mut self, text: Narrative) -> Self {
        self.inner.resource.text = Some(text);
        self
    }

    pub fn contained(mut self, contained: impl Into<Resource>) -> Self {
        self.inner.resource.contained.push(contained.into());
        self
    }

    pub fn set_contained(mut self, contained: Vec<Resource>) -> Self {
        self.inner.resource.contained = contained;
        self
    }

    pub fn extension(mut self, extension: Extension) -> Self {
        self.inner.resource.extension.push(extension);
        self
    }

    pub fn set_extension(mut self, extension: Vec<Extension>) -> Self {
        self.inner.resource.extension = extension;
        self
    }

    pub fn modifier_extension(mut self, modifier_extension: Extension) -> Self {
        self.inner.resource.modifier_extension.push(modifier_extension);
        self
    }

    pub fn set_modifier_extension(mut self, modifier_extension: Vec<Extension>) -> Self {
        self.inner.resource.modifier_extension = modifier_extension;
        self
    }

    pub fn url(mut self, url: impl Into<types::Uri>) -> Self {
        self.inner.url = Some(url.into());
        self
    }

    pub fn identifier(mut self, identifier: Identifier) -> Self {
        self.inner.identifier.push(identifier);
        self
    }

    pub fn set_identifier(mut self, identifier: Vec<Identifier>) -> Self {
        self.inner.identifier = identifier;
        self
    }

    pub fn version(mut self, version: impl Into<types::String>) -> Self {
        self.inner.version = Some(version.into());
        self
    }

    pub fn version_algorithm(mut self, version_algorithm: PlanDefinitionVersionAlgorithm) -> Self {
        self.inner.version_algorithm = Some(version_algorithm);
        self
    }

    pub fn name(mut self, name: impl Into<types::String>) -> Self {
        self.inner.name = Some(name.into());
        self
    }

    pub fn title(mut self, title: impl Into<types::String>) -> Self {
        self.inner.title = Some(title.into());
        self
    }

    pub fn subtitle(mut self, subtitle: impl Into<types::String>) -> Self {
        self.inner.subtitle = Some(subtitle.into());
        self
    }

    pub fn r#type(mut self, r#type: CodeableConcept) -> Self {
        self.inner.r#type = Some(r#type);
        self
    }

    pub fn status(mut self, status: impl Into<PublicationStatus>) -> Self {
        self.inner.status = Some(status.into());
        self
    }

    pub fn experimental(mut self, experimental: impl Into<types::Boolean>) -> Self {
        self.inner.experimental = Some(experimental.into());
        self
    }

    pub fn subject(mut self, subject: PlanDefinitionSubject) -> Self {
        self.inner.subject = Some(subject);
        self
    }

    pub fn date(mut self, date: impl Into<types::DateTime>) -> Self {
        self.inner.date = Some(date.into());
        self
    }

    pub fn publisher(mut self, publisher: impl Into<types::String>) -> Self {
        self.inner.publisher = Some(publisher.into());
        self
    }

    pub fn contact(mut self, contact: ContactDetail) -> Self {
        self.inner.contact.push(contact);
        self
    }

    pub fn set_contact(mut self, contact: Vec<ContactDetail>) -> Self {
        self.inner.contact = contact;
        self
    }

    pub fn description(mut self, description: impl Into<types::Markdown>) -> Self {
        self.inner.description = Some(description.into());
        self
    }

    pub fn use_context(mut self, use_context: UsageContext) -> Self {
        self.inner.use_context.push(use_context);
        self
    }

    pub fn set_use_context(mut self, use_context: Vec<UsageContext>) -> Self {
        self.inner.use_context = use_context;
        self
    }

    pub fn jurisdiction(mut self, jurisdiction: CodeableConcept) -> Self {
        self.inner.jurisdiction.push(jurisdiction);
        self
    }

    pub fn set_jurisdiction(mut self, jurisdiction: Vec<CodeableConcept>) -> Self {
        self.inner.jurisdiction = jurisdiction;
        self
    }

    pub fn purpose(mut self, purpose: impl Into<types::Markdown>) -> Self {
        self.inner.purpose = Some(purpose.into());
        self
    }

    pub fn usage(mut self, usage: impl Into<types::Markdown>) -> Self {
        self.inner.usage = Some(usage.into());
        self
    }

    pub fn copyright(mut self, copyright: impl Into<types::Markdown>) -> Self {
        self.inner.copyright = Some(copyright.into());
        self
    }

    pub fn copyright_label(mut self, copyright_label: impl Into<types::String>) -> Self {
        self.inner.copyright_label = Some(copyright_label.into());
        self
    }

    pub fn approval_date(mut self, approval_date: impl Into<types::Date>) -> Self {
        self.inner.approval_date = Some(approval_date.into());
        self
    }

    pub fn last_review_date(mut self, last_review_date: impl Into<types::Date>) -> Self {
        self.inner.last_review_date = Some(last_review_date.into());
        self
    }

    pub fn effective_period(mut self, effective_period: Period) -> Self {
        self.inner.effective_period = Some(effective_period);
        self
    }

    pub fn topic(mut self, topic: CodeableConcept) -> Self {
        self.inner.topic.push(topic);
        self
    }

    pub fn set_topic(mut self, topic: Vec<CodeableConcept>) -> Self {
        self.inner.topic = topic;
        self
    }

    pub fn author(mut self, author: ContactDetail) -> Self {
        self.inner.author.push(author);
        self
    }

    pub fn set_author(mut self, author: Vec<ContactDetail>) -> Self {
        self.inner.author = author;
        self
    }

    pub fn editor(mut self, editor: ContactDetail) -> Self {
        self.inner.editor.push(editor);
        self
    }

    pub fn set_editor(mut self, editor: Vec<ContactDetail>) -> Self {
        self.inner.editor = editor;
        self
    }

    pub fn reviewer(mut self, reviewer: ContactDetail) -> Self {
        self.inner.reviewer.push(reviewer);
        self
    }

    pub fn set_reviewer(mut self, reviewer: Vec<ContactDetail>) -> Self {
        self.inner.reviewer = reviewer;
        self
    }

    pub fn endorser(mut self, endorser: ContactDetail) -> Self {
        self.inner.endorser.push(endorser);
        self
    }

    pub fn set_endorser(mut self, endorser: Vec<ContactDetail>) -> Self {
        self.inner.endorser = endorser;
        self
    }

    pub fn related_artifact(mut self, related_artifact: RelatedArtifact) -> Self {
        self.inner.related_artifact.push(related_artifact);
        self
    }

    pub fn set_related_artifact(mut self, related_artifact: Vec<RelatedArtifact>) -> Self {
        self.inner.related_artifact = related_artifact;
        self
    }

    pub fn library(mut self, library: impl Into<types::Canonical>) -> Self {
        self.inner.library.push(library.into());
        self
    }

    pub fn set_library(mut self, library: Vec<types::Canonical>) -> Self {
        self.inner.library = library;
        self
    }

    pub fn goal(mut self, goal: PlanDefinitionGoal) -> Self {
        self.inner.goal.push(goal);
        self
    }

    pub fn set_goal(mut self, goal: Vec<PlanDefinitionGoal>) -> Self {
        self.inner.goal = goal;
        self
    }

    pub fn actor(mut self, actor: PlanDefinitionActor) -> Self {
        self.inner.actor.push(actor);
        self
    }

    pub fn set_actor(mut self, actor: Vec<PlanDefinitionActor>) -> Self {
        self.inner.actor = actor;
        self
    }

    pub fn action(mut self, action: PlanDefinitionAction) -> Self {
        self.inner.action.push(action);
        self
    }

    pub fn set_action(mut self, action: Vec<PlanDefinitionAction>) -> Self {
        self.inner.action = action;
        self
    }

    pub fn as_needed(mut self, as_needed: PlanDefinitionAsNeeded) -> Self {
        self.inner.as_needed = Some(as_needed);
        self
    }

    pub fn build(self) -> Result<PlanDefinition, FhirError> {
        self.inner.validate()?;
        Ok(self.inner)
    }

    pub fn build_unchecked(self) -> PlanDefinition {
        self.inner
    }
}

impl Visitable for PlanDefinition {
    fn type_name(&self) -> &'static str {
        "PlanDefinition"
    }

    fn has_children(&self) -> bool {
        self.resource.has_children()
            || self.url.is_some()
            || !self.identifier.is_empty()
            || self.version.is_some()
            || self.version_algorithm.is_some()
            || self.name.is_some()
            || self.title.is_some()
            || self.subtitle.is_some()
            || self.r#type.is_some()
            || self.status.is_some()
            || self.experimental.is_some()
            || self.subject.is_some()
            || self.date.is_some()
            || self.publisher.is_some()
            || !self.contact.is_empty()
            || self.description.is_some()
            || !self.use_context.is_empty()
            || !self.jurisdiction.is_empty()
            || self.purpose.is_some()
            || self.usage.is_some()
            || self.copyright.is_some()
            || self.copyright_label.is_some()
            || self.approval_date.is_some()
            || self.last_review_date.is_some()
            || self.effective_period.is_some()
            || !self.topic.is_empty()
            || !self.author.is_empty()
            || !self.editor.is_empty()
            || !self.reviewer.is_empty()
            || !self.endorser.is_empty()
            || !self.related_artifact.is_empty()
            || !self.library.is_empty()
            || !self.goal.is_empty()
            || !self.actor.is_empty()
            || !self.action.is_empty()
            || self.as_needed.is_some()
    }

    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        if visitor.pre_visit(self) {
            visitor.visit_start(name, index, self);
            if visitor.visit(name, index, self) {
                self.resource.accept_children(visitor);
                accept_opt(&self.url, "url", visitor);
                accept_all(&self.identifier, "identifier", visitor);
                accept_opt(&self.version, "version", visitor);
                if let Some(version_algorithm) = &self.version_algorithm {
                    version_algorithm.accept(visitor);
                }
                accept_opt(&self.name, "name", visitor);
                accept_opt(&self.title, "title", visitor);
                accept_opt(&self.subtitle, "subtitle", visitor);
                accept_opt(&self.r#type, "type", visitor);
                accept_opt(&self.status, "status", visitor);
                accept_opt(&self.experimental, "experimental", visitor);
                if let Some(subject) = &self.subject {
                    subject.accept(visitor);
                }
                accept_opt(&self.date, "date", visitor);
                accept_opt(&self.publisher, "publisher", visitor);
                accept_all(&self.contact, "contact", visitor);
                accept_opt(&self.description, "description", visitor);
                accept_all(&self.use_context, "useContext", visitor);
                accept_all(&self.jurisdiction, "jurisdiction", visitor);
                accept_opt(&self.purpose, "purpose", visitor);
                accept_opt(&self.usage, "usage", visitor);
                accept_opt(&self.copyright, "copyright", visitor);
                accept_opt(&self.copyright_label, "copyrightLabel", visitor);
                accept_opt(&self.approval_date, "approvalDate", visitor);
                accept_opt(&self.last_review_date, "lastReviewDate", visitor);
                accept_opt(&self.effective_period, "effectivePeriod", visitor);
                accept_all(&self.topic, "topic", visitor);
                accept_all(&self.author, "author", visitor);
                accept_all(&self.editor, "editor", visitor);
                accept_all(&self.reviewer, "reviewer", visitor);
                accept_all(&self.endorser, "endorser", visitor);
                accept_all(&self.related_artifact, "relatedArtifact", visitor);
                accept_all(&self.library, "library", visitor);
                accept_all(&self.goal, "goal", visitor);
                accept_all(&self.actor, "actor", visitor);
                accept_all(&self.action, "action", visitor);
                if let Some(as_needed) = &self.as_needed {
                    as_needed.accept(visitor);
                }
            }
            visitor.visit_end(name, index, self);
            visitor.post_visit(self);
        }
    }
}

/// A goal the plan is intended to achieve.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct PlanDefinitionGoal {
    pub(crate) backbone: BackboneElement,
    pub(crate) category: Option<CodeableConcept>,
    pub(crate) description: Option<CodeableConcept>,
    pub(crate) priority: Option<CodeableConcept>,
    pub(crate) start: Option<CodeableConcept>,
    pub(crate) addresses: Vec<CodeableConcept>,
    pub(crate) documentation: Vec<RelatedArtifact>,
    pub(crate) target: Vec<PlanDefinitionGoalTarget>,
}

impl PlanDefinitionGoal {
    pub fn builder() -> PlanDefinitionGoalBuilder {
        PlanDefinitionGoalBuilder::default()
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

    pub fn category(&self) -> Option<&CodeableConcept> {
        self.category.as_ref()
    }

    /// What the goal aims for. Required.
    pub fn description(&self) -> Option<&CodeableConcept> {
        self.description.as_ref()
    }

    pub fn priority(&self) -> Option<&CodeableConcept> {
        self.priority.as_ref()
    }

    pub fn start(&self) -> Option<&CodeableConcept> {
        self.start.as_ref()
    }

    pub fn addresses(&self) -> &[CodeableConcept] {
        &self.addresses
    }

    pub fn documentation(&self) -> &[RelatedArtifact] {
        &self.documentation
    }

    pub fn target(&self) -> &[PlanDefinitionGoalTarget] {
        &self.target
    }

    pub fn to_builder(&self) -> PlanDefinitionGoalBuilder {
        PlanDefinitionGoalBuilder {
            inner: self.clone(),
        }
    }

    fn validate(&self) -> Result<(), FhirError> {
        validation::require_non_null(&self.description, "description")?;
        validation::require_value_or_children(self)
    }
}

#[derive(Debug, Clone, Default)]
pub struct PlanDefinitionGoalBuilder {
    inner: PlanDefinitionGoal,
}

impl PlanDefinitionGoalBuilder {
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

    pub fn category(mut self, category: CodeableConcept) -> Self {
        self.inner.category = Some(category);
        self
    }

    pub fn description(mut self, description: CodeableConcept) -> Self {
        self.inner.description = Some(description);
        self
    }

    pub fn priority(mut self, priority: CodeableConcept) -> Self {
        self.inner.priority = Some(priority);
        self
    }

    pub fn start(mut self, start: CodeableConcept) -> Self {
        self.inner.start = Some(start);
        self
    }

    pub fn addresses(mut self, addresses: CodeableConcept) -> Self {
        self.inner.addresses.push(addresses);
        self
    }

    pub fn set_addresses(mut self, addresses: Vec<CodeableConcept>) -> Self {
        self.inner.addresses = addresses;
        self
    }

    pub fn documentation(mut self, documentation: RelatedArtifact) -> Self {
        self.inner.documentation.push(documentation);
        self
    }

    pub fn set_documentation(mut self, documentation: Vec<RelatedArtifact>) -> Self {
        self.inner.documentation = documentation;
        self
    }

    pub fn target(mut self, target: PlanDefinitionGoalTarget) -> Self {
        self.inner.target.push(target);
        self
    }

    pub fn set_target(mut self, target: Vec<PlanDefinitionGoalTarget>) -> Self {
        self.inner.target = target;
        self
    }

    pub fn build(self) -> Result<PlanDefinitionGoal, FhirError> {
        self.inner.validate()?;
        Ok(self.inner)
    }

    pub fn build_unchecked(self) -> PlanDefinitionGoal {
        self.inner
    }
}

impl Visitable for PlanDefinitionGoal {
    fn type_name(&self) -> &'static str {
        "PlanDefinition.goal"
    }

    fn has_children(&self) -> bool {
        self.backbone.has_children()
            || self.category.is_some()
            || self.description.is_some()
            || self.priority.is_some()
            || self.start.is_some()
            || !self.addresses.is_empty()
            || !self.documentation.is_empty()
            || !self.target.is_empty()
    }

    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        if visitor.pre_visit(self) {
            visitor.visit_start(name, index, self);
            if visitor.visit(name, index, self) {
                self.backbone.accept_children(visitor);
                accept_opt(&self.category, "category", visitor);
                accept_opt(&self.description, "description", visitor);
                accept_opt(&self.priority, "priority", visitor);
                accept_opt(&self.start, "start", visitor);
                accept_all(&self.addresses, "addresses", visitor);
                accept_all(&self.documentation, "documentation", visitor);
                accept_all(&self.target, "target", visitor);
            }
            visitor.visit_end(name, index, self);
            visitor.post_visit(self);
        }
    }
}

/// A measurable target for a goal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct PlanDefinitionGoalTarget {
    pub(crate) backbone: BackboneElement,
    pub(crate) measure: Option<CodeableConcept>,
    pub(crate) detail: Option<PlanDefinitionGoalTargetDetail>,
    pub(crate) due: Option<Duration>,
}

impl PlanDefinitionGoalTarget {
    pub fn builder() -> PlanDefinitionGoalTargetBuilder {
        PlanDefinitionGoalTargetBuilder::default()
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

    pub fn measure(&self) -> Option<&CodeableConcept> {
        self.measure.as_ref()
    }

    pub fn detail(&self) -> Option<&PlanDefinitionGoalTargetDetail> {
        self.detail.as_ref()
    }

    pub fn due(&self) -> Option<&Duration> {
        self.due.as_ref()
    }

    pub fn to_builder(&self) -> PlanDefinitionGoalTargetBuilder {
        PlanDefinitionGoalTargetBuilder {
            inner: self.clone(),
        }
    }

    fn validate(&self) -> Result<(), FhirError> {
        validation::require_value_or_children(self)
    }
}

#[derive(Debug, Clone, Default)]
pub struct PlanDefinitionGoalTargetBuilder {
    inner: PlanDefinitionGoalTarget,
}

impl PlanDefinitionGoalTargetBuilder {
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

    pub fn measure(mut self, measure: CodeableConcept) -> Self {
        self.inner.measure = Some(measure);
        self
    }

    pub fn detail(mut self, detail: PlanDefinitionGoalTargetDetail) -> Self {
        self.inner.detail = Some(detail);
        self
    }

    pub fn due(mut self, due: Duration) -> Self {
        self.inner.due = Some(due);
        self
    }

    pub fn build(self) -> Result<PlanDefinitionGoalTarget, FhirError> {
        self.inner.validate()?;
        Ok(self.inner)
    }

    pub fn build_unchecked(self) -> PlanDefinitionGoalTarget {
        self.inner
    }
}

impl Visitable for PlanDefinitionGoalTarget {
    fn type_name(&self) -> &'static str {
        "PlanDefinition.goal.target"
    }

    fn has_children(&self) -> bool {
        self.backbone.has_children()
            || self.measure.is_some()
            || self.detail.is_some()
            || self.due.is_some()
    }

    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        if visitor.pre_visit(self) {
            visitor.visit_start(name, index, self);
            if visitor.visit(name, index, self) {
                self.backbone.accept_children(visitor);
                accept_opt(&self.measure, "measure", visitor);
                if let Some(detail) = &self.detail {
                    detail.accept(visitor);
                }
                accept_opt(&self.due, "due", visitor);
            }
            visitor.visit_end(name, index, self);
            visitor.post_visit(self);
        }
    }
}

/// An actor taking part in the defined actions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct PlanDefinitionActor {
    pub(crate) backbone: BackboneElement,
    pub(crate) title: Option<types::String>,
    pub(crate) description: Option<types::Markdown>,
    pub(crate) option: Vec<PlanDefinitionActorOption>,
}

impl PlanDefinitionActor {
    pub fn builder() -> PlanDefinitionActorBuilder {
        PlanDefinitionActorBuilder::default()
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

    pub fn title(&self) -> Option<&types::String> {
        self.title.as_ref()
    }

    pub fn description(&self) -> Option<&types::Markdown> {
        self.description.as_ref()
    }

    /// Who or what can fill the role. At least one entry.
    pub fn option(&self) -> &[PlanDefinitionActorOption] {
        &self.option
    }

    pub fn to_builder(&self) -> PlanDefinitionActorBuilder {
        PlanDefinitionActorBuilder {
            inner: self.clone(),
        }
    }

    fn validate(&self) -> Result<(), FhirError> {
        validation::check_non_empty_list(&self.option, "option")?;
        validation::require_value_or_children(self)
    }
}

#[derive(Debug, Clone, Default)]
pub struct PlanDefinitionActorBuilder {
    inner: PlanDefinitionActor,
}

impl PlanDefinitionActorBuilder {
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

    pub fn title(mut self, title: impl Into<types::String>) -> Self {
        self.inner.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<types::Markdown>) -> Self {
        self.inner.description = Some(description.into());
        self
    }

    pub fn option(mut self, option: PlanDefinitionActorOption) -> Self {
        self.inner.option.push(option);
        self
    }

    pub fn set_option(mut self, option: Vec<PlanDefinitionActorOption>) -> Self {
        self.inner.option = option;
        self
    }

    pub fn build(self) -> Result<PlanDefinitionActor, FhirError> {
        self.inner.validate()?;
        Ok(self.inner)
    }

    pub fn build_unchecked(self) -> PlanDefinitionActor {
        self.inner
    }
}

impl Visitable for PlanDefinitionActor {
    fn type_name(&self) -> &'static str {
        "PlanDefinition.actor"
    }

    fn has_children(&self) -> bool {
        self.backbone.has_children()
            || self.title.is_some()
            || self.description.is_some()
            || !self.option.is_empty()
    }

    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        if visitor.pre_visit(self) {
            visitor.visit_start(name, index, self);
            if visitor.visit(name, index, self) {
                self.backbone.accept_children(visitor);
                accept_opt(&self.title, "title", visitor);
                accept_opt(&self.description, "description", visitor);
                accept_all(&self.option, "option", visitor);
            }
            visitor.visit_end(name, index, self);
            visitor.post_visit(self);
        }
    }
}

/// One kind of participant that can fill an actor role.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct PlanDefinitionActorOption {
    pub(crate) backbone: BackboneElement,
    pub(crate) r#type: Option<ActionParticipantType>,
    pub(crate) type_canonical: Option<types::Canonical>,
    pub(crate) type_reference: Option<Reference>,
    pub(crate) role: Option<CodeableConcept>,
}

impl PlanDefinitionActorOption {
    pub fn builder() -> PlanDefinitionActorOptionBuilder {
        PlanDefinitionActorOptionBuilder::default()
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

    pub fn r#type(&self) -> Option<&ActionParticipantType> {
        self.r#type.as_ref()
    }

    pub fn type_canonical(&self) -> Option<&types::Canonical> {
        self.type_canonical.as_ref()
    }

    pub fn type_reference(&self) -> Option<&Reference> {
        self.type_reference.as_ref()
    }

    pub fn role(&self) -> Option<&CodeableConcept> {
        self.role.as_ref()
    }

    pub fn to_builder(&self) -> PlanDefinitionActorOptionBuilder {
        PlanDefinitionActorOptionBuilder {
            inner: self.clone(),
        }
    }

    fn validate(&self) -> Result<(), FhirError> {
        validation::check_reference_type(
            self.type_reference.as_ref(),
            "typeReference",
            PARTICIPANT_REFERENCE_TYPES,
        )?;
        validation::require_value_or_children(self)
    }
}

#[derive(Debug, Clone, Default)]
pub struct PlanDefinitionActorOptionBuilder {
    inner: PlanDefinitionActorOption,
}

impl PlanDefinitionActorOptionBuilder {
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

    pub fn r#type(mut self, r#type: impl Into<ActionParticipantType>) -> Self {
        self.inner.r#type = Some(r#type.into());
        self
    }

    pub fn type_canonical(mut self, type_canonical: impl Into<types::Canonical>) -> Self {
        self.inner.type_canonical = Some(type_canonical.into());
        self
    }

    pub fn type_reference(mut self, type_reference: Reference) -> Self {
        self.inner.type_reference = Some(type_reference);
        self
    }

    pub fn role(mut self, role: CodeableConcept) -> Self {
        self.inner.role = Some(role);
        self
    }

    pub fn build(self) -> Result<PlanDefinitionActorOption, FhirError> {
        self.inner.validate()?;
        Ok(self.inner)
    }

    pub fn build_unchecked(self) -> PlanDefinitionActorOption {
        self.inner
    }
}

impl Visitable for PlanDefinitionActorOption {
    fn type_name(&self) -> &'static str {
        "PlanDefinition.actor.option"
    }

    fn has_children(&self) -> bool {
        self.backbone.has_children()
            || self.r#type.is_some()
            || self.type_canonical.is_some()
            || self.type_reference.is_some()
            || self.role.is_some()
    }

    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        if visitor.pre_visit(self) {
            visitor.visit_start(name, index, self);
            if visitor.visit(name, index, self) {
                self.backbone.accept_children(visitor);
                accept_opt(&self.r#type, "type", visitor);
                accept_opt(&self.type_canonical, "typeCanonical", visitor);
                accept_opt(&self.type_reference, "typeReference", visitor);
                accept_opt(&self.role, "role", visitor);
            }
            visitor.visit_end(name, index, self);
            visitor.post_visit(self);
        }
    }
}

/// A single step in the plan, possibly grouping further sub-actions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct PlanDefinitionAction {
    pub(crate) backbone: BackboneElement,
    pub(crate) link_id: Option<types::String>,
    pub(crate) prefix: Option<types::String>,
    pub(crate) title: Option<types::String>,
    pub(crate) description: Option<types::Markdown>,
    pub(crate) text_equivalent: Option<types::Markdown>,
    pub(crate) priority: Option<RequestPriority>,
    pub(crate) code: Option<CodeableConcept>,
    pub(crate) reason: Vec<CodeableConcept>,
    pub(crate) documentation: Vec<RelatedArtifact>,
    pub(crate) goal_id: Vec<types::Id>,
    pub(crate) subject: Option<PlanDefinitionActionSubject>,
    pub(crate) trigger: Vec<TriggerDefinition>,
    pub(crate) condition: Vec<PlanDefinitionActionCondition>,
    pub(crate) input: Vec<PlanDefinitionActionInput>,
    pub(crate) output: Vec<PlanDefinitionActionOutput>,
    pub(crate) related_action: Vec<PlanDefinitionActionRelatedAction>,
    pub(crate) timing: Option<PlanDefinitionActionTiming>,
    pub(crate) location: Option<CodeableReference>,
    pub(crate) participant: Vec<PlanDefinitionActionParticipant>,
    pub(crate) r#type: Option<CodeableConcept>,
    pub(crate) grouping_behavior: Option<ActionGroupingBehavior>,
    pub(crate) selection_behavior: Option<ActionSelectionBehavior>,
    pub(crate) required_behavior: Option<ActionRequiredBehavior>,
    pub(crate) precheck_behavior: Option<ActionPrecheckBehavior>,
    pub(crate) cardinality_behavior: Option<ActionCardinalityBehavior>,
    pub(crate) definition: Option<PlanDefinitionActionDefinition>,
    pub(crate) transform: Option<types::Canonical>,
    pub(crate) dynamic_value: Vec<PlanDefinitionActionDynamicValue>,
    pub(crate) action: Vec<PlanDefinitionAction>,
}

impl PlanDefinitionAction {
    pub fn builder() -> PlanDefinitionActionBuilder {
        PlanDefinitionActionBuilder::default()
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

    pub fn link_id(&self) -> Option<&types::String> {
        self.link_id.as_ref()
    }

    pub fn prefix(&self) -> Option<&types::String> {
        self.prefix.as_ref()
    }

    pub fn title(&self) -> Option<&types::String> {
        self.title.as_ref()
    }

    pub fn description(&self) -> Option<&types::Markdown> {
        self.description.as_ref()
    }

    pub fn text_equivalent(&self) -> Option<&types::Markdown> {
        self.text_equivalent.as_ref()
    }

    pub fn priority(&self) -> Option<&RequestPriority> {
        self.priority.as_ref()
    }

    pub fn code(&self) -> Option<&CodeableConcept> {
        self.code.as_ref()
    }

    pub fn reason(&self) -> &[CodeableConcept] {
        &self.reason
    }

    pub fn documentation(&self) -> &[RelatedArtifact] {
        &self.documentation
    }

    /// Ids of the goals this action supports.
    pub fn goal_id(&self) -> &[types::Id] {
        &self.goal_id
    }

    pub fn subject(&self) -> Option<&PlanDefinitionActionSubject> {
        self.subject.as_ref()
    }

    pub fn trigger(&self) -> &[TriggerDefinition] {
        &self.trigger
    }

    pub fn condition(&self) -> &[PlanDefinitionActionCondition] {
        &self.condition
    }

    pub fn input(&self) -> &[PlanDefinitionActionInput] {
        &self.input
    }

    pub fn output(&self) -> &[PlanDefinitionActionOutput] {
        &self.output
    }

    pub fn related_action(&self) -> &[PlanDefinitionActionRelatedAction] {
        &self.related_action
    }

    pub fn timing(&self) -> Option<&PlanDefinitionActionTiming> {
        self.timing.as_ref()
    }

    pub fn location(&self) -> Option<&CodeableReference> {
        self.location.as_ref()
    }

    pub fn participant(&self) -> &[PlanDefinitionActionParticipant] {
        &self.participant
    }

    pub fn r#type(&self) -> Option<&CodeableConcept> {
        self.r#type.as_ref()
    }

    pub fn grouping_behavior(&self) -> Option<&ActionGroupingBehavior> {
        self.grouping_behavior.as_ref()
    }

    pub fn selection_behavior(&self) -> Option<&ActionSelectionBehavior> {
        self.selection_behavior.as_ref()
    }

    pub fn required_behavior(&self) -> Option<&ActionRequiredBehavior> {
        self.required_behavior.as_ref()
    }

    pub fn precheck_behavior(&self) -> Option<&ActionPrecheckBehavior> {
        self.precheck_behavior.as_ref()
    }

    pub fn cardinality_behavior(&self) -> Option<&ActionCardinalityBehavior> {
        self.cardinality_behavior.as_ref()
    }

    pub fn definition(&self) -> Option<&PlanDefinitionActionDefinition> {
        self.definition.as_ref()
    }

    pub fn transform(&self) -> Option<&types::Canonical> {
        self.transform.as_ref()
    }

    pub fn dynamic_value(&self) -> &[PlanDefinitionActionDynamicValue] {
        &self.dynamic_value
    }

    /// Sub-actions grouped under this action.
    pub fn action(&self) -> &[PlanDefinitionAction] {
        &self.action
    }

    pub fn to_builder(&self) -> PlanDefinitionActionBuilder {
        PlanDefinitionActionBuilder {
            inner: self.clone(),
        }
    }

    fn validate(&self) -> Result<(), FhirError> {
        if let Some(PlanDefinitionActionSubject::Reference(reference)) = &self.subject {
            validation::check_reference_type(Some(reference), "subject", &["Group"])?;
        }
        if let Some(location) = &self.location {
            validation::check_reference_type(location.reference(), "location", &["Location"])?;
        }
        validation::require_value_or_children(self)
    }
}

#[derive(Debug, Clone, Default)]
pub struct PlanDefinitionActionBuilder {
    inner: PlanDefinitionAction,
}

impl PlanDefinitionActionBuilder {
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

    pub fn link_id(mut self, link_id: impl Into<types::String>) -> Self {
        self.inner.link_id = Some(link_id.into());
        self
    }

    pub fn prefix(mut self, prefix: impl Into<types::String>) -> Self {
        self.inner.prefix = Some(prefix.into());
        self
    }

    pub fn title(mut self, title: impl Into<types::String>) -> Self {
        self.inner.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<types::Markdown>) -> Self {
        self.inner.description = Some(description.into());
        self
    }

    pub fn text_equivalent(mut self, text_equivalent: impl Into<types::Markdown>) -> Self {
        self.inner.text_equivalent = Some(text_equivalent.into());
        self
    }

    pub fn priority(mut self, priority: impl Into<RequestPriority>) -> Self {
        self.inner.priority = Some(priority.into());
        self
    }

    pub fn code(mut self, code: CodeableConcept) -> Self {
        self.inner.code = Some(code);
        self
    }

    pub fn reason(mut self, reason: CodeableConcept) -> Self {
        self.inner.reason.push(reason);
        self
    }

    pub fn set_reason(mut self, reason: Vec<CodeableConcept>) -> Self {
        self.inner.reason = reason;
        self
    }

    pub fn documentation(mut self, documentation: RelatedArtifact) -> Self {
        self.inner.documentation.push(documentation);
        self
    }

    pub fn set_documentation(mut self, documentation: Vec<RelatedArtifact>) -> Self {
        self.inner.documentation = documentation;
        self
    }

    pub fn goal_id(mut self, goal_id: impl Into<types::Id>) -> Self {
        self.inner.goal_id.push(goal_id.into());
        self
    }

    pub fn set_goal_id(mut self, goal_id: Vec<types::Id>) -> Self {
        self.inner.goal_id = goal_id;
        self
    }

    pub fn subject(mut self, subject: PlanDefinitionActionSubject) -> Self {
        self.inner.subject = Some(subject);
        self
    }

    pub fn trigger(mut self, trigger: TriggerDefinition) -> Self {
        self.inner.trigger.push(trigger);
        self
    }

    pub fn set_trigger(mut self, trigger: Vec<TriggerDefinition>) -> Self {
        self.inner.trigger = trigger;
        self
    }

    pub fn condition(mut self, condition: PlanDefinitionActionCondition) -> Self {
        self.inner.condition.push(condition);
        self
    }

    pub fn set_condition(mut self, condition: Vec<PlanDefinitionActionCondition>) -> Self {
        self.inner.condition = condition;
        self
    }

    pub fn input(mut self, input: PlanDefinitionActionInput) -> Self {
        self.inner.input.push(input);
        self
    }

    pub fn set_input(mut self, input: Vec<PlanDefinitionActionInput>) -> Self {
        self.inner.input = input;
        self
    }

    pub fn output(mut self, output: PlanDefinitionActionOutput) -> Self {
        self.inner.output.push(output);
        self
    }

    pub fn set_output(mut self, output: Vec<PlanDefinitionActionOutput>) -> Self {
        self.inner.output = output;
        self
    }

    pub fn related_action(mut self, related_action: PlanDefinitionActionRelatedAction) -> Self {
        self.inner.related_action.push(related_action);
        self
    }

    pub fn set_related_action(
        mut self,
        related_action: Vec<PlanDefinitionActionRelatedAction>,
    ) -> Self {
        self.inner.related_action = related_action;
        self
    }

    pub fn timing(mut self, timing: PlanDefinitionActionTiming) -> Self {
        self.inner.timing = Some(timing);
        self
    }

    pub fn location(mut self, location: CodeableReference) -> Self {
        self.inner.location = Some(location);
        self
    }

    pub fn participant(mut self, participant: PlanDefinitionActionParticipant) -> Self {
        self.inner.participant.push(participant);
        self
    }

    pub fn set_participant(mut self, participant: Vec<PlanDefinitionActionParticipant>) -> Self {
        self.inner.participant = participant;
        self
    }

    pub fn r#type(mut self, r#type: CodeableConcept) -> Self {
        self.inner.r#type = Some(r#type);
        self
    }

    pub fn grouping_behavior(
        mut self,
        grouping_behavior: impl Into<ActionGroupingBehavior>,
    ) -> Self {
        self.inner.grouping_behavior = Some(grouping_behavior.into());
        self
    }

    pub fn selection_behavior(
        mut self,
        selection_behavior: impl Into<ActionSelectionBehavior>,
    ) -> Self {
        self.inner.selection_behavior = Some(selection_behavior.into());
        self
    }

    pub fn required_behavior(
        mut self,
        required_behavior: impl Into<ActionRequiredBehavior>,
    ) -> Self {
        self.inner.required_behavior = Some(required_behavior.into());
        self
    }

    pub fn precheck_behavior(
        mut self,
        precheck_behavior: impl Into<ActionPrecheckBehavior>,
    ) -> Self {
        self.inner.precheck_behavior = Some(precheck_behavior.into());
        self
    }

    pub fn cardinality_behavior(
        mut self,
        cardinality_behavior: impl Into<ActionCardinalityBehavior>,
    ) -> Self {
        self.inner.cardinality_behavior = Some(cardinality_behavior.into());
        self
    }

    pub fn definition(mut self, definition: PlanDefinitionActionDefinition) -> Self {
        self.inner.definition = Some(definition);
        self
    }

    pub fn transform(mut self, transform: impl Into<types::Canonical>) -> Self {
        self.inner.transform = Some(transform.into());
        self
    }

    pub fn dynamic_value(mut self, dynamic_value: PlanDefinitionActionDynamicValue) -> Self {
        self.inner.dynamic_value.push(dynamic_value);
        self
    }

    pub fn set_dynamic_value(
        mut self,
        dynamic_value: Vec<PlanDefinitionActionDynamicValue>,
    ) -> Self {
        self.inner.dynamic_value = dynamic_value;
        self
    }

    pub fn action(mut self, action: PlanDefinitionAction) -> Self {
        self.inner.action.push(action);
        self
    }

    pub fn set_action(mut self, action: Vec<PlanDefinitionAction>) -> Self {
        self.inner.action = action;
        self
    }

    pub fn build(self) -> Result<PlanDefinitionAction, FhirError> {
        self.inner.validate()?;
        Ok(self.inner)
    }

    pub fn build_unchecked(self) -> PlanDefinitionAction {
        self.inner
    }
}

impl Visitable for PlanDefinitionAction {
    fn type_name(&self) -> &'static str {
        "PlanDefinition.action"
    }

    fn has_children(&self) -> bool {
        self.backbone.has_children()
            || self.link_id.is_some()
            || self.prefix.is_some()
            || self.title.is_some()
            || self.description.is_some()
            || self.text_equivalent.is_some()
            || self.priority.is_some()
            || self.code.is_some()
            || !self.reason.is_empty()
            || !self.documentation.is_empty()
            || !self.goal_id.is_empty()
            || self.subject.is_some()
            || !self.trigger.is_empty()
            || !self.condition.is_empty()
            || !self.input.is_empty()
            || !self.output.is_empty()
            || !self.related_action.is_empty()
            || self.timing.is_some()
            || self.location.is_some()
            || !self.participant.is_empty()
            || self.r#type.is_some()
            || self.grouping_behavior.is_some()
            || self.selection_behavior.is_some()
            || self.required_behavior.is_some()
            || self.precheck_behavior.is_some()
            || self.cardinality_behavior.is_some()
            || self.definition.is_some()
            || self.transform.is_some()
            || !self.dynamic_value.is_empty()
            || !self.action.is_empty()
    }

    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        if visitor.pre_visit(self) {
            visitor.visit_start(name, index, self);
            if visitor.visit(name, index, self) {
                self.backbone.accept_children(visitor);
                accept_opt(&self.link_id, "linkId", visitor);
                accept_opt(&self.prefix, "prefix", visitor);
                accept_opt(&self.title, "title", visitor);
                accept_opt(&self.description, "description", visitor);
                accept_opt(&self.text_equivalent, "textEquivalent", visitor);
                accept_opt(&self.priority, "priority", visitor);
                accept_opt(&self.code, "code", visitor);
                accept_all(&self.reason, "reason", visitor);
                accept_all(&self.documentation, "documentation", visitor);
                accept_all(&self.goal_id, "goalId", visitor);
                if let Some(subject) = &self.subject {
                    subject.accept(visitor);
                }
                accept_all(&self.trigger, "trigger", visitor);
                accept_all(&self.condition, "condition", visitor);
                accept_all(&self.input, "input", visitor);
                accept_all(&self.output, "output", visitor);
                accept_all(&self.related_action, "relatedAction", visitor);
                if let Some(timing) = &self.timing {
                    timing.accept(visitor);
                }
                accept_opt(&self.location, "location", visitor);
                accept_all(&self.participant, "participant", visitor);
                accept_opt(&self.r#type, "type", visitor);
                accept_opt(&self.grouping_behavior, "groupingBehavior", visitor);
                accept_opt(&self.selection_behavior, "selectionBehavior", visitor);
                accept_opt(&self.required_behavior, "requiredBehavior", visitor);
                accept_opt(&self.precheck_behavior, "precheckBehavior", visitor);
                accept_opt(&self.cardinality_behavior, "cardinalityBehavior", visitor);
                if let Some(definition) = &self.definition {
                    definition.accept(visitor);
                }
                accept_opt(&self.transform, "transform", visitor);
                accept_all(&self.dynamic_value, "dynamicValue", visitor);
                accept_all(&self.action, "action", visitor);
            }
            visitor.visit_end(name, index, self);
            visitor.post_visit(self);
        }
    }
}

/// A condition gating whether the action applies.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct PlanDefinitionActionCondition {
    pub(crate) backbone: BackboneElement,
    pub(crate) kind: Option<ActionConditionKind>,
    pub(crate) expression: Option<Expression>,
}

impl PlanDefinitionActionCondition {
    pub fn builder() -> PlanDefinitionActionConditionBuilder {
        PlanDefinitionActionConditionBuilder::default()
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

    /// When the condition applies. Required.
    pub fn kind(&self) -> Option<&ActionConditionKind> {
        self.kind.as_ref()
    }

    pub fn expression(&self) -> Option<&Expression> {
        self.expression.as_ref()
    }

    pub fn to_builder(&self) -> PlanDefinitionActionConditionBuilder {
        PlanDefinitionActionConditionBuilder {
            inner: self.clone(),
        }
    }

    fn validate(&self) -> Result<(), FhirError> {
        validation::require_non_null(&self.kind, "kind")?;
        validation::require_value_or_children(self)
    }
}

#[derive(Debug, Clone, Default)]
pub struct PlanDefinitionActionConditionBuilder {
    inner: PlanDefinitionActionCondition,
}

impl PlanDefinitionActionConditionBuilder {
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

    pub fn kind(mut self, kind: impl Into<ActionConditionKind>) -> Self {
        self.inner.kind = Some(kind.into());
        self
    }

    pub fn expression(mut self, expression: Expression) -> Self {
        self.inner.expression = Some(expression);
        self
    }

    pub fn build(self) -> Result<PlanDefinitionActionCondition, FhirError> {
        self.inner.validate()?;
        Ok(self.inner)
    }

    pub fn build_unchecked(self) -> PlanDefinitionActionCondition {
        self.inner
    }
}

impl Visitable for PlanDefinitionActionCondition {
    fn type_name(&self) -> &'static str {
        "PlanDefinition.action.condition"
    }

    fn has_children(&self) -> bool {
        self.backbone.has_children() || self.kind.is_some() || self.expression.is_some()
    }

    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        if visitor.pre_visit(self) {
            visitor.visit_start(name, index, self);
            if visitor.visit(name, index, self) {
                self.backbone.accept_children(visitor);
                accept_opt(&self.kind, "kind", visitor);
                accept_opt(&self.expression, "expression", visitor);
            }
            visitor.visit_end(name, index, self);
            visitor.post_visit(self);
        }
    }
}

/// Data the action requires before it can run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct PlanDefinitionActionInput {
    pub(crate) backbone: BackboneElement,
    pub(crate) title: Option<types::String>,
    pub(crate) requirement: Option<DataRequirement>,
    pub(crate) related_data: Option<types::Id>,
}

impl PlanDefinitionActionInput {
    pub fn builder() -> PlanDefinitionActionInputBuilder {
        PlanDefinitionActionInputBuilder::default()
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

    pub fn title(&self) -> Option<&types::String> {
        self.title.as_ref()
    }

    pub fn requirement(&self) -> Option<&DataRequirement> {
        self.requirement.as_ref()
    }

    /// The linkId of an output of another action that feeds this input.
    pub fn related_data(&self) -> Option<&types::Id> {
        self.related_data.as_ref()
    }

    pub fn to_builder(&self) -> PlanDefinitionActionInputBuilder {
        PlanDefinitionActionInputBuilder {
            inner: self.clone(),
        }
    }

    fn validate(&self) -> Result<(), FhirError> {
        validation::require_value_or_children(self)
    }
}

#[derive(Debug, Clone, Default)]
pub struct PlanDefinitionActionInputBuilder {
    inner: PlanDefinitionActionInput,
}

impl PlanDefinitionActionInputBuilder {
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

    pub fn title(mut self, title: impl Into<types::String>) -> Self {
        self.inner.title = Some(title.into());
        self
    }

    pub fn requirement(mut self, requirement: DataRequirement) -> Self {
        self.inner.requirement = Some(requirement);
        self
    }

    pub fn related_data(mut self, related_data: impl Into<types::Id>) -> Self {
        self.inner.related_data = Some(related_data.into());
        self
    }

    pub fn build(self) -> Result<PlanDefinitionActionInput, FhirError> {
        self.inner.validate()?;
        Ok(self.inner)
    }

    pub fn build_unchecked(self) -> PlanDefinitionActionInput {
        self.inner
    }
}

impl Visitable for PlanDefinitionActionInput {
    fn type_name(&self) -> &'static str {
        "PlanDefinition.action.input"
    }

    fn has_children(&self) -> bool {
        self.backbone.has_children()
            || self.title.is_some()
            || self.requirement.is_some()
            || self.related_data.is_some()
    }

    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        if visitor.pre_visit(self) {
            visitor.visit_start(name, index, self);
            if visitor.visit(name, index, self) {
                self.backbone.accept_children(visitor);
                accept_opt(&self.title, "title", visitor);
                accept_opt(&self.requirement, "requirement", visitor);
                accept_opt(&self.related_data, "relatedData", visitor);
            }
            visitor.visit_end(name, index, self);
            visitor.post_visit(self);
        }
    }
}

/// Data the action produces.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct PlanDefinitionActionOutput {
    pub(crate) backbone: BackboneElement,
    pub(crate) title: Option<types::String>,
    pub(crate) requirement: Option<DataRequirement>,
    pub(crate) related_data: Option<types::String>,
}

impl PlanDefinitionActionOutput {
    pub fn builder() -> PlanDefinitionActionOutputBuilder {
        PlanDefinitionActionOutputBuilder::default()
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

    pub fn title(&self) -> Option<&types::String> {
        self.title.as_ref()
    }

    pub fn requirement(&self) -> Option<&DataRequirement> {
        self.requirement.as_ref()
    }

    pub fn related_data(&self) -> Option<&types::String> {
        self.related_data.as_ref()
    }

    pub fn to_builder(&self) -> PlanDefinitionActionOutputBuilder {
        PlanDefinitionActionOutputBuilder {
            inner: self.clone(),
        }
    }

    fn validate(&self) -> Result<(), FhirError> {
        validation::require_value_or_children(self)
    }
}

#[derive(Debug, Clone, Default)]
pub struct PlanDefinitionActionOutputBuilder {
    inner: PlanDefinitionActionOutput,
}

impl PlanDefinitionActionOutputBuilder {
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

    pub fn title(mut self, title: impl Into<types::String>) -> Self {
        self.inner.title = Some(title.into());
        self
    }

    pub fn requirement(mut self, requirement: DataRequirement) -> Self {
        self.inner.requirement = Some(requirement);
        self
    }

    pub fn related_data(mut self, related_data: impl Into<types::String>) -> Self {
        self.inner.related_data = Some(related_data.into());
        self
    }

    pub fn build(self) -> Result<PlanDefinitionActionOutput, FhirError> {
        self.inner.validate()?;
        Ok(self.inner)
    }

    pub fn build_unchecked(self) -> PlanDefinitionActionOutput {
        self.inner
    }
}

impl Visitable for PlanDefinitionActionOutput {
    fn type_name(&self) -> &'static str {
        "PlanDefinition.action.output"
    }

    fn has_children(&self) -> bool {
        self.backbone.has_children()
            || self.title.is_some()
            || self.requirement.is_some()
            || self.related_data.is_some()
    }

    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        if visitor.pre_visit(self) {
            visitor.visit_start(name, index, self);
            if visitor.visit(name, index, self) {
                self.backbone.accept_children(visitor);
                accept_opt(&self.title, "title", visitor);
                accept_opt(&self.requirement, "requirement", visitor);
                accept_opt(&self.related_data, "relatedData", visitor);
            }
            visitor.visit_end(name, index, self);
            visitor.post_visit(self);
        }
    }
}

/// A relationship to another action in the same plan.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct PlanDefinitionActionRelatedAction {
    pub(crate) backbone: BackboneElement,
    pub(crate) target_id: Option<types::Id>,
    pub(crate) relationship: Option<ActionRelationshipType>,
    pub(crate) end_relationship: Option<ActionRelationshipType>,
    pub(crate) offset: Option<PlanDefinitionActionRelatedActionOffset>,
}

impl PlanDefinitionActionRelatedAction {
    pub fn builder() -> PlanDefinitionActionRelatedActionBuilder {
        PlanDefinitionActionRelatedActionBuilder::default()
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

    /// The element id of the related action. Required.
    pub fn target_id(&self) -> Option<&types::Id> {
        self.target_id.as_ref()
    }

    /// How this action relates to the target. Required.
    pub fn relationship(&self) -> Option<&ActionRelationshipType> {
        self.relationship.as_ref()
    }

    pub fn end_relationship(&self) -> Option<&ActionRelationshipType> {
        self.end_relationship.as_ref()
    }

    pub fn offset(&self) -> Option<&PlanDefinitionActionRelatedActionOffset> {
        self.offset.as_ref()
    }

    pub fn to_builder(&self) -> PlanDefinitionActionRelatedActionBuilder {
        PlanDefinitionActionRelatedActionBuilder {
            inner: self.clone(),
        }
    }

    fn validate(&self) -> Result<(), FhirError> {
        validation::require_non_null(&self.target_id, "targetId")?;
        validation::require_non_null(&self.relationship, "relationship")?;
        validation::require_value_or_children(self)
    }
}

#[derive(Debug, Clone, Default)]
pub struct PlanDefinitionActionRelatedActionBuilder {
    inner: PlanDefinitionActionRelatedAction,
}

impl PlanDefinitionActionRelatedActionBuilder {
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

    pub fn target_id(mut self, target_id: impl Into<types::Id>) -> Self {
        self.inner.target_id = Some(target_id.into());
        self
    }

    pub fn relationship(mut self, relationship: impl Into<ActionRelationshipType>) -> Self {
        self.inner.relationship = Some(relationship.into());
        self
    }

    pub fn end_relationship(mut self, end_relationship: impl Into<ActionRelationshipType>) -> Self {
        self.inner.end_relationship = Some(end_relationship.into());
        self
    }

    pub fn offset(mut self, offset: PlanDefinitionActionRelatedActionOffset) -> Self {
        self.inner.offset = Some(offset);
        self
    }

    pub fn build(self) -> Result<PlanDefinitionActionRelatedAction, FhirError> {
        self.inner.validate()?;
        Ok(self.inner)
    }

    pub fn build_unchecked(self) -> PlanDefinitionActionRelatedAction {
        self.inner
    }
}

impl Visitable for PlanDefinitionActionRelatedAction {
    fn type_name(&self) -> &'static str {
        "PlanDefinition.action.relatedAction"
    }

    fn has_children(&self) -> bool {
        self.backbone.has_children()
            || self.target_id.is_some()
            || self.relationship.is_some()
            || self.end_relationship.is_some()
            || self.offset.is_some()
    }

    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        if visitor.pre_visit(self) {
            visitor.visit_start(name, index, self);
            if visitor.visit(name, index, self) {
                self.backbone.accept_children(visitor);
                accept_opt(&self.target_id, "targetId", visitor);
                accept_opt(&self.relationship, "relationship", visitor);
                accept_opt(&self.end_relationship, "endRelationship", visitor);
                if let Some(offset) = &self.offset {
                    offset.accept(visitor);
                }
            }
            visitor.visit_end(name, index, self);
            visitor.post_visit(self);
        }
    }
}

/// Who should take part in the action.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct PlanDefinitionActionParticipant {
    pub(crate) backbone: BackboneElement,
    pub(crate) actor_id: Option<types::String>,
    pub(crate) r#type: Option<ActionParticipantType>,
    pub(crate) type_canonical: Option<types::Canonical>,
    pub(crate) type_reference: Option<Reference>,
    pub(crate) role: Option<CodeableConcept>,
    pub(crate) function: Option<CodeableConcept>,
}

impl PlanDefinitionActionParticipant {
    pub fn builder() -> PlanDefinitionActionParticipantBuilder {
        PlanDefinitionActionParticipantBuilder::default()
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

    /// The id of an actor defined at the plan level.
    pub fn actor_id(&self) -> Option<&types::String> {
        self.actor_id.as_ref()
    }

    pub fn r#type(&self) -> Option<&ActionParticipantType> {
        self.r#type.as_ref()
    }

    pub fn type_canonical(&self) -> Option<&types::Canonical> {
        self.type_canonical.as_ref()
    }

    pub fn type_reference(&self) -> Option<&Reference> {
        self.type_reference.as_ref()
    }

    pub fn role(&self) -> Option<&CodeableConcept> {
        self.role.as_ref()
    }

    pub fn function(&self) -> Option<&CodeableConcept> {
        self.function.as_ref()
    }

    pub fn to_builder(&self) -> PlanDefinitionActionParticipantBuilder {
        PlanDefinitionActionParticipantBuilder {
            inner: self.clone(),
        }
    }

    fn validate(&self) -> Result<(), FhirError> {
        validation::check_reference_type(
            self.type_reference.as_ref(),
            "typeReference",
            PARTICIPANT_REFERENCE_TYPES,
        )?;
        validation::require_value_or_children(self)
    }
}

#[derive(Debug, Clone, Default)]
pub struct PlanDefinitionActionParticipantBuilder {
    inner: PlanDefinitionActionParticipant,
}

impl PlanDefinitionActionParticipantBuilder {
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

    pub fn actor_id(mut self, actor_id: impl Into<types::String>) -> Self {
        self.inner.actor_id = Some(actor_id.into());
        self
    }

    pub fn r#type(mut self, r#type: impl Into<ActionParticipantType>) -> Self {
        self.inner.r#type = Some(r#type.into());
        self
    }

    pub fn type_canonical(mut self, type_canonical: impl Into<types::Canonical>) -> Self {
        self.inner.type_canonical = Some(type_canonical.into());
        self
    }

    pub fn type_reference(mut self, type_reference: Reference) -> Self {
        self.inner.type_reference = Some(type_reference);
        self
    }

    pub fn role(mut self, role: CodeableConcept) -> Self {
        self.inner.role = Some(role);
        self
    }

    pub fn function(mut self, function: CodeableConcept) -> Self {
        self.inner.function = Some(function);
        self
    }

    pub fn build(self) -> Result<PlanDefinitionActionParticipant, FhirError> {
        self.inner.validate()?;
        Ok(self.inner)
    }

    pub fn build_unchecked(self) -> PlanDefinitionActionParticipant {
        self.inner
    }
}

impl Visitable for PlanDefinitionActionParticipant {
    fn type_name(&self) -> &'static str {
        "PlanDefinition.action.participant"
    }

    fn has_children(&self) -> bool {
        self.backbone.has_children()
            || self.actor_id.is_some()
            || self.r#type.is_some()
            || self.type_canonical.is_some()
            || self.type_reference.is_some()
            || self.role.is_some()
            || self.function.is_some()
    }

    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        if visitor.pre_visit(self) {
            visitor.visit_start(name, index, self);
            if visitor.visit(name, index, self) {
                self.backbone.accept_children(visitor);
                accept_opt(&self.actor_id, "actorId", visitor);
                accept_opt(&self.r#type, "type", visitor);
                accept_opt(&self.type_canonical, "typeCanonical", visitor);
                accept_opt(&self.type_reference, "typeReference", visitor);
                accept_opt(&self.role, "role", visitor);
                accept_opt(&self.function, "function", visitor);
            }
            visitor.visit_end(name, index, self);
            visitor.post_visit(self);
        }
    }
}

/// A customization applied to the resource created by the action.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct PlanDefinitionActionDynamicValue {
    pub(crate) backbone: BackboneElement,
    pub(crate) path: Option<types::String>,
    pub(crate) expression: Option<Expression>,
}

impl PlanDefinitionActionDynamicValue {
    pub fn builder() -> PlanDefinitionActionDynamicValueBuilder {
        PlanDefinitionActionDynamicValueBuilder::default()
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

    pub fn path(&self) -> Option<&types::String> {
        self.path.as_ref()
    }

    pub fn expression(&self) -> Option<&Expression> {
        self.expression.as_ref()
    }

    pub fn to_builder(&self) -> PlanDefinitionActionDynamicValueBuilder {
        PlanDefinitionActionDynamicValueBuilder {
            inner: self.clone(),
        }
    }

    fn validate(&self) -> Result<(), FhirError> {
        validation::require_value_or_children(self)
    }
}

#[derive(Debug, Clone, Default)]
pub struct PlanDefinitionActionDynamicValueBuilder {
    inner: PlanDefinitionActionDynamicValue,
}

impl PlanDefinitionActionDynamicValueBuilder {
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

    pub fn path(mut self, path: impl Into<types::String>) -> Self {
        self.inner.path = Some(path.into());
        self
    }

    pub fn expression(mut self, expression: Expression) -> Self {
        self.inner.expression = Some(expression);
        self
    }

    pub fn build(self) -> Result<PlanDefinitionActionDynamicValue, FhirError> {
        self.inner.validate()?;
        Ok(self.inner)
    }

    pub fn build_unchecked(self) -> PlanDefinitionActionDynamicValue {
        self.inner
    }
}

impl Visitable for PlanDefinitionActionDynamicValue {
    fn type_name(&self) -> &'static str {
        "PlanDefinition.action.dynamicValue"
    }

    fn has_children(&self) -> bool {
        self.backbone.has_children() || self.path.is_some() || self.expression.is_some()
    }

    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        if visitor.pre_visit(self) {
            visitor.visit_start(name, index, self);
            if visitor.visit(name, index, self) {
                self.backbone.accept_children(visitor);
                accept_opt(&self.path, "path", visitor);
                accept_opt(&self.expression, "expression", visitor);
            }
            visitor.visit_end(name, index, self);
            visitor.post_visit(self);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r5::codes::{ActionRelationshipTypeValue, PublicationStatusValue};

    #[test]
    fn test_plan_definition_requires_status() {
        let err = PlanDefinition::builder()
            .name("OpioidPrescribingGuideline")
            .build()
            .unwrap_err();
        assert_eq!(err, FhirError::MissingRequiredField("status"));
    }

    #[test]
    fn test_subject_reference_allow_list() {
        let err = PlanDefinition::builder()
            .status(PublicationStatusValue::Draft)
            .subject(PlanDefinitionSubject::Reference(Reference::to(
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

        let ok = PlanDefinition::builder()
            .status(PublicationStatusValue::Draft)
            .subject(PlanDefinitionSubject::Reference(Reference::to("Group", "g1")))
            .build();
        assert!(ok.is_ok());
    }

    #[test]
    fn test_actor_requires_at_least_one_option() {
        let err = PlanDefinitionActor::builder()
            .title("Attending physician")
            .build()
            .unwrap_err();
        assert_eq!(err, FhirError::EmptyRequiredList("option"));
    }

    #[test]
    fn test_related_action_requires_target_and_relationship() {
        let err = PlanDefinitionActionRelatedAction::builder()
            .relationship(ActionRelationshipTypeValue::AfterEnd)
            .build()
            .unwrap_err();
        assert_eq!(err, FhirError::MissingRequiredField("targetId"));

        let err = PlanDefinitionActionRelatedAction::builder()
            .target_id("measure-bp")
            .build()
            .unwrap_err();
        assert_eq!(err, FhirError::MissingRequiredField("relationship"));
    }

    #[test]
    fn test_choice_field_names() {
        use lumen_fhir_support::ChoiceElement;

        let timing = PlanDefinitionActionTiming::Age(Age::default());
        assert_eq!(PlanDefinitionActionTiming::base_name(), "timing");
        assert_eq!(timing.field_name(), "timingAge");
        assert!(PlanDefinitionActionDefinition::possible_field_names()
            .contains(&"definitionCanonical"));
    }

    #[test]
    fn test_nested_actions_round_trip_through_builder() {
        let inner = PlanDefinitionAction::builder()
            .link_id("record-vitals")
            .title("Record vital signs")
            .build_unchecked();
        let outer = PlanDefinitionAction::builder()
            .title("Admission bundle")
            .action(inner)
            .build_unchecked();
        let plan = PlanDefinition::builder()
            .status(PublicationStatusValue::Active)
            .action(outer)
            .build()
            .unwrap();

        assert_eq!(plan.to_builder().build().unwrap(), plan);
        assert_eq!(
            plan.action()[0].action()[0].link_id().and_then(|l| l.value()),
            Some(&"record-vitals".to_string())
        );
    }
}
