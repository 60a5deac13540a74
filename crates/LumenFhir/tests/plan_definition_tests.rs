use lumen_fhir_lib::r5::codes::{
    ActionConditionKindValue, ActionParticipantTypeValue, ActionRelationshipTypeValue,
    PublicationStatusValue, TriggerTypeValue,
};
use lumen_fhir_lib::r5::complex_types::{
    CodeableConcept, DataRequirement, Duration, Expression, Range, Reference, TriggerDefinition,
};
use lumen_fhir_lib::r5::primitives as types;
use lumen_fhir_lib::r5::resources::{
    PlanDefinition, PlanDefinitionAction, PlanDefinitionActionCondition,
    PlanDefinitionActionInput, PlanDefinitionActionOutput, PlanDefinitionActionParticipant,
    PlanDefinitionActionRelatedAction, PlanDefinitionActionRelatedActionOffset,
    PlanDefinitionActor, PlanDefinitionActorOption, PlanDefinitionGoal, PlanDefinitionGoalTarget,
    PlanDefinitionGoalTargetDetail, PlanDefinitionVersionAlgorithm,
};
use lumen_fhir_lib::support::constraint::ConstraintSeverity;
use lumen_fhir_lib::support::FhirError;

/// An event-condition-action rule close to the ones order-set authors write.
fn suicide_risk_protocol() -> PlanDefinition {
    let trigger = TriggerDefinition::builder()
        .r#type(TriggerTypeValue::NamedEvent)
        .name("encounter-start")
        .build()
        .unwrap();
    let condition = PlanDefinitionActionCondition::builder()
        .kind(ActionConditionKindValue::Applicability)
        .expression(
            Expression::builder()
                .language("text/fhirpath")
                .expression("%patient.age >= 18")
                .build_unchecked(),
        )
        .build()
        .unwrap();
    let action = PlanDefinitionAction::builder()
        .link_id("administer-phq9")
        .title("Administer PHQ-9 questionnaire")
        .goal_id("reduce-risk")
        .trigger(trigger)
        .condition(condition)
        .input(
            PlanDefinitionActionInput::builder()
                .title("Most recent PHQ-9 score")
                .requirement(
                    DataRequirement::builder()
                        .r#type("Observation")
                        .build()
                        .unwrap(),
                )
                .build()
                .unwrap(),
        )
        .output(
            PlanDefinitionActionOutput::builder()
                .title("Completed questionnaire response")
                .build()
                .unwrap(),
        )
        .build()
        .unwrap();

    PlanDefinition::builder()
        .id("suicide-risk-protocol")
        .url("http://example.org/fhir/PlanDefinition/suicide-risk-protocol")
        .version("1.2.0")
        .version_algorithm(PlanDefinitionVersionAlgorithm::String(types::String::of(
            "semver",
        )))
        .name("SuicideRiskProtocol")
        .status(PublicationStatusValue::Active)
        .goal(
            PlanDefinitionGoal::builder()
                .id("reduce-risk")
                .description(
                    CodeableConcept::builder()
                        .text("Reduce suicide risk score")
                        .build_unchecked(),
                )
                .target(
                    PlanDefinitionGoalTarget::builder()
                        .measure(CodeableConcept::builder().text("PHQ-9").build_unchecked())
                        .detail(PlanDefinitionGoalTargetDetail::Range(
                            Range::builder().build_unchecked(),
                        ))
                        .build()
                        .unwrap(),
                )
                .build()
                .unwrap(),
        )
        .actor(
            PlanDefinitionActor::builder()
                .title("Behavioral health clinician")
                .option(
                    PlanDefinitionActorOption::builder()
                        .r#type(ActionParticipantTypeValue::Practitioner)
                        .build()
                        .unwrap(),
                )
                .build()
                .unwrap(),
        )
        .action(action)
        .build()
        .unwrap()
}

#[test]
fn test_full_protocol_builds_and_reads_back() {
    let plan = suicide_risk_protocol();
    assert_eq!(plan.id(), Some("suicide-risk-protocol"));
    assert_eq!(plan.status().and_then(|s| s.as_str()), Some("active"));
    assert_eq!(plan.goal().len(), 1);
    assert_eq!(plan.action().len(), 1);

    let action = &plan.action()[0];
    assert_eq!(
        action.link_id().and_then(|l| l.value()),
        Some(&"administer-phq9".to_string())
    );
    assert_eq!(action.goal_id()[0].value(), Some(&"reduce-risk".to_string()));
    assert_eq!(action.condition()[0].kind().and_then(|k| k.as_str()), Some("applicability"));
    assert_eq!(action.input().len(), 1);
    assert_eq!(action.output().len(), 1);
}

#[test]
fn test_round_trip_through_builder_preserves_equality() {
    let plan = suicide_risk_protocol();
    assert_eq!(plan.to_builder().build().unwrap(), plan);
}

#[test]
fn test_goal_requires_description() {
    let err = PlanDefinitionGoal::builder()
        .category(CodeableConcept::builder().text("treatment").build_unchecked())
        .build()
        .unwrap_err();
    assert_eq!(err, FhirError::MissingRequiredField("description"));
}

#[test]
fn test_actor_option_reference_allow_list() {
    let err = PlanDefinitionActorOption::builder()
        .type_reference(Reference::to("Medication", "m1"))
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        FhirError::DisallowedReferenceTarget {
            field: "typeReference",
            target: "Medication".to_string(),
        }
    );

    let option = PlanDefinitionActorOption::builder()
        .type_reference(Reference::to("PractitionerRole", "pr1"))
        .build();
    assert!(option.is_ok());
}

#[test]
fn test_action_participant_reference_allow_list() {
    let err = PlanDefinitionActionParticipant::builder()
        .type_reference(Reference::to("Substance", "s1"))
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        FhirError::DisallowedReferenceTarget {
            field: "typeReference",
            target: "Substance".to_string(),
        }
    );
}

#[test]
fn test_condition_requires_kind() {
    let err = PlanDefinitionActionCondition::builder()
        .expression(Expression::builder().expression("true").build_unchecked())
        .build()
        .unwrap_err();
    assert_eq!(err, FhirError::MissingRequiredField("kind"));
}

#[test]
fn test_related_action_with_offset() {
    let related = PlanDefinitionActionRelatedAction::builder()
        .target_id("administer-phq9")
        .relationship(ActionRelationshipTypeValue::After)
        .offset(PlanDefinitionActionRelatedActionOffset::Duration(
            Duration::builder().value(rust_decimal::Decimal::from(30)).unit("min").build_unchecked(),
        ))
        .build()
        .unwrap();
    assert_eq!(
        related.relationship().and_then(|r| r.as_str()),
        Some("after")
    );
    assert!(related.offset().is_some());
}

#[test]
fn test_empty_backbone_is_rejected() {
    let err = PlanDefinitionActionInput::builder().build().unwrap_err();
    assert_eq!(
        err,
        FhirError::MissingValueOrChildren("PlanDefinition.action.input")
    );
}

#[test]
fn test_declared_constraints() {
    let pdf_0 = PlanDefinition::CONSTRAINTS.iter().find(|c| c.key == "pdf-0").unwrap();
    assert_eq!(pdf_0.severity, ConstraintSeverity::Warning);
    assert!(PlanDefinition::CONSTRAINTS.iter().any(|c| c.key == "pld-4"));
}
