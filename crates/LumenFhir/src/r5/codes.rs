//! Code element types with closed value sets.
//!
//! Each required-binding `code` field gets its own element type wrapping a
//! dedicated value enum; unknown code literals are rejected when resolved
//! through `from_code`, so an in-memory value can only hold a member of the
//! bound set.

code_type!(
    /// States of an account's lifecycle.
    AccountStatus, AccountStatusBuilder, AccountStatusValue, "AccountStatus", {
        Active => "active",
        Inactive => "inactive",
        EnteredInError => "entered-in-error",
        OnHold => "on-hold",
        Unknown => "unknown",
    }
);

code_type!(
    /// Lifecycle states of a definitional artifact.
    PublicationStatus, PublicationStatusBuilder, PublicationStatusValue, "PublicationStatus", {
        Draft => "draft",
        Active => "active",
        Retired => "retired",
        Unknown => "unknown",
    }
);

code_type!(
    /// How a narrative relates to its resource's structured data.
    NarrativeStatus, NarrativeStatusBuilder, NarrativeStatusValue, "NarrativeStatus", {
        Generated => "generated",
        Extensions => "extensions",
        Additional => "additional",
        Empty => "empty",
    }
);

code_type!(
    /// Purpose of an identifier within its assigning system.
    IdentifierUse, IdentifierUseBuilder, IdentifierUseValue, "IdentifierUse", {
        Usual => "usual",
        Official => "official",
        Temp => "temp",
        Secondary => "secondary",
        Old => "old",
    }
);

code_type!(
    /// How a quantity value should be understood.
    QuantityComparator, QuantityComparatorBuilder, QuantityComparatorValue, "QuantityComparator", {
        LessThan => "<",
        LessOrEquals => "<=",
        GreaterOrEquals => ">=",
        GreaterThan => ">",
        /// Sufficient to achieve the specified quantity.
        Ad => "ad",
    }
);

code_type!(
    /// Urgency of a request.
    RequestPriority, RequestPriorityBuilder, RequestPriorityValue, "RequestPriority", {
        Routine => "routine",
        Urgent => "urgent",
        Asap => "asap",
        Stat => "stat",
    }
);

code_type!(
    /// Stage of an action's lifecycle a condition applies to.
    ActionConditionKind, ActionConditionKindBuilder, ActionConditionKindValue, "ActionConditionKind", {
        Applicability => "applicability",
        Start => "start",
        Stop => "stop",
    }
);

code_type!(
    /// Temporal relationship between an action and its related action.
    ActionRelationshipType, ActionRelationshipTypeBuilder, ActionRelationshipTypeValue, "ActionRelationshipType", {
        BeforeStart => "before-start",
        Before => "before",
        BeforeEnd => "before-end",
        ConcurrentWithStart => "concurrent-with-start",
        Concurrent => "concurrent",
        ConcurrentWithEnd => "concurrent-with-end",
        AfterStart => "after-start",
        After => "after",
        AfterEnd => "after-end",
    }
);

code_type!(
    /// Kind of participant an action calls for.
    ActionParticipantType, ActionParticipantTypeBuilder, ActionParticipantTypeValue, "ActionParticipantType", {
        CareTeam => "careteam",
        Device => "device",
        Group => "group",
        HealthcareService => "healthcareservice",
        Location => "location",
        Organization => "organization",
        Patient => "patient",
        Practitioner => "practitioner",
        PractitionerRole => "practitionerrole",
        RelatedPerson => "relatedperson",
    }
);

code_type!(
    /// How a group of actions should be presented.
    ActionGroupingBehavior, ActionGroupingBehaviorBuilder, ActionGroupingBehaviorValue, "ActionGroupingBehavior", {
        VisualGroup => "visual-group",
        LogicalGroup => "logical-group",
        SentenceGroup => "sentence-group",
    }
);

code_type!(
    /// How many of a group's actions may be selected.
    ActionSelectionBehavior, ActionSelectionBehaviorBuilder, ActionSelectionBehaviorValue, "ActionSelectionBehavior", {
        Any => "any",
        All => "all",
        AllOrNone => "all-or-none",
        ExactlyOne => "exactly-one",
        AtMostOne => "at-most-one",
        OneOrMore => "one-or-more",
    }
);

code_type!(
    /// Whether an action is optional, and how overrides are handled.
    ActionRequiredBehavior, ActionRequiredBehaviorBuilder, ActionRequiredBehaviorValue, "ActionRequiredBehavior", {
        Must => "must",
        Could => "could",
        MustUnlessDocumented => "must-unless-documented",
    }
);

code_type!(
    /// Whether an action is pre-selected when presented.
    ActionPrecheckBehavior, ActionPrecheckBehaviorBuilder, ActionPrecheckBehaviorValue, "ActionPrecheckBehavior", {
        Yes => "yes",
        No => "no",
    }
);

code_type!(
    /// How many instances of an action may occur.
    ActionCardinalityBehavior, ActionCardinalityBehaviorBuilder, ActionCardinalityBehaviorValue, "ActionCardinalityBehavior", {
        Single => "single",
        Multiple => "multiple",
    }
);

code_type!(
    /// What kind of event fires a trigger.
    TriggerType, TriggerTypeBuilder, TriggerTypeValue, "TriggerType", {
        NamedEvent => "named-event",
        Periodic => "periodic",
        DataChanged => "data-changed",
        DataAdded => "data-added",
        DataModified => "data-modified",
        DataRemoved => "data-removed",
        DataAccessed => "data-accessed",
        DataAccessEnded => "data-access-ended",
    }
);

code_type!(
    /// Order of a data requirement's sort rule.
    SortDirection, SortDirectionBuilder, SortDirectionValue, "SortDirection", {
        Ascending => "ascending",
        Descending => "descending",
    }
);

code_type!(
    /// UCUM calendar units used by timing repeats.
    UnitsOfTime, UnitsOfTimeBuilder, UnitsOfTimeValue, "UnitsOfTime", {
        Second => "s",
        Minute => "min",
        Hour => "h",
        Day => "d",
        Week => "wk",
        Month => "mo",
        Year => "a",
    }
);

code_type!(
    DaysOfWeek, DaysOfWeekBuilder, DaysOfWeekValue, "DaysOfWeek", {
        Monday => "mon",
        Tuesday => "tue",
        Wednesday => "wed",
        Thursday => "thu",
        Friday => "fri",
        Saturday => "sat",
        Sunday => "sun",
    }
);

code_type!(
    /// How a related artifact bears on the current artifact.
    RelatedArtifactType, RelatedArtifactTypeBuilder, RelatedArtifactTypeValue, "RelatedArtifactType", {
        Documentation => "documentation",
        Justification => "justification",
        Citation => "citation",
        Predecessor => "predecessor",
        Successor => "successor",
        DerivedFrom => "derived-from",
        DependsOn => "depends-on",
        ComposedOf => "composed-of",
        PartOf => "part-of",
        Amends => "amends",
        AmendedWith => "amended-with",
        Appends => "appends",
        AppendedWith => "appended-with",
        Cites => "cites",
        CitedBy => "cited-by",
        CommentsOn => "comments-on",
        CommentIn => "comment-in",
        Contains => "contains",
        ContainedIn => "contained-in",
        Corrects => "corrects",
        CorrectionIn => "correction-in",
        Replaces => "replaces",
        ReplacedWith => "replaced-with",
        Retracts => "retracts",
        RetractedBy => "retracted-by",
        Signs => "signs",
        SimilarTo => "similar-to",
        SupportedWith => "supported-with",
        Supports => "supports",
        TransformedInto => "transformed-into",
        TransformedWith => "transformed-with",
        Transforms => "transforms",
    }
);

code_type!(
    ContactPointSystem, ContactPointSystemBuilder, ContactPointSystemValue, "ContactPointSystem", {
        Phone => "phone",
        Fax => "fax",
        Email => "email",
        Pager => "pager",
        Url => "url",
        Sms => "sms",
        Other => "other",
    }
);

code_type!(
    ContactPointUse, ContactPointUseBuilder, ContactPointUseValue, "ContactPointUse", {
        Home => "home",
        Work => "work",
        Temp => "temp",
        Old => "old",
        Mobile => "mobile",
    }
);

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_fhir_support::FhirError;
    use lumen_fhir_support::visitor::{Value, Visitable};

    #[test]
    fn test_code_literal_round_trip() {
        assert_eq!(AccountStatusValue::Active.as_str(), "active");
        assert_eq!(
            AccountStatusValue::from_code("entered-in-error"),
            Ok(AccountStatusValue::EnteredInError)
        );
        assert_eq!(AccountStatusValue::OnHold.to_string(), "on-hold");
    }

    #[test]
    fn test_unknown_code_is_rejected() {
        assert_eq!(
            AccountStatusValue::from_code("cancelled"),
            Err(FhirError::InvalidValue {
                type_name: "AccountStatus",
                value: "cancelled".to_string(),
            })
        );
    }

    #[test]
    fn test_code_element_carries_header_and_payload() {
        let status = AccountStatus::builder()
            .id("s1")
            .value(AccountStatusValue::Active)
            .build()
            .unwrap();
        assert_eq!(status.value(), Some(AccountStatusValue::Active));
        assert_eq!(status.as_str(), Some("active"));
        assert_eq!(status.id(), Some("s1"));
        assert_eq!(Visitable::value(&status), Some(Value::Code("active")));
        assert_eq!(status.type_name(), "AccountStatus");
    }

    #[test]
    fn test_empty_code_element_fails_to_build() {
        assert_eq!(
            AccountStatus::builder().build().unwrap_err(),
            FhirError::MissingValueOrChildren("AccountStatus")
        );
    }
}
