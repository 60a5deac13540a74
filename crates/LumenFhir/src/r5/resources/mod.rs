//! Generated resource types.

mod account;
mod plan_definition;

pub use account::{
    Account, AccountBalance, AccountBalanceBuilder, AccountBuilder, AccountCoverage,
    AccountCoverageBuilder, AccountDiagnosis, AccountDiagnosisBuilder, AccountGuarantor,
    AccountGuarantorBuilder, AccountProcedure, AccountProcedureBuilder, AccountRelatedAccount,
    AccountRelatedAccountBuilder,
};
pub use plan_definition::{
    PlanDefinition, PlanDefinitionAction, PlanDefinitionActionBuilder,
    PlanDefinitionActionCondition, PlanDefinitionActionConditionBuilder,
    PlanDefinitionActionDefinition, PlanDefinitionActionDynamicValue,
    PlanDefinitionActionDynamicValueBuilder, PlanDefinitionActionInput,
    PlanDefinitionActionInputBuilder, PlanDefinitionActionOutput,
    PlanDefinitionActionOutputBuilder, PlanDefinitionActionParticipant,
    PlanDefinitionActionParticipantBuilder, PlanDefinitionActionRelatedAction,
    PlanDefinitionActionRelatedActionBuilder, PlanDefinitionActionRelatedActionOffset,
    PlanDefinitionActionSubject, PlanDefinitionActionTiming, PlanDefinitionActor,
    PlanDefinitionActorBuilder, PlanDefinitionActorOption, PlanDefinitionActorOptionBuilder,
    PlanDefinitionAsNeeded, PlanDefinitionBuilder, PlanDefinitionGoal, PlanDefinitionGoalBuilder,
    PlanDefinitionGoalTarget, PlanDefinitionGoalTargetBuilder, PlanDefinitionGoalTargetDetail,
    PlanDefinitionSubject, PlanDefinitionVersionAlgorithm,
};

use lumen_fhir_support::visitor::{Visitable, Visitor};

/// The closed set of resource types in this model; what a resource can
/// contain, and what generic consumers dispatch over.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Resource {
    Account(Account),
    PlanDefinition(PlanDefinition),
}

impl Resource {
    /// The logical id of the wrapped resource.
    pub fn id(&self) -> Option<&str> {
        match self {
            Resource::Account(resource) => resource.id(),
            Resource::PlanDefinition(resource) => resource.id(),
        }
    }
}

impl From<Account> for Resource {
    fn from(resource: Account) -> Self {
        Resource::Account(resource)
    }
}

impl From<PlanDefinition> for Resource {
    fn from(resource: PlanDefinition) -> Self {
        Resource::PlanDefinition(resource)
    }
}

impl Visitable for Resource {
    fn type_name(&self) -> &'static str {
        match self {
            Resource::Account(resource) => resource.type_name(),
            Resource::PlanDefinition(resource) => resource.type_name(),
        }
    }

    fn has_children(&self) -> bool {
        match self {
            Resource::Account(resource) => resource.has_children(),
            Resource::PlanDefinition(resource) => resource.has_children(),
        }
    }

    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        match self {
            Resource::Account(resource) => resource.accept(name, index, visitor),
            Resource::PlanDefinition(resource) => resource.accept(name, index, visitor),
        }
    }
}
