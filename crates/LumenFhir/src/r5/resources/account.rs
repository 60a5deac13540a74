use lumen_fhir_support::constraint::{
    Binding, BindingStrength, ConstraintSeverity, Invariant,
};
use lumen_fhir_support::FhirError;
use lumen_fhir_support::validation;
use lumen_fhir_support::visitor::{accept_all, accept_opt, Visitable, Visitor};

use crate::r5::codes::AccountStatus;
use crate::r5::complex_types::{
    CodeableConcept, CodeableReference, Extension, Identifier, Meta, Money, Narrative, Period,
    Reference,
};
use crate::r5::element::{BackboneElement, DomainResource};
use crate::r5::primitives as types;
use crate::r5::resources::Resource;

/// A financial tool for tracking value accrued for a particular purpose.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Account {
    pub(crate) resource: DomainResource,
    pub(crate) identifier: Vec<Identifier>,
    pub(crate) status: Option<AccountStatus>,
    pub(crate) billing_status: Option<CodeableConcept>,
    pub(crate) r#type: Option<CodeableConcept>,
    pub(crate) name: Option<types::String>,
    pub(crate) subject: Vec<Reference>,
    pub(crate) service_period: Option<Period>,
    pub(crate) coverage: Vec<AccountCoverage>,
    pub(crate) owner: Option<Reference>,
    pub(crate) description: Option<types::Markdown>,
    pub(crate) guarantor: Vec<AccountGuarantor>,
    pub(crate) diagnosis: Vec<AccountDiagnosis>,
    pub(crate) procedure: Vec<AccountProcedure>,
    pub(crate) related_account: Vec<AccountRelatedAccount>,
    pub(crate) currency: Option<CodeableConcept>,
    pub(crate) balance: Vec<AccountBalance>,
    pub(crate) calculated_at: Option<types::Instant>,
}

impl Account {
    /// Declared FHIRPath invariants, carried for external evaluation.
    pub const CONSTRAINTS: &'static [Invariant] = &[
        Invariant {
            key: "act-1",
            severity: ConstraintSeverity::Rule,
            human: "The dateOfDiagnosis is not valid when using a reference to a diagnosis",
            expression: "condition.reference.empty().not() implies dateOfDiagnosis.empty()",
            path: "Account.diagnosis",
            source: "http://hl7.org/fhir/StructureDefinition/Account",
        },
        Invariant {
            key: "act-2",
            severity: ConstraintSeverity::Rule,
            human: "The dateOfService is not valid when using a reference to a procedure",
            expression: "code.reference.empty().not() implies dateOfService.empty()",
            path: "Account.procedure",
            source: "http://hl7.org/fhir/StructureDefinition/Account",
        },
        Invariant {
            key: "account-3",
            severity: ConstraintSeverity::Warning,
            human: "SHOULD contain a code from value set http://hl7.org/fhir/ValueSet/encounter-diagnosis-use",
            expression: "$this.memberOf('http://hl7.org/fhir/ValueSet/encounter-diagnosis-use', 'preferred')",
            path: "Account.diagnosis.type",
            source: "http://hl7.org/fhir/StructureDefinition/Account",
        },
        Invariant {
            key: "account-4",
            severity: ConstraintSeverity::Warning,
            human: "SHALL, if possible, contain a code from value set http://hl7.org/fhir/ValueSet/account-aggregate",
            expression: "$this.memberOf('http://hl7.org/fhir/ValueSet/account-aggregate', 'extensible')",
            path: "Account.balance.aggregate",
            source: "http://hl7.org/fhir/StructureDefinition/Account",
        },
        Invariant {
            key: "account-5",
            severity: ConstraintSeverity::Warning,
            human: "SHALL, if possible, contain a code from value set http://hl7.org/fhir/ValueSet/account-balance-term",
            expression: "$this.memberOf('http://hl7.org/fhir/ValueSet/account-balance-term', 'extensible')",
            path: "Account.balance.term",
            source: "http://hl7.org/fhir/StructureDefinition/Account",
        },
    ];

    /// Terminology bindings, carried for external resolution.
    pub const BINDINGS: &'static [Binding] = &[
        Binding {
            name: "AccountStatus",
            path: "Account.status",
            strength: BindingStrength::Required,
            value_set: "http://hl7.org/fhir/ValueSet/account-status|5.0.0",
        },
        Binding {
            name: "AccountBillingStatus",
            path: "Account.billingStatus",
            strength: BindingStrength::Example,
            value_set: "http://hl7.org/fhir/ValueSet/account-billing-status",
        },
        Binding {
            name: "AccountType",
            path: "Account.type",
            strength: BindingStrength::Example,
            value_set: "http://hl7.org/fhir/ValueSet/account-type",
        },
        Binding {
            name: "AccountCurrency",
            path: "Account.currency",
            strength: BindingStrength::Required,
            value_set: "http://hl7.org/fhir/ValueSet/currencies|5.0.0",
        },
        Binding {
            name: "DiagnosisUse",
            path: "Account.diagnosis.type",
            strength: BindingStrength::Preferred,
            value_set: "http://hl7.org/fhir/ValueSet/encounter-diagnosis-use",
        },
        Binding {
            name: "AccountAggregate",
            path: "Account.balance.aggregate",
            strength: BindingStrength::Extensible,
            value_set: "http://hl7.org/fhir/ValueSet/account-aggregate",
        },
        Binding {
            name: "AccountBalanceTerm",
            path: "Account.balance.term",
            strength: BindingStrength::Extensible,
            value_set: "http://hl7.org/fhir/ValueSet/account-balance-term",
        },
    ];

    pub fn builder() -> AccountBuilder {
        AccountBuilder::default()
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

    pub fn identifier(&self) -> &[Identifier] {
        &self.identifier
    }

    /// The account status. Required.
    pub fn status(&self) -> Option<&AccountStatus> {
        self.status.as_ref()
    }

    pub fn billing_status(&self) -> Option<&CodeableConcept> {
        self.billing_status.as_ref()
    }

    pub fn r#type(&self) -> Option<&CodeableConcept> {
        self.r#type.as_ref()
    }

    pub fn name(&self) -> Option<&types::String> {
        self.name.as_ref()
    }

    /// The entities the account is tracking value for.
    pub fn subject(&self) -> &[Reference] {
        &self.subject
    }

    pub fn service_period(&self) -> Option<&Period> {
        self.service_period.as_ref()
    }

    pub fn coverage(&self) -> &[AccountCoverage] {
        &self.coverage
    }

    pub fn owner(&self) -> Option<&Reference> {
        self.owner.as_ref()
    }

    pub fn description(&self) -> Option<&types::Markdown> {
        self.description.as_ref()
    }

    pub fn guarantor(&self) -> &[AccountGuarantor] {
        &self.guarantor
    }

    pub fn diagnosis(&self) -> &[AccountDiagnosis] {
        &self.diagnosis
    }

    pub fn procedure(&self) -> &[AccountProcedure] {
        &self.procedure
    }

    pub fn related_account(&self) -> &[AccountRelatedAccount] {
        &self.related_account
    }

    pub fn currency(&self) -> Option<&CodeableConcept> {
        self.currency.as_ref()
    }

    pub fn balance(&self) -> &[AccountBalance] {
        &self.balance
    }

    pub fn calculated_at(&self) -> Option<&types::Instant> {
        self.calculated_at.as_ref()
    }

    pub fn to_builder(&self) -> AccountBuilder {
        AccountBuilder {
            inner: self.clone(),
        }
    }

    fn validate(&self) -> Result<(), FhirError> {
        validation::require_non_null(&self.status, "status")?;
        validation::check_reference_types(
            &self.subject,
            "subject",
            &[
                "Patient",
                "Device",
                "Practitioner",
                "PractitionerRole",
                "Location",
                "HealthcareService",
                "Organization",
            ],
        )?;
        validation::check_reference_type(self.owner.as_ref(), "owner", &["Organization"])
    }
}

#[derive(Debug, Clone, Default)]
pub struct AccountBuilder {
    inner: Account,
}

impl AccountBuilder {
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

    pub fn identifier(mut self, identifier: Identifier) -> Self {
        self.inner.identifier.push(identifier);
        self
    }

    pub fn set_identifier(mut self, identifier: Vec<Identifier>) -> Self {
        self.inner.identifier = identifier;
        self
    }

    pub fn status(mut self, status: impl Into<AccountStatus>) -> Self {
        self.inner.status = Some(status.into());
        self
    }

    pub fn billing_status(mut self, billing_status: CodeableConcept) -> Self {
        self.inner.billing_status = Some(billing_status);
        self
    }

    pub fn r#type(mut self, r#type: CodeableConcept) -> Self {
        self.inner.r#type = Some(r#type);
        self
    }

    pub fn name(mut self, name: impl Into<types::String>) -> Self {
        self.inner.name = Some(name.into());
        self
    }

    pub fn subject(mut self, subject: Reference) -> Self {
        self.inner.subject.push(subject);
        self
    }

    pub fn set_subject(mut self, subject: Vec<Reference>) -> Self {
        self.inner.subject = subject;
        self
    }

    pub fn service_period(mut self, service_period: Period) -> Self {
        self.inner.service_period = Some(service_period);
        self
    }

    pub fn coverage(mut self, coverage: AccountCoverage) -> Self {
        self.inner.coverage.push(coverage);
        self
    }

    pub fn set_coverage(mut self, coverage: Vec<AccountCoverage>) -> Self {
        self.inner.coverage = coverage;
        self
    }

    pub fn owner(mut self, owner: Reference) -> Self {
        self.inner.owner = Some(owner);
        self
    }

    pub fn description(mut self, description: impl Into<types::Markdown>) -> Self {
        self.inner.description = Some(description.into());
        self
    }

    pub fn guarantor(mut self, guarantor: AccountGuarantor) -> Self {
        self.inner.guarantor.push(guarantor);
        self
    }

    pub fn set_guarantor(mut self, guarantor: Vec<AccountGuarantor>) -> Self {
        self.inner.guarantor = guarantor;
        self
    }

    pub fn diagnosis(mut self, diagnosis: AccountDiagnosis) -> Self {
        self.inner.diagnosis.push(diagnosis);
        self
    }

    pub fn set_diagnosis(mut self, diagnosis: Vec<AccountDiagnosis>) -> Self {
        self.inner.diagnosis = diagnosis;
        self
    }

    pub fn procedure(mut self, procedure: AccountProcedure) -> Self {
        self.inner.procedure.push(procedure);
        self
    }

    pub fn set_procedure(mut self, procedure: Vec<AccountProcedure>) -> Self {
        self.inner.procedure = procedure;
        self
    }

    pub fn related_account(mut self, related_account: AccountRelatedAccount) -> Self {
        self.inner.related_account.push(related_account);
        self
    }

    pub fn set_related_account(mut self, related_account: Vec<AccountRelatedAccount>) -> Self {
        self.inner.related_account = related_account;
        self
    }

    pub fn currency(mut self, currency: CodeableConcept) -> Self {
        self.inner.currency = Some(currency);
        self
    }

    pub fn balance(mut self, balance: AccountBalance) -> Self {
        self.inner.balance.push(balance);
        self
    }

    pub fn set_balance(mut self, balance: Vec<AccountBalance>) -> Self {
        self.inner.balance = balance;
        self
    }

    pub fn calculated_at(mut self, calculated_at: impl Into<types::Instant>) -> Self {
        self.inner.calculated_at = Some(calculated_at.into());
        self
    }

    pub fn build(self) -> Result<Account, FhirError> {
        self.inner.validate()?;
        Ok(self.inner)
    }

    pub fn build_unchecked(self) -> Account {
        self.inner
    }
}

impl Visitable for Account {
    fn type_name(&self) -> &'static str {
        "Account"
    }

    fn has_children(&self) -> bool {
        self.resource.has_children()
            || !self.identifier.is_empty()
            || self.status.is_some()
            || self.billing_status.is_some()
            || self.r#type.is_some()
            || self.name.is_some()
            || !self.subject.is_empty()
            || self.service_period.is_some()
            || !self.coverage.is_empty()
            || self.owner.is_some()
            || self.description.is_some()
            || !self.guarantor.is_empty()
            || !self.diagnosis.is_empty()
            || !self.procedure.is_empty()
            || !self.related_account.is_empty()
            || self.currency.is_some()
            || !self.balance.is_empty()
            || self.calculated_at.is_some()
    }

    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        if visitor.pre_visit(self) {
            visitor.visit_start(name, index, self);
            if visitor.visit(name, index, self) {
                self.resource.accept_children(visitor);
                accept_all(&self.identifier, "identifier", visitor);
                accept_opt(&self.status, "status", visitor);
                accept_opt(&self.billing_status, "billingStatus", visitor);
                accept_opt(&self.r#type, "type", visitor);
                accept_opt(&self.name, "name", visitor);
                accept_all(&self.subject, "subject", visitor);
                accept_opt(&self.service_period, "servicePeriod", visitor);
                accept_all(&self.coverage, "coverage", visitor);
                accept_opt(&self.owner, "owner", visitor);
                accept_opt(&self.description, "description", visitor);
                accept_all(&self.guarantor, "guarantor", visitor);
                accept_all(&self.diagnosis, "diagnosis", visitor);
                accept_all(&self.procedure, "procedure", visitor);
                accept_all(&self.related_account, "relatedAccount", visitor);
                accept_opt(&self.currency, "currency", visitor);
                accept_all(&self.balance, "balance", visitor);
                accept_opt(&self.calculated_at, "calculatedAt", visitor);
            }
            visitor.visit_end(name, index, self);
            visitor.post_visit(self);
        }
    }
}

/// An insurance coverage that may pay into this account.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct AccountCoverage {
    pub(crate) backbone: BackboneElement,
    pub(crate) coverage: Option<Reference>,
    pub(crate) priority: Option<types::PositiveInt>,
}

impl AccountCoverage {
    pub fn builder() -> AccountCoverageBuilder {
        AccountCoverageBuilder::default()
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

    /// The coverage resource. Required.
    pub fn coverage(&self) -> Option<&Reference> {
        self.coverage.as_ref()
    }

    pub fn priority(&self) -> Option<&types::PositiveInt> {
        self.priority.as_ref()
    }

    pub fn to_builder(&self) -> AccountCoverageBuilder {
        AccountCoverageBuilder {
            inner: self.clone(),
        }
    }

    fn validate(&self) -> Result<(), FhirError> {
        validation::require_non_null(&self.coverage, "coverage")?;
        validation::check_reference_type(self.coverage.as_ref(), "coverage", &["Coverage"])?;
        validation::require_value_or_children(self)
    }
}

#[derive(Debug, Clone, Default)]
pub struct AccountCoverageBuilder {
    inner: AccountCoverage,
}

impl AccountCoverageBuilder {
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

    pub fn coverage(mut self, coverage: Reference) -> Self {
        self.inner.coverage = Some(coverage);
        self
    }

    pub fn priority(mut self, priority: impl Into<types::PositiveInt>) -> Self {
        self.inner.priority = Some(priority.into());
        self
    }

    pub fn build(self) -> Result<AccountCoverage, FhirError> {
        self.inner.validate()?;
        Ok(self.inner)
    }

    pub fn build_unchecked(self) -> AccountCoverage {
        self.inner
    }
}

impl Visitable for AccountCoverage {
    fn type_name(&self) -> &'static str {
        "Account.coverage"
    }

    fn has_children(&self) -> bool {
        self.backbone.has_children() || self.coverage.is_some() || self.priority.is_some()
    }

    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        if visitor.pre_visit(self) {
            visitor.visit_start(name, index, self);
            if visitor.visit(name, index, self) {
                self.backbone.accept_children(visitor);
                accept_opt(&self.coverage, "coverage", visitor);
                accept_opt(&self.priority, "priority", visitor);
            }
            visitor.visit_end(name, index, self);
            visitor.post_visit(self);
        }
    }
}

/// A party responsible for balancing the account if other payers default.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct AccountGuarantor {
    pub(crate) backbone: BackboneElement,
    pub(crate) party: Option<Reference>,
    pub(crate) on_hold: Option<types::Boolean>,
    pub(crate) period: Option<Period>,
}

impl AccountGuarantor {
    pub fn builder() -> AccountGuarantorBuilder {
        AccountGuarantorBuilder::default()
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

    /// The responsible entity. Required.
    pub fn party(&self) -> Option<&Reference> {
        self.party.as_ref()
    }

    pub fn on_hold(&self) -> Option<&types::Boolean> {
        self.on_hold.as_ref()
    }

    pub fn period(&self) -> Option<&Period> {
        self.period.as_ref()
    }

    pub fn to_builder(&self) -> AccountGuarantorBuilder {
        AccountGuarantorBuilder {
            inner: self.clone(),
        }
    }

    fn validate(&self) -> Result<(), FhirError> {
        validation::require_non_null(&self.party, "party")?;
        validation::check_reference_type(
            self.party.as_ref(),
            "party",
            &["Patient", "RelatedPerson", "Organization"],
        )?;
        validation::require_value_or_children(self)
    }
}

#[derive(Debug, Clone, Default)]
pub struct AccountGuarantorBuilder {
    inner: AccountGuarantor,
}

impl AccountGuarantorBuilder {
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

    pub fn party(mut self, party: Reference) -> Self {
        self.inner.party = Some(party);
        self
    }

    pub fn on_hold(mut self, on_hold: impl Into<types::Boolean>) -> Self {
        self.inner.on_hold = Some(on_hold.into());
        self
    }

    pub fn period(mut self, period: Period) -> Self {
        self.inner.period = Some(period);
        self
    }

    pub fn build(self) -> Result<AccountGuarantor, FhirError> {
        self.inner.validate()?;
        Ok(self.inner)
    }

    pub fn build_unchecked(self) -> AccountGuarantor {
        self.inner
    }
}

impl Visitable for AccountGuarantor {
    fn type_name(&self) -> &'static str {
        "Account.guarantor"
    }

    fn has_children(&self) -> bool {
        self.backbone.has_children()
            || self.party.is_some()
            || self.on_hold.is_some()
            || self.period.is_some()
    }

    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        if visitor.pre_visit(self) {
            visitor.visit_start(name, index, self);
            if visitor.visit(name, index, self) {
                self.backbone.accept_children(visitor);
                accept_opt(&self.party, "party", visitor);
                accept_opt(&self.on_hold, "onHold", visitor);
                accept_opt(&self.period, "period", visitor);
            }
            visitor.visit_end(name, index, self);
            visitor.post_visit(self);
        }
    }
}

/// A diagnosis relevant to the account.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct AccountDiagnosis {
    pub(crate) backbone: BackboneElement,
    pub(crate) sequence: Option<types::PositiveInt>,
    pub(crate) condition: Option<CodeableReference>,
    pub(crate) date_of_diagnosis: Option<types::DateTime>,
    pub(crate) r#type: Vec<CodeableConcept>,
    pub(crate) on_admission: Option<types::Boolean>,
    pub(crate) package_code: Vec<CodeableConcept>,
}

impl AccountDiagnosis {
    pub fn builder() -> AccountDiagnosisBuilder {
        AccountDiagnosisBuilder::default()
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

    pub fn sequence(&self) -> Option<&types::PositiveInt> {
        self.sequence.as_ref()
    }

    /// The diagnosis, as code or reference. Required.
    pub fn condition(&self) -> Option<&CodeableReference> {
        self.condition.as_ref()
    }

    pub fn date_of_diagnosis(&self) -> Option<&types::DateTime> {
        self.date_of_diagnosis.as_ref()
    }

    pub fn r#type(&self) -> &[CodeableConcept] {
        &self.r#type
    }

    pub fn on_admission(&self) -> Option<&types::Boolean> {
        self.on_admission.as_ref()
    }

    pub fn package_code(&self) -> &[CodeableConcept] {
        &self.package_code
    }

    pub fn to_builder(&self) -> AccountDiagnosisBuilder {
        AccountDiagnosisBuilder {
            inner: self.clone(),
        }
    }

    fn validate(&self) -> Result<(), FhirError> {
        validation::require_non_null(&self.condition, "condition")?;
        validation::require_value_or_children(self)
    }
}

#[derive(Debug, Clone, Default)]
pub struct AccountDiagnosisBuilder {
    inner: AccountDiagnosis,
}

impl AccountDiagnosisBuilder {
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

    pub fn sequence(mut self, sequence: impl Into<types::PositiveInt>) -> Self {
        self.inner.sequence = Some(sequence.into());
        self
    }

    pub fn condition(mut self, condition: CodeableReference) -> Self {
        self.inner.condition = Some(condition);
        self
    }

    pub fn date_of_diagnosis(mut self, date_of_diagnosis: impl Into<types::DateTime>) -> Self {
        self.inner.date_of_diagnosis = Some(date_of_diagnosis.into());
        self
    }

    pub fn r#type(mut self, r#type: CodeableConcept) -> Self {
        self.inner.r#type.push(r#type);
        self
    }

    pub fn set_type(mut self, r#type: Vec<CodeableConcept>) -> Self {
        self.inner.r#type = r#type;
        self
    }

    pub fn on_admission(mut self, on_admission: impl Into<types::Boolean>) -> Self {
        self.inner.on_admission = Some(on_admission.into());
        self
    }

    pub fn package_code(mut self, package_code: CodeableConcept) -> Self {
        self.inner.package_code.push(package_code);
        self
    }

    pub fn set_package_code(mut self, package_code: Vec<CodeableConcept>) -> Self {
        self.inner.package_code = package_code;
        self
    }

    pub fn build(self) -> Result<AccountDiagnosis, FhirError> {
        self.inner.validate()?;
        Ok(self.inner)
    }

    pub fn build_unchecked(self) -> AccountDiagnosis {
        self.inner
    }
}

impl Visitable for AccountDiagnosis {
    fn type_name(&self) -> &'static str {
        "Account.diagnosis"
    }

    fn has_children(&self) -> bool {
        self.backbone.has_children()
            || self.sequence.is_some()
            || self.condition.is_some()
            || self.date_of_diagnosis.is_some()
            || !self.r#type.is_empty()
            || self.on_admission.is_some()
            || !self.package_code.is_empty()
    }

    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        if visitor.pre_visit(self) {
            visitor.visit_start(name, index, self);
            if visitor.visit(name, index, self) {
                self.backbone.accept_children(visitor);
                accept_opt(&self.sequence, "sequence", visitor);
                accept_opt(&self.condition, "condition", visitor);
                accept_opt(&self.date_of_diagnosis, "dateOfDiagnosis", visitor);
                accept_all(&self.r#type, "type", visitor);
                accept_opt(&self.on_admission, "onAdmission", visitor);
                accept_all(&self.package_code, "packageCode", visitor);
            }
            visitor.visit_end(name, index, self);
            visitor.post_visit(self);
        }
    }
}

/// A procedure relevant to the account.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct AccountProcedure {
    pub(crate) backbone: BackboneElement,
    pub(crate) sequence: Option<types::PositiveInt>,
    pub(crate) code: Option<CodeableReference>,
    pub(crate) date_of_service: Option<types::DateTime>,
    pub(crate) r#type: Vec<CodeableConcept>,
    pub(crate) package_code: Vec<CodeableConcept>,
    pub(crate) device: Vec<Reference>,
}

impl AccountProcedure {
    pub fn builder() -> AccountProcedureBuilder {
        AccountProcedureBuilder::default()
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

    pub fn sequence(&self) -> Option<&types::PositiveInt> {
        self.sequence.as_ref()
    }

    /// The procedure, as code or reference. Required.
    pub fn code(&self) -> Option<&CodeableReference> {
        self.code.as_ref()
    }

    pub fn date_of_service(&self) -> Option<&types::DateTime> {
        self.date_of_service.as_ref()
    }

    pub fn r#type(&self) -> &[CodeableConcept] {
        &self.r#type
    }

    pub fn package_code(&self) -> &[CodeableConcept] {
        &self.package_code
    }

    pub fn device(&self) -> &[Reference] {
        &self.device
    }

    pub fn to_builder(&self) -> AccountProcedureBuilder {
        AccountProcedureBuilder {
            inner: self.clone(),
        }
    }

    fn validate(&self) -> Result<(), FhirError> {
        validation::require_non_null(&self.code, "code")?;
        validation::check_reference_types(&self.device, "device", &["Device"])?;
        validation::require_value_or_children(self)
    }
}

#[derive(Debug, Clone, Default)]
pub struct AccountProcedureBuilder {
    inner: AccountProcedure,
}

impl AccountProcedureBuilder {
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

    pub fn sequence(mut self, sequence: impl Into<types::PositiveInt>) -> Self {
        self.inner.sequence = Some(sequence.into());
        self
    }

    pub fn code(mut self, code: CodeableReference) -> Self {
        self.inner.code = Some(code);
        self
    }

    pub fn date_of_service(mut self, date_of_service: impl Into<types::DateTime>) -> Self {
        self.inner.date_of_service = Some(date_of_service.into());
        self
    }

    pub fn r#type(mut self, r#type: CodeableConcept) -> Self {
        self.inner.r#type.push(r#type);
        self
    }

    pub fn set_type(mut self, r#type: Vec<CodeableConcept>) -> Self {
        self.inner.r#type = r#type;
        self
    }

    pub fn package_code(mut self, package_code: CodeableConcept) -> Self {
        self.inner.package_code.push(package_code);
        self
    }

    pub fn set_package_code(mut self, package_code: Vec<CodeableConcept>) -> Self {
        self.inner.package_code = package_code;
        self
    }

    pub fn device(mut self, device: Reference) -> Self {
        self.inner.device.push(device);
        self
    }

    pub fn set_device(mut self, device: Vec<Reference>) -> Self {
        self.inner.device = device;
        self
    }

    pub fn build(self) -> Result<AccountProcedure, FhirError> {
        self.inner.validate()?;
        Ok(self.inner)
    }

    pub fn build_unchecked(self) -> AccountProcedure {
        self.inner
    }
}

impl Visitable for AccountProcedure {
    fn type_name(&self) -> &'static str {
        "Account.procedure"
    }

    fn has_children(&self) -> bool {
        self.backbone.has_children()
            || self.sequence.is_some()
            || self.code.is_some()
            || self.date_of_service.is_some()
            || !self.r#type.is_empty()
            || !self.package_code.is_empty()
            || !self.device.is_empty()
    }

    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        if visitor.pre_visit(self) {
            visitor.visit_start(name, index, self);
            if visitor.visit(name, index, self) {
                self.backbone.accept_children(visitor);
                accept_opt(&self.sequence, "sequence", visitor);
                accept_opt(&self.code, "code", visitor);
                accept_opt(&self.date_of_service, "dateOfService", visitor);
                accept_all(&self.r#type, "type", visitor);
                accept_all(&self.package_code, "packageCode", visitor);
                accept_all(&self.device, "device", visitor);
            }
            visitor.visit_end(name, index, self);
            visitor.post_visit(self);
        }
    }
}

/// A link to another account related to this one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct AccountRelatedAccount {
    pub(crate) backbone: BackboneElement,
    pub(crate) relationship: Option<CodeableConcept>,
    pub(crate) account: Option<Reference>,
}

impl AccountRelatedAccount {
    pub fn builder() -> AccountRelatedAccountBuilder {
        AccountRelatedAccountBuilder::default()
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

    pub fn relationship(&self) -> Option<&CodeableConcept> {
        self.relationship.as_ref()
    }

    /// The related account. Required.
    pub fn account(&self) -> Option<&Reference> {
        self.account.as_ref()
    }

    pub fn to_builder(&self) -> AccountRelatedAccountBuilder {
        AccountRelatedAccountBuilder {
            inner: self.clone(),
        }
    }

    fn validate(&self) -> Result<(), FhirError> {
        validation::require_non_null(&self.account, "account")?;
        validation::check_reference_type(self.account.as_ref(), "account", &["Account"])?;
        validation::require_value_or_children(self)
    }
}

#[derive(Debug, Clone, Default)]
pub struct AccountRelatedAccountBuilder {
    inner: AccountRelatedAccount,
}

impl AccountRelatedAccountBuilder {
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

    pub fn relationship(mut self, relationship: CodeableConcept) -> Self {
        self.inner.relationship = Some(relationship);
        self
    }

    pub fn account(mut self, account: Reference) -> Self {
        self.inner.account = Some(account);
        self
    }

    pub fn build(self) -> Result<AccountRelatedAccount, FhirError> {
        self.inner.validate()?;
        Ok(self.inner)
    }

    pub fn build_unchecked(self) -> AccountRelatedAccount {
        self.inner
    }
}

impl Visitable for AccountRelatedAccount {
    fn type_name(&self) -> &'static str {
        "Account.relatedAccount"
    }

    fn has_children(&self) -> bool {
        self.backbone.has_children() || self.relationship.is_some() || self.account.is_some()
    }

    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        if visitor.pre_visit(self) {
            visitor.visit_start(name, index, self);
            if visitor.visit(name, index, self) {
                self.backbone.accept_children(visitor);
                accept_opt(&self.relationship, "relationship", visitor);
                accept_opt(&self.account, "account", visitor);
            }
            visitor.visit_end(name, index, self);
            visitor.post_visit(self);
        }
    }
}

/// A calculated balance of the account.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct AccountBalance {
    pub(crate) backbone: BackboneElement,
    pub(crate) aggregate: Option<CodeableConcept>,
    pub(crate) term: Option<CodeableConcept>,
    pub(crate) estimate: Option<types::Boolean>,
    pub(crate) amount: Option<Money>,
}

impl AccountBalance {
    pub fn builder() -> AccountBalanceBuilder {
        AccountBalanceBuilder::default()
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

    pub fn aggregate(&self) -> Option<&CodeableConcept> {
        self.aggregate.as_ref()
    }

    pub fn term(&self) -> Option<&CodeableConcept> {
        self.term.as_ref()
    }

    pub fn estimate(&self) -> Option<&types::Boolean> {
        self.estimate.as_ref()
    }

    /// The balance amount. Required.
    pub fn amount(&self) -> Option<&Money> {
        self.amount.as_ref()
    }

    pub fn to_builder(&self) -> AccountBalanceBuilder {
        AccountBalanceBuilder {
            inner: self.clone(),
        }
    }

    fn validate(&self) -> Result<(), FhirError> {
        validation::require_non_null(&self.amount, "amount")?;
        validation::require_value_or_children(self)
    }
}

#[derive(Debug, Clone, Default)]
pub struct AccountBalanceBuilder {
    inner: AccountBalance,
}

impl AccountBalanceBuilder {
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

    pub fn aggregate(mut self, aggregate: CodeableConcept) -> Self {
        self.inner.aggregate = Some(aggregate);
        self
    }

    pub fn term(mut self, term: CodeableConcept) -> Self {
        self.inner.term = Some(term);
        self
    }

    pub fn estimate(mut self, estimate: impl Into<types::Boolean>) -> Self {
        self.inner.estimate = Some(estimate.into());
        self
    }

    pub fn amount(mut self, amount: Money) -> Self {
        self.inner.amount = Some(amount);
        self
    }

    pub fn build(self) -> Result<AccountBalance, FhirError> {
        self.inner.validate()?;
        Ok(self.inner)
    }

    pub fn build_unchecked(self) -> AccountBalance {
        self.inner
    }
}

impl Visitable for AccountBalance {
    fn type_name(&self) -> &'static str {
        "Account.balance"
    }

    fn has_children(&self) -> bool {
        self.backbone.has_children()
            || self.aggregate.is_some()
            || self.term.is_some()
            || self.estimate.is_some()
            || self.amount.is_some()
    }

    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        if visitor.pre_visit(self) {
            visitor.visit_start(name, index, self);
            if visitor.visit(name, index, self) {
                self.backbone.accept_children(visitor);
                accept_opt(&self.aggregate, "aggregate", visitor);
                accept_opt(&self.term, "term", visitor);
                accept_opt(&self.estimate, "estimate", visitor);
                accept_opt(&self.amount, "amount", visitor);
            }
            visitor.visit_end(name, index, self);
            visitor.post_visit(self);
        }
    }
}
