use lumen_fhir_lib::r5::codes::AccountStatusValue;
use lumen_fhir_lib::r5::complex_types::{
    CodeableConcept, CodeableReference, Coding, Identifier, Money, Period, Reference,
};
use lumen_fhir_lib::r5::primitives as types;
use lumen_fhir_lib::r5::resources::{
    Account, AccountBalance, AccountCoverage, AccountDiagnosis, AccountGuarantor,
    AccountProcedure, AccountRelatedAccount, Resource,
};
use lumen_fhir_lib::support::constraint::{BindingStrength, ConstraintSeverity};
use lumen_fhir_lib::support::FhirError;

fn patient_account() -> Account {
    Account::builder()
        .id("acct-1")
        .identifier(
            Identifier::builder()
                .system("http://example.org/billing")
                .value("12345")
                .build_unchecked(),
        )
        .status(AccountStatusValue::Active)
        .name("Inpatient stay")
        .subject(Reference::to("Patient", "p1"))
        .owner(Reference::to("Organization", "o1"))
        .build()
        .unwrap()
}

#[test]
fn test_status_is_required() {
    let err = Account::builder().name("no status").build().unwrap_err();
    assert_eq!(err, FhirError::MissingRequiredField("status"));
}

#[test]
fn test_status_only_account_builds() {
    use lumen_fhir_lib::support::visitor::Visitable;

    let account = Account::builder()
        .status(AccountStatusValue::Active)
        .build()
        .unwrap();
    assert!(account.has_children());
    assert!(account.identifier().is_empty());
}

#[test]
fn test_build_unchecked_skips_validation() {
    let account = Account::builder().name("no status").build_unchecked();
    assert!(account.status().is_none());
}

#[test]
fn test_subject_allow_list() {
    let err = Account::builder()
        .status(AccountStatusValue::Active)
        .subject(Reference::to("Medication", "m1"))
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        FhirError::DisallowedReferenceTarget {
            field: "subject",
            target: "Medication".to_string(),
        }
    );
}

#[test]
fn test_subject_with_undeterminable_target_passes() {
    let account = Account::builder()
        .status(AccountStatusValue::Active)
        .subject(Reference::builder().display("the patient").build_unchecked())
        .build();
    assert!(account.is_ok());
}

#[test]
fn test_owner_must_be_an_organization() {
    let err = Account::builder()
        .status(AccountStatusValue::Active)
        .owner(Reference::to("Practitioner", "pr1"))
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        FhirError::DisallowedReferenceTarget {
            field: "owner",
            target: "Practitioner".to_string(),
        }
    );
}

#[test]
fn test_coverage_requires_a_coverage_reference() {
    let err = AccountCoverage::builder().priority(1u32).build().unwrap_err();
    assert_eq!(err, FhirError::MissingRequiredField("coverage"));

    let err = AccountCoverage::builder()
        .coverage(Reference::to("Patient", "p1"))
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        FhirError::DisallowedReferenceTarget {
            field: "coverage",
            target: "Patient".to_string(),
        }
    );

    let coverage = AccountCoverage::builder()
        .coverage(Reference::to("Coverage", "c1"))
        .priority(1u32)
        .build()
        .unwrap();
    assert_eq!(coverage.priority().and_then(|p| p.value()), Some(&1u32));
}

#[test]
fn test_guarantor_party_allow_list() {
    let err = AccountGuarantor::builder()
        .party(Reference::to("Device", "d1"))
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        FhirError::DisallowedReferenceTarget {
            field: "party",
            target: "Device".to_string(),
        }
    );

    let guarantor = AccountGuarantor::builder()
        .party(Reference::to("RelatedPerson", "rp1"))
        .on_hold(false)
        .period(Period::builder().build_unchecked())
        .build();
    assert!(guarantor.is_ok());
}

#[test]
fn test_diagnosis_requires_condition() {
    let err = AccountDiagnosis::builder().sequence(1u32).build().unwrap_err();
    assert_eq!(err, FhirError::MissingRequiredField("condition"));

    let diagnosis = AccountDiagnosis::builder()
        .condition(
            CodeableReference::builder()
                .concept(
                    CodeableConcept::builder()
                        .coding(
                            Coding::builder()
                                .system("http://snomed.info/sct")
                                .code("233604007")
                                .build_unchecked(),
                        )
                        .build_unchecked(),
                )
                .build_unchecked(),
        )
        .build();
    assert!(diagnosis.is_ok());
}

#[test]
fn test_procedure_device_allow_list() {
    let err = AccountProcedure::builder()
        .code(CodeableReference::builder().reference(Reference::to("Procedure", "pr1")).build_unchecked())
        .device(Reference::to("Location", "l1"))
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        FhirError::DisallowedReferenceTarget {
            field: "device",
            target: "Location".to_string(),
        }
    );
}

#[test]
fn test_related_account_requires_account() {
    let err = AccountRelatedAccount::builder()
        .relationship(CodeableConcept::builder().text("parent").build_unchecked())
        .build()
        .unwrap_err();
    assert_eq!(err, FhirError::MissingRequiredField("account"));

    let err = AccountRelatedAccount::builder()
        .account(Reference::to("Invoice", "i1"))
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        FhirError::DisallowedReferenceTarget {
            field: "account",
            target: "Invoice".to_string(),
        }
    );
}

#[test]
fn test_balance_requires_amount() {
    let err = AccountBalance::builder().estimate(true).build().unwrap_err();
    assert_eq!(err, FhirError::MissingRequiredField("amount"));

    let balance = AccountBalance::builder()
        .amount(
            Money::builder()
                .value(rust_decimal::Decimal::new(10050, 2))
                .currency("USD")
                .build_unchecked(),
        )
        .build()
        .unwrap();
    assert!(balance.amount().is_some());
}

#[test]
fn test_to_builder_round_trip_preserves_equality() {
    let account = patient_account();
    let copy = account.to_builder().build().unwrap();
    assert_eq!(account, copy);

    let renamed = account.to_builder().name("Outpatient visit").build().unwrap();
    assert_ne!(account, renamed);
    assert_eq!(account.name().and_then(|n| n.value()), Some(&"Inpatient stay".to_string()));
}

#[test]
fn test_getters() {
    let account = patient_account();
    assert_eq!(account.id(), Some("acct-1"));
    assert_eq!(account.status().and_then(|s| s.as_str()), Some("active"));
    assert_eq!(account.subject().len(), 1);
    // Unset repeating fields read as empty slices, not absent options.
    assert!(account.coverage().is_empty());
    assert!(account.guarantor().is_empty());
    assert!(account.balance().is_empty());
}

#[test]
fn test_contained_resources() {
    let inner = Account::builder()
        .id("acct-child")
        .status(AccountStatusValue::Inactive)
        .build()
        .unwrap();
    let outer = Account::builder()
        .status(AccountStatusValue::Active)
        .contained(inner)
        .build()
        .unwrap();

    assert_eq!(outer.contained().len(), 1);
    assert_eq!(outer.contained()[0].id(), Some("acct-child"));
    assert!(matches!(outer.contained()[0], Resource::Account(_)));
}

#[test]
fn test_instant_field_parses_canonical_form() {
    let account = Account::builder()
        .status(AccountStatusValue::Active)
        .calculated_at(types::Instant::parse("2026-08-25T10:30:00Z").unwrap())
        .build()
        .unwrap();
    assert_eq!(
        account.calculated_at().and_then(|c| c.value()).map(|v| v.as_str()),
        Some("2026-08-25T10:30:00Z")
    );
}

#[test]
fn test_declared_constraints_and_bindings() {
    let act_1 = Account::CONSTRAINTS.iter().find(|c| c.key == "act-1").unwrap();
    assert_eq!(act_1.severity, ConstraintSeverity::Rule);
    assert_eq!(act_1.path, "Account.diagnosis");

    let account_4 = Account::CONSTRAINTS.iter().find(|c| c.key == "account-4").unwrap();
    assert_eq!(account_4.severity, ConstraintSeverity::Warning);

    let status = Account::BINDINGS.iter().find(|b| b.path == "Account.status").unwrap();
    assert_eq!(status.strength, BindingStrength::Required);
    assert_eq!(status.value_set, "http://hl7.org/fhir/ValueSet/account-status|5.0.0");
}
