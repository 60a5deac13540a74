use lumen_fhir_lib::r5::codes::{AccountStatusValue, PublicationStatusValue};
use lumen_fhir_lib::r5::complex_types::{CodeableConcept, Extension, ExtensionValue, Reference};
use lumen_fhir_lib::r5::primitives as types;
use lumen_fhir_lib::r5::resources::{Account, AccountBalance, AccountCoverage, PlanDefinition};
use lumen_fhir_lib::support::visitor::{NameCollectingVisitor, Value, Visitable, Visitor};

fn sample_account() -> Account {
    Account::builder()
        .id("acct-1")
        .status(AccountStatusValue::Active)
        .name("Inpatient stay")
        .subject(Reference::to("Patient", "p1"))
        .coverage(
            AccountCoverage::builder()
                .coverage(Reference::to("Coverage", "c1"))
                .build()
                .unwrap(),
        )
        .balance(
            AccountBalance::builder()
                .amount(lumen_fhir_lib::r5::complex_types::Money::builder().currency("USD").build_unchecked())
                .build()
                .unwrap(),
        )
        .calculated_at(types::Instant::parse("2026-08-25T10:30:00Z").unwrap())
        .build()
        .unwrap()
}

#[test]
fn test_account_children_visit_in_declaration_order() {
    let account = sample_account();
    let mut collector = NameCollectingVisitor::new();
    account.accept("Account", None, &mut collector);

    // Resource header slots first, then the resource's own fields. Absent
    // singletons are skipped; repeating fields appear even when empty.
    assert_eq!(
        collector.names(),
        &[
            "id",
            "contained",
            "extension",
            "modifierExtension",
            "identifier",
            "status",
            "name",
            "subject",
            "coverage",
            "guarantor",
            "diagnosis",
            "procedure",
            "relatedAccount",
            "balance",
            "calculatedAt",
        ]
    );
}

#[test]
fn test_fully_populated_account_emits_every_slot_in_order() {
    use lumen_fhir_lib::r5::codes::NarrativeStatusValue;
    use lumen_fhir_lib::r5::complex_types::{Meta, Narrative};

    let account = sample_account()
        .to_builder()
        .meta(Meta::builder().version_id("3").build_unchecked())
        .implicit_rules("http://example.org/fhir/ruleset")
        .language("en-US")
        .text(
            Narrative::builder()
                .status(NarrativeStatusValue::Generated)
                .div("<div xmlns=\"http://www.w3.org/1999/xhtml\">ledger</div>")
                .build()
                .unwrap(),
        )
        .billing_status(CodeableConcept::builder().text("open").build_unchecked())
        .r#type(CodeableConcept::builder().text("patient").build_unchecked())
        .service_period(lumen_fhir_lib::r5::complex_types::Period::builder().build_unchecked())
        .owner(Reference::to("Organization", "o1"))
        .description("Tracks the cost of the current admission")
        .currency(CodeableConcept::builder().text("USD").build_unchecked())
        .build()
        .unwrap();

    let mut collector = NameCollectingVisitor::new();
    account.accept("Account", None, &mut collector);
    assert_eq!(
        collector.names(),
        &[
            "id",
            "meta",
            "implicitRules",
            "language",
            "text",
            "contained",
            "extension",
            "modifierExtension",
            "identifier",
            "status",
            "billingStatus",
            "type",
            "name",
            "subject",
            "servicePeriod",
            "coverage",
            "owner",
            "description",
            "guarantor",
            "diagnosis",
            "procedure",
            "relatedAccount",
            "currency",
            "balance",
            "calculatedAt",
        ]
    );
}

#[test]
fn test_resource_id_surfaces_as_raw_value() {
    struct IdCollector {
        ids: Vec<String>,
    }

    impl Visitor for IdCollector {
        fn visit_value(&mut self, name: &str, value: Value<'_>) {
            if name == "id" {
                if let Value::Id(id) = value {
                    self.ids.push(id.to_string());
                }
            }
        }
    }

    let account = sample_account();
    let mut visitor = IdCollector { ids: Vec::new() };
    account.accept("Account", None, &mut visitor);
    assert_eq!(visitor.ids, vec!["acct-1".to_string()]);
}

#[test]
fn test_extension_url_surfaces_as_raw_value() {
    struct UrlCollector {
        urls: Vec<String>,
    }

    impl Visitor for UrlCollector {
        fn visit_value(&mut self, name: &str, value: Value<'_>) {
            if name == "url" {
                if let Value::Uri(url) = value {
                    self.urls.push(url.to_string());
                }
            }
        }
    }

    let account = Account::builder()
        .status(AccountStatusValue::Active)
        .extension(
            Extension::builder()
                .url("http://example.org/fhir/StructureDefinition/cost-center")
                .value(ExtensionValue::String(types::String::of("cardiology")))
                .build()
                .unwrap(),
        )
        .build()
        .unwrap();

    let mut visitor = UrlCollector { urls: Vec::new() };
    account.accept("Account", None, &mut visitor);
    assert_eq!(
        visitor.urls,
        vec!["http://example.org/fhir/StructureDefinition/cost-center".to_string()]
    );
}

#[test]
fn test_leaf_values_reachable_through_full_descent() {
    struct CodeCollector {
        codes: Vec<String>,
    }

    impl Visitor for CodeCollector {
        fn visit(&mut self, _name: &str, _index: Option<usize>, node: &dyn Visitable) -> bool {
            if let Some(Value::Code(code)) = node.value() {
                self.codes.push(code.to_string());
            }
            true
        }
    }

    let account = sample_account();
    let mut visitor = CodeCollector { codes: Vec::new() };
    account.accept("Account", None, &mut visitor);
    // status code and the balance currency, in traversal order.
    assert_eq!(visitor.codes, vec!["active".to_string(), "USD".to_string()]);
}

#[test]
fn test_visit_children_false_stays_at_the_root() {
    struct ShallowCounter {
        visited: usize,
    }

    impl Visitor for ShallowCounter {
        fn visit_children(&self) -> bool {
            false
        }

        fn visit_start(&mut self, _name: &str, _index: Option<usize>, _node: &dyn Visitable) {
            self.visited += 1;
        }
    }

    let account = sample_account();
    let mut visitor = ShallowCounter { visited: 0 };
    account.accept("Account", None, &mut visitor);
    assert_eq!(visitor.visited, 1);
}

#[test]
fn test_pre_visit_can_prune_subtrees() {
    struct SkipBackbones {
        names: Vec<String>,
        depth: usize,
    }

    impl Visitor for SkipBackbones {
        fn pre_visit(&mut self, node: &dyn Visitable) -> bool {
            !node.type_name().contains('.')
        }

        fn visit_start(&mut self, name: &str, index: Option<usize>, _node: &dyn Visitable) {
            if self.depth == 1 && index.is_none() {
                self.names.push(name.to_string());
            }
            self.depth += 1;
        }

        fn visit_end(&mut self, _name: &str, _index: Option<usize>, _node: &dyn Visitable) {
            self.depth -= 1;
        }
    }

    let account = sample_account();
    let mut visitor = SkipBackbones {
        names: Vec::new(),
        depth: 0,
    };
    account.accept("Account", None, &mut visitor);
    // The coverage and balance backbones were pruned before visit_start.
    assert!(visitor.names.contains(&"status".to_string()));
    assert!(!visitor.names.contains(&"coverage".to_string()));
    assert!(!visitor.names.contains(&"balance".to_string()));
}

#[test]
fn test_choice_children_visit_under_the_base_name() {
    use lumen_fhir_lib::r5::resources::PlanDefinitionSubject;
    use lumen_fhir_lib::support::ChoiceElement;

    let subject = PlanDefinitionSubject::CodeableConcept(
        CodeableConcept::builder().text("adults").build_unchecked(),
    );
    assert_eq!(subject.field_name(), "subjectCodeableConcept");

    let plan = PlanDefinition::builder()
        .status(PublicationStatusValue::Active)
        .subject(subject)
        .build()
        .unwrap();

    let mut collector = NameCollectingVisitor::new();
    plan.accept("PlanDefinition", None, &mut collector);
    assert!(collector.names().contains(&"subject".to_string()));
}

#[test]
fn test_contained_resources_are_traversed() {
    struct TypeCollector {
        types: Vec<&'static str>,
    }

    impl Visitor for TypeCollector {
        fn visit_start(&mut self, _name: &str, _index: Option<usize>, node: &dyn Visitable) {
            self.types.push(node.type_name());
        }
    }

    let inner = PlanDefinition::builder()
        .id("protocol-1")
        .status(PublicationStatusValue::Active)
        .build()
        .unwrap();
    let account = Account::builder()
        .status(AccountStatusValue::Active)
        .contained(inner)
        .build()
        .unwrap();

    let mut visitor = TypeCollector { types: Vec::new() };
    account.accept("Account", None, &mut visitor);
    assert!(visitor.types.contains(&"PlanDefinition"));
}
