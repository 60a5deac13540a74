//! Structural checks evaluated at `build()` time.
//!
//! These are pure functions with no side effects beyond returning the
//! failure; generated `validate` routines call them in field declaration
//! order so error messages are reproducible. The original model's
//! `checkList` duties (no null elements, homogeneous element type) are
//! discharged statically by `Vec<T>` and have no runtime counterpart here;
//! choice-type membership is likewise enforced by per-site sum types.

use crate::error::FhirError;
use crate::visitor::Visitable;

/// Fail with a missing-required-field condition when a 1..1 field is unset.
pub fn require_non_null<T>(value: &Option<T>, name: &'static str) -> Result<(), FhirError> {
    match value {
        Some(_) => Ok(()),
        None => Err(FhirError::MissingRequiredField(name)),
    }
}

/// Fail when a repeating field with cardinality 1..* holds no elements.
pub fn check_non_empty_list<T>(list: &[T], name: &'static str) -> Result<(), FhirError> {
    if list.is_empty() {
        Err(FhirError::EmptyRequiredList(name))
    } else {
        Ok(())
    }
}

/// A reference-shaped value whose target resource type can be inspected.
///
/// The target type is the explicit `type` element when present, otherwise
/// the `Type/id` prefix of the literal reference. `None` means the target
/// cannot be determined, in which case the allow-list check passes.
pub trait ReferenceTarget {
    fn target_type(&self) -> Option<&str>;
}

/// Check a singleton reference field against its target allow-list.
pub fn check_reference_type<R: ReferenceTarget>(
    reference: Option<&R>,
    name: &'static str,
    allowed: &[&str],
) -> Result<(), FhirError> {
    if let Some(reference) = reference {
        if let Some(target) = reference.target_type() {
            if !allowed.contains(&target) {
                return Err(FhirError::DisallowedReferenceTarget {
                    field: name,
                    target: target.to_string(),
                });
            }
        }
    }
    Ok(())
}

/// Check every element of a repeating reference field against its target
/// allow-list.
pub fn check_reference_types<R: ReferenceTarget>(
    references: &[R],
    name: &'static str,
    allowed: &[&str],
) -> Result<(), FhirError> {
    for reference in references {
        check_reference_type(Some(reference), name, allowed)?;
    }
    Ok(())
}

/// Fail when an element has no value and no children, i.e. it would
/// serialize to nothing.
pub fn require_value_or_children<T: Visitable>(element: &T) -> Result<(), FhirError> {
    if element.has_value() || element.has_children() {
        Ok(())
    } else {
        Err(FhirError::MissingValueOrChildren(element.type_name()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visitor::Visitor;

    struct FakeReference {
        target: Option<&'static str>,
    }

    impl ReferenceTarget for FakeReference {
        fn target_type(&self) -> Option<&str> {
            self.target
        }
    }

    struct FakeElement {
        value: bool,
        children: bool,
    }

    impl Visitable for FakeElement {
        fn type_name(&self) -> &'static str {
            "FakeElement"
        }

        fn has_children(&self) -> bool {
            self.children
        }

        fn has_value(&self) -> bool {
            self.value
        }

        fn accept(&self, _name: &str, _index: Option<usize>, _visitor: &mut dyn Visitor) {}
    }

    #[test]
    fn test_require_non_null() {
        assert_eq!(require_non_null(&Some(1), "status"), Ok(()));
        assert_eq!(
            require_non_null(&None::<i32>, "status"),
            Err(FhirError::MissingRequiredField("status"))
        );
    }

    #[test]
    fn test_check_non_empty_list() {
        assert_eq!(check_non_empty_list(&[1], "option"), Ok(()));
        assert_eq!(
            check_non_empty_list::<i32>(&[], "option"),
            Err(FhirError::EmptyRequiredList("option"))
        );
    }

    #[test]
    fn test_reference_allow_list() {
        let organization = FakeReference {
            target: Some("Organization"),
        };
        let patient = FakeReference {
            target: Some("Patient"),
        };
        let unknown = FakeReference { target: None };

        assert_eq!(
            check_reference_type(Some(&organization), "owner", &["Organization"]),
            Ok(())
        );
        assert_eq!(
            check_reference_type(Some(&patient), "owner", &["Organization"]),
            Err(FhirError::DisallowedReferenceTarget {
                field: "owner",
                target: "Patient".to_string(),
            })
        );
        // An undeterminable target passes, as does an absent reference.
        assert_eq!(
            check_reference_type(Some(&unknown), "owner", &["Organization"]),
            Ok(())
        );
        assert_eq!(
            check_reference_type(None::<&FakeReference>, "owner", &["Organization"]),
            Ok(())
        );
    }

    #[test]
    fn test_require_value_or_children() {
        let empty = FakeElement {
            value: false,
            children: false,
        };
        let with_value = FakeElement {
            value: true,
            children: false,
        };
        let with_children = FakeElement {
            value: false,
            children: true,
        };

        assert_eq!(
            require_value_or_children(&empty),
            Err(FhirError::MissingValueOrChildren("FakeElement"))
        );
        assert_eq!(require_value_or_children(&with_value), Ok(()));
        assert_eq!(require_value_or_children(&with_children), Ok(()));
    }
}
