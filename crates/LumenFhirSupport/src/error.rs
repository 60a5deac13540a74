use thiserror::Error;

/// Fatal construction and parse failures for the object model.
///
/// Every structural violation detected while building a value object is
/// reported through this type. Construction is all-or-nothing: there is no
/// partially built object to recover, so callers either discard the builder
/// or fix their input and build again. The messages name the offending
/// field so that failures are reproducible and diagnosable at the boundary
/// where external input is converted into domain objects.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FhirError {
    /// A field with cardinality 1..1 (or 1..*) was never set.
    #[error("missing required field: {0}")]
    MissingRequiredField(&'static str),

    /// A repeating field with cardinality 1..* was set to an empty list.
    #[error("list field must not be empty: {0}")]
    EmptyRequiredList(&'static str),

    /// A reference names a target resource type outside the declared
    /// allow-list for its field.
    #[error("field `{field}` must not reference resource type `{target}`")]
    DisallowedReferenceTarget {
        field: &'static str,
        target: String,
    },

    /// An element carries neither a value nor any child content and would
    /// therefore serialize to nothing.
    #[error("element `{0}` must have a value or children")]
    MissingValueOrChildren(&'static str),

    /// A primitive or code literal could not be parsed into its value type.
    #[error("invalid {type_name} value: {value}")]
    InvalidValue {
        type_name: &'static str,
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_field() {
        assert_eq!(
            FhirError::MissingRequiredField("coverage").to_string(),
            "missing required field: coverage"
        );
        assert_eq!(
            FhirError::DisallowedReferenceTarget {
                field: "owner",
                target: "Patient".to_string(),
            }
            .to_string(),
            "field `owner` must not reference resource type `Patient`"
        );
        assert_eq!(
            FhirError::InvalidValue {
                type_name: "positiveInt",
                value: "0".to_string(),
            }
            .to_string(),
            "invalid positiveInt value: 0"
        );
    }
}
