//! Primitive element types.
//!
//! Every primitive is a full element: a payload plus the shared element
//! header, so `"active"` with an id and extensions is representable. The
//! payload is optional (an extension-only primitive is legal) but `build()`
//! rejects a primitive with neither payload nor children. Names follow the
//! schema, including [`String`]; the Rust string type is spelled
//! `std::string::String` where both appear.

use lumen_fhir_support::visitor::Value;

use crate::date_time::{PrecisionDate, PrecisionDateTime, PrecisionInstant, PrecisionTime};
use lumen_fhir_support::FhirError;

primitive_type!(
    /// A FHIR `boolean`.
    Boolean, BooleanBuilder, "boolean", bool,
    value |v| Value::Boolean(*v),
);

primitive_type!(
    /// A FHIR `integer`: a signed 32-bit whole number.
    Integer, IntegerBuilder, "integer", i32,
    value |v| Value::Integer(*v),
);

primitive_type!(
    /// A FHIR `integer64`: a signed 64-bit whole number.
    Integer64, Integer64Builder, "integer64", i64,
    value |v| Value::Integer64(*v),
);

primitive_type!(
    /// A FHIR `positiveInt`: a whole number of at least 1.
    PositiveInt, PositiveIntBuilder, "positiveInt", u32,
    value |v| Value::PositiveInt(*v),
    check |v| *v >= 1,
);

primitive_type!(
    /// A FHIR `unsignedInt`.
    UnsignedInt, UnsignedIntBuilder, "unsignedInt", u32,
    value |v| Value::UnsignedInt(*v),
);

primitive_type!(
    /// A FHIR `decimal`: an exact decimal number.
    Decimal, DecimalBuilder, "decimal", rust_decimal::Decimal,
    value |v| Value::Decimal(*v),
);

primitive_type!(
    /// A FHIR `string`.
    String, StringBuilder, "string", std::string::String,
    value |v| Value::String(v),
);

primitive_type!(
    /// A FHIR `code`: a string drawn from some controlled set. Fields whose
    /// value set is closed use the generated code types instead.
    Code, CodeBuilder, "code", std::string::String,
    value |v| Value::Code(v),
);

primitive_type!(
    /// A FHIR `uri`.
    Uri, UriBuilder, "uri", std::string::String,
    value |v| Value::Uri(v),
);

primitive_type!(
    /// A FHIR `url`.
    Url, UrlBuilder, "url", std::string::String,
    value |v| Value::Url(v),
);

primitive_type!(
    /// A FHIR `canonical`: a reference to a definitional artifact by its
    /// canonical URL, optionally version-suffixed (`|version`).
    Canonical, CanonicalBuilder, "canonical", std::string::String,
    value |v| Value::Canonical(v),
);

primitive_type!(
    /// A FHIR `markdown`.
    Markdown, MarkdownBuilder, "markdown", std::string::String,
    value |v| Value::Markdown(v),
);

primitive_type!(
    /// A FHIR `id`: a logical-id string.
    Id, IdBuilder, "id", std::string::String,
    value |v| Value::Id(v),
);

primitive_type!(
    /// A FHIR `xhtml` blob, carried opaque.
    Xhtml, XhtmlBuilder, "xhtml", std::string::String,
    value |v| Value::Xhtml(v),
);

primitive_type!(
    /// A FHIR `base64Binary`: raw bytes, already decoded.
    Base64Binary, Base64BinaryBuilder, "base64Binary", Vec<u8>,
    value |v| Value::Base64Binary(v),
);

primitive_type!(
    /// A FHIR `date` with possibly reduced precision.
    Date, DateBuilder, "date", PrecisionDate,
    value |v| Value::Date(v.as_str()),
);

primitive_type!(
    /// A FHIR `dateTime` with possibly reduced precision.
    DateTime, DateTimeBuilder, "dateTime", PrecisionDateTime,
    value |v| Value::DateTime(v.as_str()),
);

primitive_type!(
    /// A FHIR `time` of day.
    Time, TimeBuilder, "time", PrecisionTime,
    value |v| Value::Time(v.as_str()),
);

primitive_type!(
    /// A FHIR `instant`: a fully specified timestamp.
    Instant, InstantBuilder, "instant", PrecisionInstant,
    value |v| Value::Instant(v.as_str()),
);

macro_rules! from_plain {
    ($name:ident, $($from_ty:ty),+) => {
        $(
            impl From<$from_ty> for $name {
                fn from(value: $from_ty) -> Self {
                    Self::of(value)
                }
            }
        )+
    };
}

from_plain!(Boolean, bool);
from_plain!(Integer, i32);
from_plain!(Integer64, i64);
from_plain!(PositiveInt, u32);
from_plain!(UnsignedInt, u32);
from_plain!(Decimal, rust_decimal::Decimal);
from_plain!(String, &str, std::string::String);
from_plain!(Code, &str, std::string::String);
from_plain!(Uri, &str, std::string::String);
from_plain!(Url, &str, std::string::String);
from_plain!(Canonical, &str, std::string::String);
from_plain!(Markdown, &str, std::string::String);
from_plain!(Id, &str, std::string::String);
from_plain!(Xhtml, &str, std::string::String);
from_plain!(Base64Binary, Vec<u8>, &[u8]);
from_plain!(Date, PrecisionDate, chrono::NaiveDate);
from_plain!(DateTime, PrecisionDateTime, chrono::DateTime<chrono::FixedOffset>);
from_plain!(Time, PrecisionTime);
from_plain!(Instant, PrecisionInstant, chrono::DateTime<chrono::FixedOffset>);

impl Date {
    /// Parse a `YYYY`, `YYYY-MM` or `YYYY-MM-DD` literal.
    pub fn parse(text: &str) -> Result<Self, FhirError> {
        Ok(Self::of(PrecisionDate::parse(text)?))
    }
}

impl DateTime {
    /// Parse a date literal or a full RFC 3339 timestamp.
    pub fn parse(text: &str) -> Result<Self, FhirError> {
        Ok(Self::of(PrecisionDateTime::parse(text)?))
    }
}

impl Time {
    pub fn parse(text: &str) -> Result<Self, FhirError> {
        Ok(Self::of(PrecisionTime::parse(text)?))
    }
}

impl Instant {
    pub fn parse(text: &str) -> Result<Self, FhirError> {
        Ok(Self::of(PrecisionInstant::parse(text)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_fhir_support::visitor::Visitable;

    #[test]
    fn test_of_wraps_plain_values() {
        let flag = Boolean::of(true);
        assert_eq!(flag.value(), Some(&true));
        assert!(flag.id().is_none());
        assert!(flag.extension().is_empty());

        let name: String = "Madam Mim".into();
        assert_eq!(name.value().map(|v| v.as_str()), Some("Madam Mim"));
    }

    #[test]
    fn test_build_rejects_empty_primitive() {
        let err = String::builder().build().unwrap_err();
        assert_eq!(err, FhirError::MissingValueOrChildren("string"));

        // An id alone is child content, so the element is not empty.
        let id_only = String::builder().id("a1").build().unwrap();
        assert!(id_only.value().is_none());
        assert_eq!(id_only.id(), Some("a1"));
    }

    #[test]
    fn test_positive_int_must_be_positive() {
        let err = PositiveInt::builder().value(0u32).build().unwrap_err();
        assert_eq!(
            err,
            FhirError::InvalidValue {
                type_name: "positiveInt",
                value: "0".to_string(),
            }
        );
        assert_eq!(PositiveInt::of(3u32).value(), Some(&3));
    }

    #[test]
    fn test_to_builder_round_trip() {
        let original = Uri::builder()
            .id("u1")
            .value("urn:ietf:bcp:47")
            .build()
            .unwrap();
        let rebuilt = original.to_builder().build().unwrap();
        assert_eq!(original, rebuilt);
    }

    #[test]
    fn test_primitive_surfaces_its_payload_to_visitors() {
        let code = Code::of("active");
        assert!(Visitable::has_value(&code));
        assert_eq!(
            Visitable::value(&code),
            Some(lumen_fhir_support::visitor::Value::Code("active"))
        );
        assert_eq!(code.type_name(), "code");
    }
}
