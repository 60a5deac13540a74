//! Generation macros for the leaf element types.
//!
//! Primitive types and code types share one shape: an element header (id
//! plus extensions) and an optional payload. The macros below stamp out the
//! struct, its builder, and the `Visitable` implementation; everything
//! composite is written out long-hand in the `r5` modules.

macro_rules! primitive_type {
    (@common
        $(#[$doc:meta])*
        $name:ident, $builder:ident, $type_name:literal, $value_ty:ty,
        |$v:ident| $to_value:expr
    ) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
        pub struct $name {
            pub(crate) element: crate::r5::element::Element,
            pub(crate) value: ::std::option::Option<$value_ty>,
        }

        impl $name {
            pub fn builder() -> $builder {
                $builder::default()
            }

            /// Wrap a plain value with no element id or extensions.
            pub fn of(value: impl ::std::convert::Into<$value_ty>) -> Self {
                Self {
                    element: ::std::default::Default::default(),
                    value: ::std::option::Option::Some(value.into()),
                }
            }

            pub fn id(&self) -> ::std::option::Option<&str> {
                self.element.id()
            }

            pub fn extension(&self) -> &[crate::r5::complex_types::Extension] {
                self.element.extension()
            }

            pub fn value(&self) -> ::std::option::Option<&$value_ty> {
                self.value.as_ref()
            }

            pub fn to_builder(&self) -> $builder {
                $builder {
                    element: self.element.clone(),
                    value: self.value.clone(),
                }
            }
        }

        #[derive(Debug, Clone, Default)]
        pub struct $builder {
            element: crate::r5::element::Element,
            value: ::std::option::Option<$value_ty>,
        }

        impl $builder {
            pub fn id(mut self, id: impl ::std::convert::Into<::std::string::String>) -> Self {
                self.element.id = ::std::option::Option::Some(id.into());
                self
            }

            pub fn extension(mut self, extension: crate::r5::complex_types::Extension) -> Self {
                self.element.extension.push(extension);
                self
            }

            pub fn set_extension(
                mut self,
                extension: ::std::vec::Vec<crate::r5::complex_types::Extension>,
            ) -> Self {
                self.element.extension = extension;
                self
            }

            pub fn value(mut self, value: impl ::std::convert::Into<$value_ty>) -> Self {
                self.value = ::std::option::Option::Some(value.into());
                self
            }

            pub fn build(
                self,
            ) -> ::std::result::Result<$name, ::lumen_fhir_support::FhirError> {
                let built = self.build_unchecked();
                built.validate()?;
                ::std::result::Result::Ok(built)
            }

            pub fn build_unchecked(self) -> $name {
                $name {
                    element: self.element,
                    value: self.value,
                }
            }
        }

        impl ::lumen_fhir_support::visitor::Visitable for $name {
            fn type_name(&self) -> &'static str {
                $type_name
            }

            fn has_children(&self) -> bool {
                self.element.has_children()
            }

            fn has_value(&self) -> bool {
                self.value.is_some()
            }

            fn value(&self) -> ::std::option::Option<::lumen_fhir_support::visitor::Value<'_>> {
                self.value.as_ref().map(|$v| $to_value)
            }

            fn accept(
                &self,
                name: &str,
                index: ::std::option::Option<usize>,
                visitor: &mut dyn ::lumen_fhir_support::visitor::Visitor,
            ) {
                if visitor.pre_visit(self) {
                    visitor.visit_start(name, index, self);
                    if visitor.visit(name, index, self) {
                        self.element.accept_children(visitor);
                    }
                    visitor.visit_end(name, index, self);
                    visitor.post_visit(self);
                }
            }
        }
    };

    (
        $(#[$doc:meta])*
        $name:ident, $builder:ident, $type_name:literal, $value_ty:ty,
        value |$v:ident| $to_value:expr $(,)?
    ) => {
        primitive_type!(@common $(#[$doc])* $name, $builder, $type_name, $value_ty, |$v| $to_value);

        impl $name {
            fn validate(&self) -> ::std::result::Result<(), ::lumen_fhir_support::FhirError> {
                ::lumen_fhir_support::validation::require_value_or_children(self)
            }
        }
    };

    (
        $(#[$doc:meta])*
        $name:ident, $builder:ident, $type_name:literal, $value_ty:ty,
        value |$v:ident| $to_value:expr,
        check |$c:ident| $check:expr $(,)?
    ) => {
        primitive_type!(@common $(#[$doc])* $name, $builder, $type_name, $value_ty, |$v| $to_value);

        impl $name {
            fn validate(&self) -> ::std::result::Result<(), ::lumen_fhir_support::FhirError> {
                if let ::std::option::Option::Some($c) = &self.value {
                    if !$check {
                        return ::std::result::Result::Err(
                            ::lumen_fhir_support::FhirError::InvalidValue {
                                type_name: $type_name,
                                value: $c.to_string(),
                            },
                        );
                    }
                }
                ::lumen_fhir_support::validation::require_value_or_children(self)
            }
        }
    };
}

macro_rules! choice_type {
    (
        $(#[$doc:meta])*
        $name:ident, $base:literal, {
            $($variant:ident($inner:ty) => $field:literal),+ $(,)?
        }
    ) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant($inner)),+
        }

        impl $name {
            /// Traverse the held variant under the choice's base name.
            pub(crate) fn accept(&self, visitor: &mut dyn ::lumen_fhir_support::visitor::Visitor) {
                match self {
                    $(Self::$variant(value) => ::lumen_fhir_support::visitor::Visitable::accept(
                        value,
                        $base,
                        ::std::option::Option::None,
                        visitor,
                    )),+
                }
            }
        }

        impl ::lumen_fhir_support::ChoiceElement for $name {
            fn base_name() -> &'static str {
                $base
            }

            fn possible_field_names() -> &'static [&'static str] {
                &[$($field),+]
            }

            fn field_name(&self) -> &'static str {
                match self {
                    $(Self::$variant(_) => $field),+
                }
            }
        }
    };
}

macro_rules! code_type {
    (
        $(#[$doc:meta])*
        $name:ident, $builder:ident, $value_enum:ident, $type_name:literal, {
            $($(#[$vdoc:meta])* $variant:ident => $code:literal),+ $(,)?
        }
    ) => {
        /// Closed value set for
        #[doc = concat!("[`", stringify!($name), "`].")]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $value_enum {
            $($(#[$vdoc])* $variant),+
        }

        impl $value_enum {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $code),+
                }
            }

            /// Resolve a code literal; unknown codes are rejected.
            pub fn from_code(code: &str) -> ::std::result::Result<Self, ::lumen_fhir_support::FhirError> {
                match code {
                    $($code => ::std::result::Result::Ok(Self::$variant),)+
                    _ => ::std::result::Result::Err(::lumen_fhir_support::FhirError::InvalidValue {
                        type_name: $type_name,
                        value: code.to_string(),
                    }),
                }
            }
        }

        impl ::std::str::FromStr for $value_enum {
            type Err = ::lumen_fhir_support::FhirError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                Self::from_code(s)
            }
        }

        impl ::std::fmt::Display for $value_enum {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
        pub struct $name {
            pub(crate) element: crate::r5::element::Element,
            pub(crate) value: ::std::option::Option<$value_enum>,
        }

        impl $name {
            pub fn builder() -> $builder {
                $builder::default()
            }

            /// Wrap a value-set member with no element id or extensions.
            pub fn of(value: $value_enum) -> Self {
                Self {
                    element: ::std::default::Default::default(),
                    value: ::std::option::Option::Some(value),
                }
            }

            pub fn id(&self) -> ::std::option::Option<&str> {
                self.element.id()
            }

            pub fn extension(&self) -> &[crate::r5::complex_types::Extension] {
                self.element.extension()
            }

            pub fn value(&self) -> ::std::option::Option<$value_enum> {
                self.value
            }

            /// The code literal, when a value is present.
            pub fn as_str(&self) -> ::std::option::Option<&'static str> {
                self.value.map(|value| value.as_str())
            }

            pub fn to_builder(&self) -> $builder {
                $builder {
                    element: self.element.clone(),
                    value: self.value,
                }
            }

            fn validate(&self) -> ::std::result::Result<(), ::lumen_fhir_support::FhirError> {
                ::lumen_fhir_support::validation::require_value_or_children(self)
            }
        }

        impl ::std::convert::From<$value_enum> for $name {
            fn from(value: $value_enum) -> Self {
                Self::of(value)
            }
        }

        #[derive(Debug, Clone, Default)]
        pub struct $builder {
            element: crate::r5::element::Element,
            value: ::std::option::Option<$value_enum>,
        }

        impl $builder {
            pub fn id(mut self, id: impl ::std::convert::Into<::std::string::String>) -> Self {
                self.element.id = ::std::option::Option::Some(id.into());
                self
            }

            pub fn extension(mut self, extension: crate::r5::complex_types::Extension) -> Self {
                self.element.extension.push(extension);
                self
            }

            pub fn set_extension(
                mut self,
                extension: ::std::vec::Vec<crate::r5::complex_types::Extension>,
            ) -> Self {
                self.element.extension = extension;
                self
            }

            pub fn value(mut self, value: $value_enum) -> Self {
                self.value = ::std::option::Option::Some(value);
                self
            }

            pub fn build(
                self,
            ) -> ::std::result::Result<$name, ::lumen_fhir_support::FhirError> {
                let built = self.build_unchecked();
                built.validate()?;
                ::std::result::Result::Ok(built)
            }

            pub fn build_unchecked(self) -> $name {
                $name {
                    element: self.element,
                    value: self.value,
                }
            }
        }

        impl ::lumen_fhir_support::visitor::Visitable for $name {
            fn type_name(&self) -> &'static str {
                $type_name
            }

            fn has_children(&self) -> bool {
                self.element.has_children()
            }

            fn has_value(&self) -> bool {
                self.value.is_some()
            }

            fn value(&self) -> ::std::option::Option<::lumen_fhir_support::visitor::Value<'_>> {
                self.value
                    .map(|value| ::lumen_fhir_support::visitor::Value::Code(value.as_str()))
            }

            fn accept(
                &self,
                name: &str,
                index: ::std::option::Option<usize>,
                visitor: &mut dyn ::lumen_fhir_support::visitor::Visitor,
            ) {
                if visitor.pre_visit(self) {
                    visitor.visit_start(name, index, self);
                    if visitor.visit(name, index, self) {
                        self.element.accept_children(visitor);
                    }
                    visitor.visit_end(name, index, self);
                    visitor.post_visit(self);
                }
            }
        }
    };
}
