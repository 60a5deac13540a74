use lumen_fhir_support::FhirError;
use lumen_fhir_support::validation;
use lumen_fhir_support::visitor::{accept_opt, Visitable, Visitor};

use crate::r5::codes::QuantityComparator;
use crate::r5::complex_types::Extension;
use crate::r5::element::Element;
use crate::r5::primitives as types;

/// A measured or measurable amount.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Quantity {
    pub(crate) element: Element,
    pub(crate) value: Option<types::Decimal>,
    pub(crate) comparator: Option<QuantityComparator>,
    pub(crate) unit: Option<types::String>,
    pub(crate) system: Option<types::Uri>,
    pub(crate) code: Option<types::Code>,
}

/// Quantity profiles. The profile constraints (no comparator, UCUM units)
/// are FHIRPath invariants carried as metadata, not distinct Rust types.
pub type SimpleQuantity = Quantity;
pub type Age = Quantity;
pub type Duration = Quantity;

impl Quantity {
    pub fn builder() -> QuantityBuilder {
        QuantityBuilder::default()
    }

    pub fn id(&self) -> Option<&str> {
        self.element.id()
    }

    pub fn extension(&self) -> &[Extension] {
        self.element.extension()
    }

    pub fn value(&self) -> Option<&types::Decimal> {
        self.value.as_ref()
    }

    pub fn comparator(&self) -> Option<&QuantityComparator> {
        self.comparator.as_ref()
    }

    pub fn unit(&self) -> Option<&types::String> {
        self.unit.as_ref()
    }

    pub fn system(&self) -> Option<&types::Uri> {
        self.system.as_ref()
    }

    pub fn code(&self) -> Option<&types::Code> {
        self.code.as_ref()
    }

    pub fn to_builder(&self) -> QuantityBuilder {
        QuantityBuilder {
            inner: self.clone(),
        }
    }

    fn validate(&self) -> Result<(), FhirError> {
        validation::require_value_or_children(self)
    }
}

#[derive(Debug, Clone, Default)]
pub struct QuantityBuilder {
    inner: Quantity,
}

impl QuantityBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.inner.element.id = Some(id.into());
        self
    }

    pub fn extension(mut self, extension: Extension) -> Self {
        self.inner.element.extension.push(extension);
        self
    }

    pub fn set_extension(mut self, extension: Vec<Extension>) -> Self {
        self.inner.element.extension = extension;
        self
    }

    pub fn value(mut self, value: impl Into<types::Decimal>) -> Self {
        self.inner.value = Some(value.into());
        self
    }

    pub fn comparator(mut self, comparator: impl Into<QuantityComparator>) -> Self {
        self.inner.comparator = Some(comparator.into());
        self
    }

    pub fn unit(mut self, unit: impl Into<types::String>) -> Self {
        self.inner.unit = Some(unit.into());
        self
    }

    pub fn system(mut self, system: impl Into<types::Uri>) -> Self {
        self.inner.system = Some(system.into());
        self
    }

    pub fn code(mut self, code: impl Into<types::Code>) -> Self {
        self.inner.code = Some(code.into());
        self
    }

    pub fn build(self) -> Result<Quantity, FhirError> {
        self.inner.validate()?;
        Ok(self.inner)
    }

    pub fn build_unchecked(self) -> Quantity {
        self.inner
    }
}

impl Visitable for Quantity {
    fn type_name(&self) -> &'static str {
        "Quantity"
    }

    fn has_children(&self) -> bool {
        self.element.has_children()
            || self.value.is_some()
            || self.comparator.is_some()
            || self.unit.is_some()
            || self.system.is_some()
            || self.code.is_some()
    }

    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        if visitor.pre_visit(self) {
            visitor.visit_start(name, index, self);
            if visitor.visit(name, index, self) {
                self.element.accept_children(visitor);
                accept_opt(&self.value, "value", visitor);
                accept_opt(&self.comparator, "comparator", visitor);
                accept_opt(&self.unit, "unit", visitor);
                accept_opt(&self.system, "system", visitor);
                accept_opt(&self.code, "code", visitor);
            }
            visitor.visit_end(name, index, self);
            visitor.post_visit(self);
        }
    }
}

/// A pair of quantity bounds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Range {
    pub(crate) element: Element,
    pub(crate) low: Option<SimpleQuantity>,
    pub(crate) high: Option<SimpleQuantity>,
}

impl Range {
    pub fn builder() -> RangeBuilder {
        RangeBuilder::default()
    }

    pub fn id(&self) -> Option<&str> {
        self.element.id()
    }

    pub fn extension(&self) -> &[Extension] {
        self.element.extension()
    }

    pub fn low(&self) -> Option<&SimpleQuantity> {
        self.low.as_ref()
    }

    pub fn high(&self) -> Option<&SimpleQuantity> {
        self.high.as_ref()
    }

    pub fn to_builder(&self) -> RangeBuilder {
        RangeBuilder {
            inner: self.clone(),
        }
    }

    fn validate(&self) -> Result<(), FhirError> {
        validation::require_value_or_children(self)
    }
}

#[derive(Debug, Clone, Default)]
pub struct RangeBuilder {
    inner: Range,
}

impl RangeBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.inner.element.id = Some(id.into());
        self
    }

    pub fn extension(mut self, extension: Extension) -> Self {
        self.inner.element.extension.push(extension);
        self
    }

    pub fn set_extension(mut self, extension: Vec<Extension>) -> Self {
        self.inner.element.extension = extension;
        self
    }

    pub fn low(mut self, low: SimpleQuantity) -> Self {
        self.inner.low = Some(low);
        self
    }

    pub fn high(mut self, high: SimpleQuantity) -> Self {
        self.inner.high = Some(high);
        self
    }

    pub fn build(self) -> Result<Range, FhirError> {
        self.inner.validate()?;
        Ok(self.inner)
    }

    pub fn build_unchecked(self) -> Range {
        self.inner
    }
}

impl Visitable for Range {
    fn type_name(&self) -> &'static str {
        "Range"
    }

    fn has_children(&self) -> bool {
        self.element.has_children() || self.low.is_some() || self.high.is_some()
    }

    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        if visitor.pre_visit(self) {
            visitor.visit_start(name, index, self);
            if visitor.visit(name, index, self) {
                self.element.accept_children(visitor);
                accept_opt(&self.low, "low", visitor);
                accept_opt(&self.high, "high", visitor);
            }
            visitor.visit_end(name, index, self);
            visitor.post_visit(self);
        }
    }
}

/// A ratio of two quantities.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Ratio {
    pub(crate) element: Element,
    pub(crate) numerator: Option<Quantity>,
    pub(crate) denominator: Option<SimpleQuantity>,
}

impl Ratio {
    pub fn builder() -> RatioBuilder {
        RatioBuilder::default()
    }

    pub fn id(&self) -> Option<&str> {
        self.element.id()
    }

    pub fn extension(&self) -> &[Extension] {
        self.element.extension()
    }

    pub fn numerator(&self) -> Option<&Quantity> {
        self.numerator.as_ref()
    }

    pub fn denominator(&self) -> Option<&SimpleQuantity> {
        self.denominator.as_ref()
    }

    pub fn to_builder(&self) -> RatioBuilder {
        RatioBuilder {
            inner: self.clone(),
        }
    }

    fn validate(&self) -> Result<(), FhirError> {
        validation::require_value_or_children(self)
    }
}

#[derive(Debug, Clone, Default)]
pub struct RatioBuilder {
    inner: Ratio,
}

impl RatioBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.inner.element.id = Some(id.into());
        self
    }

    pub fn extension(mut self, extension: Extension) -> Self {
        self.inner.element.extension.push(extension);
        self
    }

    pub fn set_extension(mut self, extension: Vec<Extension>) -> Self {
        self.inner.element.extension = extension;
        self
    }

    pub fn numerator(mut self, numerator: Quantity) -> Self {
        self.inner.numerator = Some(numerator);
        self
    }

    pub fn denominator(mut self, denominator: SimpleQuantity) -> Self {
        self.inner.denominator = Some(denominator);
        self
    }

    pub fn build(self) -> Result<Ratio, FhirError> {
        self.inner.validate()?;
        Ok(self.inner)
    }

    pub fn build_unchecked(self) -> Ratio {
        self.inner
    }
}

impl Visitable for Ratio {
    fn type_name(&self) -> &'static str {
        "Ratio"
    }

    fn has_children(&self) -> bool {
        self.element.has_children() || self.numerator.is_some() || self.denominator.is_some()
    }

    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        if visitor.pre_visit(self) {
            visitor.visit_start(name, index, self);
            if visitor.visit(name, index, self) {
                self.element.accept_children(visitor);
                accept_opt(&self.numerator, "numerator", visitor);
                accept_opt(&self.denominator, "denominator", visitor);
            }
            visitor.visit_end(name, index, self);
            visitor.post_visit(self);
        }
    }
}

/// An amount of money in some currency.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Money {
    pub(crate) element: Element,
    pub(crate) value: Option<types::Decimal>,
    pub(crate) currency: Option<types::Code>,
}

impl Money {
    pub fn builder() -> MoneyBuilder {
        MoneyBuilder::default()
    }

    pub fn id(&self) -> Option<&str> {
        self.element.id()
    }

    pub fn extension(&self) -> &[Extension] {
        self.element.extension()
    }

    pub fn value(&self) -> Option<&types::Decimal> {
        self.value.as_ref()
    }

    /// ISO 4217 currency code.
    pub fn currency(&self) -> Option<&types::Code> {
        self.currency.as_ref()
    }

    pub fn to_builder(&self) -> MoneyBuilder {
        MoneyBuilder {
            inner: self.clone(),
        }
    }

    fn validate(&self) -> Result<(), FhirError> {
        validation::require_value_or_children(self)
    }
}

#[derive(Debug, Clone, Default)]
pub struct MoneyBuilder {
    inner: Money,
}

impl MoneyBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.inner.element.id = Some(id.into());
        self
    }

    pub fn extension(mut self, extension: Extension) -> Self {
        self.inner.element.extension.push(extension);
        self
    }

    pub fn set_extension(mut self, extension: Vec<Extension>) -> Self {
        self.inner.element.extension = extension;
        self
    }

    pub fn value(mut self, value: impl Into<types::Decimal>) -> Self {
        self.inner.value = Some(value.into());
        self
    }

    pub fn currency(mut self, currency: impl Into<types::Code>) -> Self {
        self.inner.currency = Some(currency.into());
        self
    }

    pub fn build(self) -> Result<Money, FhirError> {
        self.inner.validate()?;
        Ok(self.inner)
    }

    pub fn build_unchecked(self) -> Money {
        self.inner
    }
}

impl Visitable for Money {
    fn type_name(&self) -> &'static str {
        "Money"
    }

    fn has_children(&self) -> bool {
        self.element.has_children() || self.value.is_some() || self.currency.is_some()
    }

    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        if visitor.pre_visit(self) {
            visitor.visit_start(name, index, self);
            if visitor.visit(name, index, self) {
                self.element.accept_children(visitor);
                accept_opt(&self.value, "value", visitor);
                accept_opt(&self.currency, "currency", visitor);
            }
            visitor.visit_end(name, index, self);
            visitor.post_visit(self);
        }
    }
}
