use lumen_fhir_support::FhirError;
use lumen_fhir_support::validation;
use lumen_fhir_support::visitor::{accept_opt, Visitable, Visitor};

use crate::r5::complex_types::Extension;
use crate::r5::element::Element;
use crate::r5::primitives as types;

/// Content defined elsewhere or carried inline as raw bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Attachment {
    pub(crate) element: Element,
    pub(crate) content_type: Option<types::Code>,
    pub(crate) language: Option<types::Code>,
    pub(crate) data: Option<types::Base64Binary>,
    pub(crate) url: Option<types::Url>,
    pub(crate) size: Option<types::Integer64>,
    pub(crate) hash: Option<types::Base64Binary>,
    pub(crate) title: Option<types::String>,
    pub(crate) creation: Option<types::DateTime>,
    pub(crate) height: Option<types::PositiveInt>,
    pub(crate) width: Option<types::PositiveInt>,
    pub(crate) frames: Option<types::PositiveInt>,
    pub(crate) duration: Option<types::Decimal>,
    pub(crate) pages: Option<types::PositiveInt>,
}

impl Attachment {
    pub fn builder() -> AttachmentBuilder {
        AttachmentBuilder::default()
    }

    pub fn id(&self) -> Option<&str> {
        self.element.id()
    }

    pub fn extension(&self) -> &[Extension] {
        self.element.extension()
    }

    pub fn content_type(&self) -> Option<&types::Code> {
        self.content_type.as_ref()
    }

    pub fn language(&self) -> Option<&types::Code> {
        self.language.as_ref()
    }

    pub fn data(&self) -> Option<&types::Base64Binary> {
        self.data.as_ref()
    }

    pub fn url(&self) -> Option<&types::Url> {
        self.url.as_ref()
    }

    pub fn size(&self) -> Option<&types::Integer64> {
        self.size.as_ref()
    }

    pub fn hash(&self) -> Option<&types::Base64Binary> {
        self.hash.as_ref()
    }

    pub fn title(&self) -> Option<&types::String> {
        self.title.as_ref()
    }

    pub fn creation(&self) -> Option<&types::DateTime> {
        self.creation.as_ref()
    }

    pub fn height(&self) -> Option<&types::PositiveInt> {
        self.height.as_ref()
    }

    pub fn width(&self) -> Option<&types::PositiveInt> {
        self.width.as_ref()
    }

    pub fn frames(&self) -> Option<&types::PositiveInt> {
        self.frames.as_ref()
    }

    pub fn duration(&self) -> Option<&types::Decimal> {
        self.duration.as_ref()
    }

    pub fn pages(&self) -> Option<&types::PositiveInt> {
        self.pages.as_ref()
    }

    pub fn to_builder(&self) -> AttachmentBuilder {
        AttachmentBuilder {
            inner: self.clone(),
        }
    }

    fn validate(&self) -> Result<(), FhirError> {
        validation::require_value_or_children(self)
    }
}

#[derive(Debug, Clone, Default)]
pub struct AttachmentBuilder {
    inner: Attachment,
}

impl AttachmentBuilder {
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

    pub fn content_type(mut self, content_type: impl Into<types::Code>) -> Self {
        self.inner.content_type = Some(content_type.into());
        self
    }

    pub fn language(mut self, language: impl Into<types::Code>) -> Self {
        self.inner.language = Some(language.into());
        self
    }

    pub fn data(mut self, data: impl Into<types::Base64Binary>) -> Self {
        self.inner.data = Some(data.into());
        self
    }

    pub fn url(mut self, url: impl Into<types::Url>) -> Self {
        self.inner.url = Some(url.into());
        self
    }

    pub fn size(mut self, size: impl Into<types::Integer64>) -> Self {
        self.inner.size = Some(size.into());
        self
    }

    pub fn hash(mut self, hash: impl Into<types::Base64Binary>) -> Self {
        self.inner.hash = Some(hash.into());
        self
    }

    pub fn title(mut self, title: impl Into<types::String>) -> Self {
        self.inner.title = Some(title.into());
        self
    }

    pub fn creation(mut self, creation: impl Into<types::DateTime>) -> Self {
        self.inner.creation = Some(creation.into());
        self
    }

    pub fn height(mut self, height: impl Into<types::PositiveInt>) -> Self {
        self.inner.height = Some(height.into());
        self
    }

    pub fn width(mut self, width: impl Into<types::PositiveInt>) -> Self {
        self.inner.width = Some(width.into());
        self
    }

    pub fn frames(mut self, frames: impl Into<types::PositiveInt>) -> Self {
        self.inner.frames = Some(frames.into());
        self
    }

    pub fn duration(mut self, duration: impl Into<types::Decimal>) -> Self {
        self.inner.duration = Some(duration.into());
        self
    }

    pub fn pages(mut self, pages: impl Into<types::PositiveInt>) -> Self {
        self.inner.pages = Some(pages.into());
        self
    }

    pub fn build(self) -> Result<Attachment, FhirError> {
        self.inner.validate()?;
        Ok(self.inner)
    }

    pub fn build_unchecked(self) -> Attachment {
        self.inner
    }
}

impl Visitable for Attachment {
    fn type_name(&self) -> &'static str {
        "Attachment"
    }

    fn has_children(&self) -> bool {
        self.element.has_children()
            || self.content_type.is_some()
            || self.language.is_some()
            || self.data.is_some()
            || self.url.is_some()
            || self.size.is_some()
            || self.hash.is_some()
            || self.title.is_some()
            || self.creation.is_some()
            || self.height.is_some()
            || self.width.is_some()
            || self.frames.is_some()
            || self.duration.is_some()
            || self.pages.is_some()
    }

    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        if visitor.pre_visit(self) {
            visitor.visit_start(name, index, self);
            if visitor.visit(name, index, self) {
                self.element.accept_children(visitor);
                accept_opt(&self.content_type, "contentType", visitor);
                accept_opt(&self.language, "language", visitor);
                accept_opt(&self.data, "data", visitor);
                accept_opt(&self.url, "url", visitor);
                accept_opt(&self.size, "size", visitor);
                accept_opt(&self.hash, "hash", visitor);
                accept_opt(&self.title, "title", visitor);
                accept_opt(&self.creation, "creation", visitor);
                accept_opt(&self.height, "height", visitor);
                accept_opt(&self.width, "width", visitor);
                accept_opt(&self.frames, "frames", visitor);
                accept_opt(&self.duration, "duration", visitor);
                accept_opt(&self.pages, "pages", visitor);
            }
            visitor.visit_end(name, index, self);
            visitor.post_visit(self);
        }
    }
}
