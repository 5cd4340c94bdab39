//! Section registry.
//!
//! Maps a section type tag (`"hero.v1"`, ...) to the renderer that turns its
//! data payload into an element tree. The built-in kinds form a closed enum;
//! the registry itself stays open so callers can add their own types.

use std::{collections::HashMap, fmt, str::FromStr};

use landkit_ui::Element;
use thiserror::Error;

use crate::{context::RenderContext, data::Data, providers, sections};

/// Errors raised while rendering a single section.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A payload field is present but has the wrong shape.
    #[error("field `{field}` of {section} must be a {expected}")]
    InvalidField {
        section: String,
        field: String,
        expected: &'static str,
    },

    /// Renderer-specific failure.
    #[error("{0}")]
    Failed(String),
}

/// Result type for section rendering.
pub type Result<T> = std::result::Result<T, RenderError>;

/// A type tag no built-in section kind answers to.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown section type: {0}")]
pub struct UnknownSectionType(pub String);

/// The built-in section kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Hero,
    SocialProof,
    SeoIntro,
    FeaturesCards,
    HowItWorks,
    ProvidersGrid,
    Testimonials,
    FaqAccordion,
    CtaBanner,
    ContactForm,
    LegalText,
}

impl SectionKind {
    pub const ALL: [Self; 11] = [
        Self::Hero,
        Self::SocialProof,
        Self::SeoIntro,
        Self::FeaturesCards,
        Self::HowItWorks,
        Self::ProvidersGrid,
        Self::Testimonials,
        Self::FaqAccordion,
        Self::CtaBanner,
        Self::ContactForm,
        Self::LegalText,
    ];

    /// The type tag used in content files.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hero => "hero.v1",
            Self::SocialProof => "socialProof.v1",
            Self::SeoIntro => "seoIntro.v1",
            Self::FeaturesCards => "featuresCards.v1",
            Self::HowItWorks => "howItWorks.v1",
            Self::ProvidersGrid => "providersGrid.v1",
            Self::Testimonials => "testimonials.v1",
            Self::FaqAccordion => "faqAccordion.v1",
            Self::CtaBanner => "ctaBanner.v1",
            Self::ContactForm => "contactForm.v1",
            Self::LegalText => "legalText.v1",
        }
    }

    /// The built-in renderer for this kind.
    #[must_use]
    pub fn renderer(self) -> Box<dyn SectionRenderer> {
        match self {
            Self::Hero => Box::new(sections::hero::render),
            Self::SocialProof => Box::new(sections::social_proof::render),
            Self::SeoIntro => Box::new(sections::seo_intro::render),
            Self::FeaturesCards => Box::new(sections::features::render),
            Self::HowItWorks => Box::new(sections::how_it_works::render),
            Self::ProvidersGrid => Box::new(providers::render),
            Self::Testimonials => Box::new(sections::testimonials::render),
            Self::FaqAccordion => Box::new(sections::faq::render),
            Self::CtaBanner => Box::new(sections::cta_banner::render),
            Self::ContactForm => Box::new(sections::contact_form::render),
            Self::LegalText => Box::new(sections::legal_text::render),
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionKind {
    type Err = UnknownSectionType;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownSectionType(s.to_string()))
    }
}

/// Turns a section payload into its root element.
pub trait SectionRenderer: Send + Sync {
    fn render(&self, data: &Data<'_>, ctx: &RenderContext) -> Result<Element>;
}

impl<F> SectionRenderer for F
where
    F: Fn(&Data<'_>, &RenderContext) -> Result<Element> + Send + Sync,
{
    fn render(&self, data: &Data<'_>, ctx: &RenderContext) -> Result<Element> {
        self(data, ctx)
    }
}

/// Type tag to renderer mapping.
pub struct Registry {
    renderers: HashMap<String, Box<dyn SectionRenderer>>,
}

impl Registry {
    /// Create a registry with every built-in section kind.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register_defaults();
        registry
    }

    /// Create a registry with nothing registered.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            renderers: HashMap::new(),
        }
    }

    fn register_defaults(&mut self) {
        for kind in SectionKind::ALL {
            self.renderers
                .insert(kind.as_str().to_string(), kind.renderer());
        }
    }

    /// Register (or replace) the renderer for a type tag.
    pub fn register(&mut self, section_type: impl Into<String>, renderer: impl SectionRenderer + 'static) {
        let section_type = section_type.into();
        if self.renderers.contains_key(&section_type) {
            tracing::debug!(section_type = %section_type, "replacing section renderer");
        }
        self.renderers.insert(section_type, Box::new(renderer));
    }

    #[must_use]
    pub fn get(&self, section_type: &str) -> Option<&dyn SectionRenderer> {
        self.renderers.get(section_type).map(Box::as_ref)
    }

    #[must_use]
    pub fn contains(&self, section_type: &str) -> bool {
        self.renderers.contains_key(section_type)
    }

    /// Registered type tags, sorted.
    #[must_use]
    pub fn types(&self) -> Vec<&str> {
        let mut types: Vec<&str> = self.renderers.keys().map(String::as_str).collect();
        types.sort_unstable();
        types
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("types", &self.types())
            .finish()
    }
}
