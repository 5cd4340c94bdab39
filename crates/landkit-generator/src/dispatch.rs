//! Section dispatch: descriptor in, element (or render error) out.

use landkit_core::SectionDescriptor;
use landkit_ui::{Element, attrs, h};

use crate::{
    context::RenderContext,
    data::Data,
    registry::{Registry, Result},
};

const UNKNOWN_STYLE: &str = "padding:18px;color:#bdbdbd";

/// Resolves descriptors against a registry.
#[derive(Debug, Clone, Copy)]
pub struct Dispatcher<'a> {
    registry: &'a Registry,
    ctx: &'a RenderContext,
}

impl<'a> Dispatcher<'a> {
    #[must_use]
    pub fn new(registry: &'a Registry, ctx: &'a RenderContext) -> Self {
        Self { registry, ctx }
    }

    /// Render one section.
    ///
    /// A null descriptor yields an empty `div`. An unregistered type yields a
    /// visible placeholder naming it. Renderer failures are returned to the
    /// caller untouched.
    pub fn render(&self, descriptor: Option<&SectionDescriptor>) -> Result<Element> {
        let Some(descriptor) = descriptor else {
            return Ok(h("div", attrs! {}, ()));
        };

        let renderer = descriptor
            .section_type
            .as_deref()
            .and_then(|t| self.registry.get(t));

        let el = match renderer {
            Some(renderer) => {
                let data = Data::new(descriptor.type_label(), &descriptor.data);
                renderer.render(&data, self.ctx)?
            }
            None => unknown_placeholder(descriptor.type_label()),
        };

        if let Some(id) = descriptor.id.as_deref().filter(|id| !id.is_empty()) {
            el.set_id(id);
        }
        Ok(el)
    }
}

/// Low-emphasis block shown for a type nothing is registered under.
#[must_use]
pub fn unknown_placeholder(section_type: &str) -> Element {
    h(
        "div",
        attrs! { "style" => UNKNOWN_STYLE },
        format!("Unknown section type: {section_type}"),
    )
}
