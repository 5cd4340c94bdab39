//! Static section renderers.
//!
//! Each renderer is a plain function from a payload to a `<section>` tree.
//! Missing fields fall back to empty strings, empty lists, or a per-section
//! default heading.

pub mod contact_form;
pub mod cta_banner;
pub mod faq;
pub mod features;
pub mod hero;
pub mod how_it_works;
pub mod legal_text;
pub mod seo_intro;
pub mod social_proof;
pub mod testimonials;

use landkit_ui::{Attrs, ChildSpec, Element, attrs, h};

use crate::{data::Data, registry::Result};

/// `<section class=..><div class="container">body</div></section>`.
pub(crate) fn section(class: &str, body: impl Into<ChildSpec>) -> Element {
    section_with(class, attrs! { "class" => "container" }, body)
}

/// Like [`section`], with custom attributes on the container.
pub(crate) fn section_with(class: &str, container: Attrs, body: impl Into<ChildSpec>) -> Element {
    h("section", attrs! { "class" => class }, h("div", container, body))
}

/// `<a class="btn <variant>">` from a `{label, href, variant}` payload.
pub(crate) fn link_button(d: &Data<'_>, default_label: &str) -> Result<Element> {
    let variant = d.text_or("variant", "primary")?;
    Ok(h(
        "a",
        attrs! {
            "class" => format!("btn {variant}"),
            "href" => d.text_or("href", "#")?,
        },
        d.text_or("label", default_label)?,
    ))
}

/// A `{value, label}` pair rendered as two paragraphs.
pub(crate) fn value_label(d: &Data<'_>, class: &str) -> Result<Element> {
    Ok(h(
        "div",
        attrs! { "class" => class },
        vec![
            h("p", attrs! { "class" => "v" }, d.text_or("value", "")?),
            h("p", attrs! { "class" => "l" }, d.text_or("label", "")?),
        ],
    ))
}

/// Centered subtitle paragraph used under most section headings.
pub(crate) fn subtitle(d: &Data<'_>) -> Result<Element> {
    Ok(h("p", attrs! { "class" => "subcenter" }, d.text_or("subtitle", "")?))
}
