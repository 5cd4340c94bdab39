//! `legalText.v1`: title, "last updated" line, paragraphs.

use landkit_ui::{Element, attrs, h};

use super::section;
use crate::{context::RenderContext, data::Data, registry::Result};

pub fn render(d: &Data<'_>, ctx: &RenderContext) -> Result<Element> {
    let paragraphs: Vec<Element> = d
        .strings("paragraphs")?
        .into_iter()
        .map(|p| h("p", attrs! {}, p))
        .collect();

    Ok(section(
        "section legal",
        vec![
            h("h1", attrs! {}, d.text_or("title", "Legal")?),
            h("p", attrs! {}, ctx.fill_date_placeholders(&d.text_or("updated", "")?)),
            h("div", attrs! { "class" => "box" }, paragraphs),
        ],
    ))
}
