//! `faqAccordion.v1`: question buttons that expand their answers.

use landkit_ui::{Element, attrs, h, listener};

use super::section;
use crate::{context::RenderContext, data::Data, registry::Result};

pub fn render(d: &Data<'_>, _ctx: &RenderContext) -> Result<Element> {
    let items = d
        .items("items")?
        .iter()
        .map(|item| -> Result<Element> {
            let wrap = h("div", attrs! { "class" => "faq-item" }, ());
            // The button lives inside `wrap`; hold it weakly to avoid a cycle.
            let target = wrap.downgrade();
            let question = h(
                "button",
                attrs! {
                    "class" => "faq-q",
                    "type" => "button",
                    "onclick" => listener(move |_| {
                        if let Some(wrap) = target.upgrade() {
                            wrap.toggle_class("open");
                        }
                    }),
                },
                vec![
                    h("span", attrs! {}, item.text_or("q", "")?),
                    h("span", attrs! { "class" => "chev" }, "▾"),
                ],
            );
            wrap.append_child(question);
            wrap.append_child(h("div", attrs! { "class" => "faq-a" }, item.text_or("a", "")?));
            Ok(wrap)
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(section(
        "section dark",
        vec![
            h("h2", attrs! {}, d.text_or("h2", "FAQ")?),
            h("div", attrs! { "class" => "faq-list" }, items),
        ],
    ))
}
