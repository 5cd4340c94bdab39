//! `featuresCards.v1`: a grid of title/text cards.

use landkit_ui::{Element, attrs, h};

use super::section;
use crate::{context::RenderContext, data::Data, registry::Result};

pub fn render(d: &Data<'_>, _ctx: &RenderContext) -> Result<Element> {
    let cards = d
        .items("items")?
        .iter()
        .map(|it| -> Result<Element> {
            Ok(h(
                "div",
                attrs! { "class" => "card" },
                vec![
                    h("h3", attrs! {}, it.text_or("title", "")?),
                    h("p", attrs! {}, it.text_or("text", "")?),
                ],
            ))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(section(
        "section dark",
        vec![
            h("h2", attrs! {}, d.text_or("h2", "")?),
            h("div", attrs! { "class" => "grid" }, cards),
        ],
    ))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::context::fixed_context;

    #[test]
    fn test_cards() {
        let value = json!({
            "h2": "Why us",
            "items": [{ "title": "Fast", "text": "Quick setup" }, { "title": "Safe" }]
        });
        let el = render(&Data::new("featuresCards.v1", &value), &fixed_context()).unwrap();
        let cards = el.query_class("card");
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].text_content(), "FastQuick setup");
        assert_eq!(cards[1].query_tag("p")[0].text_content(), "");
    }
}
