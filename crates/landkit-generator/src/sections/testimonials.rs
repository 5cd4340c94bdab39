//! `testimonials.v1`: quote cards with star ratings.

use landkit_ui::{Element, attrs, h};

use super::{section, subtitle};
use crate::{context::RenderContext, data::Data, registry::Result};

/// Five-glyph rating. Absent or zero ratings show full marks.
#[must_use]
pub fn stars(rating: Option<f64>) -> String {
    let rating = rating.filter(|n| *n != 0.0).unwrap_or(5.0);
    // Truncation is intended: 3.5 shows three filled stars.
    let filled = rating.clamp(0.0, 5.0) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

pub fn render(d: &Data<'_>, _ctx: &RenderContext) -> Result<Element> {
    let cards = d
        .items("items")?
        .iter()
        .map(|t| -> Result<Element> {
            Ok(h(
                "div",
                attrs! { "class" => "test" },
                vec![
                    h("div", attrs! { "class" => "stars" }, stars(t.number("stars"))),
                    h("p", attrs! {}, t.text_or("text", "")?),
                    h("div", attrs! { "class" => "person" }, t.text_or("name", "")?),
                    h("div", attrs! { "class" => "role" }, t.text_or("role", "")?),
                ],
            ))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(section(
        "section",
        vec![
            h("h2", attrs! {}, d.text_or("h2", "Testimonials")?),
            subtitle(d)?,
            h("div", attrs! { "class" => "test-grid" }, cards),
        ],
    ))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::context::fixed_context;

    #[test]
    fn test_stars() {
        assert_eq!(stars(None), "★★★★★");
        assert_eq!(stars(Some(0.0)), "★★★★★");
        assert_eq!(stars(Some(4.0)), "★★★★☆");
        assert_eq!(stars(Some(3.5)), "★★★☆☆");
        assert_eq!(stars(Some(9.0)), "★★★★★");
        assert_eq!(stars(Some(-2.0)), "☆☆☆☆☆");
    }

    #[test]
    fn test_cards() {
        let value = json!({
            "items": [{ "stars": 4, "text": "Great", "name": "Dana", "role": "CTO" }]
        });
        let el = render(&Data::new("testimonials.v1", &value), &fixed_context()).unwrap();
        assert_eq!(el.query_class("stars")[0].text_content(), "★★★★☆");
        assert_eq!(el.query_class("person")[0].text_content(), "Dana");
        assert_eq!(el.query_tag("h2")[0].text_content(), "Testimonials");
    }
}
