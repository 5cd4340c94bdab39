//! `howItWorks.v1`: numbered steps.

use landkit_ui::{Element, attrs, h};

use super::{section, subtitle};
use crate::{context::RenderContext, data::Data, registry::Result};

pub fn render(d: &Data<'_>, _ctx: &RenderContext) -> Result<Element> {
    let steps = d
        .items("steps")?
        .iter()
        .enumerate()
        .map(|(idx, st)| -> Result<Element> {
            Ok(h(
                "div",
                attrs! { "class" => "step" },
                vec![
                    h("div", attrs! { "class" => "num" }, format!("{:02}", idx + 1)),
                    h("h3", attrs! { "style" => "margin:0 0 8px" }, st.text_or("title", "")?),
                    h("p", attrs! { "style" => "margin:0" }, st.text_or("text", "")?),
                ],
            ))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(section(
        "section steps",
        vec![
            h("h2", attrs! {}, d.text_or("h2", "How It Works")?),
            subtitle(d)?,
            h("div", attrs! { "class" => "step-row" }, steps),
        ],
    ))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::context::fixed_context;

    #[test]
    fn test_steps_are_zero_padded() {
        let steps: Vec<_> = (1..=10).map(|i| json!({ "title": format!("Step {i}") })).collect();
        let value = json!({ "steps": steps });
        let el = render(&Data::new("howItWorks.v1", &value), &fixed_context()).unwrap();

        let nums: Vec<String> = el.query_class("num").iter().map(Element::text_content).collect();
        assert_eq!(nums.first().map(String::as_str), Some("01"));
        assert_eq!(nums.get(8).map(String::as_str), Some("09"));
        assert_eq!(nums.last().map(String::as_str), Some("10"));
        assert_eq!(el.query_tag("h2")[0].text_content(), "How It Works");
    }
}
