//! `ctaBanner.v1`: centered title with an optional button.

use landkit_ui::{ChildSpec, Element, attrs, h};

use super::{link_button, section_with, subtitle};
use crate::{context::RenderContext, data::Data, registry::Result};

pub fn render(d: &Data<'_>, _ctx: &RenderContext) -> Result<Element> {
    let button = d
        .object("button")
        .map(|b| link_button(&b, "CTA"))
        .transpose()?;

    Ok(section_with(
        "section",
        attrs! { "class" => "container", "style" => "text-align:center" },
        vec![
            ChildSpec::from(h("h2", attrs! {}, d.text_or("title", "")?)),
            ChildSpec::from(subtitle(d)?),
            ChildSpec::from(button),
        ],
    ))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::context::fixed_context;

    #[test]
    fn test_button_is_optional() {
        let value = json!({ "title": "Ready?" });
        let el = render(&Data::new("ctaBanner.v1", &value), &fixed_context()).unwrap();
        assert!(el.query_tag("a").is_empty());

        let value = json!({ "title": "Ready?", "button": { "href": "contact.html" } });
        let el = render(&Data::new("ctaBanner.v1", &value), &fixed_context()).unwrap();
        let button = &el.query_tag("a")[0];
        assert_eq!(button.text_content(), "CTA");
        assert_eq!(button.attribute("href").as_deref(), Some("contact.html"));
        assert!(el.to_html().contains(r#"style="text-align:center""#));
    }
}
