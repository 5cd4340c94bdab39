//! `socialProof.v1`: logo pills and headline stats.

use landkit_ui::{Element, attrs, h};

use super::{section, subtitle, value_label};
use crate::{context::RenderContext, data::Data, registry::Result};

pub fn render(d: &Data<'_>, _ctx: &RenderContext) -> Result<Element> {
    let logos = d
        .items("logos")?
        .iter()
        .map(|l| -> Result<Element> {
            Ok(h("div", attrs! { "class" => "logo-pill" }, l.text_or("text", "Logo")?))
        })
        .collect::<Result<Vec<_>>>()?;
    let stats = d
        .items("stats")?
        .iter()
        .map(|s| value_label(s, "stat"))
        .collect::<Result<Vec<_>>>()?;

    Ok(section(
        "section social",
        vec![
            h("h2", attrs! {}, d.text_or("h2", "")?),
            subtitle(d)?,
            h("div", attrs! { "class" => "logo-row" }, logos),
            h("div", attrs! { "class" => "stats-row" }, stats),
        ],
    ))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::context::fixed_context;

    #[test]
    fn test_logo_default_text() {
        let value = json!({
            "h2": "Trusted",
            "logos": [{ "text": "Acme" }, {}],
            "stats": [{ "value": "99.9%", "label": "Uptime" }]
        });
        let el = render(&Data::new("socialProof.v1", &value), &fixed_context()).unwrap();

        let pills: Vec<String> = el
            .query_class("logo-pill")
            .iter()
            .map(Element::text_content)
            .collect();
        assert_eq!(pills, vec!["Acme", "Logo"]);
        assert_eq!(el.query_class("stat").len(), 1);
        assert_eq!(el.class_name(), "section social");
    }
}
