//! `seoIntro.v1`: heading followed by plain paragraphs.

use landkit_ui::{Element, attrs, h};

use super::section;
use crate::{context::RenderContext, data::Data, registry::Result};

pub fn render(d: &Data<'_>, _ctx: &RenderContext) -> Result<Element> {
    let mut body = vec![h("h2", attrs! {}, d.text_or("h2", "")?)];
    body.extend(
        d.strings("text")?
            .into_iter()
            .map(|t| h("p", attrs! {}, t)),
    );
    Ok(section("section", body))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::context::fixed_context;

    #[test]
    fn test_paragraphs_in_order() {
        let value = json!({ "h2": "About", "text": ["First", "Second"] });
        let el = render(&Data::new("seoIntro.v1", &value), &fixed_context()).unwrap();
        assert_eq!(
            el.to_html(),
            "<section class=\"section\"><div class=\"container\"><h2>About</h2><p>First</p><p>Second</p></div></section>"
        );
    }
}
