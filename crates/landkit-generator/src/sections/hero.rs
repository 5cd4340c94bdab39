//! `hero.v1`: headline, subtitle, call-to-action buttons, metrics.

use landkit_ui::{Element, attrs, h};

use super::{link_button, section, value_label};
use crate::{context::RenderContext, data::Data, registry::Result};

pub fn render(d: &Data<'_>, _ctx: &RenderContext) -> Result<Element> {
    let buttons = d
        .items("cta")?
        .iter()
        .map(|b| link_button(b, ""))
        .collect::<Result<Vec<_>>>()?;
    let metrics = d
        .items("metrics")?
        .iter()
        .map(|m| value_label(m, "metric"))
        .collect::<Result<Vec<_>>>()?;

    Ok(section(
        "hero",
        vec![
            h("h1", attrs! {}, d.text_or("h1", "")?),
            h("p", attrs! { "class" => "sub" }, d.text_or("subtitle", "")?),
            h("div", attrs! { "class" => "buttons" }, buttons),
            h("div", attrs! { "class" => "metrics" }, metrics),
        ],
    ))
}
