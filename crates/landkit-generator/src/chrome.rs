//! Site header and footer.

use landkit_core::{LinkButton, NavLink, Site};
use landkit_ui::{Element, attrs, h, listener};

use crate::context::RenderContext;

/// Field text, treating empty strings as absent.
fn or<'a>(value: &'a Option<String>, default: &'a str) -> &'a str {
    value.as_deref().filter(|v| !v.is_empty()).unwrap_or(default)
}

fn nav_links(links: &[NavLink]) -> Vec<Element> {
    links
        .iter()
        .map(|item| {
            h(
                "a",
                attrs! { "href" => or(&item.href, "#") },
                or(&item.label, "Link"),
            )
        })
        .collect()
}

fn brand_name(site: &Site) -> &str {
    or(&site.brand.name, "Brand")
}

/// Brand, nav, call to action, and a burger that opens the mobile nav.
#[must_use]
pub fn render_header(site: &Site) -> Element {
    let default_cta = LinkButton {
        label: Some("Request".to_string()),
        href: Some("contact.html".to_string()),
        variant: Some("primary".to_string()),
    };
    let cta = site.header.cta.as_ref().unwrap_or(&default_cta);

    let mobile = h(
        "div",
        attrs! { "class" => "mobile-nav container" },
        nav_links(&site.header.nav),
    );
    let target = mobile.downgrade();
    let burger = h(
        "button",
        attrs! {
            "class" => "burger",
            "type" => "button",
            "onclick" => listener(move |_| {
                if let Some(mobile) = target.upgrade() {
                    mobile.toggle_class("open");
                }
            }),
        },
        "☰",
    );

    let row = h(
        "div",
        attrs! { "class" => "row" },
        vec![
            h(
                "a",
                attrs! { "class" => "brand", "href" => "index.html" },
                vec![
                    h("span", attrs! { "class" => "brand-badge" }, ()),
                    h("span", attrs! {}, brand_name(site)),
                ],
            ),
            h("nav", attrs! { "class" => "nav" }, nav_links(&site.header.nav)),
            h(
                "div",
                attrs! { "class" => "header-cta" },
                h(
                    "a",
                    attrs! {
                        "class" => format!("btn {}", or(&cta.variant, "primary")),
                        "href" => or(&cta.href, "#"),
                    },
                    or(&cta.label, "CTA"),
                ),
            ),
            burger,
        ],
    );

    h(
        "header",
        attrs! { "class" => "header" },
        vec![h("div", attrs! { "class" => "container" }, row), mobile],
    )
}

/// Brand column, link column, and the copyright line with `{year}` and
/// `{date}` filled in.
#[must_use]
pub fn render_footer(site: &Site, ctx: &RenderContext) -> Element {
    let links: Vec<Element> = nav_links(&site.footer.links)
        .into_iter()
        .map(|a| h("div", attrs! {}, a))
        .collect();
    let copyright = ctx.fill_date_placeholders(site.footer.copyright.as_deref().unwrap_or(""));

    h(
        "footer",
        attrs! { "class" => "footer" },
        h(
            "div",
            attrs! { "class" => "container" },
            vec![
                h(
                    "div",
                    attrs! { "class" => "cols" },
                    vec![
                        h(
                            "div",
                            attrs! {},
                            vec![
                                h(
                                    "div",
                                    attrs! { "style" => "font-weight:800;color:#fff;margin-bottom:8px" },
                                    brand_name(site),
                                ),
                                h(
                                    "div",
                                    attrs! { "class" => "small" },
                                    or(&site.brand.tagline, ""),
                                ),
                            ],
                        ),
                        h("div", attrs! {}, links),
                    ],
                ),
                h("div", attrs! { "style" => "margin-top:16px" }, copyright),
            ],
        ),
    )
}

#[cfg(test)]
mod tests {
    use landkit_core::{Brand, FooterConfig, HeaderConfig};
    use landkit_ui::Event;

    use super::*;
    use crate::context::fixed_context;

    fn site() -> Site {
        Site {
            brand: Brand {
                name: Some("Acme".to_string()),
                tagline: Some("Rockets".to_string()),
            },
            header: HeaderConfig {
                cta: None,
                nav: vec![
                    NavLink {
                        label: Some("Providers".to_string()),
                        href: Some("#providers".to_string()),
                    },
                    NavLink::default(),
                ],
            },
            footer: FooterConfig {
                links: vec![NavLink {
                    label: Some("Privacy".to_string()),
                    href: Some("privacy-policy.html".to_string()),
                }],
                copyright: Some("© {year} Acme. Built {date}.".to_string()),
            },
            pages: Default::default(),
        }
    }

    #[test]
    fn test_header_defaults() {
        let header = render_header(&site());
        let html = header.to_html();

        assert!(html.contains(r#"<a class="btn primary" href="contact.html">Request</a>"#));
        assert!(html.contains(r##"<a href="#">Link</a>"##));
        assert_eq!(header.query_class("nav")[0].child_elements().len(), 2);
        assert_eq!(header.query_class("brand")[0].text_content(), "Acme");
    }

    #[test]
    fn test_burger_toggles_mobile_nav() {
        let header = render_header(&site());
        let burger = &header.query_class("burger")[0];
        let mobile = &header.query_class("mobile-nav")[0];

        assert_eq!(mobile.child_elements().len(), 2);
        assert!(!mobile.has_class("open"));
        burger.dispatch_event(&Event::click());
        assert!(mobile.has_class("open"));
        burger.dispatch_event(&Event::click());
        assert!(!mobile.has_class("open"));
    }

    #[test]
    fn test_footer_placeholders() {
        let footer = render_footer(&site(), &fixed_context());
        let text = footer.text_content();
        assert!(text.contains("© 2024 Acme. Built 2024-03-07."));
        assert!(!text.contains("{year}"));
        assert!(text.contains("Rockets"));
        assert_eq!(footer.query_tag("a").len(), 1);
    }

    #[test]
    fn test_unnamed_brand() {
        let mut site = site();
        site.brand.name = None;
        assert!(render_footer(&site, &fixed_context()).text_content().starts_with("Brand"));
    }
}
