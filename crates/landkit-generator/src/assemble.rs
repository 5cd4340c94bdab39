//! Page assembly.
//!
//! Mounts one page of the site into a host [`Document`]: SEO sinks, then
//! header, every section in order, footer. A section that fails to render is
//! replaced by an inline error block and assembly carries on.

use landkit_core::{Config, Site};
use landkit_ui::{Document, Element, attrs, h};
use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::{
    chrome::{render_footer, render_header},
    context::RenderContext,
    dispatch::Dispatcher,
    registry::{Registry, RenderError},
};

const ERROR_BLOCK_STYLE: &str =
    "padding:18px;border-radius:8px;margin:12px 0;background:#2a1010;color:#fff";

const MISSING_SCHEMA_HTML: &str = "<pre style=\"padding:16px;white-space:pre-wrap;color:#fff;background:#111;\">\
ERROR: content schema is missing.\n\n\
Fix:\n\
1) Ensure the content file exists (site.yaml, site.json or site.toml)\n\
2) Point `site.content` in landkit.toml at it\n\
3) Ensure it defines `pages` with at least the requested page key\n\
</pre>";

/// Errors that stop a page from being mounted at all.
#[derive(Debug, Error)]
pub enum EngineError {
    /// No content schema was supplied.
    #[error("content schema is missing")]
    MissingSchema,

    /// The host document has no root container.
    #[error("missing root container #{0}")]
    MissingRoot(String),
}

/// A section that rendered as an error block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionFailure {
    /// Position in the page's section list.
    pub index: usize,
    pub section_type: String,
    pub message: String,
}

/// How a mount ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MountOutcome {
    Rendered {
        /// Number of section slots on the page, null ones included.
        sections: usize,
        failed: Vec<SectionFailure>,
        /// Distinct unregistered type tags, in first-seen order.
        unknown: Vec<String>,
    },
    /// The page key named no page; a notice was mounted instead.
    PageNotFound,
}

/// Summary of one mount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountReport {
    pub page_key: String,
    pub outcome: MountOutcome,
}

impl MountReport {
    #[must_use]
    pub fn is_page_found(&self) -> bool {
        !matches!(self.outcome, MountOutcome::PageNotFound)
    }

    #[must_use]
    pub fn failed(&self) -> &[SectionFailure] {
        match &self.outcome {
            MountOutcome::Rendered { failed, .. } => failed,
            MountOutcome::PageNotFound => &[],
        }
    }
}

/// Ids of the host document elements the assembler writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountOptions {
    pub root_id: String,
    pub seo_title_id: String,
    pub seo_description_id: String,
    /// Page rendered when the document carries no page key.
    pub default_page: String,
}

impl Default for MountOptions {
    fn default() -> Self {
        Self {
            root_id: "app".to_string(),
            seo_title_id: "seo-title".to_string(),
            seo_description_id: "seo-description".to_string(),
            default_page: "home".to_string(),
        }
    }
}

impl MountOptions {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            root_id: config.render.root_id.clone(),
            seo_title_id: config.render.seo_title_id.clone(),
            seo_description_id: config.render.seo_description_id.clone(),
            default_page: config.site.default_page.clone(),
        }
    }
}

/// Mounts pages of a site into host documents.
#[derive(Debug)]
pub struct PageAssembler<'a> {
    registry: &'a Registry,
    ctx: &'a RenderContext,
    options: MountOptions,
}

impl<'a> PageAssembler<'a> {
    #[must_use]
    pub fn new(registry: &'a Registry, ctx: &'a RenderContext) -> Self {
        Self {
            registry,
            ctx,
            options: MountOptions::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: MountOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn options(&self) -> &MountOptions {
        &self.options
    }

    /// Mount the page selected by the document's page key.
    ///
    /// A missing schema or root container is an error and nothing is
    /// mounted (the schema case writes a diagnostic into the body). An
    /// unknown page key mounts a "page not found" notice and still returns
    /// `Ok`.
    pub fn mount(&self, doc: &Document, site: Option<&Site>) -> Result<MountReport, EngineError> {
        let Some(site) = site else {
            error!("content schema is missing; load it before mounting");
            doc.body().clear_children();
            doc.body().set_inner_html(MISSING_SCHEMA_HTML);
            return Err(EngineError::MissingSchema);
        };

        let Some(root) = doc.get_element_by_id(&self.options.root_id) else {
            error!(root_id = %self.options.root_id, "root container not found in host document");
            return Err(EngineError::MissingRoot(self.options.root_id.clone()));
        };

        let page_key = doc
            .page_key()
            .unwrap_or_else(|| self.options.default_page.clone());

        let Some(page) = site.page(&page_key) else {
            error!(page = %page_key, "page not found in content schema");
            root.clear_children();
            root.set_inner_html("");
            root.append_child(page_not_found(&page_key));
            return Ok(MountReport {
                page_key,
                outcome: MountOutcome::PageNotFound,
            });
        };

        self.write_seo(doc, site, page);

        let mut unknown: Vec<String> = Vec::new();
        for ty in page.descriptors().filter_map(|d| d.section_type.as_deref()) {
            if !self.registry.contains(ty) && !unknown.iter().any(|u| u == ty) {
                unknown.push(ty.to_string());
            }
        }
        if self.ctx.dev {
            info!(schema = true, page = %page_key, sections = page.sections.len(), "dev diagnostics");
            if !unknown.is_empty() {
                warn!(types = ?unknown, "unknown section types");
            }
        }

        root.clear_children();
        root.set_inner_html("");
        root.append_child(render_header(site));

        let dispatcher = Dispatcher::new(self.registry, self.ctx);
        let mut failed = Vec::new();
        for (index, section) in page.sections.iter().enumerate() {
            match dispatcher.render(section.as_ref()) {
                Ok(el) => root.append_child(el),
                Err(e) => {
                    let section_type = section
                        .as_ref()
                        .map_or("(missing)", |s| s.type_label())
                        .to_string();
                    if self.ctx.dev {
                        error!(index, section_type = %section_type, error = %e, "error rendering section");
                    }
                    root.append_child(error_block(&section_type, &e));
                    failed.push(SectionFailure {
                        index,
                        section_type,
                        message: e.to_string(),
                    });
                }
            }
        }

        root.append_child(render_footer(site, self.ctx));

        debug!(
            page = %page_key,
            sections = page.sections.len(),
            failed = failed.len(),
            unknown = unknown.len(),
            "mounted page"
        );

        Ok(MountReport {
            page_key,
            outcome: MountOutcome::Rendered {
                sections: page.sections.len(),
                failed,
                unknown,
            },
        })
    }

    fn write_seo(&self, doc: &Document, site: &Site, page: &landkit_core::Page) {
        let seo = page.seo.as_ref();
        if let Some(title) = doc.get_element_by_id(&self.options.seo_title_id) {
            let text = seo
                .and_then(|s| s.title.as_deref())
                .filter(|t| !t.is_empty())
                .or_else(|| site.brand.name.as_deref().filter(|n| !n.is_empty()))
                .unwrap_or("Website");
            title.set_text_content(text);
        }
        if let Some(description) = doc.get_element_by_id(&self.options.seo_description_id) {
            let text = seo.and_then(|s| s.description.as_deref()).unwrap_or("");
            description.set_attribute("content", text);
        }
    }
}

/// Inline block that stands in for a section whose renderer failed.
#[must_use]
pub fn error_block(section_type: &str, err: &RenderError) -> Element {
    h(
        "div",
        attrs! { "style" => ERROR_BLOCK_STYLE },
        format!("Error rendering section {section_type}: {err}"),
    )
}

fn page_not_found(page_key: &str) -> Element {
    h(
        "div",
        attrs! { "style" => "padding:24px;color:#fff" },
        vec![
            h("h2", attrs! { "style" => "margin:0 0 8px" }, "Page not found"),
            h(
                "p",
                attrs! { "style" => "margin:0;color:#bdbdbd" },
                format!("data-page=\"{page_key}\" not found in the content schema pages"),
            ),
        ],
    )
}

#[cfg(test)]
mod tests {
    use landkit_core::{Page, SectionDescriptor, Seo};
    use landkit_ui::HostOptions;
    use serde_json::json;

    use super::*;
    use crate::{context::fixed_context, data::Data};

    fn site() -> Site {
        let mut site = Site::default();
        site.brand.name = Some("Acme".to_string());
        site.footer.copyright = Some("© {year} Acme".to_string());
        site.pages.insert(
            "home".to_string(),
            Page {
                seo: Some(Seo {
                    title: Some("Home | Acme".to_string()),
                    description: Some("Rockets for everyone".to_string()),
                }),
                sections: vec![
                    Some(SectionDescriptor::new("seoIntro.v1", json!({ "h2": "Intro" }))),
                    Some(SectionDescriptor::new("doesNotExist", json!({}))),
                    None,
                    Some(SectionDescriptor::new("faqAccordion.v1", json!({ "h2": "Questions" })).with_id("faq")),
                ],
            },
        );
        site.pages.insert("blank".to_string(), Page::default());
        site
    }

    fn doc(page: &str) -> Document {
        Document::new(&HostOptions::default().with_page(page))
    }

    fn root(doc: &Document) -> Element {
        doc.get_element_by_id("app").expect("root")
    }

    #[test]
    fn test_mount_order_and_seo() {
        let registry = Registry::new();
        let ctx = fixed_context();
        let doc = doc("home");

        let report = PageAssembler::new(&registry, &ctx).mount(&doc, Some(&site())).unwrap();

        let children = root(&doc).child_elements();
        let tags: Vec<String> = children.iter().map(Element::tag).collect();
        assert_eq!(tags, vec!["header", "section", "div", "div", "section", "footer"]);
        assert_eq!(children[2].text_content(), "Unknown section type: doesNotExist");
        assert_eq!(children[4].id().as_deref(), Some("faq"));

        assert_eq!(doc.get_element_by_id("seo-title").unwrap().text_content(), "Home | Acme");
        assert_eq!(
            doc.get_element_by_id("seo-description").unwrap().attribute("content").as_deref(),
            Some("Rockets for everyone")
        );
        assert_eq!(
            report.outcome,
            MountOutcome::Rendered {
                sections: 4,
                failed: Vec::new(),
                unknown: vec!["doesNotExist".to_string()],
            }
        );
    }

    #[test]
    fn test_failing_section_is_isolated() {
        let mut registry = Registry::new();
        registry.register(
            "seoIntro.v1",
            |_: &Data<'_>, _: &RenderContext| -> crate::registry::Result<Element> {
                Err(RenderError::Failed("kaboom".to_string()))
            },
        );
        let ctx = fixed_context();
        let doc = doc("home");

        let report = PageAssembler::new(&registry, &ctx).mount(&doc, Some(&site())).unwrap();

        let children = root(&doc).child_elements();
        assert_eq!(children.len(), 6);
        assert_eq!(
            children[1].text_content(),
            "Error rendering section seoIntro.v1: kaboom"
        );
        assert_eq!(children[1].attribute("style").as_deref(), Some(ERROR_BLOCK_STYLE));
        assert_eq!(children[4].tag(), "section");
        assert_eq!(
            report.failed(),
            &[SectionFailure {
                index: 0,
                section_type: "seoIntro.v1".to_string(),
                message: "kaboom".to_string(),
            }]
        );
    }

    #[test]
    fn test_dev_diagnostics_leave_output_unchanged() {
        let mut registry = Registry::new();
        registry.register(
            "seoIntro.v1",
            |_: &Data<'_>, _: &RenderContext| -> crate::registry::Result<Element> {
                Err(RenderError::Failed("kaboom".to_string()))
            },
        );
        let quiet = fixed_context();
        let dev = fixed_context().with_dev(true);
        let quiet_doc = doc("home");
        let dev_doc = doc("home");

        let quiet_report = PageAssembler::new(&registry, &quiet)
            .mount(&quiet_doc, Some(&site()))
            .unwrap();
        let dev_report = PageAssembler::new(&registry, &dev)
            .mount(&dev_doc, Some(&site()))
            .unwrap();

        assert_eq!(quiet_doc.to_html(), dev_doc.to_html());
        assert_eq!(quiet_report, dev_report);
        assert_eq!(dev_report.failed().len(), 1);
        match &dev_report.outcome {
            MountOutcome::Rendered { unknown, .. } => assert_eq!(unknown, &["doesNotExist"]),
            other => panic!("expected Rendered, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_types_in_first_seen_order() {
        let registry = Registry::new();
        let ctx = fixed_context();
        let doc = doc("home");
        let mut site = Site::default();
        site.pages.insert(
            "home".to_string(),
            Page {
                seo: None,
                sections: vec![
                    Some(SectionDescriptor::new("zeta.v1", json!({}))),
                    Some(SectionDescriptor::new("alpha.v1", json!({}))),
                    Some(SectionDescriptor::new("zeta.v1", json!({}))),
                ],
            },
        );

        let report = PageAssembler::new(&registry, &ctx).mount(&doc, Some(&site)).unwrap();

        match report.outcome {
            MountOutcome::Rendered { unknown, .. } => assert_eq!(unknown, ["zeta.v1", "alpha.v1"]),
            other => panic!("expected Rendered, got {other:?}"),
        }
    }

    #[test]
    fn test_page_not_found() {
        let registry = Registry::new();
        let ctx = fixed_context();
        let doc = doc("pricing");

        let report = PageAssembler::new(&registry, &ctx).mount(&doc, Some(&site())).unwrap();

        assert!(!report.is_page_found());
        assert_eq!(report.page_key, "pricing");
        let root = root(&doc);
        assert_eq!(root.child_elements().len(), 1);
        assert!(root.text_content().contains("Page not found"));
        assert!(root.text_content().contains("data-page=\"pricing\""));
        assert_eq!(doc.get_element_by_id("seo-title").unwrap().text_content(), "");
    }

    #[test]
    fn test_default_page_when_key_absent() {
        let registry = Registry::new();
        let ctx = fixed_context();
        let doc = Document::new(&HostOptions::default());

        let report = PageAssembler::new(&registry, &ctx).mount(&doc, Some(&site())).unwrap();
        assert_eq!(report.page_key, "home");
        assert!(report.is_page_found());
    }

    #[test]
    fn test_missing_schema() {
        let registry = Registry::new();
        let ctx = fixed_context();
        let doc = doc("home");

        let err = PageAssembler::new(&registry, &ctx).mount(&doc, None).unwrap_err();
        assert!(matches!(err, EngineError::MissingSchema));
        let html = doc.to_html();
        assert!(html.contains("<pre "));
        assert!(html.contains("ERROR: content schema is missing."));
        assert!(doc.get_element_by_id("app").is_none());
    }

    #[test]
    fn test_missing_root() {
        let registry = Registry::new();
        let ctx = fixed_context();
        let doc = Document::new(&HostOptions {
            root_id: None,
            ..HostOptions::default()
        });

        let err = PageAssembler::new(&registry, &ctx).mount(&doc, Some(&site())).unwrap_err();
        assert_eq!(err.to_string(), "missing root container #app");
    }

    #[test]
    fn test_seo_sinks_are_optional() {
        let registry = Registry::new();
        let ctx = fixed_context();
        let doc = Document::new(&HostOptions {
            seo_title_id: None,
            seo_description_id: None,
            ..HostOptions::default().with_page("blank")
        });

        let report = PageAssembler::new(&registry, &ctx).mount(&doc, Some(&site())).unwrap();
        assert!(report.is_page_found());
        assert_eq!(root(&doc).child_elements().len(), 2);
    }

    #[test]
    fn test_title_falls_back_to_brand() {
        let registry = Registry::new();
        let ctx = fixed_context();
        let doc = doc("blank");
        PageAssembler::new(&registry, &ctx).mount(&doc, Some(&site())).unwrap();
        assert_eq!(doc.get_element_by_id("seo-title").unwrap().text_content(), "Acme");
    }

    #[test]
    fn test_remount_replaces_content() {
        let registry = Registry::new();
        let ctx = fixed_context();
        let doc = doc("home");
        let assembler = PageAssembler::new(&registry, &ctx);

        assembler.mount(&doc, Some(&site())).unwrap();
        assembler.mount(&doc, Some(&site())).unwrap();
        assert_eq!(root(&doc).child_elements().len(), 6);
    }
}
