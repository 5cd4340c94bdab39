//! End-to-end tests for landkit.
//!
//! These tests build the AviatorTech demo site and drive its interactive
//! sections through dispatched events.

use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::NaiveDate;
use landkit_core::{Config, Site};
use landkit_generator::{Builder, PageAssembler, Registry, RenderContext};
use landkit_ui::{Document, Element, Event, HostOptions};
use tempfile::TempDir;

fn demo_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../demos/aviator")
}

fn load_demo() -> Option<(Config, Site)> {
    let config_path = demo_dir().join("landkit.toml");
    if !config_path.exists() {
        // Skip if the demo tree is not shipped alongside the crate
        return None;
    }
    let config = Config::load(&config_path).expect("Config should load");
    let site = Site::load(&config.content_path(&config_path)).expect("Site should load");
    Some((config, site))
}

fn context() -> RenderContext {
    RenderContext::new(NaiveDate::from_ymd_opt(2025, 1, 15).expect("valid date"))
}

fn mount_home(site: &Site) -> Document {
    let registry = Registry::new();
    let ctx = context();
    let doc = Document::new(&HostOptions::default().with_page("home"));
    let report = PageAssembler::new(&registry, &ctx)
        .mount(&doc, Some(site))
        .expect("home should mount");
    assert!(report.failed().is_empty(), "{:?}", report.failed());
    doc
}

fn tile_names(section: &Element) -> Vec<String> {
    section
        .query_class("provider-tile")
        .iter()
        .map(|tile| tile.query_tag("span")[0].text_content())
        .collect()
}

#[test]
fn test_demo_config_loads() {
    let Some((config, site)) = load_demo() else {
        return;
    };

    assert_eq!(config.site.default_page, "home");
    assert_eq!(config.build.routes.len(), 5);
    assert_eq!(site.brand.name.as_deref(), Some("AviatorTech"));
    assert_eq!(site.pages.len(), 5);
    assert_eq!(site.page("home").map(|p| p.sections.len()), Some(9));
}

#[test]
fn test_demo_build_writes_every_route() {
    let Some((config, site)) = load_demo() else {
        return;
    };
    let output = TempDir::new().expect("temp dir");

    let stats = Builder::new(config, site)
        .with_context(context())
        .build(output.path())
        .expect("build should succeed");

    assert_eq!(stats.pages, 5);
    assert_eq!(stats.failed_sections, 0);
    assert_eq!(stats.missing_pages, 0);

    let index = fs::read_to_string(output.path().join("index.html")).expect("index");
    assert!(index.contains("<title id=\"seo-title\">Casino Game Aggregator API | AviatorTech | iGaming Integration</title>"));
    assert!(index.contains("<h1>Casino Game Aggregator API</h1>"));
    assert!(index.contains(r#"id="providers""#));
    assert!(index.contains("© 2025 AviatorTech. All rights reserved."));

    let privacy = fs::read_to_string(output.path().join("privacy-policy.html")).expect("privacy");
    assert!(privacy.contains("Last updated: 2025-01-15"));
    assert!(privacy.contains(r#"<body data-page="privacy">"#));
}

#[test]
fn test_demo_providers_grid_interactions() {
    let Some((_, site)) = load_demo() else {
        return;
    };
    let doc = mount_home(&site);
    let section = doc.get_element_by_id("providers").expect("providers section");

    // Popular sort, first page
    let names = tile_names(&section);
    assert_eq!(names.len(), 12);
    assert_eq!(&names[..3], ["Evolution", "Pragmatic Play", "Spribe"]);

    let show_more = section.query_class("providers-footer")[0].child_elements()[0].clone();
    show_more.dispatch_event(&Event::click());
    assert_eq!(tile_names(&section).len(), 24);
    show_more.dispatch_event(&Event::click());
    assert_eq!(tile_names(&section).len(), 30);
    assert_eq!(
        section.query_class("providers-footer")[0].style("display").as_deref(),
        Some("none")
    );

    // Category filter resets paging
    let crash = section
        .query_class("filter-btn")
        .into_iter()
        .find(|b| b.text_content() == "Crash")
        .expect("Crash filter");
    crash.dispatch_event(&Event::click());
    assert_eq!(tile_names(&section), ["Spribe", "Spribe Originals"]);
    assert!(crash.has_class("active"));

    let sort = &section.query_class("sort")[0];
    sort.dispatch_event(&Event::change("za"));
    assert_eq!(tile_names(&section), ["Spribe Originals", "Spribe"]);

    // Search narrows within the active category
    let search = &section.query_tag("input")[0];
    search.dispatch_event(&Event::input("  ORIG "));
    assert_eq!(tile_names(&section), ["Spribe Originals"]);

    search.dispatch_event(&Event::input("zzz"));
    assert!(tile_names(&section).is_empty());
    assert!(section.text_content().contains("No providers match your search."));
}

#[test]
fn test_demo_faq_and_contact() {
    let Some((_, site)) = load_demo() else {
        return;
    };
    let doc = mount_home(&site);
    let faq = doc.get_element_by_id("faq").expect("faq section");
    let items = faq.query_class("faq-item");
    assert_eq!(items.len(), 4);

    items[1].query_class("faq-q")[0].dispatch_event(&Event::click());
    assert!(items[1].has_class("open"));
    assert!(!items[0].has_class("open"));

    let registry = Registry::new();
    let ctx = context();
    let contact = Document::new(&HostOptions::default().with_page("contact"));
    PageAssembler::new(&registry, &ctx)
        .mount(&contact, Some(&site))
        .expect("contact should mount");

    let form = &contact.body().query_tag("form")[0];
    assert!(!form.dispatch_event(&Event::submit()));
    let status = &contact.body().query_class("form-status")[0];
    assert_eq!(status.text_content(), "Demo form. Next step: connect to email/CRM.");
}
