//! Host document: the page shell the renderer mounts into.
//!
//! Mirrors what a browser page offers the engine: an optional `<title>` and
//! description `<meta>` sink, a body carrying the `data-page` selector, and a
//! root container found by id.

use crate::{
    attrs,
    element::{Element, h},
    event::Event,
};

/// Shape of the host document.
#[derive(Debug, Clone)]
pub struct HostOptions {
    /// `lang` attribute of `<html>`.
    pub lang: String,
    /// Root container id. `None` leaves the body empty.
    pub root_id: Option<String>,
    /// Id of the `<title>` sink. `None` omits it.
    pub seo_title_id: Option<String>,
    /// Id of the description `<meta>` sink. `None` omits it.
    pub seo_description_id: Option<String>,
    /// Value of the body's `data-page` attribute.
    pub page_key: Option<String>,
    pub stylesheets: Vec<String>,
}

impl Default for HostOptions {
    fn default() -> Self {
        Self {
            lang: "en".to_string(),
            root_id: Some("app".to_string()),
            seo_title_id: Some("seo-title".to_string()),
            seo_description_id: Some("seo-description".to_string()),
            page_key: None,
            stylesheets: Vec::new(),
        }
    }
}

impl HostOptions {
    #[must_use]
    pub fn with_page(mut self, key: impl Into<String>) -> Self {
        self.page_key = Some(key.into());
        self
    }
}

/// An in-memory HTML document.
#[derive(Debug, Clone)]
pub struct Document {
    root: Element,
    head: Element,
    body: Element,
}

impl Document {
    /// Build the document shell described by `options`.
    #[must_use]
    pub fn new(options: &HostOptions) -> Self {
        let head = h(
            "head",
            attrs! {},
            vec![
                h("meta", attrs! { "charset" => "UTF-8" }, ()),
                h(
                    "meta",
                    attrs! {
                        "name" => "viewport",
                        "content" => "width=device-width, initial-scale=1.0",
                    },
                    (),
                ),
            ],
        );

        if let Some(id) = &options.seo_title_id {
            head.append_child(h("title", attrs! { "id" => id.as_str() }, ()));
        }
        if let Some(id) = &options.seo_description_id {
            head.append_child(h(
                "meta",
                attrs! { "id" => id.as_str(), "name" => "description", "content" => "" },
                (),
            ));
        }
        for href in &options.stylesheets {
            head.append_child(h(
                "link",
                attrs! { "rel" => "stylesheet", "href" => href.as_str() },
                (),
            ));
        }

        let body = h("body", attrs! {}, ());
        if let Some(key) = &options.page_key {
            body.set_attribute("data-page", key.as_str());
        }
        if let Some(id) = &options.root_id {
            body.append_child(h("div", attrs! { "id" => id.as_str() }, ()));
        }

        let root = h(
            "html",
            attrs! { "lang" => options.lang.as_str() },
            vec![head.clone(), body.clone()],
        );

        Self { root, head, body }
    }

    /// A document with an empty head and body.
    #[must_use]
    pub fn blank() -> Self {
        Self::new(&HostOptions {
            root_id: None,
            seo_title_id: None,
            seo_description_id: None,
            ..HostOptions::default()
        })
    }

    #[must_use]
    pub fn document_element(&self) -> &Element {
        &self.root
    }

    #[must_use]
    pub fn head(&self) -> &Element {
        &self.head
    }

    #[must_use]
    pub fn body(&self) -> &Element {
        &self.body
    }

    /// The page selector set on the body, if any.
    #[must_use]
    pub fn page_key(&self) -> Option<String> {
        self.body
            .attribute("data-page")
            .filter(|key| !key.trim().is_empty())
    }

    #[must_use]
    pub fn get_element_by_id(&self, id: &str) -> Option<Element> {
        self.root.get_element_by_id(id)
    }

    /// Dispatch an event to the element with the given id.
    ///
    /// Returns `None` when no such element exists, otherwise whether the
    /// default action should proceed.
    pub fn dispatch(&self, id: &str, event: &Event) -> Option<bool> {
        self.get_element_by_id(id).map(|el| el.dispatch_event(event))
    }

    /// Serialize with a doctype.
    #[must_use]
    pub fn to_html(&self) -> String {
        format!("<!DOCTYPE html>\n{}\n", self.root.to_html())
    }
}
