//! HTML serialization of the element tree.

use std::fmt::Write;

use crate::element::{Element, Node};

/// Elements that never have content or a closing tag.
const VOID_ELEMENTS: &[&str] = &["area", "br", "col", "hr", "img", "input", "link", "meta"];

/// Escape text content.
#[must_use]
pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape a double-quoted attribute value.
#[must_use]
pub fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

impl Node {
    /// Serialize to HTML.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out, None);
        out
    }

    fn write_html(&self, out: &mut String, select_value: Option<&str>) {
        match self {
            Self::Element(el) => el.write_html(out, select_value),
            Self::Text(text) => out.push_str(&escape_text(text)),
        }
    }
}

impl Element {
    /// Serialize this element and its subtree to HTML. Listeners are dropped.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out, None);
        out
    }

    /// `select_value` is the value of an enclosing `<select>`, used to mark
    /// the matching `<option>` as selected.
    fn write_html(&self, out: &mut String, select_value: Option<&str>) {
        let data = self.data();
        let tag = data.tag.as_str();

        out.push('<');
        out.push_str(tag);

        if let Some(id) = &data.id {
            let _ = write!(out, r#" id="{}""#, escape_attr(id));
        }
        if !data.class_name.is_empty() {
            let _ = write!(out, r#" class="{}""#, escape_attr(&data.class_name));
        }

        let inline_style = data
            .style
            .iter()
            .map(|(k, v)| format!("{k}:{v}"))
            .collect::<Vec<_>>()
            .join(";");
        let mut style_written = false;

        for (name, value) in &data.attrs {
            if name == "style" && !inline_style.is_empty() {
                let merged = format!("{};{inline_style}", value.trim_end_matches(';'));
                let _ = write!(out, r#" style="{}""#, escape_attr(&merged));
                style_written = true;
            } else {
                let _ = write!(out, r#" {name}="{}""#, escape_attr(value));
            }
        }
        if !style_written && !inline_style.is_empty() {
            let _ = write!(out, r#" style="{}""#, escape_attr(&inline_style));
        }

        if tag == "input" {
            if let Some(value) = &data.value {
                let _ = write!(out, r#" value="{}""#, escape_attr(value));
            }
        }
        if tag == "option" {
            let own = data
                .attrs
                .iter()
                .find(|(k, _)| k == "value")
                .map(|(_, v)| v.as_str());
            if select_value.is_some() && own == select_value {
                out.push_str(" selected");
            }
        }

        out.push('>');

        if VOID_ELEMENTS.contains(&tag) {
            return;
        }

        if tag == "textarea" {
            if let Some(value) = &data.value {
                out.push_str(&escape_text(value));
            }
        }

        if let Some(html) = &data.inner_html {
            out.push_str(html);
        }

        let child_select = if tag == "select" {
            data.value.as_deref()
        } else {
            select_value
        };
        for child in &data.children {
            child.write_html(out, child_select);
        }

        let _ = write!(out, "</{tag}>");
    }
}
