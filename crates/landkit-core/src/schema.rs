//! Content Schema: the read-only site/page/section tree consumed by the renderer.
//!
//! Every field is optional at the schema level. Renderers substitute their own
//! defaults, so a sparse content file still produces a page.

use std::{collections::BTreeMap, path::Path};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{CoreError, Result};

/// Root of the Content Schema.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Site {
    /// Brand identity shown in header and footer.
    #[serde(default)]
    pub brand: Brand,

    /// Header navigation and call to action.
    #[serde(default)]
    pub header: HeaderConfig,

    /// Footer links and copyright line.
    #[serde(default)]
    pub footer: FooterConfig,

    /// Pages keyed by page identifier.
    #[serde(default)]
    pub pages: BTreeMap<String, Page>,
}

/// Brand name and tagline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Brand {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub tagline: Option<String>,
}

/// Header configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HeaderConfig {
    /// Call-to-action button on the right of the header.
    #[serde(default)]
    pub cta: Option<LinkButton>,

    /// Primary navigation links.
    #[serde(default)]
    pub nav: Vec<NavLink>,
}

/// Footer configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FooterConfig {
    #[serde(default)]
    pub links: Vec<NavLink>,

    /// Copyright line; `{year}` and `{date}` are substituted at render time.
    #[serde(default)]
    pub copyright: Option<String>,
}

/// A styled link rendered as a button.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkButton {
    #[serde(default)]
    pub label: Option<String>,

    #[serde(default)]
    pub href: Option<String>,

    /// Visual variant appended to the `btn` class (`primary`, `secondary`).
    #[serde(default)]
    pub variant: Option<String>,
}

/// A plain navigation link.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NavLink {
    #[serde(default)]
    pub label: Option<String>,

    #[serde(default)]
    pub href: Option<String>,
}

/// One page of the site.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub seo: Option<Seo>,

    /// Sections in display order. `null` entries are kept and render as empty
    /// containers.
    #[serde(default)]
    pub sections: Vec<Option<SectionDescriptor>>,
}

/// SEO metadata written into the host document sinks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Seo {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,
}

/// A `{id, type, data}` section instance within a page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionDescriptor {
    /// DOM id assigned to the rendered section (anchor target).
    #[serde(default)]
    pub id: Option<String>,

    /// Registry key, e.g. `hero.v1`.
    #[serde(rename = "type", default)]
    pub section_type: Option<String>,

    /// Renderer-specific payload.
    #[serde(default)]
    pub data: Value,
}

impl SectionDescriptor {
    /// Create a descriptor with a type and payload.
    pub fn new(section_type: impl Into<String>, data: Value) -> Self {
        Self {
            id: None,
            section_type: Some(section_type.into()),
            data,
        }
    }

    /// Set the DOM id.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// The type tag as written, or `(missing)` when absent.
    #[must_use]
    pub fn type_label(&self) -> &str {
        self.section_type.as_deref().unwrap_or("(missing)")
    }
}

impl Site {
    /// Load a Content Schema from a `.json`, `.yaml`/`.yml` or `.toml` file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::schema(path, "content file not found"));
        }

        let content = std::fs::read_to_string(path)?;
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let site = match ext.as_str() {
            "json" => Self::from_json_str(&content),
            "yaml" | "yml" => Self::from_yaml_str(&content),
            "toml" => toml::from_str(&content).map_err(CoreError::from),
            other => {
                return Err(CoreError::schema(
                    path,
                    format!("unsupported content format: {other:?}"),
                ));
            }
        }
        .map_err(|e| CoreError::schema(path, e.to_string()))?;

        tracing::debug!(path = %path.display(), pages = site.pages.len(), "loaded content schema");
        Ok(site)
    }

    /// Parse a Content Schema from JSON.
    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Parse a Content Schema from YAML.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Look up a page by key.
    #[must_use]
    pub fn page(&self, key: &str) -> Option<&Page> {
        self.pages.get(key)
    }
}

impl Page {
    /// Non-null section descriptors in order.
    pub fn descriptors(&self) -> impl Iterator<Item = &SectionDescriptor> {
        self.sections.iter().flatten()
    }
}
