//! Engine configuration management.

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Main configuration structure for landkit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Content settings.
    #[serde(default)]
    pub site: SiteConfig,

    /// Host document and diagnostics settings.
    #[serde(default)]
    pub render: RenderConfig,

    /// Build settings.
    #[serde(default)]
    pub build: BuildConfig,
}

/// Content location and page selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Content Schema file, relative to the configuration file.
    #[serde(default = "default_content")]
    pub content: PathBuf,

    /// Page key used when the host document does not name one.
    #[serde(default = "default_page")]
    pub default_page: String,
}

/// Host document configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Id of the root container the page is mounted into.
    #[serde(default = "default_root_id")]
    pub root_id: String,

    /// Id of the `<title>` sink. Empty disables the sink.
    #[serde(default = "default_seo_title_id")]
    pub seo_title_id: String,

    /// Id of the description `<meta>` sink. Empty disables the sink.
    #[serde(default = "default_seo_description_id")]
    pub seo_description_id: String,

    /// Verbose diagnostics.
    #[serde(default)]
    pub dev: bool,

    /// Stylesheets linked from the host document head.
    #[serde(default = "default_stylesheets")]
    pub stylesheets: Vec<String>,
}

/// Build configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Output directory for generated pages.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Output file name to page key.
    #[serde(default = "default_routes")]
    pub routes: BTreeMap<String, String>,
}

// Default value functions
fn default_content() -> PathBuf {
    PathBuf::from("site.yaml")
}

fn default_page() -> String {
    "home".to_string()
}

fn default_root_id() -> String {
    "app".to_string()
}

fn default_seo_title_id() -> String {
    "seo-title".to_string()
}

fn default_seo_description_id() -> String {
    "seo-description".to_string()
}

fn default_stylesheets() -> Vec<String> {
    vec!["styles.css".to_string()]
}

fn default_output_dir() -> String {
    "public".to_string()
}

fn default_routes() -> BTreeMap<String, String> {
    [
        ("index.html", "home"),
        ("contact.html", "contact"),
        ("privacy-policy.html", "privacy"),
        ("cookie-policy.html", "cookies"),
        ("terms-of-service.html", "terms"),
    ]
    .into_iter()
    .map(|(file, key)| (file.to_string(), key.to_string()))
    .collect()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content: default_content(),
            default_page: default_page(),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            root_id: default_root_id(),
            seo_title_id: default_seo_title_id(),
            seo_description_id: default_seo_description_id(),
            dev: false,
            stylesheets: default_stylesheets(),
        }
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            routes: default_routes(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `LANDKIT__SECTION__KEY` environment overrides.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(
                config::Environment::with_prefix("LANDKIT")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<()> {
        if self.site.content.as_os_str().is_empty() {
            return Err(CoreError::config("site.content cannot be empty"));
        }

        if self.render.root_id.trim().is_empty() {
            return Err(CoreError::config("render.root_id cannot be empty"));
        }

        for (file, key) in &self.build.routes {
            if key.trim().is_empty() {
                return Err(CoreError::config(format!(
                    "build.routes.\"{file}\" must name a page key"
                )));
            }
            if !file.ends_with(".html") {
                tracing::warn!(file = %file, "route file name does not end in .html");
            }
        }

        Ok(())
    }

    /// Resolve the content file against the directory holding the config file.
    #[must_use]
    pub fn content_path(&self, config_path: &Path) -> PathBuf {
        if self.site.content.is_absolute() {
            return self.site.content.clone();
        }
        config_path
            .parent()
            .unwrap_or_else(|| Path::new(""))
            .join(&self.site.content)
    }
}
