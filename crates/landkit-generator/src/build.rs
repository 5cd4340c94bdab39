//! Build orchestration.
//!
//! Renders every configured route into a standalone HTML file.

use std::{
    fs,
    path::{Component, Path},
    time::Instant,
};

use landkit_core::{Config, Site};
use landkit_ui::{Document, HostOptions};
use rayon::prelude::*;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{
    assemble::{EngineError, MountOptions, MountOutcome, MountReport, PageAssembler},
    context::RenderContext,
    registry::Registry,
};

/// Build errors.
#[derive(Debug, Error)]
pub enum BuildError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A page could not be mounted at all.
    #[error("failed to render page `{page}`: {source}")]
    Engine {
        page: String,
        #[source]
        source: EngineError,
    },

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),
}

/// Result type for build operations.
pub type Result<T> = std::result::Result<T, BuildError>;

/// Build statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Number of HTML files written.
    pub pages: usize,

    /// Section slots rendered across all pages.
    pub sections: usize,

    /// Sections replaced by an error block.
    pub failed_sections: usize,

    /// Routes whose page key is not in the content schema.
    pub missing_pages: usize,

    /// Build duration in milliseconds.
    pub duration_ms: u64,
}

impl BuildStats {
    fn record(&mut self, report: &MountReport) {
        self.pages += 1;
        match &report.outcome {
            MountOutcome::Rendered {
                sections, failed, ..
            } => {
                self.sections += sections;
                self.failed_sections += failed.len();
            }
            MountOutcome::PageNotFound => self.missing_pages += 1,
        }
    }
}

/// One rendered page.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub html: String,
    pub report: MountReport,
}

/// Site builder that renders pages and writes them out.
#[derive(Debug)]
pub struct Builder {
    config: Config,
    site: Site,
    registry: Registry,
    ctx: RenderContext,
}

impl Builder {
    /// Create a builder with the built-in registry, dated today.
    #[must_use]
    pub fn new(config: Config, site: Site) -> Self {
        let ctx = RenderContext::now().with_dev(config.render.dev);
        Self {
            config,
            site,
            registry: Registry::new(),
            ctx,
        }
    }

    /// Use a custom registry.
    #[must_use]
    pub fn with_registry(mut self, registry: Registry) -> Self {
        self.registry = registry;
        self
    }

    /// Use a custom render context (fixed date, form transport).
    #[must_use]
    pub fn with_context(mut self, ctx: RenderContext) -> Self {
        self.ctx = ctx;
        self
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn site(&self) -> &Site {
        &self.site
    }

    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Host document shape for a page key.
    #[must_use]
    pub fn host_options(&self, page_key: &str) -> HostOptions {
        let render = &self.config.render;
        HostOptions {
            root_id: Some(render.root_id.clone()),
            seo_title_id: Some(render.seo_title_id.clone()),
            seo_description_id: Some(render.seo_description_id.clone()),
            stylesheets: render.stylesheets.clone(),
            ..HostOptions::default().with_page(page_key)
        }
    }

    /// Mount one page into a fresh document that stays live for events.
    pub fn mount_page(&self, page_key: &str) -> Result<(Document, MountReport)> {
        let doc = Document::new(&self.host_options(page_key));
        let report = PageAssembler::new(&self.registry, &self.ctx)
            .with_options(MountOptions::from_config(&self.config))
            .mount(&doc, Some(&self.site))
            .map_err(|source| BuildError::Engine {
                page: page_key.to_string(),
                source,
            })?;
        Ok((doc, report))
    }

    /// Render one page into a fresh document.
    pub fn render_page(&self, page_key: &str) -> Result<RenderedPage> {
        let (doc, report) = self.mount_page(page_key)?;
        Ok(RenderedPage {
            html: doc.to_html(),
            report,
        })
    }

    /// Execute the full build into `output_dir`.
    pub fn build(&self, output_dir: &Path) -> Result<BuildStats> {
        let start = Instant::now();
        let routes = &self.config.build.routes;
        self.check_routes()?;

        info!(
            output = %output_dir.display(),
            routes = routes.len(),
            "starting build"
        );

        // 1. Clean output directory
        self.clean_output(output_dir)?;

        // 2. Render routes in parallel. Each worker owns its document.
        let results: Vec<Result<MountReport>> = routes
            .par_iter()
            .map(|(file, page_key)| -> Result<MountReport> {
                let page = self.render_page(page_key)?;
                let output_path = output_dir.join(file);
                if let Some(parent) = output_path.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::write(&output_path, &page.html)?;
                debug!(path = %output_path.display(), page = %page_key, "wrote page");
                Ok(page.report)
            })
            .collect();

        // 3. Tally
        let mut stats = BuildStats::default();
        for result in results {
            let report = result?;
            if !report.is_page_found() {
                warn!(page = %report.page_key, "route points at a missing page");
            }
            for failure in report.failed() {
                warn!(
                    page = %report.page_key,
                    index = failure.index,
                    section_type = %failure.section_type,
                    error = %failure.message,
                    "section rendered as error block"
                );
            }
            stats.record(&report);
        }

        stats.duration_ms = start.elapsed().as_millis() as u64;

        info!(
            pages = stats.pages,
            sections = stats.sections,
            failed_sections = stats.failed_sections,
            missing_pages = stats.missing_pages,
            duration_ms = stats.duration_ms,
            "build complete"
        );

        Ok(stats)
    }

    /// Route files must stay inside the output directory.
    fn check_routes(&self) -> Result<()> {
        for file in self.config.build.routes.keys() {
            let escapes = Path::new(file)
                .components()
                .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
            if escapes || file.trim().is_empty() {
                return Err(BuildError::Config(format!(
                    "route `{file}` must be a relative path inside the output directory"
                )));
            }
        }
        Ok(())
    }

    /// Clean the output directory.
    fn clean_output(&self, output_dir: &Path) -> Result<()> {
        if output_dir.exists() {
            debug!(dir = %output_dir.display(), "cleaning output directory");
            fs::remove_dir_all(output_dir)?;
        }
        fs::create_dir_all(output_dir)?;
        Ok(())
    }
}
