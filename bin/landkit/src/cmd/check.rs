//! Check command - validate configuration and content schema

use std::{collections::HashSet, path::Path};

use color_eyre::eyre::{Result, bail};
use landkit_core::{Config, Site};
use landkit_generator::{Builder, MountOutcome, Registry};

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Run the check command.
///
/// Validates configuration, the content schema and every page's sections.
pub fn run(config_path: &Path, strict: bool) -> Result<()> {
    tracing::info!(?config_path, strict, "Checking configuration and content");

    let mut result = ValidationResult::default();

    println!("Checking configuration...");
    let config = match Config::load_with_env(config_path) {
        Ok(c) => {
            println!("  ✓ Configuration valid");
            Some(c)
        }
        Err(e) => {
            result.add_error(format!("Configuration error: {e}"));
            println!("  ✗ Configuration invalid: {e}");
            None
        }
    };

    if let Some(config) = config {
        println!("\nChecking content schema...");
        let content_path = config.content_path(config_path);
        match Site::load(&content_path) {
            Ok(site) => {
                println!("  ✓ {} page(s) loaded", site.pages.len());
                println!("\nChecking routes and sections...");
                validate_site(&config, &site, &mut result);
            }
            Err(e) => {
                result.add_error(format!("Content schema error: {e}"));
                println!("  ✗ Content schema invalid: {e}");
            }
        }
    }

    // Print summary
    println!();
    println!("Summary:");
    println!("  Errors:   {}", result.errors.len());
    println!("  Warnings: {}", result.warnings.len());

    if result.has_errors() {
        println!();
        println!("Errors:");
        for err in &result.errors {
            println!("  ✗ {err}");
        }
    }

    if result.has_warnings() {
        println!();
        println!("Warnings:");
        for warn in &result.warnings {
            println!("  ⚠ {warn}");
        }
    }

    // Determine exit status
    if result.has_errors() {
        bail!("Validation failed with {} error(s)", result.errors.len());
    }

    if strict && result.has_warnings() {
        bail!(
            "Validation failed with {} warning(s) (strict mode)",
            result.warnings.len()
        );
    }

    println!();
    println!("✓ All checks passed");

    Ok(())
}

/// Validate routes and sections against a loaded schema.
///
/// Routes to missing pages and sections that fail to render are errors.
/// Unknown section types, untyped or null sections and duplicate section ids
/// are warnings.
pub fn validate_site(config: &Config, site: &Site, result: &mut ValidationResult) {
    for (file, key) in &config.build.routes {
        if site.page(key).is_none() {
            result.add_error(format!("Route {file} points at missing page `{key}`"));
        }
    }
    if site.page(&config.site.default_page).is_none() {
        result.add_warning(format!(
            "Default page `{}` is not defined",
            config.site.default_page
        ));
    }

    let registry = Registry::new();
    for (key, page) in &site.pages {
        let mut ids = HashSet::new();
        for (index, section) in page.sections.iter().enumerate() {
            let Some(section) = section else {
                result.add_warning(format!("{key}[{index}]: null section renders empty"));
                continue;
            };
            match section.section_type.as_deref() {
                None => result.add_warning(format!("{key}[{index}]: section has no type")),
                Some(ty) if !registry.contains(ty) => {
                    result.add_warning(format!("{key}[{index}]: unknown section type `{ty}`"));
                }
                Some(_) => {}
            }
            if let Some(id) = section.id.as_deref().filter(|id| !id.is_empty()) {
                if !ids.insert(id) {
                    result.add_warning(format!("{key}[{index}]: duplicate section id `{id}`"));
                }
            }
        }
    }

    // Render every page once to surface payload shape errors.
    let builder = Builder::new(config.clone(), site.clone());
    let mut failures = 0;
    for key in site.pages.keys() {
        match builder.mount_page(key) {
            Ok((_, report)) => {
                if let MountOutcome::Rendered { failed, .. } = &report.outcome {
                    for failure in failed {
                        failures += 1;
                        result.add_error(format!(
                            "{key}[{}]: {} failed to render: {}",
                            failure.index, failure.section_type, failure.message
                        ));
                    }
                }
            }
            Err(e) => result.add_error(format!("{key}: {e}")),
        }
    }

    if failures == 0 {
        println!("  ✓ All {} page(s) render", site.pages.len());
    } else {
        println!("  ✗ {failures} section(s) failed to render");
    }
}
