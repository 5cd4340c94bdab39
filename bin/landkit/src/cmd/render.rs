//! Render command - prints one page's HTML to stdout

use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
use landkit_generator::Builder;

use super::load_project;

/// Run the render command.
///
/// Without `page` the configured default page is rendered.
pub fn run(config_path: &Path, page: Option<&str>, dev: bool) -> Result<()> {
    let (mut config, site) = load_project(config_path)?;
    if dev {
        config.render.dev = true;
    }

    let page_key = page.unwrap_or(&config.site.default_page).to_string();
    let builder = Builder::new(config, site);
    let rendered = builder
        .render_page(&page_key)
        .wrap_err_with(|| format!("Failed to render page `{page_key}`"))?;

    for failure in rendered.report.failed() {
        tracing::warn!(
            index = failure.index,
            section_type = %failure.section_type,
            error = %failure.message,
            "Section rendered as error block"
        );
    }
    if !rendered.report.is_page_found() {
        tracing::warn!(page = %page_key, "Page not found in content schema");
    }

    print!("{}", rendered.html);
    Ok(())
}
