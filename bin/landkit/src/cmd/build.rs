//! Build command - renders every routed page to HTML

use std::{
    path::{Path, PathBuf},
    time::Instant,
};

use color_eyre::eyre::{Result, WrapErr};
use landkit_generator::Builder;

use super::load_project;

/// Run the build command.
///
/// `output` overrides `build.output_dir`; `dev` turns on render diagnostics.
pub fn run(config_path: &Path, output: Option<&Path>, dev: bool) -> Result<()> {
    let start = Instant::now();
    tracing::info!(?config_path, ?output, dev, "Starting build");

    let (mut config, site) = load_project(config_path)?;

    if let Some(dir) = output {
        config.build.output_dir = dir.to_string_lossy().to_string();
    }
    if dev {
        config.render.dev = true;
    }

    let output_dir = PathBuf::from(&config.build.output_dir);
    let stats = Builder::new(config, site)
        .build(&output_dir)
        .wrap_err("Build failed")?;

    let duration = start.elapsed();

    // Print build statistics
    println!();
    println!("  Build completed successfully!");
    println!();
    println!("  Pages:          {}", stats.pages);
    println!("  Sections:       {}", stats.sections);
    println!("  Failed:         {}", stats.failed_sections);
    println!("  Missing pages:  {}", stats.missing_pages);
    println!();
    println!("  Duration:       {:.2}s", duration.as_secs_f64());
    println!("  Output:         {}", output_dir.display());
    println!();

    tracing::info!(?stats, ?duration, "Build completed successfully");

    Ok(())
}
