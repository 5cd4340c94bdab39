//! Providers command - drive a mounted providers grid from the command line

use std::path::Path;

use color_eyre::eyre::{Result, WrapErr, bail, eyre};
use landkit_generator::{Builder, SortMode};
use landkit_ui::{Element, Event};

use super::load_project;

/// Interactions applied to the grid, in this order: category, search, sort,
/// then `more` clicks on "Show more".
#[derive(Debug, Clone, Default)]
pub struct GridQuery {
    pub category: Option<String>,
    pub search: Option<String>,
    pub sort: Option<SortMode>,
    pub more: usize,
}

/// A tile as shown in the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub name: String,
    pub badges: String,
}

/// Run the providers command.
pub fn run(
    config_path: &Path,
    page: Option<&str>,
    section: Option<&str>,
    query: &GridQuery,
) -> Result<()> {
    let (config, site) = load_project(config_path)?;
    let page_key = page.unwrap_or(&config.site.default_page).to_string();

    let builder = Builder::new(config, site);
    let (doc, report) = builder
        .mount_page(&page_key)
        .wrap_err_with(|| format!("Failed to mount page `{page_key}`"))?;
    if !report.is_page_found() {
        bail!("Page `{page_key}` not found in content schema");
    }

    let scope = match section {
        Some(id) => doc
            .get_element_by_id(id)
            .ok_or_else(|| eyre!("No section with id `{id}` on page `{page_key}`"))?,
        None => doc.body().clone(),
    };

    let (tiles, more_visible) = drive(&scope, query)?;

    for tile in &tiles {
        println!("  {:<24} {}", tile.name, tile.badges);
    }
    println!();
    println!("  Showing {} provider(s)", tiles.len());
    if more_visible {
        println!("  More available");
    }

    Ok(())
}

/// Dispatch the query's events into the first grid under `scope` and read
/// back the visible tiles and whether "Show more" is offered.
pub fn drive(scope: &Element, query: &GridQuery) -> Result<(Vec<Tile>, bool)> {
    let Some(controls) = scope.query_class("providers-controls").into_iter().next() else {
        bail!("No providers grid found");
    };
    let grid = first(scope, "providers-grid")?;
    let footer = first(scope, "providers-footer")?;

    if let Some(category) = &query.category {
        let Some(button) = controls
            .query_class("filter-btn")
            .into_iter()
            .find(|b| b.text_content() == *category)
        else {
            bail!("Unknown category `{category}`");
        };
        button.dispatch_event(&Event::click());
    }

    if let Some(search) = &query.search {
        let input = controls
            .query_tag("input")
            .into_iter()
            .next()
            .ok_or_else(|| eyre!("Providers grid has no search input"))?;
        input.set_value(search.as_str());
        input.dispatch_event(&Event::input(search.as_str()));
    }

    if let Some(mode) = query.sort {
        first(&controls, "sort")?.dispatch_event(&Event::change(mode.as_str()));
    }

    if let Some(button) = footer.child_elements().into_iter().next() {
        for _ in 0..query.more {
            button.dispatch_event(&Event::click());
        }
    }

    let tiles = grid
        .query_class("provider-tile")
        .iter()
        .map(|tile| Tile {
            name: tile
                .query_tag("span")
                .first()
                .map(Element::text_content)
                .unwrap_or_default(),
            badges: tile
                .query_class("provider-badges")
                .first()
                .map(|badges| {
                    badges
                        .child_elements()
                        .iter()
                        .map(Element::text_content)
                        .collect::<Vec<_>>()
                        .join(", ")
                })
                .unwrap_or_default(),
        })
        .collect();
    let more_visible = footer.style("display").as_deref() != Some("none");

    Ok((tiles, more_visible))
}

fn first(scope: &Element, class: &str) -> Result<Element> {
    scope
        .query_class(class)
        .into_iter()
        .next()
        .ok_or_else(|| eyre!("Providers grid is missing `.{class}`"))
}
