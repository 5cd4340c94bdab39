//! `providersGrid.v1`: the searchable, filterable, sortable provider grid.
//!
//! [`grid`] holds the model and state transitions. [`ProvidersWidget`] binds
//! them to elements: each control's listener feeds a [`GridEvent`] to the
//! widget, which swaps in the next state and rebuilds the tile list.

pub mod grid;

use std::{cell::RefCell, rc::Rc};

use landkit_ui::{ChildSpec, Element, Event, WeakElement, attrs, h};
use tracing::trace;

pub use self::grid::{
    ALL_CATEGORY, GridEvent, GridModel, GridState, GridView, PAGE_STEP, Provider, SortMode,
};
use crate::{context::RenderContext, data::Data, registry::Result};

const EMPTY_NOTICE: &str = "No providers match your search.";
const EMPTY_STYLE: &str = "grid-column:1/-1;color:#bdbdbd;padding:10px 4px;text-align:center";

pub fn render(d: &Data<'_>, _ctx: &RenderContext) -> Result<Element> {
    let model = GridModel::from_data(d);
    let widget = ProvidersWidget::mount(model);

    Ok(h(
        "section",
        attrs! { "class" => "section dark" },
        h(
            "div",
            attrs! { "class" => "container" },
            vec![
                h("h2", attrs! {}, d.text_or("h2", "Providers")?),
                h("p", attrs! { "class" => "subcenter" }, d.text_or("subtitle", "")?),
                widget.controls,
                widget.grid,
                widget.footer,
            ],
        ),
    ))
}

/// Elements produced by [`ProvidersWidget::mount`].
#[derive(Debug)]
pub struct MountedGrid {
    pub controls: Element,
    pub grid: Element,
    pub footer: Element,
}

/// One live grid instance.
///
/// Listeners own the widget through an `Rc`; the widget only holds weak
/// handles back to the elements it redraws.
#[derive(Debug)]
pub struct ProvidersWidget {
    model: GridModel,
    state: RefCell<GridState>,
    grid: WeakElement,
    footer: WeakElement,
    filters: Vec<WeakElement>,
}

impl ProvidersWidget {
    /// Build the controls, tile grid and footer, wire their listeners and
    /// draw the initial state.
    #[must_use]
    pub fn mount(model: GridModel) -> MountedGrid {
        let search = h(
            "input",
            attrs! { "type" => "text", "placeholder" => "Search providers..." },
            (),
        );
        let filter_buttons: Vec<Element> = model
            .categories()
            .iter()
            .map(|cat| {
                let class = if cat == ALL_CATEGORY {
                    "filter-btn active"
                } else {
                    "filter-btn"
                };
                h("button", attrs! { "class" => class, "type" => "button" }, cat)
            })
            .collect();
        let sort = h(
            "select",
            attrs! { "class" => "sort" },
            SortMode::ALL
                .into_iter()
                .map(|mode| h("option", attrs! { "value" => mode.as_str() }, mode.label()))
                .collect::<Vec<_>>(),
        );
        sort.set_value(SortMode::default().as_str());

        let grid = h("div", attrs! { "class" => "providers-grid" }, ());
        let show_more = h("button", attrs! { "class" => "btn secondary", "type" => "button" }, "Show more");
        show_more.set_style("border", "1px solid var(--accent)");
        show_more.set_style("background", "transparent");
        show_more.set_style("color", "var(--accent)");
        show_more.set_style("cursor", "pointer");
        let footer = h("div", attrs! { "class" => "providers-footer" }, show_more.clone());

        let widget = Rc::new(Self {
            state: RefCell::new(model.initial_state()),
            model,
            grid: grid.downgrade(),
            footer: footer.downgrade(),
            filters: filter_buttons.iter().map(Element::downgrade).collect(),
        });

        {
            let widget = Rc::clone(&widget);
            let input = search.downgrade();
            search.add_event_listener(
                "input",
                Rc::new(move |ev: &Event| {
                    let input = input.upgrade();
                    let text = ev
                        .value()
                        .map(str::to_string)
                        .or_else(|| input.as_ref().map(Element::value))
                        .unwrap_or_default();
                    if let Some(input) = &input {
                        input.set_value(text.as_str());
                    }
                    widget.handle(GridEvent::SearchChanged(text));
                }),
            );
        }

        for (index, button) in filter_buttons.iter().enumerate() {
            let widget = Rc::clone(&widget);
            let category = widget.model.categories()[index].clone();
            button.add_event_listener(
                "click",
                Rc::new(move |_: &Event| {
                    widget.activate_filter(index);
                    widget.handle(GridEvent::CategorySelected(category.clone()));
                }),
            );
        }

        {
            let widget = Rc::clone(&widget);
            let select = sort.downgrade();
            sort.add_event_listener(
                "change",
                Rc::new(move |ev: &Event| {
                    let Some(select) = select.upgrade() else {
                        return;
                    };
                    let raw = ev.value().map_or_else(|| select.value(), str::to_string);
                    match raw.parse::<SortMode>() {
                        Ok(mode) => {
                            select.set_value(mode.as_str());
                            widget.handle(GridEvent::SortChanged(mode));
                        }
                        Err(e) => trace!(error = %e, "ignoring sort change"),
                    }
                }),
            );
        }

        {
            let widget = Rc::clone(&widget);
            show_more.add_event_listener(
                "click",
                Rc::new(move |_: &Event| widget.handle(GridEvent::ShowMore)),
            );
        }

        widget.redraw();

        let controls = h(
            "div",
            attrs! { "class" => "providers-controls" },
            vec![
                h(
                    "div",
                    attrs! { "class" => "providers-left" },
                    vec![
                        h("div", attrs! { "class" => "providers-search" }, search),
                        h("div", attrs! { "class" => "providers-filters" }, filter_buttons),
                    ],
                ),
                h("div", attrs! { "class" => "providers-right" }, sort),
            ],
        );

        MountedGrid {
            controls,
            grid,
            footer,
        }
    }

    /// Apply an event and redraw.
    pub fn handle(&self, event: GridEvent) {
        let next = self.model.transition(&self.state.borrow(), event);
        trace!(
            query = %next.query,
            category = %next.active_category,
            sort = %next.sort_mode,
            visible = next.visible_count,
            "providers grid state"
        );
        *self.state.borrow_mut() = next;
        self.redraw();
    }

    #[must_use]
    pub fn state(&self) -> GridState {
        self.state.borrow().clone()
    }

    /// Mark exactly one filter button active.
    fn activate_filter(&self, index: usize) {
        for (i, button) in self.filters.iter().enumerate() {
            if let Some(button) = button.upgrade() {
                if i == index {
                    button.add_class("active");
                } else {
                    button.remove_class("active");
                }
            }
        }
    }

    /// Replace the tile list and show or hide the footer.
    fn redraw(&self) {
        let (Some(grid), Some(footer)) = (self.grid.upgrade(), self.footer.upgrade()) else {
            return;
        };
        let state = self.state.borrow();
        let view = self.model.view(&state);

        grid.clear_children();
        for provider in &view.visible {
            grid.append_child(tile(provider));
        }

        if view.is_empty() {
            grid.append_child(h("div", attrs! { "style" => EMPTY_STYLE }, EMPTY_NOTICE));
            footer.set_style("display", "none");
            return;
        }
        footer.set_style("display", if view.show_more { "flex" } else { "none" });
    }
}

fn tile(provider: &Provider) -> Element {
    let badges: Vec<ChildSpec> = provider
        .badges()
        .into_iter()
        .map(|cat| h("span", attrs! { "class" => "badge" }, cat).into())
        .collect();

    h(
        "div",
        attrs! { "class" => "provider-tile" },
        vec![
            h(
                "div",
                attrs! { "class" => "provider-title" },
                vec![
                    h("span", attrs! {}, provider.name.as_str()),
                    h("span", attrs! { "class" => "badge" }, "API-ready"),
                ],
            ),
            h("div", attrs! { "class" => "provider-badges" }, badges),
        ],
    )
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;
    use crate::context::fixed_context;

    fn section(value: &Value) -> Element {
        render(&Data::new("providersGrid.v1", value), &fixed_context()).unwrap()
    }

    fn names(section: &Element) -> Vec<String> {
        section
            .query_class("provider-title")
            .iter()
            .map(|t| t.child_elements()[0].text_content())
            .collect()
    }

    fn footer_display(section: &Element) -> Option<String> {
        section.query_class("providers-footer")[0].style("display")
    }

    fn catalog(n: usize) -> Value {
        let providers: Vec<Value> = (0..n)
            .map(|i| json!({ "name": format!("Studio {i:02}"), "categories": ["Slots"], "popularity": i }))
            .collect();
        json!({ "categories": ["All", "Slots", "Live", "Crash"], "providers": providers })
    }

    #[test]
    fn test_initial_render() {
        let el = section(&json!({
            "h2": "Game providers",
            "categories": ["All", "Live", "Slots"],
            "providers": [
                { "name": "Evolution", "categories": ["Live"], "popularity": 98 },
                { "name": "NetEnt", "categories": ["Slots"], "popularity": 88 },
                "Spribe"
            ]
        }));

        assert_eq!(el.query_tag("h2")[0].text_content(), "Game providers");
        assert_eq!(names(&el), vec!["Evolution", "NetEnt", "Spribe"]);
        assert_eq!(el.query_class("filter-btn").len(), 3);
        assert_eq!(el.query_class("active").len(), 1);
        assert!(el.query_class("filter-btn")[0].has_class("active"));
        assert_eq!(footer_display(&el).as_deref(), Some("none"));

        let spribe = &el.query_class("provider-tile")[2];
        assert_eq!(spribe.query_class("provider-badges")[0].text_content(), "All");
        assert!(spribe.text_content().contains("API-ready"));

        let html = el.to_html();
        assert!(html.contains(r#"placeholder="Search providers...""#));
        assert!(html.contains(r#"<option value="popular" selected>Sort: Popular</option>"#));
    }

    #[test]
    fn test_search_input() {
        let el = section(&json!({
            "providers": [
                { "name": "Evolution", "categories": ["Live"], "popularity": 98 },
                { "name": "NetEnt", "categories": ["Slots"], "popularity": 88 }
            ]
        }));
        let input = &el.query_tag("input")[0];
        input.set_value("net");
        input.dispatch_event(&Event::input("net"));
        assert_eq!(names(&el), vec!["NetEnt"]);

        input.set_value("");
        input.dispatch_event(&Event::new("input"));
        assert_eq!(names(&el).len(), 2);
    }

    #[test]
    fn test_empty_category_shows_notice() {
        let el = section(&catalog(3));
        let crash = el
            .query_class("filter-btn")
            .into_iter()
            .find(|b| b.text_content() == "Crash")
            .unwrap();
        crash.dispatch_event(&Event::click());

        assert!(names(&el).is_empty());
        assert_eq!(
            el.query_class("providers-grid")[0].text_content(),
            EMPTY_NOTICE
        );
        assert_eq!(footer_display(&el).as_deref(), Some("none"));

        let active: Vec<String> = el.query_class("active").iter().map(Element::text_content).collect();
        assert_eq!(active, vec!["Crash"]);
    }

    #[test]
    fn test_show_more_and_reset() {
        let el = section(&catalog(30));
        assert_eq!(names(&el).len(), 12);
        assert_eq!(footer_display(&el).as_deref(), Some("flex"));

        let show_more = &el.query_class("providers-footer")[0].child_elements()[0];
        show_more.dispatch_event(&Event::click());
        assert_eq!(names(&el).len(), 24);
        show_more.dispatch_event(&Event::click());
        assert_eq!(names(&el).len(), 30);
        assert_eq!(footer_display(&el).as_deref(), Some("none"));

        el.query_class("filter-btn")[1].dispatch_event(&Event::click());
        assert_eq!(names(&el).len(), 12);
    }

    #[test]
    fn test_sort_select() {
        let el = section(&json!({
            "providers": [
                { "name": "NetEnt", "popularity": 88 },
                { "name": "Evolution", "popularity": 98 },
                { "name": "amatic", "popularity": 10 }
            ]
        }));
        assert_eq!(names(&el), vec!["Evolution", "NetEnt", "amatic"]);

        let select = &el.query_tag("select")[0];
        select.dispatch_event(&Event::change("az"));
        assert_eq!(names(&el), vec!["amatic", "Evolution", "NetEnt"]);
        assert_eq!(select.value(), "az");

        select.dispatch_event(&Event::change("za"));
        assert_eq!(names(&el), vec!["NetEnt", "Evolution", "amatic"]);

        select.dispatch_event(&Event::change("shuffle"));
        assert_eq!(names(&el), vec!["NetEnt", "Evolution", "amatic"]);
    }

    #[test]
    fn test_sort_keeps_page() {
        let el = section(&catalog(30));
        el.query_class("providers-footer")[0].child_elements()[0].dispatch_event(&Event::click());
        el.query_tag("select")[0].dispatch_event(&Event::change("az"));
        assert_eq!(names(&el).len(), 24);
        assert_eq!(names(&el)[0], "Studio 00");
    }

    #[test]
    fn test_instances_are_independent() {
        let value = catalog(30);
        let first = section(&value);
        let second = section(&value);

        first.query_class("providers-footer")[0].child_elements()[0].dispatch_event(&Event::click());
        assert_eq!(names(&first).len(), 24);
        assert_eq!(names(&second).len(), 12);
    }

    #[test]
    fn test_malformed_fields_render_empty_grid() {
        let value = json!({ "providers": "Evolution, NetEnt", "categories": "All" });
        let el = section(&value);

        assert!(names(&el).is_empty());
        assert!(el.text_content().contains("No providers match your search."));
        assert_eq!(footer_display(&el).as_deref(), Some("none"));
        let filters: Vec<String> = el.query_class("filter-btn").iter().map(Element::text_content).collect();
        assert_eq!(filters, vec!["All"]);
    }

    #[test]
    fn test_search_text_written_back_to_input() {
        let el = section(&catalog(3));
        let input = &el.query_tag("input")[0];

        input.dispatch_event(&Event::input("  ORIG "));
        assert_eq!(input.value(), "  ORIG ");
        assert!(input.to_html().contains(r#"value="  ORIG ""#));

        input.set_value("p1");
        input.dispatch_event(&Event::new("input"));
        assert_eq!(input.value(), "p1");
    }
}
