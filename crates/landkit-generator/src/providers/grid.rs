//! Providers grid model: normalized providers, UI state, pure transitions
//! and the visible-set computation.
//!
//! Nothing here touches elements, so every rule of the grid can be checked
//! without a document.

use std::{cmp::Ordering, fmt, str::FromStr};

use serde_json::Value;

use crate::data::Data;

/// Catch-all category; selecting it disables category filtering.
pub const ALL_CATEGORY: &str = "All";
/// Initial page size when the payload does not set `initialVisible`.
pub const DEFAULT_INITIAL_VISIBLE: usize = 12;
/// How many more tiles "Show more" reveals.
pub const PAGE_STEP: usize = 12;
pub const DEFAULT_POPULARITY: f64 = 50.0;

/// One provider after normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct Provider {
    pub name: String,
    /// Never empty.
    pub categories: Vec<String>,
    pub popularity: f64,
}

impl Provider {
    /// Build a provider, filling empty categories and non-finite popularity.
    #[must_use]
    pub fn new(name: impl Into<String>, categories: Vec<String>, popularity: f64) -> Self {
        let categories = if categories.is_empty() {
            vec![ALL_CATEGORY.to_string()]
        } else {
            categories
        };
        let popularity = if popularity.is_finite() {
            popularity
        } else {
            DEFAULT_POPULARITY
        };
        Self {
            name: name.into(),
            categories,
            popularity,
        }
    }

    /// Normalize one payload entry.
    ///
    /// A bare string is a provider in the `All` bucket. Objects default their
    /// name to `Provider`. Anything else is skipped.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(name) => Some(Self::new(name.as_str(), Vec::new(), DEFAULT_POPULARITY)),
            Value::Object(_) => {
                let d = Data::new("providersGrid.v1", value);
                let name = d
                    .text("name")
                    .ok()
                    .flatten()
                    .unwrap_or_else(|| "Provider".to_string());
                let categories = d.strings("categories").unwrap_or_default();
                let popularity = d.number("popularity").unwrap_or(DEFAULT_POPULARITY);
                Some(Self::new(name, categories, popularity))
            }
            _ => None,
        }
    }

    #[must_use]
    pub fn in_category(&self, category: &str) -> bool {
        category == ALL_CATEGORY || self.categories.iter().any(|c| c == category)
    }

    /// Case-insensitive substring match on the name. `query` must already be
    /// normalized.
    #[must_use]
    pub fn matches_query(&self, query: &str) -> bool {
        query.is_empty() || self.name.to_lowercase().contains(query)
    }

    /// Categories shown on the tile: everything but `All`, or `All` alone.
    #[must_use]
    pub fn badges(&self) -> Vec<&str> {
        let badges: Vec<&str> = self
            .categories
            .iter()
            .map(String::as_str)
            .filter(|c| *c != ALL_CATEGORY)
            .collect();
        if badges.is_empty() {
            vec![ALL_CATEGORY]
        } else {
            badges
        }
    }
}

/// Sort order of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Most popular first.
    #[default]
    Popular,
    Az,
    Za,
}

impl SortMode {
    pub const ALL: [Self; 3] = [Self::Popular, Self::Az, Self::Za];

    /// Value of the `<option>` for this mode.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Popular => "popular",
            Self::Az => "az",
            Self::Za => "za",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Popular => "Sort: Popular",
            Self::Az => "Sort: A–Z",
            Self::Za => "Sort: Z–A",
        }
    }

    fn sort(self, providers: &mut [&Provider]) {
        match self {
            Self::Popular => providers.sort_by(|a, b| {
                b.popularity
                    .partial_cmp(&a.popularity)
                    .unwrap_or(Ordering::Equal)
            }),
            Self::Az => providers.sort_by(|a, b| compare_names(&a.name, &b.name)),
            Self::Za => providers.sort_by(|a, b| compare_names(&b.name, &a.name)),
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| format!("unknown sort mode `{s}` (expected popular, az or za)"))
    }
}

/// Name order: case-insensitive first, raw text as the tie-break.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Trim and lower-case a search string.
#[must_use]
pub fn normalize_query(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Grid UI state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridState {
    pub query: String,
    pub active_category: String,
    pub sort_mode: SortMode,
    pub visible_count: usize,
}

/// User input the grid reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridEvent {
    SearchChanged(String),
    CategorySelected(String),
    SortChanged(SortMode),
    ShowMore,
}

/// The result of filtering, sorting and paginating.
#[derive(Debug, Clone, PartialEq)]
pub struct GridView<'a> {
    pub visible: Vec<&'a Provider>,
    /// Size of the filtered set before pagination.
    pub matched: usize,
    pub show_more: bool,
}

impl GridView<'_> {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matched == 0
    }

    /// Names of the visible providers, in order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.visible.iter().map(|p| p.name.as_str()).collect()
    }
}

/// Immutable inputs of one grid instance.
#[derive(Debug, Clone, PartialEq)]
pub struct GridModel {
    providers: Vec<Provider>,
    categories: Vec<String>,
    initial_visible: usize,
}

impl GridModel {
    #[must_use]
    pub fn new(providers: Vec<Provider>, categories: Vec<String>, initial_visible: usize) -> Self {
        let categories = if categories.is_empty() {
            vec![ALL_CATEGORY.to_string()]
        } else {
            categories
        };
        Self {
            providers,
            categories,
            initial_visible,
        }
    }

    /// Read `providers`, `categories` and `initialVisible` from a payload.
    ///
    /// Fields of the wrong shape fall back to their defaults.
    #[must_use]
    pub fn from_data(d: &Data<'_>) -> Self {
        let raw = d.list_or_empty("providers");
        let providers: Vec<Provider> = raw.iter().filter_map(Provider::from_value).collect();
        if providers.len() < raw.len() {
            tracing::debug!(
                skipped = raw.len() - providers.len(),
                "skipped provider entries that are neither text nor objects"
            );
        }
        let categories: Vec<String> = d
            .list_or_empty("categories")
            .iter()
            .filter_map(|c| Data::new(d.section(), c).as_text())
            .collect();
        // Fractional sizes truncate; negative ones show nothing.
        let initial_visible = d
            .number("initialVisible")
            .map_or(DEFAULT_INITIAL_VISIBLE, |n| n.max(0.0) as usize);
        Self::new(providers, categories, initial_visible)
    }

    #[must_use]
    pub fn providers(&self) -> &[Provider] {
        &self.providers
    }

    /// Filter buttons, in payload order.
    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    #[must_use]
    pub fn initial_visible(&self) -> usize {
        self.initial_visible
    }

    #[must_use]
    pub fn initial_state(&self) -> GridState {
        GridState {
            query: String::new(),
            active_category: ALL_CATEGORY.to_string(),
            sort_mode: SortMode::default(),
            visible_count: self.initial_visible,
        }
    }

    /// Next state for `event`. Search and category changes reset
    /// pagination; sort changes keep it.
    #[must_use]
    pub fn transition(&self, state: &GridState, event: GridEvent) -> GridState {
        let mut next = state.clone();
        match event {
            GridEvent::SearchChanged(text) => {
                next.query = normalize_query(&text);
                next.visible_count = self.initial_visible;
            }
            GridEvent::CategorySelected(category) => {
                next.active_category = category;
                next.visible_count = self.initial_visible;
            }
            GridEvent::SortChanged(mode) => next.sort_mode = mode,
            GridEvent::ShowMore => next.visible_count = state.visible_count.saturating_add(PAGE_STEP),
        }
        next
    }

    /// Filter, then sort, then paginate.
    #[must_use]
    pub fn view(&self, state: &GridState) -> GridView<'_> {
        let mut matched: Vec<&Provider> = self
            .providers
            .iter()
            .filter(|p| p.in_category(&state.active_category) && p.matches_query(&state.query))
            .collect();
        state.sort_mode.sort(&mut matched);

        let total = matched.len();
        matched.truncate(state.visible_count);
        GridView {
            visible: matched,
            matched: total,
            show_more: total > state.visible_count,
        }
    }
}
