//! Catalog state controller.
//!
//! `CatalogState` owns the filter selections, the last fetched page and the
//! derived visible list. Every user event arrives as a [`CatalogAction`];
//! applying it mutates exactly one dimension and reports a [`Transition`]
//! telling the view whether a network fetch or only a local recompute is
//! needed. Video fetches carry a request generation so that only the most
//! recently requested page can ever be committed.

use crate::catalog::api::{FetchError, VideoQuery};
use crate::catalog::engine::visible_videos;
use crate::catalog::filter_options::{CategoryFilter, Language, SortOrder, YearFilter};
use crate::config::CATEGORY_SCROLL_STEP;
use crate::models::{Category, Video};
use std::rc::Rc;
use yew::Reducible;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Left,
    Right,
}

impl ScrollDirection {
    pub fn delta(&self) -> f64 {
        match self {
            ScrollDirection::Left => -CATEGORY_SCROLL_STEP,
            ScrollDirection::Right => CATEGORY_SCROLL_STEP,
        }
    }
}

/// Geometry of the scrollable category strip, as read from the DOM.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    pub scroll_left: f64,
    pub scroll_width: f64,
    pub client_width: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollButtons {
    pub left: bool,
    pub right: bool,
}

/// A pending smooth scroll. `seq` changes on every click so repeated clicks re-trigger.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollRequest {
    pub seq: u64,
    pub delta: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategoryBarState {
    pub hovered: bool,
    pub metrics: ScrollMetrics,
    pub scroll_request: Option<ScrollRequest>,
}

impl CategoryBarState {
    pub fn buttons(&self) -> ScrollButtons {
        if !self.hovered {
            return ScrollButtons::default();
        }
        let m = self.metrics;
        let at_start = m.scroll_left <= 1.0;
        let at_end = m.scroll_left + m.client_width >= m.scroll_width - 1.0;
        ScrollButtons {
            left: !at_start,
            right: !at_end,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadStatus {
    Loading,
    Loaded,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FetchTicket {
    pub generation: u64,
    pub query: VideoQuery,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CatalogAction {
    SelectLanguage(Language),
    SelectCategory(CategoryFilter),
    SelectYear(YearFilter),
    SelectSort(SortOrder),
    ScrollCategories(ScrollDirection),
    CategoryBarHovered(bool),
    CategoryBarMeasured(ScrollMetrics),
    ToggleYearMenu,
    CloseYearMenu,
    CategoriesLoaded(Result<Vec<Category>, FetchError>),
    VideosLoaded {
        generation: u64,
        result: Result<Vec<Video>, FetchError>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    /// A server-side filter changed; the ticket describes the request to issue.
    Fetch(FetchTicket),
    /// The visible list was re-derived from the current page.
    Recompute,
    /// The category strip should scroll by this many pixels.
    Scroll(f64),
    /// Only chrome (menus, hover, category bar) changed.
    Redraw,
    Unchanged,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogState {
    pub language: Language,
    pub category: CategoryFilter,
    pub year: YearFilter,
    pub sort: SortOrder,
    pub raw: Vec<Video>,
    pub visible: Vec<Video>,
    pub status: LoadStatus,
    pub categories: Vec<Category>,
    pub category_error: Option<String>,
    pub year_menu_open: bool,
    pub category_bar: CategoryBarState,
    generation: u64,
}

impl Default for CatalogState {
    /// The first page is requested on mount, so the initial state is already loading.
    fn default() -> Self {
        Self {
            language: Language::default(),
            category: CategoryFilter::default(),
            year: YearFilter::default(),
            sort: SortOrder::default(),
            raw: Vec::new(),
            visible: Vec::new(),
            status: LoadStatus::Loading,
            categories: Vec::new(),
            category_error: None,
            year_menu_open: false,
            category_bar: CategoryBarState::default(),
            generation: 1,
        }
    }
}

impl CatalogState {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The request matching the current server-side selection.
    pub fn ticket(&self) -> FetchTicket {
        FetchTicket {
            generation: self.generation,
            query: VideoQuery::new(self.language, self.category.clone()),
        }
    }

    pub fn apply(&mut self, action: CatalogAction) -> Transition {
        match action {
            CatalogAction::SelectLanguage(language) => {
                self.language = language;
                self.begin_fetch()
            }
            CatalogAction::SelectCategory(category) => {
                self.category = category;
                self.begin_fetch()
            }
            CatalogAction::SelectYear(year) => {
                self.year = year;
                self.year_menu_open = false;
                self.recompute()
            }
            CatalogAction::SelectSort(sort) => {
                self.sort = sort;
                self.recompute()
            }
            CatalogAction::ScrollCategories(direction) => {
                let seq = self
                    .category_bar
                    .scroll_request
                    .map_or(1, |r| r.seq.wrapping_add(1));
                let delta = direction.delta();
                self.category_bar.scroll_request = Some(ScrollRequest { seq, delta });
                Transition::Scroll(delta)
            }
            CatalogAction::CategoryBarHovered(hovered) => {
                if self.category_bar.hovered == hovered {
                    return Transition::Unchanged;
                }
                self.category_bar.hovered = hovered;
                Transition::Redraw
            }
            CatalogAction::CategoryBarMeasured(metrics) => {
                if self.category_bar.metrics == metrics {
                    return Transition::Unchanged;
                }
                self.category_bar.metrics = metrics;
                Transition::Redraw
            }
            CatalogAction::ToggleYearMenu => {
                self.year_menu_open = !self.year_menu_open;
                Transition::Redraw
            }
            CatalogAction::CloseYearMenu => {
                if !self.year_menu_open {
                    return Transition::Unchanged;
                }
                self.year_menu_open = false;
                Transition::Redraw
            }
            CatalogAction::CategoriesLoaded(Ok(categories)) => {
                self.categories = categories;
                self.category_error = None;
                Transition::Redraw
            }
            CatalogAction::CategoriesLoaded(Err(e)) => {
                self.categories.clear();
                self.category_error = Some(format!("Failed to load categories: {e}"));
                Transition::Redraw
            }
            CatalogAction::VideosLoaded { generation, result } => {
                self.commit_videos(generation, result)
            }
        }
    }

    fn begin_fetch(&mut self) -> Transition {
        self.generation = self.generation.wrapping_add(1);
        self.status = LoadStatus::Loading;
        Transition::Fetch(self.ticket())
    }

    fn commit_videos(
        &mut self,
        generation: u64,
        result: Result<Vec<Video>, FetchError>,
    ) -> Transition {
        if generation != self.generation {
            log::debug!(
                "Discarding stale video response (generation {generation}, current {})",
                self.generation
            );
            return Transition::Unchanged;
        }

        match result {
            Ok(videos) => {
                log::info!("Loaded {} videos", videos.len());
                self.raw = videos;
                self.status = LoadStatus::Loaded;
            }
            Err(e) => {
                self.raw.clear();
                self.status = LoadStatus::Failed(format!("Failed to load videos: {e}"));
            }
        }
        self.recompute()
    }

    fn recompute(&mut self) -> Transition {
        self.visible = visible_videos(&self.raw, self.year, self.sort);
        Transition::Recompute
    }
}

impl Reducible for CatalogState {
    type Action = CatalogAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match next.apply(action) {
            Transition::Unchanged => self,
            _ => Rc::new(next),
        }
    }
}
