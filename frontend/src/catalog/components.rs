use crate::catalog::card::CardView;
use crate::catalog::filter_options::{CategoryFilter, Language, SortOrder, YearFilter};
use crate::catalog::state::{CategoryBarState, LoadStatus, ScrollDirection, ScrollMetrics};
use crate::models::{Category, Video};
use chrono::Utc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{EventTarget, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

/// Keeps a native event listener attached until dropped.
pub struct EventSubscription {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn Fn()>,
}

impl EventSubscription {
    pub fn listen(target: EventTarget, event: &'static str, handler: impl Fn() + 'static) -> Option<Self> {
        let callback = Closure::<dyn Fn()>::new(handler);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|e| log::error!("Failed to listen for '{event}': {e:?}"))
            .ok()?;
        Some(Self {
            target,
            event,
            callback,
        })
    }
}

impl Drop for EventSubscription {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

fn active_class(active: bool) -> &'static str {
    if active {
        "filter-btn active"
    } else {
        "filter-btn"
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorMessageProps {
    pub error_message: Option<String>,
}

#[function_component(ErrorMessage)]
pub fn error_message(props: &ErrorMessageProps) -> Html {
    if let Some(msg) = &props.error_message {
        html! {
            <div class="error-banner">
                { msg }
            </div>
        }
    } else {
        html! {}
    }
}

#[derive(Properties, PartialEq)]
pub struct LanguageBarProps {
    pub selected: Language,
    pub on_select: Callback<Language>,
}

#[function_component(LanguageBar)]
pub fn language_bar(props: &LanguageBarProps) -> Html {
    html! {
        <div class="language-bar">
            {
                for Language::all_variants().into_iter().map(|language| {
                    let on_select = props.on_select.clone();
                    html! {
                        <button
                            class={active_class(language == props.selected)}
                            onclick={move |_| on_select.emit(language)}
                        >
                            { language.display_name() }
                        </button>
                    }
                })
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SortBarProps {
    pub selected: SortOrder,
    pub on_select: Callback<SortOrder>,
}

#[function_component(SortBar)]
pub fn sort_bar(props: &SortBarProps) -> Html {
    html! {
        <div class="sort-bar">
            {
                for SortOrder::all_variants().into_iter().map(|sort| {
                    let on_select = props.on_select.clone();
                    html! {
                        <button
                            class={active_class(sort == props.selected)}
                            onclick={move |_| on_select.emit(sort)}
                        >
                            { sort.display_name() }
                        </button>
                    }
                })
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct YearDropdownProps {
    pub selected: YearFilter,
    pub open: bool,
    pub choices: Vec<YearFilter>,
    pub on_toggle: Callback<()>,
    pub on_select: Callback<YearFilter>,
}

#[function_component(YearDropdown)]
pub fn year_dropdown(props: &YearDropdownProps) -> Html {
    // Must not reach the document listener, which closes the menu.
    let on_toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_toggle.emit(());
        })
    };

    html! {
        <div class="year-dropdown">
            <button class={active_class(props.open)} onclick={on_toggle}>
                { props.selected.button_label() }
            </button>
            <div class={if props.open { "year-menu show" } else { "year-menu" }}>
                {
                    for props.choices.iter().map(|&year| {
                        let on_select = props.on_select.clone();
                        html! {
                            <div
                                class={if year == props.selected { "year-option active" } else { "year-option" }}
                                onclick={move |_| on_select.emit(year)}
                            >
                                { year.menu_label() }
                            </div>
                        }
                    })
                }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CategoryBarProps {
    pub categories: Vec<Category>,
    pub selected: CategoryFilter,
    pub error: Option<String>,
    pub bar: CategoryBarState,
    pub on_select: Callback<CategoryFilter>,
    pub on_scroll: Callback<ScrollDirection>,
    pub on_hover: Callback<bool>,
    pub on_measure: Callback<ScrollMetrics>,
}

fn measure(strip: &NodeRef) -> Option<ScrollMetrics> {
    let element = strip.cast::<web_sys::Element>()?;
    Some(ScrollMetrics {
        scroll_left: f64::from(element.scroll_left()),
        scroll_width: f64::from(element.scroll_width()),
        client_width: f64::from(element.client_width()),
    })
}

#[function_component(CategoryBar)]
pub fn category_bar(props: &CategoryBarProps) -> Html {
    let strip = use_node_ref();

    let report_metrics = {
        let strip = strip.clone();
        let on_measure = props.on_measure.clone();
        move || {
            if let Some(metrics) = measure(&strip) {
                on_measure.emit(metrics);
            }
        }
    };

    // Re-measure whenever the button set changes and whenever the window resizes.
    {
        let report_metrics = report_metrics.clone();
        use_effect_with(props.categories.len(), move |_| {
            report_metrics();
            let subscription = web_sys::window().and_then(|window| {
                EventSubscription::listen(window.into(), "resize", report_metrics)
            });
            move || drop(subscription)
        });
    }

    {
        let strip = strip.clone();
        use_effect_with(props.bar.scroll_request, move |request| {
            if let (Some(request), Some(element)) = (request, strip.cast::<web_sys::Element>()) {
                let options = ScrollToOptions::new();
                options.set_left(request.delta);
                options.set_behavior(ScrollBehavior::Smooth);
                element.scroll_by_with_scroll_to_options(&options);
            }
            || ()
        });
    }

    let on_strip_scroll = {
        let report_metrics = report_metrics.clone();
        Callback::from(move |_: Event| report_metrics())
    };
    let on_enter = {
        let on_hover = props.on_hover.clone();
        let report_metrics = report_metrics.clone();
        Callback::from(move |_: MouseEvent| {
            on_hover.emit(true);
            report_metrics();
        })
    };
    let on_leave = {
        let on_hover = props.on_hover.clone();
        Callback::from(move |_: MouseEvent| on_hover.emit(false))
    };

    let buttons = props.bar.buttons();
    let scroll_button = |direction: ScrollDirection, visible: bool| {
        let on_scroll = props.on_scroll.clone();
        let side = match direction {
            ScrollDirection::Left => ("cat-scroll-btn left", "‹"),
            ScrollDirection::Right => ("cat-scroll-btn right", "›"),
        };
        html! {
            <button
                class={side.0}
                style={if visible { "display: block" } else { "display: none" }}
                onclick={move |_| on_scroll.emit(direction)}
            >
                { side.1 }
            </button>
        }
    };

    let all_button = {
        let on_select = props.on_select.clone();
        html! {
            <button
                class={active_class(props.selected == CategoryFilter::All)}
                onclick={move |_| on_select.emit(CategoryFilter::All)}
            >
                { "All Videos" }
            </button>
        }
    };

    html! {
        <div class="categories-container" onmouseenter={on_enter} onmouseleave={on_leave}>
            { scroll_button(ScrollDirection::Left, buttons.left) }
            <div class="categories" ref={strip} onscroll={on_strip_scroll}>
                {
                    if props.error.is_none() {
                        all_button
                    } else {
                        html! {}
                    }
                }
                {
                    for props.categories.iter().map(|category| {
                        let filter = CategoryFilter::Id(category.id.clone());
                        let on_select = props.on_select.clone();
                        let is_active = props.selected == filter;
                        html! {
                            <button
                                class={active_class(is_active)}
                                onclick={move |_| on_select.emit(filter.clone())}
                            >
                                { category.display_title() }
                            </button>
                        }
                    })
                }
            </div>
            { scroll_button(ScrollDirection::Right, buttons.right) }
            <ErrorMessage error_message={props.error.clone()} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct VideoCardProps {
    pub card: CardView,
}

#[function_component(VideoCard)]
pub fn video_card(props: &VideoCardProps) -> Html {
    let card = &props.card;
    html! {
        <div class="video-card">
            <img class="thumbnail" src={card.thumbnail.clone()} alt={card.title.clone()} />
            <div class="video-info">
                <div class="title">{ &card.title }</div>
                <div class="meta-line">
                    <span>{ &card.views_label }</span>
                    <span class="dot"></span>
                    <span>{ &card.time_label }</span>
                </div>
            </div>
            {
                if let Some(tags) = &card.tags {
                    html! {
                        <div class="tags-container">
                            { for tags.iter().map(|tag| html! { <span class="tag-box">{ tag }</span> }) }
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct VideoGridProps {
    pub videos: Vec<Video>,
    pub status: LoadStatus,
}

#[function_component(VideoGrid)]
pub fn video_grid(props: &VideoGridProps) -> Html {
    match &props.status {
        LoadStatus::Loading => html! {
            <p class="grid-status">{ "Loading videos..." }</p>
        },
        LoadStatus::Failed(message) => html! {
            <ErrorMessage error_message={Some(message.clone())} />
        },
        LoadStatus::Loaded if props.videos.is_empty() => html! {
            <p class="grid-status">{ "No videos found." }</p>
        },
        LoadStatus::Loaded => {
            let now = Utc::now();
            html! {
                <div id="videoGrid" class="video-grid">
                    {
                        for props.videos.iter().map(|video| html! {
                            <VideoCard card={CardView::from_video(video, now)} />
                        })
                    }
                </div>
            }
        }
    }
}
