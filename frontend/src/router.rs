use crate::catalog::api::{fetch_categories, fetch_videos};
use crate::catalog::components::{
    CategoryBar, EventSubscription, LanguageBar, SortBar, VideoGrid, YearDropdown,
};
use crate::catalog::filter_options::{CategoryFilter, Language, SortOrder, YearFilter};
use crate::catalog::state::{CatalogAction, CatalogState, ScrollDirection, ScrollMetrics};
use crate::env_variable_utils::get_app_name;
use chrono::{Datelike, Utc};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <CatalogApp /> },
        Route::NotFound => html! {
            <div class="not-found">
                <h1>{"404 - Page Not Found"}</h1>
                <Link<Route> to={Route::Home}>
                    {"Go back to the catalog"}
                </Link<Route>>
            </div>
        },
    }
}

#[function_component(CatalogApp)]
pub fn catalog_app() -> Html {
    let state = use_reducer(CatalogState::default);
    let year_choices = use_memo((), |_| YearFilter::choices(Utc::now().year()));

    // Categories are fetched once per page load.
    {
        let dispatcher = state.dispatcher();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let result = fetch_categories().await;
                dispatcher.dispatch(CatalogAction::CategoriesLoaded(result));
            });
            || ()
        });
    }

    // A new generation means a server-side filter changed. The response is
    // tagged with the generation it was requested for, so the reducer can drop
    // it if the user has moved on in the meantime.
    {
        let dispatcher = state.dispatcher();
        let ticket = state.ticket();
        use_effect_with(state.generation(), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let result = fetch_videos(&ticket.query).await;
                dispatcher.dispatch(CatalogAction::VideosLoaded {
                    generation: ticket.generation,
                    result,
                });
            });
            || ()
        });
    }

    // Any click that reaches the document closes the year menu.
    {
        let dispatcher = state.dispatcher();
        use_effect_with((), move |_| {
            let subscription = web_sys::window()
                .and_then(|window| window.document())
                .and_then(|document| {
                    EventSubscription::listen(document.into(), "click", move || {
                        dispatcher.dispatch(CatalogAction::CloseYearMenu)
                    })
                });
            move || drop(subscription)
        });
    }

    let on_language = {
        let dispatcher = state.dispatcher();
        Callback::from(move |language: Language| {
            dispatcher.dispatch(CatalogAction::SelectLanguage(language))
        })
    };
    let on_category = {
        let dispatcher = state.dispatcher();
        Callback::from(move |category: CategoryFilter| {
            dispatcher.dispatch(CatalogAction::SelectCategory(category))
        })
    };
    let on_year = {
        let dispatcher = state.dispatcher();
        Callback::from(move |year: YearFilter| dispatcher.dispatch(CatalogAction::SelectYear(year)))
    };
    let on_year_toggle = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(CatalogAction::ToggleYearMenu))
    };
    let on_sort = {
        let dispatcher = state.dispatcher();
        Callback::from(move |sort: SortOrder| dispatcher.dispatch(CatalogAction::SelectSort(sort)))
    };
    let on_scroll = {
        let dispatcher = state.dispatcher();
        Callback::from(move |direction: ScrollDirection| {
            dispatcher.dispatch(CatalogAction::ScrollCategories(direction))
        })
    };
    let on_hover = {
        let dispatcher = state.dispatcher();
        Callback::from(move |hovered: bool| {
            dispatcher.dispatch(CatalogAction::CategoryBarHovered(hovered))
        })
    };
    let on_measure = {
        let dispatcher = state.dispatcher();
        Callback::from(move |metrics: ScrollMetrics| {
            dispatcher.dispatch(CatalogAction::CategoryBarMeasured(metrics))
        })
    };

    html! {
        <div class="catalog">
            <header class="catalog-header">
                <h1>{ get_app_name() }</h1>
            </header>

            <div class="filter-row">
                <LanguageBar selected={state.language} on_select={on_language} />
                <SortBar selected={state.sort} on_select={on_sort} />
                <YearDropdown
                    selected={state.year}
                    open={state.year_menu_open}
                    choices={(*year_choices).clone()}
                    on_toggle={on_year_toggle}
                    on_select={on_year}
                />
            </div>

            <CategoryBar
                categories={state.categories.clone()}
                selected={state.category.clone()}
                error={state.category_error.clone()}
                bar={state.category_bar.clone()}
                on_select={on_category}
                on_scroll={on_scroll}
                on_hover={on_hover}
                on_measure={on_measure}
            />

            <VideoGrid videos={state.visible.clone()} status={state.status.clone()} />
        </div>
    }
}
