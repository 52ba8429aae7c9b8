mod catalog;
mod config;
mod env_variable_utils;
mod logging;
mod models;
mod router;
mod utils;

use crate::config::{CATEGORY_API, VIDEO_API};
use crate::env_variable_utils::{get_app_name, is_debug_mode};
use crate::router::{switch, Route};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    logging::init_logger(is_debug_mode());

    log::info!(
        "NAME: \"{}\", CATEGORIES: \"{}\", VIDEOS: \"{}\" DEBUG: \"{}\"",
        get_app_name(),
        &*CATEGORY_API,
        &*VIDEO_API,
        is_debug_mode()
    );

    yew::Renderer::<App>::new().render();
}
