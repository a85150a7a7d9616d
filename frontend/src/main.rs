mod api;
mod channel;
mod components;
mod env_variable_utils;
mod home;
mod logger;
mod models;
mod router;
mod user_config;
mod utils;

use crate::env_variable_utils::{get_app_name, is_debug_mode, BACKEND_URL};
use crate::router::{switch, Route};
use crate::user_config::provider::UserConfigProvider;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <UserConfigProvider>
                <Switch<Route> render={switch} />
            </UserConfigProvider>
        </BrowserRouter>
    }
}

fn main() {
    logger::init();
    yew::Renderer::<App>::new().render();

    log::info!(
        "NAME: \"{}\", API: \"{}\" DEBUG: \"{}\"",
        get_app_name(),
        &*BACKEND_URL,
        is_debug_mode()
    );
}
