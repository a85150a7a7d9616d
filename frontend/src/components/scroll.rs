use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(ScrollToTopOnNavigate)]
pub fn scroll_to_top_on_navigate() -> Html {
    let path = use_location().map(|location| location.path().to_string());

    use_effect_with(path, |_| {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
        || ()
    });

    html! {}
}
