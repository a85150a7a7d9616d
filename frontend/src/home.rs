use crate::router::Route;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let current_input = use_state(String::new);
    let navigator = use_navigator();

    let on_input = {
        let current_input = current_input.clone();
        Callback::from(move |e: InputEvent| {
            let input_value = e.target_unchecked_into::<HtmlInputElement>().value();
            current_input.set(input_value);
        })
    };

    let on_submit = {
        let current_input = current_input.clone();
        Callback::from(move |e: web_sys::SubmitEvent| {
            e.prevent_default(); // Prevent default form submission (page reload)
            let channel_id = current_input.trim().to_string();
            if channel_id.is_empty() {
                return;
            }
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Channel { channel_id });
            }
        })
    };

    html! {
        <div class="boxed-content">
            <h1>{"Channels"}</h1>
            <form onsubmit={on_submit} class="channel-lookup">
                <input
                    type="text"
                    placeholder="Channel id, e.g. UC_x5XG1OV2P6uZZ5FSM9Ttw"
                    value={(*current_input).clone()}
                    oninput={on_input}
                />
                <button type="submit">{"Open channel"}</button>
            </form>
        </div>
    }
}
