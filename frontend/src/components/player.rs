use crate::api::client::media_url;
use crate::api::video::load_video_by_id;
use crate::channel::fetch::FetchSequencer;
use crate::models::VideoSummary;
use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct EmbeddableVideoPlayerProps {
    pub video_id: Option<String>,
}

#[function_component(EmbeddableVideoPlayer)]
pub fn embeddable_video_player(props: &EmbeddableVideoPlayerProps) -> Html {
    let video = use_state(|| None::<VideoSummary>);
    let error_message = use_state(|| None::<String>);
    let navigator = use_navigator();
    let route = use_route::<Route>();
    let sequencer = use_mut_ref(FetchSequencer::default);

    {
        let video = video.clone();
        let error_message = error_message.clone();
        use_effect_with(props.video_id.clone(), move |video_id| {
            video.set(None);
            error_message.set(None);

            if let Some(video_id) = video_id.clone() {
                let ticket = sequencer.borrow_mut().begin();
                let guard = sequencer.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let loaded = load_video_by_id(&video_id).await.into_result();
                    // A slow load must not replace a video opened after it.
                    if !guard.borrow().is_current(ticket) {
                        log::debug!("Dropping stale player load for {video_id}");
                        return;
                    }
                    match loaded {
                        Ok(loaded) => video.set(Some(loaded)),
                        Err(e) => error_message.set(Some(format!("Failed to load video: {e}"))),
                    }
                });
            }
            move || sequencer.borrow_mut().invalidate()
        });
    }

    if props.video_id.is_none() {
        return html! {};
    }

    // Dropping the query string closes the player.
    let on_close = Callback::from(move |_: MouseEvent| {
        if let (Some(navigator), Some(route)) = (&navigator, &route) {
            navigator.push(route);
        }
    });

    let body = match (&*video, &*error_message) {
        (_, Some(msg)) => html! { <p class="player-error">{ msg }</p> },
        (Some(video), None) => html! {
            <>
                <video
                    src={media_url(&video.media_url)}
                    poster={media_url(&video.vid_thumb_url)}
                    controls={true}
                    autoplay={true}
                    width="100%"
                />
                <h2>{ &video.title }</h2>
            </>
        },
        (None, None) => html! { <p>{"Loading video..."}</p> },
    };

    html! {
        <div class="player-wrapper">
            <div class="video-player">
                { body }
                <button class="player-close" onclick={on_close}>{"Close"}</button>
            </div>
        </div>
    }
}
