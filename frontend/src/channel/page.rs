use crate::api::video::{VideoType, WatchedStateUpdate};
use crate::channel::base::use_page_cursor;
use crate::channel::components::ChannelPageBody;
use crate::channel::fetch::{
    fetch_channel_snapshot, mark_channel_watched, BackendApi, ChannelPageState, ChannelQuery,
    FetchSequencer,
};
use crate::channel::state::{ChannelViewAction, ChannelViewState};
use crate::components::scroll::ScrollToTopOnNavigate;
use crate::env_variable_utils::get_app_name;
use crate::router::{Route, VideoIdQuery};
use crate::user_config::provider::use_user_config;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ChannelVideoProps {
    pub video_type: VideoType,
}

fn set_document_title(title: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(title);
    }
}

#[function_component(ChannelVideo)]
pub fn channel_video(props: &ChannelVideoProps) -> Html {
    let channel_id = use_route::<Route>()
        .and_then(|route| route.channel_id().map(str::to_string))
        .unwrap_or_default();
    let user_config = use_user_config();
    let cursor = use_page_cursor();
    let video_id = use_location()
        .and_then(|location| location.query::<VideoIdQuery>().ok())
        .and_then(|query| query.video_id);

    let view = use_reducer(ChannelViewState::default);
    let sequencer = use_mut_ref(FetchSequencer::default);
    let page_state = view.page_state_for(&channel_id);

    let query = ChannelQuery {
        channel_id: channel_id.clone(),
        page: cursor.current_page,
        video_type: props.video_type,
        sort_by: user_config.config.sort_by,
        sort_order: user_config.config.sort_order,
        hide_watched: user_config.config.hide_watched,
        video_id: video_id.clone(),
        refresh: view.refresh,
    };

    {
        let dispatcher = view.dispatcher();
        let set_page = cursor.set_page.clone();
        use_effect_with(query, move |query| {
            let ticket = sequencer.borrow_mut().begin();
            let query = query.clone();
            let guard = sequencer.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let state = fetch_channel_snapshot(&BackendApi, &query).await;
                if !guard.borrow().is_current(ticket) {
                    log::debug!("Dropping stale fetch cycle {ticket} for {}", query.channel_id);
                    return;
                }
                if let ChannelPageState::Failed(e) = &state {
                    log::error!("Failed to load channel {}: {e}", query.channel_id);
                }
                if let ChannelPageState::Loaded(snapshot) = &state {
                    if let Some(page) = snapshot.corrected_page(query.page) {
                        set_page.emit(page);
                    }
                }
                dispatcher.dispatch(ChannelViewAction::Resolved {
                    channel_id: query.channel_id,
                    state,
                });
            });

            move || sequencer.borrow_mut().invalidate()
        });
    }

    {
        let channel_name = match &page_state {
            ChannelPageState::Loaded(snapshot) => Some(snapshot.channel.channel_name.clone()),
            _ => None,
        };
        use_effect_with(channel_name, |channel_name| {
            if let Some(name) = channel_name {
                set_document_title(&format!("{} | Channel: {name}", get_app_name()));
            }
            || ()
        });
    }

    let on_refresh = {
        let dispatcher = view.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(ChannelViewAction::Refresh))
    };

    // No local update; the next fetch cycle shows the new state.
    let on_mark_watched = {
        let on_refresh = on_refresh.clone();
        Callback::from(move |update: WatchedStateUpdate| {
            let on_refresh = on_refresh.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match mark_channel_watched(&BackendApi, &update).await {
                    Ok(()) => on_refresh.emit(()),
                    Err(e) => log::error!(
                        "Failed to mark {} as watched={}: {e}",
                        update.id,
                        update.is_watched
                    ),
                }
            });
        })
    };

    html! {
        <>
            <ScrollToTopOnNavigate />
            <ChannelPageBody
                channel_id={channel_id}
                state={page_state}
                config={user_config.config.clone()}
                video_type={props.video_type}
                video_id={video_id}
                on_config_change={user_config.update.clone()}
                on_mark_watched={on_mark_watched}
                on_set_page={cursor.set_page.clone()}
                on_refresh={on_refresh}
            />
        </>
    }
}
