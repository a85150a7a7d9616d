use crate::api::client::media_url;
use crate::api::video::{update_watched_state, VideoType, WatchedStateUpdate};
use crate::models::VideoSummary;
use crate::router::{Route, VideoIdQuery};
use crate::user_config::ViewStyle;
use crate::utils::format_iso8601_date;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct VideoListProps {
    pub videos: Vec<VideoSummary>,
    pub view_style: ViewStyle,
    pub channel_id: String,
    pub video_type: VideoType,
    pub refresh_video_list: Callback<()>,
}

#[function_component(VideoList)]
pub fn video_list(props: &VideoListProps) -> Html {
    let route = Route::for_channel(props.channel_id.clone(), props.video_type);

    html! {
        <>
            { for props.videos.iter().map(|video| html! {
                <VideoListItem
                    key={video.youtube_id.clone()}
                    video={video.clone()}
                    view_style={props.view_style}
                    route={route.clone()}
                    refresh_video_list={props.refresh_video_list.clone()}
                />
            })}
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct VideoListItemProps {
    pub video: VideoSummary,
    pub view_style: ViewStyle,
    pub route: Route,
    pub refresh_video_list: Callback<()>,
}

#[function_component(VideoListItem)]
pub fn video_list_item(props: &VideoListItemProps) -> Html {
    let video = &props.video;
    let watched = video.player.watched;

    let on_toggle_watched = {
        let video_id = video.youtube_id.clone();
        let refresh = props.refresh_video_list.clone();
        Callback::from(move |_: MouseEvent| {
            let update = WatchedStateUpdate {
                id: video_id.clone(),
                is_watched: !watched,
            };
            let refresh = refresh.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match update_watched_state(&update).await.into_result() {
                    Ok(()) => refresh.emit(()),
                    Err(e) => log::error!("Failed to update watched state of {}: {e}", update.id),
                }
            });
        })
    };

    html! {
        <div class={classes!("video-item", props.view_style.as_str())}>
            <Link<Route, VideoIdQuery> to={props.route.clone()} query={Some(VideoIdQuery::new(video.youtube_id.clone()))}>
                <div class="video-thumb-wrap">
                    <img src={media_url(&video.vid_thumb_url)} alt="video-thumb" />
                </div>
            </Link<Route, VideoIdQuery>>
            <div class="video-desc">
                <div class="video-desc-player">
                    <button
                        class="watch-button"
                        title={if watched { "Mark as unwatched" } else { "Mark as watched" }}
                        onclick={on_toggle_watched}
                    >
                        { if watched { "Watched" } else { "Unwatched" } }
                    </button>
                    <span>{ format_iso8601_date(&video.published) }</span>
                    <span>{ format!(" | {}", video.player.duration_str) }</span>
                </div>
                <h2>{ &video.title }</h2>
            </div>
        </div>
    }
}
