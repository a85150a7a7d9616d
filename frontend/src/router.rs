use crate::api::video::VideoType;
use crate::channel::base::ChannelBase;
use crate::channel::page::ChannelVideo;
use crate::home::HomePage;
use serde::{Deserialize, Serialize};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/channel/:channel_id")]
    Channel { channel_id: String },
    #[at("/channel/:channel_id/streams")]
    ChannelStreams { channel_id: String },
    #[at("/channel/:channel_id/shorts")]
    ChannelShorts { channel_id: String },
    #[at("/downloads")]
    Downloads,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// `?videoId=` selects the video shown in the embedded player.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VideoIdQuery {
    #[serde(rename = "videoId", default, skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
}

impl VideoIdQuery {
    pub fn new(video_id: impl Into<String>) -> Self {
        Self {
            video_id: Some(video_id.into()),
        }
    }
}

impl Route {
    pub fn for_channel(channel_id: impl Into<String>, video_type: VideoType) -> Self {
        let channel_id = channel_id.into();
        match video_type {
            VideoType::Videos => Route::Channel { channel_id },
            VideoType::Streams => Route::ChannelStreams { channel_id },
            VideoType::Shorts => Route::ChannelShorts { channel_id },
        }
    }

    pub fn channel_id(&self) -> Option<&str> {
        match self {
            Route::Channel { channel_id }
            | Route::ChannelStreams { channel_id }
            | Route::ChannelShorts { channel_id } => Some(channel_id),
            _ => None,
        }
    }
}

fn channel_page(channel_id: String, video_type: VideoType) -> Html {
    html! {
        <ChannelBase channel_id={channel_id}>
            <ChannelVideo video_type={video_type} />
        </ChannelBase>
    }
}

pub fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <HomePage /> },
        Route::Channel { channel_id } => channel_page(channel_id, VideoType::Videos),
        Route::ChannelStreams { channel_id } => channel_page(channel_id, VideoType::Streams),
        Route::ChannelShorts { channel_id } => channel_page(channel_id, VideoType::Shorts),
        Route::Downloads => html! {
            <div class="boxed-content">
                <h1>{"Downloads"}</h1>
                <p>{"Rescan your subscriptions and start the download queue from the backend admin."}</p>
                <Link<Route> to={Route::Home}>{"Back to channels"}</Link<Route>>
            </div>
        },
        Route::NotFound => html! {
            <div class="boxed-content">
                <h1>{"404 - Page Not Found"}</h1>
                <Link<Route> to={Route::Home}>{"Go back home"}</Link<Route>>
            </div>
        },
    }
}
