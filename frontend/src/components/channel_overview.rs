use crate::api::client::media_url;
use crate::models::ChannelResponse;
use crate::router::Route;
use crate::utils::format_number;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ChannelOverviewProps {
    pub channel: ChannelResponse,
}

#[function_component(ChannelOverview)]
pub fn channel_overview(props: &ChannelOverviewProps) -> Html {
    let channel = &props.channel;

    html! {
        <div class="info-box-item">
            <div class="round-img">
                <img src={media_url(&channel.channel_thumb_url)} alt="channel-thumb" />
            </div>
            <div>
                <h3>
                    <Link<Route> to={Route::Channel { channel_id: channel.channel_id.clone() }}>
                        { &channel.channel_name }
                    </Link<Route>>
                </h3>
                <p>{ format!("Subscribers: {}", format_number(channel.channel_subs)) }</p>
                <p>{ if channel.channel_subscribed { "Subscribed" } else { "Not subscribed" } }</p>
            </div>
        </div>
    }
}
