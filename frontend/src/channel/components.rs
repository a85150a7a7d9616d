use crate::api::video::{VideoType, WatchedStateUpdate};
use crate::channel::fetch::{ChannelPageState, ChannelSnapshot};
use crate::channel::layout::layout_classes;
use crate::components::channel_overview::ChannelOverview;
use crate::components::filterbar::Filterbar;
use crate::components::pagination::PaginationControls;
use crate::components::player::EmbeddableVideoPlayer;
use crate::components::video_list::VideoList;
use crate::models::ChannelAggs;
use crate::router::Route;
use crate::user_config::{UserConfig, UserConfigPatch};
use crate::utils::human_file_size;
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ChannelStatsProps {
    pub aggs: ChannelAggs,
    pub channel_name: String,
    pub use_si_units: bool,
    pub on_mark_watched: Callback<bool>,
}

#[function_component(ChannelStats)]
pub fn channel_stats(props: &ChannelStatsProps) -> Html {
    let aggs = &props.aggs;
    let mark = |is_watched: bool| props.on_mark_watched.reform(move |_: MouseEvent| is_watched);

    html! {
        <div class="info-box-item">
            <p>
                { format!("{} videos ", aggs.total_items.value) }
                <span class="space-carrot">{"|"}</span>
                { format!(" {} playback ", aggs.total_duration.value_str) }
                <span class="space-carrot">{"|"}</span>
                { format!(" Total size {}", human_file_size(aggs.total_size.value, props.use_si_units)) }
            </p>
            <div class="button-box">
                <button
                    id="watched-button"
                    type="button"
                    title={format!("Mark all videos from {} as watched", props.channel_name)}
                    onclick={mark(true)}
                >
                    {"Mark as watched"}
                </button>
                {" "}
                <button
                    id="unwatched-button"
                    type="button"
                    title={format!("Mark all videos from {} as unwatched", props.channel_name)}
                    onclick={mark(false)}
                >
                    {"Mark as unwatched"}
                </button>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct ChannelVideoContentProps {
    pub snapshot: Rc<ChannelSnapshot>,
    pub config: UserConfig,
    pub video_type: VideoType,
    pub video_id: Option<String>,
    pub on_config_change: Callback<UserConfigPatch>,
    pub on_mark_watched: Callback<WatchedStateUpdate>,
    pub on_set_page: Callback<u32>,
    pub on_refresh: Callback<()>,
}

/// Markup of a loaded channel page.
#[function_component(ChannelVideoContent)]
pub fn channel_video_content(props: &ChannelVideoContentProps) -> Html {
    let snapshot = &props.snapshot;
    let channel = &snapshot.channel;
    let layout = layout_classes(&props.config);
    let has_videos = !snapshot.video_list.data.is_empty();
    // The shown channel is the one marked, whatever the route says by now.
    let on_mark_watched = {
        let snapshot = snapshot.clone();
        props
            .on_mark_watched
            .reform(move |is_watched: bool| snapshot.watched_update(is_watched))
    };

    html! {
        <>
            <div class="boxed-content">
                <div class="info-box info-box-2">
                    <ChannelOverview channel={channel.clone()} />
                    <ChannelStats
                        aggs={snapshot.aggs.clone()}
                        channel_name={channel.channel_name.clone()}
                        use_si_units={props.config.uses_si_units()}
                        on_mark_watched={on_mark_watched}
                    />
                </div>
            </div>

            <div class={classes!("boxed-content", layout.boxed.clone())}>
                <Filterbar
                    hide_toggle_text="Hide watched videos:"
                    config={props.config.clone()}
                    on_change={props.on_config_change.clone()}
                />
            </div>

            <EmbeddableVideoPlayer video_id={props.video_id.clone()} />

            <div class={classes!("boxed-content", layout.boxed.clone())}>
                <div class={classes!("video-list", layout.view_style.as_str(), layout.grid.clone())}>
                    {
                        if has_videos {
                            html! {}
                        } else {
                            html! {
                                <>
                                    <h2>{"No videos found..."}</h2>
                                    <p>
                                        {"Try going to the "}
                                        <Link<Route> to={Route::Downloads}>{"downloads page"}</Link<Route>>
                                        {" to start the scan and download tasks."}
                                    </p>
                                </>
                            }
                        }
                    }
                    <VideoList
                        videos={snapshot.video_list.data.clone()}
                        view_style={layout.view_style}
                        channel_id={channel.channel_id.clone()}
                        video_type={props.video_type}
                        refresh_video_list={props.on_refresh.clone()}
                    />
                </div>
            </div>

            {
                if let Some(pagination) = snapshot.pagination() {
                    html! {
                        <div class="boxed-content">
                            <PaginationControls
                                pagination={pagination.clone()}
                                set_page={props.on_set_page.clone()}
                            />
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct ChannelPageBodyProps {
    pub channel_id: String,
    pub state: ChannelPageState,
    pub config: UserConfig,
    pub video_type: VideoType,
    pub video_id: Option<String>,
    pub on_config_change: Callback<UserConfigPatch>,
    pub on_mark_watched: Callback<WatchedStateUpdate>,
    pub on_set_page: Callback<u32>,
    pub on_refresh: Callback<()>,
}

/// Channel page markup for each fetch state.
#[function_component(ChannelPageBody)]
pub fn channel_page_body(props: &ChannelPageBodyProps) -> Html {
    match &props.state {
        ChannelPageState::Loading => html! {
            <div class="boxed-content">
                <p>{"Loading channel..."}</p>
            </div>
        },
        ChannelPageState::NotFound => html! {
            <div class="boxed-content">
                <h2>{"Channel not found!"}</h2>
                <p>{ format!("No channel with id {} is in the library.", props.channel_id) }</p>
            </div>
        },
        ChannelPageState::Failed(msg) => html! {
            <div class="boxed-content">
                <div class="error-message">{ format!("Error: {msg}") }</div>
            </div>
        },
        ChannelPageState::Loaded(snapshot) => html! {
            <ChannelVideoContent
                snapshot={snapshot.clone()}
                config={props.config.clone()}
                video_type={props.video_type}
                video_id={props.video_id.clone()}
                on_config_change={props.on_config_change.clone()}
                on_mark_watched={props.on_mark_watched.clone()}
                on_set_page={props.on_set_page.clone()}
                on_refresh={props.on_refresh.clone()}
            />
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::fetch::tests::{aggs, channel, video};
    use crate::models::{Pagination, VideoListResponse};
    use crate::user_config::ViewStyle;
    use yew::LocalServerRenderer;
    use yew_router::history::{AnyHistory, MemoryHistory};
    use yew_router::Router;

    #[derive(Properties, PartialEq)]
    struct HarnessProps {
        state: ChannelPageState,
        config: UserConfig,
    }

    #[function_component(Harness)]
    fn harness(props: &HarnessProps) -> Html {
        let history = AnyHistory::from(MemoryHistory::new());
        html! {
            <Router history={history}>
                <ChannelPageBody
                    channel_id="abc123"
                    state={props.state.clone()}
                    config={props.config.clone()}
                    video_type={VideoType::Videos}
                    video_id={None::<String>}
                    on_config_change={Callback::noop()}
                    on_mark_watched={Callback::noop()}
                    on_set_page={Callback::noop()}
                    on_refresh={Callback::noop()}
                />
            </Router>
        }
    }

    fn snapshot(video_count: usize, paginate: Option<Pagination>) -> ChannelSnapshot {
        ChannelSnapshot {
            channel: channel("abc123"),
            video_list: VideoListResponse {
                data: (0..video_count).map(|i| video(&format!("vid{i}"))).collect(),
                paginate,
            },
            aggs: aggs(),
        }
    }

    async fn render_state(state: ChannelPageState) -> String {
        let config = UserConfig::default();
        LocalServerRenderer::<Harness>::with_props(HarnessProps { state, config })
            .hydratable(false)
            .render()
            .await
    }

    async fn render(snapshot: ChannelSnapshot, config: UserConfig) -> String {
        let state = ChannelPageState::Loaded(Rc::new(snapshot));
        LocalServerRenderer::<Harness>::with_props(HarnessProps { state, config })
            .hydratable(false)
            .render()
            .await
    }

    fn grid_config(view_style_home: ViewStyle) -> UserConfig {
        UserConfig {
            view_style_home,
            grid_items: 4,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn empty_list_shows_the_empty_state() {
        let html = render(snapshot(0, None), UserConfig::default()).await;
        assert!(html.contains("No videos found..."));
        assert!(html.contains(r#"href="/downloads""#));
        assert_eq!(html.matches(r#"class="video-item"#).count(), 0);
    }

    #[tokio::test]
    async fn one_item_per_video() {
        let html = render(snapshot(3, None), UserConfig::default()).await;
        assert!(!html.contains("No videos found..."));
        assert_eq!(html.matches(r#"class="video-item"#).count(), 3);
        assert!(html.contains("Video vid2"));
    }

    #[tokio::test]
    async fn pagination_follows_metadata() {
        let with = render(
            snapshot(1, Some(Pagination { current_page: 1, ..Default::default() })),
            UserConfig::default(),
        )
        .await;
        assert!(with.contains(r#"class="pagination""#));

        let without = render(snapshot(1, None), UserConfig::default()).await;
        assert!(!without.contains(r#"class="pagination""#));
    }

    #[tokio::test]
    async fn grid_layout_classes() {
        let html = render(snapshot(1, None), grid_config(ViewStyle::Grid)).await;
        assert!(html.contains("boxed-content boxed-4"));
        assert!(html.contains("video-list grid grid-4"));
    }

    #[tokio::test]
    async fn list_layout_has_no_grid_fragments() {
        let html = render(snapshot(1, None), grid_config(ViewStyle::List)).await;
        assert!(html.contains("video-list list"));
        assert!(!html.contains("boxed-4"));
        assert!(!html.contains("grid-4"));
    }

    #[tokio::test]
    async fn aggregates_line() {
        let html = render(snapshot(1, None), UserConfig::default()).await;
        assert!(html.contains("42 videos"));
        assert!(html.contains("1h 2m playback"));
        assert!(html.contains("Total size 1.4 MiB"));
        assert!(html.contains("Mark all videos from Test Channel as watched"));
    }

    #[tokio::test]
    async fn loading_is_not_the_empty_state() {
        let html = render_state(ChannelPageState::Loading).await;
        assert!(html.contains("Loading channel..."));
        assert!(!html.contains("No videos found..."));
        assert!(!html.contains("Channel not found!"));
    }

    #[tokio::test]
    async fn missing_channel_markup() {
        let html = render_state(ChannelPageState::NotFound).await;
        assert!(html.contains("Channel not found!"));
        assert!(html.contains("No channel with id abc123"));
        assert!(!html.contains("No videos found..."));
    }

    #[tokio::test]
    async fn failed_cycle_shows_the_error() {
        let html = render_state(ChannelPageState::Failed("boom".to_string())).await;
        assert!(html.contains("Error: boom"));
        assert!(!html.contains("Loading channel..."));
        assert!(!html.contains("No videos found..."));
    }
}
