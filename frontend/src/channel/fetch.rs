use crate::api::channel::{load_channel_aggs, load_channel_by_id};
use crate::api::client::ApiResponse;
use crate::api::video::{
    load_video_list_by_filter, update_watched_state, VideoListFilter, VideoType, WatchedStateUpdate,
};
use crate::models::{ChannelAggs, ChannelResponse, Pagination, VideoListResponse};
use crate::user_config::{SortBy, SortOrder};
use std::rc::Rc;

/// The backend reads the channel page needs.
#[allow(async_fn_in_trait)]
pub trait ChannelApi {
    async fn load_channel(&self, channel_id: &str) -> ApiResponse<ChannelResponse>;
    async fn load_video_list(&self, filter: &VideoListFilter) -> ApiResponse<VideoListResponse>;
    async fn load_aggs(&self, channel_id: &str) -> ApiResponse<ChannelAggs>;
    async fn update_watched(&self, update: &WatchedStateUpdate) -> ApiResponse<()>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BackendApi;

impl ChannelApi for BackendApi {
    async fn load_channel(&self, channel_id: &str) -> ApiResponse<ChannelResponse> {
        load_channel_by_id(channel_id).await
    }

    async fn load_video_list(&self, filter: &VideoListFilter) -> ApiResponse<VideoListResponse> {
        load_video_list_by_filter(filter).await
    }

    async fn load_aggs(&self, channel_id: &str) -> ApiResponse<ChannelAggs> {
        load_channel_aggs(channel_id).await
    }

    async fn update_watched(&self, update: &WatchedStateUpdate) -> ApiResponse<()> {
        update_watched_state(update).await
    }
}

/// Every input that forces a new fetch cycle when it changes.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelQuery {
    pub channel_id: String,
    pub page: u32,
    pub video_type: VideoType,
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
    pub hide_watched: bool,
    pub video_id: Option<String>,
    pub refresh: u32,
}

impl ChannelQuery {
    pub fn video_filter(&self) -> VideoListFilter {
        VideoListFilter {
            channel: self.channel_id.clone(),
            page: self.page,
            unwatched_only: self.hide_watched,
            sort: self.sort_by,
            order: self.sort_order,
            video_type: self.video_type,
        }
    }
}

/// The three reads of one cycle, applied together.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelSnapshot {
    pub channel: ChannelResponse,
    pub video_list: VideoListResponse,
    pub aggs: ChannelAggs,
}

impl ChannelSnapshot {
    pub fn pagination(&self) -> Option<&Pagination> {
        self.video_list.paginate.as_ref()
    }

    /// Page the backend actually served, when it differs from `requested`.
    pub fn corrected_page(&self, requested: u32) -> Option<u32> {
        self.pagination()
            .map(|p| p.current_page)
            .filter(|&page| page > 0 && page != requested)
    }

    /// Watched-state action for every video of the loaded channel.
    pub fn watched_update(&self, is_watched: bool) -> WatchedStateUpdate {
        WatchedStateUpdate {
            id: self.channel.channel_id.clone(),
            is_watched,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChannelPageState {
    Loading,
    NotFound,
    Failed(String),
    Loaded(Rc<ChannelSnapshot>),
}

pub fn snapshot_state(
    channel: ApiResponse<ChannelResponse>,
    video_list: ApiResponse<VideoListResponse>,
    aggs: ApiResponse<ChannelAggs>,
) -> ChannelPageState {
    if channel.is_not_found() {
        return ChannelPageState::NotFound;
    }

    let gathered = channel.into_result().and_then(|channel| {
        let video_list = video_list.into_result()?;
        let aggs = aggs.into_result()?;
        Ok(ChannelSnapshot {
            channel,
            video_list,
            aggs,
        })
    });

    match gathered {
        Ok(snapshot) => ChannelPageState::Loaded(Rc::new(snapshot)),
        Err(e) => ChannelPageState::Failed(e),
    }
}

/// Runs one fetch cycle: the three reads go out together and resolve as one state.
pub async fn fetch_channel_snapshot<A: ChannelApi>(api: &A, query: &ChannelQuery) -> ChannelPageState {
    let filter = query.video_filter();
    let (channel, video_list, aggs) = futures::join!(
        api.load_channel(&query.channel_id),
        api.load_video_list(&filter),
        api.load_aggs(&query.channel_id),
    );
    snapshot_state(channel, video_list, aggs)
}

pub async fn mark_channel_watched<A: ChannelApi>(
    api: &A,
    update: &WatchedStateUpdate,
) -> Result<(), String> {
    api.update_watched(update).await.into_result()
}

/// Hands out tickets so that only the newest fetch cycle may write state.
#[derive(Debug, Default)]
pub struct FetchSequencer {
    current: u64,
}

impl FetchSequencer {
    pub fn begin(&mut self) -> u64 {
        self.current += 1;
        self.current
    }

    pub fn invalidate(&mut self) {
        self.current += 1;
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.current
    }
}
