use crate::api::client::{api_get, api_post, ApiResponse};
use crate::models::{VideoListResponse, VideoSummary};
use crate::user_config::{SortBy, SortOrder};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum VideoType {
    #[default]
    Videos,
    Streams,
    Shorts,
}

impl VideoType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VideoType::Videos => "videos",
            VideoType::Streams => "streams",
            VideoType::Shorts => "shorts",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            VideoType::Videos => "Videos",
            VideoType::Streams => "Streams",
            VideoType::Shorts => "Shorts",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VideoListFilter {
    pub channel: String,
    pub page: u32,
    /// Sends `watch=unwatched` when set.
    pub unwatched_only: bool,
    pub sort: SortBy,
    pub order: SortOrder,
    pub video_type: VideoType,
}

impl VideoListFilter {
    pub fn to_path(&self) -> String {
        let mut path = format!(
            "/api/video/?channel={}&page={}",
            urlencoding::encode(&self.channel),
            self.page
        );
        if self.unwatched_only {
            path.push_str("&watch=unwatched");
        }
        path.push_str(&format!(
            "&sort={}&order={}&type={}",
            self.sort.as_str(),
            self.order.as_str(),
            self.video_type.as_str()
        ));
        path
    }
}

/// Body of the watched-state action; `id` is a video, channel or playlist id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WatchedStateUpdate {
    pub id: String,
    pub is_watched: bool,
}

pub const WATCHED_PATH: &str = "/api/watched/";

pub async fn load_video_list_by_filter(filter: &VideoListFilter) -> ApiResponse<VideoListResponse> {
    api_get(&filter.to_path()).await
}

pub async fn load_video_by_id(video_id: &str) -> ApiResponse<VideoSummary> {
    api_get(&format!("/api/video/{video_id}/")).await
}

pub async fn update_watched_state(update: &WatchedStateUpdate) -> ApiResponse<()> {
    api_post(WATCHED_PATH, update).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn filter(unwatched_only: bool) -> VideoListFilter {
        VideoListFilter {
            channel: "abc123".to_string(),
            page: 2,
            unwatched_only,
            sort: SortBy::Published,
            order: SortOrder::Desc,
            video_type: VideoType::Videos,
        }
    }

    #[test]
    fn path_carries_every_parameter() {
        assert_eq!(
            filter(true).to_path(),
            "/api/video/?channel=abc123&page=2&watch=unwatched&sort=published&order=desc&type=videos"
        );
    }

    #[test]
    fn watch_parameter_is_omitted_without_filter() {
        let path = filter(false).to_path();
        assert!(!path.contains("watch="));
        assert!(path.ends_with("&sort=published&order=desc&type=videos"));
    }

    #[test]
    fn channel_id_is_encoded() {
        let mut f = filter(false);
        f.channel = "a b&c".to_string();
        assert!(f.to_path().starts_with("/api/video/?channel=a%20b%26c&page=2"));
    }

    #[test]
    fn watched_body_shape() {
        let update = WatchedStateUpdate {
            id: "abc123".to_string(),
            is_watched: true,
        };
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({"id": "abc123", "is_watched": true})
        );
    }
}
