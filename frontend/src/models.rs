use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ChannelResponse {
    pub channel_id: String,
    pub channel_name: String,
    #[serde(default)]
    pub channel_subs: i64,
    #[serde(default)]
    pub channel_subscribed: bool,
    #[serde(default)]
    pub channel_thumb_url: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AggValue {
    pub value: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DurationAggValue {
    pub value: f64,
    pub value_str: String,
}

/// Server-side totals over all videos of one channel.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ChannelAggs {
    pub total_items: AggValue,
    pub total_size: AggValue,
    pub total_duration: DurationAggValue,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct VideoPlayer {
    #[serde(default)]
    pub watched: bool,
    #[serde(default)]
    pub duration: f64,
    #[serde(default)]
    pub duration_str: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct VideoSummary {
    pub youtube_id: String,
    pub title: String,
    #[serde(default)]
    pub published: String,
    #[serde(default)]
    pub vid_thumb_url: String,
    #[serde(default)]
    pub media_url: String,
    #[serde(default)]
    pub player: VideoPlayer,
}

// The backend sends `false` instead of null/[] for exhausted page ranges.
#[derive(Deserialize)]
#[serde(untagged)]
enum ValueOrFalse<T> {
    Value(T),
    Flag(bool),
}

fn value_or_false<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(match Option::<ValueOrFalse<T>>::deserialize(deserializer)? {
        Some(ValueOrFalse::Value(value)) => Some(value),
        Some(ValueOrFalse::Flag(_)) | None => None,
    })
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct Pagination {
    #[serde(default)]
    pub page_size: u32,
    #[serde(default)]
    pub current_page: u32,
    #[serde(default, deserialize_with = "value_or_false")]
    pub prev_pages: Option<Vec<u32>>,
    #[serde(default)]
    pub next_pages: Vec<u32>,
    #[serde(default, deserialize_with = "value_or_false")]
    pub last_page: Option<u32>,
    #[serde(default)]
    pub total_hits: u64,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct VideoListResponse {
    #[serde(default)]
    pub data: Vec<VideoSummary>,
    #[serde(default)]
    pub paginate: Option<Pagination>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ErrorResponse {
    #[serde(alias = "error", alias = "detail")]
    pub message: String,
}
