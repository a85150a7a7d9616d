use crate::api::client::{api_get, ApiResponse};
use crate::models::{ChannelAggs, ChannelResponse};

pub fn channel_path(channel_id: &str) -> String {
    format!("/api/channel/{channel_id}/")
}

pub fn channel_aggs_path(channel_id: &str) -> String {
    format!("/api/channel/{channel_id}/aggs/")
}

pub async fn load_channel_by_id(channel_id: &str) -> ApiResponse<ChannelResponse> {
    api_get(&channel_path(channel_id)).await
}

pub async fn load_channel_aggs(channel_id: &str) -> ApiResponse<ChannelAggs> {
    api_get(&channel_aggs_path(channel_id)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aggs_path_embeds_the_channel_id() {
        assert_eq!(channel_aggs_path("abc123"), "/api/channel/abc123/aggs/");
        assert_eq!(
            channel_aggs_path("UC_x5XG1OV2P6uZZ5FSM9Ttw"),
            "/api/channel/UC_x5XG1OV2P6uZZ5FSM9Ttw/aggs/"
        );
        assert_eq!(channel_path("abc123"), "/api/channel/abc123/");
    }

    #[test]
    fn aggs_payload_is_kept_as_sent() {
        let json = r#"{
            "total_items": {"value": 128},
            "total_size": {"value": 52613349376},
            "total_duration": {"value": 183840.5, "value_str": "2d 3h 4m"}
        }"#;
        let aggs: ChannelAggs = serde_json::from_str(json).unwrap();
        assert_eq!(aggs.total_items.value, 128.0);
        assert_eq!(aggs.total_size.value, 52613349376.0);
        assert_eq!(aggs.total_duration.value, 183840.5);
        assert_eq!(aggs.total_duration.value_str, "2d 3h 4m");
    }

    #[test]
    fn aggs_without_duration_string_are_rejected() {
        let json = r#"{
            "total_items": {"value": 1},
            "total_size": {"value": 2},
            "total_duration": {"value": 3}
        }"#;
        assert!(serde_json::from_str::<ChannelAggs>(json).is_err());
    }
}
