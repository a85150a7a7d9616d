use crate::api::client::{api_get, api_post, ApiResponse};
use crate::user_config::{UserConfig, UserConfigPatch};

pub const USER_CONFIG_PATH: &str = "/api/config/user/";

pub async fn load_user_config() -> ApiResponse<UserConfig> {
    api_get(USER_CONFIG_PATH).await
}

pub async fn update_user_config(patch: &UserConfigPatch) -> ApiResponse<()> {
    api_post(USER_CONFIG_PATH, patch).await
}
