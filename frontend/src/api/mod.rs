pub mod channel;
pub mod client;
pub mod user_config;
pub mod video;
