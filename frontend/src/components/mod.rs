pub mod channel_overview;
pub mod filterbar;
pub mod pagination;
pub mod player;
pub mod scroll;
pub mod video_list;
