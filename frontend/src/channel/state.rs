use crate::channel::fetch::ChannelPageState;
use std::rc::Rc;
use yew::prelude::*;

/// View-local state of the channel page: the refresh counter and the last resolved cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelViewState {
    pub refresh: u32,
    resolved_for: String,
    page_state: ChannelPageState,
}

impl Default for ChannelViewState {
    fn default() -> Self {
        Self {
            refresh: 0,
            resolved_for: String::new(),
            page_state: ChannelPageState::Loading,
        }
    }
}

impl ChannelViewState {
    /// State to render for `channel_id`; another channel's result reads as loading.
    pub fn page_state_for(&self, channel_id: &str) -> ChannelPageState {
        if self.resolved_for == channel_id {
            self.page_state.clone()
        } else {
            ChannelPageState::Loading
        }
    }
}

pub enum ChannelViewAction {
    /// A mutation landed; one more fetch cycle is needed.
    Refresh,
    Resolved {
        channel_id: String,
        state: ChannelPageState,
    },
}

impl Reducible for ChannelViewState {
    type Action = ChannelViewAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ChannelViewAction::Refresh => Rc::new(Self {
                refresh: self.refresh.wrapping_add(1),
                ..(*self).clone()
            }),
            ChannelViewAction::Resolved { channel_id, state } => Rc::new(Self {
                refresh: self.refresh,
                resolved_for: channel_id,
                page_state: state,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::fetch::tests::{aggs, channel};
    use crate::channel::fetch::ChannelSnapshot;
    use crate::models::VideoListResponse;

    fn loaded(channel_id: &str) -> ChannelPageState {
        ChannelPageState::Loaded(Rc::new(ChannelSnapshot {
            channel: channel(channel_id),
            video_list: VideoListResponse::default(),
            aggs: aggs(),
        }))
    }

    #[test]
    fn every_refresh_counts() {
        // Two mutations finishing after the same render still bump twice.
        let state = Rc::new(ChannelViewState::default());
        let once = state.clone().reduce(ChannelViewAction::Refresh);
        let twice = once.clone().reduce(ChannelViewAction::Refresh);
        assert_eq!(once.refresh, 1);
        assert_eq!(twice.refresh, 2);
        assert_ne!(once, twice);
    }

    #[test]
    fn refresh_keeps_the_shown_page() {
        let state = Rc::new(ChannelViewState::default()).reduce(ChannelViewAction::Resolved {
            channel_id: "abc123".to_string(),
            state: loaded("abc123"),
        });
        let refreshed = state.reduce(ChannelViewAction::Refresh);
        assert_eq!(refreshed.page_state_for("abc123"), loaded("abc123"));
    }

    #[test]
    fn starts_loading() {
        let state = ChannelViewState::default();
        assert_eq!(state.page_state_for("abc123"), ChannelPageState::Loading);
    }

    #[test]
    fn switching_channel_hides_the_previous_one() {
        let state = Rc::new(ChannelViewState::default()).reduce(ChannelViewAction::Resolved {
            channel_id: "channel-a".to_string(),
            state: loaded("channel-a"),
        });
        assert_eq!(state.page_state_for("channel-a"), loaded("channel-a"));
        assert_eq!(state.page_state_for("channel-b"), ChannelPageState::Loading);
    }

    #[test]
    fn not_found_is_kept_per_channel() {
        let state = Rc::new(ChannelViewState::default()).reduce(ChannelViewAction::Resolved {
            channel_id: "gone".to_string(),
            state: ChannelPageState::NotFound,
        });
        assert_eq!(state.page_state_for("gone"), ChannelPageState::NotFound);
    }
}
